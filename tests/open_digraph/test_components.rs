use open_digraphs::prelude::*;

use super::strategy::open_digraph_strategy;

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn components_partition_nodes(g in open_digraph_strategy(None, None)) {
        let cc = g.connected_components();
        prop_assert_eq!(cc.component_of.len(), g.len());
        prop_assert_eq!(cc.graphs.iter().map(|c| c.len()).sum::<usize>(), g.len());
        prop_assert_eq!(cc.graphs.iter().map(|c| c.inputs().len()).sum::<usize>(), g.inputs().len());
        prop_assert_eq!(cc.graphs.iter().map(|c| c.outputs().len()).sum::<usize>(), g.outputs().len());
        for c in &cc.graphs {
            prop_assert!(c.is_well_formed());
            prop_assert_eq!(c.connected_components().count(), 1);
        }
    }

    #[test]
    fn parallel_adds_components(f in open_digraph_strategy(None, None), g in open_digraph_strategy(None, None)) {
        let fg = (&f | &g).unwrap();
        prop_assert_eq!(
            fg.connected_components().count(),
            f.connected_components().count() + g.connected_components().count()
        );
    }

    #[test]
    fn edges_only_within_components(g in open_digraph_strategy(None, None)) {
        let cc = g.connected_components();
        for node in g.nodes().values() {
            let c = cc.component_of[&node.id()];
            prop_assert!(node.children().keys().all(|k| cc.component_of[k] == c));
        }
    }
}
