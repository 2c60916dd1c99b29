use open_digraphs::prelude::*;

use super::strategy::{is_symmetric, open_digraph_strategy};

use proptest::{prop_assert, prop_assert_eq, proptest};

fn ids(xs: &[usize]) -> Vec<NodeId> {
    xs.iter().copied().map(NodeId).collect()
}

#[test_log::test]
fn test_node_degrees() {
    let n = Node::new(NodeId(0), "i", Adjacency::new(), adjacency([(1, 1)]));
    assert_eq!(n.indegree(), 0);
    assert_eq!(n.outdegree(), 1);
    assert_eq!(n.degree(), 1);
}

#[test_log::test]
fn test_parent_multiplicity() {
    let mut n = Node::isolated(NodeId(0), "x");
    n.add_parent_id(NodeId(7));
    n.add_parent_id(NodeId(7));
    assert_eq!(n.parents()[&NodeId(7)], 2);
    n.remove_parent_once(NodeId(7));
    assert_eq!(n.parents()[&NodeId(7)], 1);
    n.remove_parent_once(NodeId(7));
    assert!(!n.parents().contains_key(&NodeId(7)));
}

#[test_log::test]
fn test_iparallel_disjoint_ids() {
    let mut g = OpenDigraph::new(
        ids(&[0]),
        ids(&[1]),
        [Node::isolated(NodeId(0), "a"), Node::isolated(NodeId(1), "b")],
    );
    let h = OpenDigraph::new(
        ids(&[2]),
        ids(&[3]),
        [Node::isolated(NodeId(2), "c"), Node::isolated(NodeId(3), "d")],
    );
    let h0 = h.clone();

    g.iparallel(&h).unwrap();
    assert_eq!(h, h0);
    assert_eq!(g.inputs(), ids(&[0, 2]).as_slice());
    assert_eq!(g.outputs(), ids(&[1, 3]).as_slice());
    assert_eq!(g.node_ids().collect::<Vec<_>>(), ids(&[0, 1, 2, 3]));
}

#[test_log::test]
fn test_build_step_by_step() {
    let mut g = OpenDigraph::empty();
    let and = g.add_node("&", &[], &[]).unwrap();
    let not = g.add_node("~", &[and], &[]).unwrap();
    g.add_input_node(NodeId(10), and).unwrap();
    g.add_input_node(NodeId(11), and).unwrap();
    g.add_output_node(NodeId(12), not).unwrap();
    assert!(g.is_well_formed());
    assert!(g.assert_is_well_formed().is_ok());
    assert_eq!(g.new_id().unwrap(), NodeId(13));

    // a second edge into an output breaks the port contract
    g.add_edge(and, NodeId(12)).unwrap();
    assert!(!g.is_well_formed());
    assert!(matches!(g.assert_is_well_formed(), Err(GraphError::NotWellFormed)));

    g.remove_edge(and, NodeId(12)).unwrap();
    assert!(g.is_well_formed());
}

#[test_log::test]
fn test_missing_references_fail() {
    let mut g = OpenDigraph::identity(1);
    let before = g.clone();
    assert!(matches!(g.add_edge(NodeId(0), NodeId(5)), Err(GraphError::MissingNode(NodeId(5)))));
    assert!(matches!(g.remove_edge(NodeId(5), NodeId(0)), Err(GraphError::MissingNode(NodeId(5)))));
    assert!(g.add_node("x", &[NodeId(0)], &[NodeId(9)]).is_err());
    assert!(g.set_outputs(ids(&[0, 3])).is_err());
    assert!(g.node(NodeId(3)).is_err());
    assert_eq!(g, before);
}

proptest! {
    #[test]
    fn generated_graphs_are_well_formed(g in open_digraph_strategy(None, None)) {
        prop_assert!(g.is_well_formed());
        prop_assert!(is_symmetric(&g));
    }

    #[test]
    fn remove_id_keeps_symmetry(g in open_digraph_strategy(None, None), pick in 0usize..64) {
        let mut g = g;
        let victim = g.node_ids().nth(pick % g.len()).unwrap();
        g.remove_id(victim);
        prop_assert!(!g.contains(victim));
        prop_assert!(!g.inputs().contains(&victim));
        prop_assert!(!g.outputs().contains(&victim));
        prop_assert!(is_symmetric(&g));
        prop_assert!(g.nodes().values().all(|n| {
            !n.parents().contains_key(&victim) && !n.children().contains_key(&victim)
        }), "removed node still referenced by a neighbour");
    }

    #[test]
    fn shift_round_trip(g in open_digraph_strategy(None, None), by in 0isize..100) {
        let mut h = g.clone();
        h.shift_indices(by).unwrap();
        prop_assert_eq!(h.min_id().unwrap().0, g.min_id().unwrap().0 + by as usize);
        prop_assert_eq!(h.is_well_formed(), g.is_well_formed());
        h.shift_indices(-by).unwrap();
        prop_assert_eq!(h, g);
    }
}
