use open_digraphs::prelude::*;

use crate::open_digraph::strategy::open_digraph_strategy;

use proptest::{prop_assert, prop_assert_eq, proptest};

proptest! {
    #[test]
    fn dot_round_trip(g in open_digraph_strategy(None, None), verbose: bool) {
        let text = g.to_dot(verbose);
        prop_assert!(text.starts_with("digraph G {\n"), "output does not start with digraph header");
        prop_assert_eq!(OpenDigraph::from_dot(&text).unwrap(), g);
    }

    #[test]
    fn dot_round_trip_after_composition(g in open_digraph_strategy(None, None), h in open_digraph_strategy(None, None)) {
        let gh = (&g | &h).unwrap();
        let parsed = OpenDigraph::from_dot(&gh.to_dot(false)).unwrap();
        prop_assert!(parsed.is_well_formed());
        prop_assert_eq!(parsed, gh);
    }
}

#[test_log::test]
fn test_bool_circ_through_dot() {
    let text = r#"digraph G {
    v0 [label="|", input=0];
    v1 [label="|", input=1];
    v2 [label="&"];
    v3 [label="", output=0];
    v0 -> v2 [label="1"];
    v1 -> v2 [label="1"];
    v2 -> v3 [label="1"];
}
"#;
    let g = OpenDigraph::from_dot(text).unwrap();
    assert_eq!(g.inputs(), &[NodeId(0), NodeId(1)]);
    assert_eq!(g.outputs(), &[NodeId(3)]);
    let circ = BoolCirc::new(g).unwrap();
    assert_eq!(circ.graph().to_dot(false), text);
}
