use open_digraphs::prelude::*;

use super::strategy::{dag_matrix_strategy, is_symmetric, matrix_strategy};

use proptest::{prop_assert, prop_assert_eq, proptest};

#[test]
fn test_matrix_scenario() {
    let m = [
        [0u8, 1, 1, 0, 0],
        [0, 0, 0, 1, 2],
        [0, 0, 0, 2, 0],
        [1, 0, 0, 0, 1],
        [0, 0, 0, 0, 0],
    ];
    let g = graph_from_adjacency_matrix(&m).unwrap();
    assert_eq!(g.len(), 5);
    let n0 = g.node(NodeId(0)).unwrap();
    assert_eq!(n0.children(), &adjacency([(1, 1), (2, 1)]));
    assert_eq!(n0.parents(), &adjacency([(3, 1)]));
    assert!(g.inputs().is_empty() && g.outputs().is_empty());
}

proptest! {
    #[test]
    fn matrix_round_trip(m in matrix_strategy()) {
        let g = graph_from_adjacency_matrix(&m).unwrap();
        prop_assert!(is_symmetric(&g));
        prop_assert_eq!(g.adjacency_matrix(), m);
        prop_assert_eq!(graph_from_adjacency_matrix(&g.adjacency_matrix()).unwrap(), g);
    }

    #[test]
    fn dag_matrices_are_acyclic(m in dag_matrix_strategy()) {
        let g = graph_from_adjacency_matrix(&m).unwrap();
        prop_assert!(!g.is_cyclic());

        // any back edge closes a cycle
        let n = m.len();
        if n > 1 {
            let mut g = g;
            g.add_edge(NodeId(n - 1), NodeId(0)).unwrap();
            prop_assert_eq!(g.is_cyclic(), {
                // 0 must reach n - 1 for the new edge to close a cycle
                let mut reach = vec![false; n];
                reach[0] = true;
                for i in 0..n {
                    if reach[i] {
                        for j in i + 1..n {
                            if m[i][j] > 0 {
                                reach[j] = true;
                            }
                        }
                    }
                }
                reach[n - 1]
            });
        }
    }

    #[test]
    fn random_forms(seed in 0u64..1000, n in 1usize..12, bound in 0usize..4) {
        use rand::{rngs::StdRng, SeedableRng};
        let mut rng = StdRng::seed_from_u64(seed);
        for form in GraphForm::ALL {
            let g = OpenDigraph::random_with(&mut rng, n, bound, 0, 0, form).unwrap();
            prop_assert_eq!(g.len(), n);
            prop_assert!(g.is_well_formed());
            match form {
                GraphForm::Dag => prop_assert!(!g.is_cyclic()),
                GraphForm::Undirected | GraphForm::LoopFreeUndirected => {
                    let a = g.adjacency_matrix();
                    prop_assert!((0..n).all(|i| (0..n).all(|j| a[i][j] == a[j][i])));
                }
                _ => {}
            }
            if matches!(form, GraphForm::LoopFree | GraphForm::LoopFreeUndirected | GraphForm::Dag | GraphForm::Oriented) {
                prop_assert!(g.nodes().values().all(|node| !node.children().contains_key(&node.id())));
            }
        }
    }
}
