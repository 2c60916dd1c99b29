use {
    open_digraphs::prelude::*,
    proptest::{
        collection::vec,
        prelude::{Just, Strategy},
        strategy::BoxedStrategy,
    },
};

const MAX_NODES: usize = 6;
const MAX_ARITY: usize = 4;
const MAX_MULTIPLICITY: usize = 2;

fn arity_strategy(pinned: Option<usize>) -> BoxedStrategy<usize> {
    match pinned {
        Some(k) => Just(k).boxed(),
        None => (0..MAX_ARITY).boxed(),
    }
}

/// Square matrices of size `1..MAX_NODES` with entries in `0..=MAX_MULTIPLICITY`.
pub(crate) fn matrix_strategy() -> BoxedStrategy<Vec<Vec<usize>>> {
    (1..MAX_NODES)
        .prop_flat_map(|n| vec(vec(0..=MAX_MULTIPLICITY, n), n))
        .boxed()
}

/// Like [`matrix_strategy`], but with every edge going from a smaller to a larger index.
pub(crate) fn dag_matrix_strategy() -> BoxedStrategy<Vec<Vec<usize>>> {
    matrix_strategy()
        .prop_map(|mut m| {
            let n = m.len();
            for i in 0..n {
                for j in 0..=i {
                    m[i][j] = 0;
                }
            }
            m
        })
        .boxed()
}

/// The interior given by `matrix`, with a fresh input port feeding each node in `inputs` and a
/// fresh output port fed by each node in `outputs`, in order.
pub(crate) fn with_ports(matrix: &[Vec<usize>], inputs: &[usize], outputs: &[usize]) -> OpenDigraph {
    let mut g = graph_from_adjacency_matrix(matrix).expect("square by construction");
    for &i in inputs {
        let port = g.new_id().expect("ids are small");
        g.add_input_node(port, NodeId(i)).expect("target exists");
    }
    for &o in outputs {
        let port = g.new_id().expect("ids are small");
        g.add_output_node(port, NodeId(o)).expect("source exists");
    }
    g
}

/// Well-formed open digraphs with node ids `0..n`.
///
/// `source` and `target` pin the number of inputs and outputs.
pub(crate) fn open_digraph_strategy(source: Option<usize>, target: Option<usize>) -> BoxedStrategy<OpenDigraph> {
    (matrix_strategy(), arity_strategy(source), arity_strategy(target))
        .prop_flat_map(|(matrix, s, t)| {
            let n = matrix.len();
            (Just(matrix), vec(0..n, s), vec(0..n, t))
        })
        .prop_map(|(matrix, inputs, outputs)| with_ports(&matrix, &inputs, &outputs))
        .boxed()
}

/// Two graphs `[f, g]` such that `f >> g` is defined.
pub(crate) fn composable_strategy() -> BoxedStrategy<[OpenDigraph; 2]> {
    open_digraph_strategy(None, None)
        .prop_flat_map(|f| {
            let t = f.target();
            (Just(f), open_digraph_strategy(Some(t), None))
        })
        .prop_map(|(f, g)| [f, g])
        .boxed()
}

/// Three graphs `[f, g, h]` such that `f >> g >> h` is defined.
pub(crate) fn three_composable_strategy() -> BoxedStrategy<[OpenDigraph; 3]> {
    composable_strategy()
        .prop_flat_map(|[f, g]| {
            let t = g.target();
            (Just(f), Just(g), open_digraph_strategy(Some(t), None))
        })
        .prop_map(|(f, g, h)| [f, g, h])
        .boxed()
}

/// Parent and child maps agree everywhere.
pub(crate) fn is_symmetric(g: &OpenDigraph) -> bool {
    g.nodes().values().all(|a| {
        a.children()
            .iter()
            .all(|(b, &m)| g.node(*b).is_ok_and(|b| b.parents().get(&a.id()) == Some(&m)))
            && a.parents()
                .iter()
                .all(|(b, &m)| g.node(*b).is_ok_and(|b| b.children().get(&a.id()) == Some(&m)))
    })
}
