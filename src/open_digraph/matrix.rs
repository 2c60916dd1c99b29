use super::OpenDigraph;
use crate::error::GraphError;
use crate::node::{Adjacency, Node, NodeId};

use num_traits::{AsPrimitive, Unsigned};
use std::collections::BTreeMap;

impl OpenDigraph {
    /// Map each node id to its rank among the sorted node ids, i.e. a dense index in `0..n`.
    pub fn node_id_to_index_map(&self) -> BTreeMap<NodeId, usize> {
        self.nodes
            .keys()
            .enumerate()
            .map(|(index, &id)| (id, index))
            .collect()
    }

    /// The `n × n` adjacency matrix of the graph, where `n` is the number of nodes.
    ///
    /// Row and column `i` correspond to the `i`-th smallest node id (see
    /// [`OpenDigraph::node_id_to_index_map`]); entry `[i][j]` is the multiplicity of the edge
    /// `i → j`. Boundary lists are ignored.
    pub fn adjacency_matrix(&self) -> Vec<Vec<usize>> {
        let index = self.node_id_to_index_map();
        let n = index.len();
        let mut matrix = vec![vec![0; n]; n];
        for (id, node) in self.nodes.iter() {
            let row = &mut matrix[index[id]];
            for (child, &m) in node.children() {
                if let Some(&j) = index.get(child) {
                    row[j] = m;
                }
            }
        }
        matrix
    }
}

/// Build a graph with nodes `0..n` from a square adjacency matrix.
///
/// Entry `[i][j]` is the number of edges `i → j`. Node `i` is labeled `"i"`, and the graph has
/// no inputs or outputs.
///
/// ```rust
/// # use open_digraphs::prelude::*;
/// let g = graph_from_adjacency_matrix(&[[0u8, 2], [1, 0]]).unwrap();
/// assert_eq!(g.node(NodeId(0)).unwrap().children().get(&NodeId(1)), Some(&2));
/// assert_eq!(g.node(NodeId(0)).unwrap().parents().get(&NodeId(1)), Some(&1));
/// ```
pub fn graph_from_adjacency_matrix<T, R>(matrix: &[R]) -> Result<OpenDigraph, GraphError>
where
    T: Unsigned + AsPrimitive<usize>,
    R: AsRef<[T]>,
{
    let n = matrix.len();
    if let Some((row, r)) = matrix.iter().enumerate().find(|(_, r)| r.as_ref().len() != n) {
        return Err(GraphError::NonSquareMatrix {
            row,
            len: r.as_ref().len(),
            expected: n,
        });
    }

    let entry = |i: usize, j: usize| -> usize { matrix[i].as_ref()[j].as_() };
    let nodes = (0..n).map(|i| {
        let children = nonzero((0..n).map(|j| (j, entry(i, j))));
        let parents = nonzero((0..n).map(|j| (j, entry(j, i))));
        Node::new(NodeId(i), i.to_string(), parents, children)
    });

    Ok(OpenDigraph::new(vec![], vec![], nodes.collect::<Vec<_>>()))
}

fn nonzero(pairs: impl Iterator<Item = (usize, usize)>) -> Adjacency {
    pairs.filter(|&(_, m)| m > 0).map(|(k, m)| (NodeId(k), m)).collect()
}
