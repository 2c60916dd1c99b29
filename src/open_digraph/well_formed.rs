use super::OpenDigraph;
use crate::error::GraphError;
use crate::node::{Adjacency, Node, NodeId};

// A port has exactly one edge on one side, of multiplicity 1, and nothing on the other.
fn is_port(single: &Adjacency, none: &Adjacency) -> bool {
    none.is_empty() && single.len() == 1 && single.values().all(|&m| m == 1)
}

impl OpenDigraph {
    /// Returns true if the graph satisfies all the structural invariants listed in the
    /// [module documentation](crate::open_digraph).
    pub fn is_well_formed(&self) -> bool {
        self.boundary_exists()
            && self.ports_are_simple()
            && self.keys_match_ids()
            && self.adjacency_is_symmetric()
    }

    /// Like [`OpenDigraph::is_well_formed`], but returns an error instead of `false`.
    pub fn assert_is_well_formed(&self) -> Result<(), GraphError> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(GraphError::NotWellFormed)
        }
    }

    fn boundary_exists(&self) -> bool {
        self.inputs
            .iter()
            .chain(self.outputs.iter())
            .all(|id| self.nodes.contains_key(id))
    }

    fn ports_are_simple(&self) -> bool {
        let inputs_ok = self
            .nodes_by_ids(&self.inputs)
            .all(|n| is_port(n.children(), n.parents()));
        let outputs_ok = self
            .nodes_by_ids(&self.outputs)
            .all(|n| is_port(n.parents(), n.children()));
        inputs_ok && outputs_ok
    }

    fn keys_match_ids(&self) -> bool {
        self.nodes.iter().all(|(&id, node)| node.id() == id)
    }

    fn adjacency_is_symmetric(&self) -> bool {
        // every neighbour must record `id` on the mirrored side with the same multiplicity
        let agrees = |id: NodeId, adjacency: &Adjacency, mirror: fn(&Node) -> &Adjacency| {
            adjacency.iter().all(|(other, &m)| {
                self.nodes
                    .get(other)
                    .and_then(|n| mirror(n).get(&id))
                    .is_some_and(|&k| k == m)
            })
        };

        self.nodes.iter().all(|(&id, node)| {
            agrees(id, node.children(), Node::parents) && agrees(id, node.parents(), Node::children)
        })
    }
}
