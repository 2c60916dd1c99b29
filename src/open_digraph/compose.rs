//! Renumbering, parallel and sequential composition.
//!
//! Both composites first translate the ids of one operand so the two id ranges are disjoint
//! (a *disjoint-range shift*) and then take the union of the node maps. The operands passed by
//! reference are never modified: the shifted operand is always a clone.
use super::OpenDigraph;
use crate::error::GraphError;
use crate::node::{Node, NodeId};

use log::debug;

impl OpenDigraph {
    /// The smallest node id, or `None` if there are no nodes. Boundary lists are not consulted.
    pub fn min_id(&self) -> Option<NodeId> {
        self.nodes.keys().next().copied()
    }

    /// The largest node id, or `None` if there are no nodes. Boundary lists are not consulted.
    pub fn max_id(&self) -> Option<NodeId> {
        self.nodes.keys().next_back().copied()
    }

    /// Add `n` to every id in the graph: node ids, neighbour ids and boundary entries.
    ///
    /// Fails without modifying the graph if any id would drop below zero or overflow.
    pub fn shift_indices(&mut self, n: isize) -> Result<(), GraphError> {
        let fits = |id: &NodeId| id.0.checked_add_signed(n).is_some();
        let all_fit = self.inputs.iter().all(fits)
            && self.outputs.iter().all(fits)
            && self.nodes.values().all(|node| {
                fits(&node.id())
                    && node.parents().keys().all(fits)
                    && node.children().keys().all(fits)
            });
        if !all_fit {
            return Err(GraphError::IdOverflow(n));
        }
        if n == 0 {
            return Ok(());
        }
        debug!("shift_indices({}) on {} nodes", n, self.nodes.len());

        let shift = |id: NodeId| NodeId(id.0.wrapping_add_signed(n));
        self.inputs.iter_mut().for_each(|i| *i = shift(*i));
        self.outputs.iter_mut().for_each(|o| *o = shift(*o));
        self.nodes = std::mem::take(&mut self.nodes)
            .into_values()
            .map(|mut node| {
                node.shift(n);
                (node.id(), node)
            })
            .collect();
        Ok(())
    }

    /// A copy of `other` whose node ids all lie above those of `self`.
    fn disjoint_copy(&self, other: &OpenDigraph) -> Result<OpenDigraph, GraphError> {
        let mut copy = other.clone();
        if let (Some(max), Some(min)) = (self.max_id(), other.min_id()) {
            if max >= min {
                let offset = (max.0 - min.0)
                    .checked_add(1)
                    .and_then(|offset| isize::try_from(offset).ok())
                    .ok_or(GraphError::IdOverflow(isize::MAX))?;
                copy.shift_indices(offset)?;
            }
        }
        Ok(copy)
    }

    // Caller guarantees the id ranges are disjoint.
    fn absorb_nodes(&mut self, nodes: impl IntoIterator<Item = (NodeId, Node)>) {
        self.nodes.extend(nodes);
    }

    /// Place `other` next to `self`, in place.
    ///
    /// The inputs (resp. outputs) of the result are those of `self` followed by those of `other`.
    /// `other` is left untouched.
    pub fn iparallel(&mut self, other: &OpenDigraph) -> Result<(), GraphError> {
        let copy = self.disjoint_copy(other)?;
        debug!(
            "iparallel: {} nodes + {} nodes (from {:?})",
            self.nodes.len(),
            copy.nodes.len(),
            copy.min_id()
        );
        self.inputs.extend(copy.inputs);
        self.outputs.extend(copy.outputs);
        self.absorb_nodes(copy.nodes);
        Ok(())
    }

    /// The parallel composite of `g1` and `g2`, leaving both untouched.
    pub fn parallel(g1: &OpenDigraph, g2: &OpenDigraph) -> Result<OpenDigraph, GraphError> {
        let mut g = g1.clone();
        g.iparallel(g2)?;
        Ok(g)
    }

    /// Plug the outputs of `f` into the inputs of `self`, in place.
    ///
    /// The `i`-th output of `f` becomes the parent of the `i`-th input of `self`. Afterwards the
    /// inputs of `self` are the (renumbered) inputs of `f`; the outputs are unchanged.
    /// `f` is left untouched.
    ///
    /// Fails if `self` does not have exactly as many inputs as `f` has outputs.
    pub fn icompose(&mut self, f: &OpenDigraph) -> Result<(), GraphError> {
        if self.inputs.len() != f.outputs.len() {
            return Err(GraphError::ArityMismatch {
                expected: self.inputs.len(),
                found: f.outputs.len(),
            });
        }

        let copy = self.disjoint_copy(f)?;
        // ports must exist on both sides before anything is merged
        copy.check_exists(&copy.outputs)?;
        self.check_exists(&self.inputs)?;
        debug!(
            "icompose: {} nodes after {} nodes through {} ports",
            self.nodes.len(),
            copy.nodes.len(),
            self.inputs.len()
        );

        let ports: Vec<(NodeId, NodeId)> = copy
            .outputs
            .iter()
            .copied()
            .zip(self.inputs.iter().copied())
            .collect();
        self.absorb_nodes(copy.nodes);
        for (src, tgt) in ports {
            self.link(src, tgt)?;
        }

        self.inputs = copy.inputs;
        Ok(())
    }

    /// The sequential composite `f1 ∘ f2`: the outputs of `f2` feed the inputs of `f1`.
    ///
    /// The result has the inputs of `f2` and the outputs of `f1`. Neither operand is modified.
    pub fn compose(f1: &OpenDigraph, f2: &OpenDigraph) -> Result<OpenDigraph, GraphError> {
        let mut g = f1.clone();
        g.icompose(f2)?;
        Ok(g)
    }

    /// The identity on `n` wires: nodes `0..n`, each its own only parent and child, and each both
    /// an input and an output.
    pub fn identity(n: usize) -> OpenDigraph {
        let ids: Vec<NodeId> = (0..n).map(NodeId).collect();
        let nodes: Vec<Node> = ids
            .iter()
            .map(|&id| {
                let mut node = Node::isolated(id, "");
                node.add_parent_id(id);
                node.add_child_id(id);
                node
            })
            .collect();
        OpenDigraph::new(ids.clone(), ids, nodes)
    }
}
