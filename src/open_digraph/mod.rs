//! Open directed multigraphs.
//!
//! An [`OpenDigraph`] is a directed multigraph together with two ordered lists of *boundary*
//! nodes: the inputs and the outputs. Boundary nodes act as ports through which graphs are
//! plugged together, either side by side ([`OpenDigraph::parallel`]) or end to end
//! ([`OpenDigraph::compose`]).
//!
//! ```text
//!   inputs            interior            outputs
//!     ●──────┐      ┌───────┐
//!            └──────│   &   │──────────────●
//!     ●─────────────│       │
//!                   └───────┘
//! ```
//!
//! # Invariants
//!
//! A graph is *well-formed* when
//!
//! 1. every boundary id names a node of the graph,
//! 2. every input node has no parent and exactly one child, with multiplicity 1,
//! 3. every output node has no child and exactly one parent, with multiplicity 1,
//! 4. every node is stored under its own id,
//! 5. parent and child maps agree: `a` lists child `b` with multiplicity `m` iff `b` lists parent
//!    `a` with multiplicity `m`.
//!
//! These are checked on demand by [`OpenDigraph::is_well_formed`], not enforced continuously.
//! Mutating operations always update both halves of an edge, so (5) is preserved by everything
//! except direct construction from inconsistent [`Node`]s.
mod arrow;
mod compose;
mod matrix;
mod traversal;
mod well_formed;

pub use matrix::graph_from_adjacency_matrix;
pub use traversal::ConnectedComponents;

use crate::error::GraphError;
use crate::node::{Node, NodeId};

use log::trace;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpenDigraph {
    inputs: Vec<NodeId>,
    outputs: Vec<NodeId>,
    nodes: BTreeMap<NodeId, Node>,
}

// Construction and accessors
impl OpenDigraph {
    /// Build a graph from explicit boundary lists and nodes.
    ///
    /// Nodes are stored by id: if two nodes share an id, the last one wins.
    /// Nothing is validated; use [`OpenDigraph::assert_is_well_formed`] for that.
    pub fn new(inputs: Vec<NodeId>, outputs: Vec<NodeId>, nodes: impl IntoIterator<Item = Node>) -> Self {
        OpenDigraph {
            inputs,
            outputs,
            nodes: nodes.into_iter().map(|n| (n.id(), n)).collect(),
        }
    }

    /// The graph with no nodes and empty boundaries.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn inputs(&self) -> &[NodeId] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[NodeId] {
        &self.outputs
    }

    /// The id-to-node map.
    pub fn nodes(&self) -> &BTreeMap<NodeId, Node> {
        &self.nodes
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Result<&Node, GraphError> {
        self.nodes.get(&id).ok_or(GraphError::MissingNode(id))
    }

    pub fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, GraphError> {
        self.nodes.get_mut(&id).ok_or(GraphError::MissingNode(id))
    }

    /// The nodes named by `ids`, silently skipping ids that are not in the graph.
    pub fn nodes_by_ids<'a>(&'a self, ids: &'a [NodeId]) -> impl Iterator<Item = &'a Node> + 'a {
        ids.iter().filter_map(|id| self.nodes.get(id))
    }

    fn check_exists(&self, ids: &[NodeId]) -> Result<(), GraphError> {
        match ids.iter().find(|id| !self.contains(**id)) {
            Some(&id) => Err(GraphError::MissingNode(id)),
            None => Ok(()),
        }
    }
}

// Boundary
impl OpenDigraph {
    /// Replace the input list. Fails if any id is not a node of the graph.
    pub fn set_inputs(&mut self, inputs: Vec<NodeId>) -> Result<(), GraphError> {
        self.check_exists(&inputs)?;
        self.inputs = inputs;
        Ok(())
    }

    /// Replace the output list. Fails if any id is not a node of the graph.
    pub fn set_outputs(&mut self, outputs: Vec<NodeId>) -> Result<(), GraphError> {
        self.check_exists(&outputs)?;
        self.outputs = outputs;
        Ok(())
    }

    /// Append `id` to the inputs unless it is already there.
    pub fn add_input_id(&mut self, id: NodeId) -> Result<(), GraphError> {
        self.check_exists(&[id])?;
        if !self.inputs.contains(&id) {
            self.inputs.push(id);
        }
        Ok(())
    }

    /// Append `id` to the outputs unless it is already there.
    pub fn add_output_id(&mut self, id: NodeId) -> Result<(), GraphError> {
        self.check_exists(&[id])?;
        if !self.outputs.contains(&id) {
            self.outputs.push(id);
        }
        Ok(())
    }

    /// An id not used anywhere in the graph: one more than the largest node or boundary id.
    ///
    /// Boundary ids count as used even when they have no backing node, so an id handed out here
    /// can never alias a dangling port. Fails with [`GraphError::IdOverflow`] once `usize::MAX`
    /// is in use.
    pub fn new_id(&self) -> Result<NodeId, GraphError> {
        let boundary = self.inputs.iter().chain(self.outputs.iter()).max();
        match boundary.max(self.nodes.keys().next_back()) {
            None => Ok(NodeId(0)),
            Some(id) => id.0.checked_add(1).map(NodeId).ok_or(GraphError::IdOverflow(1)),
        }
    }
}

// Edges
impl OpenDigraph {
    /// Add one edge `src → tgt`.
    pub fn add_edge(&mut self, src: NodeId, tgt: NodeId) -> Result<(), GraphError> {
        self.check_exists(&[src, tgt])?;
        self.link(src, tgt)
    }

    pub fn add_edges(&mut self, edges: &[(NodeId, NodeId)]) -> Result<(), GraphError> {
        self.check_edges(edges)?;
        for &(src, tgt) in edges {
            self.link(src, tgt)?;
        }
        Ok(())
    }

    /// Remove one edge `src → tgt`, if there is one.
    pub fn remove_edge(&mut self, src: NodeId, tgt: NodeId) -> Result<(), GraphError> {
        self.check_exists(&[src, tgt])?;
        trace!("remove_edge({} -> {})", src, tgt);
        self.node_mut(src)?.remove_child_once(tgt);
        self.node_mut(tgt)?.remove_parent_once(src);
        Ok(())
    }

    pub fn remove_edges(&mut self, edges: &[(NodeId, NodeId)]) -> Result<(), GraphError> {
        self.check_edges(edges)?;
        for &(src, tgt) in edges {
            self.remove_edge(src, tgt)?;
        }
        Ok(())
    }

    /// Remove every edge `src → tgt` regardless of multiplicity.
    pub fn remove_parallel_edges(&mut self, src: NodeId, tgt: NodeId) -> Result<(), GraphError> {
        self.check_exists(&[src, tgt])?;
        trace!("remove_parallel_edges({} -> {})", src, tgt);
        self.node_mut(src)?.remove_child_id(tgt);
        self.node_mut(tgt)?.remove_parent_id(src);
        Ok(())
    }

    pub fn remove_several_parallel_edges(&mut self, edges: &[(NodeId, NodeId)]) -> Result<(), GraphError> {
        self.check_edges(edges)?;
        for &(src, tgt) in edges {
            self.remove_parallel_edges(src, tgt)?;
        }
        Ok(())
    }

    // Both endpoints are known to exist; the `?`s cannot fire.
    fn link(&mut self, src: NodeId, tgt: NodeId) -> Result<(), GraphError> {
        trace!("add_edge({} -> {})", src, tgt);
        self.node_mut(src)?.add_child_id(tgt);
        self.node_mut(tgt)?.add_parent_id(src);
        Ok(())
    }

    /// Add `m` parallel edges `src → tgt` in one step.
    pub(crate) fn link_many(&mut self, src: NodeId, tgt: NodeId, m: usize) -> Result<(), GraphError> {
        trace!("add_edge({} -> {}) x{}", src, tgt, m);
        self.node_mut(src)?.add_child_edges(tgt, m);
        self.node_mut(tgt)?.add_parent_edges(src, m);
        Ok(())
    }

    fn check_edges(&self, edges: &[(NodeId, NodeId)]) -> Result<(), GraphError> {
        edges
            .iter()
            .try_for_each(|&(src, tgt)| self.check_exists(&[src, tgt]))
    }
}

// Nodes
impl OpenDigraph {
    /// Add a node labeled `label` under a fresh id, with one edge from each of `parents` and one
    /// edge to each of `children`. Repeated ids give parallel edges.
    ///
    /// Returns the id of the new node.
    pub fn add_node(
        &mut self,
        label: impl Into<String>,
        parents: &[NodeId],
        children: &[NodeId],
    ) -> Result<NodeId, GraphError> {
        self.check_exists(parents)?;
        self.check_exists(children)?;

        let id = self.new_id()?;
        self.nodes.insert(id, Node::isolated(id, label));
        for &parent in parents {
            self.link(parent, id)?;
        }
        for &child in children {
            self.link(id, child)?;
        }
        Ok(id)
    }

    /// Add an input node with the given id, feeding `child`.
    pub fn add_input_node(&mut self, id: NodeId, child: NodeId) -> Result<(), GraphError> {
        self.check_fresh(id)?;
        self.check_exists(&[child])?;
        self.nodes.insert(id, Node::isolated(id, ""));
        self.inputs.push(id);
        self.link(id, child)
    }

    /// Add an output node with the given id, fed by `parent`.
    pub fn add_output_node(&mut self, id: NodeId, parent: NodeId) -> Result<(), GraphError> {
        self.check_fresh(id)?;
        self.check_exists(&[parent])?;
        self.nodes.insert(id, Node::isolated(id, ""));
        self.outputs.push(id);
        self.link(parent, id)
    }

    /// Remove a node, all edges touching it, and its boundary entries.
    /// Does nothing if `id` is not in the graph.
    pub fn remove_id(&mut self, id: NodeId) {
        let Some(node) = self.nodes.remove(&id) else {
            return;
        };
        trace!("remove_id({})", id);

        for parent in node.parents().keys() {
            if let Some(p) = self.nodes.get_mut(parent) {
                p.remove_child_id(id);
            }
        }
        for child in node.children().keys() {
            if let Some(c) = self.nodes.get_mut(child) {
                c.remove_parent_id(id);
            }
        }

        self.inputs.retain(|&i| i != id);
        self.outputs.retain(|&o| o != id);
    }

    pub fn remove_nodes_by_id(&mut self, ids: &[NodeId]) {
        for &id in ids {
            self.remove_id(id);
        }
    }

    fn check_fresh(&self, id: NodeId) -> Result<(), GraphError> {
        if self.contains(id) {
            Err(GraphError::DuplicateNode(id))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for OpenDigraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids = |xs: &[NodeId]| xs.iter().map(|i| i.0).collect::<Vec<_>>();
        write!(f, "({:?}, {:?}, [", ids(&self.inputs), ids(&self.outputs))?;
        for (i, node) in self.nodes.values().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", node)?;
        }
        write!(f, "])")
    }
}
