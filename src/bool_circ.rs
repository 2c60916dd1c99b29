//! Boolean circuits: open digraphs whose nodes are logic gates.
//!
//! A [`BoolCirc`] is a validated wrapper around an [`OpenDigraph`]. Build and compose circuits
//! as plain graphs, then promote the result with [`BoolCirc::new`].
use crate::error::GraphError;
use crate::node::NodeId;
use crate::open_digraph::OpenDigraph;

use log::debug;
use std::collections::BTreeMap;
use std::fmt;

/// The gate alphabet, identified by node label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    /// Empty label: a wire that copies its single input to every child.
    Copy,
    /// `~`
    Not,
    /// `|`
    Or,
    /// `&`
    And,
}

impl Gate {
    pub fn from_label(label: &str) -> Option<Gate> {
        match label {
            "" => Some(Gate::Copy),
            "~" => Some(Gate::Not),
            "|" => Some(Gate::Or),
            "&" => Some(Gate::And),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Gate::Copy => "",
            Gate::Not => "~",
            Gate::Or => "|",
            Gate::And => "&",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An acyclic, well-formed open digraph labeled by [`Gate`]s, where every copy node has exactly
/// one parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolCirc {
    graph: OpenDigraph,
}

impl BoolCirc {
    /// Wrap `graph`, failing with [`GraphError::NotWellFormed`] if it is not a valid circuit.
    pub fn new(graph: OpenDigraph) -> Result<Self, GraphError> {
        let circ = BoolCirc { graph };
        if !circ.is_well_formed() {
            return Err(GraphError::NotWellFormed);
        }
        Ok(circ)
    }

    /// Wrap `graph` without checking anything.
    pub fn new_unchecked(graph: OpenDigraph) -> Self {
        BoolCirc { graph }
    }

    pub fn is_well_formed(&self) -> bool {
        let bad_node = self.graph.nodes().values().find(|node| match Gate::from_label(node.label()) {
            Some(Gate::Copy) => node.indegree() != 1,
            Some(_) => false,
            None => true,
        });
        if let Some(node) = bad_node {
            debug!("not a circuit: node {} ({:?})", node.id(), node.label());
            return false;
        }
        self.graph.is_well_formed() && !self.graph.is_cyclic()
    }

    pub fn graph(&self) -> &OpenDigraph {
        &self.graph
    }

    pub fn into_inner(self) -> OpenDigraph {
        self.graph
    }

    /// The gate at each node. Nodes with a label outside the alphabet are skipped; a checked
    /// circuit has none.
    pub fn gates(&self) -> BTreeMap<NodeId, Gate> {
        self.graph
            .nodes()
            .iter()
            .filter_map(|(&id, node)| Gate::from_label(node.label()).map(|gate| (id, gate)))
            .collect()
    }
}

impl TryFrom<OpenDigraph> for BoolCirc {
    type Error = GraphError;

    fn try_from(graph: OpenDigraph) -> Result<Self, Self::Error> {
        BoolCirc::new(graph)
    }
}

impl AsRef<OpenDigraph> for BoolCirc {
    fn as_ref(&self) -> &OpenDigraph {
        &self.graph
    }
}
