//! Errors raised by graph construction, mutation and composition.
use crate::node::NodeId;

use std::fmt;
use thiserror::Error;

/// Which side of the boundary a request refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Input,
    Output,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Boundary::Input => write!(f, "input"),
            Boundary::Output => write!(f, "output"),
        }
    }
}

#[derive(Debug, Error)]
pub enum GraphError {
    /// An operation referred to a node id that is not in the graph.
    #[error("node {0} does not exist")]
    MissingNode(NodeId),

    /// A node was inserted with an explicit id that is already taken.
    #[error("node {0} already exists")]
    DuplicateNode(NodeId),

    #[error("graph is not well-formed")]
    NotWellFormed,

    /// Sequential composition with mismatched boundaries.
    #[error("arity mismatch: {expected} inputs but {found} outputs")]
    ArityMismatch { expected: usize, found: usize },

    #[error("matrix is not square: row {row} has length {len}, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("a symmetric matrix cannot also be oriented or acyclic")]
    IncompatibleShape,

    #[error("unknown graph form {0:?}")]
    UnknownForm(String),

    #[error("bound {bound} is too small to draw {n} distinct integers")]
    BoundTooSmall { n: usize, bound: usize },

    /// Requested more boundary nodes than the graph has nodes.
    #[error("cannot pick {inputs} inputs and {outputs} outputs among {nodes} nodes")]
    BoundaryCount {
        inputs: usize,
        outputs: usize,
        nodes: usize,
    },

    #[error("only {available} candidate {kind} nodes, {requested} requested")]
    NotEnoughCandidates {
        kind: Boundary,
        requested: usize,
        available: usize,
    },

    /// Renumbering would move an id out of range.
    #[error("shifting ids by {0} leaves the representable range")]
    IdOverflow(isize),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
