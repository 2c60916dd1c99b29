//! # Open Digraphs
//!
//! An [OpenDigraph](crate::open_digraph::OpenDigraph) is a directed multigraph with an ordered
//! list of *input* nodes and an ordered list of *output* nodes. The boundary nodes are ports:
//! two graphs can be placed side by side (parallel composition) or plugged end to end, the
//! outputs of one feeding the inputs of the other (sequential composition).
//!
//! ```text
//!            ┌───┐
//!     ●──────│   │         ┌───┐
//!            │ & │─────────│ ~ │──────●
//!     ●──────│   │         └───┘
//!            └───┘
//! ```
//!
//! The picture above is the boolean circuit `~(x & y)`: two inputs, one output, and two gates.
//!
//! # Example
//!
//! Build the circuit from two smaller graphs:
//!
//! ```rust
//! use open_digraphs::prelude::*;
//!
//! // a single gate `label` with `arity` inputs and one output
//! fn gate(label: &str, arity: usize) -> OpenDigraph {
//!     let mut g = OpenDigraph::empty();
//!     let body = g.add_node(label, &[], &[]).unwrap();
//!     for i in 0..arity {
//!         g.add_input_node(NodeId(1 + i), body).unwrap();
//!     }
//!     g.add_output_node(NodeId(1 + arity), body).unwrap();
//!     g
//! }
//!
//! let and = gate("&", 2);
//! let not = gate("~", 1);
//!
//! // `f >> g` feeds the outputs of `f` into the inputs of `g`
//! let nand = (&and >> &not).unwrap();
//! assert_eq!(nand.source(), 2);
//! assert_eq!(nand.target(), 1);
//! assert!(nand.is_well_formed());
//! assert!(!nand.is_cyclic());
//!
//! // `f | g` places two graphs side by side
//! let two = (&nand | &nand).unwrap();
//! assert_eq!(two.inputs().len(), 4);
//! ```
//!
//! Graphs are plain values: every composite is a fresh graph, and composition never modifies its
//! arguments. Invariants are checked on demand with
//! [is_well_formed](crate::open_digraph::OpenDigraph::is_well_formed).
//!
//! # Boolean circuits
//!
//! A [BoolCirc](crate::bool_circ::BoolCirc) is an open digraph whose labels are gates and which
//! is well-formed and acyclic. Circuits are composed as graphs and then validated by
//! [BoolCirc::new](crate::bool_circ::BoolCirc::new).

pub mod category;
pub mod error;
pub mod node;
pub mod open_digraph;

pub mod bool_circ;
pub mod dot;
pub mod random;

mod union_find;

pub mod prelude {
    //! Everything needed to build, compose and inspect open digraphs.
    pub use crate::bool_circ::{BoolCirc, Gate};
    pub use crate::category::*;
    pub use crate::error::{Boundary, GraphError};
    pub use crate::node::{adjacency, Adjacency, Node, NodeId};
    pub use crate::open_digraph::{graph_from_adjacency_matrix, ConnectedComponents, OpenDigraph};
    pub use crate::random::{random_int_list, random_int_matrix, GraphForm, MatrixShape};
}
