//! [`Arrow`] and [`Monoidal`] instances for [`OpenDigraph`].
//!
//! Objects are arities: a graph with `m` inputs and `n` outputs is an arrow `m → n`.
//! Trait composition is diagrammatic, so `Arrow::compose(&f, &g)` (or `&f >> &g`) runs `f` first
//! and is the same graph as `OpenDigraph::compose(&g, &f)`.
use super::OpenDigraph;
use crate::category::*;
use crate::error::GraphError;

use core::ops::{BitOr, Shr};

impl Arrow for OpenDigraph {
    type Object = usize;
    type Error = GraphError;

    fn source(&self) -> usize {
        self.inputs.len()
    }

    fn target(&self) -> usize {
        self.outputs.len()
    }

    fn identity(a: &usize) -> Self {
        OpenDigraph::identity(*a)
    }

    fn compose(&self, other: &Self) -> Result<Self, GraphError> {
        OpenDigraph::compose(other, self)
    }
}

impl Monoidal for OpenDigraph {
    fn unit() -> Self {
        OpenDigraph::empty()
    }

    fn tensor(&self, other: &Self) -> Result<Self, GraphError> {
        OpenDigraph::parallel(self, other)
    }
}

// Syntactic sugar for composition and tensor
impl Shr<&OpenDigraph> for &OpenDigraph {
    type Output = Result<OpenDigraph, GraphError>;
    fn shr(self, rhs: &OpenDigraph) -> Self::Output {
        Arrow::compose(self, rhs)
    }
}

// Parallel composition
impl BitOr<&OpenDigraph> for &OpenDigraph {
    type Output = Result<OpenDigraph, GraphError>;
    fn bitor(self, rhs: &OpenDigraph) -> Self::Output {
        Monoidal::tensor(self, rhs)
    }
}
