//! Category-theoretic interface shared by composable graph structures.
mod traits;

pub use traits::*;
