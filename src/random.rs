//! Random adjacency matrices and random open digraphs.
//!
//! Every generator takes the random source explicitly, so a seeded [`StdRng`](rand::rngs::StdRng)
//! gives reproducible graphs. The `thread_*` wrappers use [`rand::thread_rng`].
use crate::error::{Boundary, GraphError};
use crate::node::{Adjacency, NodeId};
use crate::open_digraph::{graph_from_adjacency_matrix, OpenDigraph};

use log::debug;
use rand::prelude::*;
use std::fmt;
use std::str::FromStr;

/// `n` uniform integers in `0..=bound`.
///
/// With `unique`, the integers are pairwise distinct, which needs `n <= bound + 1`.
pub fn random_int_list<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    bound: usize,
    unique: bool,
) -> Result<Vec<usize>, GraphError> {
    if !unique {
        return Ok((0..n).map(|_| rng.gen_range(0..=bound)).collect());
    }
    let range = bound.saturating_add(1);
    if n > range {
        return Err(GraphError::BoundTooSmall { n, bound });
    }
    Ok(rand::seq::index::sample(rng, range, n).into_vec())
}

/// Structural constraints applied to a random matrix, in field order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatrixShape {
    /// Zero the diagonal (no self-loops).
    pub null_diag: bool,
    /// Mirror the upper triangle onto the lower one.
    pub symmetric: bool,
    /// Keep at most one direction per pair: `[j][i]` is cleared whenever `[i][j]` is set, `i < j`.
    pub oriented: bool,
    /// Clear the whole lower triangle. The diagonal is left alone, so combine with `null_diag`
    /// for an acyclic graph.
    pub dag: bool,
}

impl MatrixShape {
    pub fn null_diag(mut self, yes: bool) -> Self {
        self.null_diag = yes;
        self
    }

    pub fn symmetric(mut self, yes: bool) -> Self {
        self.symmetric = yes;
        self
    }

    pub fn oriented(mut self, yes: bool) -> Self {
        self.oriented = yes;
        self
    }

    pub fn dag(mut self, yes: bool) -> Self {
        self.dag = yes;
        self
    }
}

/// An `n × n` matrix of uniform integers in `0..=bound`, then shaped by `shape`.
///
/// Fails with [`GraphError::IncompatibleShape`] if `symmetric` is combined with `oriented` or
/// `dag`.
pub fn random_int_matrix<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    bound: usize,
    shape: MatrixShape,
) -> Result<Vec<Vec<usize>>, GraphError> {
    if shape.symmetric && (shape.oriented || shape.dag) {
        return Err(GraphError::IncompatibleShape);
    }

    let mut m = (0..n)
        .map(|_| random_int_list(&mut *rng, n, bound, false))
        .collect::<Result<Vec<_>, _>>()?;

    if shape.null_diag {
        (0..n).for_each(|i| m[i][i] = 0);
    }
    for i in 0..n {
        for j in i + 1..n {
            if shape.symmetric {
                m[j][i] = m[i][j];
            }
            if (shape.oriented && m[i][j] > 0) || shape.dag {
                m[j][i] = 0;
            }
        }
    }
    Ok(m)
}

pub fn thread_random_int_matrix(n: usize, bound: usize, shape: MatrixShape) -> Result<Vec<Vec<usize>>, GraphError> {
    random_int_matrix(&mut thread_rng(), n, bound, shape)
}

/// The kind of graph produced by [`OpenDigraph::random`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GraphForm {
    /// Any multigraph, self-loops included. Use [`GraphForm::LoopFree`] to rule them out.
    #[default]
    Free,
    Dag,
    Oriented,
    LoopFree,
    /// Symmetric, self-loops included. Use [`GraphForm::LoopFreeUndirected`] to rule them out.
    Undirected,
    LoopFreeUndirected,
}

impl GraphForm {
    pub const ALL: [GraphForm; 6] = [
        GraphForm::Free,
        GraphForm::Dag,
        GraphForm::Oriented,
        GraphForm::LoopFree,
        GraphForm::Undirected,
        GraphForm::LoopFreeUndirected,
    ];

    pub fn name(self) -> &'static str {
        match self {
            GraphForm::Free => "free",
            GraphForm::Dag => "DAG",
            GraphForm::Oriented => "oriented",
            GraphForm::LoopFree => "loop-free",
            GraphForm::Undirected => "undirected",
            GraphForm::LoopFreeUndirected => "loop-free_undirected",
        }
    }

    pub fn shape(self) -> MatrixShape {
        let shape = MatrixShape::default();
        match self {
            GraphForm::Free => shape,
            GraphForm::Dag => shape.dag(true).null_diag(true),
            GraphForm::Oriented => shape.oriented(true).null_diag(true),
            GraphForm::LoopFree => shape.null_diag(true),
            GraphForm::Undirected => shape.symmetric(true),
            GraphForm::LoopFreeUndirected => shape.symmetric(true).null_diag(true),
        }
    }
}

impl fmt::Display for GraphForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GraphForm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GraphForm::ALL
            .into_iter()
            .find(|form| form.name() == s)
            .ok_or_else(|| GraphError::UnknownForm(s.to_string()))
    }
}

impl OpenDigraph {
    /// A random graph on nodes `0..n` with edge multiplicities in `0..=bound`, using
    /// [`rand::thread_rng`]. See [`OpenDigraph::random_with`].
    pub fn random(
        n: usize,
        bound: usize,
        inputs: usize,
        outputs: usize,
        form: GraphForm,
    ) -> Result<OpenDigraph, GraphError> {
        Self::random_with(&mut thread_rng(), n, bound, inputs, outputs, form)
    }

    /// A random graph on nodes `0..n` with edge multiplicities in `0..=bound`.
    ///
    /// `inputs` nodes are then picked among those with no parent and a single child edge of
    /// multiplicity 1, and `outputs` nodes among the remaining ones with no child and a single
    /// parent edge of multiplicity 1. The result is well-formed.
    ///
    /// Fails if `inputs + outputs > n`, or if the generated graph has too few eligible nodes.
    pub fn random_with<R: Rng + ?Sized>(
        rng: &mut R,
        n: usize,
        bound: usize,
        inputs: usize,
        outputs: usize,
        form: GraphForm,
    ) -> Result<OpenDigraph, GraphError> {
        if inputs.checked_add(outputs).map_or(true, |k| k > n) {
            return Err(GraphError::BoundaryCount { inputs, outputs, nodes: n });
        }

        let matrix = random_int_matrix(rng, n, bound, form.shape())?;
        let mut graph = graph_from_adjacency_matrix(&matrix)?;

        let single = |adj: &Adjacency| adj.len() == 1 && adj.values().all(|&m| m == 1);

        let input_candidates: Vec<NodeId> = graph
            .nodes()
            .values()
            .filter(|node| node.parents().is_empty() && single(node.children()))
            .map(|node| node.id())
            .collect();
        let chosen_inputs = pick(rng, &input_candidates, inputs, Boundary::Input)?;

        let output_candidates: Vec<NodeId> = graph
            .nodes()
            .values()
            .filter(|node| node.children().is_empty() && single(node.parents()))
            .map(|node| node.id())
            .filter(|id| !chosen_inputs.contains(id))
            .collect();
        let chosen_outputs = pick(rng, &output_candidates, outputs, Boundary::Output)?;

        debug!(
            "random {} graph on {} nodes: inputs {:?} of {} candidates, outputs {:?} of {} candidates",
            form,
            n,
            chosen_inputs,
            input_candidates.len(),
            chosen_outputs,
            output_candidates.len()
        );
        graph.set_inputs(chosen_inputs)?;
        graph.set_outputs(chosen_outputs)?;
        Ok(graph)
    }
}

fn pick<R: Rng + ?Sized>(
    rng: &mut R,
    candidates: &[NodeId],
    requested: usize,
    kind: Boundary,
) -> Result<Vec<NodeId>, GraphError> {
    if candidates.len() < requested {
        return Err(GraphError::NotEnoughCandidates {
            kind,
            requested,
            available: candidates.len(),
        });
    }
    Ok(candidates.choose_multiple(rng, requested).copied().collect())
}
