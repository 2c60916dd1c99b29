//! Vertices of an [`OpenDigraph`](crate::open_digraph::OpenDigraph).
//!
//! A [`Node`] records its neighbours as maps from [`NodeId`] to *multiplicity*, the number of
//! parallel edges between the two nodes. A multiplicity is never zero: entries are removed rather
//! than decremented to zero.
//!
//! Nodes only keep their own maps consistent. Keeping the parent map of one node in agreement with
//! the child map of another is the job of the owning graph.
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of a node, meaningful only inside the graph that owns the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(i: usize) -> Self {
        NodeId(i)
    }
}

/// Neighbour id to edge multiplicity.
pub type Adjacency = BTreeMap<NodeId, usize>;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    id: NodeId,
    label: String,
    parents: Adjacency,
    children: Adjacency,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<String>, parents: Adjacency, children: Adjacency) -> Self {
        Node {
            id,
            label: label.into(),
            parents,
            children,
        }
    }

    /// A node with no neighbours.
    pub fn isolated(id: NodeId, label: impl Into<String>) -> Self {
        Self::new(id, label, Adjacency::new(), Adjacency::new())
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn parents(&self) -> &Adjacency {
        &self.parents
    }

    pub fn children(&self) -> &Adjacency {
        &self.children
    }

    pub fn set_id(&mut self, id: NodeId) {
        self.id = id;
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn set_parents(&mut self, parents: Adjacency) {
        self.parents = parents;
    }

    pub fn set_children(&mut self, children: Adjacency) {
        self.children = children;
    }

    /// Add one edge from `parent` (inserting it with multiplicity 1 if absent).
    pub fn add_parent_id(&mut self, parent: NodeId) {
        *self.parents.entry(parent).or_insert(0) += 1;
    }

    /// Add one edge to `child` (inserting it with multiplicity 1 if absent).
    pub fn add_child_id(&mut self, child: NodeId) {
        *self.children.entry(child).or_insert(0) += 1;
    }

    /// Add `m` edges from `parent` at once. Adding zero edges leaves no entry behind.
    pub(crate) fn add_parent_edges(&mut self, parent: NodeId, m: usize) {
        if m > 0 {
            *self.parents.entry(parent).or_insert(0) += m;
        }
    }

    pub(crate) fn add_child_edges(&mut self, child: NodeId, m: usize) {
        if m > 0 {
            *self.children.entry(child).or_insert(0) += m;
        }
    }

    /// Remove a single edge from `parent`, dropping the entry once it reaches zero.
    pub fn remove_parent_once(&mut self, parent: NodeId) {
        decrement(&mut self.parents, parent);
    }

    /// Remove a single edge to `child`, dropping the entry once it reaches zero.
    pub fn remove_child_once(&mut self, child: NodeId) {
        decrement(&mut self.children, child);
    }

    /// Remove every edge from `parent`.
    pub fn remove_parent_id(&mut self, parent: NodeId) {
        self.parents.remove(&parent);
    }

    /// Remove every edge to `child`.
    pub fn remove_child_id(&mut self, child: NodeId) {
        self.children.remove(&child);
    }

    /// Number of distinct parents.
    pub fn indegree(&self) -> usize {
        self.parents.len()
    }

    /// Number of distinct children.
    pub fn outdegree(&self) -> usize {
        self.children.len()
    }

    pub fn degree(&self) -> usize {
        self.indegree() + self.outdegree()
    }

    /// Translate this node's id and every neighbour id by `offset`.
    ///
    /// Callers must have checked that no id leaves the `usize` range.
    pub(crate) fn shift(&mut self, offset: isize) {
        let f = |id: NodeId| NodeId(id.0.wrapping_add_signed(offset));
        self.id = f(self.id);
        self.parents = self.parents.iter().map(|(&k, &m)| (f(k), m)).collect();
        self.children = self.children.iter().map(|(&k, &m)| (f(k), m)).collect();
    }

    /// Rewrite ids through `rename`, dropping neighbours it does not map.
    pub(crate) fn renamed(&self, rename: &BTreeMap<NodeId, NodeId>) -> Option<Node> {
        let project = |adjacency: &Adjacency| -> Adjacency {
            adjacency
                .iter()
                .filter_map(|(k, &m)| rename.get(k).map(|&k| (k, m)))
                .collect()
        };
        rename.get(&self.id).map(|&id| Node {
            id,
            label: self.label.clone(),
            parents: project(&self.parents),
            children: project(&self.children),
        })
    }
}

fn decrement(adjacency: &mut Adjacency, id: NodeId) {
    if let Some(m) = adjacency.get_mut(&id) {
        if *m <= 1 {
            adjacency.remove(&id);
        } else {
            *m -= 1;
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {:?}, {:?}, {:?})",
            self.id, self.label, FmtAdjacency(&self.parents), FmtAdjacency(&self.children)
        )
    }
}

struct FmtAdjacency<'a>(&'a Adjacency);

impl fmt::Debug for FmtAdjacency<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter().map(|(k, m)| (k.0, m))).finish()
    }
}

/// Build an [`Adjacency`] from `(id, multiplicity)` pairs.
///
/// ```rust
/// # use open_digraphs::node::*;
/// let a = adjacency([(1, 1), (4, 2)]);
/// assert_eq!(a.get(&NodeId(4)), Some(&2));
/// ```
pub fn adjacency<I: IntoIterator<Item = (usize, usize)>>(pairs: I) -> Adjacency {
    pairs
        .into_iter()
        .filter(|&(_, m)| m > 0)
        .map(|(k, m)| (NodeId(k), m))
        .collect()
}
