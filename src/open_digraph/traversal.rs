use super::OpenDigraph;
use crate::node::NodeId;
use crate::union_find::UnionFind;

use std::collections::{BTreeMap, BTreeSet};

/// The undirected connected components of an [`OpenDigraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedComponents {
    /// Component number of each node. Components are numbered `0..count` in order of their
    /// smallest node id.
    pub component_of: BTreeMap<NodeId, usize>,

    /// One graph per component, with node ids renumbered densely from 0 (in increasing order of
    /// their ids in the whole graph) and boundary lists restricted to the component.
    pub graphs: Vec<OpenDigraph>,
}

impl ConnectedComponents {
    pub fn count(&self) -> usize {
        self.graphs.len()
    }
}

impl OpenDigraph {
    /// Returns true if the graph contains a directed cycle (a self-loop counts).
    ///
    /// Depth-first search along child edges with an explicit stack; a cycle exists exactly when
    /// some edge leads back to a node that is still on the stack.
    pub fn is_cyclic(&self) -> bool {
        let mut visited = BTreeSet::new();
        let mut on_stack = BTreeSet::new();

        for (&root, node) in self.nodes.iter() {
            if !visited.insert(root) {
                continue;
            }
            on_stack.insert(root);
            let mut stack = vec![(root, node.children().keys())];

            while let Some((id, children)) = stack.last_mut() {
                let id = *id;
                match children.next().copied() {
                    Some(child) if on_stack.contains(&child) => return true,
                    Some(child) => {
                        // dangling children are not followed
                        if let Some(next) = self.nodes.get(&child) {
                            if visited.insert(child) {
                                on_stack.insert(child);
                                stack.push((child, next.children().keys()));
                            }
                        }
                    }
                    None => {
                        on_stack.remove(&id);
                        stack.pop();
                    }
                }
            }
        }
        false
    }

    /// Partition the nodes by undirected reachability (edges are followed in both directions).
    pub fn connected_components(&self) -> ConnectedComponents {
        let index = self.node_id_to_index_map();
        let ids: Vec<NodeId> = index.keys().copied().collect();

        let mut uf = UnionFind::new(ids.len());
        for (id, node) in self.nodes.iter() {
            // parents mirror children in a well-formed graph, but follow both anyway
            for other in node.children().keys().chain(node.parents().keys()) {
                if let Some(&j) = index.get(other) {
                    uf.union(index[id], j);
                }
            }
        }

        // number components by first appearance in id order
        let mut number = BTreeMap::new();
        let component_of: BTreeMap<NodeId, usize> = ids
            .iter()
            .enumerate()
            .map(|(i, &id)| {
                let root = uf.find(i);
                let next = number.len();
                (id, *number.entry(root).or_insert(next))
            })
            .collect();
        debug_assert_eq!(number.len(), uf.components());

        let graphs = (0..number.len())
            .map(|c| self.component_graph(&component_of, c))
            .collect();

        ConnectedComponents { component_of, graphs }
    }

    fn component_graph(&self, component_of: &BTreeMap<NodeId, usize>, c: usize) -> OpenDigraph {
        let rename: BTreeMap<NodeId, NodeId> = component_of
            .iter()
            .filter(|&(_, &k)| k == c)
            .enumerate()
            .map(|(i, (&id, _))| (id, NodeId(i)))
            .collect();
        let project = |boundary: &[NodeId]| -> Vec<NodeId> {
            boundary.iter().filter_map(|id| rename.get(id).copied()).collect()
        };

        let nodes: Vec<_> = rename
            .keys()
            .filter_map(|id| self.nodes.get(id))
            .filter_map(|node| node.renamed(&rename))
            .collect();
        OpenDigraph::new(project(&self.inputs), project(&self.outputs), nodes)
    }
}
