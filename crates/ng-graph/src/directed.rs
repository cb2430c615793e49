//! Generic directed graph over a fixed node set.

use std::collections::{HashMap, HashSet};

use crate::error::{GraphError, GraphResult};
use crate::topology::{NodeKey, Topology};

/// A directed graph whose node set is fixed at construction.
///
/// Nodes are identified by value; edges may be added and removed freely
/// after construction, but nodes never are. Self-loops and parallel edges
/// are rejected.
#[derive(Debug, Clone)]
pub struct DirectedGraph<T> {
    /// Adjacency sets. The key set is the node set, so every edge endpoint
    /// is a key of this map and no set contains its own key.
    pub(crate) adjacency: HashMap<T, HashSet<T>>,
}

impl<T: NodeKey> DirectedGraph<T> {
    /// Create a graph over `nodes` (duplicates collapse) with no edges.
    pub fn new<I: IntoIterator<Item = T>>(nodes: I) -> Self {
        let adjacency = nodes.into_iter().map(|n| (n, HashSet::new())).collect();
        Self { adjacency }
    }

    /// Whether `node` is an element of the graph.
    pub fn has_node(&self, node: &T) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Whether every node in `nodes` is an element of the graph.
    pub fn has_nodes(&self, nodes: &[T]) -> bool {
        nodes.iter().all(|n| self.has_node(n))
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges; each direction counts separately.
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum()
    }

    /// Whether the edge `source -> target` is present.
    pub fn has_edge(&self, source: &T, target: &T) -> GraphResult<bool> {
        self.check_endpoints(source, target, "has_edge")?;
        Ok(self
            .adjacency
            .get(source)
            .is_some_and(|adj| adj.contains(target)))
    }

    /// Insert the edge `source -> target`.
    ///
    /// Idempotent: re-adding an existing edge is a no-op, not an error.
    pub fn add_edge(&mut self, source: &T, target: &T) -> GraphResult<()> {
        if source == target {
            return Err(GraphError::InvalidEdge);
        }
        self.check_endpoints(source, target, "add_edge")?;
        self.insert_half_edge(source.clone(), target.clone());
        Ok(())
    }

    /// Remove the edge `source -> target`, reporting whether it was present.
    pub fn remove_edge(&mut self, source: &T, target: &T) -> GraphResult<bool> {
        self.check_endpoints(source, target, "remove_edge")?;
        Ok(self
            .adjacency
            .get_mut(source)
            .is_some_and(|adj| adj.remove(target)))
    }

    /// The nodes `node` points to, in no particular order.
    pub fn adjacent_nodes(&self, node: &T) -> GraphResult<Vec<T>> {
        self.adjacency
            .get(node)
            .map(|adj| adj.iter().cloned().collect())
            .ok_or(GraphError::UnknownNode {
                what: "adjacent_nodes",
            })
    }

    /// Add every ordered pair of distinct nodes as an edge. O(n^2).
    pub fn complete(&mut self) {
        let nodes: Vec<T> = self.adjacency.keys().cloned().collect();
        for (i, a) in nodes.iter().enumerate() {
            for b in &nodes[i + 1..] {
                self.insert_half_edge(a.clone(), b.clone());
                self.insert_half_edge(b.clone(), a.clone());
            }
        }
    }

    fn check_endpoints(&self, source: &T, target: &T, what: &'static str) -> GraphResult<()> {
        if self.has_node(source) && self.has_node(target) {
            Ok(())
        } else {
            Err(GraphError::UnknownNode { what })
        }
    }

    /// Insertion for callers that have already established both endpoints
    /// are distinct members: completion and induced-edge copies.
    pub(crate) fn insert_half_edge(&mut self, source: T, target: T) {
        if let Some(adj) = self.adjacency.get_mut(&source) {
            adj.insert(target);
        }
    }
}

impl<T: NodeKey> Topology<T> for DirectedGraph<T> {
    fn from_nodes<I: IntoIterator<Item = T>>(nodes: I) -> Self {
        Self::new(nodes)
    }

    fn nodes(&self) -> Vec<T> {
        self.adjacency.keys().cloned().collect()
    }

    fn num_nodes(&self) -> usize {
        DirectedGraph::num_nodes(self)
    }

    fn num_edges(&self) -> usize {
        DirectedGraph::num_edges(self)
    }

    fn has_edge(&self, source: &T, target: &T) -> GraphResult<bool> {
        DirectedGraph::has_edge(self, source, target)
    }

    fn add_edge(&mut self, source: &T, target: &T) -> GraphResult<()> {
        DirectedGraph::add_edge(self, source, target)
    }

    /// Every ordered pair of distinct nodes.
    fn max_edges_for_n_nodes(n: usize) -> usize {
        n * n.saturating_sub(1)
    }

    fn complete(&mut self) {
        DirectedGraph::complete(self);
    }
}
