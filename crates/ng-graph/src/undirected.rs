//! Undirected graph: symmetric edges, component decomposition, repair.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::directed::DirectedGraph;
use crate::error::{GraphError, GraphResult};
use crate::topology::{NodeKey, Topology};

/// An undirected graph, stored as a directed graph whose edges always come
/// in symmetric pairs: `a` is adjacent to `b` iff `b` is adjacent to `a`.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    pub(crate) directed: DirectedGraph<T>,
}

impl<T: NodeKey> Graph<T> {
    /// Create a graph over `nodes` (duplicates collapse) with no edges.
    pub fn new<I: IntoIterator<Item = T>>(nodes: I) -> Self {
        Self {
            directed: DirectedGraph::new(nodes),
        }
    }

    pub fn has_node(&self, node: &T) -> bool {
        self.directed.has_node(node)
    }

    pub fn has_nodes(&self, nodes: &[T]) -> bool {
        self.directed.has_nodes(nodes)
    }

    pub fn num_nodes(&self) -> usize {
        self.directed.num_nodes()
    }

    /// Number of undirected edges. Exact, never rounded: edges are only
    /// ever added and removed in symmetric pairs.
    pub fn num_edges(&self) -> usize {
        self.directed.num_edges() / 2
    }

    pub fn has_edge(&self, a: &T, b: &T) -> GraphResult<bool> {
        self.directed.has_edge(a, b)
    }

    /// Insert the undirected edge `a -- b`.
    ///
    /// Both directions are stored; validation precedes mutation, so a
    /// rejected insert leaves the graph untouched.
    pub fn add_edge(&mut self, a: &T, b: &T) -> GraphResult<()> {
        self.directed.add_edge(a, b)?;
        self.directed.insert_half_edge(b.clone(), a.clone());
        Ok(())
    }

    /// Remove the undirected edge `a -- b`, reporting whether it was
    /// present.
    pub fn remove_edge(&mut self, a: &T, b: &T) -> GraphResult<bool> {
        let forward = self.directed.remove_edge(a, b)?;
        let backward = self.directed.remove_edge(b, a)?;
        Ok(forward && backward)
    }

    /// The neighbors of `node`, in no particular order.
    pub fn adjacent_nodes(&self, node: &T) -> GraphResult<Vec<T>> {
        self.directed.adjacent_nodes(node)
    }

    /// Add every unordered pair of distinct nodes as an edge. O(n^2).
    pub fn complete(&mut self) {
        self.directed.complete();
    }

    /// Whether the graph forms a single connected component.
    pub fn is_connected(&self) -> bool {
        self.connected_subgraphs().len() == 1
    }

    /// Decompose the graph into its connected components.
    ///
    /// Every node lands in exactly one component, and each component holds
    /// exactly the induced edges among its nodes. Components are fresh
    /// value copies: nothing aliases the parent, which may keep mutating
    /// after decomposition. A zero-node graph decomposes into a single
    /// empty component by convention.
    pub fn connected_subgraphs(&self) -> Vec<Graph<T>> {
        if self.num_nodes() == 0 {
            return vec![Graph::new(Vec::new())];
        }

        let mut seen: HashSet<T> = HashSet::new();
        let mut components = Vec::new();
        for node in self.directed.adjacency.keys() {
            if !seen.contains(node) {
                let component = self.component_from(node);
                seen.extend(component.directed.adjacency.keys().cloned());
                components.push(component);
            }
        }
        components
    }

    /// Repair connectivity: bridge components with random edges until one
    /// remains.
    ///
    /// Each added edge joins two previously disconnected components, so the
    /// loop runs at most (components - 1) times. This is a linking pass,
    /// not a spanning-tree computation: it adds the minimum number of
    /// edges, not minimum-weight ones.
    pub fn merge_subgraphs<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GraphResult<()> {
        let mut working = self.connected_subgraphs();
        while working.len() > 1 {
            let Some(donor) = working.pop() else {
                break;
            };
            let partner = working.choose(rng).ok_or(GraphError::EmptyChoice {
                what: "merge partner",
            })?;

            let donor_nodes: Vec<T> = donor.directed.adjacency.keys().cloned().collect();
            let partner_nodes: Vec<T> = partner.directed.adjacency.keys().cloned().collect();
            let a = donor_nodes.choose(rng).ok_or(GraphError::EmptyChoice {
                what: "merge endpoint",
            })?;
            let b = partner_nodes.choose(rng).ok_or(GraphError::EmptyChoice {
                what: "merge endpoint",
            })?;
            self.add_edge(a, b)?;
        }
        Ok(())
    }

    /// Depth-first closure of `start`, copied out as a standalone graph.
    fn component_from(&self, start: &T) -> Graph<T> {
        let mut visited: HashSet<T> = HashSet::new();
        let mut stack = vec![start.clone()];
        while let Some(current) = stack.pop() {
            if !visited.insert(current.clone()) {
                continue;
            }
            if let Some(adjacent) = self.directed.adjacency.get(&current) {
                for neighbor in adjacent {
                    if !visited.contains(neighbor) {
                        stack.push(neighbor.clone());
                    }
                }
            }
        }

        let mut component = Graph::new(visited.iter().cloned());
        for node in &visited {
            if let Some(adjacent) = self.directed.adjacency.get(node) {
                for neighbor in adjacent {
                    // the closure of `start`, so both endpoints are members
                    component
                        .directed
                        .insert_half_edge(node.clone(), neighbor.clone());
                }
            }
        }
        component
    }
}

impl<T: NodeKey> Topology<T> for Graph<T> {
    fn from_nodes<I: IntoIterator<Item = T>>(nodes: I) -> Self {
        Self::new(nodes)
    }

    fn nodes(&self) -> Vec<T> {
        self.directed.adjacency.keys().cloned().collect()
    }

    fn num_nodes(&self) -> usize {
        Graph::num_nodes(self)
    }

    fn num_edges(&self) -> usize {
        Graph::num_edges(self)
    }

    fn has_edge(&self, source: &T, target: &T) -> GraphResult<bool> {
        Graph::has_edge(self, source, target)
    }

    fn add_edge(&mut self, source: &T, target: &T) -> GraphResult<()> {
        Graph::add_edge(self, source, target)
    }

    /// Every unordered pair of distinct nodes.
    fn max_edges_for_n_nodes(n: usize) -> usize {
        n * n.saturating_sub(1) / 2
    }

    fn complete(&mut self) {
        Graph::complete(self);
    }
}
