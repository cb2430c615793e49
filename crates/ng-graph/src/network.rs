//! Density-targeted network construction with connectivity repair.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{GraphError, GraphResult};
use crate::topology::{NodeKey, Topology, random_graph};
use crate::undirected::Graph;

/// A connected undirected communication network.
///
/// Construction samples a target edge density from a caller-supplied range,
/// builds a random graph around that target, then repairs connectivity, so
/// a finished network is always a single component. The realized edge count
/// is the sampled target plus up to (components - 1) repair edges.
#[derive(Debug, Clone)]
pub struct Network<T> {
    graph: Graph<T>,
    nodes: Vec<T>,
}

impl<T: NodeKey> Network<T> {
    /// Build a connected network over `nodes`.
    ///
    /// `min_density` and `max_density` are fractions of the undirected edge
    /// capacity; both must lie in `[0, 1]` with `min_density <=
    /// max_density`.
    pub fn build<R: Rng + ?Sized>(
        nodes: Vec<T>,
        min_density: f64,
        max_density: f64,
        rng: &mut R,
    ) -> GraphResult<Self> {
        if !(0.0..=1.0).contains(&min_density)
            || !(0.0..=1.0).contains(&max_density)
            || min_density > max_density
        {
            return Err(GraphError::InvalidDensity {
                lo: min_density,
                hi: max_density,
            });
        }

        // capacity is over the deduplicated population
        let distinct = nodes.iter().collect::<HashSet<_>>().len();
        let capacity = Graph::<T>::max_edges_for_n_nodes(distinct);
        let density = rng.gen_range(min_density..=max_density);
        let target = (capacity as f64 * density).round() as usize;

        let mut graph: Graph<T> = random_graph(nodes, target, &[], rng)?;
        graph.merge_subgraphs(rng)?;

        let node_list = graph.nodes();
        Ok(Self {
            graph,
            nodes: node_list,
        })
    }

    /// The neighbors of `node`.
    pub fn neighbors_of(&self, node: &T) -> GraphResult<Vec<T>> {
        self.graph.adjacent_nodes(node)
    }

    /// Uniform choice among `node`'s current neighbors.
    ///
    /// Fails with `EmptyChoice` only for an isolated node, which cannot
    /// occur in a built network of two or more nodes.
    pub fn random_neighbor<R: Rng + ?Sized>(&self, node: &T, rng: &mut R) -> GraphResult<T> {
        let neighbors = self.graph.adjacent_nodes(node)?;
        neighbors
            .choose(rng)
            .cloned()
            .ok_or(GraphError::EmptyChoice {
                what: "random_neighbor",
            })
    }

    /// Uniform choice over the node set.
    pub fn random_node<R: Rng + ?Sized>(&self, rng: &mut R) -> GraphResult<T> {
        self.nodes.choose(rng).cloned().ok_or(GraphError::EmptyChoice {
            what: "random_node",
        })
    }

    pub fn is_connected(&self) -> bool {
        self.graph.is_connected()
    }

    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    /// The underlying graph.
    pub fn graph(&self) -> &Graph<T> {
        &self.graph
    }
}
