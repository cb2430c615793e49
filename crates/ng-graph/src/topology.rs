//! Shared topology capabilities and randomized construction.
//!
//! The directed and undirected graph forms differ in their edge-capacity
//! formula (ordered vs unordered pairs). [`Topology`] captures the shared
//! surface so [`random_graph`] can be written once and dispatch the capacity
//! check to whichever form is being built.

use std::hash::Hash;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{GraphError, GraphResult};

/// Types usable as graph nodes: compared by value, hashable, cloneable.
pub trait NodeKey: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> NodeKey for T {}

/// Capabilities shared by the directed and undirected graph forms.
pub trait Topology<T: NodeKey>: Sized {
    /// Construct a graph over the given nodes (duplicates collapse) with no
    /// edges.
    fn from_nodes<I: IntoIterator<Item = T>>(nodes: I) -> Self;

    /// The node set, in no particular order.
    fn nodes(&self) -> Vec<T>;

    fn num_nodes(&self) -> usize;

    fn num_edges(&self) -> usize;

    fn has_edge(&self, source: &T, target: &T) -> GraphResult<bool>;

    fn add_edge(&mut self, source: &T, target: &T) -> GraphResult<()>;

    /// Edge capacity of this graph form over `n` nodes.
    fn max_edges_for_n_nodes(n: usize) -> usize;

    /// Edge capacity of this graph.
    fn max_edges(&self) -> usize {
        Self::max_edges_for_n_nodes(self.num_nodes())
    }

    /// Add every possible edge between distinct node pairs.
    fn complete(&mut self);
}

/// Build a random graph over `nodes` containing every edge in
/// `guaranteed_edges` plus up to `extra_edges` additional randomly chosen
/// edges.
///
/// Sampling rejects self-pairs and already-present edges, so every accepted
/// draw adds exactly one new edge. When the request meets or exceeds the
/// graph's capacity the graph is completed up front instead of sampled;
/// that shortcut is what bounds the rejection loop, and it is the only path
/// that handles 0- and 1-node graphs (no valid pair exists to sample).
pub fn random_graph<T, G, R>(
    nodes: Vec<T>,
    extra_edges: usize,
    guaranteed_edges: &[(T, T)],
    rng: &mut R,
) -> GraphResult<G>
where
    T: NodeKey,
    G: Topology<T>,
    R: Rng + ?Sized,
{
    let mut graph = G::from_nodes(nodes);

    if guaranteed_edges.len() + extra_edges >= graph.max_edges() {
        graph.complete();
        return Ok(graph);
    }

    for (source, target) in guaranteed_edges {
        graph.add_edge(source, target)?;
    }

    let pool = graph.nodes();
    for _ in 0..extra_edges {
        if graph.num_edges() == graph.max_edges() {
            return Ok(graph);
        }
        loop {
            let source = pool.choose(rng).ok_or(GraphError::EmptyChoice {
                what: "random_graph node pool",
            })?;
            let target = pool.choose(rng).ok_or(GraphError::EmptyChoice {
                what: "random_graph node pool",
            })?;
            if source != target && !graph.has_edge(source, target)? {
                graph.add_edge(source, target)?;
                break;
            }
        }
    }

    Ok(graph)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::directed::DirectedGraph;
    use crate::undirected::Graph;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    proptest! {
        #[test]
        fn directed_edge_count_is_request_or_capacity(
            n in 0usize..10,
            extra in 0usize..50,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let nodes: Vec<u32> = (0..n as u32).collect();
            let graph: DirectedGraph<u32> = random_graph(nodes, extra, &[], &mut rng).unwrap();
            let expected = extra.min(DirectedGraph::<u32>::max_edges_for_n_nodes(n));
            prop_assert_eq!(graph.num_edges(), expected);
        }

        #[test]
        fn undirected_edge_count_is_request_or_capacity(
            n in 0usize..10,
            extra in 0usize..30,
            seed in any::<u64>(),
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let nodes: Vec<u32> = (0..n as u32).collect();
            let graph: Graph<u32> = random_graph(nodes, extra, &[], &mut rng).unwrap();
            let expected = extra.min(Graph::<u32>::max_edges_for_n_nodes(n));
            prop_assert_eq!(graph.num_edges(), expected);
        }
    }
}
