//! ng-graph: the network layer for the naming-game simulation.
//!
//! Provides:
//! - A generic directed graph over a fixed node set ([`DirectedGraph`])
//! - An undirected specialization with connected-component decomposition
//!   and connectivity repair ([`Graph`])
//! - Randomized construction with edge-count targeting ([`random_graph`])
//! - A density-targeted, always-connected network builder ([`Network`])
//!
//! # Example
//!
//! ```
//! use ng_graph::Network;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let network = Network::build((0u32..10).collect(), 0.2, 0.4, &mut rng).unwrap();
//! assert!(network.is_connected());
//! ```

pub mod directed;
pub mod error;
pub mod network;
pub mod topology;
pub mod undirected;

mod render;

pub use directed::DirectedGraph;
pub use error::{GraphError, GraphResult};
pub use network::Network;
pub use topology::{NodeKey, Topology, random_graph};
pub use undirected::Graph;
