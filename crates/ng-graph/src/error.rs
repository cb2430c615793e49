//! Graph-specific error types.

use thiserror::Error;

/// Errors surfaced by graph mutation, query, and randomized construction.
///
/// All failures are synchronous and leave the graph unchanged: validation
/// happens before any mutation, so a rejected symmetric edge operation never
/// exposes a half-applied state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// A self-loop was attempted; edges connect two distinct nodes.
    #[error("Invalid edge: source and target are the same node")]
    InvalidEdge,

    /// An operation referenced a node outside the graph's fixed node set.
    #[error("Unknown node in {what}")]
    UnknownNode { what: &'static str },

    /// A random selection was requested over an empty candidate collection.
    #[error("Empty candidate set for {what}")]
    EmptyChoice { what: &'static str },

    /// Edge-density coefficients outside `0 <= lo <= hi <= 1`.
    #[error("Invalid edge density range [{lo}, {hi}]")]
    InvalidDensity { lo: f64, hi: f64 },
}

pub type GraphResult<T> = Result<T, GraphError>;
