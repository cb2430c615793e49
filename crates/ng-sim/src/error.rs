//! Error types for the simulation layer.

use thiserror::Error;

use ng_graph::GraphError;

/// Errors encountered while building or running a naming game.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type SimResult<T> = Result<T, SimError>;
