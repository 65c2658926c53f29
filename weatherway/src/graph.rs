mod editor;
mod network;

pub use network::{EdgeRecord, Network, Solution, VertexOrder};

use thiserror::Error;

use crate::{
    algo::PathError,
    core::{InvalidRegime, UnknownVertex},
};

/// The error encountered when querying a [`Network`] or its [`Solution`] by
/// location names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("{0}")]
    UnknownVertex(#[from] UnknownVertex),
    #[error("{0}")]
    InvalidRegime(#[from] InvalidRegime),
    #[error("{0}")]
    Path(#[from] PathError),
}
