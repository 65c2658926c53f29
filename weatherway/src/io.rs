//! Plain-text edge lists in and cost tables out.

pub mod edge_list;
pub mod table;

pub use edge_list::read_records;
pub use table::CostTable;

use thiserror::Error;

use crate::{
    core::{EditError, RegimeSet},
    graph::VertexOrder,
};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading the edge list failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid cost `{field}` on line {line}")]
    InvalidCost { line: usize, field: String },
    #[error("{0}")]
    Edit(#[from] EditError),
}

/// Options of loading a network from an edge list.
///
/// The number of regimes determines how many cost fields a record must have.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub regimes: RegimeSet,
    pub order: VertexOrder,
}

impl LoadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_regimes(self, regimes: RegimeSet) -> Self {
        Self { regimes, ..self }
    }

    pub fn with_order(self, order: VertexOrder) -> Self {
        Self { order, ..self }
    }
}
