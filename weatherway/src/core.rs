pub mod catalog;
pub mod error;
pub mod id;
pub mod matrix;
pub mod planes;
pub mod regime;
pub mod weight;

pub use catalog::VertexCatalog;
pub use error::*;
pub use id::{IdType, Regime, VertexId};
pub use matrix::Matrix;
pub use planes::WeightPlanes;
pub use regime::{RegimeKey, RegimeSet, RegimeSetError};
pub use weight::Weight;
