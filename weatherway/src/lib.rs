pub mod algo;
pub mod core;
pub mod graph;
pub mod infra;
pub mod io;

pub mod prelude {
    pub use crate::{
        algo::{Center, PathError, Unreachable},
        core::{IdType, Regime, RegimeSet, VertexId, Weight},
        graph::{Network, Solution, VertexOrder},
        io::LoadOptions,
    };
}
