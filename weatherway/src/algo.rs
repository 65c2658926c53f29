pub mod all_pairs;
pub mod center;

pub use all_pairs::{AllPairs, PathError};
pub use center::{Center, Unreachable};
