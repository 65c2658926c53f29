//! Find the [center] of a graph from its all-pairs distances.
//!
//! The eccentricity of a vertex is the greatest distance from it to any other
//! vertex, and the center is the vertex with the smallest eccentricity. When
//! more vertices share the smallest eccentricity, the one with the lowest
//! index is reported.
//!
//! See available parameters [here](CenterBuilder#implementations).
//!
//! [center]: https://en.wikipedia.org/wiki/Graph_center
//!
//! # Examples
//!
//! ```
//! use weatherway::{
//!     algo::{AllPairs, Center},
//!     core::{Matrix, VertexId, Weight},
//! };
//!
//! // A star: every leaf is one step from the hub and back.
//! let mut costs = Matrix::filled(4, u32::inf(), 0);
//! for leaf in 1..4 {
//!     costs[(0, leaf)] = 1;
//!     costs[(leaf, 0)] = 1;
//! }
//!
//! let paths = AllPairs::run(&costs);
//! let center = Center::on(paths.distances()).run().unwrap();
//!
//! assert_eq!(center.vertex(), VertexId::from(0));
//! assert_eq!(center.eccentricity(), &1);
//! ```

use crate::core::{
    id::{IdType, VertexId},
    matrix::Matrix,
    weight::Weight,
};

mod builder;

pub use builder::CenterBuilder;

/// The vertex minimizing eccentricity, with its eccentricity.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq)]
pub struct Center<W> {
    vertex: VertexId,
    eccentricity: W,
}

impl<W> Center<W> {
    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    /// The greatest distance from the center to another vertex.
    ///
    /// It is [`Weight::inf`] when even the center can't reach every vertex
    /// and unreachable targets [dominate](Unreachable::Dominates).
    pub fn eccentricity(&self) -> &W {
        &self.eccentricity
    }
}

/// How unreachable targets take part in eccentricity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Unreachable {
    /// An unreachable target counts as infinitely far.
    ///
    /// In a graph that is not strongly connected every vertex has infinite
    /// eccentricity and the lowest index wins.
    #[default]
    Dominates,

    /// Unreachable targets are skipped and only reachable ones are measured.
    ///
    /// A vertex that reaches nothing has zero eccentricity.
    Ignore,
}

/// Eccentricity of every vertex, in index order.
pub fn eccentricities<W>(dist: &Matrix<W>, unreachable: Unreachable) -> Vec<W>
where
    W: Weight,
{
    dist.rows()
        .enumerate()
        .map(|(i, row)| eccentricity(i, row, unreachable))
        .collect()
}

fn eccentricity<W>(vertex: usize, row: &[W], unreachable: Unreachable) -> W
where
    W: Weight,
{
    let mut max: Option<&W> = None;

    for (j, dist) in row.iter().enumerate() {
        if j == vertex || (unreachable == Unreachable::Ignore && dist.is_inf()) {
            continue;
        }

        if max.map_or(true, |max| dist > max) {
            max = Some(dist);
        }
    }

    max.cloned().unwrap_or_else(W::zero)
}

pub(crate) fn center<W>(dist: &Matrix<W>, unreachable: Unreachable) -> Option<Center<W>>
where
    W: Weight,
{
    let mut best: Option<Center<W>> = None;

    for (i, eccentricity) in eccentricities(dist, unreachable).into_iter().enumerate() {
        // Strict comparison keeps the lowest index among ties.
        if best
            .as_ref()
            .map_or(true, |best| eccentricity < best.eccentricity)
        {
            best = Some(Center {
                vertex: VertexId::from_usize(i),
                eccentricity,
            });
        }
    }

    best
}
