//! Find [all-pairs shortest paths] and their distances in a cost matrix.
//!
//! The computation uses the [Floyd–Warshall algorithm], which handles negative
//! edge costs as long as there is no negative cycle. Edges are directed: the
//! cost matrix is not assumed to be symmetric.
//!
//! [all-pairs shortest paths]:
//!     https://en.wikipedia.org/wiki/Shortest_path_problem#All-pairs_shortest_paths
//! [Floyd–Warshall algorithm]:
//!     https://en.wikipedia.org/wiki/Floyd%E2%80%93Warshall_algorithm
//!
//! # Examples
//!
//! ```
//! use weatherway::{
//!     algo::AllPairs,
//!     core::{Matrix, VertexId, Weight},
//! };
//!
//! let mut costs = Matrix::filled(4, u32::inf(), 0);
//! costs[(0, 1)] = 5;
//! costs[(1, 2)] = 3;
//! costs[(2, 3)] = 1;
//! costs[(0, 3)] = 10;
//!
//! let paths = AllPairs::run(&costs);
//! let (a, d) = (VertexId::from(0), VertexId::from(3));
//!
//! assert_eq!(paths.dist(a, d), Some(&9));
//! assert_eq!(paths.path(a, d).unwrap().len(), 4);
//! ```

use std::ops::Index;

use thiserror::Error;

use crate::core::{
    id::{IdType, VertexId},
    matrix::Matrix,
    weight::Weight,
};

mod floyd_warshall;

pub use floyd_warshall::floyd_warshall;

/// Shortest path distances between every pair of vertices, together with the
/// next-hop matrix for reconstructing the paths.
///
/// The value is self-contained: it does not borrow the graph it was computed
/// from and stays valid (though possibly stale) when the graph changes.
///
/// See [module](self) documentation for more details and example.
#[derive(Debug, Clone, PartialEq)]
pub struct AllPairs<W> {
    dist: Matrix<W>,
    next: Matrix<VertexId>,
}

/// The error encountered when reconstructing a path from [`AllPairs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    /// A vertex outside of the solved matrix was requested.
    #[error("vertex {0} is out of range")]
    InvalidVertex(VertexId),

    /// The target is not reachable from the source.
    #[error("no path between the vertices")]
    NoPath,

    /// The walk along next hops did not reach the target in time, which only
    /// happens when negative cycles are present.
    #[error("path runs through a negative cycle")]
    NegativeCycle,
}

impl<W> AllPairs<W>
where
    W: Weight,
{
    /// Solves the all-pairs problem for given square cost matrix.
    ///
    /// Missing edges must have cost [`Weight::inf`] and the diagonal is
    /// expected to be [`Weight::zero`].
    pub fn run(costs: &Matrix<W>) -> Self {
        floyd_warshall(costs)
    }

    /// Returns the path distance between two vertices, or `None` if the target
    /// is not reachable or any of the vertices is out of range.
    pub fn dist(&self, from: VertexId, to: VertexId) -> Option<&W> {
        self.dist
            .get(from.as_usize(), to.as_usize())
            .filter(|dist| !dist.is_inf())
    }

    /// Returns `true` if some vertex can reach itself with negative cost.
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.vertex_count()).any(|i| self.dist[(i, i)].is_negative())
    }
}

impl<W> AllPairs<W> {
    pub fn vertex_count(&self) -> usize {
        self.dist.dim()
    }

    /// The raw distance matrix, with [`Weight::inf`] for unreachable pairs.
    pub fn distances(&self) -> &Matrix<W> {
        &self.dist
    }

    /// The raw next-hop matrix, with [sentinel](IdType::sentinel) for
    /// unreachable pairs.
    pub fn next_hops(&self) -> &Matrix<VertexId> {
        &self.next
    }

    /// The vertex to move to immediately after `from` on a shortest path to
    /// `to`.
    pub fn next_hop(&self, from: VertexId, to: VertexId) -> Option<VertexId> {
        self.next
            .get(from.as_usize(), to.as_usize())
            .copied()
            .filter(|hop| !hop.is_sentinel())
    }

    /// Returns the vertices on a shortest path from `from` to `to`, both ends
    /// included.
    ///
    /// A path from a vertex to itself consists of that single vertex.
    pub fn path(&self, from: VertexId, to: VertexId) -> Result<Vec<VertexId>, PathError> {
        self.check(from)?;
        self.check(to)?;

        let mut path = vec![from];
        let mut curr = from;

        while curr != to {
            // Any simple path has fewer hops than there are vertices.
            if path.len() > self.vertex_count() {
                return Err(PathError::NegativeCycle);
            }

            curr = self.next_hop(curr, to).ok_or(PathError::NoPath)?;
            path.push(curr);
        }

        Ok(path)
    }

    /// Returns an iterator over vertices on the path from `from` to `to`,
    /// without `from` itself.
    ///
    /// The iterator is empty when the target is not reachable. Unlike
    /// [`path`](AllPairs::path), no errors are reported.
    pub fn reconstruct(&self, from: VertexId, to: VertexId) -> PathReconstruction<'_> {
        PathReconstruction {
            curr: from,
            goal: to,
            next: &self.next,
            remaining: self.vertex_count(),
        }
    }

    fn check(&self, vertex: VertexId) -> Result<(), PathError> {
        if vertex.as_usize() < self.vertex_count() {
            Ok(())
        } else {
            Err(PathError::InvalidVertex(vertex))
        }
    }
}

impl<W> Index<(VertexId, VertexId)> for AllPairs<W> {
    type Output = W;

    fn index(&self, (from, to): (VertexId, VertexId)) -> &Self::Output {
        &self.dist[(from.as_usize(), to.as_usize())]
    }
}

/// Iterator over the vertices on a shortest path.
///
/// Returned by [`AllPairs::reconstruct`].
pub struct PathReconstruction<'a> {
    curr: VertexId,
    goal: VertexId,
    next: &'a Matrix<VertexId>,
    remaining: usize,
}

impl<'a> Iterator for PathReconstruction<'a> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.curr == self.goal || self.remaining == 0 {
            return None;
        }

        let hop = *self.next.get(self.curr.as_usize(), self.goal.as_usize())?;
        if hop.is_sentinel() {
            return None;
        }

        self.remaining -= 1;
        self.curr = hop;
        Some(hop)
    }
}
