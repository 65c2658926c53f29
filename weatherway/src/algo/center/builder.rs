use crate::core::{matrix::Matrix, weight::Weight};

use super::{center, Center, Unreachable};

pub struct CenterBuilder<'a, W> {
    dist: &'a Matrix<W>,
    unreachable: Unreachable,
}

impl<W> Center<W>
where
    W: Weight,
{
    pub fn on(dist: &Matrix<W>) -> CenterBuilder<'_, W> {
        CenterBuilder {
            dist,
            unreachable: Unreachable::default(),
        }
    }
}

impl<'a, W> CenterBuilder<'a, W>
where
    W: Weight,
{
    pub fn unreachable(self, unreachable: Unreachable) -> Self {
        Self {
            unreachable,
            ..self
        }
    }

    /// Returns `None` for an empty graph, which has no center.
    pub fn run(self) -> Option<Center<W>> {
        center(self.dist, self.unreachable)
    }
}
