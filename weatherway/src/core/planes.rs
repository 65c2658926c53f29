use super::{
    error::{EditError, EditErrorKind, InvalidRegime, InvalidVertexId},
    id::{IdType, Regime, VertexId},
    matrix::Matrix,
    regime::{RegimeKey, RegimeSet},
    weight::Weight,
};

/// One square cost matrix per regime, all sharing the same vertex indexing.
///
/// A missing edge has cost [`Weight::inf`] and the diagonal is always
/// [`Weight::zero`]. Writes are validated completely before anything is
/// changed, so a failed operation leaves every plane untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightPlanes<W> {
    regimes: RegimeSet,
    planes: Vec<Matrix<W>>,
}

impl<W: Weight> WeightPlanes<W> {
    pub fn new(regimes: RegimeSet) -> Self {
        Self::with_dim(regimes, 0)
    }

    /// Planes for `dim` vertices without any edges.
    pub fn with_dim(regimes: RegimeSet, dim: usize) -> Self {
        let planes = (0..regimes.len())
            .map(|_| Matrix::filled(dim, W::inf(), W::zero()))
            .collect();

        Self { regimes, planes }
    }

    pub fn regimes(&self) -> &RegimeSet {
        &self.regimes
    }

    /// Number of vertices covered by each plane.
    pub fn dim(&self) -> usize {
        // All planes share the dimension and there is always at least one.
        self.planes.first().map_or(0, Matrix::dim)
    }

    /// Extends every plane by one unconnected vertex.
    pub fn grow(&mut self) {
        for plane in self.planes.iter_mut() {
            plane.grow(W::inf(), W::zero());
        }
    }

    /// The cost matrix of the given regime.
    pub fn plane<'a>(&self, regime: impl Into<RegimeKey<'a>>) -> Result<&Matrix<W>, InvalidRegime> {
        let regime = self.regimes.resolve(regime)?;
        Ok(&self.planes[regime.as_usize()])
    }

    /// Direct cost of the edge in the given regime, `None` if out of range.
    pub fn cost(&self, regime: Regime, from: VertexId, to: VertexId) -> Option<&W> {
        self.planes
            .get(regime.as_usize())?
            .get(from.as_usize(), to.as_usize())
    }

    /// Whether the edge has a finite cost in at least one regime.
    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        from != to
            && self.planes.iter().any(|plane| {
                plane
                    .get(from.as_usize(), to.as_usize())
                    .is_some_and(|cost| !cost.is_inf())
            })
    }

    /// Sets the cost of an edge in one regime and returns the previous cost.
    pub fn set_cost(
        &mut self,
        regime: Regime,
        from: VertexId,
        to: VertexId,
        cost: W,
    ) -> Result<W, EditError> {
        let regime = self.regimes.resolve(regime)?;
        self.check_edge(from, to)?;

        if !cost.is_finite() {
            return Err(EditError::new(EditErrorKind::InvalidCost {
                regime: regime.as_usize(),
            }));
        }

        let cell = &mut self.planes[regime.as_usize()][(from.as_usize(), to.as_usize())];
        Ok(std::mem::replace(cell, cost))
    }

    /// Sets the cost of an edge in every regime, `costs` given in plane order.
    pub fn set_costs(&mut self, from: VertexId, to: VertexId, costs: &[W]) -> Result<(), EditError> {
        self.check_costs(costs)?;
        self.check_edge(from, to)?;

        for (plane, cost) in self.planes.iter_mut().zip(costs) {
            plane[(from.as_usize(), to.as_usize())] = cost.clone();
        }

        Ok(())
    }

    /// Removes the edge from every regime at once.
    ///
    /// Returns `true` if the edge existed in at least one regime.
    pub fn clear_edge(&mut self, from: VertexId, to: VertexId) -> Result<bool, EditError> {
        self.check_edge(from, to)?;

        let existed = self.has_edge(from, to);
        for plane in self.planes.iter_mut() {
            plane[(from.as_usize(), to.as_usize())] = W::inf();
        }

        Ok(existed)
    }

    /// Checks that there is one finite cost per regime.
    pub fn check_costs(&self, costs: &[W]) -> Result<(), EditError> {
        if costs.len() != self.planes.len() {
            return Err(EditError::new(EditErrorKind::CostCountMismatch {
                expected: self.planes.len(),
                found: costs.len(),
            }));
        }

        match costs.iter().position(|cost| !cost.is_finite()) {
            Some(regime) => Err(EditError::new(EditErrorKind::InvalidCost { regime })),
            None => Ok(()),
        }
    }

    fn check_edge(&self, from: VertexId, to: VertexId) -> Result<(), EditError> {
        let dim = self.dim();

        for id in [from, to] {
            if id.as_usize() >= dim {
                return Err(InvalidVertexId(id.as_usize()).into());
            }
        }

        if from == to {
            return Err(EditError::new(EditErrorKind::SelfConnection));
        }

        Ok(())
    }
}
