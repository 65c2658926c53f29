use tracing::{debug, trace};

use crate::core::{EditError, EditErrorKind, RegimeKey, VertexId, Weight};

use super::Network;

impl<W: Weight> Network<W> {
    /// Adds a location and returns its ID. Adding an existing name is a no-op
    /// returning the existing ID.
    ///
    /// A new location is not connected to anything in any regime.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let name = name.into();
        let (id, added) = self.catalog.ensure(name.as_str());

        if added {
            self.planes.grow();
            self.revision += 1;
            debug!(%name, %id, "added location");
        }

        id
    }

    /// Connects two existing locations with one cost per regime, in plane
    /// order.
    ///
    /// An existing connection is overwritten. Nothing changes on error.
    pub fn add_connection(&mut self, from: &str, to: &str, costs: &[W]) -> Result<(), EditError> {
        let from_id = self.catalog.resolve(from)?;
        let to_id = self.catalog.resolve(to)?;

        if let Err(error) = self.planes.set_costs(from_id, to_id, costs) {
            debug!(from, to, %error, "rejected connection");
            return Err(error);
        }

        self.revision += 1;

        trace!(from, to, ?costs, "connected locations");
        Ok(())
    }

    /// Like [`add_connection`](Network::add_connection), but unknown locations
    /// are added first.
    ///
    /// The costs are validated before any location is added, so nothing
    /// changes on error.
    pub fn connect(&mut self, from: &str, to: &str, costs: &[W]) -> Result<(), EditError> {
        let checked = self.planes.check_costs(costs).and_then(|()| {
            if from == to {
                Err(EditErrorKind::SelfConnection.into())
            } else {
                Ok(())
            }
        });

        if let Err(error) = checked {
            debug!(from, to, %error, "rejected connection");
            return Err(error);
        }

        self.add_vertex(from);
        self.add_vertex(to);
        self.add_connection(from, to, costs)
    }

    /// Removes the connection between two locations in every regime.
    ///
    /// Returns `false` if there was no connection to remove, in which case the
    /// network is left untouched.
    pub fn remove_connection(&mut self, from: &str, to: &str) -> Result<bool, EditError> {
        let from_id = self.catalog.resolve(from)?;
        let to_id = self.catalog.resolve(to)?;

        let removed = self.planes.clear_edge(from_id, to_id)?;

        if removed {
            self.revision += 1;
            trace!(from, to, "removed connection");
        }

        Ok(removed)
    }

    /// Changes the cost of an existing or new connection in a single regime and
    /// returns the previous cost, which is [`Weight::inf`] if there was no
    /// connection.
    ///
    /// Both locations must already exist.
    pub fn set_regime_cost<'a>(
        &mut self,
        from: &str,
        to: &str,
        regime: impl Into<RegimeKey<'a>>,
        cost: W,
    ) -> Result<W, EditError> {
        let regime = self.regimes().resolve(regime)?;
        let from_id = self.catalog.resolve(from)?;
        let to_id = self.catalog.resolve(to)?;

        let previous = self
            .planes
            .set_cost(regime, from_id, to_id, cost)
            .map_err(|error| {
                debug!(from, to, %error, "rejected cost change");
                error
            })?;
        self.revision += 1;

        trace!(from, to, %regime, "changed regime cost");
        Ok(previous)
    }
}
