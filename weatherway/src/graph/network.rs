use std::{collections::BTreeSet, ops::Deref};

use tracing::{debug, instrument};

use crate::{
    algo::{AllPairs, Center, PathError, Unreachable},
    core::{
        EditError, IdType, InvalidRegime, Matrix, Regime, RegimeKey, RegimeSet, VertexCatalog,
        VertexId, Weight, WeightPlanes,
    },
};

use super::QueryError;

/// Locations connected by directed edges with one cost per regime.
///
/// The network owns the [catalog](VertexCatalog) of location names and the
/// [weight planes](WeightPlanes). Shortest paths are never cached inside:
/// every [`solve`](Network::solve) returns a fresh, self-contained
/// [`Solution`] and it is up to the caller to solve again after the network
/// is edited.
///
/// # Examples
///
/// ```
/// use weatherway::{core::RegimeSet, graph::Network};
///
/// let mut network = Network::<u32>::new(RegimeSet::canonical());
///
/// network.add_vertex("Guatemala");
/// network.add_vertex("Escuintla");
/// network.add_vertex("Antigua");
///
/// network.add_connection("Guatemala", "Escuintla", &[1, 2, 4, 8]).unwrap();
/// network.add_connection("Escuintla", "Antigua", &[2, 3, 5, 9]).unwrap();
///
/// let rain = network.solve("rain").unwrap();
///
/// assert_eq!(
///     network.path_between(&rain, "Guatemala", "Antigua").unwrap(),
///     vec!["Guatemala", "Escuintla", "Antigua"]
/// );
/// assert_eq!(network.distance_between(&rain, "Guatemala", "Antigua").unwrap(), Some(&5));
/// ```
#[derive(Debug, Clone)]
pub struct Network<W> {
    pub(super) catalog: VertexCatalog,
    pub(super) planes: WeightPlanes<W>,
    pub(super) revision: u64,
}

/// Order in which a bulk load assigns vertex IDs.
///
/// Vertices added one at a time after the load are always appended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VertexOrder {
    /// Lexicographic order of the names, independent of record order.
    #[default]
    Sorted,
    /// Order of the first appearance in the records.
    FirstSeen,
}

/// A directed edge between two named locations, with costs in plane order.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord<W> {
    pub from: String,
    pub to: String,
    pub costs: Vec<W>,
}

impl<W> EdgeRecord<W> {
    pub fn new(from: impl Into<String>, to: impl Into<String>, costs: Vec<W>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            costs,
        }
    }
}

/// All-pairs shortest paths of one regime, tagged with the network revision
/// they were computed at.
///
/// Dereferences to [`AllPairs`] for index based queries.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<W> {
    regime: Regime,
    revision: u64,
    paths: AllPairs<W>,
}

impl<W> Solution<W> {
    pub fn regime(&self) -> Regime {
        self.regime
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn paths(&self) -> &AllPairs<W> {
        &self.paths
    }

    pub fn into_paths(self) -> AllPairs<W> {
        self.paths
    }
}

impl<W> Deref for Solution<W> {
    type Target = AllPairs<W>;

    fn deref(&self) -> &Self::Target {
        &self.paths
    }
}

impl<W: Weight> Network<W> {
    pub fn new(regimes: RegimeSet) -> Self {
        Self {
            catalog: VertexCatalog::new(),
            planes: WeightPlanes::new(regimes),
            revision: 0,
        }
    }

    /// Builds the network from a batch of edge records.
    ///
    /// Vertex IDs are assigned according to `order` before any edge is
    /// inserted. A later record for the same pair of locations overwrites an
    /// earlier one.
    pub fn from_records<I>(
        regimes: RegimeSet,
        records: I,
        order: VertexOrder,
    ) -> Result<Self, EditError>
    where
        I: IntoIterator<Item = EdgeRecord<W>>,
    {
        let records = records.into_iter().collect::<Vec<_>>();
        let endpoints = records
            .iter()
            .flat_map(|record| [record.from.as_str(), record.to.as_str()]);

        let catalog = match order {
            VertexOrder::Sorted => VertexCatalog::with_names(endpoints.collect::<BTreeSet<_>>()),
            VertexOrder::FirstSeen => VertexCatalog::with_names(endpoints),
        };

        let mut planes = WeightPlanes::with_dim(regimes, catalog.len());

        for record in &records {
            let from = catalog.resolve(&record.from)?;
            let to = catalog.resolve(&record.to)?;
            planes.set_costs(from, to, &record.costs)?;
        }

        debug!(
            vertices = catalog.len(),
            edges = records.len(),
            "network built from records"
        );

        Ok(Self {
            catalog,
            planes,
            revision: 0,
        })
    }

    pub fn catalog(&self) -> &VertexCatalog {
        &self.catalog
    }

    pub fn planes(&self) -> &WeightPlanes<W> {
        &self.planes
    }

    pub fn regimes(&self) -> &RegimeSet {
        self.planes.regimes()
    }

    pub fn vertex_count(&self) -> usize {
        self.catalog.len()
    }

    /// Number of successful edits since the network was created.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if the network was not edited since the solution was
    /// computed.
    pub fn is_current(&self, solution: &Solution<W>) -> bool {
        solution.revision == self.revision
    }

    /// The raw cost matrix of a regime.
    pub fn plane<'a>(&self, regime: impl Into<RegimeKey<'a>>) -> Result<&Matrix<W>, InvalidRegime> {
        self.planes.plane(regime)
    }

    /// Direct cost of the edge between two locations in a regime, `None` if
    /// there is no such edge.
    pub fn cost<'a>(
        &self,
        from: &str,
        to: &str,
        regime: impl Into<RegimeKey<'a>>,
    ) -> Result<Option<&W>, QueryError> {
        let regime = self.regimes().resolve(regime)?;
        let from = self.catalog.resolve(from)?;
        let to = self.catalog.resolve(to)?;

        Ok(self
            .planes
            .cost(regime, from, to)
            .filter(|cost| !cost.is_inf()))
    }

    /// Computes shortest paths between all pairs of locations under the given
    /// regime.
    #[instrument(level = "debug", skip_all, fields(vertices = self.vertex_count(), revision = self.revision))]
    pub fn solve<'a>(
        &self,
        regime: impl Into<RegimeKey<'a>>,
    ) -> Result<Solution<W>, InvalidRegime> {
        let regime = self.regimes().resolve(regime)?;
        let paths = AllPairs::run(self.planes.plane(regime)?);

        debug!(
            regime = self.regimes().name(regime),
            negative_cycle = paths.has_negative_cycle(),
            "solved all pairs"
        );

        Ok(Solution {
            regime,
            revision: self.revision,
            paths,
        })
    }

    /// Names of the locations on a shortest path, both ends included.
    ///
    /// Unknown names are reported before any path reconstruction happens.
    pub fn path_between(
        &self,
        solution: &Solution<W>,
        source: &str,
        target: &str,
    ) -> Result<Vec<&str>, QueryError> {
        let from = self.catalog.resolve(source)?;
        let to = self.catalog.resolve(target)?;

        solution
            .path(from, to)?
            .into_iter()
            .map(|id| self.name(id))
            .collect()
    }

    /// Shortest distance between two locations, `None` if unreachable.
    pub fn distance_between<'s>(
        &self,
        solution: &'s Solution<W>,
        source: &str,
        target: &str,
    ) -> Result<Option<&'s W>, QueryError> {
        let from = self.catalog.resolve(source)?;
        let to = self.catalog.resolve(target)?;

        // Locations added after solving are missing from the solution.
        for id in [from, to] {
            if id.as_usize() >= solution.vertex_count() {
                return Err(PathError::InvalidVertex(id).into());
            }
        }

        Ok(solution.dist(from, to))
    }

    /// Name of the center location; `None` for an empty network.
    pub fn center(&self, solution: &Solution<W>) -> Option<&str> {
        self.center_with(solution, Unreachable::Dominates)
    }

    /// Like [`center`](Network::center), with explicit handling of unreachable
    /// locations.
    pub fn center_with(&self, solution: &Solution<W>, unreachable: Unreachable) -> Option<&str> {
        let center = Center::on(solution.distances())
            .unreachable(unreachable)
            .run()?;

        self.catalog.name_of(center.vertex()).ok()
    }

    fn name(&self, id: VertexId) -> Result<&str, QueryError> {
        self.catalog
            .name_of(id)
            .map_err(|_| PathError::InvalidVertex(id).into())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use proptest::prelude::*;

    use crate::{core::UnknownVertex, infra::proptest as strategies};

    use super::*;

    fn create_chain_network() -> Network<i32> {
        Network::from_records(
            RegimeSet::single("normal"),
            [
                EdgeRecord::new("C", "D", vec![1]),
                EdgeRecord::new("A", "B", vec![5]),
                EdgeRecord::new("B", "C", vec![3]),
                EdgeRecord::new("A", "D", vec![10]),
            ],
            VertexOrder::Sorted,
        )
        .unwrap()
    }

    #[test]
    fn sorted_bulk_load() {
        let network = create_chain_network();

        assert_eq!(
            network.catalog().names().collect::<Vec<_>>(),
            vec!["A", "B", "C", "D"]
        );
    }

    #[test]
    fn first_seen_bulk_load() {
        let network = Network::from_records(
            RegimeSet::single("normal"),
            [
                EdgeRecord::new("Zacapa", "Cobán", vec![4u32]),
                EdgeRecord::new("Antigua", "Zacapa", vec![7]),
            ],
            VertexOrder::FirstSeen,
        )
        .unwrap();

        assert_eq!(
            network.catalog().names().collect::<Vec<_>>(),
            vec!["Zacapa", "Cobán", "Antigua"]
        );
    }

    #[test]
    fn chain_scenario() {
        let network = create_chain_network();
        let solution = network.solve("normal").unwrap();

        assert_eq!(network.distance_between(&solution, "A", "D"), Ok(Some(&9)));
        assert_eq!(
            network.path_between(&solution, "A", "D"),
            Ok(vec!["A", "B", "C", "D"])
        );
    }

    #[test]
    fn later_record_overwrites() {
        let network = Network::from_records(
            RegimeSet::single("normal"),
            [
                EdgeRecord::new("A", "B", vec![5u32]),
                EdgeRecord::new("A", "B", vec![2]),
            ],
            VertexOrder::Sorted,
        )
        .unwrap();

        assert_eq!(network.cost("A", "B", "normal"), Ok(Some(&2)));
        assert_eq!(network.cost("B", "A", "normal"), Ok(None));
    }

    #[test]
    fn bulk_load_rejects_bad_records() {
        let result = Network::from_records(
            RegimeSet::canonical(),
            [EdgeRecord::new("A", "B", vec![5u32])],
            VertexOrder::Sorted,
        );

        assert!(result.is_err());

        let result = Network::from_records(
            RegimeSet::single("normal"),
            [EdgeRecord::new("A", "A", vec![5u32])],
            VertexOrder::Sorted,
        );

        assert!(result.is_err());
    }

    #[test]
    fn unknown_names_before_path() {
        let network = create_chain_network();
        let solution = network.solve("normal").unwrap();

        assert_matches!(
            network.path_between(&solution, "A", "Z"),
            Err(QueryError::UnknownVertex(UnknownVertex { name })) if name == "Z"
        );
        assert_matches!(
            network.distance_between(&solution, "Z", "A"),
            Err(QueryError::UnknownVertex(_))
        );
    }

    #[test]
    fn no_path_is_reported() {
        let network = create_chain_network();
        let solution = network.solve("normal").unwrap();

        assert_eq!(
            network.path_between(&solution, "D", "A"),
            Err(QueryError::Path(PathError::NoPath))
        );
        assert_eq!(network.distance_between(&solution, "D", "A"), Ok(None));
    }

    #[test]
    fn cost_lookup_errors() {
        let network = create_chain_network();

        assert_eq!(
            network.cost("A", "B", "storm"),
            Err(QueryError::InvalidRegime(InvalidRegime::Name(
                "storm".to_string()
            )))
        );
        assert_eq!(
            network.cost("A", "Z", "normal"),
            Err(QueryError::UnknownVertex(UnknownVertex::new("Z")))
        );
        assert!(network
            .cost("A", "Z", "normal")
            .unwrap_err()
            .to_string()
            .starts_with("unknown vertex"));
    }

    #[test]
    fn invalid_regime() {
        let network = create_chain_network();

        assert_eq!(
            network.solve("storm"),
            Err(InvalidRegime::Name("storm".to_string()))
        );
        assert_eq!(
            network.solve(Regime::from(1)),
            Err(InvalidRegime::Index(1))
        );
    }

    #[test]
    fn center_of_chain() {
        let network = create_chain_network();
        let solution = network.solve("normal").unwrap();

        // Only A reaches every other location.
        assert_eq!(network.center(&solution), Some("A"));
        // Ignoring unreachable targets, D reaches nothing and is the center.
        assert_eq!(
            network.center_with(&solution, Unreachable::Ignore),
            Some("D")
        );
    }

    #[test]
    fn empty_network() {
        let network = Network::<u32>::new(RegimeSet::canonical());
        let solution = network.solve("normal").unwrap();

        assert_eq!(network.vertex_count(), 0);
        assert_eq!(network.center(&solution), None);
    }

    #[test]
    fn solution_outlives_edits() {
        let mut network = create_chain_network();
        let before = network.solve("normal").unwrap();

        network.remove_connection("A", "B").unwrap();
        let after = network.solve("normal").unwrap();

        assert!(!network.is_current(&before));
        assert!(network.is_current(&after));

        // The old solution still answers with the old distances.
        assert_eq!(network.distance_between(&before, "A", "D"), Ok(Some(&9)));
        assert_eq!(network.distance_between(&after, "A", "D"), Ok(Some(&10)));
    }

    #[test]
    fn vertices_added_after_solve() {
        let mut network = create_chain_network();
        let solution = network.solve("normal").unwrap();

        let e = network.add_vertex("E");

        assert_eq!(
            network.distance_between(&solution, "A", "E"),
            Err(QueryError::Path(PathError::InvalidVertex(e)))
        );
        assert_eq!(
            network.path_between(&solution, "E", "E"),
            Err(QueryError::Path(PathError::InvalidVertex(e)))
        );
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_routes_follow_connections(network in strategies::network(12, 0.3)) {
            for (regime, _) in network.regimes().iter() {
                let solution = network.solve(regime).unwrap();

                for source in network.catalog().names() {
                    for target in network.catalog().names() {
                        let Ok(route) = network.path_between(&solution, source, target) else {
                            prop_assert_eq!(network.distance_between(&solution, source, target), Ok(None));
                            continue;
                        };

                        let cost = route
                            .windows(2)
                            .map(|hop| *network.cost(hop[0], hop[1], regime).unwrap().unwrap())
                            .sum::<u32>();

                        prop_assert_eq!(route.first(), Some(&source));
                        prop_assert_eq!(route.last(), Some(&target));
                        prop_assert_eq!(network.distance_between(&solution, source, target), Ok(Some(&cost)));
                    }
                }
            }
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_center_is_a_location(network in strategies::network(12, 0.3)) {
            let solution = network.solve("normal").unwrap();
            let center = network.center(&solution);

            prop_assert!(center.is_some());
            prop_assert!(network.catalog().index_of(center.unwrap()).is_some());
        }
    }
}
