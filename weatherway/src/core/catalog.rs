use rustc_hash::FxHashMap;

use super::{
    error::{InvalidVertexId, UnknownVertex},
    id::{IdType, VertexId},
};

/// Bijection between location names and dense [`VertexId`]s.
///
/// IDs are handed out in the order of insertion, starting at zero, and are
/// never reused: the catalog is append-only.
#[derive(Debug, Clone, Default)]
pub struct VertexCatalog {
    names: Vec<String>,
    ids: FxHashMap<String, VertexId>,
}

impl VertexCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the catalog from names in the desired index order. Repeated
    /// names keep their first index.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut catalog = Self::new();
        for name in names {
            catalog.ensure(name);
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<VertexId> {
        self.ids.get(name).copied()
    }

    /// Like [`index_of`](Self::index_of), but with an error suitable for
    /// propagation.
    pub fn resolve(&self, name: &str) -> Result<VertexId, UnknownVertex> {
        self.index_of(name).ok_or_else(|| UnknownVertex::new(name))
    }

    pub fn name_of(&self, id: VertexId) -> Result<&str, InvalidVertexId> {
        self.names
            .get(id.as_usize())
            .map(String::as_str)
            .ok_or(InvalidVertexId(id.as_usize()))
    }

    pub fn contains(&self, id: VertexId) -> bool {
        id.as_usize() < self.len()
    }

    /// Returns the ID of `name`, appending it to the catalog first if it is
    /// not present. The flag is `true` when the name was added.
    pub fn ensure(&mut self, name: impl Into<String>) -> (VertexId, bool) {
        let name = name.into();

        if let Some(id) = self.index_of(&name) {
            return (id, false);
        }

        let id = VertexId::from_usize(self.names.len());
        self.ids.insert(name.clone(), id);
        self.names.push(name);
        (id, true)
    }

    /// Names in the order of their IDs.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (VertexId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (VertexId::from_usize(i), name.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_appends_once() {
        let mut catalog = VertexCatalog::new();

        assert_eq!(catalog.ensure("Mixco"), (VertexId::from(0), true));
        assert_eq!(catalog.ensure("Antigua"), (VertexId::from(1), true));
        assert_eq!(catalog.ensure("Mixco"), (VertexId::from(0), false));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn lookup_both_ways() {
        let catalog = VertexCatalog::with_names(["A", "B", "C"]);

        assert_eq!(catalog.index_of("B"), Some(VertexId::from(1)));
        assert_eq!(catalog.index_of("Z"), None);
        assert_eq!(catalog.name_of(VertexId::from(2)), Ok("C"));
        assert_eq!(catalog.name_of(VertexId::from(3)), Err(InvalidVertexId(3)));
        assert_eq!(catalog.resolve("Z"), Err(UnknownVertex::new("Z")));
    }

    #[test]
    fn names_are_case_sensitive() {
        let catalog = VertexCatalog::with_names(["Escuintla"]);
        assert_eq!(catalog.index_of("escuintla"), None);
    }

    #[test]
    fn with_names_keeps_first_index() {
        let catalog = VertexCatalog::with_names(["B", "A", "B"]);
        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["B", "A"]);
    }
}
