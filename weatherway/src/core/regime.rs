//! Named weight regimes ("conditions") selecting which cost plane is active.

use thiserror::Error;

use super::{
    error::InvalidRegime,
    id::{IdType, Regime},
};

/// The regimes of the canonical weather model, in plane order.
pub const CANONICAL: [&str; 4] = ["normal", "rain", "snow", "storm"];

/// Ordered, non-empty collection of unique regime names.
///
/// Name lookup ignores ASCII case, so `"Rain"` and `"rain"` select the same
/// plane.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegimeSet {
    names: Vec<String>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegimeSetError {
    #[error("at least one regime is required")]
    Empty,
    #[error("regime `{0}` is listed more than once")]
    Duplicate(String),
}

impl RegimeSet {
    pub fn new<I, S>(names: I) -> Result<Self, RegimeSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self { names: Vec::new() };

        for name in names {
            let name = name.into();
            if set.position(&name).is_some() {
                return Err(RegimeSetError::Duplicate(name));
            }
            set.names.push(name);
        }

        if set.names.is_empty() {
            return Err(RegimeSetError::Empty);
        }

        Ok(set)
    }

    /// `normal`, `rain`, `snow` and `storm`.
    pub fn canonical() -> Self {
        Self {
            names: CANONICAL.iter().map(|name| name.to_string()).collect(),
        }
    }

    /// A single regime, for graphs with plain edge costs.
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            names: vec![name.into()],
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, regime: Regime) -> Option<&str> {
        self.names.get(regime.as_usize()).map(String::as_str)
    }

    pub fn find(&self, name: &str) -> Option<Regime> {
        self.position(name).map(Regime::from_usize)
    }

    /// Resolves a regime given by name or by index.
    pub fn resolve<'a>(&self, key: impl Into<RegimeKey<'a>>) -> Result<Regime, InvalidRegime> {
        match key.into() {
            RegimeKey::Name(name) => self
                .find(name)
                .ok_or_else(|| InvalidRegime::Name(name.to_string())),
            RegimeKey::Id(regime) if regime.as_usize() < self.len() => Ok(regime),
            RegimeKey::Id(regime) => Err(InvalidRegime::Index(regime.as_usize())),
        }
    }

    /// Regimes with their names, in plane order.
    pub fn iter(&self) -> impl Iterator<Item = (Regime, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (Regime::from_usize(i), name.as_str()))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names
            .iter()
            .position(|other| other.eq_ignore_ascii_case(name))
    }
}

impl Default for RegimeSet {
    fn default() -> Self {
        Self::canonical()
    }
}

/// A regime identified either by its name or its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegimeKey<'a> {
    Name(&'a str),
    Id(Regime),
}

impl<'a> From<&'a str> for RegimeKey<'a> {
    fn from(name: &'a str) -> Self {
        RegimeKey::Name(name)
    }
}

impl<'a> From<&'a String> for RegimeKey<'a> {
    fn from(name: &'a String) -> Self {
        RegimeKey::Name(name)
    }
}

impl From<Regime> for RegimeKey<'_> {
    fn from(regime: Regime) -> Self {
        RegimeKey::Id(regime)
    }
}
