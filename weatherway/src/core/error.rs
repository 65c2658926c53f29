use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown vertex `{name}`")]
pub struct UnknownVertex {
    pub name: String,
}

impl UnknownVertex {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("vertex index {0} is out of range")]
pub struct InvalidVertexId(pub usize);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvalidRegime {
    #[error("unknown regime `{0}`")]
    Name(String),
    #[error("regime index {0} is out of range")]
    Index(usize),
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("editing the network failed: {kind}")]
pub struct EditError {
    pub kind: EditErrorKind,
}

impl EditError {
    pub fn new(kind: EditErrorKind) -> Self {
        Self { kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditErrorKind {
    UnknownVertex(UnknownVertex),
    InvalidVertexId(InvalidVertexId),
    InvalidRegime(InvalidRegime),
    SelfConnection,
    CostCountMismatch { expected: usize, found: usize },
    InvalidCost { regime: usize },
}

impl fmt::Display for EditErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditErrorKind::UnknownVertex(error) => write!(f, "{error}"),
            EditErrorKind::InvalidVertexId(error) => write!(f, "{error}"),
            EditErrorKind::InvalidRegime(error) => write!(f, "{error}"),
            EditErrorKind::SelfConnection => {
                f.write_str("a location cannot be connected to itself")
            }
            EditErrorKind::CostCountMismatch { expected, found } => {
                write!(f, "expected {expected} costs, one per regime, found {found}")
            }
            EditErrorKind::InvalidCost { regime } => {
                write!(f, "cost for regime {regime} is infinite or not a number")
            }
        }
    }
}

impl From<UnknownVertex> for EditError {
    fn from(error: UnknownVertex) -> Self {
        EditError::new(EditErrorKind::UnknownVertex(error))
    }
}

impl From<InvalidVertexId> for EditError {
    fn from(error: InvalidVertexId) -> Self {
        EditError::new(EditErrorKind::InvalidVertexId(error))
    }
}

impl From<InvalidRegime> for EditError {
    fn from(error: InvalidRegime) -> Self {
        EditError::new(EditErrorKind::InvalidRegime(error))
    }
}

impl From<EditErrorKind> for EditError {
    fn from(kind: EditErrorKind) -> Self {
        EditError::new(kind)
    }
}
