//! Dense integer identifiers for vertices and regimes.
//!
//! Both [`VertexId`] and [`Regime`] are plain indices into contiguous arrays
//! (matrix rows and columns, the list of weight planes). The maximum value of
//! the backing integer is reserved as a
//! "[sentinel](https://en.wikipedia.org/wiki/Sentinel_value)", so that
//! next-hop matrices can store "no vertex" without wrapping every cell in
//! `Option`.

use std::{fmt, hash::Hash};

/// A dense, zero-based identifier.
pub trait IdType: Copy + Ord + Hash + fmt::Debug {
    /// Conceptually `None` in `Option<ID>`, but without using `Option`.
    fn sentinel() -> Self;

    /// Converts an ID into the corresponding `usize`.
    fn as_usize(&self) -> usize;

    /// Converts an `usize` into the corresponding ID.
    fn from_usize(index: usize) -> Self;

    /// Returns `true` if the value represents the sentinel value.
    fn is_sentinel(&self) -> bool {
        self == &Self::sentinel()
    }
}

/// Index of a location in the [catalog](crate::core::catalog::VertexCatalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

/// Index of a weight regime in a [`RegimeSet`](crate::core::regime::RegimeSet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Regime(usize);

macro_rules! impl_int_id {
    ($id_ty:ident) => {
        impl IdType for $id_ty {
            fn sentinel() -> Self {
                Self(usize::MAX)
            }

            fn as_usize(&self) -> usize {
                self.0
            }

            fn from_usize(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<usize> for $id_ty {
            fn from(index: usize) -> Self {
                Self::from_usize(index)
            }
        }

        impl From<$id_ty> for usize {
            fn from(id: $id_ty) -> Self {
                id.as_usize()
            }
        }

        impl fmt::Display for $id_ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_sentinel() {
                    f.write_str("-")
                } else {
                    write!(f, "{}", self.0)
                }
            }
        }
    };
}

impl_int_id!(VertexId);
impl_int_id!(Regime);
