//! Travel costs stored in the weight planes.
//!
//! Costs are generic over [`Weight`], implemented for all primitive integers
//! and floats. Every weight type reserves an "infinite" value
//! ([`Weight::inf`]) that denotes a missing edge or an unreachable pair and is
//! never produced by adding two finite costs: integer sums saturate instead of
//! wrapping.

use std::fmt;

pub trait Weight: PartialOrd + Clone + Sized + fmt::Debug {
    /// Cost of staying in place.
    fn zero() -> Self;

    /// The sentinel for "no edge" / "unreachable".
    fn inf() -> Self;

    /// Whether the type can represent negative costs.
    fn is_unsigned() -> bool;

    /// Addition that never wraps around.
    ///
    /// Callers are expected to check both operands with
    /// [`is_inf`](Weight::is_inf) first; the sum of two finite integer costs
    /// that does not fit saturates at the bounds of the type.
    fn saturating_add(self, rhs: Self) -> Self;

    fn is_inf(&self) -> bool {
        self == &Self::inf()
    }

    /// Whether the value can be used as a cost: neither the sentinel nor
    /// something incomparable like NaN.
    fn is_finite(&self) -> bool {
        !self.is_inf() && self.partial_cmp(&Self::zero()).is_some()
    }

    fn is_negative(&self) -> bool {
        !Self::is_unsigned() && self < &Self::zero()
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn saturating_add(self, rhs: Self) -> Self {
                <$ty>::saturating_add(self, rhs)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            fn zero() -> Self {
                0.0
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }

            fn saturating_add(self, rhs: Self) -> Self {
                // IEEE addition already saturates at infinity.
                self + rhs
            }

            fn is_finite(&self) -> bool {
                <$ty>::is_finite(*self)
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_sum_saturates_at_sentinel() {
        assert_eq!(Weight::saturating_add(u32::MAX - 1, 5), u32::inf());
        assert_eq!(Weight::saturating_add(i32::MAX - 1, 5), i32::inf());
        assert_eq!(Weight::saturating_add(-3i32, -4), -7);
    }

    #[test]
    fn float_sentinel() {
        assert!(f64::inf().is_inf());
        assert!(!f64::MAX.is_inf());
        assert!(Weight::saturating_add(f64::MAX, f64::MAX).is_inf());
    }

    #[test]
    fn sentinel_and_nan_are_not_costs() {
        assert!(Weight::is_finite(&(u32::MAX - 1)));
        assert!(!Weight::is_finite(&u32::MAX));
        assert!(!Weight::is_finite(&i16::inf()));
        assert!(Weight::is_finite(&-7i16));

        assert!(Weight::is_finite(&f64::MAX));
        assert!(!Weight::is_finite(&f64::INFINITY));
        assert!(!Weight::is_finite(&f64::NEG_INFINITY));
        assert!(!Weight::is_finite(&f32::NAN));
    }

    #[test]
    fn negativity() {
        assert!((-1i64).is_negative());
        assert!(!0i64.is_negative());
        assert!(!5u8.is_negative());
        assert!((-0.5f32).is_negative());
    }
}
