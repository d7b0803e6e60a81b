//! Weight types accepted by the Kruskal builder.

use std::{cmp::Ordering, fmt::Debug, ops::Add};

/// Numeric weight carried by an [`Edge`](crate::Edge).
///
/// Sorting uses [`EdgeWeight::weight_cmp`], which must be a total order.
/// Floating-point implementations use the IEEE 754 total order and report
/// NaN and infinities through [`EdgeWeight::is_finite`], so the builder can
/// reject them before any edge is processed.
///
/// Totals are accumulated with [`Add`]; overflow follows the usual semantics
/// of the underlying type, so pick a type wide enough for the input.
pub trait EdgeWeight: Copy + Debug + PartialEq + Add<Output = Self> {
    /// Additive identity used as the starting total.
    const ZERO: Self;

    /// Compares two weights in ascending order.
    fn weight_cmp(&self, other: &Self) -> Ordering;

    /// Returns `false` for values that cannot take part in a spanning forest.
    #[must_use]
    fn is_finite(&self) -> bool {
        true
    }
}

macro_rules! impl_integer_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl EdgeWeight for $ty {
                const ZERO: Self = 0;

                #[inline]
                fn weight_cmp(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }
            }
        )+
    };
}

macro_rules! impl_float_weight {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl EdgeWeight for $ty {
                const ZERO: Self = 0.0;

                #[inline]
                fn weight_cmp(&self, other: &Self) -> Ordering {
                    <$ty>::total_cmp(self, other)
                }

                #[inline]
                fn is_finite(&self) -> bool {
                    <$ty>::is_finite(*self)
                }
            }
        )+
    };
}

impl_integer_weight!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);
impl_float_weight!(f32, f64);
