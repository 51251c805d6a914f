//! Minimal algebra needed by the averaging statistics.
//!
//! Averages only need addition, subtraction and scaling by the scalar field,
//! so [`Mean`](crate::Mean) is written against this trait rather than against
//! `Float` directly. Every `num_traits::Float` is a one-dimensional `Vector`
//! over itself.

use num_traits::{Float, FromPrimitive};
use std::ops::{Add, Div, Mul, Sub};

/// Vector space over a float.
///
/// The `Copy` bound restricts this trait to stack-allocated types.
pub trait Vector:
    Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self::Field, Output = Self>
    + Div<Self::Field, Output = Self>
    + Sized
    + Copy
{
    /// Scalar field.
    type Field: Float + FromPrimitive + Copy;

    /// Zero vector of this space.
    fn zero() -> Self;

    /// Convert a count to the scalar field.
    ///
    /// Counts that do not fit become NaN, which then poisons the result
    /// instead of panicking.
    #[inline]
    fn from_usize(u: usize) -> Self::Field {
        <Self::Field as FromPrimitive>::from_usize(u).unwrap_or_else(Self::Field::nan)
    }
}

impl<F> Vector for F
where
    F: Float + FromPrimitive + Copy,
{
    type Field = F;

    #[inline]
    fn zero() -> Self {
        F::zero()
    }
}
