//! Numeric type hierarchy for vector components.
//!
//! The trait hierarchy is:
//! ```text
//! Scalar
//!   └── Signed  (i8 .. i64, isize, f32, f64)
//! ```
//!
//! [`Vector2D`](crate::vector::Vector2D) is generic over [`Scalar`], so the
//! same arithmetic works for integer and floating-point components. Negation
//! is only offered where the component type has a sign.

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Scalar — the root trait for every numeric component type
// ---------------------------------------------------------------------------

/// Base trait for all numeric types usable as vector components.
pub trait Scalar:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Default
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Write `self` as a vector component.
    ///
    /// Floats keep their fractional part even when it is zero (`180.0`), so
    /// float and integer vectors render differently.
    fn fmt_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

// ---------------------------------------------------------------------------
// Signed
// ---------------------------------------------------------------------------

/// Scalars that can change sign.
pub trait Signed: Scalar + Neg<Output = Self> {
    /// `-1`, the factor equivalent to negation.
    fn minus_one() -> Self {
        -Self::one()
    }
}

// ===========================================================================
// Macro implementations
// ===========================================================================

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            fn fmt_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{self:?}")
            }
        }

        impl Signed for $ty {}
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

macro_rules! impl_scalar_int {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
        }
    };
    ($ty:ty, signed) => {
        impl_scalar_int!($ty);

        impl Signed for $ty {}
    };
}

impl_scalar_int!(i8, signed);
impl_scalar_int!(i16, signed);
impl_scalar_int!(i32, signed);
impl_scalar_int!(i64, signed);
impl_scalar_int!(isize, signed);
impl_scalar_int!(u8);
impl_scalar_int!(u16);
impl_scalar_int!(u32);
impl_scalar_int!(u64);
impl_scalar_int!(usize);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_zero_one() {
        assert_eq!(f64::zero(), 0.0);
        assert_eq!(f64::one(), 1.0);
        assert_eq!(i32::zero(), 0);
        assert_eq!(u8::one(), 1);
    }

    struct Component<T: Scalar>(T);

    impl<T: Scalar> fmt::Display for Component<T> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            self.0.fmt_component(f)
        }
    }

    #[test]
    fn test_fmt_component_keeps_float_fraction() {
        assert_eq!(Component(180.0_f64).to_string(), "180.0");
        assert_eq!(Component(-0.5_f32).to_string(), "-0.5");
        assert_eq!(Component(180_i32).to_string(), "180");
    }

    #[test]
    fn test_minus_one() {
        assert_eq!(i64::minus_one(), -1);
        assert_eq!(f32::minus_one(), -1.0);
    }
}
