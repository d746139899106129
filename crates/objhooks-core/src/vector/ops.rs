//! Arithmetic operators for [`Vector2D`].
//!
//! Implements:
//! - `Vector2D<T> + Vector2D<T>` and `-` (component-wise)
//! - `Vector2D<T> * T` and `T * Vector2D<T>` (scalar on either side)
//! - `Neg` for [`Signed`] component types

use core::ops::{Add, Mul, Neg, Sub};

use crate::{Scalar, Signed};

use super::Vector2D;

// ======================================================================
// Vector + Vector  (component-wise)
// ======================================================================

macro_rules! impl_vector_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $trait for Vector2D<T> {
            type Output = Vector2D<T>;

            #[inline]
            fn $method(self, rhs: Vector2D<T>) -> Vector2D<T> {
                Vector2D::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Scalar> $trait for &Vector2D<T> {
            type Output = Vector2D<T>;

            #[inline]
            fn $method(self, rhs: &Vector2D<T>) -> Vector2D<T> {
                Vector2D::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }
    };
}

impl_vector_binop!(Add, add, +);
impl_vector_binop!(Sub, sub, -);

// ======================================================================
// Vector * scalar
// ======================================================================

impl<T: Scalar> Mul<T> for Vector2D<T> {
    type Output = Vector2D<T>;

    #[inline]
    fn mul(self, rhs: T) -> Vector2D<T> {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Scalar> Mul<T> for &Vector2D<T> {
    type Output = Vector2D<T>;

    #[inline]
    fn mul(self, rhs: T) -> Vector2D<T> {
        Vector2D::new(self.x * rhs, self.y * rhs)
    }
}

// ======================================================================
// scalar * Vector  (coherence rules require one impl per primitive)
// ======================================================================

macro_rules! impl_scalar_lhs_mul {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Mul<Vector2D<$ty>> for $ty {
                type Output = Vector2D<$ty>;

                #[inline]
                fn mul(self, rhs: Vector2D<$ty>) -> Vector2D<$ty> {
                    rhs * self
                }
            }

            impl Mul<&Vector2D<$ty>> for $ty {
                type Output = Vector2D<$ty>;

                #[inline]
                fn mul(self, rhs: &Vector2D<$ty>) -> Vector2D<$ty> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(
    f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize
);

// ======================================================================
// Negation
// ======================================================================

impl<T: Signed> Neg for Vector2D<T> {
    type Output = Vector2D<T>;

    #[inline]
    fn neg(self) -> Vector2D<T> {
        Vector2D::new(-self.x, -self.y)
    }
}

impl<T: Signed> Neg for &Vector2D<T> {
    type Output = Vector2D<T>;

    #[inline]
    fn neg(self) -> Vector2D<T> {
        Vector2D::new(-self.x, -self.y)
    }
}

// ======================================================================
// Named forms of the operators (addition is only spelled `+`)
// ======================================================================

impl<T: Scalar> Vector2D<T> {
    /// Component-wise product with `k`, same as `self * k` and `k * self`.
    pub fn scale(&self, k: T) -> Vector2D<T> {
        self * k
    }
}

impl<T: Signed> Vector2D<T> {
    /// Flip the sign of both components. Equal to `self.scale(-1)`.
    pub fn negate(&self) -> Vector2D<T> {
        -self
    }
}
