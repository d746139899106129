//! Two-dimensional vector value type with overloaded arithmetic.
//!
//! [`Vector2D`] is a small `Copy` value generic over any [`Scalar`]. Every
//! operation returns a new vector; operands are never mutated. Equality in the
//! exercises is checked through the `Vector(x, y)` rendering, but `PartialEq`
//! is derived as well.

mod display;
pub mod dynamic;
mod ops;

pub use dynamic::{Operand, Outcome};

use crate::Scalar;

/// A vector with `x` and `y` components.
///
/// # Type Parameters
///
/// - `T`: The component type, which must implement [`Scalar`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D<T: Scalar> {
    x: T,
    y: T,
}

impl<T: Scalar> Vector2D<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a vector from its two components.
    ///
    /// ```
    /// # use objhooks_core::vector::Vector2D;
    /// let v = Vector2D::new(10, 20);
    /// assert_eq!(v.to_string(), "Vector(10, 20)");
    /// ```
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    // ------------------------------------------------------------------
    // Map / apply
    // ------------------------------------------------------------------

    /// Apply a function to both components, returning a new vector.
    pub fn map<F>(&self, f: F) -> Vector2D<T>
    where
        F: Fn(T) -> T,
    {
        Vector2D::new(f(self.x), f(self.y))
    }

    /// Apply a function component-wise to two vectors.
    pub fn zip_map<F>(&self, other: &Vector2D<T>, f: F) -> Vector2D<T>
    where
        F: Fn(T, T) -> T,
    {
        Vector2D::new(f(self.x, other.x), f(self.y, other.y))
    }

    /// Dot product `x1 * x2 + y1 * y2`.
    pub fn dot(&self, other: &Vector2D<T>) -> T {
        self.x * other.x + self.y * other.y
    }
}

impl<T: Scalar> From<(T, T)> for Vector2D<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> From<Vector2D<T>> for (T, T) {
    fn from(v: Vector2D<T>) -> Self {
        (v.x, v.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let v = Vector2D::new(3, 4);
        assert_eq!(v.x(), 3);
        assert_eq!(v.y(), 4);
    }

    #[test]
    fn test_zero() {
        assert_eq!(Vector2D::<i32>::zero(), Vector2D::new(0, 0));
    }

    #[test]
    fn test_map_and_zip_map() {
        let a = Vector2D::new(1, 2);
        let b = Vector2D::new(10, 20);
        assert_eq!(a.map(|c| c * 5), Vector2D::new(5, 10));
        assert_eq!(a.zip_map(&b, |p, q| q - p), Vector2D::new(9, 18));
    }

    #[test]
    fn test_dot() {
        let a = Vector2D::new(1.5_f64, 2.0);
        let b = Vector2D::new(2.0, 0.5);
        assert!((a.dot(&b) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tuple_conversions() {
        let v: Vector2D<i64> = (7, -3).into();
        let pair: (i64, i64) = v.into();
        assert_eq!(pair, (7, -3));
    }
}
