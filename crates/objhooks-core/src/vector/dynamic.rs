//! Dynamically typed operands with cooperative operator dispatch.
//!
//! With static types `vector * "text"` does not compile, so the "operation
//! not supported" path only exists once operand types are decided at run
//! time. [`Operand`] carries such a value and [`binary`] resolves an operator
//! in two steps:
//!
//! 1. the left operand's forward hook ([`Operand::forward`]) either produces
//!    a value or answers [`Outcome::NotImplemented`];
//! 2. on `NotImplemented`, the right operand's reflected hook
//!    ([`Operand::reflected`]) gets a chance.
//!
//! When both decline, the caller receives [`CoreError::UnsupportedOperand`].
//!
//! ```
//! # use objhooks_core::vector::{Operand, Vector2D, dynamic};
//! let v = Operand::from(Vector2D::new(60_i64, 80));
//! let scaled = dynamic::mul(&Operand::Int(3), &v).unwrap();
//! assert_eq!(scaled.to_string(), "Vector(180, 240)");
//! assert!(dynamic::mul(&v, &Operand::from("abc")).is_err());
//! ```

use core::fmt;

use crate::error::{CoreError, Result};

use super::Vector2D;

/// A run-time typed value taking part in operator dispatch.
///
/// Integer vectors keep exact `i64` components; they only turn into float
/// vectors when combined with a float or when a component overflows.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Int(i64),
    Float(f64),
    Text(String),
    IntVector(Vector2D<i64>),
    FloatVector(Vector2D<f64>),
}

/// Answer of a single operator hook.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Value(Operand),
    /// The hook does not handle this operand combination; dispatch should
    /// try the other side.
    NotImplemented,
}

/// Binary operators that go through cooperative dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Mul,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Mul => "*",
        }
    }

    fn apply_f64(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Mul => a * b,
        }
    }

    fn apply_i64(self, a: i64, b: i64) -> Option<i64> {
        match self {
            Self::Add => a.checked_add(b),
            Self::Mul => a.checked_mul(b),
        }
    }
}

impl Operand {
    /// Short type name used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "str",
            Self::IntVector(_) | Self::FloatVector(_) => "Vector",
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn as_number(&self) -> Option<f64> {
        match *self {
            Self::Int(i) => Some(i as f64),
            Self::Float(f) => Some(f),
            _ => None,
        }
    }

    fn as_float_vector(&self) -> Option<Vector2D<f64>> {
        match *self {
            Self::IntVector(v) => Some(to_float(v)),
            Self::FloatVector(v) => Some(v),
            _ => None,
        }
    }

    /// Forward hook: `self <op> rhs`.
    pub fn forward(&self, op: BinaryOp, rhs: &Operand) -> Outcome {
        match (op, self, rhs) {
            (_, Self::Int(a), Self::Int(b)) => Outcome::Value(int_op(op, *a, *b)),
            (_, Self::Int(_) | Self::Float(_), Self::Int(_) | Self::Float(_)) => {
                match (self.as_number(), rhs.as_number()) {
                    (Some(a), Some(b)) => Outcome::Value(Self::Float(op.apply_f64(a, b))),
                    _ => Outcome::NotImplemented,
                }
            }
            (BinaryOp::Add, Self::IntVector(a), Self::IntVector(b)) => {
                Outcome::Value(int_vector_op(op, *a, *b))
            }
            (BinaryOp::Add, Self::IntVector(_) | Self::FloatVector(_), _) => {
                match (self.as_float_vector(), rhs.as_float_vector()) {
                    (Some(a), Some(b)) => Outcome::Value(Self::FloatVector(a + b)),
                    _ => Outcome::NotImplemented,
                }
            }
            (BinaryOp::Add, Self::Text(a), Self::Text(b)) => {
                Outcome::Value(Self::Text(format!("{a}{b}")))
            }
            (BinaryOp::Mul, Self::IntVector(v), Self::Int(k)) => {
                Outcome::Value(int_vector_op(op, *v, Vector2D::new(*k, *k)))
            }
            (BinaryOp::Mul, Self::IntVector(_) | Self::FloatVector(_), Self::Float(k)) => {
                match self.as_float_vector() {
                    Some(v) => Outcome::Value(Self::FloatVector(v * *k)),
                    None => Outcome::NotImplemented,
                }
            }
            (BinaryOp::Mul, Self::FloatVector(v), k) => match k.as_number() {
                Some(k) => Outcome::Value(Self::FloatVector(v * k)),
                None => Outcome::NotImplemented,
            },
            _ => Outcome::NotImplemented,
        }
    }

    /// Reflected hook: `lhs <op> self`, tried after `lhs` declined.
    pub fn reflected(&self, op: BinaryOp, lhs: &Operand) -> Outcome {
        match (op, self) {
            // Scaling commutes, so the reflected form reuses the forward one.
            (BinaryOp::Mul, Self::IntVector(_) | Self::FloatVector(_)) => self.forward(op, lhs),
            _ => Outcome::NotImplemented,
        }
    }

    /// Unary negation hook. `None` when the operand has no sign.
    #[allow(clippy::cast_precision_loss)]
    pub fn negated(&self) -> Option<Operand> {
        match self {
            Self::Int(i) => Some(i.checked_neg().map_or(Self::Float(-(*i as f64)), Self::Int)),
            Self::Float(f) => Some(Self::Float(-f)),
            Self::IntVector(v) => Some(
                v.x()
                    .checked_neg()
                    .zip(v.y().checked_neg())
                    .map_or_else(|| Self::FloatVector(-to_float(*v)), |(x, y)| {
                        Self::IntVector(Vector2D::new(x, y))
                    }),
            ),
            Self::FloatVector(v) => Some(Self::FloatVector(-v)),
            Self::Text(_) => None,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn to_float(v: Vector2D<i64>) -> Vector2D<f64> {
    Vector2D::new(v.x() as f64, v.y() as f64)
}

#[allow(clippy::cast_precision_loss)]
fn int_op(op: BinaryOp, a: i64, b: i64) -> Operand {
    op.apply_i64(a, b)
        .map_or_else(|| Operand::Float(op.apply_f64(a as f64, b as f64)), Operand::Int)
}

/// Component-wise integer arithmetic, promoted to floats on overflow.
fn int_vector_op(op: BinaryOp, a: Vector2D<i64>, b: Vector2D<i64>) -> Operand {
    match (op.apply_i64(a.x(), b.x()), op.apply_i64(a.y(), b.y())) {
        (Some(x), Some(y)) => Operand::IntVector(Vector2D::new(x, y)),
        _ => {
            let (a, b) = (to_float(a), to_float(b));
            Operand::FloatVector(a.zip_map(&b, |p, q| op.apply_f64(p, q)))
        }
    }
}

/// Resolve `lhs <op> rhs` through the forward hook, then the reflected one.
pub fn binary(op: BinaryOp, lhs: &Operand, rhs: &Operand) -> Result<Operand> {
    if let Outcome::Value(v) = lhs.forward(op, rhs) {
        return Ok(v);
    }
    tracing::trace!(
        op = op.symbol(),
        lhs = lhs.kind(),
        rhs = rhs.kind(),
        "forward hook declined, trying reflected"
    );
    match rhs.reflected(op, lhs) {
        Outcome::Value(v) => Ok(v),
        Outcome::NotImplemented => Err(CoreError::UnsupportedOperand {
            op: op.symbol(),
            lhs: lhs.kind(),
            rhs: Some(rhs.kind()),
        }),
    }
}

/// `lhs + rhs`.
pub fn add(lhs: &Operand, rhs: &Operand) -> Result<Operand> {
    binary(BinaryOp::Add, lhs, rhs)
}

/// `lhs * rhs`.
pub fn mul(lhs: &Operand, rhs: &Operand) -> Result<Operand> {
    binary(BinaryOp::Mul, lhs, rhs)
}

/// `-operand`.
pub fn neg(operand: &Operand) -> Result<Operand> {
    operand.negated().ok_or(CoreError::UnsupportedOperand {
        op: "unary -",
        lhs: operand.kind(),
        rhs: None,
    })
}

// ======================================================================
// Conversions / formatting
// ======================================================================

impl From<i64> for Operand {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Operand {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Operand {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Operand {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<Vector2D<i64>> for Operand {
    fn from(v: Vector2D<i64>) -> Self {
        Self::IntVector(v)
    }
}

impl From<Vector2D<f64>> for Operand {
    fn from(v: Vector2D<f64>) -> Self {
        Self::FloatVector(v)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::IntVector(v) => write!(f, "{v}"),
            Self::FloatVector(v) => write!(f, "{v}"),
        }
    }
}
