//! `Display` formatting for [`Vector2D`].

use core::fmt;

use crate::Scalar;

use super::Vector2D;

impl<T: Scalar> fmt::Display for Vector2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vector(")?;
        self.x.fmt_component(f)?;
        f.write_str(", ")?;
        self.y.fmt_component(f)?;
        f.write_str(")")
    }
}
