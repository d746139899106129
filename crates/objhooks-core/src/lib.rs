//! `objhooks-core` — explicit Rust forms of object customization hooks.
//!
//! Provides a 2D vector with overloaded arithmetic, a record with
//! intercepted attribute access, and a wrapper with observable two-phase
//! construction and teardown. The `objhooks` crate builds its exercise
//! programs on top of this one.
//!
//! # Design
//!
//! - Operators are `std::ops` impls; cooperative "not implemented" fallback
//!   lives in [`vector::dynamic`] for operands typed at run time.
//! - Attribute hooks are the [`AttributeAccess`] trait, resolved by name with
//!   no reflection.
//! - Lifecycle markers go through a [`LifecycleObserver`], and teardown is
//!   tied to `Drop` so it fires exactly once.

pub mod dtype;
pub mod error;
pub mod lifecycle;
pub mod record;
pub mod vector;

// Re-export key types at crate root for convenience.
pub use dtype::{Scalar, Signed};
pub use error::{CoreError, Result};
pub use lifecycle::{EventLog, LifecycleEvent, LifecycleObserver, Number, TracingObserver};
pub use record::{AttrValue, AttributeAccess, Book, CONTENTS_PLACEHOLDER};
pub use vector::{Operand, Vector2D};

/// Items intended for glob-import: `use objhooks_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Scalar, Signed};
    pub use crate::error::{CoreError, Result};
    pub use crate::lifecycle::{
        EventLog, LifecycleEvent, LifecycleObserver, Number, TracingObserver,
    };
    pub use crate::record::{AttributeAccess, Book, CONTENTS_PLACEHOLDER};
    pub use crate::vector::Vector2D;
    pub use crate::vector::dynamic::{self, Operand};
}
