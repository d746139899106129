//! # objhooks
//!
//! Standalone exercises for object customization hooks, written as explicit
//! Rust interfaces.
//!
//! One `use objhooks::prelude::*;` gives you the vector, the record with
//! intercepted attributes, and the lifecycle wrapper.
//!
//! ## Exercises
//!
//! | Binary | Shows |
//! |--------|-------|
//! | `vector_ops` | `+`, scalar `*` on either side, unary `-` |
//! | `vector_basics` | `+` and right-hand scalar `*` |
//! | `book_attributes` | attribute read, fallback read, write, refused delete |
//! | `number_lifecycle` | allocate, initialize, read, teardown |
//!
//! Each binary installs logging with [`init_tracing`] and takes no arguments.

mod logging;

pub use logging::{DEFAULT_DIRECTIVE, init_tracing};
pub use objhooks_core as core;

/// Glob-import convenience: `use objhooks::prelude::*;`
pub mod prelude {
    pub use objhooks_core::prelude::*;
}
