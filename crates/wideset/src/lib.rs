//! ## Crate layout
//! - `core`: field mappings, predicates, ranges, and value types.
//! - `mapping`: where each dataset field lives in the wide-column store.
//! - `predicate`: `Exists` and `In` value tests.
//! - `range`: intervals, discrete domains, and range projection.
//!
//! The `prelude` module carries the domain vocabulary only; errors and the
//! range transform functions are imported from their modules.

pub use wideset_core as core;
pub use wideset_core::{mapping, predicate, range, types};

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::error::{Error, ErrorClass, ErrorOrigin};

///
/// Prelude
///

pub mod prelude {
    pub use crate::core::prelude::*;
}
