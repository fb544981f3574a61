//! Core of wideset: field-to-column mappings for wide-column storage and the
//! predicate/range algebra used to push dataset constraints down to it.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod error;
pub mod mapping;
pub mod predicate;
pub mod range;
pub mod types;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or helper functions are re-exported here.
///

pub mod prelude {
    pub use crate::{
        mapping::{FieldMapping, MappingType},
        predicate::{Exists, In, Predicate},
        range::{BoundType, DiscreteDomain, Range},
        types::{Date, Timestamp},
    };
}
