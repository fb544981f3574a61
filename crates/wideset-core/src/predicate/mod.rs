//! Module: predicate
//! Responsibility: immutable value tests retained per logical field.
//! Does not own: range arithmetic (see `range`) or predicate push-down.
//! Boundary: constraint layers combine these per field before lowering them
//! to physical scan bounds.

mod exists;
mod in_set;

#[cfg(test)]
mod tests;

use crate::{error::Error, range::Range};
use std::collections::BTreeSet;

pub use exists::Exists;
pub use in_set::In;

///
/// Predicate
///
/// Boolean test over an optional value. `None` models an absent field.
///

pub trait Predicate<T> {
    fn apply(&self, value: Option<&T>) -> bool;
}

impl<T, P: Predicate<T> + ?Sized> Predicate<T> for &P {
    fn apply(&self, value: Option<&T>) -> bool {
        (**self).apply(value)
    }
}

impl<T: Ord> Predicate<T> for Range<T> {
    fn apply(&self, value: Option<&T>) -> bool {
        value.is_some_and(|value| self.contains(value))
    }
}

/// Shared presence test, viewed at `T`.
#[must_use]
pub const fn exists<T>() -> Exists<T> {
    Exists::new()
}

/// Membership test over a non-empty set of candidates.
pub fn in_set<T: Ord>(values: impl IntoIterator<Item = T>) -> Result<In<T>, Error> {
    In::try_from_iter(values)
}

/// Membership test over a literal candidate list; an empty list is accepted.
#[must_use]
pub fn in_values<T: Ord + Clone>(values: &[T]) -> In<T> {
    In::from_values(values)
}

// Shared by `In` construction paths that must reject an empty candidate set.
fn non_empty<T>(set: BTreeSet<T>, message: &str) -> Result<BTreeSet<T>, Error> {
    if set.is_empty() {
        return Err(Error::predicate_invalid(message));
    }

    Ok(set)
}
