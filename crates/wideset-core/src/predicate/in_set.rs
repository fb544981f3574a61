use crate::{
    error::Error,
    predicate::{Predicate, non_empty},
};
use std::collections::BTreeSet;
use tracing::debug;

///
/// In
///
/// Membership test over an immutable, deduplicated candidate set.
/// Equality and hashing follow set contents, not insertion order.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct In<T: Ord> {
    set: BTreeSet<T>,
}

impl<T: Ord> In<T> {
    /// Build from any source of candidates; fails when none are supplied.
    pub fn try_from_iter(values: impl IntoIterator<Item = T>) -> Result<Self, Error> {
        let set = non_empty(values.into_iter().collect(), "No values to match")?;

        Ok(Self { set })
    }

    /// Build from a literal list of candidates.
    ///
    /// Unlike [`In::try_from_iter`] an empty list is accepted and yields a
    /// predicate that matches nothing.
    #[must_use]
    pub fn from_values(values: &[T]) -> Self
    where
        T: Clone,
    {
        Self {
            set: values.iter().cloned().collect(),
        }
    }

    #[must_use]
    pub const fn values(&self) -> &BTreeSet<T> {
        &self.set
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.set.contains(value)
    }

    /// Keep only the candidates accepted by `predicate`.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Result<Self, Error>
    where
        T: Clone,
    {
        let set = self.set.iter().filter(|value| predicate(value)).cloned();

        non_empty(set.collect(), "Filter predicate produces empty set")
            .map(|set| Self { set })
            .inspect_err(|_| {
                debug!(origin = "predicate", reason = "empty_filter", candidates = self.set.len());
            })
    }

    /// Keep only the candidates accepted by another predicate, such as a
    /// `Range` or a second `In`.
    pub fn filter_by(&self, predicate: impl Predicate<T>) -> Result<Self, Error>
    where
        T: Clone,
    {
        self.filter(|value| predicate.apply(Some(value)))
    }

    /// Map every candidate through `function`; colliding images collapse.
    #[must_use]
    pub fn transform<V: Ord>(&self, function: impl Fn(&T) -> V) -> In<V> {
        In {
            set: self.set.iter().map(function).collect(),
        }
    }
}

impl<T: Ord> Predicate<T> for In<T> {
    fn apply(&self, test: Option<&T>) -> bool {
        test.is_some_and(|value| self.set.contains(value))
    }
}

impl<T: Ord> IntoIterator for In<T> {
    type Item = T;
    type IntoIter = std::collections::btree_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.into_iter()
    }
}

impl<'a, T: Ord> IntoIterator for &'a In<T> {
    type Item = &'a T;
    type IntoIter = std::collections::btree_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.iter()
    }
}
