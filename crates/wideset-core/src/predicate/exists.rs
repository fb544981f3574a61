use crate::predicate::Predicate;
use std::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

///
/// Exists
///
/// Stateless presence test. Carries no data, so one value serves every `T`
/// and can be copied and shared across threads freely.
///

pub struct Exists<T: ?Sized> {
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized> Exists<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// View this predicate at another value type.
    #[must_use]
    pub const fn cast<U: ?Sized>(self) -> Exists<U> {
        Exists::new()
    }
}

impl<T> Predicate<T> for Exists<T> {
    fn apply(&self, value: Option<&T>) -> bool {
        value.is_some()
    }
}

// Manual impls: derives would needlessly bound `T`.

impl<T: ?Sized> Clone for Exists<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Exists<T> {}

impl<T: ?Sized> Default for Exists<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> PartialEq for Exists<T> {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl<T: ?Sized> Eq for Exists<T> {}

impl<T: ?Sized> Hash for Exists<T> {
    fn hash<H: Hasher>(&self, _: &mut H) {}
}

impl<T: ?Sized> fmt::Debug for Exists<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Exists")
    }
}
