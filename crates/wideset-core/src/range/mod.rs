//! Module: range
//! Responsibility: intervals over ordered values and their projection across
//! order-compatible encodings.
//! Does not own: raw key encoding or scan execution.
//! Boundary: constraint layers call the transforms here to turn a logical
//! range into physical scan bounds that never admit extra matches.

mod domain;
mod transform;


use std::{
    fmt::{self, Display},
    ops::{Bound, RangeBounds},
};

pub use domain::{Days, DiscreteDomain, Integers};
pub use transform::{
    adjust_closed, transform_closed, transform_closed_conservative,
    transform_closed_conservative_by,
};

///
/// BoundType
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BoundType {
    Open,
    Closed,
}

impl BoundType {
    /// Kind of a finite bound; `None` when unbounded.
    #[must_use]
    pub const fn of<T>(bound: &Bound<T>) -> Option<Self> {
        match bound {
            Bound::Included(_) => Some(Self::Closed),
            Bound::Excluded(_) => Some(Self::Open),
            Bound::Unbounded => None,
        }
    }
}

///
/// Range
///
/// Interval with independently optional lower and upper bounds.
/// Construction does not reorder or validate endpoints; an inverted range is
/// simply empty.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Range<T> {
    lower: Bound<T>,
    upper: Bound<T>,
}

impl<T> Range<T> {
    #[must_use]
    pub const fn new(lower: Bound<T>, upper: Bound<T>) -> Self {
        Self { lower, upper }
    }

    /// `(-∞‥+∞)`
    #[must_use]
    pub const fn all() -> Self {
        Self::new(Bound::Unbounded, Bound::Unbounded)
    }

    /// `[lower‥upper]`
    #[must_use]
    pub const fn closed(lower: T, upper: T) -> Self {
        Self::new(Bound::Included(lower), Bound::Included(upper))
    }

    /// `(lower‥upper)`
    #[must_use]
    pub const fn open(lower: T, upper: T) -> Self {
        Self::new(Bound::Excluded(lower), Bound::Excluded(upper))
    }

    /// `[lower‥upper)`
    #[must_use]
    pub const fn closed_open(lower: T, upper: T) -> Self {
        Self::new(Bound::Included(lower), Bound::Excluded(upper))
    }

    /// `(lower‥upper]`
    #[must_use]
    pub const fn open_closed(lower: T, upper: T) -> Self {
        Self::new(Bound::Excluded(lower), Bound::Included(upper))
    }

    /// `[lower‥+∞)`
    #[must_use]
    pub const fn at_least(lower: T) -> Self {
        Self::new(Bound::Included(lower), Bound::Unbounded)
    }

    /// `(lower‥+∞)`
    #[must_use]
    pub const fn greater_than(lower: T) -> Self {
        Self::new(Bound::Excluded(lower), Bound::Unbounded)
    }

    /// `(-∞‥upper]`
    #[must_use]
    pub const fn at_most(upper: T) -> Self {
        Self::new(Bound::Unbounded, Bound::Included(upper))
    }

    /// `(-∞‥upper)`
    #[must_use]
    pub const fn less_than(upper: T) -> Self {
        Self::new(Bound::Unbounded, Bound::Excluded(upper))
    }

    /// `[value‥value]`
    #[must_use]
    pub fn singleton(value: T) -> Self
    where
        T: Clone,
    {
        Self::closed(value.clone(), value)
    }

    #[must_use]
    pub const fn lower_bound(&self) -> &Bound<T> {
        &self.lower
    }

    #[must_use]
    pub const fn upper_bound(&self) -> &Bound<T> {
        &self.upper
    }

    #[must_use]
    pub const fn has_lower_bound(&self) -> bool {
        !matches!(self.lower, Bound::Unbounded)
    }

    #[must_use]
    pub const fn has_upper_bound(&self) -> bool {
        !matches!(self.upper, Bound::Unbounded)
    }

    #[must_use]
    pub const fn lower_endpoint(&self) -> Option<&T> {
        endpoint(&self.lower)
    }

    #[must_use]
    pub const fn upper_endpoint(&self) -> Option<&T> {
        endpoint(&self.upper)
    }

    #[must_use]
    pub const fn lower_bound_type(&self) -> Option<BoundType> {
        BoundType::of(&self.lower)
    }

    #[must_use]
    pub const fn upper_bound_type(&self) -> Option<BoundType> {
        BoundType::of(&self.upper)
    }

    #[must_use]
    pub const fn is_unbounded(&self) -> bool {
        !self.has_lower_bound() && !self.has_upper_bound()
    }

    #[must_use]
    pub fn into_bounds(self) -> (Bound<T>, Bound<T>) {
        (self.lower, self.upper)
    }
}

impl<T: Ord> Range<T> {
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let above_lower = match &self.lower {
            Bound::Included(lower) => lower <= value,
            Bound::Excluded(lower) => lower < value,
            Bound::Unbounded => true,
        };
        let below_upper = match &self.upper {
            Bound::Included(upper) => value <= upper,
            Bound::Excluded(upper) => value < upper,
            Bound::Unbounded => true,
        };

        above_lower && below_upper
    }

    /// Whether no value of `T` can satisfy both bounds.
    ///
    /// Only endpoint order is considered; `(1‥2)` over integers is not
    /// reported empty here. Use `adjust_closed` for discrete emptiness.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let (Some(lower), Some(upper)) = (self.lower_endpoint(), self.upper_endpoint()) else {
            return false;
        };

        if lower < upper {
            return false;
        }
        if lower > upper {
            return true;
        }

        !matches!(self.lower, Bound::Included(_)) || !matches!(self.upper, Bound::Included(_))
    }
}

impl<T> RangeBounds<T> for Range<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.lower.as_ref()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.upper.as_ref()
    }
}

impl<T: Display> Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lower {
            Bound::Included(lower) => write!(f, "[{lower}")?,
            Bound::Excluded(lower) => write!(f, "({lower}")?,
            Bound::Unbounded => f.write_str("(-∞")?,
        }
        f.write_str("‥")?;
        match &self.upper {
            Bound::Included(upper) => write!(f, "{upper}]"),
            Bound::Excluded(upper) => write!(f, "{upper})"),
            Bound::Unbounded => f.write_str("+∞)"),
        }
    }
}

const fn endpoint<T>(bound: &Bound<T>) -> Option<&T> {
    match bound {
        Bound::Included(value) | Bound::Excluded(value) => Some(value),
        Bound::Unbounded => None,
    }
}
