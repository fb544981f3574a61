use crate::{
    error::Error,
    range::{BoundType, DiscreteDomain, Range},
};
use std::ops::Bound;
use tracing::{debug, trace};

///
/// transform_closed
///
/// Map each finite endpoint through a monotonic `function` and close it.
/// Bound kinds are not honored; an open source endpoint still becomes a
/// closed image endpoint. Use `transform_closed_conservative` when the
/// projection must not over-match.
///

#[must_use]
pub fn transform_closed<S, T>(range: &Range<S>, function: impl Fn(&S) -> T) -> Range<T> {
    match (range.lower_endpoint(), range.upper_endpoint()) {
        (Some(lower), Some(upper)) => Range::closed(function(lower), function(upper)),
        (Some(lower), None) => Range::at_least(function(lower)),
        (None, Some(upper)) => Range::at_most(function(upper)),
        (None, None) => Range::all(),
    }
}

///
/// transform_closed_conservative
///
/// Project `range` through a possibly lossy monotonic `function` onto the
/// tightest closed range over `T` that admits no value outside the source.
/// An upper endpoint equal to its own image keeps a closed upper bound.
///
/// `None` means the projection matches nothing, including the fully
/// unbounded source, which callers must special-case as "match all".
///

#[must_use]
pub fn transform_closed_conservative<S, T, D>(
    range: &Range<S>,
    function: impl Fn(&S) -> T,
    domain: &D,
) -> Option<Range<T>>
where
    S: PartialEq<T>,
    T: Ord,
    D: DiscreteDomain<T> + ?Sized,
{
    transform_closed_conservative_by(range, function, |source, image| source == image, domain)
}

///
/// transform_closed_conservative_by
///
/// As `transform_closed_conservative`, with endpoint exactness decided by
/// `is_exact(source, image)` instead of `PartialEq`.
///

#[must_use]
pub fn transform_closed_conservative_by<S, T, D>(
    range: &Range<S>,
    function: impl Fn(&S) -> T,
    is_exact: impl Fn(&S, &T) -> bool,
    domain: &D,
) -> Option<Range<T>>
where
    T: Ord,
    D: DiscreteDomain<T> + ?Sized,
{
    let projected = project_conservative(range, &function, &is_exact, domain);

    match &projected {
        Some(image) => trace!(
            origin = "range",
            lower = ?image.lower_bound_type(),
            upper = ?image.upper_bound_type(),
            "conservative projection"
        ),
        None => debug!(
            origin = "range",
            reason = "no_range",
            has_lower = range.has_lower_bound(),
            has_upper = range.has_upper_bound(),
            "conservative projection matches nothing"
        ),
    }

    projected
}

fn project_conservative<S, T, D>(
    range: &Range<S>,
    function: &impl Fn(&S) -> T,
    is_exact: &impl Fn(&S, &T) -> bool,
    domain: &D,
) -> Option<Range<T>>
where
    T: Ord,
    D: DiscreteDomain<T> + ?Sized,
{
    let upper_closed = range.upper_bound_type() == Some(BoundType::Closed);

    match (range.lower_endpoint(), range.upper_endpoint()) {
        (Some(lower), upper) => {
            // The lower endpoint's image is always skipped: values below an
            // open lower endpoint may share it.
            let after_lower = domain.next(&function(lower))?;
            let Some(upper) = upper else {
                return Some(Range::at_least(after_lower));
            };

            let upper_image = function(upper);
            if upper_closed && is_exact(upper, &upper_image) {
                return (after_lower <= upper_image)
                    .then(|| Range::closed(after_lower, upper_image));
            }

            let before_upper = domain.previous(&upper_image)?;

            (after_lower <= before_upper).then(|| Range::closed(after_lower, before_upper))
        }
        (None, Some(upper)) => {
            let upper_image = function(upper);
            if upper_closed && is_exact(upper, &upper_image) {
                return Some(Range::at_most(upper_image));
            }

            domain.previous(&upper_image).map(Range::at_most)
        }
        (None, None) => None,
    }
}

///
/// adjust_closed
///
/// Rewrite `range` as the equivalent closed range over a discrete domain by
/// stepping each open endpoint inward by one value. Unbounded sides stay
/// unbounded, but at least one side must be finite.
///

pub fn adjust_closed<T, D>(range: &Range<T>, domain: &D) -> Result<Range<T>, Error>
where
    T: Ord + Clone,
    D: DiscreteDomain<T> + ?Sized,
{
    if range.is_unbounded() {
        debug!(origin = "range", reason = "no_endpoints", "adjust_closed rejected");
        return Err(Error::range_invalid("Invalid range: no endpoints"));
    }

    let lower = match range.lower_bound() {
        Bound::Included(lower) => Bound::Included(lower.clone()),
        Bound::Excluded(lower) => Bound::Included(domain.next(lower).ok_or_else(|| {
            Error::range_invalid("Invalid range: open lower endpoint has no successor")
        })?),
        Bound::Unbounded => Bound::Unbounded,
    };
    let upper = match range.upper_bound() {
        Bound::Included(upper) => Bound::Included(upper.clone()),
        Bound::Excluded(upper) => Bound::Included(domain.previous(upper).ok_or_else(|| {
            Error::range_invalid("Invalid range: open upper endpoint has no predecessor")
        })?),
        Bound::Unbounded => Bound::Unbounded,
    };

    let adjusted = Range::new(lower, upper);
    if adjusted.is_empty() {
        debug!(origin = "range", reason = "inverted", "adjust_closed rejected");
        return Err(Error::range_invalid(
            "Invalid range: adjusted lower endpoint exceeds upper endpoint",
        ));
    }

    Ok(adjusted)
}
