use crate::types::Date;

///
/// DiscreteDomain
///
/// Adjacent-value stepping over an ordered type. `None` means the value has
/// no successor (or predecessor) representable in the domain.
///

pub trait DiscreteDomain<T> {
    fn next(&self, value: &T) -> Option<T>;

    fn previous(&self, value: &T) -> Option<T>;
}

impl<T, D: DiscreteDomain<T> + ?Sized> DiscreteDomain<T> for &D {
    fn next(&self, value: &T) -> Option<T> {
        (**self).next(value)
    }

    fn previous(&self, value: &T) -> Option<T> {
        (**self).previous(value)
    }
}

///
/// Integers
///
/// Unit stepping over every primitive integer type, stopping at the type's
/// extremes.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Integers;

macro_rules! impl_integer_domain {
    ($($ty:ty),* $(,)?) => {
        $(
            impl DiscreteDomain<$ty> for Integers {
                fn next(&self, value: &$ty) -> Option<$ty> {
                    value.checked_add(1)
                }

                fn previous(&self, value: &$ty) -> Option<$ty> {
                    value.checked_sub(1)
                }
            }
        )*
    };
}

impl_integer_domain!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

///
/// Days
///
/// Day stepping over `Date`.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Days;

impl DiscreteDomain<Date> for Days {
    fn next(&self, value: &Date) -> Option<Date> {
        value.checked_add_days(1)
    }

    fn previous(&self, value: &Date) -> Option<Date> {
        value.checked_add_days(-1)
    }
}
