use super::*;
use crate::error::ErrorClass;
use proptest::prelude::*;
use std::{
    collections::BTreeSet,
    hash::{DefaultHasher, Hash, Hasher},
};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

const fn assert_shareable<T: Send + Sync + Copy + 'static>() {}

#[test]
fn exists_accepts_any_present_value() {
    let exists = exists::<String>();

    assert!(exists.apply(Some(&String::new())));
    assert!(!exists.apply(None));
}

#[test]
fn exists_is_one_stateless_value_for_every_type() {
    assert_eq!(std::mem::size_of::<Exists<String>>(), 0);
    assert_eq!(exists::<u64>(), Exists::default());
    assert_eq!(hash_of(&exists::<u64>()), hash_of(&exists::<u64>()));
    assert_shareable::<Exists<String>>();
    assert_shareable::<Exists<std::rc::Rc<u8>>>();

    let viewed: Exists<i32> = exists::<String>().cast();
    assert!(viewed.apply(Some(&0)));
    assert_eq!(format!("{viewed:?}"), "Exists");
}

#[test]
fn in_matches_members_only() {
    let pred = in_set([1, 2, 3]).unwrap();

    assert!(pred.apply(Some(&2)));
    assert!(!pred.apply(Some(&4)));
    assert!(!pred.apply(None));
}

#[test]
fn in_collapses_duplicate_candidates() {
    let pred = in_set(["a", "b", "a", "b"]).unwrap();

    assert_eq!(pred.len(), 2);
    assert_eq!(pred, in_values(&["b", "a"]));
}

#[test]
fn in_equality_ignores_insertion_order() {
    let left = in_set(vec![3, 1, 2]).unwrap();
    let right = in_set(vec![1, 2, 3]).unwrap();

    assert_eq!(left, right);
    assert_eq!(hash_of(&left), hash_of(&right));
    assert_ne!(left, in_set(vec![1, 2]).unwrap());
}

#[test]
fn in_from_empty_set_is_rejected() {
    let err = in_set(Vec::<i32>::new()).expect_err("empty candidates");

    assert_eq!(err.class, ErrorClass::InvalidArgument);
    assert_eq!(err.message, "No values to match");
}

#[test]
fn in_from_empty_literal_list_is_accepted() {
    let pred = in_values::<i32>(&[]);

    assert!(pred.is_empty());
    assert!(!pred.apply(Some(&0)));
    assert!(!pred.apply(None));
}

#[test]
fn filter_keeps_matching_members() {
    let pred = in_set([1, 2, 3]).unwrap();

    let even = pred.filter(|value| value % 2 == 0).unwrap();

    assert_eq!(even, in_set([2]).unwrap());
    assert_eq!(pred.len(), 3, "filter must not modify the source");
}

#[test]
fn filter_to_empty_is_rejected() {
    let pred = in_set([1, 3, 5]).unwrap();

    let err = pred.filter(|value| value % 2 == 0).expect_err("no even members");

    assert!(err.is_invalid_argument());
    assert_eq!(err.message, "Filter predicate produces empty set");
}

#[test]
fn filter_by_composes_with_other_predicates() {
    let pred = in_set([1, 5, 9, 12]).unwrap();

    let narrowed = pred.filter_by(Range::closed(4, 10)).unwrap();
    assert_eq!(narrowed, in_set([5, 9]).unwrap());

    let allowed = in_set([9, 12, 40]).unwrap();
    assert_eq!(pred.filter_by(&allowed).unwrap(), in_set([9, 12]).unwrap());
    assert_eq!(pred.filter_by(exists::<i32>()).unwrap(), pred);
}

#[test]
fn filter_by_to_empty_is_rejected() {
    let pred = in_set([1, 5]).unwrap();

    let err = pred.filter_by(Range::at_least(6)).expect_err("nothing above 5");

    assert_eq!(err.class, ErrorClass::InvalidArgument);
    assert_eq!(err.message, "Filter predicate produces empty set");
}

#[test]
fn transform_collapses_colliding_images() {
    let pred = in_set([1, 2, 3]).unwrap();

    let parity = pred.transform(|value| value % 2);

    assert_eq!(parity, in_set([0, 1]).unwrap());
    assert!(parity.len() < pred.len());
}

#[test]
fn transform_can_change_value_type() {
    let pred = in_set(["b", "a"]).unwrap();

    let owned = pred.transform(|value| value.to_uppercase());

    assert!(owned.apply(Some(&"A".to_string())));
    assert_eq!(owned.into_iter().collect::<Vec<_>>(), ["A", "B"]);
}

#[test]
fn range_acts_as_a_predicate() {
    let range = Range::closed_open(10, 20);

    assert!(range.apply(Some(&10)));
    assert!(!range.apply(Some(&20)));
    assert!(!range.apply(None));
}

proptest! {
    #[test]
    fn in_never_matches_absent_values(values in prop::collection::btree_set(any::<i64>(), 0..16)) {
        let literal = in_values(&values.iter().copied().collect::<Vec<_>>());

        prop_assert!(!literal.apply(None));
        if let Ok(pred) = in_set(values) {
            prop_assert!(!pred.apply(None));
        }
    }

    #[test]
    fn filter_matches_set_filter(values in prop::collection::vec(0..64u8, 1..32), modulus in 1..8u8) {
        let pred = in_set(values.clone()).unwrap();
        let expected: BTreeSet<u8> = values.into_iter().filter(|v| v % modulus == 0).collect();

        match pred.filter(|v| v % modulus == 0) {
            Ok(filtered) => prop_assert_eq!(filtered.values(), &expected),
            Err(err) => {
                prop_assert!(expected.is_empty());
                prop_assert!(err.is_invalid_argument());
            }
        }
    }

    #[test]
    fn transform_image_is_never_larger(values in prop::collection::vec(any::<i32>(), 1..32), divisor in 1..100i32) {
        let pred = in_set(values).unwrap();
        let image = pred.transform(|v| v / divisor);

        prop_assert!(image.len() <= pred.len());
        for value in &pred {
            prop_assert!(image.contains(&(value / divisor)));
        }
    }
}
