//! Stored data matches what was set, until it is unset.

use proptest::prelude::*;
use settable::{NameCollection, NumberCollection, Outcome, Payload, SetError, Settable};

// ============================================================================
// STRATEGIES
// ============================================================================

fn names_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z ]{0,16}", 0..12)
}

fn values_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 0..32)
}

// ============================================================================
// NAME COLLECTION
// ============================================================================

proptest! {
    /// Property: every stored index returns its name; the count is the first failure.
    #[test]
    fn prop_names_indexed_exactly(names in names_strategy()) {
        let borrowed: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut collection = NameCollection::new();
        prop_assert_eq!(collection.set(Payload::Names(&borrowed)), Ok(Outcome::Done));
        prop_assert_eq!(collection.len(), names.len());

        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(collection.get_at(i), Ok(name.as_str()));
        }
        prop_assert_eq!(
            collection.get_at(names.len()),
            Err(SetError::OutOfRange { index: names.len(), count: names.len() })
        );
    }

    /// Property: a second set never changes stored names.
    #[test]
    fn prop_names_second_set_ignored(first in names_strategy(), second in names_strategy()) {
        let first_ref: Vec<&str> = first.iter().map(String::as_str).collect();
        let second_ref: Vec<&str> = second.iter().map(String::as_str).collect();
        let mut collection = NameCollection::new();
        collection.set(Payload::Names(&first_ref)).unwrap();

        prop_assert_eq!(collection.set(Payload::Names(&second_ref)), Ok(Outcome::AlreadySet));
        prop_assert_eq!(collection.iter().collect::<Vec<_>>(), first_ref);
    }

    /// Property: `read_at` is a character prefix of `get_at` no longer than `max_len - 1`.
    #[test]
    fn prop_read_at_is_bounded_prefix(names in names_strategy(), max_len in 0usize..20) {
        prop_assume!(!names.is_empty());
        let borrowed: Vec<&str> = names.iter().map(String::as_str).collect();
        let mut collection = NameCollection::new();
        collection.set(Payload::Names(&borrowed)).unwrap();

        for i in 0..names.len() {
            let read = collection.read_at(i, max_len).unwrap();
            prop_assert!(read.chars().count() <= max_len.saturating_sub(1));
            prop_assert!(names[i].starts_with(&read));
        }
    }
}

// ============================================================================
// NUMBER COLLECTION
// ============================================================================

proptest! {
    /// Property: total equals a fresh in-order sum, and is NotSet after unset.
    #[test]
    fn prop_total_matches_sum(values in values_strategy()) {
        let mut collection = NumberCollection::new();
        collection.set(Payload::Numbers(&values)).unwrap();

        let expected: f64 = values.iter().sum();
        prop_assert_eq!(collection.total(), Ok(expected));
        prop_assert_eq!(collection.values().unwrap(), values.as_slice());

        prop_assert_eq!(collection.unset(), Outcome::Done);
        prop_assert_eq!(collection.total(), Err(SetError::NotSet));
    }
}
