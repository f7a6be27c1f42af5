//! The capability contract, exercised only through `dyn Settable`.

use super::common::{all_settables, assert_state, payload_for};
use settable::{Outcome, Payload, SetError, SetState, Settable};

// ============================================================================
// LIFECYCLE
// ============================================================================

#[test]
fn test_unset_after_construction() {
    for object in all_settables() {
        assert_state(&*object, SetState::Unset);
    }
}

#[test]
fn test_set_then_unset() {
    for mut object in all_settables() {
        let payload = payload_for(object.kind());

        assert_eq!(object.set(payload), Ok(Outcome::Done));
        assert_state(&*object, SetState::Set);

        assert_eq!(object.unset(), Outcome::Done);
        assert_state(&*object, SetState::Unset);
    }
}

#[test]
fn test_cycle_can_repeat() {
    for mut object in all_settables() {
        let payload = payload_for(object.kind());
        for _ in 0..3 {
            assert_eq!(object.set(payload), Ok(Outcome::Done));
            assert_eq!(object.unset(), Outcome::Done);
        }
        assert_state(&*object, SetState::Unset);
    }
}

// ============================================================================
// IDEMPOTENCE
// ============================================================================

#[test]
fn test_second_set_is_already_set() {
    for mut object in all_settables() {
        let payload = payload_for(object.kind());
        object.set(payload).unwrap();
        assert_eq!(
            object.set(payload),
            Ok(Outcome::AlreadySet),
            "{}",
            object.kind()
        );
        assert_state(&*object, SetState::Set);
    }
}

#[test]
fn test_second_unset_is_already_unset() {
    for mut object in all_settables() {
        object.set(payload_for(object.kind())).unwrap();
        assert_eq!(object.unset(), Outcome::Done);
        assert_eq!(object.unset(), Outcome::AlreadyUnset, "{}", object.kind());
        assert_state(&*object, SetState::Unset);
    }
}

#[test]
fn test_unset_on_fresh_object_is_noop() {
    for mut object in all_settables() {
        assert_eq!(object.unset(), Outcome::AlreadyUnset);
        assert_state(&*object, SetState::Unset);
    }
}

// ============================================================================
// PAYLOADS
// ============================================================================

#[test]
fn test_mismatched_payload_leaves_object_unset() {
    for mut object in all_settables() {
        let result = object.set(Payload::Empty);
        match object.kind() {
            settable::SubjectKind::Toggle => assert_eq!(result, Ok(Outcome::Done)),
            _ => {
                assert!(matches!(result, Err(SetError::PayloadMismatch { .. })));
                assert_state(&*object, SetState::Unset);
            }
        }
    }
}

/// Client code that only knows the contract.
fn set_all(objects: &mut [Box<dyn Settable>]) -> Vec<Outcome> {
    objects
        .iter_mut()
        .map(|o| {
            let payload = payload_for(o.kind());
            o.set(payload).unwrap()
        })
        .collect()
}

#[test]
fn test_heterogeneous_collection_dispatch() {
    let mut objects = all_settables();
    assert_eq!(set_all(&mut objects), [Outcome::Done; 3]);
    assert_eq!(set_all(&mut objects), [Outcome::AlreadySet; 3]);
    assert!(objects.iter().all(|o| o.is_set()));
}
