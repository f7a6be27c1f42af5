//! Any sequence of set/unset calls follows the two-state machine.

use proptest::prelude::*;
use settable::{make_settable, Outcome, SetState, SubjectKind};

use super::common::payload_for;

#[derive(Debug, Clone, Copy)]
enum Call {
    Set,
    Unset,
}

// ============================================================================
// STRATEGIES
// ============================================================================

fn call_strategy() -> impl Strategy<Value = Call> {
    prop_oneof![Just(Call::Set), Just(Call::Unset)]
}

fn kind_strategy() -> impl Strategy<Value = SubjectKind> {
    prop::sample::select(SubjectKind::ALL.to_vec())
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: each call's outcome and the resulting state match the model.
    #[test]
    fn prop_calls_follow_state_machine(
        kind in kind_strategy(),
        calls in prop::collection::vec(call_strategy(), 0..40),
    ) {
        let mut object = make_settable(kind);
        let mut model = SetState::Unset;

        for call in calls {
            let outcome = match call {
                Call::Set => object.set(payload_for(kind)).unwrap(),
                Call::Unset => object.unset(),
            };
            let (expected_outcome, next) = match (call, model) {
                (Call::Set, SetState::Unset) => (Outcome::Done, SetState::Set),
                (Call::Set, SetState::Set) => (Outcome::AlreadySet, SetState::Set),
                (Call::Unset, SetState::Set) => (Outcome::Done, SetState::Unset),
                (Call::Unset, SetState::Unset) => (Outcome::AlreadyUnset, SetState::Unset),
            };
            prop_assert_eq!(outcome, expected_outcome);
            model = next;
            prop_assert_eq!(object.state(), model);
        }
    }
}
