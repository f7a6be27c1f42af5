// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the settable state machine.
//!
//! Debug-mode assertions that every implementation calls after a transition.
//! They are:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!`)
//! 2. **Shared** so the three implementations cannot drift apart
//!
//! | Contract Function            | Property                                        |
//! |------------------------------|-------------------------------------------------|
//! | `check_transition`           | state moves only on `Done`, in the right direction |
//! | `check_storage_consistent`   | count is zero whenever storage is absent        |

use crate::types::{Outcome, SetState};

/// Operation that produced an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Set,
    Unset,
}

/// Check a state transition against the state machine.
///
/// - `set`: `Done` means Unset → Set; `AlreadySet` means Set → Set.
/// - `unset`: `Done` means Set → Unset; `AlreadyUnset` means Unset → Unset.
///
/// # Panics (debug builds only)
/// Panics on any other combination.
#[inline]
pub fn check_transition(op: Op, before: SetState, outcome: Outcome, after: SetState) {
    let expected = match (op, outcome) {
        (Op::Set, Outcome::Done) => Some((SetState::Unset, SetState::Set)),
        (Op::Set, Outcome::AlreadySet) => Some((SetState::Set, SetState::Set)),
        (Op::Unset, Outcome::Done) => Some((SetState::Set, SetState::Unset)),
        (Op::Unset, Outcome::AlreadyUnset) => Some((SetState::Unset, SetState::Unset)),
        _ => None,
    };

    debug_assert!(
        expected.is_some(),
        "Contract violation: {:?} returned {:?}",
        op,
        outcome
    );
    debug_assert!(
        expected == Some((before, after)),
        "Contract violation: {:?} -> {:?} moved {:?} to {:?}",
        op,
        outcome,
        before,
        after
    );
}

/// Check that an error left the state where it was.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_unchanged_on_error(before: SetState, after: SetState) {
    debug_assert!(
        before == after,
        "Contract violation: failed call moved {:?} to {:?}",
        before,
        after
    );
}

/// Check that count and storage agree.
///
/// # Panics (debug builds only)
/// Panics if storage is absent but `count` is non-zero.
#[inline]
pub fn check_storage_consistent(has_storage: bool, count: usize) {
    debug_assert!(
        has_storage || count == 0,
        "Contract violation: count {} with no storage",
        count
    );
}
