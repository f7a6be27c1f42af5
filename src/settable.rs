// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The capability contract.
//!
//! Anything that can be queried for set-state, set with data, and unset.
//! Client code takes `&dyn Settable` / `&mut dyn Settable` and never learns
//! the concrete type; the compiler builds and attaches the dispatch table.
//!
//! # State machine
//!
//! ```text
//!            set → Done                     set → AlreadySet
//!   ┌───────┐ ─────────────────────▶ ┌─────┐ ◀─────────────┐
//!   │ Unset │                        │ Set │ ──────────────┘
//!   └───────┘ ◀───────────────────── └─────┘
//!     │   ▲      unset → Done
//!     └───┘
//!  unset → AlreadyUnset
//! ```
//!
//! `set` is the only way in, `unset` the only way out. A repeated call in the
//! same state is reported, never acted on.

use crate::error::SetError;
use crate::types::{Outcome, Payload, SetState, SubjectKind};

/// The three-operation settable contract.
///
/// Implementors must keep `is_set` free of side effects and must leave state
/// unchanged whenever they return an `Already*` outcome or an error.
pub trait Settable {
    /// Whether the object currently holds data.
    fn is_set(&self) -> bool;

    /// Store the payload's elements.
    ///
    /// Returns `Outcome::AlreadySet` without looking at `data` if the object is
    /// already set.
    fn set(&mut self, data: Payload<'_>) -> Result<Outcome, SetError>;

    /// Release stored data and return to the unset state.
    fn unset(&mut self) -> Outcome;

    /// Which implementation this is. Display only.
    fn kind(&self) -> SubjectKind;

    /// `is_set` as a `SetState`.
    fn state(&self) -> SetState {
        SetState::from(self.is_set())
    }
}

impl<T: Settable + ?Sized> Settable for Box<T> {
    fn is_set(&self) -> bool {
        (**self).is_set()
    }

    fn set(&mut self, data: Payload<'_>) -> Result<Outcome, SetError> {
        (**self).set(data)
    }

    fn unset(&mut self) -> Outcome {
        (**self).unset()
    }

    fn kind(&self) -> SubjectKind {
        (**self).kind()
    }
}

/// Construct a fresh, unset object of the given kind behind the contract.
pub fn make_settable(kind: SubjectKind) -> Box<dyn Settable> {
    match kind {
        SubjectKind::Toggle => Box::new(crate::toggle::EasyToggle::new()),
        SubjectKind::Numbers => Box::new(crate::numbers::NumberCollection::new()),
        SubjectKind::Names => Box::new(crate::names::NameCollection::new()),
    }
}
