// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A settable that stores nothing but whether it is set.

use tracing::debug;

use crate::contracts::{check_transition, Op};
use crate::error::SetError;
use crate::settable::Settable;
use crate::types::{Outcome, Payload, SubjectKind};

/// Boolean flag behind the settable contract. Ignores every payload and
/// never fails.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EasyToggle {
    is_set: bool,
}

impl EasyToggle {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Settable for EasyToggle {
    fn is_set(&self) -> bool {
        self.is_set
    }

    fn set(&mut self, data: Payload<'_>) -> Result<Outcome, SetError> {
        let before = self.state();
        let outcome = if self.is_set {
            Outcome::AlreadySet
        } else {
            debug!(payload = %data.kind(), ignored = data.len(), "toggle set");
            self.is_set = true;
            Outcome::Done
        };
        check_transition(Op::Set, before, outcome, self.state());
        Ok(outcome)
    }

    fn unset(&mut self) -> Outcome {
        let before = self.state();
        let outcome = if self.is_set {
            debug!("toggle unset");
            self.is_set = false;
            Outcome::Done
        } else {
            Outcome::AlreadyUnset
        };
        check_transition(Op::Unset, before, outcome, self.state());
        outcome
    }

    fn kind(&self) -> SubjectKind {
        SubjectKind::Toggle
    }
}
