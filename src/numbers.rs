// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A read-only collection of numbers, settable once, with an on-demand total.

use std::collections::TryReserveError;

use tracing::{debug, trace, warn};

use crate::contracts::{check_storage_consistent, check_transition, check_unchanged_on_error, Op};
use crate::error::SetError;
use crate::settable::Settable;
use crate::types::{Outcome, Payload, PayloadKind, SubjectKind};

/// Ordered `f64` values behind the settable contract.
///
/// Same lifecycle as `NameCollection`. The total is never cached; each call
/// to [`NumberCollection::total`] sums the stored values again.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct NumberCollection {
    values: Option<Vec<f64>>,
}

impl NumberCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored values. Zero while unset.
    pub fn len(&self) -> usize {
        self.values.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored values, or `NotSet`.
    pub fn values(&self) -> Result<&[f64], SetError> {
        self.values.as_deref().ok_or(SetError::NotSet)
    }

    /// Arithmetic sum of the stored values.
    ///
    /// Plain `f64` addition in storage order: infinities and NaN propagate,
    /// no overflow handling.
    pub fn total(&self) -> Result<f64, SetError> {
        Ok(self.values()?.iter().sum())
    }
}

fn copy_values(values: &[f64]) -> Result<Vec<f64>, TryReserveError> {
    let mut stored = Vec::new();
    stored.try_reserve_exact(values.len())?;
    stored.extend_from_slice(values);
    Ok(stored)
}

impl Settable for NumberCollection {
    fn is_set(&self) -> bool {
        self.values.is_some()
    }

    fn set(&mut self, data: Payload<'_>) -> Result<Outcome, SetError> {
        let before = self.state();
        if self.is_set() {
            check_transition(Op::Set, before, Outcome::AlreadySet, self.state());
            return Ok(Outcome::AlreadySet);
        }

        let Payload::Numbers(values) = data else {
            warn!(found = %data.kind(), "number collection given a non-number payload");
            return Err(SetError::PayloadMismatch {
                expected: PayloadKind::Numbers,
                found: data.kind(),
            });
        };

        let stored = copy_values(values).map_err(|e| {
            check_unchanged_on_error(before, self.state());
            SetError::from(e)
        })?;
        debug!(count = stored.len(), "numbers set");
        self.values = Some(stored);

        check_storage_consistent(self.is_set(), self.len());
        check_transition(Op::Set, before, Outcome::Done, self.state());
        Ok(Outcome::Done)
    }

    fn unset(&mut self) -> Outcome {
        let before = self.state();
        let outcome = match self.values.take() {
            Some(released) => {
                debug!(count = released.len(), "numbers unset");
                Outcome::Done
            }
            None => Outcome::AlreadyUnset,
        };
        check_storage_consistent(self.is_set(), self.len());
        check_transition(Op::Unset, before, outcome, self.state());
        outcome
    }

    fn kind(&self) -> SubjectKind {
        SubjectKind::Numbers
    }
}

impl Drop for NumberCollection {
    fn drop(&mut self) {
        if self.is_set() {
            trace!(count = self.len(), "unsetting numbers before release");
            self.unset();
        }
    }
}
