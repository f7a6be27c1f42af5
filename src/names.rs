// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A read-only collection of names, settable once.
//!
//! Storage is `Option<Vec<String>>`: `None` while unset, `Some` once set.
//! The count is the vector length, so count and storage cannot disagree.
//! An empty slice still sets the collection (storage present, zero names).
//!
//! Lookups are O(1). Indices are 0-based and must be strictly below the count.

use std::collections::TryReserveError;

use tracing::{debug, trace, warn};

use crate::contracts::{check_storage_consistent, check_transition, check_unchanged_on_error, Op};
use crate::error::SetError;
use crate::settable::Settable;
use crate::types::{Outcome, Payload, PayloadKind, SubjectKind};

/// Ordered names behind the settable contract.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NameCollection {
    names: Option<Vec<String>>,
}

impl NameCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored names. Zero while unset.
    pub fn len(&self) -> usize {
        self.names.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The name at `index`.
    ///
    /// `NotSet` takes precedence over any range check.
    pub fn get_at(&self, index: usize) -> Result<&str, SetError> {
        let names = self.names.as_ref().ok_or(SetError::NotSet)?;
        names
            .get(index)
            .map(String::as_str)
            .ok_or(SetError::OutOfRange {
                index,
                count: names.len(),
            })
    }

    /// Copy the name at `index` into a buffer of `max_len` characters.
    ///
    /// One slot is reserved for the terminator the buffer form implies, so at
    /// most `max_len - 1` characters come back. Truncation is on character
    /// boundaries.
    pub fn read_at(&self, index: usize, max_len: usize) -> Result<String, SetError> {
        let name = self.get_at(index)?;
        Ok(name.chars().take(max_len.saturating_sub(1)).collect())
    }

    /// Iterate stored names in order. Empty while unset.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().flatten().map(String::as_str)
    }
}

/// Copy borrowed names into owned storage, reserving fallibly.
fn copy_names(names: &[&str]) -> Result<Vec<String>, TryReserveError> {
    let mut stored = Vec::new();
    stored.try_reserve_exact(names.len())?;
    for name in names {
        let mut owned = String::new();
        owned.try_reserve_exact(name.len())?;
        owned.push_str(name);
        stored.push(owned);
    }
    Ok(stored)
}

impl Settable for NameCollection {
    fn is_set(&self) -> bool {
        self.names.is_some()
    }

    fn set(&mut self, data: Payload<'_>) -> Result<Outcome, SetError> {
        let before = self.state();
        if self.is_set() {
            check_transition(Op::Set, before, Outcome::AlreadySet, self.state());
            return Ok(Outcome::AlreadySet);
        }

        let Payload::Names(names) = data else {
            warn!(found = %data.kind(), "name collection given a non-name payload");
            return Err(SetError::PayloadMismatch {
                expected: PayloadKind::Names,
                found: data.kind(),
            });
        };

        match copy_names(names) {
            Ok(stored) => {
                debug!(count = stored.len(), "names set");
                self.names = Some(stored);
            }
            Err(e) => {
                check_unchanged_on_error(before, self.state());
                return Err(e.into());
            }
        }

        check_storage_consistent(self.is_set(), self.len());
        check_transition(Op::Set, before, Outcome::Done, self.state());
        Ok(Outcome::Done)
    }

    fn unset(&mut self) -> Outcome {
        let before = self.state();
        let outcome = match self.names.take() {
            Some(released) => {
                debug!(count = released.len(), "names unset");
                Outcome::Done
            }
            None => Outcome::AlreadyUnset,
        };
        check_storage_consistent(self.is_set(), self.len());
        check_transition(Op::Unset, before, outcome, self.state());
        outcome
    }

    fn kind(&self) -> SubjectKind {
        SubjectKind::Names
    }
}

impl Drop for NameCollection {
    fn drop(&mut self) {
        if self.is_set() {
            trace!(count = self.len(), "unsetting names before release");
            self.unset();
        }
    }
}
