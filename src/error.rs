// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Usage errors and the one unrecoverable failure.
//!
//! `AlreadySet`/`AlreadyUnset` are deliberately absent: those are `Outcome`s.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::types::PayloadKind;

/// Error type for operations on settable objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetError {
    /// A query that needs stored data was made while unset.
    #[error("object is not set")]
    NotSet,
    /// Index lookup at or past the stored count.
    #[error("index {index} out of range for {count} element(s)")]
    OutOfRange { index: usize, count: usize },
    /// `set` was handed a payload variant this object does not store.
    #[error("expected {expected} payload, got {found}")]
    PayloadMismatch {
        expected: PayloadKind,
        found: PayloadKind,
    },
    /// Storage could not be reserved. Not recoverable; the object stays unset.
    #[error("failed to reserve storage: {0}")]
    Allocation(#[from] TryReserveError),
}

impl SetError {
    /// Usage errors are the caller's fault and safe to report and move on from.
    pub fn is_usage(&self) -> bool {
        !matches!(self, SetError::Allocation(_))
    }
}
