// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vocabulary shared by every settable object.
//!
//! Nothing in here does any work. These are the values that cross the
//! `Settable` boundary: what goes in (`Payload`), what comes back when nothing
//! went wrong (`Outcome`), and the labels the driver prints (`SubjectKind`,
//! `PayloadKind`, `SetState`).
//!
//! # Invariants
//!
//! - **Outcome**: `AlreadySet` only ever comes back from `set`, `AlreadyUnset`
//!   only from `unset`. Neither one means the state changed.
//! - **Payload**: borrowed for the duration of the call. Implementations copy
//!   what they keep; nothing outlives the call by reference.

use serde::Serialize;
use std::fmt;

// =============================================================================
// OUTCOME
// =============================================================================

/// Non-error result of a contract operation.
///
/// The two `Already*` variants are no-ops, not failures. A caller may print
/// them, count them, or ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The state changed.
    Done,
    /// `set` on an object that was already set. Stored data is untouched.
    AlreadySet,
    /// `unset` on an object that was already unset.
    AlreadyUnset,
}

impl Outcome {
    /// True if the call was a no-op.
    #[inline]
    pub fn is_noop(self) -> bool {
        !matches!(self, Outcome::Done)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Done => f.write_str("done"),
            Outcome::AlreadySet => f.write_str("already set"),
            Outcome::AlreadyUnset => f.write_str("already unset"),
        }
    }
}

// =============================================================================
// STATE
// =============================================================================

/// The two states every settable object moves between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SetState {
    Unset,
    Set,
}

impl From<bool> for SetState {
    fn from(is_set: bool) -> Self {
        if is_set {
            SetState::Set
        } else {
            SetState::Unset
        }
    }
}

impl fmt::Display for SetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetState::Set => f.write_str("set"),
            SetState::Unset => f.write_str("not set"),
        }
    }
}

// =============================================================================
// PAYLOAD
// =============================================================================

/// Data handed to `Settable::set`.
///
/// The element count is the slice length. Each implementation decides which
/// variant it accepts; `EasyToggle` accepts all of them and looks at none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payload<'a> {
    /// No data at all.
    Empty,
    /// A sequence of names.
    Names(&'a [&'a str]),
    /// A sequence of numbers.
    Numbers(&'a [f64]),
}

impl<'a> Payload<'a> {
    /// Number of elements carried.
    pub fn len(&self) -> usize {
        match self {
            Payload::Empty => 0,
            Payload::Names(names) => names.len(),
            Payload::Numbers(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Which variant this is, without the data.
    pub fn kind(&self) -> PayloadKind {
        match self {
            Payload::Empty => PayloadKind::Empty,
            Payload::Names(_) => PayloadKind::Names,
            Payload::Numbers(_) => PayloadKind::Numbers,
        }
    }
}

impl<'a> From<&'a [&'a str]> for Payload<'a> {
    fn from(names: &'a [&'a str]) -> Self {
        Payload::Names(names)
    }
}

impl<'a> From<&'a [f64]> for Payload<'a> {
    fn from(values: &'a [f64]) -> Self {
        Payload::Numbers(values)
    }
}

/// Payload variant tag, used in mismatch errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    Empty,
    Names,
    Numbers,
}

impl fmt::Display for PayloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadKind::Empty => f.write_str("empty"),
            PayloadKind::Names => f.write_str("names"),
            PayloadKind::Numbers => f.write_str("numbers"),
        }
    }
}

// =============================================================================
// SUBJECT
// =============================================================================

/// Which implementation sits behind a `dyn Settable`.
///
/// Display only. Client code drives objects through the trait and never
/// branches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum SubjectKind {
    /// `EasyToggle`
    Toggle,
    /// `NumberCollection`
    Numbers,
    /// `NameCollection`
    Names,
}

impl SubjectKind {
    /// Demo order: toggle, numbers, names.
    pub const ALL: [SubjectKind; 3] = [SubjectKind::Toggle, SubjectKind::Numbers, SubjectKind::Names];

    /// Name of the concrete type.
    pub fn type_name(self) -> &'static str {
        match self {
            SubjectKind::Toggle => "EasyToggle",
            SubjectKind::Numbers => "NumberCollection",
            SubjectKind::Names => "NameCollection",
        }
    }
}

impl fmt::Display for SubjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
