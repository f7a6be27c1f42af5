// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Settable objects driven through one trait.
//!
//! A settable object can be asked whether it is set, set with data, and
//! unset. Three unrelated types implement that contract and client code
//! drives all of them through `dyn Settable` without knowing which is which.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │  types.rs   │────▶│ settable.rs  │◀────│ toggle.rs        │
//! │ (Payload,   │     │ (Settable)   │◀────│ names.rs         │
//! │  Outcome)   │     └──────────────┘◀────│ numbers.rs       │
//! └─────────────┘            │             └──────────────────┘
//!        │                   ▼                      │
//!        │            ┌──────────────┐              ▼
//!        └───────────▶│   demo.rs    │     ┌──────────────────┐
//!                     │ (SubjectRun) │     │  contracts.rs    │
//!                     └──────────────┘     │ (state machine)  │
//!                                          └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use settable::{NameCollection, Payload, SetError, Settable};
//!
//! let mut names = NameCollection::new();
//! names.set(Payload::Names(&["Chris Tomson", "John Stanford"])).unwrap();
//!
//! let object: &dyn Settable = &names;
//! assert!(object.is_set());
//! assert_eq!(names.get_at(1), Ok("John Stanford"));
//! assert_eq!(names.get_at(2), Err(SetError::OutOfRange { index: 2, count: 2 }));
//! ```

pub mod contracts;
pub mod demo;
mod error;
mod names;
mod numbers;
mod settable;
mod toggle;
mod types;

pub use error::SetError;
pub use names::NameCollection;
pub use numbers::NumberCollection;
pub use settable::{make_settable, Settable};
pub use toggle::EasyToggle;
pub use types::{Outcome, Payload, PayloadKind, SetState, SubjectKind};
