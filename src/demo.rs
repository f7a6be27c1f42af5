// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed demonstration sequence.
//!
//! Each subject follows the same script: print state, set, print state, run
//! whatever queries the subject supports, unset, print state. Everything goes
//! through `&dyn Settable` except the subject-specific queries (`total`,
//! `read_at`), which need the concrete type.
//!
//! The driver does not print. It records `Event`s into a `SubjectRun` and the
//! CLI decides how to render them (boxes or JSON).
//!
//! Usage errors are recorded and the script continues. A `SetError::Allocation`
//! aborts the run and is returned to the caller.

use serde::Serialize;
use tracing::{debug, info};

use crate::error::SetError;
use crate::names::NameCollection;
use crate::numbers::NumberCollection;
use crate::settable::{make_settable, Settable};
use crate::types::{Outcome, Payload, SetState, SubjectKind};

/// Names the name collection is loaded with.
pub const SAMPLE_NAMES: [&str; 3] = ["Chris Tomson", "John Stanford", "Tina Angelia"];

/// Values the number collection is loaded with.
pub const SAMPLE_PRICES: [f64; 4] = [2.00, 3.00, 5.80, 0.90];

/// Default number of indices the name lookup loop probes.
pub const DEFAULT_PROBE: usize = 9;

/// Default lookup buffer size, terminator included.
pub const DEFAULT_MAX_LEN: usize = 99;

/// Knobs for a demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOptions {
    /// Subjects to run, in order.
    pub subjects: Vec<SubjectKind>,
    /// Upper bound on indices the name loop tries.
    pub probe: usize,
    /// Buffer size handed to `NameCollection::read_at`.
    pub max_len: usize,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            subjects: SubjectKind::ALL.to_vec(),
            probe: DEFAULT_PROBE,
            max_len: DEFAULT_MAX_LEN,
        }
    }
}

/// Result of a `set`/`unset` as the transcript sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ok(Outcome),
    Failed(String),
}

/// One observable step of a subject's script.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    State { state: SetState },
    Set { status: Status },
    Unset { status: Status },
    Total { value: f64 },
    TotalFailed { error: String },
    Lookup { index: usize, name: String },
    /// First failing lookup: the out-of-range path was exercised.
    Boundary { index: usize, error: String },
}

/// Everything that happened to one subject.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectRun {
    pub subject: SubjectKind,
    pub events: Vec<Event>,
}

impl SubjectRun {
    fn new(subject: SubjectKind) -> Self {
        Self {
            subject,
            events: Vec::new(),
        }
    }

    fn push(&mut self, event: Event) {
        debug!(subject = %self.subject, ?event, "transcript");
        self.events.push(event);
    }

    /// Record the object's current state.
    pub fn record_state(&mut self, object: &dyn Settable) {
        self.push(Event::State {
            state: object.state(),
        });
    }

    /// Set `object` and record the result.
    ///
    /// Usage errors are recorded; allocation failure is returned.
    pub fn record_set(
        &mut self,
        object: &mut dyn Settable,
        data: Payload<'_>,
    ) -> Result<(), SetError> {
        let status = match object.set(data) {
            Ok(outcome) => Status::Ok(outcome),
            Err(e) if e.is_usage() => Status::Failed(e.to_string()),
            Err(e) => return Err(e),
        };
        self.push(Event::Set { status });
        Ok(())
    }

    /// Unset `object` and record the result.
    pub fn record_unset(&mut self, object: &mut dyn Settable) {
        let status = Status::Ok(object.unset());
        self.push(Event::Unset { status });
    }

    /// States recorded so far, in order.
    pub fn states(&self) -> impl Iterator<Item = SetState> + '_ {
        self.events.iter().filter_map(|e| match e {
            Event::State { state } => Some(*state),
            _ => None,
        })
    }
}

/// Run one subject's script.
pub fn run_subject(kind: SubjectKind, options: &DemoOptions) -> Result<SubjectRun, SetError> {
    info!(subject = %kind, "running subject");
    match kind {
        SubjectKind::Toggle => run_toggle(),
        SubjectKind::Numbers => run_numbers(&SAMPLE_PRICES),
        SubjectKind::Names => run_names(&SAMPLE_NAMES, options.probe, options.max_len),
    }
}

/// Run every subject in `options`, in order.
pub fn run(options: &DemoOptions) -> Result<Vec<SubjectRun>, SetError> {
    options
        .subjects
        .iter()
        .map(|&kind| run_subject(kind, options))
        .collect()
}

/// Toggle script. Only ever sees the object through the contract.
pub fn run_toggle() -> Result<SubjectRun, SetError> {
    let mut object = make_settable(SubjectKind::Toggle);
    let mut run = SubjectRun::new(object.kind());

    run.record_state(&*object);
    run.record_set(&mut *object, Payload::Empty)?;
    run.record_state(&*object);
    run.record_unset(&mut *object);
    run.record_state(&*object);
    Ok(run)
}

/// Number script: set, report the total, unset.
pub fn run_numbers(values: &[f64]) -> Result<SubjectRun, SetError> {
    let mut numbers = NumberCollection::new();
    let mut run = SubjectRun::new(numbers.kind());

    run.record_state(&numbers);
    run.record_set(&mut numbers, Payload::Numbers(values))?;
    run.record_state(&numbers);
    match numbers.total() {
        Ok(value) => run.push(Event::Total { value }),
        Err(e) => run.push(Event::TotalFailed {
            error: e.to_string(),
        }),
    }
    run.record_unset(&mut numbers);
    run.record_state(&numbers);
    Ok(run)
}

/// Name script: set, then look up indices `0..probe` until one fails.
///
/// The loop deliberately walks past the stored count; the first failure is
/// recorded as `Event::Boundary`. With `probe <= names.len()` no boundary is
/// reached.
pub fn run_names(names: &[&str], probe: usize, max_len: usize) -> Result<SubjectRun, SetError> {
    let mut collection = NameCollection::new();
    let mut run = SubjectRun::new(collection.kind());

    run.record_state(&collection);
    run.record_set(&mut collection, Payload::Names(names))?;
    run.record_state(&collection);
    for index in 0..probe {
        match collection.read_at(index, max_len) {
            Ok(name) => run.push(Event::Lookup { index, name }),
            Err(e) => {
                run.push(Event::Boundary {
                    index,
                    error: e.to_string(),
                });
                break;
            }
        }
    }
    run.record_unset(&mut collection);
    run.record_state(&collection);
    Ok(run)
}
