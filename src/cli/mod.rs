// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the settable demo.
//!
//! No arguments runs every subject in demo order (toggle, numbers, names) and
//! exits 0. The flags narrow or slow the run down; none of them change what
//! the objects do.

pub mod display;

use clap::Parser;
use settable::demo::{DemoOptions, DEFAULT_MAX_LEN, DEFAULT_PROBE};
use settable::SubjectKind;

#[derive(Parser, Debug)]
#[command(
    name = "settable",
    about = "Drive three settable objects through one trait",
    version
)]
pub struct Cli {
    /// Run only these subjects (repeatable). Defaults to all, in demo order.
    #[arg(long, value_enum)]
    pub only: Vec<SubjectKind>,

    /// Wait for Enter between subjects
    #[arg(long)]
    pub pause: bool,

    /// How many indices the name lookup loop tries
    #[arg(long, default_value_t = DEFAULT_PROBE)]
    pub probe: usize,

    /// Lookup buffer size in characters, terminator included
    #[arg(long, default_value_t = DEFAULT_MAX_LEN)]
    pub max_len: usize,

    /// Print the transcript as JSON instead of boxes
    #[arg(long, conflicts_with = "pause")]
    pub json: bool,
}

impl Cli {
    pub fn demo_options(&self) -> DemoOptions {
        let subjects = if self.only.is_empty() {
            SubjectKind::ALL.to_vec()
        } else {
            self.only.clone()
        };
        DemoOptions {
            subjects,
            probe: self.probe,
            max_len: self.max_len,
        }
    }
}
