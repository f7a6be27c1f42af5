// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use settable::demo::{self, SubjectRun};

mod cli;
use cli::display::{render_run, themed, GRAY};
use cli::Cli;

fn main() {
    // Diagnostics go to stderr so stdout carries only the transcript
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.demo_options();

    if cli.json {
        let runs = demo::run(&options).context("demo aborted")?;
        let json = serde_json::to_string_pretty(&runs).context("failed to encode transcript")?;
        println!("{}", json);
        return Ok(());
    }

    println!("Settable objects driven through one trait\n");
    for (i, &kind) in options.subjects.iter().enumerate() {
        let run: SubjectRun = demo::run_subject(kind, &options)
            .with_context(|| format!("{} aborted", kind))?;
        print!("{}", render_run(&run));
        println!();

        if cli.pause && i + 1 < options.subjects.len() {
            wait_for_enter()?;
        }
    }
    println!("End of demo.");
    Ok(())
}

fn wait_for_enter() -> Result<()> {
    print!("{}", themed(GRAY, &[], "Press Enter to continue..."));
    io::stdout().flush().context("failed to flush stdout")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read stdin")?;
    Ok(())
}
