// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal rendering for demo transcripts.
//!
//! OneDark on dark terminals, One Light on light ones. Detection tries
//! `SETTABLE_THEME` first, then `COLORFGBG`, then defaults to dark. `NO_COLOR`
//! or a non-TTY stdout turns color off entirely, leaving plain box drawing.

use std::fmt::Write as _;
use std::sync::OnceLock;

use settable::demo::{Event, Status, SubjectRun};
use settable::{Outcome, SetState};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(explicit: Option<&str>, colorfgbg: Option<&str>) -> Theme {
    if let Some(theme) = explicit {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Some(bg) = colorfgbg.and_then(|v| v.split(';').next_back()) {
        if let Ok(bg_num) = bg.parse::<u8>() {
            if bg_num >= 7 && bg_num != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

fn detect_theme() -> Theme {
    let explicit = std::env::var("SETTABLE_THEME").ok();
    let colorfgbg = std::env::var("COLORFGBG").ok();
    parse_theme(explicit.as_deref(), colorfgbg.as_deref())
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border(color_fn: fn() -> String) -> (String, &'static str) {
    if use_colors() {
        (color_fn(), RESET)
    } else {
        (String::new(), "")
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Content line: │ content          │
pub fn row(out: &mut String, content: &str) {
    let (b, reset) = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    let _ = writeln!(out, "{b}│{reset} {content}{}{b}│{reset}", " ".repeat(pad));
}

/// Section header: ┌─ LABEL ──────────┐
pub fn section_top(out: &mut String, label: &str) {
    let (b, reset) = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    let _ = writeln!(
        out,
        "{b}┌{reset}{label_part}{b}{}┐{reset}",
        "─".repeat(remaining)
    );
}

/// Section footer: └──────────────────┘
pub fn section_bot(out: &mut String) {
    let (b, reset) = border(GRAY);
    let _ = writeln!(out, "{b}└{}┘{reset}", "─".repeat(BOX_WIDTH));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Color-coded state word
pub fn state_badge(state: SetState) -> String {
    match state {
        SetState::Set => themed(GREEN, &[BOLD], "set"),
        SetState::Unset => themed(GRAY, &[BOLD], "not set"),
    }
}

fn status_line(verb: &str, status: &Status) -> String {
    match status {
        Status::Ok(outcome) if !outcome.is_noop() => {
            format!("{} {verb} succeeded", themed(GREEN, &[], "✓"))
        }
        Status::Ok(noop) => format!(
            "{} {verb} was a no-op ({})",
            themed(YELLOW, &[], "○"),
            noop
        ),
        Status::Failed(error) => format!(
            "{} {verb} failed: {}",
            themed(RED, &[BOLD], "✗"),
            themed(RED, &[], error)
        ),
    }
}

/// One transcript event as box rows. Most events take one row; the boundary
/// check puts its verdict on a second row to stay inside the box.
pub fn event_lines(event: &Event) -> Vec<String> {
    match event {
        Event::Boundary { index, error } => vec![
            format!(".get_at({}) {}", index, themed(RED, &[], error)),
            format!("  {}", themed(GREEN, &[DIM], "(boundary check ok)")),
        ],
        other => vec![event_line(other)],
    }
}

/// One transcript event as a single line of text (no box).
pub fn event_line(event: &Event) -> String {
    match event {
        Event::State { state } => format!("state: {}", state_badge(*state)),
        Event::Set { status } => status_line("set", status),
        Event::Unset { status } => status_line("unset", status),
        Event::Total { value } => {
            format!(".total() = {}", themed(BLUE, &[BOLD], &format!("{:.2}", value)))
        }
        Event::TotalFailed { error } => {
            format!(".total() {}", themed(RED, &[], &format!("error: {}", error)))
        }
        Event::Lookup { index, name } => format!(".get_at({}) = {}", index, name),
        Event::Boundary { index, error } => format!(
            ".get_at({}) {} {}",
            index,
            themed(RED, &[], &format!("error: {}", error)),
            themed(GREEN, &[DIM], "(boundary check ok)")
        ),
    }
}

/// Render a whole subject as a box.
pub fn render_run(run: &SubjectRun) -> String {
    let mut out = String::new();
    section_top(&mut out, &format!("Test subject: {}", run.subject));
    for line in run.events.iter().flat_map(event_lines) {
        row(&mut out, &line);
    }
    section_bot(&mut out);
    out
}
