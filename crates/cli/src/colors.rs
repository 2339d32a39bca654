// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help text and test results.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use anstyle::{Ansi256Color, AnsiColor, Color, Style};
use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes for help output.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

fn paint(style: Style, text: &str) -> String {
    format!("{style}{text}{style:#}")
}

fn fg256(code: u8) -> Style {
    Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))))
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(fg256(codes::HEADER), text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(fg256(codes::LITERAL), text)
}

/// Apply context color (placeholders, hints) to text.
pub fn context(text: &str) -> String {
    paint(fg256(codes::CONTEXT), text)
}

/// Colorize an examples help block.
///
/// Lines ending in `:` are headers. Example lines are split at the first run
/// of two or more spaces: the command is drawn as a literal with `<...>`
/// placeholders as context, the description is left alone.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match trimmed.find("  ") {
                Some(end) => {
                    let (cmd, desc) = trimmed.split_at(end);
                    format!("{indent}{}{desc}", command(cmd))
                }
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.starts_with('<') || word.starts_with('"') {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Outcome buckets for canonical result labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTone {
    Pass,
    Fail,
    Partial,
    Untested,
}

impl ResultTone {
    /// Bucket for a result label; `None` for labels outside the vocabulary.
    pub fn of(label: &str) -> Option<Self> {
        match label {
            "Fixed" | "OK" | "Passed" | "Verified" | "Resolved" => Some(ResultTone::Pass),
            "Not Fixed" | "NOK" | "Failed" | "Blocked" => Some(ResultTone::Fail),
            "Partially Fixed" | "Partially OK" => Some(ResultTone::Partial),
            "Could not test" | "Pending" => Some(ResultTone::Untested),
            _ => None,
        }
    }

    fn color(self) -> AnsiColor {
        match self {
            ResultTone::Pass => AnsiColor::Green,
            ResultTone::Fail => AnsiColor::Red,
            ResultTone::Partial => AnsiColor::BrightYellow,
            ResultTone::Untested => AnsiColor::Blue,
        }
    }

    /// CSS class used by the HTML report.
    pub fn css_class(self) -> &'static str {
        match self {
            ResultTone::Pass => "result-fixed",
            ResultTone::Fail => "result-not-fixed",
            ResultTone::Partial => "result-partially-fixed",
            ResultTone::Untested => "result-could-not-test",
        }
    }
}

/// Color `text` by the tone of `label`. Plain when disabled or unknown.
pub fn result(text: &str, label: &str, enabled: bool) -> String {
    match ResultTone::of(label) {
        Some(tone) if enabled => paint(Style::new().fg_color(Some(tone.color().into())), text),
        _ => text.to_string(),
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
