// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let fg = |code: u8| Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(code))));
    let header = fg(colors::codes::HEADER);
    let context = fg(colors::codes::CONTEXT);

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(fg(colors::codes::LITERAL))
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let rows = [
        ("parse", "Parse all QA comments of one ticket"),
        ("parse-multiple", "Parse QA comments of several tickets"),
        ("last-comment", "Show the most recent QA comment of each ticket"),
        ("export", "Export QA comments to a JSON or HTML file"),
        ("extract", "Run the extractor on one comment body"),
    ];
    let setup = [
        ("config", "Inspect configuration"),
        ("schema", "Output JSON Schema for commands"),
        ("docs", "Write the command reference"),
        ("completion", "Generate shell completions"),
    ];

    let mut out = header("QA Comments:");
    push_rows(&mut out, &rows);
    out.push_str("\n\n");
    out.push_str(&header("Setup:"));
    push_rows(&mut out, &setup);
    out
}

fn push_rows(out: &mut String, rows: &[(&str, &str)]) {
    const WIDTH: usize = 16;
    for (name, about) in rows {
        let pad = " ".repeat(WIDTH.saturating_sub(name.len()));
        out.push_str(&format!("\n  {}{pad}{about}", literal(name)));
    }
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  jira-qa config path               Show which config file is used
  jira-qa parse <KEY>               QA comments of one ticket
  jira-qa last-comment <KEY>...     Latest QA comment per ticket
  jira-qa export -F html            HTML report for configs/tickets.yaml",
    )
}

fn header(text: &str) -> String {
    if colors::should_colorize() {
        colors::header(text)
    } else {
        text.to_string()
    }
}

fn literal(text: &str) -> String {
    if colors::should_colorize() {
        colors::literal(text)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
