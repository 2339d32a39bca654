// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Jira wiki markup removal.
//!
//! Comment bodies are reduced to plain text before any pattern is applied.
//! A single pass removes, in order:
//!
//! 1. paired blocks (`{color}`, `{code}`, `{panel}`, `{quote}`, `{noformat}`),
//!    keeping the inner text
//! 2. inline emphasis characters, deleted as bare literals until none is left
//! 3. links `[label|url]` / `[label]`, keeping the label, innermost first
//! 4. embedded images `!file.png!`
//! 5. user mentions `[~name]`
//! 6. surrounding whitespace
//!
//! Steps 2 and 3 each run in one linear scan, so nested markup collapses in a
//! single pass. Passes repeat until the text stops changing, at most
//! [`MAX_PASSES`] times. Every rule only ever shortens the text.

use regex::Regex;
use std::sync::LazyLock;

// Hard-coded patterns, exercised by the tests below.
fn static_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
}

static BLOCK_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?s)\{color[^}]*\}(.*?)\{color\}",
        r"(?s)\{code[^}]*\}(.*?)\{code\}",
        r"(?s)\{panel[^}]*\}(.*?)\{panel\}",
        r"(?s)\{quote\}(.*?)\{quote\}",
        r"(?s)\{noformat\}(.*?)\{noformat\}",
    ]
    .into_iter()
    .map(static_regex)
    .collect()
});

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| static_regex(r"!\S*!"));
static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| static_regex(r"\[~[^\]]+\]"));

/// Upper bound on normalization passes.
///
/// Markup settles in two or three passes; the bound keeps hostile input linear.
pub const MAX_PASSES: usize = 32;

/// Literal markup fragments deleted after block removal.
///
/// Order matters where literals overlap: `{*}` before `*`, the unpaired block
/// openers before the brace pairs, and `??` before any single character.
const INLINE_LITERALS: &[&str] = &[
    "{panel:bgcolor=",
    "{color:",
    "{code:",
    "{noformat}",
    "{quote}",
    "{panel}",
    "{color}",
    "{code}",
    "{*}",
    "{{",
    "}}",
    "??",
    "*",
    "_",
    "-",
];

/// Strip Jira markup from a comment body.
///
/// Total, deterministic and linear in the input length;
/// `normalize(&normalize(x)) == normalize(x)` for any text that settles within
/// [`MAX_PASSES`].
///
/// Inline markers are removed as bare characters, so a literal `-`, `_` or
/// `*` inside content is dropped too (`v1.0-rc1` becomes `v1.0rc1`).
pub fn normalize(raw: &str) -> String {
    let mut current = single_pass(raw);
    for _ in 1..MAX_PASSES {
        let next = single_pass(&current);
        if next == current {
            break;
        }
        current = next;
    }
    current
}

fn single_pass(text: &str) -> String {
    let mut text = text.to_string();

    for re in BLOCK_RES.iter() {
        text = re.replace_all(&text, "$1").into_owned();
    }

    let text = unwrap_links(&strip_literals(text));
    let text = IMAGE_RE.replace_all(&text, "");
    let text = MENTION_RE.replace_all(&text, "");

    text.trim().to_string()
}

/// Delete every inline literal, including the ones that deleting others
/// brings together (`{co-lor}` becomes `{color}`, then nothing).
fn strip_literals(mut text: String) -> String {
    for literal in INLINE_LITERALS {
        if text.contains(literal) {
            text = text.replace(literal, "");
        }
    }
    if !INLINE_LITERALS.iter().any(|literal| text.contains(literal)) {
        return text;
    }

    // The buffer never holds a literal: one can only appear at its end.
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        out.push(ch);
        if let Some(literal) = INLINE_LITERALS.iter().find(|literal| out.ends_with(*literal)) {
            out.truncate(out.len() - literal.len());
        }
    }
    out
}

/// Replace `[label]` and `[label|url]` with `label`, innermost first.
///
/// Brackets that do not form a link, mentions included, are kept as text.
fn unwrap_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut open = Vec::new();
    for ch in text.chars() {
        match ch {
            '[' => {
                open.push(out.len());
                out.push(ch);
            }
            ']' => match open.pop() {
                Some(start) => match link_label_len(&out[start + 1..]) {
                    Some(len) => {
                        out.remove(start);
                        out.truncate(start + len);
                    }
                    None => out.push(ch),
                },
                None => out.push(ch),
            },
            _ => out.push(ch),
        }
    }
    out
}

/// Byte length of the label if `inner` (the text between the brackets) is a
/// link body.
fn link_label_len(inner: &str) -> Option<usize> {
    if inner.starts_with(['~', '|']) || inner.contains(['[', ']']) {
        return None;
    }
    match inner.split_once('|') {
        Some((label, url)) if !label.is_empty() && !url.is_empty() => Some(label.len()),
        Some(_) => None,
        None if !inner.is_empty() => Some(inner.len()),
        None => None,
    }
}

#[cfg(test)]
#[path = "markup_tests.rs"]
mod tests;
