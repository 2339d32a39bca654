// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Result normalization: raw result tokens to the canonical vocabulary.

use std::collections::BTreeMap;

/// Lookup table from lower-cased raw result token to canonical label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    entries: BTreeMap<String, String>,
}

impl ResultTable {
    /// Build a table, lower-casing every key.
    ///
    /// When two keys collide after lower-casing, the later one in iteration
    /// order wins.
    pub fn new<'a>(entries: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        ResultTable {
            entries: entries
                .into_iter()
                .map(|(raw, canonical)| (raw.to_lowercase(), canonical.clone()))
                .collect(),
        }
    }

    /// Canonical label for `raw`, or `raw` itself when the table has no entry.
    ///
    /// Exact, case-insensitive lookup; no partial matching.
    pub fn canonicalize(&self, raw: &str) -> String {
        match self.entries.get(&raw.to_lowercase()) {
            Some(canonical) => canonical.clone(),
            None => raw.to_string(),
        }
    }

    /// Find the table key occurring in `lower_text` and return its label.
    ///
    /// The longest matching key wins, so `not fixed` beats `fixed` on
    /// "not fixed yet". Equal-length ties resolve to the lexicographically
    /// smaller key.
    pub fn scan(&self, lower_text: &str) -> Option<&str> {
        let mut best: Option<(&String, &String)> = None;
        for (key, canonical) in &self.entries {
            if key.is_empty() || !lower_text.contains(key.as_str()) {
                continue;
            }
            match best {
                Some((current, _)) if current.len() >= key.len() => {}
                _ => best = Some((key, canonical)),
            }
        }
        best.map(|(_, canonical)| canonical.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
