// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// `jira-qa` isolated from the caller's environment: no config or log
/// variables, and a home directory inside `temp` so no user config is found.
pub fn jira_qa(temp: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("jira-qa");
    cmd.current_dir(temp.path())
        .env_remove("JIRA_QA_CONFIG")
        .env_remove("JIRA_QA_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1")
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"));
    cmd
}

/// Write `content` to `name` inside `temp` and return the path.
pub fn write_file(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// A config whose Jira URL points at a closed local port.
pub const UNREACHABLE_CONFIG: &str = "\
[jira]
base_url = \"http://127.0.0.1:9\"
username = \"qa@example.com\"
token = \"secret\"
";
