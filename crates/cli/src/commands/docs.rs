// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `docs`: write the command reference to disk.
//!
//! Both formats are rendered from the clap definition, so the reference
//! cannot drift from the actual flags.

use clap::{Arg, Command as ClapCommand, CommandFactory};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, DocsFormat};
use crate::error::Result;

pub fn run(format: DocsFormat, output_dir: &Path) -> Result<()> {
    let path = write(format, output_dir)?;
    println!("Generated documentation in {}", path.display());
    Ok(())
}

/// Render `format` into `output_dir`, creating it if needed.
pub fn write(format: DocsFormat, output_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(format.file_name());
    fs::write(&path, render(format))?;
    Ok(path)
}

pub fn render(format: DocsFormat) -> String {
    let mut cmd = Cli::command();
    cmd.build();
    match format {
        DocsFormat::Markdown => markdown(&cmd),
        DocsFormat::OfflineHelp => offline_help(&mut cmd),
    }
}

fn markdown(root: &ClapCommand) -> String {
    let name = root.get_name();
    let mut out = format!("# {name}\n\n");
    if let Some(about) = root.get_long_about().or(root.get_about()) {
        out.push_str(&format!("{about}\n\n"));
    }

    out.push_str("## Global options\n\n");
    options_table(&mut out, root.get_arguments());

    out.push_str("## Commands\n");
    for sub in visible(root) {
        markdown_command(&mut out, sub, name);
    }
    out
}

fn markdown_command(out: &mut String, cmd: &ClapCommand, parent: &str) {
    let path = format!("{parent} {}", cmd.get_name());
    out.push_str(&format!("\n### {path}\n\n"));
    if let Some(about) = cmd.get_about() {
        out.push_str(&format!("{about}\n\n"));
    }
    out.push_str(&format!("```\n{}\n```\n\n", usage(cmd)));

    let args = cmd.get_arguments().filter(|arg| !arg.is_global_set());
    options_table(out, args);

    if let Some(after) = cmd.get_after_help() {
        out.push_str(&format!("```\n{}\n```\n", after.to_string().trim_end()));
    }
    for sub in visible(cmd) {
        markdown_command(out, sub, &path);
    }
}

fn options_table<'a>(out: &mut String, args: impl Iterator<Item = &'a Arg>) {
    let rows: Vec<String> = args
        .filter(|arg| !arg.is_hide_set() && arg.get_id() != "help")
        .map(|arg| {
            let help = arg.get_help().map(|h| h.to_string()).unwrap_or_default();
            let default = arg
                .get_default_values()
                .iter()
                .map(|v| format!("`{}`", v.to_string_lossy()))
                .collect::<Vec<_>>()
                .join(", ");
            format!("| `{}` | {} | {} |", flag(arg), help.replace('|', "\\|"), default)
        })
        .collect();
    if rows.is_empty() {
        return;
    }
    out.push_str("| Option | Description | Default |\n|--------|-------------|---------|\n");
    for row in rows {
        out.push_str(&row);
        out.push('\n');
    }
    out.push('\n');
}

/// `-r, --result <RESULT>` style label for one argument.
fn flag(arg: &Arg) -> String {
    let value = arg
        .get_value_names()
        .and_then(|names| names.first())
        .map(|name| format!("<{name}>"))
        .unwrap_or_else(|| format!("<{}>", arg.get_id().as_str().to_uppercase()));
    if arg.is_positional() {
        return value;
    }

    let mut label = match (arg.get_short(), arg.get_long()) {
        (Some(short), Some(long)) => format!("-{short}, --{long}"),
        (Some(short), None) => format!("-{short}"),
        (None, Some(long)) => format!("--{long}"),
        (None, None) => arg.get_id().to_string(),
    };
    if arg.get_action().takes_values() {
        label.push(' ');
        label.push_str(&value);
    }
    label
}

fn usage(cmd: &ClapCommand) -> String {
    cmd.clone()
        .render_usage()
        .to_string()
        .trim_start_matches("Usage:")
        .trim()
        .to_string()
}

fn visible(cmd: &ClapCommand) -> impl Iterator<Item = &ClapCommand> {
    cmd.get_subcommands().filter(|sub| !sub.is_hide_set() && sub.get_name() != "help")
}

fn offline_help(root: &mut ClapCommand) -> String {
    let name = root.get_name().to_string();
    let mut out = root.render_long_help().to_string();
    for sub in root.get_subcommands_mut().filter(|sub| sub.get_name() != "help") {
        help_section(&mut out, sub, &name);
    }
    out
}

fn help_section(out: &mut String, cmd: &mut ClapCommand, parent: &str) {
    let title = format!("{parent} {}", cmd.get_name());
    out.push_str(&format!("\n\n{title}\n{}\n\n", "=".repeat(title.len())));
    out.push_str(cmd.render_long_help().to_string().trim_end());
    out.push('\n');
    for sub in cmd.get_subcommands_mut().filter(|sub| sub.get_name() != "help") {
        help_section(out, sub, &title);
    }
}

#[cfg(test)]
#[path = "docs_tests.rs"]
mod tests;
