//! Report formatting and printing utilities.
//!
//! This module prints issues in cargo-style format followed by a one-line
//! summary. Separate from core logic to allow type-locales to be used as a
//! library.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CheckSummary, CommandResult, CommandSummary, GenerateSummary, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::issues::{Issue, Severity};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a command result to stdout.
pub fn print(result: &CommandResult) {
    print_to(result, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
pub fn print_to<W: Write>(result: &CommandResult, writer: &mut W) {
    let shown: Vec<&Issue> = result
        .issues
        .iter()
        .filter(|i| !result.quiet || i.severity() == Severity::Error)
        .collect();

    for issue in &shown {
        print_issue(issue, writer);
    }
    print_summary(&shown, writer);

    if result.error_count > 0 || result.quiet {
        return;
    }

    match &result.summary {
        CommandSummary::Generate(summary) => print_generate(summary, writer),
        CommandSummary::Check(summary) => print_check(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

// ============================================================
// Internal Functions
// ============================================================

fn print_issue<W: Write>(issue: &Issue, writer: &mut W) {
    let severity_str = match issue.severity() {
        Severity::Error => "error".bold().red(),
        Severity::Warning => "warning".bold().yellow(),
    };

    let _ = writeln!(
        writer,
        "{}: {}  {}",
        severity_str,
        issue.message(),
        issue.rule().to_string().dimmed().cyan()
    );

    if let Some(file_path) = issue.file_path() {
        let _ = writeln!(writer, "  {} {}", "-->".blue(), file_path);
    }

    if let Some(hint) = issue.hint() {
        let _ = writeln!(writer, "  {} {} {}", "=".blue(), "hint:".bold().cyan(), hint);
    }

    let _ = writeln!(writer);
}

fn print_summary<W: Write>(issues: &[&Issue], writer: &mut W) {
    let total_errors = issues
        .iter()
        .filter(|i| i.severity() == Severity::Error)
        .count();
    let total_warnings = issues.len() - total_errors;

    if total_errors > 0 {
        let _ = writeln!(
            writer,
            "{} {} problems ({} {}, {} {})",
            FAILURE_MARK.red(),
            issues.len(),
            total_errors,
            if total_errors == 1 { "error" } else { "errors" }.red(),
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    } else if total_warnings > 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            total_warnings,
            if total_warnings == 1 {
                "warning"
            } else {
                "warnings"
            }
            .yellow()
        );
    }
}

fn print_generate<W: Write>(summary: &GenerateSummary, writer: &mut W) {
    let Some(output) = &summary.output else {
        return;
    };
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Generated {} from {} ({}), {}",
            output,
            plural(summary.locales.len(), "locale", "locales"),
            summary.locales.join(", "),
            plural(summary.key_count, "key", "keys")
        )
        .green()
    );
}

fn print_check<W: Write>(summary: &CheckSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} ({}), {} - no conflicts found",
            plural(summary.locales.len(), "locale", "locales"),
            summary.locales.join(", "),
            plural(summary.key_count, "key", "keys")
        )
        .green()
    );
}

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    format!("{} {}", count, if count == 1 { one } else { many })
}

// ============================================================
// Tests
// ============================================================
