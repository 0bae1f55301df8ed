//! Issue types reported by the CLI.
//!
//! Each issue is self-contained with everything the reporter needs to print
//! it. Errors abort generation; warnings never do.

use std::fmt;

use crate::core::{ConflictError, CoverageGap, MalformedInputError};
use crate::loader::LocaleScanWarning;

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    Conflict,
    EmptyInput,
    Malformed,
    MissingKey,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Conflict => write!(f, "conflict"),
            Rule::EmptyInput => write!(f, "empty-input"),
            Rule::Malformed => write!(f, "malformed"),
            Rule::MissingKey => write!(f, "missing-key"),
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// A key that is a string in one locale and an object in another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictIssue {
    pub error: ConflictError,
}

/// A locale file that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedIssue {
    pub file_path: String,
    pub error: MalformedInputError,
}

/// A key that some locale files do not define.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingKeyIssue {
    pub key: String,
    pub locale: String,
}

/// No usable locale file in the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyInputIssue {
    pub locales_dir: String,
    /// Candidate files found, all of them malformed.
    pub files_found: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    Conflict(ConflictIssue),
    EmptyInput(EmptyInputIssue),
    Malformed(MalformedIssue),
    MissingKey(MissingKeyIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::Conflict(_) | Issue::EmptyInput(_) => Severity::Error,
            Issue::Malformed(_) | Issue::MissingKey(_) => Severity::Warning,
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::Conflict(_) => Rule::Conflict,
            Issue::EmptyInput(_) => Rule::EmptyInput,
            Issue::Malformed(_) => Rule::Malformed,
            Issue::MissingKey(_) => Rule::MissingKey,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::Conflict(issue) => issue.error.to_string(),
            Issue::EmptyInput(issue) => {
                format!("no valid locale files found in \"{}\"", issue.locales_dir)
            }
            Issue::Malformed(issue) => issue.error.to_string(),
            Issue::MissingKey(issue) => {
                format!("key \"{}\" not found in \"{}.json\"", issue.key, issue.locale)
            }
        }
    }

    /// File the issue points at, when there is one.
    pub fn file_path(&self) -> Option<&str> {
        match self {
            Issue::Malformed(issue) => Some(&issue.file_path),
            Issue::EmptyInput(issue) => Some(&issue.locales_dir),
            Issue::Conflict(_) | Issue::MissingKey(_) => None,
        }
    }

    /// Extra help printed under the message.
    pub fn hint(&self) -> Option<String> {
        match self {
            Issue::Conflict(issue) => Some(format!(
                "make \"{}\" either a string or a nested object in every locale file",
                issue.error.path
            )),
            Issue::EmptyInput(issue) if issue.files_found > 0 => Some(format!(
                "{} locale {} found, none could be loaded",
                issue.files_found,
                if issue.files_found == 1 { "file" } else { "files" }
            )),
            Issue::EmptyInput(_) => Some("add at least one <locale>.json file".to_string()),
            Issue::Malformed(_) | Issue::MissingKey(_) => None,
        }
    }

    /// Sort key: errors first, then by rule and message.
    fn sort_key(&self) -> (Severity, Rule, String) {
        (self.severity(), self.rule(), self.message())
    }
}

impl PartialOrd for Issue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Issue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl From<ConflictError> for Issue {
    fn from(error: ConflictError) -> Self {
        Issue::Conflict(ConflictIssue { error })
    }
}

impl From<LocaleScanWarning> for Issue {
    fn from(warning: LocaleScanWarning) -> Self {
        Issue::Malformed(MalformedIssue {
            file_path: warning.file_path,
            error: warning.error,
        })
    }
}

/// One issue per locale missing a key, in path order.
pub fn missing_key_issues(gaps: &[CoverageGap]) -> Vec<Issue> {
    gaps.iter()
        .flat_map(|gap| {
            gap.missing_locales.iter().map(|locale| {
                Issue::MissingKey(MissingKeyIssue {
                    key: gap.path.clone(),
                    locale: locale.clone(),
                })
            })
        })
        .collect()
}
