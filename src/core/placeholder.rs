//! Message arguments (`"Hi {name}"` → `name`).
//!
//! Arguments follow ICU MessageFormat syntax: `{name}`, `{count, number}`,
//! or `{count, plural, one {# item} other {# items}}` whose branches may
//! nest further arguments.

use std::{collections::BTreeSet, ops::Range, sync::LazyLock};

use regex::Regex;

/// Head of a brace group: the argument name and, after the first comma, its
/// format (`plural, one {# item} ...`).
static ARGUMENT_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*([A-Za-z_][A-Za-z0-9_]*)\s*(?:,(.*))?$").unwrap());

/// One top-level argument of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument<'a> {
    pub name: &'a str,
    /// Everything after the first comma, untrimmed.
    pub format: Option<&'a str>,
    /// Byte range of the whole `{...}` group in the message.
    pub span: Range<usize>,
}

/// Byte ranges of balanced top-level `{...}` groups.
///
/// An unclosed group ends the scan.
pub(crate) fn brace_groups(text: &str) -> Vec<Range<usize>> {
    let mut groups = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '{' => {
                if depth == 0 {
                    start = i;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    groups.push(start..i + 1);
                }
            }
            _ => {}
        }
    }
    groups
}

/// Top-level arguments of a message, in order. Groups that do not start with
/// an identifier (`{}`, `{# items}`) are not arguments.
pub fn parse_arguments(text: &str) -> Vec<Argument<'_>> {
    brace_groups(text)
        .into_iter()
        .filter_map(|span| {
            let inner = &text[span.start + 1..span.end - 1];
            let caps = ARGUMENT_HEAD.captures(inner)?;
            Some(Argument {
                name: caps.get(1)?.as_str(),
                format: caps.get(2).map(|m| m.as_str()),
                span,
            })
        })
        .collect()
}

/// Collect the distinct argument names used in a message, including those
/// nested inside `plural`/`select` branches.
pub fn extract_placeholders(text: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    collect_names(text, &mut names);
    names
}

fn collect_names(text: &str, names: &mut BTreeSet<String>) {
    for argument in parse_arguments(text) {
        names.insert(argument.name.to_string());
        if let Some(format) = argument.format {
            for branch in brace_groups(format) {
                collect_names(&format[branch.start + 1..branch.end - 1], names);
            }
        }
    }
}
