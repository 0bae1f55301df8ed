//! Runtime message lookup.
//!
//! A [`Translator`] binds a [`Catalog`] to one active locale and formats the
//! message behind a dotted key with a [`MessageFormatter`]. The formatter is
//! a seam: [`BraceFormatter`] handles plain `{name}` arguments, anything
//! richer (plurals, selects) plugs in through the trait.

use std::collections::{BTreeMap, HashMap};

use super::document::LocaleDocument;
use super::placeholder::{Argument, brace_groups, parse_arguments};

/// Named arguments substituted into a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatArgs(HashMap<String, String>);

impl FormatArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.0.insert(name.into(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for FormatArgs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.to_string()))
                .collect(),
        )
    }
}

pub trait MessageFormatter {
    /// Produce the final text for `message` in `locale`.
    fn format(&self, locale: &str, message: &str, args: &FormatArgs) -> String;
}

/// Substitutes message arguments from [`FormatArgs`].
///
/// `{name}` and `{name, number}` become the argument value. `plural` and
/// `select` arguments pick a branch (`=N`, then `one` for a plural value of
/// 1, then the exact select key, then `other`) and format it, with `#`
/// standing for the value. Arguments without a value are left untouched so
/// missing data stays visible.
#[derive(Debug, Clone, Copy, Default)]
pub struct BraceFormatter;

impl MessageFormatter for BraceFormatter {
    fn format(&self, locale: &str, message: &str, args: &FormatArgs) -> String {
        let mut out = String::with_capacity(message.len());
        let mut last = 0;
        for argument in parse_arguments(message) {
            out.push_str(&message[last..argument.span.start]);
            match args.get(argument.name) {
                Some(value) => out.push_str(&self.format_argument(locale, &argument, value, args)),
                None => out.push_str(&message[argument.span.clone()]),
            }
            last = argument.span.end;
        }
        out.push_str(&message[last..]);
        out
    }
}

impl BraceFormatter {
    fn format_argument(
        &self,
        locale: &str,
        argument: &Argument<'_>,
        value: &str,
        args: &FormatArgs,
    ) -> String {
        let Some((kind, branches)) = argument.format.and_then(|f| f.split_once(',')) else {
            return value.to_string();
        };
        let plural = matches!(kind.trim(), "plural" | "selectordinal");
        if !plural && kind.trim() != "select" {
            return value.to_string();
        }

        match select_branch(branches, value, plural) {
            Some(body) if plural => self.format(locale, &body.replace('#', value), args),
            Some(body) => self.format(locale, body, args),
            None => value.to_string(),
        }
    }
}

/// Body of the branch matching `value` in `one {...} other {...}`.
fn select_branch<'a>(branches: &'a str, value: &str, plural: bool) -> Option<&'a str> {
    let mut bodies: Vec<(&str, &str)> = Vec::new();
    let mut last = 0;
    for group in brace_groups(branches) {
        // `offset:1 =0 {...}`: the selector is the last word before the brace.
        let selector = branches[last..group.start]
            .split_whitespace()
            .last()
            .unwrap_or_default();
        bodies.push((selector, &branches[group.start + 1..group.end - 1]));
        last = group.end;
    }

    let exact = format!("={}", value);
    let find = |key: &str| bodies.iter().find(|(s, _)| *s == key).map(|(_, b)| *b);
    find(exact.as_str())
        .or_else(|| if plural && value == "1" { find("one") } else { None })
        .or_else(|| if plural { None } else { find(value) })
        .or_else(|| find("other"))
}

/// Flat `dotted key → message` tables for every loaded locale.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    messages: BTreeMap<String, HashMap<String, String>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_documents<'a>(documents: impl IntoIterator<Item = &'a LocaleDocument>) -> Self {
        let mut catalog = Self::new();
        for document in documents {
            catalog.insert_document(document);
        }
        catalog
    }

    /// Add (or replace) the messages of one locale.
    pub fn insert_document(&mut self, document: &LocaleDocument) {
        let table = document
            .leaves()
            .into_iter()
            .map(|(path, text)| (path, text.to_string()))
            .collect();
        self.messages.insert(document.locale.clone(), table);
    }

    pub fn message(&self, locale: &str, key: &str) -> Option<&str> {
        self.messages
            .get(locale)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }
}

/// Looks up and formats messages for one active locale.
#[derive(Debug, Clone)]
pub struct Translator<'a, F = BraceFormatter> {
    catalog: &'a Catalog,
    locale: String,
    formatter: F,
}

impl<'a> Translator<'a, BraceFormatter> {
    pub fn new(catalog: &'a Catalog, locale: impl Into<String>) -> Self {
        Self::with_formatter(catalog, locale, BraceFormatter)
    }
}

impl<'a, F: MessageFormatter> Translator<'a, F> {
    pub fn with_formatter(catalog: &'a Catalog, locale: impl Into<String>, formatter: F) -> Self {
        Self {
            catalog,
            locale: locale.into(),
            formatter,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Whether the active locale has a message for `key`.
    pub fn has(&self, key: &str) -> bool {
        self.catalog.message(&self.locale, key).is_some()
    }

    /// Format the message for `key`, or return the key itself when the
    /// active locale has no such message.
    pub fn translate(&self, key: &str, args: &FormatArgs) -> String {
        match self.catalog.message(&self.locale, key) {
            Some(message) => self.formatter.format(&self.locale, message, args),
            None => {
                tracing::debug!(locale = %self.locale, key, "missing translation");
                key.to_string()
            }
        }
    }
}
