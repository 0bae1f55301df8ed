//! Validated locale documents.
//!
//! A locale file is only usable when every value is either a string or a
//! nested object. [`LocaleDocument::from_value`] checks that once, so the
//! merge engine can work on a shape that cannot hold arrays, numbers, or
//! `null`.

use serde_json::{Map, Value};

use super::error::{MalformedInputError, MalformedKind};

/// One value inside a locale document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A translation message: `"submit": "Submit"`.
    Text(String),
    /// A namespace: `"Common": { ... }`.
    Nested(Vec<(String, Entry)>),
}

/// The parsed translation content for one locale.
///
/// Entries keep the order they had in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleDocument {
    pub locale: String,
    pub entries: Vec<(String, Entry)>,
}

impl LocaleDocument {
    /// Validate a parsed JSON value as a locale document.
    ///
    /// Arrays and scalars other than strings are rejected at their dotted
    /// path, as is a root that is not an object.
    pub fn from_value(
        locale: impl Into<String>,
        source_name: &str,
        value: Value,
    ) -> Result<Self, MalformedInputError> {
        let locale = locale.into();
        match value {
            Value::Object(map) => {
                let entries = convert_map(map, "")
                    .map_err(|kind| MalformedInputError::new(source_name, kind))?;
                Ok(Self { locale, entries })
            }
            other => Err(MalformedInputError::new(
                source_name,
                MalformedKind::RootNotObject {
                    found: json_type_name(&other),
                },
            )),
        }
    }

    /// Parse and validate JSON text.
    pub fn parse(
        locale: impl Into<String>,
        source_name: &str,
        content: &str,
    ) -> Result<Self, MalformedInputError> {
        if content.trim().is_empty() {
            return Err(MalformedInputError::new(source_name, MalformedKind::Empty));
        }
        let value: Value = serde_json::from_str(content).map_err(|e| {
            MalformedInputError::new(source_name, MalformedKind::InvalidJson(e.to_string()))
        })?;
        Self::from_value(locale, source_name, value)
    }

    /// Iterate over every leaf as `(dotted_path, text)`.
    pub fn leaves(&self) -> Vec<(String, &str)> {
        let mut out = Vec::new();
        collect_leaves(&self.entries, "", &mut out);
        out
    }
}

/// Join a parent path and a key with `.`; the top level has no prefix.
pub fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

fn convert_map(map: Map<String, Value>, prefix: &str) -> Result<Vec<(String, Entry)>, MalformedKind> {
    let mut entries = Vec::with_capacity(map.len());
    for (key, value) in map {
        let path = join_path(prefix, &key);
        let entry = match value {
            Value::String(text) => Entry::Text(text),
            Value::Object(inner) => Entry::Nested(convert_map(inner, &path)?),
            other => {
                return Err(MalformedKind::InvalidShape {
                    path,
                    found: json_type_name(&other),
                });
            }
        };
        entries.push((key, entry));
    }
    Ok(entries)
}

fn collect_leaves<'a>(entries: &'a [(String, Entry)], prefix: &str, out: &mut Vec<(String, &'a str)>) {
    for (key, entry) in entries {
        let path = join_path(prefix, key);
        match entry {
            Entry::Text(text) => out.push((path, text.as_str())),
            Entry::Nested(inner) => collect_leaves(inner, &path, out),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use crate::core::document::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_nested_document() {
        let doc = LocaleDocument::from_value(
            "en",
            "en.json",
            json!({"Common": {"save": "Save"}, "title": "Hello"}),
        )
        .unwrap();

        assert_eq!(doc.locale, "en");
        assert_eq!(
            doc.entries,
            vec![
                (
                    "Common".to_string(),
                    Entry::Nested(vec![("save".to_string(), Entry::Text("Save".to_string()))])
                ),
                ("title".to_string(), Entry::Text("Hello".to_string())),
            ]
        );
    }

    #[test]
    fn test_array_is_rejected_at_its_path() {
        let err = LocaleDocument::from_value(
            "en",
            "en.json",
            json!({"faq": {"items": ["a", "b"]}}),
        )
        .unwrap_err();

        assert_eq!(
            err.kind,
            MalformedKind::InvalidShape {
                path: "faq.items".to_string(),
                found: "array"
            }
        );
    }

    #[test]
    fn test_scalars_are_rejected() {
        for (value, found) in [
            (json!({"n": 1}), "number"),
            (json!({"b": true}), "boolean"),
            (json!({"x": null}), "null"),
        ] {
            let err = LocaleDocument::from_value("en", "en.json", value).unwrap_err();
            assert!(
                matches!(err.kind, MalformedKind::InvalidShape { found: f, .. } if f == found)
            );
        }
    }

    #[test]
    fn test_root_must_be_object() {
        let err = LocaleDocument::from_value("en", "en.json", json!("hello")).unwrap_err();
        assert_eq!(err.kind, MalformedKind::RootNotObject { found: "string" });
    }

    #[test]
    fn test_parse_empty_and_invalid() {
        let err = LocaleDocument::parse("en", "en.json", "  \n").unwrap_err();
        assert_eq!(err.kind, MalformedKind::Empty);

        let err = LocaleDocument::parse("en", "en.json", "{\"a\": ").unwrap_err();
        assert!(matches!(err.kind, MalformedKind::InvalidJson(_)));
    }

    #[test]
    fn test_leaves() {
        let doc =
            LocaleDocument::parse("en", "en.json", r#"{"a": {"b": "1", "c": {"d": "2"}}, "e": "3"}"#)
                .unwrap();
        assert_eq!(
            doc.leaves(),
            vec![
                ("a.b".to_string(), "1"),
                ("a.c.d".to_string(), "2"),
                ("e".to_string(), "3"),
            ]
        );
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("", "a"), "a");
        assert_eq!(join_path("a.b", "c"), "a.b.c");
    }
}
