//! Runtime mapping: every leaf resolves to its own dotted path.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::core::document::join_path;
use crate::core::tree::{KeyTree, KeyTreeNode, NodeKind};

/// Resolve a node to its runtime value.
///
/// A leaf becomes the string `parent_path.key` (just `key` at the top
/// level); a branch becomes an object of its resolved children.
pub fn resolve_path(node: &KeyTreeNode, parent_path: &str) -> Value {
    let path = join_path(parent_path, node.key());
    match node.kind() {
        NodeKind::Leaf(_) => Value::String(path),
        NodeKind::Branch(children) => Value::Object(
            children
                .values()
                .map(|child| (child.key().to_string(), resolve_path(child, &path)))
                .collect(),
        ),
    }
}

/// Resolve the whole tree into the top-level mapping object.
pub fn resolve_tree(tree: &KeyTree) -> Map<String, Value> {
    tree.children()
        .map(|node| (node.key().to_string(), resolve_path(node, "")))
        .collect()
}

/// Format argument names by dotted leaf path. Leaves listed here get a
/// `/** @description "{name}" */` comment above their member.
pub type Descriptions = BTreeMap<String, Vec<String>>;

/// Render the mapping as a JavaScript object literal.
///
/// Keys are always quoted, members end with a trailing comma.
pub fn render_object(
    mapping: &Map<String, Value>,
    indent: usize,
    descriptions: &Descriptions,
) -> String {
    let mut out = String::new();
    write_object(&mut out, mapping, "", indent, 0, descriptions);
    out
}

fn write_object(
    out: &mut String,
    mapping: &Map<String, Value>,
    parent_path: &str,
    indent: usize,
    depth: usize,
    descriptions: &Descriptions,
) {
    if mapping.is_empty() {
        out.push_str("{}");
        return;
    }

    out.push_str("{\n");
    for (key, value) in mapping {
        let pad = " ".repeat(indent * (depth + 1));
        let path = join_path(parent_path, key);
        write_description(out, descriptions, &path, &pad);
        out.push_str(&pad);
        out.push_str(&quote(key));
        out.push_str(": ");
        match value {
            Value::Object(inner) => write_object(out, inner, &path, indent, depth + 1, descriptions),
            other => out.push_str(&other.to_string()),
        }
        out.push_str(",\n");
    }
    out.push_str(&" ".repeat(indent * depth));
    out.push('}');
}

/// Write the description line for `path`, if it has format arguments.
pub(crate) fn write_description(out: &mut String, descriptions: &Descriptions, path: &str, pad: &str) {
    let Some(names) = descriptions.get(path).filter(|names| !names.is_empty()) else {
        return;
    };
    let args: Vec<String> = names.iter().map(|name| format!("{{{}}}", name)).collect();
    out.push_str(&format!("{}/** @description \"{}\" */\n", pad, args.join(" ")));
}

/// Quote a string as a JSON (and therefore JS/TS) string literal.
pub(crate) fn quote(text: &str) -> String {
    Value::String(text.to_string()).to_string()
}

#[cfg(test)]
mod tests {
    use crate::core::document::LocaleDocument;
    use crate::core::emit::mapping::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn tree(docs: &[(&str, &str)]) -> KeyTree {
        let docs: Vec<LocaleDocument> = docs
            .iter()
            .map(|(locale, json)| LocaleDocument::parse(*locale, "test.json", json).unwrap())
            .collect();
        KeyTree::from_documents(&docs).unwrap()
    }

    #[test]
    fn test_leaf_resolves_to_own_path() {
        let tree = tree(&[("en", r#"{"a": {"b": {"c": "deep text"}}, "top": "Top"}"#)]);

        assert_eq!(
            Value::Object(resolve_tree(&tree)),
            json!({"a": {"b": {"c": "a.b.c"}}, "top": "top"})
        );
        assert_eq!(
            resolve_path(tree.get("a.b").unwrap(), "a"),
            json!({"c": "a.b.c"})
        );
    }

    #[test]
    fn test_mapping_is_union_of_locales() {
        let tree = tree(&[
            ("en", r#"{"a": {"b": "1"}}"#),
            ("fr", r#"{"a": {"c": "2"}, "d": "3"}"#),
        ]);

        assert_eq!(
            Value::Object(resolve_tree(&tree)),
            json!({"a": {"b": "a.b", "c": "a.c"}, "d": "d"})
        );
    }

    #[test]
    fn test_render_object() {
        let tree = tree(&[("en", r#"{"greeting": "Hi", "nav": {"home": "Home"}, "empty": {}}"#)]);
        let rendered = render_object(&resolve_tree(&tree), 2, &Descriptions::new());

        assert_eq!(
            rendered,
            "{\n  \"empty\": {},\n  \"greeting\": \"greeting\",\n  \"nav\": {\n    \"home\": \"nav.home\",\n  },\n}"
        );
    }

    #[test]
    fn test_render_object_with_descriptions() {
        let tree = tree(&[("en", r#"{"inbox": {"count": "{count} for {name}", "title": "Inbox"}}"#)]);
        let descriptions = Descriptions::from([(
            "inbox.count".to_string(),
            vec!["count".to_string(), "name".to_string()],
        )]);

        insta::assert_snapshot!(render_object(&resolve_tree(&tree), 2, &descriptions), @r#"
        {
          "inbox": {
            /** @description "{count} {name}" */
            "count": "inbox.count",
            "title": "inbox.title",
          },
        }
        "#);
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("plain"), "\"plain\"");
        assert_eq!(quote("say \"hi\""), "\"say \\\"hi\\\"\"");
    }
}
