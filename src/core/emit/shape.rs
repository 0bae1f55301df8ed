//! Type description of the key tree.
//!
//! The shape mirrors [`resolve_path`](super::mapping::resolve_path) exactly:
//! every leaf is a literal string type equal to its dotted path. A key is
//! optional when some ingested locale does not define it.

use std::collections::BTreeSet;

use super::mapping::{Descriptions, quote, write_description};
use crate::core::document::join_path;
use crate::core::tree::{KeyTree, KeyTreeNode, NodeKind};

/// Structural type of a subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    /// Singleton string type, e.g. `"nav.home"`.
    Literal(String),
    Object(Vec<Field>),
}

/// One member of an object shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub optional: bool,
    pub shape: Shape,
}

/// Describe the subtree rooted at `node`.
///
/// `strict` enables optional markers; without it every key is required.
pub fn describe_shape(
    node: &KeyTreeNode,
    parent_path: &str,
    all_locales: &BTreeSet<String>,
    strict: bool,
) -> Shape {
    match node.kind() {
        // Same string resolve_path produces for the leaf.
        NodeKind::Leaf(_) => Shape::Literal(join_path(parent_path, node.key())),
        NodeKind::Branch(children) => {
            let path = join_path(parent_path, node.key());
            Shape::Object(
                children
                    .values()
                    .map(|child| describe_field(child, &path, all_locales, strict))
                    .collect(),
            )
        }
    }
}

/// Describe the whole tree as the top-level object shape.
pub fn describe_tree(tree: &KeyTree, strict: bool) -> Shape {
    Shape::Object(
        tree.children()
            .map(|node| describe_field(node, "", tree.locales(), strict))
            .collect(),
    )
}

fn describe_field(
    node: &KeyTreeNode,
    parent_path: &str,
    all_locales: &BTreeSet<String>,
    strict: bool,
) -> Field {
    Field {
        key: node.key().to_string(),
        optional: strict && !node.covers_all(all_locales),
        shape: describe_shape(node, parent_path, all_locales, strict),
    }
}

/// Render a shape as a multi-line TypeScript type literal.
pub fn render_type(shape: &Shape, indent: usize, descriptions: &Descriptions) -> String {
    let mut out = String::new();
    write_type(&mut out, shape, indent, 0, descriptions);
    out
}

fn write_type(
    out: &mut String,
    shape: &Shape,
    indent: usize,
    depth: usize,
    descriptions: &Descriptions,
) {
    match shape {
        Shape::Literal(path) => out.push_str(&quote(path)),
        Shape::Object(fields) if fields.is_empty() => out.push_str("{}"),
        Shape::Object(fields) => {
            out.push_str("{\n");
            for field in fields {
                let pad = " ".repeat(indent * (depth + 1));
                if let Shape::Literal(path) = &field.shape {
                    write_description(out, descriptions, path, &pad);
                }
                out.push_str(&pad);
                write_field_name(out, field, quote);
                out.push(' ');
                write_type(out, &field.shape, indent, depth + 1, descriptions);
                out.push('\n');
            }
            out.push_str(&" ".repeat(indent * depth));
            out.push('}');
        }
    }
}

/// Render a shape on a single line, for JSDoc `@type` annotations.
///
/// `/` is escaped inside strings so a key cannot close the comment.
pub fn render_type_compact(shape: &Shape) -> String {
    let mut out = String::new();
    write_compact(&mut out, shape);
    out
}

fn write_compact(out: &mut String, shape: &Shape) {
    match shape {
        Shape::Literal(path) => out.push_str(&quote_in_comment(path)),
        Shape::Object(fields) => {
            out.push('{');
            for (i, field) in fields.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_field_name(out, field, quote_in_comment);
                write_compact(out, &field.shape);
            }
            out.push('}');
        }
    }
}

fn quote_in_comment(text: &str) -> String {
    quote(text).replace('/', "\\/")
}

fn write_field_name(out: &mut String, field: &Field, quote: fn(&str) -> String) {
    out.push_str(&quote(&field.key));
    if field.optional {
        out.push('?');
    }
    out.push(':');
}
