//! GML (Graph Modelling Language) export.
//!
//! Nodes are renumbered `0..n` in node order and carry their original
//! identifier as `label`. Attribute keys must be valid GML keys.

use crate::error::{GraphError, Result};
use crate::graph::{PropertyGraph, PropertyMap, PropertyValue};
use std::collections::HashMap;
use std::fmt::Write;

const NODE_RESERVED: &[&str] = &["id", "label"];
const EDGE_RESERVED: &[&str] = &["source", "target", "key"];

/// Generate a GML document, one statement per line.
///
/// # Errors
///
/// Returns [`GraphError::Codec`] when an attribute key is not a valid GML key.
pub fn generate_gml(graph: &PropertyGraph) -> Result<Vec<String>> {
    let mut lines = vec![
        "graph [".to_string(),
        "  directed 1".to_string(),
        "  multigraph 1".to_string(),
    ];

    let mut numbering = HashMap::with_capacity(graph.node_count());
    for (index, node) in graph.nodes().enumerate() {
        numbering.insert(&node.id, index);
        lines.push("  node [".to_string());
        lines.push(format!("    id {index}"));
        lines.push(format!("    label {}", quote(&node.id.to_string())));
        push_attributes(&mut lines, &node.properties, NODE_RESERVED)?;
        lines.push("  ]".to_string());
    }

    for edge in graph.edges() {
        let (Some(source), Some(target)) = (numbering.get(&edge.source), numbering.get(&edge.target))
        else {
            return Err(GraphError::codec(
                "gml",
                format!("edge {} -> {} references an unknown node", edge.source, edge.target),
                None::<std::fmt::Error>,
            ));
        };
        lines.push("  edge [".to_string());
        lines.push(format!("    source {source}"));
        lines.push(format!("    target {target}"));
        lines.push(format!("    key {}", edge.key));
        push_attributes(&mut lines, &edge.properties, EDGE_RESERVED)?;
        lines.push("  ]".to_string());
    }

    lines.push("]".to_string());
    Ok(lines)
}

fn push_attributes(lines: &mut Vec<String>, properties: &PropertyMap, reserved: &[&str]) -> Result<()> {
    for (key, value) in properties.iter() {
        if reserved.contains(&key.as_str()) {
            continue;
        }
        if !is_valid_key(key) {
            return Err(GraphError::codec(
                "gml",
                format!("'{key}' is not a valid GML key"),
                None::<std::fmt::Error>,
            ));
        }
        lines.push(format!("    {key} {}", gml_value(value)));
    }
    Ok(())
}

/// GML keys start with a letter and continue with letters, digits or `_`.
fn is_valid_key(key: &str) -> bool {
    let mut chars = key.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn gml_value(value: &PropertyValue) -> String {
    match value {
        PropertyValue::String(s) => quote(s),
        PropertyValue::Int(i) => i.to_string(),
        PropertyValue::Float(x) => gml_float(*x, &value.to_string()),
        PropertyValue::Bool(b) => u8::from(*b).to_string(),
    }
}

/// Upper-cased real with a mandatory mantissa dot (`1.E+20`, `+INF`, `NAN`).
fn gml_float(x: f64, text: &str) -> String {
    if x == f64::INFINITY {
        return "+INF".to_string();
    }
    let mut text = text.to_uppercase();
    if let Some(exp) = text.rfind('E') {
        if !text[..exp].contains('.') {
            text.insert(exp, '.');
        }
    }
    text
}

/// Quote a string, writing `&`, `"` and non-ASCII characters as character references.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '&' | '"' => push_reference(&mut out, c),
            c if !c.is_ascii() => push_reference(&mut out, c),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn push_reference(out: &mut String, c: char) {
    // Writing into a String cannot fail
    let _ = write!(out, "&#{};", u32::from(c));
}
