//! GraphML export for yEd, Gephi and other XML-based graph tools.

use super::{escape_xml, xml_value};
use crate::graph::{PropertyGraph, PropertyMap, PropertyValue};
use indexmap::IndexMap;

const GRAPHML_HEADER: &str = concat!(
    r#"<graphml xmlns="http://graphml.graphdrawing.org/xmlns" "#,
    r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
    r#"xsi:schemaLocation="http://graphml.graphdrawing.org/xmlns "#,
    r#"http://graphml.graphdrawing.org/xmlns/1.0/graphml.xsd">"#
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Domain {
    Node,
    Edge,
}

impl Domain {
    fn as_str(self) -> &'static str {
        match self {
            Domain::Node => "node",
            Domain::Edge => "edge",
        }
    }
}

/// Declared `<key>` elements, in first-seen order.
struct KeyTable {
    keys: IndexMap<(Domain, String), &'static str>,
}

impl KeyTable {
    fn collect(graph: &PropertyGraph) -> Self {
        let mut keys = IndexMap::new();
        for node in graph.nodes() {
            for (name, value) in node.properties.iter() {
                declare(&mut keys, Domain::Node, name, value);
            }
        }
        for edge in graph.edges() {
            for (name, value) in edge.properties.iter() {
                declare(&mut keys, Domain::Edge, name, value);
            }
        }
        Self { keys }
    }

    fn id_of(&self, domain: Domain, name: &str) -> Option<usize> {
        self.keys.get_index_of(&(domain, name.to_string()))
    }
}

/// Generate a GraphML document, one element per line.
pub fn generate_graphml(graph: &PropertyGraph) -> Vec<String> {
    let table = KeyTable::collect(graph);
    let mut lines = vec![
        "<?xml version='1.0' encoding='utf-8'?>".to_string(),
        GRAPHML_HEADER.to_string(),
    ];

    for (index, ((domain, name), attr_type)) in table.keys.iter().enumerate() {
        lines.push(format!(
            "  <key id=\"d{index}\" for=\"{}\" attr.name=\"{}\" attr.type=\"{attr_type}\" />",
            domain.as_str(),
            escape_xml(name)
        ));
    }

    lines.push("  <graph edgedefault=\"directed\">".to_string());

    for node in graph.nodes() {
        let open = format!("    <node id=\"{}\"", escape_xml(&node.id.to_string()));
        push_element(&mut lines, open, "node", &node.properties, &table, Domain::Node);
    }

    for edge in graph.edges() {
        let open = format!(
            "    <edge source=\"{}\" target=\"{}\" id=\"{}\"",
            escape_xml(&edge.source.to_string()),
            escape_xml(&edge.target.to_string()),
            edge.key
        );
        push_element(&mut lines, open, "edge", &edge.properties, &table, Domain::Edge);
    }

    lines.push("  </graph>".to_string());
    lines.push("</graphml>".to_string());
    lines
}

/// Record a key's type, widening to `string` when values disagree.
fn declare(
    keys: &mut IndexMap<(Domain, String), &'static str>,
    domain: Domain,
    name: &str,
    value: &PropertyValue,
) {
    let value_type = graphml_type(value);
    let declared = keys.entry((domain, name.to_string())).or_insert(value_type);
    if *declared != value_type {
        *declared = "string";
    }
}

fn push_element(
    lines: &mut Vec<String>,
    open: String,
    tag: &str,
    properties: &PropertyMap,
    table: &KeyTable,
    domain: Domain,
) {
    if properties.is_empty() {
        lines.push(format!("{open} />"));
        return;
    }

    lines.push(format!("{open}>"));
    for (name, value) in properties.iter() {
        if let Some(id) = table.id_of(domain, name) {
            lines.push(format!(
                "      <data key=\"d{id}\">{}</data>",
                escape_xml(&xml_value(value))
            ));
        }
    }
    lines.push(format!("    </{tag}>"));
}

fn graphml_type(value: &PropertyValue) -> &'static str {
    match value {
        PropertyValue::String(_) => "string",
        PropertyValue::Int(_) => "long",
        PropertyValue::Float(_) => "double",
        PropertyValue::Bool(_) => "boolean",
    }
}
