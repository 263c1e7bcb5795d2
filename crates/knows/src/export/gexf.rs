//! GEXF 1.2 export for Gephi.
//!
//! The `label` attribute becomes the element's GEXF label; every other
//! attribute is declared in an `<attributes>` block and written as `<attvalue>`.

use super::{escape_xml, xml_value};
use crate::graph::{PropertyGraph, PropertyMap, PropertyValue, LABEL_KEY};
use indexmap::IndexMap;

const GEXF_HEADER: &str = concat!(
    r#"<gexf xmlns="http://www.gexf.net/1.2draft" "#,
    r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" "#,
    r#"xsi:schemaLocation="http://www.gexf.net/1.2draft http://www.gexf.net/1.2draft/gexf.xsd" "#,
    r#"version="1.2">"#
);

// attribute title -> (id, gexf type)
type AttributeTable = IndexMap<String, (usize, &'static str)>;

/// Generate a GEXF document, one element per line.
pub fn generate_gexf(graph: &PropertyGraph) -> Vec<String> {
    let mut next_id = 0;
    let node_attributes = declare(graph.nodes().map(|n| &n.properties), &mut next_id);
    let edge_attributes = declare(graph.edges().map(|e| &e.properties), &mut next_id);

    let mut lines = vec![
        "<?xml version='1.0' encoding='utf-8'?>".to_string(),
        GEXF_HEADER.to_string(),
        "  <graph defaultedgetype=\"directed\" mode=\"static\" name=\"\">".to_string(),
    ];

    push_declarations(&mut lines, "node", &node_attributes);
    push_declarations(&mut lines, "edge", &edge_attributes);

    lines.push("    <nodes>".to_string());
    for node in graph.nodes() {
        let label = node
            .properties
            .get(LABEL_KEY)
            .map_or_else(|| node.id.to_string(), ToString::to_string);
        let open = format!(
            "      <node id=\"{}\" label=\"{}\"",
            escape_xml(&node.id.to_string()),
            escape_xml(&label)
        );
        push_element(&mut lines, open, "node", &node.properties, &node_attributes);
    }
    lines.push("    </nodes>".to_string());

    lines.push("    <edges>".to_string());
    for (index, edge) in graph.edges().enumerate() {
        let mut open = format!(
            "      <edge source=\"{}\" target=\"{}\" id=\"{index}\"",
            escape_xml(&edge.source.to_string()),
            escape_xml(&edge.target.to_string())
        );
        if let Some(label) = edge.properties.get(LABEL_KEY) {
            open.push_str(&format!(" label=\"{}\"", escape_xml(&label.to_string())));
        }
        push_element(&mut lines, open, "edge", &edge.properties, &edge_attributes);
    }
    lines.push("    </edges>".to_string());

    lines.push("  </graph>".to_string());
    lines.push("</gexf>".to_string());
    lines
}

fn declare<'a>(
    maps: impl Iterator<Item = &'a PropertyMap>,
    next_id: &mut usize,
) -> AttributeTable {
    let mut table = AttributeTable::new();
    for props in maps {
        for (title, value) in props.iter().filter(|(k, _)| k.as_str() != LABEL_KEY) {
            let value_type = gexf_type(value);
            let (_, declared) = table.entry(title.clone()).or_insert_with(|| {
                let id = *next_id;
                *next_id += 1;
                (id, value_type)
            });
            if *declared != value_type {
                *declared = "string";
            }
        }
    }
    table
}

fn push_declarations(lines: &mut Vec<String>, class: &str, table: &AttributeTable) {
    if table.is_empty() {
        return;
    }
    lines.push(format!("    <attributes mode=\"static\" class=\"{class}\">"));
    for (title, (id, attr_type)) in table {
        lines.push(format!(
            "      <attribute id=\"{id}\" title=\"{}\" type=\"{attr_type}\" />",
            escape_xml(title)
        ));
    }
    lines.push("    </attributes>".to_string());
}

fn push_element(
    lines: &mut Vec<String>,
    open: String,
    tag: &str,
    properties: &PropertyMap,
    table: &AttributeTable,
) {
    let values: Vec<String> = properties
        .iter()
        .filter_map(|(title, value)| {
            table.get(title).map(|(id, _)| {
                format!(
                    "          <attvalue for=\"{id}\" value=\"{}\" />",
                    escape_xml(&xml_value(value))
                )
            })
        })
        .collect();

    if values.is_empty() {
        lines.push(format!("{open} />"));
        return;
    }

    lines.push(format!("{open}>"));
    lines.push("        <attvalues>".to_string());
    lines.extend(values);
    lines.push("        </attvalues>".to_string());
    lines.push(format!("      </{tag}>"));
}

fn gexf_type(value: &PropertyValue) -> &'static str {
    match value {
        PropertyValue::String(_) => "string",
        PropertyValue::Int(_) => "long",
        PropertyValue::Float(_) => "double",
        PropertyValue::Bool(_) => "boolean",
    }
}
