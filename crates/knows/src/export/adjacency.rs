//! Line-oriented adjacency and edge list exports.
//!
//! Fields are space-delimited. Attribute dictionaries are written as compact
//! JSON objects in attribute order.

use crate::error::{GraphError, Result};
use crate::graph::{PropertyGraph, PropertyMap};

/// One line per node: the node followed by each successor, repeated per parallel edge.
pub fn generate_adjacency_list(graph: &PropertyGraph) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(graph.node_count());
    for node in graph.nodes() {
        let mut line = node.id.to_string();
        for (target, edges) in graph.adjacency(&node.id)? {
            for _ in &edges {
                line.push(' ');
                line.push_str(&target.to_string());
            }
        }
        lines.push(line);
    }
    Ok(lines)
}

/// Per node a `<node> <out-degree>` line, then `<target> <attributes>` per out-edge.
pub fn generate_multiline_adjacency_list(graph: &PropertyGraph) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(graph.node_count() + graph.edge_count());
    for node in graph.nodes() {
        let adjacency = graph.adjacency(&node.id)?;
        let degree: usize = adjacency.iter().map(|(_, edges)| edges.len()).sum();
        lines.push(format!("{} {degree}", node.id));
        for (target, edges) in adjacency {
            for edge in edges {
                lines.push(format!("{target} {}", attributes_json(&edge.properties)?));
            }
        }
    }
    Ok(lines)
}

/// One `<source> <target> <attributes>` line per edge, in edge order.
pub fn generate_edge_list(graph: &PropertyGraph) -> Result<Vec<String>> {
    graph
        .edges()
        .map(|edge| -> Result<String> {
            Ok(format!(
                "{} {} {}",
                edge.source,
                edge.target,
                attributes_json(&edge.properties)?
            ))
        })
        .collect()
}

fn attributes_json(properties: &PropertyMap) -> Result<String> {
    serde_json::to_string(properties)
        .map_err(|e| GraphError::serialization("Failed to serialize edge attributes", Some(e)))
}
