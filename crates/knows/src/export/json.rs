//! Node-link JSON export for D3.js and web visualization tools.
//!
//! Generates a single-line JSON document with `nodes` and `links` arrays.

use crate::error::{GraphError, Result};
use crate::graph::{NodeId, PropertyGraph, PropertyMap, PropertyValue};
use serde_json::{json, Map, Value};

/// Export graph to node-link JSON, returned as a single line.
pub fn generate_node_link(graph: &PropertyGraph) -> Result<Vec<String>> {
    let nodes: Vec<Value> = graph
        .nodes()
        .map(|node| {
            let mut obj = properties_to_json(&node.properties);
            obj.insert("id".to_string(), node_id_to_json(&node.id));
            Value::Object(obj)
        })
        .collect();

    let links: Vec<Value> = graph
        .edges()
        .map(|edge| {
            let mut obj = properties_to_json(&edge.properties);
            obj.insert("source".to_string(), node_id_to_json(&edge.source));
            obj.insert("target".to_string(), node_id_to_json(&edge.target));
            obj.insert("key".to_string(), json!(edge.key));
            Value::Object(obj)
        })
        .collect();

    let result = json!({
        "directed": true,
        "multigraph": true,
        "graph": {},
        "nodes": nodes,
        "links": links,
    });

    let line = serde_json::to_string(&result)
        .map_err(|e| GraphError::serialization("Failed to serialize node-link JSON", Some(e)))?;
    Ok(vec![line])
}

fn node_id_to_json(id: &NodeId) -> Value {
    match id {
        NodeId::Int(i) => json!(i),
        NodeId::Name(s) => json!(s),
    }
}

/// Convert PropertyMap to an ordered JSON object
fn properties_to_json(props: &PropertyMap) -> Map<String, Value> {
    let mut obj = Map::new();

    for (key, value) in props.iter() {
        let json_value = match value {
            PropertyValue::String(s) => json!(s),
            PropertyValue::Int(i) => json!(i),
            PropertyValue::Float(f) => json!(f),
            PropertyValue::Bool(b) => json!(b),
        };
        obj.insert(key.clone(), json_value);
    }

    obj
}
