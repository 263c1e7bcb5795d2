//! Core graph types: node identifiers, nodes and edges.

use super::property::{PropertyMap, PropertyValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node: an integer or a name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    /// Numeric identifier
    Int(i64),
    /// Textual identifier
    Name(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(i) => write!(f, "{i}"),
            NodeId::Name(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        NodeId::Int(value)
    }
}

impl From<i32> for NodeId {
    fn from(value: i32) -> Self {
        NodeId::Int(value as i64)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        NodeId::Name(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        NodeId::Name(value)
    }
}

/// A node of the property graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier, unique within the graph
    pub id: NodeId,
    /// Attributes, including the optional `label`
    pub properties: PropertyMap,
}

impl Node {
    /// Create a new node.
    pub fn new(id: impl Into<NodeId>, properties: PropertyMap) -> Self {
        Self {
            id: id.into(),
            properties,
        }
    }

    /// Add or update a property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key, value);
    }

    /// Get a property value.
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

/// A directed edge of the property graph.
///
/// Parallel edges between the same ordered pair are told apart by `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Multigraph key: number of earlier edges between the same ordered pair
    pub key: usize,
    /// Source node ID
    pub source: NodeId,
    /// Target node ID
    pub target: NodeId,
    /// Attributes, including the optional `label`
    pub properties: PropertyMap,
}

impl Edge {
    /// Create a new edge (the key is assigned by the graph).
    pub fn new(key: usize, source: NodeId, target: NodeId, properties: PropertyMap) -> Self {
        Self {
            key,
            source,
            target,
            properties,
        }
    }

    /// Add or update a property.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<PropertyValue>) {
        self.properties.insert(key, value);
    }

    /// Get a property value.
    pub fn get_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}
