//! In-memory directed property multigraph.

use super::property::PropertyMap;
use super::types::{Edge, Node, NodeId};
use crate::error::{GraphError, Result};
use indexmap::IndexMap;
use log::{debug, trace};
use std::collections::HashMap;

/// A directed multigraph whose nodes and edges carry ordered attribute maps.
///
/// Nodes iterate in insertion order, edges in insertion order. Exporters only
/// read from the graph.
#[derive(Debug, Clone, Default)]
pub struct PropertyGraph {
    nodes: IndexMap<NodeId, Node>,
    edges: Vec<Edge>,
    // Next multigraph key per ordered (source, target) pair
    pair_keys: HashMap<(NodeId, NodeId), usize>,
}

impl PropertyGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or merge attributes into an existing one.
    ///
    /// Merging overwrites values of existing keys and appends new keys; the
    /// node keeps its position in node order.
    pub fn add_node(&mut self, id: impl Into<NodeId>, properties: PropertyMap) {
        let id = id.into();
        match self.nodes.get_mut(&id) {
            Some(node) => {
                trace!("Merging {} attributes into node {id}", properties.len());
                for (key, value) in properties.iter() {
                    node.properties.insert(key.clone(), value.clone());
                }
            }
            None => {
                debug!("Adding node: id={id}");
                self.nodes.insert(id.clone(), Node::new(id, properties));
            }
        }
    }

    /// Add a directed edge and return its multigraph key.
    ///
    /// Missing endpoints are added as nodes with empty attributes.
    pub fn add_edge(
        &mut self,
        source: impl Into<NodeId>,
        target: impl Into<NodeId>,
        properties: PropertyMap,
    ) -> usize {
        let source = source.into();
        let target = target.into();

        for endpoint in [&source, &target] {
            if !self.nodes.contains_key(endpoint) {
                self.add_node(endpoint.clone(), PropertyMap::new());
            }
        }

        let next = self
            .pair_keys
            .entry((source.clone(), target.clone()))
            .or_insert(0);
        let key = *next;
        *next += 1;

        debug!("Adding edge: {source} -> {target} (key={key})");
        self.edges.push(Edge::new(key, source, target, properties));
        key
    }

    /// Get a node by ID.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn get_node(&self, id: &NodeId) -> Result<&Node> {
        self.nodes.get(id).ok_or_else(|| GraphError::NodeNotFound {
            node_id: id.to_string(),
        })
    }

    /// Check whether a node exists.
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges, counting parallel edges separately.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// True when the graph has neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Iterate over nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Iterate over edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Successors of a node grouped by target.
    ///
    /// Targets appear in the order of their first edge from `id`; each group
    /// holds the parallel edges to that target in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn adjacency(&self, id: &NodeId) -> Result<Vec<(&NodeId, Vec<&Edge>)>> {
        let node = self.get_node(id)?;
        let mut groups: IndexMap<&NodeId, Vec<&Edge>> = IndexMap::new();
        for edge in self.edges.iter().filter(|e| e.source == node.id) {
            groups.entry(&edge.target).or_default().push(edge);
        }
        Ok(groups.into_iter().collect())
    }
}
