//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: Graph nodes with ordered attributes
//! - [`Edge`]: Directed relationships between nodes
//! - [`PropertyGraph`]: The in-memory multigraph read by the exporters

mod property;
mod property_graph;
mod types;

pub use property::{PropertyMap, PropertyValue, DEFAULT_LABEL, LABEL_KEY};
pub use property_graph::PropertyGraph;
pub use types::{Edge, Node, NodeId};
