//! # knows
//!
//! Export in-memory property graphs into textual representations.
//!
//! ## Core Principles
//!
//! - **Read Only**: Exporters never mutate the graph
//! - **Deterministic**: The same graph always yields byte-identical output
//! - **Injectable**: Standard codecs and drawing sit behind traits
//! - **Zero Magic**: Unknown formats fail, nothing falls back silently
//!
//! ## Architecture
//!
//! ```text
//! Exporter::to_format(name)
//!     ↓
//! Format dispatch (closed enum)
//!     ↓
//! YARS-PG serializer | GraphCodec | GraphDrawer
//!     ↓
//! PropertyGraph (nodes, edges, ordered attributes)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use knows::{Exporter, PropertyGraph, PropertyMap};
//!
//! let mut graph = PropertyGraph::new();
//! graph.add_node(1, PropertyMap::new().with("label", "Person").with("name", "Alice"));
//! graph.add_node(2, PropertyMap::new());
//! graph.add_edge(1, 2, PropertyMap::new().with("label", "knows"));
//!
//! let yarspg = Exporter::new(&graph).to_format("yarspg").unwrap();
//! assert_eq!(
//!     yarspg,
//!     "(1 {\"Person\"}[\"name\": \"Alice\"])\n(2 {\"label\"}[])\n(1)-({\"knows\"}[])->(2)"
//! );
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;

// Re-export main types
pub use error::{GraphError, Result};
pub use export::{
    CodecFormat, Exporter, Format, GraphCodec, GraphDrawer, StandardCodec, SvgDrawer, SvgOptions,
    YarsPgSerializer,
};
pub use graph::{Edge, Node, NodeId, PropertyGraph, PropertyMap, PropertyValue};
