//! Standard interchange formats behind an injectable codec interface.
//!
//! The exporter asks a [`GraphCodec`] for the lines of a document and joins
//! them with newlines. [`StandardCodec`] is the built-in implementation.

use super::{adjacency, gexf, gml, graphml, json};
use crate::error::Result;
use crate::graph::PropertyGraph;
use log::trace;
use std::fmt;

/// Formats produced by a [`GraphCodec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecFormat {
    /// GraphML XML
    GraphMl,
    /// GEXF 1.2 XML
    Gexf,
    /// Graph Modelling Language
    Gml,
    /// One line per node listing its successors
    AdjacencyList,
    /// Node header line followed by one line per out-edge
    MultilineAdjacencyList,
    /// One line per edge with its attributes
    EdgeList,
    /// Node-link JSON
    Json,
}

impl CodecFormat {
    /// Format name as accepted by the exporter.
    pub fn as_str(&self) -> &'static str {
        match self {
            CodecFormat::GraphMl => "graphml",
            CodecFormat::Gexf => "gexf",
            CodecFormat::Gml => "gml",
            CodecFormat::AdjacencyList => "adjacency_list",
            CodecFormat::MultilineAdjacencyList => "multiline_adjacency_list",
            CodecFormat::EdgeList => "edge_list",
            CodecFormat::Json => "json",
        }
    }
}

impl fmt::Display for CodecFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generator for standard graph interchange formats.
///
/// Implementations return the document as a sequence of lines without
/// trailing newlines.
pub trait GraphCodec: Send + Sync {
    /// Generate `graph` in `format`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Codec`](crate::GraphError::Codec) when the graph
    /// cannot be expressed in the format.
    fn generate(&self, graph: &PropertyGraph, format: CodecFormat) -> Result<Vec<String>>;
}

/// Built-in generators for every [`CodecFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCodec;

impl StandardCodec {
    /// Create the built-in codec.
    pub fn new() -> Self {
        Self
    }
}

impl GraphCodec for StandardCodec {
    fn generate(&self, graph: &PropertyGraph, format: CodecFormat) -> Result<Vec<String>> {
        let lines = match format {
            CodecFormat::GraphMl => graphml::generate_graphml(graph),
            CodecFormat::Gexf => gexf::generate_gexf(graph),
            CodecFormat::Gml => gml::generate_gml(graph)?,
            CodecFormat::AdjacencyList => adjacency::generate_adjacency_list(graph)?,
            CodecFormat::MultilineAdjacencyList => {
                adjacency::generate_multiline_adjacency_list(graph)?
            }
            CodecFormat::EdgeList => adjacency::generate_edge_list(graph)?,
            CodecFormat::Json => json::generate_node_link(graph)?,
        };
        trace!("Generated {} lines of {format}", lines.len());
        Ok(lines)
    }
}
