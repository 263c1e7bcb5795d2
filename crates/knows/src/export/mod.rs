//! Export module turning a property graph into textual documents.
//!
//! Supports:
//! - **YARS-PG**: compact property graph terms, plain and RDF variants
//! - **GraphML / GEXF / GML**: interchange with yEd, Gephi and friends
//! - **Adjacency and edge lists**: line-oriented topology dumps
//! - **JSON**: node-link documents for D3.js
//! - **SVG**: a drawing of the graph
//!
//! [`Exporter::to_format`] is the entry point; standard formats go through an
//! injected [`GraphCodec`], SVG through an injected [`GraphDrawer`].

pub mod adjacency;
pub mod codec;
pub mod gexf;
pub mod gml;
pub mod graphml;
pub mod json;
pub mod property_list;
pub mod svg;
pub mod yarspg;

pub use codec::{CodecFormat, GraphCodec, StandardCodec};
pub use property_list::{format_property_list, write_property_list};
pub use svg::{GraphDrawer, SvgDrawer, SvgOptions};
pub use yarspg::{AttributeSource, Layout, YarsPgSerializer};

use crate::error::{GraphError, Result};
use crate::graph::{PropertyGraph, PropertyValue};
use log::{debug, info};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Every output format the exporter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// GraphML XML
    GraphMl,
    /// YARS-PG terms with the graph's attributes
    YarsPg,
    /// YARS-PG terms with fixed RDF IRIs, in sections
    YarsPgRdf,
    /// GEXF XML
    Gexf,
    /// Graph Modelling Language
    Gml,
    /// SVG drawing
    Svg,
    /// Single-line adjacency list
    AdjacencyList,
    /// Multi-line adjacency list
    MultilineAdjacencyList,
    /// Edge list with attributes
    EdgeList,
    /// Node-link JSON
    Json,
}

impl Format {
    /// All formats, in the order they are documented.
    pub const ALL: [Format; 10] = [
        Format::GraphMl,
        Format::YarsPg,
        Format::YarsPgRdf,
        Format::Gexf,
        Format::Gml,
        Format::Svg,
        Format::AdjacencyList,
        Format::MultilineAdjacencyList,
        Format::EdgeList,
        Format::Json,
    ];

    /// Name accepted by [`Exporter::to_format`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::GraphMl => "graphml",
            Format::YarsPg => "yarspg",
            Format::YarsPgRdf => "yarspg-rdf",
            Format::Gexf => "gexf",
            Format::Gml => "gml",
            Format::Svg => "svg",
            Format::AdjacencyList => "adjacency_list",
            Format::MultilineAdjacencyList => "multiline_adjacency_list",
            Format::EdgeList => "edge_list",
            Format::Json => "json",
        }
    }

    /// The codec format backing this output, if it is a standard format.
    pub fn codec_format(&self) -> Option<CodecFormat> {
        match self {
            Format::GraphMl => Some(CodecFormat::GraphMl),
            Format::Gexf => Some(CodecFormat::Gexf),
            Format::Gml => Some(CodecFormat::Gml),
            Format::AdjacencyList => Some(CodecFormat::AdjacencyList),
            Format::MultilineAdjacencyList => Some(CodecFormat::MultilineAdjacencyList),
            Format::EdgeList => Some(CodecFormat::EdgeList),
            Format::Json => Some(CodecFormat::Json),
            Format::Svg | Format::YarsPg | Format::YarsPgRdf => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Format::ALL
            .into_iter()
            .find(|format| format.as_str() == s)
            .ok_or_else(|| GraphError::UnknownFormat {
                name: s.to_string(),
            })
    }
}

/// Renders one graph into any [`Format`].
///
/// The graph is only read; every call builds its output from scratch.
pub struct Exporter<'g> {
    graph: &'g PropertyGraph,
    codec: Box<dyn GraphCodec>,
    drawer: Box<dyn GraphDrawer>,
}

impl<'g> Exporter<'g> {
    /// Create an exporter using the built-in codec and SVG drawer.
    pub fn new(graph: &'g PropertyGraph) -> Self {
        Self::with_collaborators(graph, Box::new(StandardCodec), Box::new(SvgDrawer::default()))
    }

    /// Create an exporter with custom standard-format and drawing collaborators.
    pub fn with_collaborators(
        graph: &'g PropertyGraph,
        codec: Box<dyn GraphCodec>,
        drawer: Box<dyn GraphDrawer>,
    ) -> Self {
        Self {
            graph,
            codec,
            drawer,
        }
    }

    /// Render the graph in the format named `name`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownFormat`] for unsupported names, otherwise
    /// whatever the selected renderer reports.
    pub fn to_format(&self, name: &str) -> Result<String> {
        let format = name.parse::<Format>()?;
        self.export(format)
    }

    /// Render the graph in `format`.
    pub fn export(&self, format: Format) -> Result<String> {
        debug!(
            "Exporting graph as {format}: {} nodes, {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );

        match format {
            Format::YarsPg => YarsPgSerializer::STANDARD.render(self.graph),
            Format::YarsPgRdf => YarsPgSerializer::RDF.render(self.graph),
            Format::Svg => self.to_svg(),
            Format::GraphMl => self.generate(CodecFormat::GraphMl),
            Format::Gexf => self.generate(CodecFormat::Gexf),
            Format::Gml => self.generate(CodecFormat::Gml),
            Format::AdjacencyList => self.generate(CodecFormat::AdjacencyList),
            Format::MultilineAdjacencyList => self.generate(CodecFormat::MultilineAdjacencyList),
            Format::EdgeList => self.generate(CodecFormat::EdgeList),
            Format::Json => self.generate(CodecFormat::Json),
        }
    }

    /// Render the graph in the format named `name` and write it to `path`.
    ///
    /// Nothing is written if rendering fails.
    ///
    /// # Errors
    ///
    /// Returns the rendering error, or [`GraphError::Io`] if the file cannot
    /// be written.
    pub fn write_to_file(&self, name: &str, path: &Path) -> Result<()> {
        let document = self.to_format(name)?;
        std::fs::write(path, document.as_bytes()).map_err(|e| {
            GraphError::io(format!("Failed to write export file: {}", path.display()), Some(e))
        })?;
        info!("Wrote {name} export to {}", path.display());
        Ok(())
    }

    fn generate(&self, format: CodecFormat) -> Result<String> {
        Ok(self.codec.generate(self.graph, format)?.join("\n"))
    }

    fn to_svg(&self) -> Result<String> {
        let buffer = self.drawer.draw_to_buffer(self.graph)?;
        String::from_utf8(buffer)
            .map_err(|e| GraphError::drawing("SVG output is not valid UTF-8", Some(e)))
    }
}

impl PropertyGraph {
    /// Render this graph in the format named `name` with the built-in collaborators.
    ///
    /// # Example
    ///
    /// ```
    /// use knows::{PropertyGraph, PropertyMap};
    ///
    /// let mut graph = PropertyGraph::new();
    /// graph.add_node(1, PropertyMap::new().with("label", "Person"));
    /// assert_eq!(graph.to_format("yarspg").unwrap(), r#"(1 {"Person"}[])"#);
    /// ```
    pub fn to_format(&self, name: &str) -> Result<String> {
        Exporter::new(self).to_format(name)
    }
}

/// Escape text for XML content and attribute values.
pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// XML Schema lexical form of a typed value (`true`, `NaN`, `-INF`).
pub(crate) fn xml_value(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Bool(b) => b.to_string(),
        PropertyValue::Float(x) if x.is_nan() => "NaN".to_string(),
        PropertyValue::Float(x) if x.is_infinite() => {
            if *x > 0.0 { "INF" } else { "-INF" }.to_string()
        }
        other => other.to_string(),
    }
}
