//! YARS-PG term serialization.
//!
//! Nodes render as `(id {"label"}[props])` and edges as
//! `(src)-({"label"}[props])->(dst)`. The RDF variant ignores the graph's own
//! attributes and emits a fixed IRI pair per element, under `# Nodes` and
//! `# Edges` section headers.

use super::property_list::write_property_list;
use crate::error::{GraphError, Result};
use crate::graph::{Edge, Node, PropertyGraph, PropertyMap, LABEL_KEY};
use log::{debug, trace};
use std::fmt::Write;

/// Label carried by every element in RDF mode.
pub const RDF_LABEL: &str = "IRI";

/// Property key holding the IRI in RDF mode.
pub const RDF_VALUE_KEY: &str = "@value";

/// IRI attached to every node in RDF mode.
pub const PERSON_IRI: &str = "https://w3id.org/MON/person.owl#Person";

/// IRI attached to every edge in RDF mode.
pub const FRIEND_OF_IRI: &str = "https://w3id.org/MON/person.owl#friendOf";

const NODES_HEADER: &str = "# Nodes\n";
const EDGES_HEADER: &str = "\n# Edges\n";

/// Where element labels and properties come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeSource {
    /// The element's own attribute map
    Graph,
    /// The fixed RDF IRI pair, regardless of graph content
    RdfOverride,
}

/// How node and edge terms are assembled into a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// All terms newline-joined, nodes first
    Flat,
    /// `# Nodes` and `# Edges` sections
    Sectioned,
}

/// Renders a [`PropertyGraph`] as a YARS-PG document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YarsPgSerializer {
    /// Attribute selection rule
    pub source: AttributeSource,
    /// Document layout
    pub layout: Layout,
}

impl YarsPgSerializer {
    /// Plain YARS-PG: real attributes, flat document.
    pub const STANDARD: Self = Self {
        source: AttributeSource::Graph,
        layout: Layout::Flat,
    };

    /// YARS-PG RDF: fixed IRI attributes, sectioned document.
    pub const RDF: Self = Self {
        source: AttributeSource::RdfOverride,
        layout: Layout::Sectioned,
    };

    /// Create a serializer from its two switches.
    pub fn new(source: AttributeSource, layout: Layout) -> Self {
        Self { source, layout }
    }

    /// Render the whole graph into a new string.
    pub fn render(&self, graph: &PropertyGraph) -> Result<String> {
        let mut out = String::new();
        self.render_to(graph, &mut out)?;
        Ok(out)
    }

    /// Render the whole graph into `out`.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Formatting`] if the sink rejects a write.
    pub fn render_to<W: Write>(&self, graph: &PropertyGraph, out: &mut W) -> Result<()> {
        debug!(
            "Rendering YARS-PG ({:?}, {:?}): {} nodes, {} edges",
            self.source,
            self.layout,
            graph.node_count(),
            graph.edge_count()
        );

        let (node_override, edge_override) = match self.source {
            AttributeSource::Graph => (None, None),
            AttributeSource::RdfOverride => (
                Some(rdf_attributes(PERSON_IRI)),
                Some(rdf_attributes(FRIEND_OF_IRI)),
            ),
        };

        let sectioned = self.layout == Layout::Sectioned;
        if sectioned {
            write_literal(out, NODES_HEADER)?;
        }

        let mut first = true;
        for node in graph.nodes() {
            if !first {
                write_literal(out, "\n")?;
            }
            first = false;
            let attributes = node_override.as_ref().unwrap_or(&node.properties);
            write_node_term(out, node, attributes)?;
            trace!("Rendered node {}", node.id);
        }

        if sectioned {
            write_literal(out, EDGES_HEADER)?;
            first = true;
        }

        for edge in graph.edges() {
            if !first {
                write_literal(out, "\n")?;
            }
            first = false;
            let attributes = edge_override.as_ref().unwrap_or(&edge.properties);
            write_edge_term(out, edge, attributes)?;
            trace!("Rendered edge {} -> {}", edge.source, edge.target);
        }

        Ok(())
    }
}

impl Default for YarsPgSerializer {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The fixed attribute pair used in RDF mode.
pub fn rdf_attributes(iri: &str) -> PropertyMap {
    PropertyMap::new()
        .with(LABEL_KEY, RDF_LABEL)
        .with(RDF_VALUE_KEY, iri)
}

/// Format a single node term using `attributes` for its label and properties.
pub fn node_term(node: &Node, attributes: &PropertyMap) -> Result<String> {
    let mut out = String::new();
    write_node_term(&mut out, node, attributes)?;
    Ok(out)
}

/// Format a single edge term using `attributes` for its label and properties.
pub fn edge_term(edge: &Edge, attributes: &PropertyMap) -> Result<String> {
    let mut out = String::new();
    write_edge_term(&mut out, edge, attributes)?;
    Ok(out)
}

fn write_node_term<W: Write>(out: &mut W, node: &Node, attributes: &PropertyMap) -> Result<()> {
    write!(out, "({} {{\"{}\"}}[", node.id, attributes.label())
        .map_err(|_| GraphError::formatting(LABEL_KEY))?;
    write_property_list(out, attributes, LABEL_KEY)?;
    write_literal(out, "])")
}

fn write_edge_term<W: Write>(out: &mut W, edge: &Edge, attributes: &PropertyMap) -> Result<()> {
    write!(out, "({})-({{\"{}\"}}[", edge.source, attributes.label())
        .map_err(|_| GraphError::formatting(LABEL_KEY))?;
    write_property_list(out, attributes, LABEL_KEY)?;
    write!(out, "])->({})", edge.target).map_err(|_| GraphError::formatting(LABEL_KEY))
}

fn write_literal<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_str(text)
        .map_err(|_| GraphError::formatting(LABEL_KEY))
}
