//! SVG drawing of a property graph.
//!
//! [`GraphDrawer`] is the injectable drawing interface; [`SvgDrawer`] places
//! nodes on a circle and connects them with straight arrows.

use super::escape_xml;
use crate::error::Result;
use crate::graph::{NodeId, PropertyGraph, LABEL_KEY};
use log::debug;
use std::collections::HashMap;
use std::f64::consts::PI;

/// Renders a graph into an image buffer.
pub trait GraphDrawer: Send + Sync {
    /// Draw `graph` and return the encoded image bytes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Drawing`](crate::GraphError::Drawing) if the
    /// drawing cannot be produced.
    fn draw_to_buffer(&self, graph: &PropertyGraph) -> Result<Vec<u8>>;
}

/// Options for styling SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Empty border around the layout circle
    pub margin: f64,
    /// Node circle radius
    pub node_radius: f64,
    /// Caption font size
    pub font_size: u32,
    /// Node fill colour (any SVG colour)
    pub node_color: String,
    /// Edge stroke colour
    pub edge_color: String,
    /// Draw node captions
    pub show_labels: bool,
    /// Draw edge captions at the edge midpoint
    pub show_edge_labels: bool,
}

impl Default for SvgOptions {
    fn default() -> Self {
        SvgOptions {
            width: 800,
            height: 600,
            margin: 40.0,
            node_radius: 18.0,
            font_size: 12,
            node_color: "#1f78b4".to_string(),
            edge_color: "#555555".to_string(),
            show_labels: true,
            show_edge_labels: false,
        }
    }
}

/// Circular-layout SVG renderer.
#[derive(Debug, Clone, Default)]
pub struct SvgDrawer {
    options: SvgOptions,
}

impl SvgDrawer {
    /// Create a drawer with custom styling.
    pub fn new(options: SvgOptions) -> Self {
        Self { options }
    }

    /// Styling in use.
    pub fn options(&self) -> &SvgOptions {
        &self.options
    }

    /// Render `graph` as an SVG document.
    pub fn render(&self, graph: &PropertyGraph) -> String {
        let opts = &self.options;
        let positions = self.layout(graph);
        debug!("Drawing SVG: {} nodes, {} edges", graph.node_count(), graph.edge_count());

        let mut output = String::new();
        output.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        output.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = opts.width,
            h = opts.height
        ));
        output.push_str("  <defs>\n");
        output.push_str(
            "    <marker id=\"arrow\" viewBox=\"0 0 10 10\" refX=\"10\" refY=\"5\" \
             markerWidth=\"6\" markerHeight=\"6\" orient=\"auto-start-reverse\">\n",
        );
        output.push_str(&format!(
            "      <path d=\"M 0 0 L 10 5 L 0 10 z\" fill=\"{}\" />\n",
            escape_xml(&opts.edge_color)
        ));
        output.push_str("    </marker>\n");
        output.push_str("  </defs>\n");

        output.push_str("  <g class=\"edges\">\n");
        for edge in graph.edges() {
            let (Some(&from), Some(&to)) = (positions.get(&edge.source), positions.get(&edge.target))
            else {
                continue;
            };
            output.push_str(&self.edge_shape(from, to));

            if opts.show_edge_labels {
                if let Some(label) = edge.properties.get(LABEL_KEY) {
                    let (mx, my) = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
                    output.push_str(&format!(
                        "    <text x=\"{mx:.2}\" y=\"{my:.2}\" text-anchor=\"middle\" font-size=\"{}\">{}</text>\n",
                        opts.font_size,
                        escape_xml(&label.to_string())
                    ));
                }
            }
        }
        output.push_str("  </g>\n");

        output.push_str("  <g class=\"nodes\">\n");
        for node in graph.nodes() {
            let Some(&(x, y)) = positions.get(&node.id) else {
                continue;
            };
            output.push_str(&format!(
                "    <circle cx=\"{x:.2}\" cy=\"{y:.2}\" r=\"{:.2}\" fill=\"{}\" />\n",
                opts.node_radius,
                escape_xml(&opts.node_color)
            ));
            if opts.show_labels {
                let caption = node
                    .properties
                    .get(LABEL_KEY)
                    .map_or_else(|| node.id.to_string(), ToString::to_string);
                output.push_str(&format!(
                    "    <text x=\"{x:.2}\" y=\"{:.2}\" text-anchor=\"middle\" font-size=\"{}\">{}</text>\n",
                    y + opts.node_radius + f64::from(opts.font_size),
                    opts.font_size,
                    escape_xml(&caption)
                ));
            }
        }
        output.push_str("  </g>\n");
        output.push_str("</svg>\n");
        output
    }

    /// Node centres, evenly spaced on a circle starting at the top.
    fn layout<'g>(&self, graph: &'g PropertyGraph) -> HashMap<&'g NodeId, (f64, f64)> {
        let opts = &self.options;
        let (cx, cy) = (f64::from(opts.width) / 2.0, f64::from(opts.height) / 2.0);
        let radius = (cx.min(cy) - opts.margin - opts.node_radius).max(0.0);
        let count = graph.node_count();

        graph
            .nodes()
            .enumerate()
            .map(|(index, node)| {
                if count == 1 {
                    return (&node.id, (cx, cy));
                }
                let angle = 2.0 * PI * index as f64 / count as f64 - PI / 2.0;
                (&node.id, (cx + radius * angle.cos(), cy + radius * angle.sin()))
            })
            .collect()
    }

    fn edge_shape(&self, from: (f64, f64), to: (f64, f64)) -> String {
        let opts = &self.options;
        let stroke = escape_xml(&opts.edge_color);
        let r = opts.node_radius;
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let distance = dx.hypot(dy);

        if distance <= f64::EPSILON {
            // Self-loop above the node
            let (x, y) = from;
            return format!(
                "    <path d=\"M {:.2} {:.2} C {:.2} {:.2}, {:.2} {:.2}, {:.2} {:.2}\" \
                 fill=\"none\" stroke=\"{stroke}\" marker-end=\"url(#arrow)\" />\n",
                x - r / 2.0,
                y - r,
                x - 2.0 * r,
                y - 3.0 * r,
                x + 2.0 * r,
                y - 3.0 * r,
                x + r / 2.0,
                y - r
            );
        }

        let (ux, uy) = (dx / distance, dy / distance);
        format!(
            "    <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" \
             stroke=\"{stroke}\" marker-end=\"url(#arrow)\" />\n",
            from.0 + ux * r,
            from.1 + uy * r,
            to.0 - ux * r,
            to.1 - uy * r
        )
    }
}

impl GraphDrawer for SvgDrawer {
    fn draw_to_buffer(&self, graph: &PropertyGraph) -> Result<Vec<u8>> {
        Ok(self.render(graph).into_bytes())
    }
}
