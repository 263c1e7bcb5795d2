//! Export example demonstrating every output format.
//!
//! Builds a small social graph and prints it as YARS-PG, YARS-PG RDF and the
//! standard interchange formats, then writes an SVG drawing to disk.

use knows::{Exporter, Format, PropertyGraph, PropertyMap};
use std::path::Path;

fn main() -> knows::Result<()> {
    let mut graph = PropertyGraph::new();

    println!("=== Building Property Graph ===\n");

    graph.add_node(1, PropertyMap::new().with("label", "Person").with("name", "Alice").with("age", 31));
    graph.add_node(2, PropertyMap::new().with("label", "Person").with("name", "Bob"));
    graph.add_node(3, PropertyMap::new().with("label", "Person").with("name", "Carol"));
    println!("✓ Added 3 people");

    graph.add_edge(1, 2, PropertyMap::new().with("label", "knows").with("since", 2019));
    graph.add_edge(2, 3, PropertyMap::new().with("label", "knows"));
    graph.add_edge(3, 1, PropertyMap::new().with("label", "likes").with("weight", 0.8));
    println!("✓ Added 3 relationships\n");

    let exporter = Exporter::new(&graph);

    for format in Format::ALL {
        if format == Format::Svg {
            continue;
        }
        println!("=== {format} ===");
        println!("{}\n", exporter.export(format)?);
    }

    let svg_path = Path::new("./social_graph.svg");
    exporter.write_to_file("svg", svg_path)?;
    println!("✓ SVG drawing written to {}", svg_path.display());

    Ok(())
}
