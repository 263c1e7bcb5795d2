//! Unit tests for YARS-PG and YARS-PG RDF serialization.
//!
//! Tests cover:
//! - Term grammar for nodes and edges
//! - Label defaulting and exclusion from property lists
//! - Flat versus sectioned document layout
//! - RDF attribute override

use knows::export::yarspg::{self, AttributeSource, Layout, FRIEND_OF_IRI, PERSON_IRI};
use knows::{Exporter, PropertyGraph, PropertyMap, YarsPgSerializer};

// Helper: the two-person graph used throughout
fn create_test_graph() -> PropertyGraph {
    let mut graph = PropertyGraph::new();
    graph.add_node(1, PropertyMap::new().with("label", "Person").with("name", "Alice"));
    graph.add_node(2, PropertyMap::new());
    graph.add_edge(1, 2, PropertyMap::new().with("label", "knows"));
    graph
}

#[test]
fn test_yarspg_scenario() {
    let graph = create_test_graph();
    let output = Exporter::new(&graph).to_format("yarspg").unwrap();
    assert_eq!(
        output,
        "(1 {\"Person\"}[\"name\": \"Alice\"])\n(2 {\"label\"}[])\n(1)-({\"knows\"}[])->(2)"
    );
}

#[test]
fn test_yarspg_rdf_scenario() {
    let graph = create_test_graph();
    let output = Exporter::new(&graph).to_format("yarspg-rdf").unwrap();
    assert_eq!(
        output,
        "# Nodes\n(1 {\"IRI\"}[\"@value\": \"https://w3id.org/MON/person.owl#Person\"])\n(2 {\"IRI\"}[\"@value\": \"https://w3id.org/MON/person.owl#Person\"])\n# Edges\n(1)-({\"IRI\"}[\"@value\": \"https://w3id.org/MON/person.owl#friendOf\"])->(2)"
    );
}

#[test]
fn test_line_count_and_order() {
    let mut graph = PropertyGraph::new();
    for i in 0..5 {
        graph.add_node(i, PropertyMap::new().with("label", "N").with("i", i));
    }
    for i in 0..4 {
        graph.add_edge(i, i + 1, PropertyMap::new().with("w", i));
    }
    graph.add_edge(0, 1, PropertyMap::new());

    let output = YarsPgSerializer::STANDARD.render(&graph).unwrap();
    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(lines.len(), graph.node_count() + graph.edge_count());

    let first_edge = lines.iter().position(|l| l.contains(")-(")).unwrap();
    assert_eq!(first_edge, graph.node_count());
    assert!(lines[first_edge..].iter().all(|l| l.contains(")->(")));
}

#[test]
fn test_label_never_in_property_list() {
    let mut graph = PropertyGraph::new();
    graph.add_node("x", PropertyMap::new().with("a", 1).with("label", "L").with("b", 2));
    graph.add_edge("x", "x", PropertyMap::new().with("label", "self").with("c", 3));

    let output = YarsPgSerializer::STANDARD.render(&graph).unwrap();
    assert_eq!(
        output,
        "(x {\"L\"}[\"a\": \"1\", \"b\": \"2\"])\n(x)-({\"self\"}[\"c\": \"3\"])->(x)"
    );
}

#[test]
fn test_non_string_label() {
    let mut graph = PropertyGraph::new();
    graph.add_node(1, PropertyMap::new().with("label", 42));
    assert_eq!(YarsPgSerializer::STANDARD.render(&graph).unwrap(), "(1 {\"42\"}[])");
}

#[test]
fn test_boolean_and_float_values() {
    let mut graph = PropertyGraph::new();
    graph.add_node(
        1,
        PropertyMap::new()
            .with("active", true)
            .with("big", 1e20)
            .with("small", 1e-7)
            .with("nan", f64::NAN)
            .with("ratio", 3.0),
    );
    assert_eq!(
        YarsPgSerializer::STANDARD.render(&graph).unwrap(),
        "(1 {\"label\"}[\"active\": \"True\", \"big\": \"1e+20\", \"small\": \"1e-07\", \"nan\": \"nan\", \"ratio\": \"3.0\"])"
    );
}

#[test]
fn test_rdf_ignores_graph_attributes() {
    let mut rich = PropertyGraph::new();
    rich.add_node("a", PropertyMap::new().with("label", "City").with("pop", 100));
    rich.add_node("b", PropertyMap::new().with("name", "B"));
    rich.add_edge("a", "b", PropertyMap::new().with("label", "road").with("km", 3.5));

    let mut bare = PropertyGraph::new();
    bare.add_node("a", PropertyMap::new());
    bare.add_node("b", PropertyMap::new());
    bare.add_edge("a", "b", PropertyMap::new());

    assert_eq!(
        YarsPgSerializer::RDF.render(&rich).unwrap(),
        YarsPgSerializer::RDF.render(&bare).unwrap()
    );
}

#[test]
fn test_rdf_section_headers() {
    let graph = create_test_graph();
    let output = YarsPgSerializer::RDF.render(&graph).unwrap();
    let headers: Vec<&str> = output.lines().filter(|l| l.starts_with('#')).collect();
    assert_eq!(headers, vec!["# Nodes", "# Edges"]);
}

#[test]
fn test_empty_graph_outputs() {
    let graph = PropertyGraph::new();
    let exporter = Exporter::new(&graph);
    assert_eq!(exporter.to_format("yarspg").unwrap(), "");
    assert_eq!(exporter.to_format("yarspg-rdf").unwrap(), "# Nodes\n\n# Edges\n");
}

#[test]
fn test_rendering_is_idempotent() {
    let graph = create_test_graph();
    for serializer in [YarsPgSerializer::STANDARD, YarsPgSerializer::RDF] {
        assert_eq!(serializer.render(&graph).unwrap(), serializer.render(&graph).unwrap());
    }
}

#[test]
fn test_rdf_attribute_pair() {
    let node_attrs = yarspg::rdf_attributes(PERSON_IRI);
    assert_eq!(node_attrs.label(), "IRI");
    assert_eq!(node_attrs.get_string("@value"), Some(PERSON_IRI));
    assert_eq!(
        yarspg::rdf_attributes(FRIEND_OF_IRI).get_string("@value"),
        Some("https://w3id.org/MON/person.owl#friendOf")
    );
}

#[test]
fn test_sectioned_graph_attributes() {
    let serializer = YarsPgSerializer::new(AttributeSource::Graph, Layout::Sectioned);
    let output = serializer.render(&create_test_graph()).unwrap();
    assert!(output.starts_with("# Nodes\n(1 {\"Person\"}"));
    assert!(output.contains("\n# Edges\n(1)-({\"knows\"}[])->(2)"));
}

#[test]
fn test_render_to_existing_buffer() {
    let graph = create_test_graph();
    let mut out = String::from(">>");
    YarsPgSerializer::STANDARD.render_to(&graph, &mut out).unwrap();
    assert!(out.starts_with(">>(1 {\"Person\"}"));
}
