//! Integration test for writing exports to disk.

use knows::{Exporter, GraphError, PropertyGraph, PropertyMap};
use std::fs;
use tempfile::TempDir;

fn create_test_graph() -> PropertyGraph {
    let mut graph = PropertyGraph::new();
    graph.add_node(1, PropertyMap::new().with("label", "Person").with("name", "Alice"));
    graph.add_node(2, PropertyMap::new());
    graph.add_edge(1, 2, PropertyMap::new().with("label", "knows"));
    graph
}

#[test]
fn test_write_yarspg_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.yarspg");
    let graph = create_test_graph();

    Exporter::new(&graph).write_to_file("yarspg", &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, graph.to_format("yarspg").unwrap());
}

#[test]
fn test_write_every_format() {
    let temp_dir = TempDir::new().unwrap();
    let graph = create_test_graph();
    let exporter = Exporter::new(&graph);

    for format in knows::Format::ALL {
        let path = temp_dir.path().join(format!("graph.{format}"));
        exporter.write_to_file(format.as_str(), &path).unwrap();
        assert!(fs::metadata(&path).unwrap().len() > 0);
    }
}

#[test]
fn test_unknown_format_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("graph.out");
    let graph = create_test_graph();

    let err = Exporter::new(&graph).write_to_file("dot", &path).unwrap_err();
    assert!(matches!(err, GraphError::UnknownFormat { .. }));
    assert!(!path.exists());
}

#[test]
fn test_unwritable_path_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing").join("graph.json");
    let graph = create_test_graph();

    let err = Exporter::new(&graph).write_to_file("json", &path).unwrap_err();
    assert!(matches!(err, GraphError::Io { .. }));
}
