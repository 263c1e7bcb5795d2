//! Unit tests for format dispatch and collaborator injection.

use knows::{
    CodecFormat, Exporter, Format, GraphCodec, GraphDrawer, GraphError, PropertyGraph,
    PropertyMap, SvgDrawer,
};
use std::sync::{Arc, Mutex};

/// Codec fake recording the formats it was asked for.
#[derive(Default, Clone)]
struct RecordingCodec {
    calls: Arc<Mutex<Vec<CodecFormat>>>,
}

impl GraphCodec for RecordingCodec {
    fn generate(&self, _graph: &PropertyGraph, format: CodecFormat) -> knows::Result<Vec<String>> {
        self.calls.lock().unwrap().push(format);
        Ok(vec![format!("<{format}>"), "body".to_string()])
    }
}

/// Drawer fake returning fixed bytes.
struct FixedDrawer(Vec<u8>);

impl GraphDrawer for FixedDrawer {
    fn draw_to_buffer(&self, _graph: &PropertyGraph) -> knows::Result<Vec<u8>> {
        Ok(self.0.clone())
    }
}

fn create_test_graph() -> PropertyGraph {
    let mut graph = PropertyGraph::new();
    graph.add_node(1, PropertyMap::new().with("label", "Person").with("name", "Alice"));
    graph.add_node(2, PropertyMap::new());
    graph.add_edge(1, 2, PropertyMap::new().with("label", "knows"));
    graph
}

#[test]
fn test_standard_formats_go_through_codec() {
    let graph = create_test_graph();
    let codec = RecordingCodec::default();
    let exporter = Exporter::with_collaborators(
        &graph,
        Box::new(codec.clone()),
        Box::new(FixedDrawer(b"<svg/>".to_vec())),
    );

    for name in [
        "graphml",
        "gexf",
        "gml",
        "adjacency_list",
        "multiline_adjacency_list",
        "edge_list",
        "json",
    ] {
        assert_eq!(exporter.to_format(name).unwrap(), format!("<{name}>\nbody"));
    }

    let calls = codec.calls.lock().unwrap();
    assert_eq!(calls.len(), 7);
    assert_eq!(calls[0], CodecFormat::GraphMl);
    assert_eq!(calls[6], CodecFormat::Json);
}

#[test]
fn test_yarspg_does_not_touch_collaborators() {
    let graph = create_test_graph();
    let codec = RecordingCodec::default();
    let exporter =
        Exporter::with_collaborators(&graph, Box::new(codec.clone()), Box::new(FixedDrawer(vec![])));

    exporter.to_format("yarspg").unwrap();
    exporter.to_format("yarspg-rdf").unwrap();
    assert!(codec.calls.lock().unwrap().is_empty());
}

#[test]
fn test_svg_is_decoded_from_drawer() {
    let graph = create_test_graph();
    let exporter = Exporter::with_collaborators(
        &graph,
        Box::new(RecordingCodec::default()),
        Box::new(FixedDrawer("<svg>ż</svg>".as_bytes().to_vec())),
    );
    assert_eq!(exporter.to_format("svg").unwrap(), "<svg>ż</svg>");
}

#[test]
fn test_invalid_utf8_from_drawer() {
    let graph = create_test_graph();
    let exporter = Exporter::with_collaborators(
        &graph,
        Box::new(RecordingCodec::default()),
        Box::new(FixedDrawer(vec![0x3c, 0xff, 0xfe])),
    );
    let err = exporter.to_format("svg").unwrap_err();
    assert!(matches!(err, GraphError::Drawing { .. }));
}

#[test]
fn test_unknown_format_fails() {
    let graph = create_test_graph();
    let codec = RecordingCodec::default();
    let exporter =
        Exporter::with_collaborators(&graph, Box::new(codec.clone()), Box::new(SvgDrawer::default()));

    let err = exporter.to_format("unknown").unwrap_err();
    assert!(matches!(err, GraphError::UnknownFormat { ref name } if name == "unknown"));
    assert!(codec.calls.lock().unwrap().is_empty());
}

#[test]
fn test_every_format_renders_with_builtins() {
    let graph = create_test_graph();
    let exporter = Exporter::new(&graph);
    for format in Format::ALL {
        let output = exporter.export(format).unwrap();
        assert!(!output.is_empty(), "{format} produced no output");
        assert_eq!(exporter.to_format(format.as_str()).unwrap(), output);
    }
}

#[test]
fn test_builtin_svg() {
    let graph = create_test_graph();
    let svg = Exporter::new(&graph).to_format("svg").unwrap();
    assert!(svg.contains("<svg xmlns=\"http://www.w3.org/2000/svg\""));
    assert_eq!(svg.matches("<circle").count(), 2);
}

#[test]
fn test_export_leaves_graph_untouched() {
    let graph = create_test_graph();
    let before: Vec<_> = graph.nodes().cloned().collect();
    for format in Format::ALL {
        Exporter::new(&graph).export(format).unwrap();
    }
    let after: Vec<_> = graph.nodes().cloned().collect();
    assert_eq!(before, after);
}
