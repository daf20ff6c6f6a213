//! Instrumentation contract for the core entry points.

use spanwise_core::{
    Edge, EdgeListFormat, MinimumSpanningForestBuilder, MstAlgorithm, connecting_roads, kruskal,
    read_edge_list,
};
use spanwise_test_support::tracing::RecordingLayer;
use tracing::Level;

#[test]
fn build_span_records_algorithm_and_sizes() {
    let edges = [Edge::new(0, 1, 2_u32), Edge::new(1, 2, 3), Edge::new(0, 2, 4)];
    let (forest, layer) = RecordingLayer::capture(|| {
        MinimumSpanningForestBuilder::new()
            .with_algorithm(MstAlgorithm::Prim)
            .build(&edges, 3)
    });
    assert_eq!(forest.expect("valid graph").total_weight(), 5);

    let span = layer.find_span("core.mst.build").expect("build span closed");
    assert_eq!(span.field("algorithm"), Some("prim"));
    assert_eq!(span.field("edge_count"), Some("3"));
    assert_eq!(span.field("node_count"), Some("3"));

    let event = layer
        .find_event("spanning forest built")
        .expect("completion event");
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("selected"), Some("2"));
    assert_eq!(event.field("components"), Some("1"));
}

#[test]
fn build_failures_emit_an_error_event() {
    let edges = [Edge::new(0, 7, 1_u32)];
    let (result, layer) = RecordingLayer::capture(|| kruskal(&edges, 2));
    assert!(result.is_err());

    let events = layer.events();
    assert!(events.iter().any(|event| {
        event.level == Level::ERROR
            && event
                .field("error")
                .is_some_and(|value| value.contains("node 7 is out of range"))
    }));
    assert!(layer.find_event("spanning forest built").is_none());
}

#[test]
fn edge_list_span_records_parsed_sizes() {
    let text = "4 2\n0 1 1\n2 3 1\n";
    let (list, layer) =
        RecordingLayer::capture(|| read_edge_list::<u32, _>(text.as_bytes(), EdgeListFormat::new()));
    assert_eq!(list.expect("valid list").edges().len(), 2);

    let span = layer.find_span("core.edge_list.read").expect("read span closed");
    assert_eq!(span.field("node_count"), Some("4"));
    assert_eq!(span.field("edge_count"), Some("2"));
    assert_eq!(span.field("weighted"), Some("true"));
    assert_eq!(span.field("index_base"), Some("Zero"));
}

#[test]
fn connectivity_reports_component_summary() {
    let (roads, layer) = RecordingLayer::capture(|| connecting_roads(5, &[(0, 1), (3, 4)]));
    assert_eq!(roads.expect("in range"), vec![(0, 2), (2, 3)]);

    let span = layer
        .find_span("core.connectivity.connecting_roads")
        .expect("connectivity span closed");
    assert_eq!(span.field("road_count"), Some("2"));

    let event = layer
        .find_event("connecting roads computed")
        .expect("summary event");
    assert_eq!(event.field("components"), Some("3"));
    assert_eq!(event.field("new_roads"), Some("2"));
}
