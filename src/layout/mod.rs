mod emit;
mod error;
pub mod graph;
pub mod histogram;
mod position;
pub(crate) mod types;
mod validate;
mod width;
pub use emit::emit;
pub use error::{ValidationError, ValidationErrors};
pub use graph::{Cluster, ClusterId, Graph, Node, NodeId, build_graph};
pub use histogram::{Histogram, build_histogram};
pub use position::assign_positions;
pub use types::*;
pub use validate::{events_from_value, validate};
pub use width::assign_widths;

use crate::config::LayoutConfig;
use crate::ir::{DAY_MINUTES, Event};
use crate::report::{Reporter, report_all};

/// Lays out one day of events and returns their rectangles.
///
/// Invalid input produces no rectangles; every diagnostic is handed to
/// `reporter` first.
pub fn layout_day(events: &[Event], config: &LayoutConfig, reporter: &mut dyn Reporter) -> Vec<Rect> {
    match compute_day_layout(events, config) {
        Ok(layout) => layout.rects,
        Err(errors) => {
            report_all(&errors, reporter);
            Vec::new()
        }
    }
}

/// Same as [`layout_day`] for an untyped JSON document, which additionally
/// gets the structural checks (not an array, records that are not objects).
pub fn layout_day_value(
    value: &serde_json::Value,
    config: &LayoutConfig,
    reporter: &mut dyn Reporter,
) -> Vec<Rect> {
    match events_from_value(value) {
        Ok(events) => layout_day(&events, config, reporter),
        Err(errors) => {
            report_all(&errors, reporter);
            Vec::new()
        }
    }
}

/// Validates `events` and runs every layout stage, keeping the per-cluster
/// data alongside the rectangles.
pub fn compute_day_layout(events: &[Event], config: &LayoutConfig) -> Result<DayLayout, ValidationErrors> {
    validate(events)?;

    let histogram = build_histogram(events);
    let mut graph = build_graph(events, &histogram);
    assign_widths(&mut graph, config.board_width);
    assign_positions(&mut graph);
    let rects = emit(&graph, config.padding);

    let clusters = graph
        .clusters
        .iter()
        .map(|cluster| summarize_cluster(&graph, cluster))
        .collect();

    Ok(DayLayout {
        rects,
        clusters,
        board_width: config.board_width,
        padding: config.padding,
        width: config.board_width + config.padding * 2.0,
        height: DAY_MINUTES as f32,
    })
}

fn summarize_cluster(graph: &Graph, cluster: &Cluster) -> ClusterLayout {
    let members = cluster.nodes.iter().map(|&node_id| &graph.nodes[node_id]);
    ClusterLayout {
        events: members.clone().map(|node| node.id).collect(),
        first_minute: members.clone().map(|node| node.start).min().unwrap_or(0),
        last_minute: members.map(|node| node.end).max().unwrap_or(0),
        max_crowd_size: cluster.max_crowd_size,
        width: cluster.width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scenario_a() -> Vec<Event> {
        vec![
            Event::new(1, 30, 150),
            Event::new(2, 540, 600),
            Event::new(3, 560, 620),
            Event::new(4, 610, 670),
        ]
    }

    #[test]
    fn computes_clusters_and_rects() {
        let layout = compute_day_layout(&scenario_a(), &LayoutConfig::default()).unwrap();
        assert_eq!(layout.rects.len(), 4);
        assert_eq!(layout.clusters.len(), 2);
        assert_eq!(layout.clusters[1].events, vec![2, 3, 4]);
        assert_eq!(layout.clusters[1].first_minute, 540);
        assert_eq!(layout.clusters[1].last_minute, 669);
        assert_eq!(layout.width, 620.0);
        assert_eq!(layout.height, 720.0);
        assert_eq!(layout.rect(3).unwrap().left, 310.0);
    }

    #[test]
    fn invalid_input_reports_and_yields_nothing() {
        let mut seen = Vec::new();
        let rects = layout_day(
            &[Event::new(1, 700, 710)],
            &LayoutConfig::default(),
            &mut |error: &ValidationError| seen.push(error.clone()),
        );
        assert!(rects.is_empty());
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn untyped_input_is_checked_structurally() {
        let mut count = 0;
        let rects = layout_day_value(
            &json!("not events"),
            &LayoutConfig::default(),
            &mut |_: &ValidationError| count += 1,
        );
        assert!(rects.is_empty());
        assert_eq!(count, 1);
    }

    #[test]
    fn empty_day_has_no_rects() {
        let layout = compute_day_layout(&[], &LayoutConfig::default()).unwrap();
        assert!(layout.rects.is_empty());
        assert!(layout.clusters.is_empty());
    }
}
