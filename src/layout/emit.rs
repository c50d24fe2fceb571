use super::graph::Graph;
use super::types::Rect;

/// Maps every positioned node to board pixels. `padding` shifts all
/// rectangles right by a fixed gutter.
pub fn emit(graph: &Graph, padding: f32) -> Vec<Rect> {
    graph
        .nodes
        .iter()
        .enumerate()
        .filter_map(|(node_id, node)| {
            let cluster = graph.cluster_of(node_id)?;
            let slot = node.slot.unwrap_or(0);
            Some(Rect {
                id: node.id,
                top: node.start as f32,
                left: slot as f32 * cluster.width + padding,
                width: cluster.width,
                height: (node.end + 1 - node.start) as f32,
            })
        })
        .collect()
}
