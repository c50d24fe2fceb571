use super::graph::Graph;

/// Splits `total_width` evenly among the slots each cluster needs at its
/// densest minute. No rounding happens here.
pub fn assign_widths(graph: &mut Graph, total_width: f32) {
    let Graph {
        nodes, clusters, ..
    } = graph;
    for cluster in clusters.iter_mut() {
        let max_crowd_size = cluster
            .nodes
            .iter()
            .map(|&node_id| nodes[node_id].local_crowd_size)
            .fold(1, usize::max);
        cluster.max_crowd_size = max_crowd_size;
        cluster.width = total_width / max_crowd_size as f32;
    }
}
