use std::collections::{BTreeSet, HashMap};

use crate::ir::Event;

use super::histogram::Histogram;

/// Index of a node in [`Graph::nodes`].
pub type NodeId = usize;

/// Index of a cluster in [`Graph::clusters`].
pub type ClusterId = usize;

#[derive(Debug, Clone)]
pub struct Node {
    pub id: i64,
    pub start: i64,
    /// Last minute the event occupies (inclusive).
    pub end: i64,
    /// Nodes sharing at least one minute with this one.
    pub neighbours: BTreeSet<NodeId>,
    /// Most events live at once during any minute this node occupies.
    pub local_crowd_size: usize,
    pub cluster: Option<ClusterId>,
    pub slot: Option<usize>,
}

impl Node {
    fn new(event: &Event) -> Self {
        Self {
            id: event.id,
            start: event.start,
            end: event.end - 1,
            neighbours: BTreeSet::new(),
            local_crowd_size: 1,
            cluster: None,
            slot: None,
        }
    }
}

/// A maximal run of busy minutes and every node active during it.
#[derive(Debug, Clone)]
pub struct Cluster {
    /// Members in the order they joined (start minute, then input order).
    pub nodes: Vec<NodeId>,
    pub max_crowd_size: usize,
    pub width: f32,
}

impl Cluster {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            max_crowd_size: 1,
            width: 0.0,
        }
    }
}

/// Arena owning every node and cluster of one layout call. Relations between
/// them are stored as ids into the arena.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub clusters: Vec<Cluster>,
    index: HashMap<i64, NodeId>,
}

impl Graph {
    fn with_nodes(events: &[Event]) -> Self {
        let nodes: Vec<Node> = events.iter().map(Node::new).collect();
        let index = nodes
            .iter()
            .enumerate()
            .map(|(node_id, node)| (node.id, node_id))
            .collect();
        Self {
            nodes,
            clusters: Vec::new(),
            index,
        }
    }

    /// Looks up the node for an event id.
    pub fn node_id(&self, event_id: i64) -> Option<NodeId> {
        self.index.get(&event_id).copied()
    }

    pub fn node(&self, event_id: i64) -> Option<&Node> {
        self.node_id(event_id).map(|node_id| &self.nodes[node_id])
    }

    pub fn cluster_of(&self, node_id: NodeId) -> Option<&Cluster> {
        self.nodes
            .get(node_id)
            .and_then(|node| node.cluster)
            .map(|cluster_id| &self.clusters[cluster_id])
    }
}

/// Builds the collision graph: contiguity clusters, direct-overlap
/// neighbours and per-node crowd sizes.
pub fn build_graph(events: &[Event], histogram: &Histogram) -> Graph {
    let mut graph = Graph::with_nodes(events);

    // Clusters are closed by the first fully idle minute, so two events can
    // share a cluster through a chain of overlaps without touching each other.
    let mut current: Option<Cluster> = None;
    for bucket in histogram.buckets() {
        if bucket.is_empty() {
            if let Some(cluster) = current.take() {
                graph.clusters.push(cluster);
            }
            continue;
        }
        let cluster_id = graph.clusters.len();
        let cluster = current.get_or_insert_with(Cluster::new);
        for event_id in bucket {
            let Some(node_id) = graph.index.get(event_id).copied() else {
                continue;
            };
            let node = &mut graph.nodes[node_id];
            if node.cluster.is_none() {
                node.cluster = Some(cluster_id);
                cluster.nodes.push(node_id);
            }
        }
    }
    if let Some(cluster) = current.take() {
        graph.clusters.push(cluster);
    }

    for bucket in histogram.buckets() {
        let members: Vec<NodeId> = bucket
            .iter()
            .filter_map(|event_id| graph.index.get(event_id).copied())
            .collect();
        for &node_id in &members {
            let node = &mut graph.nodes[node_id];
            node.local_crowd_size = node.local_crowd_size.max(bucket.len());
            node.neighbours
                .extend(members.iter().copied().filter(|&other| other != node_id));
        }
    }

    log::debug!(
        "collision graph: {} node(s) in {} cluster(s)",
        graph.nodes.len(),
        graph.clusters.len()
    );
    graph
}
