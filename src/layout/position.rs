use super::graph::Graph;

/// Gives every node the lowest slot not already taken by one of its
/// neighbours. Must run after [`assign_widths`](super::width::assign_widths),
/// which sizes each cluster's slot range.
///
/// Nodes are visited in the order they joined their cluster, i.e. by start
/// minute. Every positioned neighbour is then live at the node's first
/// minute, so at most `max_crowd_size - 1` slots are ever taken and the
/// search always succeeds.
pub fn assign_positions(graph: &mut Graph) {
    let Graph {
        nodes, clusters, ..
    } = graph;
    for cluster in clusters.iter() {
        for &node_id in &cluster.nodes {
            let mut occupied = vec![false; cluster.max_crowd_size];
            for &neighbour in &nodes[node_id].neighbours {
                if let Some(taken) = nodes[neighbour].slot.and_then(|slot| occupied.get_mut(slot)) {
                    *taken = true;
                }
            }
            let slot = first_free_slot(&occupied);
            debug_assert!(slot < cluster.max_crowd_size, "no free slot for node {node_id}");
            nodes[node_id].slot = Some(slot);
        }
    }
}

fn first_free_slot(occupied: &[bool]) -> usize {
    occupied
        .iter()
        .position(|taken| !taken)
        .unwrap_or(occupied.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Event;
    use crate::layout::graph::build_graph;
    use crate::layout::histogram::build_histogram;
    use crate::layout::width::assign_widths;

    fn slots(events: &[Event]) -> Vec<(i64, usize)> {
        let mut graph = build_graph(events, &build_histogram(events));
        assign_widths(&mut graph, 600.0);
        assign_positions(&mut graph);
        graph
            .nodes
            .iter()
            .map(|n| (n.id, n.slot.unwrap()))
            .collect()
    }

    #[test]
    fn chain_reuses_freed_slot() {
        let events = [
            Event::new(1, 30, 150),
            Event::new(2, 540, 600),
            Event::new(3, 560, 620),
            Event::new(4, 610, 670),
        ];
        assert_eq!(slots(&events), vec![(1, 0), (2, 0), (3, 1), (4, 0)]);
    }

    #[test]
    fn simultaneous_events_fan_out() {
        let events = [
            Event::new(10, 0, 60),
            Event::new(11, 0, 60),
            Event::new(12, 0, 60),
        ];
        assert_eq!(slots(&events), vec![(10, 0), (11, 1), (12, 2)]);
    }

    #[test]
    fn touching_events_may_share_a_slot() {
        let events = [Event::new(1, 0, 60), Event::new(2, 60, 120)];
        assert_eq!(slots(&events), vec![(1, 0), (2, 0)]);
    }

    #[test]
    fn visit_order_follows_start_minute() {
        // Listed out of order; 2 starts first and so is placed first.
        let events = [Event::new(1, 100, 200), Event::new(2, 50, 150)];
        assert_eq!(slots(&events), vec![(1, 1), (2, 0)]);
    }

    #[test]
    fn first_free_slot_skips_taken() {
        assert_eq!(first_free_slot(&[true, false, true]), 1);
        assert_eq!(first_free_slot(&[false]), 0);
        assert_eq!(first_free_slot(&[true, true]), 2);
    }
}
