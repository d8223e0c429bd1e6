//! Request-flow ordering of a diagram.

use crate::diagram::{Edge, ServiceNode};
use ahash::AHashMap;
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Orders `nodes` so that every edge points forward (Kahn's algorithm).
///
/// Ties are broken first come, first served: nodes become available in input order
/// and leave the queue in the order they entered it. Edges naming an unknown node are
/// skipped. Nodes on a cycle never reach in-degree zero and are left out of the
/// result, so the output may be shorter than the input.
pub fn order<'a>(nodes: &'a [ServiceNode], edges: &[Edge]) -> Vec<&'a ServiceNode> {
    let mut index: AHashMap<&str, usize> = AHashMap::with_capacity(nodes.len());
    for (i, node) in nodes.iter().enumerate() {
        index.entry(node.id.as_str()).or_insert(i);
    }

    let mut in_degree = vec![0usize; nodes.len()];
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];

    for edge in edges {
        let (Some(&source), Some(&target)) = (
            index.get(edge.source.as_str()),
            index.get(edge.target.as_str()),
        ) else {
            trace!(edge = %edge.id, "Skipping edge with unknown endpoint");
            continue;
        };
        adjacency[source].push(target);
        in_degree[target] += 1;
    }

    let mut queue: VecDeque<usize> = (0..nodes.len()).filter(|&i| in_degree[i] == 0).collect();
    let mut sorted = Vec::with_capacity(nodes.len());

    while let Some(current) = queue.pop_front() {
        sorted.push(&nodes[current]);
        for &next in &adjacency[current] {
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    if sorted.len() < nodes.len() {
        debug!(
            dropped = nodes.len() - sorted.len(),
            "Nodes on a cycle were left out of the flow order"
        );
    }

    sorted
}
