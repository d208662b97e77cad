use std::cmp::Ordering;
use std::collections::{BTreeMap, BinaryHeap};

use serde::Serialize;

use crate::graph::{Graph, GraphError, VertexId};
use crate::mode::TravelMode;

/// Travel time to a destination and the vertex names visited to get there,
/// source and destination included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathCost {
    pub cost: f64,
    pub path: Vec<String>,
}

#[derive(Copy, Clone, PartialEq)]
struct State {
    cost: f64,
    position: VertexId,
}

// BinaryHeap is a max-heap, so the ordering is flipped: the state with the
// lowest cost pops first, ties broken by the lower vertex id.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.position.cmp(&self.position))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for State {}

/// Minimum travel time from `source` to every reachable vertex, using only
/// edges that permit `mode`. Edge travel time is `distance / mode.speed()`.
///
/// The source itself and unreachable vertices are omitted from the result,
/// so a mode with no usable edges yields an empty map rather than an error.
pub fn shortest_paths(
    graph: &Graph,
    source: VertexId,
    mode: &TravelMode,
) -> Result<BTreeMap<VertexId, PathCost>, GraphError> {
    graph.check_vertex(source)?;

    let vertex_count = graph.vertices().len();
    let mut distance = vec![f64::INFINITY; vertex_count];
    let mut parent: Vec<Option<VertexId>> = vec![None; vertex_count];
    distance[source] = 0.0;

    let mut queue = BinaryHeap::new();
    queue.push(State {
        cost: 0.0,
        position: source,
    });

    while let Some(State { cost, position }) = queue.pop() {
        // A relaxation may leave stale entries behind; the authoritative
        // distance array identifies them.
        if cost > distance[position] {
            continue;
        }

        for edge in graph.adjacency(position) {
            if !edge.permits(mode) {
                continue;
            }

            let candidate = cost + edge.distance / mode.speed();
            if candidate < distance[edge.to] {
                distance[edge.to] = candidate;
                parent[edge.to] = Some(position);
                queue.push(State {
                    cost: candidate,
                    position: edge.to,
                });
            }
        }
    }

    let mut results = BTreeMap::new();
    for id in 0..vertex_count {
        if id == source || distance[id].is_infinite() {
            continue;
        }
        results.insert(
            id,
            PathCost {
                cost: distance[id],
                path: trace_path(graph, &parent, id),
            },
        );
    }
    Ok(results)
}

fn trace_path(graph: &Graph, parent: &[Option<VertexId>], destination: VertexId) -> Vec<String> {
    let mut ids = vec![destination];
    let mut current = destination;
    while let Some(previous) = parent[current] {
        ids.push(previous);
        current = previous;
    }
    ids.reverse();
    ids.iter()
        .map(|&id| graph.vertices()[id].name.clone())
        .collect()
}
