use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::Serialize;

use crate::dijkstra::{shortest_paths, PathCost};
use crate::graph::{Graph, GraphError, VertexId};
use crate::mode::TravelMode;

#[derive(Debug, Serialize)]
pub struct TopologyNode {
    pub id: VertexId,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct TopologyLink {
    pub source: VertexId,
    pub target: VertexId,
    pub weight: f64,
}

/// The raw node/edge list of a graph, independent of any path query.
#[derive(Debug, Serialize)]
pub struct Topology {
    pub nodes: Vec<TopologyNode>,
    pub links: Vec<TopologyLink>,
}

pub fn graph_topology(graph: &Graph) -> Topology {
    let nodes = graph
        .vertices()
        .iter()
        .map(|vertex| TopologyNode {
            id: vertex.id,
            name: vertex.name.clone(),
        })
        .collect();

    let links = graph
        .vertices()
        .iter()
        .flat_map(|vertex| graph.adjacency(vertex.id))
        .map(|edge| TopologyLink {
            source: edge.from,
            target: edge.to,
            weight: edge.distance,
        })
        .collect();

    Topology { nodes, links }
}

#[derive(Debug, Serialize)]
pub struct ModePaths {
    pub paths: BTreeMap<String, PathCost>,
}

/// Source vertex name -> mode name -> cheapest paths under that mode.
pub type PathReport = BTreeMap<String, BTreeMap<String, ModePaths>>;

/// Runs one shortest-path query per (vertex, mode) pair and keys the
/// results by name. Modes with no reachable destination from a vertex are
/// left out of that vertex's entry.
///
/// The queries are independent and the graph is read-only here, so they
/// run in parallel, one source vertex per rayon task.
pub fn all_paths(graph: &Graph, modes: &[TravelMode]) -> Result<PathReport, GraphError> {
    let per_vertex: Vec<(String, BTreeMap<String, ModePaths>)> = graph
        .vertices()
        .par_iter()
        .map(|vertex| {
            let mut by_mode = BTreeMap::new();
            for mode in modes {
                let results = shortest_paths(graph, vertex.id, mode)?;
                if results.is_empty() {
                    continue;
                }

                let paths = results
                    .into_iter()
                    .map(|(destination, path_cost)| {
                        (graph.vertices()[destination].name.clone(), path_cost)
                    })
                    .collect();
                by_mode.insert(mode.name().to_string(), ModePaths { paths });
            }
            Ok((vertex.name.clone(), by_mode))
        })
        .collect::<Result<_, GraphError>>()?;

    Ok(per_vertex.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::standard_modes;
    use crate::network::sample_network;

    #[test]
    fn topology_lists_every_vertex_and_edge() {
        let graph = sample_network().unwrap();
        let topology = graph_topology(&graph);

        assert_eq!(topology.nodes.len(), 6);
        assert_eq!(topology.links.len(), 22);
        assert_eq!(topology.nodes[0].name, "Kamra");
    }

    #[test]
    fn report_keys_paths_by_vertex_and_mode_name() {
        let graph = sample_network().unwrap();
        let report = all_paths(&graph, &standard_modes()).unwrap();

        let attock = &report["Kamra"]["Foot"].paths["Attock"];
        assert_eq!(attock.cost, 5.0);
        assert_eq!(attock.path, ["Kamra", "Attock"]);
    }

    #[test]
    fn modes_without_coverage_are_dropped_from_the_report() {
        let graph = sample_network().unwrap();
        let report = all_paths(&graph, &standard_modes()).unwrap();

        // RWP has no foot-permitting edge at all.
        assert!(!report["RWP"].contains_key("Foot"));
        assert!(report["RWP"].contains_key("Car"));
    }

    #[test]
    fn report_serializes_to_the_expected_json_shape() {
        let graph = sample_network().unwrap();
        let report = all_paths(&graph, &standard_modes()).unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["Kamra"]["Foot"]["paths"]["Attock"]["cost"], 5.0);
        assert_eq!(
            json["Kamra"]["Foot"]["paths"]["Attock"]["path"][1],
            "Attock"
        );
    }

    #[test]
    fn exports_round_trip_through_files() {
        let graph = sample_network().unwrap();
        let dir = tempfile::tempdir().unwrap();

        let topology_path = dir.path().join("graph.json");
        let topology = graph_topology(&graph);
        std::fs::write(&topology_path, serde_json::to_string_pretty(&topology).unwrap()).unwrap();

        let raw = std::fs::read_to_string(&topology_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["nodes"].as_array().unwrap().len(), 6);
        assert_eq!(parsed["links"].as_array().unwrap().len(), 22);
    }
}
