mod dijkstra;
mod export;
mod graph;
mod mode;
mod network;
pub use crate::dijkstra::{shortest_paths, PathCost};
pub use crate::export::{
    all_paths, graph_topology, ModePaths, PathReport, Topology, TopologyLink, TopologyNode,
};
pub use crate::graph::{Edge, Graph, GraphError, Vertex, VertexId};
pub use crate::mode::{standard_modes, TravelMode};
pub use crate::network::sample_network;
