use std::collections::HashMap;

use log::debug;
use thiserror::Error;

use crate::mode::TravelMode;

pub type VertexId = usize;

#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("vertex {id} does not exist (graph has {vertex_count} vertices)")]
    InvalidVertex { id: VertexId, vertex_count: usize },
    #[error("edge {from} -> {to} has negative distance {distance}")]
    NegativeDistance {
        from: VertexId,
        to: VertexId,
        distance: f64,
    },
    #[error("travel mode {name:?} must have a positive speed, got {speed}")]
    NonPositiveSpeed { name: String, speed: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub id: VertexId,
    pub name: String,
}

/// A directed connection between two vertices, usable only by the travel
/// modes listed on it.
#[derive(Debug, Clone)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub distance: f64,
    modes: Vec<TravelMode>,
}

impl Edge {
    fn new(from: VertexId, to: VertexId, distance: f64) -> Self {
        Self {
            from,
            to,
            distance,
            modes: Vec::new(),
        }
    }

    fn add_mode(&mut self, mode: TravelMode) {
        if self.permits(&mode) {
            debug!(
                "travel mode {} already present on edge {} -> {}",
                mode.name(),
                self.from,
                self.to
            );
            return;
        }
        self.modes.push(mode);
    }

    pub fn permits(&self, mode: &TravelMode) -> bool {
        self.modes.iter().any(|m| m.name() == mode.name())
    }

    pub fn modes(&self) -> &[TravelMode] {
        &self.modes
    }
}

#[derive(Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    adjacency: HashMap<VertexId, Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a vertex and returns its id. Ids are sequential from zero;
    /// names need not be unique.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(Vertex {
            id,
            name: name.into(),
        });
        id
    }

    /// Appends a directed edge. Both endpoints must already exist and the
    /// distance must be non-negative; shortest-path correctness depends on
    /// both, so violations fail here rather than corrupting later queries.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        distance: f64,
        modes: &[TravelMode],
    ) -> Result<(), GraphError> {
        self.check_vertex(from)?;
        self.check_vertex(to)?;
        if distance < 0.0 {
            return Err(GraphError::NegativeDistance { from, to, distance });
        }

        let mut edge = Edge::new(from, to, distance);
        for mode in modes {
            edge.add_mode(mode.clone());
        }
        self.adjacency.entry(from).or_default().push(edge);
        Ok(())
    }

    /// Models a two-way road as a pair of directed edges with the same
    /// distance and mode set.
    pub fn add_edge_bidirectional(
        &mut self,
        from: VertexId,
        to: VertexId,
        distance: f64,
        modes: &[TravelMode],
    ) -> Result<(), GraphError> {
        self.add_edge(from, to, distance, modes)?;
        self.add_edge(to, from, distance, modes)
    }

    /// Outgoing edges of a vertex in insertion order. A vertex with no
    /// outgoing edges yields an empty slice.
    pub fn adjacency(&self, id: VertexId) -> &[Edge] {
        self.adjacency.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub(crate) fn check_vertex(&self, id: VertexId) -> Result<(), GraphError> {
        if id < self.vertices.len() {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                id,
                vertex_count: self.vertices.len(),
            })
        }
    }
}
