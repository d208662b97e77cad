use crate::graph::{Graph, GraphError};
use crate::mode::TravelMode;

/// Builds the six-city demonstration network: two-way roads between the
/// cities, each tagged with the travel modes allowed on it.
pub fn sample_network() -> Result<Graph, GraphError> {
    let foot = TravelMode::foot();
    let bike = TravelMode::bike();
    let car = TravelMode::car();
    let train = TravelMode::train();

    let mut graph = Graph::new();
    let kamra = graph.add_vertex("Kamra");
    let attock = graph.add_vertex("Attock");
    let rwp = graph.add_vertex("RWP");
    let isb = graph.add_vertex("ISB");
    let peshawar = graph.add_vertex("Peshawar");
    let lahore = graph.add_vertex("Lahore");

    graph.add_edge_bidirectional(kamra, attock, 10.0, &[foot.clone(), bike.clone()])?;
    graph.add_edge_bidirectional(attock, rwp, 20.0, &[car.clone()])?;
    graph.add_edge_bidirectional(rwp, isb, 12.0, &[train.clone()])?;
    graph.add_edge_bidirectional(kamra, isb, 11.0, &[foot.clone(), car.clone()])?;
    graph.add_edge_bidirectional(isb, attock, 5.0, &[foot.clone(), car.clone()])?;
    graph.add_edge_bidirectional(attock, peshawar, 15.0, &[car.clone(), train.clone()])?;
    graph.add_edge_bidirectional(peshawar, lahore, 25.0, &[car.clone()])?;
    graph.add_edge_bidirectional(lahore, isb, 18.0, &[train.clone()])?;
    graph.add_edge_bidirectional(attock, lahore, 18.0, &[train.clone()])?;
    graph.add_edge_bidirectional(kamra, lahore, 30.0, &[foot, car.clone()])?;
    graph.add_edge_bidirectional(rwp, peshawar, 22.0, &[bike, car])?;

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_network_has_expected_shape() {
        let graph = sample_network().unwrap();
        assert_eq!(graph.vertices().len(), 6);

        let edge_count: usize = graph
            .vertices()
            .iter()
            .map(|v| graph.adjacency(v.id).len())
            .sum();
        assert_eq!(edge_count, 22); // 11 two-way roads
    }
}
