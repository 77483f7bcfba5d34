use crate::error::InputError;
use crate::step::{DataStructure, Edge, GraphData};

/// Adjacency-list graph used as generator input. Neighbours are kept sorted
/// and deduplicated so traversal order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    directed: bool,
}

impl Graph {
    pub fn new(
        node_count: usize,
        edges: &[(usize, usize)],
        directed: bool,
    ) -> Result<Self, InputError> {
        let mut adjacency = vec![Vec::new(); node_count];
        for &(from, to) in edges {
            if from >= node_count || to >= node_count {
                return Err(InputError::EdgeOutOfRange {
                    from,
                    to,
                    node_count,
                });
            }
            adjacency[from].push(to);
            if !directed && from != to {
                adjacency[to].push(from);
            }
        }
        for neighbors in &mut adjacency {
            neighbors.sort_unstable();
            neighbors.dedup();
        }
        Ok(Self {
            adjacency,
            directed,
        })
    }

    pub fn directed(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, InputError> {
        Self::new(node_count, edges, true)
    }

    pub fn undirected(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, InputError> {
        Self::new(node_count, edges, false)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Each undirected edge is listed once, from the smaller endpoint.
    pub fn edges(&self) -> Vec<Edge> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(from, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |&&to| self.directed || from <= to)
                    .map(move |&to| Edge { from, to })
            })
            .collect()
    }

    pub(crate) fn snapshot(&self, label: &str) -> DataStructure {
        DataStructure::graph(
            GraphData {
                nodes: (0..self.node_count()).collect(),
                edges: self.edges(),
                directed: self.directed,
            },
            label,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undirected_edges_are_mirrored_once() {
        let graph = Graph::undirected(3, &[(0, 1), (1, 0), (2, 1)]).unwrap();
        assert_eq!(graph.neighbors(1), &[0, 2]);
        assert_eq!(
            graph.edges(),
            vec![Edge { from: 0, to: 1 }, Edge { from: 1, to: 2 }]
        );
    }

    #[test]
    fn test_edge_out_of_range() {
        assert_eq!(
            Graph::directed(2, &[(0, 2)]),
            Err(InputError::EdgeOutOfRange {
                from: 0,
                to: 2,
                node_count: 2
            })
        );
    }

    #[test]
    fn test_neighbors_of_missing_node_is_empty() {
        let graph = Graph::directed(1, &[]).unwrap();
        assert!(graph.neighbors(5).is_empty());
    }
}
