use crate::{Edge, Error, ErrorKind};
use itertools::{Itertools, MinMaxResult};

/// An outgoing edge as stored in a vertex's adjacency list.
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacentEdge {
    pub target: usize,
    pub weight: f64,
}

impl AdjacentEdge {
    pub fn new(target: usize, weight: f64) -> Self {
        AdjacentEdge { target, weight }
    }
}

/**
The `Graph` struct represents an immutable graph over the vertex set
`{0, ..., n-1}`.

Each vertex stores its outgoing edges in insertion order; parallel edges
are permitted and insertion order determines neighbor-iteration order.
For undirected graphs every edge is stored in both directions.

The minimum and maximum edge weights are cached at construction; a graph
whose weights are all exactly `1` is treated as unweighted by the
shortest-path and centrality algorithms.

# Example

```
use centrars::{Edge, Graph};

let edges = vec![
    Edge::new(0, 1),
    Edge::with_weight(1, 2, 2.0),
];
let graph = Graph::from_edges(3, edges, false).unwrap();
assert_eq!(graph.degree(1), 2);
assert!(graph.is_weighted());
```
*/
pub struct Graph {
    adjacency: Vec<Vec<AdjacentEdge>>,
    directed: bool,
    num_edges: usize,
    weight_min: f64,
    weight_max: f64,
}

impl Graph {
    /**
    Creates a `Graph` with `num_nodes` vertices from a list of edges.

    Every edge must reference vertices in `[0, num_nodes)` and carry a
    finite, non-negative weight. For an undirected graph (`directed` set
    to `false`) each edge is inserted in both directions but counted once
    in `number_of_edges`.
    */
    pub fn from_edges(num_nodes: usize, edges: Vec<Edge>, directed: bool) -> Result<Graph, Error> {
        let mut adjacency: Vec<Vec<AdjacentEdge>> = vec![vec![]; num_nodes];
        let (weight_min, weight_max) = match edges.iter().map(|e| e.weight).minmax() {
            MinMaxResult::NoElements => (1.0, 1.0),
            MinMaxResult::OneElement(w) => (w, w),
            MinMaxResult::MinMax(lo, hi) => (lo, hi),
        };
        for edge in &edges {
            if edge.u >= num_nodes || edge.v >= num_nodes {
                return Err(Error {
                    kind: ErrorKind::EdgeOutOfRange,
                    message: format!(
                        "edge {} references a vertex outside [0, {})",
                        edge, num_nodes
                    ),
                });
            }
            if !edge.weight.is_finite() || edge.weight < 0.0 {
                return Err(Error {
                    kind: ErrorKind::InvalidWeight,
                    message: format!("edge {} has invalid weight {}", edge, edge.weight),
                });
            }
            adjacency[edge.u].push(AdjacentEdge::new(edge.v, edge.weight));
            if !directed {
                adjacency[edge.v].push(AdjacentEdge::new(edge.u, edge.weight));
            }
        }
        Ok(Graph {
            adjacency,
            directed,
            num_edges: edges.len(),
            weight_min,
            weight_max,
        })
    }

    pub fn number_of_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// The number of edges the graph was built from; for undirected graphs
    /// each edge counts once even though it is stored twice.
    pub fn number_of_edges(&self) -> usize {
        self.num_edges
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// The number of outgoing edges of `u`. For undirected graphs this is
    /// the full degree of `u`.
    pub fn degree(&self, u: usize) -> usize {
        self.adjacency[u].len()
    }

    /// The outgoing edges of `u`, in insertion order.
    pub fn adjacent_edges(&self, u: usize) -> &[AdjacentEdge] {
        &self.adjacency[u]
    }

    pub fn weight_min(&self) -> f64 {
        self.weight_min
    }

    pub fn weight_max(&self) -> f64 {
        self.weight_max
    }

    /// `true` unless every edge weight is exactly `1`.
    pub fn is_weighted(&self) -> bool {
        self.weight_min != 1.0 || self.weight_max != 1.0
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_from_edges_undirected_inserts_both_directions() {
        let graph = Graph::from_edges(3, vec![Edge::new(0, 1), Edge::new(1, 2)], false).unwrap();
        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.adjacent_edges(2), &[AdjacentEdge::new(1, 1.0)]);
    }

    #[test]
    fn test_from_edges_directed_keeps_one_direction() {
        let graph = Graph::from_edges(3, vec![Edge::new(0, 1), Edge::new(1, 2)], true).unwrap();
        assert_eq!(graph.degree(1), 1);
        assert_eq!(graph.degree(2), 0);
    }

    #[test]
    fn test_from_edges_preserves_parallel_edges() {
        let edges = vec![Edge::new(0, 1), Edge::new(0, 1)];
        let graph = Graph::from_edges(2, edges, true).unwrap();
        assert_eq!(graph.degree(0), 2);
    }

    #[test]
    fn test_weight_extremes() {
        let edges = vec![Edge::with_weight(0, 1, 0.5), Edge::with_weight(1, 2, 4.0)];
        let graph = Graph::from_edges(3, edges, false).unwrap();
        assert_eq!(graph.weight_min(), 0.5);
        assert_eq!(graph.weight_max(), 4.0);
        assert!(graph.is_weighted());
    }

    #[test]
    fn test_all_unit_weights_is_unweighted() {
        let graph = Graph::from_edges(2, vec![Edge::new(0, 1)], false).unwrap();
        assert_eq!(graph.weight_min(), 1.0);
        assert_eq!(graph.weight_max(), 1.0);
        assert!(!graph.is_weighted());
    }

    #[test]
    fn test_no_edges_defaults_to_unit_weights() {
        let graph = Graph::from_edges(4, vec![], false).unwrap();
        assert!(!graph.is_weighted());
    }

    #[test]
    fn test_edge_out_of_range() {
        let result = Graph::from_edges(2, vec![Edge::new(0, 2)], true);
        assert_eq!(result.err().unwrap().kind, ErrorKind::EdgeOutOfRange);
    }

    #[test]
    fn test_negative_weight_rejected() {
        let result = Graph::from_edges(2, vec![Edge::with_weight(0, 1, -1.0)], true);
        assert_eq!(result.err().unwrap().kind, ErrorKind::InvalidWeight);
    }

    #[test]
    fn test_nan_weight_rejected() {
        let result = Graph::from_edges(2, vec![Edge::with_weight(0, 1, f64::NAN)], true);
        assert_eq!(result.err().unwrap().kind, ErrorKind::InvalidWeight);
    }
}
