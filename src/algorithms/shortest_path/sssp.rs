use crate::{Error, ErrorKind, Graph, VertexHeap};
use std::collections::VecDeque;

static CONTRADICTORY_PATHS_ERROR_MESSAGE: &str =
    "Contradictory paths found, do some edges have negative weights?";

/**
Per-source scratch state for the single-source phase of Brandes'
algorithm.

All buffers are allocated once, sized to the vertex count, and reused
across sources: `clear` resets only the vertices the previous source
touched, which are exactly the ones recorded in `order`.
*/
pub struct SsspScratch {
    /// Shortest-path distance from the source; `INFINITY` marks vertices
    /// that were never reached.
    pub dist: Vec<f64>,
    /// Number of shortest paths from the source. Saturates at `u64::MAX`
    /// instead of wrapping on extremely path-rich graphs.
    pub sigma: Vec<u64>,
    /// Immediate predecessors on shortest paths, in discovery order.
    pub preds: Vec<Vec<usize>>,
    /// Vertices in the order their distances were finalized. Iterated
    /// back-to-front this is a topological order of the shortest-path DAG.
    pub order: Vec<usize>,
    /// Dependency of the source on each vertex, filled in by the
    /// centrality accumulators.
    pub delta: Vec<f64>,
    /// The source of the most recent run.
    pub source: usize,
    heap: VertexHeap,
    queue: VecDeque<usize>,
}

impl SsspScratch {
    pub fn new(num_vertices: usize) -> SsspScratch {
        SsspScratch {
            dist: vec![f64::INFINITY; num_vertices],
            sigma: vec![0; num_vertices],
            preds: vec![vec![]; num_vertices],
            order: Vec::with_capacity(num_vertices),
            delta: vec![0.0; num_vertices],
            source: 0,
            heap: VertexHeap::new(num_vertices),
            queue: VecDeque::new(),
        }
    }

    /// Resets the vertices touched by the previous source, preserving
    /// every buffer's capacity.
    pub fn clear(&mut self) {
        for &v in &self.order {
            self.dist[v] = f64::INFINITY;
            self.sigma[v] = 0;
            self.preds[v].clear();
            self.delta[v] = 0.0;
        }
        self.order.clear();
        self.heap.clear();
        self.queue.clear();
    }
}

/**
Runs the single-source phase appropriate for the graph's weighting,
leaving the shortest-path DAG (`dist`, `sigma`, `preds`, `order`) in
`scratch`.

Weighted graphs use Dijkstra's algorithm with a decrease-key priority
queue; graphs whose weights are all `1` use breadth-first search.
*/
pub fn single_source(graph: &Graph, source: usize, scratch: &mut SsspScratch) -> Result<(), Error> {
    scratch.clear();
    scratch.source = source;
    match graph.is_weighted() {
        true => dijkstra(graph, source, scratch),
        false => {
            bfs(graph, source, scratch);
            Ok(())
        }
    }
}

/**
Dijkstra's algorithm keeping, for every vertex, all immediate
predecessors on shortest paths and the number of such paths.

A vertex is discovered the first time an edge reaches it (`dist` leaves
`INFINITY`); the equality test that follows then credits the discovering
edge with the vertex's first path count and predecessor. A strictly
shorter path to an already queued vertex replaces its count and
predecessor set and lowers its queue key.

# References

1. E. W. Dijkstra. A note on two problems in connexion with graphs.
   Numer. Math., 1:269-271, 1959.
*/
pub fn dijkstra(graph: &Graph, source: usize, scratch: &mut SsspScratch) -> Result<(), Error> {
    let SsspScratch {
        dist,
        sigma,
        preds,
        order,
        heap,
        ..
    } = scratch;

    dist[source] = 0.0;
    sigma[source] = 1;
    heap.insert(source, 0.0)?;

    while let Some((u, u_dist)) = heap.extract_min() {
        order.push(u);
        let u_sigma = sigma[u];
        for adj in graph.adjacent_edges(u) {
            let v = adj.target;
            let uv_dist = u_dist + adj.weight;
            if dist[v] == f64::INFINITY {
                dist[v] = uv_dist;
                heap.insert(v, uv_dist)?;
            }
            if uv_dist == dist[v] {
                sigma[v] = sigma[v].saturating_add(u_sigma);
                preds[v].push(u);
            } else if uv_dist < dist[v] {
                if !heap.contains(v) {
                    return Err(Error {
                        kind: ErrorKind::ContradictoryPaths,
                        message: CONTRADICTORY_PATHS_ERROR_MESSAGE.to_string(),
                    });
                }
                dist[v] = uv_dist;
                sigma[v] = u_sigma;
                preds[v].clear();
                preds[v].push(u);
                heap.decrease_key(v, uv_dist)?;
            }
        }
    }
    Ok(())
}

/// Breadth-first search counterpart of [`dijkstra`] for graphs whose
/// edges all weigh `1`.
pub fn bfs(graph: &Graph, source: usize, scratch: &mut SsspScratch) {
    let SsspScratch {
        dist,
        sigma,
        preds,
        order,
        queue,
        ..
    } = scratch;

    dist[source] = 0.0;
    sigma[source] = 1;
    queue.push_back(source);

    while let Some(u) = queue.pop_front() {
        order.push(u);
        let u_dist = dist[u];
        let u_sigma = sigma[u];
        for adj in graph.adjacent_edges(u) {
            let v = adj.target;
            if dist[v] == f64::INFINITY {
                dist[v] = u_dist + 1.0;
                queue.push_back(v);
            }
            if dist[v] == u_dist + 1.0 {
                sigma[v] = sigma[v].saturating_add(u_sigma);
                preds[v].push(u);
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::Edge;
    use assert_unordered::assert_eq_unordered;

    fn diamond() -> Graph {
        // 0-1, 0-2, 1-3, 2-3: two equally short ways from 0 to 3
        let edges = vec![
            Edge::new(0, 1),
            Edge::new(0, 2),
            Edge::new(1, 3),
            Edge::new(2, 3),
        ];
        Graph::from_edges(4, edges, false).unwrap()
    }

    #[test]
    fn test_bfs_counts_both_shortest_paths() {
        let graph = diamond();
        let mut scratch = SsspScratch::new(4);
        single_source(&graph, 0, &mut scratch).unwrap();
        assert_eq!(scratch.sigma[3], 2);
        assert_eq!(scratch.dist[3], 2.0);
        assert_eq_unordered!(scratch.preds[3].clone(), vec![1, 2]);
    }

    #[test]
    fn test_weighted_tie_breaking() {
        // triangle where the direct 0-2 edge ties with the path through 1
        let edges = vec![
            Edge::with_weight(0, 1, 1.0),
            Edge::with_weight(0, 2, 2.0),
            Edge::with_weight(1, 2, 1.0),
        ];
        let graph = Graph::from_edges(3, edges, false).unwrap();
        let mut scratch = SsspScratch::new(3);
        single_source(&graph, 0, &mut scratch).unwrap();
        assert_eq!(scratch.sigma[2], 2);
        assert_eq!(scratch.dist[2], 2.0);
        assert_eq_unordered!(scratch.preds[2].clone(), vec![0, 1]);
    }

    #[test]
    fn test_unreachable_vertex_left_untouched() {
        let graph = Graph::from_edges(3, vec![Edge::new(0, 1)], false).unwrap();
        let mut scratch = SsspScratch::new(3);
        single_source(&graph, 0, &mut scratch).unwrap();
        assert_eq!(scratch.dist[2], f64::INFINITY);
        assert_eq!(scratch.sigma[2], 0);
        assert!(scratch.preds[2].is_empty());
        assert_eq!(scratch.order, vec![0, 1]);
    }

    #[test]
    fn test_sigma_is_sum_over_predecessors() {
        let graph = diamond();
        let mut scratch = SsspScratch::new(4);
        single_source(&graph, 1, &mut scratch).unwrap();
        for &v in &scratch.order {
            if v == scratch.source {
                continue;
            }
            let total: u64 = scratch.preds[v].iter().map(|&p| scratch.sigma[p]).sum();
            assert_eq!(scratch.sigma[v], total);
        }
    }

    #[test]
    fn test_order_is_reverse_topological_on_pred_dag() {
        let graph = diamond();
        let mut scratch = SsspScratch::new(4);
        single_source(&graph, 0, &mut scratch).unwrap();
        let position: Vec<usize> = {
            let mut position = vec![0; 4];
            for (i, &v) in scratch.order.iter().enumerate() {
                position[v] = i;
            }
            position
        };
        // every predecessor is finalized before the vertex it precedes
        for &v in &scratch.order {
            for &p in &scratch.preds[v] {
                assert!(position[p] < position[v]);
            }
        }
    }

    #[test]
    fn test_dijkstra_and_bfs_agree_on_unit_weights() {
        let graph = diamond();
        let mut left = SsspScratch::new(4);
        let mut right = SsspScratch::new(4);
        for source in 0..4 {
            left.clear();
            left.source = source;
            dijkstra(&graph, source, &mut left).unwrap();
            right.clear();
            right.source = source;
            bfs(&graph, source, &mut right);
            assert_eq!(left.dist, right.dist);
            assert_eq!(left.sigma, right.sigma);
            assert_eq!(left.preds, right.preds);
            assert_eq!(left.order, right.order);
        }
    }

    #[test]
    fn test_scratch_clear_between_sources() {
        let graph = Graph::from_edges(3, vec![Edge::new(0, 1), Edge::new(1, 2)], false).unwrap();
        let mut scratch = SsspScratch::new(3);
        single_source(&graph, 0, &mut scratch).unwrap();
        single_source(&graph, 2, &mut scratch).unwrap();
        assert_eq!(scratch.dist[0], 2.0);
        assert_eq!(scratch.dist[2], 0.0);
        assert_eq!(scratch.sigma[2], 1);
        assert_eq!(scratch.order, vec![2, 1, 0]);
    }

    #[test]
    fn test_parallel_edges_count_as_distinct_paths() {
        let edges = vec![Edge::new(0, 1), Edge::new(0, 1)];
        let graph = Graph::from_edges(2, edges, true).unwrap();
        let mut scratch = SsspScratch::new(2);
        single_source(&graph, 0, &mut scratch).unwrap();
        assert_eq!(scratch.sigma[1], 2);
        assert_eq!(scratch.preds[1], vec![0, 0]);
    }
}
