use super::get_random_number_generator;
use crate::{Error, ErrorKind, Graph};
use rand::{Rng, RngCore};

/**
Approximates the k-path centrality of every vertex: the expected number
of times a vertex is visited by a random simple walk of length at most
`path_length`, started at a random vertex, that follows edges with
probability inversely proportional to their weight (uniformly for
unweighted graphs).

Runs `2 * l^2 * n^(1-2a) * ln n + 1` walks. Each walk draws a length `L`
uniformly from `{1, ..., path_length}` and moves across unexplored
neighbors until `L` steps were taken or no unexplored neighbor remains;
a walk cut short that way is rolled back and its visits are discarded.
Visit counts are scaled by `l * n / walks` at the end.

# Arguments

* `graph`: a [Graph](../../../struct.Graph.html) instance
* `alpha`: walk-count exponent, in `[-0.5, 0.5]`; larger values mean fewer walks
* `path_length`: the maximum walk length, in `[1, n]`
* `seed`: pass `Some` for a reproducible run, `None` to seed from entropy

# Examples

```
use centrars::{algorithms::centrality::kpath, generators};

let graph = generators::classic::star_graph(4);
let scores = kpath::kpath_centrality(&graph, 0.2, 2, Some(42)).unwrap();
assert_eq!(scores.len(), 5);
```

# References

1. T. Alahakoon, R. Tripathi, N. Kourtellis, R. Canseco, A. Iamnitchi:
   K-path centrality: a new centrality measure in social networks.
   SNS '11.
*/
pub fn kpath_centrality(
    graph: &Graph,
    alpha: f64,
    path_length: u64,
    seed: Option<u64>,
) -> Result<Vec<f64>, Error> {
    if !(-0.5..=0.5).contains(&alpha) {
        return Err(Error {
            kind: ErrorKind::InvalidArgument,
            message: format!("`alpha` was {} but it must be in [-0.5, 0.5].", alpha),
        });
    }
    let num_nodes = graph.number_of_nodes();
    if path_length == 0 || path_length > num_nodes as u64 {
        return Err(Error {
            kind: ErrorKind::InvalidArgument,
            message: format!(
                "`path_length` was {} but it must be in [1, {}].",
                path_length, num_nodes
            ),
        });
    }
    if (0..num_nodes).all(|v| graph.degree(v) == 0) {
        return Err(Error {
            kind: ErrorKind::NoUsableVertex,
            message: "the graph has no vertex with outgoing edges".to_string(),
        });
    }

    let num_walks = (2.0
        * (path_length * path_length) as f64
        * (num_nodes as f64).powf(1.0 - 2.0 * alpha)
        * (num_nodes as f64).ln()) as u64
        + 1;

    let mut rng = get_random_number_generator(seed);
    let weighted = graph.is_weighted();
    let mut visits = vec![0u64; num_nodes];
    let mut explored = vec![false; num_nodes];
    let mut walk: Vec<usize> = Vec::with_capacity(path_length as usize + 1);

    for _ in 0..num_walks {
        let mut x = rng.gen_range(0..num_nodes);
        while graph.degree(x) == 0 {
            x = rng.gen_range(0..num_nodes);
        }
        explored[x] = true;
        walk.push(x);

        let drawn_length = rng.gen_range(1..=path_length);
        let mut truncated = false;
        for _ in 0..drawn_length {
            let next = match weighted {
                true => step_inverse_weight(graph, x, &explored, &mut rng),
                false => step_uniform(graph, x, &explored, &mut rng),
            };
            match next {
                None => {
                    truncated = true;
                    break;
                }
                Some(y) => {
                    x = y;
                    explored[x] = true;
                    visits[x] += 1;
                    walk.push(x);
                }
            }
        }

        // rollback; visits only count when the walk reached its drawn length
        for &v in walk.iter() {
            explored[v] = false;
        }
        if truncated {
            for &v in walk[1..].iter() {
                visits[v] -= 1;
            }
        }
        walk.clear();
    }

    let scale = path_length as f64 * num_nodes as f64 / num_walks as f64;
    Ok(visits.iter().map(|&count| count as f64 * scale).collect())
}

/// Draws the next walk vertex among the unexplored neighbors of `x` with
/// probability inversely proportional to edge weight; `None` when every
/// neighbor is explored (or reachable only over zero-weight edges).
fn step_inverse_weight(
    graph: &Graph,
    x: usize,
    explored: &[bool],
    rng: &mut Box<dyn RngCore>,
) -> Option<usize> {
    let total: f64 = graph
        .adjacent_edges(x)
        .iter()
        .filter(|adj| !explored[adj.target] && adj.weight != 0.0)
        .map(|adj| 1.0 / adj.weight)
        .sum();
    if total == 0.0 {
        return None;
    }
    select_inverse_weight(graph, x, explored, rng.gen::<f64>() * total)
}

/// Second pass of the inverse-weight selection: walks the neighbors in
/// adjacency order and picks the first whose cumulative inverse weight
/// exceeds `draw`. Rounding can leave the cumulative sum a hair short on
/// the last neighbor, in which case the last eligible one is taken.
fn select_inverse_weight(
    graph: &Graph,
    x: usize,
    explored: &[bool],
    draw: f64,
) -> Option<usize> {
    let mut running = 0.0;
    let mut last_eligible = None;
    for adj in graph.adjacent_edges(x) {
        if !explored[adj.target] && adj.weight != 0.0 {
            running += 1.0 / adj.weight;
            last_eligible = Some(adj.target);
            if running > draw {
                return last_eligible;
            }
        }
    }
    last_eligible
}

/// Uniform counterpart of [`step_inverse_weight`] for unweighted graphs:
/// picks the `rank`-th unexplored neighbor for a uniform random rank.
fn step_uniform(
    graph: &Graph,
    x: usize,
    explored: &[bool],
    rng: &mut Box<dyn RngCore>,
) -> Option<usize> {
    let count = graph
        .adjacent_edges(x)
        .iter()
        .filter(|adj| !explored[adj.target])
        .count();
    if count == 0 {
        return None;
    }
    let rank = rng.gen_range(0..count);
    graph
        .adjacent_edges(x)
        .iter()
        .filter(|adj| !explored[adj.target])
        .nth(rank)
        .map(|adj| adj.target)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::Edge;

    fn weighted_fan() -> Graph {
        // inverse weights 1, 2 and 4 give selection probabilities 1/7, 2/7, 4/7
        let edges = vec![
            Edge::with_weight(0, 1, 1.0),
            Edge::with_weight(0, 2, 0.5),
            Edge::with_weight(0, 3, 0.25),
        ];
        Graph::from_edges(4, edges, true).unwrap()
    }

    #[test]
    fn test_select_inverse_weight_crosses_in_adjacency_order() {
        let graph = weighted_fan();
        let explored = vec![false; 4];
        assert_eq!(select_inverse_weight(&graph, 0, &explored, 0.5), Some(1));
        assert_eq!(select_inverse_weight(&graph, 0, &explored, 2.9), Some(2));
        assert_eq!(select_inverse_weight(&graph, 0, &explored, 6.99), Some(3));
    }

    #[test]
    fn test_select_inverse_weight_skips_explored_targets() {
        let graph = weighted_fan();
        let mut explored = vec![false; 4];
        explored[1] = true;
        // eligible cumulative sums are now 2 (vertex 2) and 6 (vertex 3)
        assert_eq!(select_inverse_weight(&graph, 0, &explored, 2.5), Some(3));
        assert_eq!(select_inverse_weight(&graph, 0, &explored, 1.9), Some(2));
    }

    #[test]
    fn test_select_inverse_weight_rounding_shortfall_takes_last() {
        let graph = weighted_fan();
        let explored = vec![false; 4];
        assert_eq!(select_inverse_weight(&graph, 0, &explored, 7.5), Some(3));
    }

    #[test]
    fn test_select_inverse_weight_all_explored() {
        let graph = weighted_fan();
        let explored = vec![true; 4];
        assert_eq!(select_inverse_weight(&graph, 0, &explored, 0.1), None);
    }

    #[test]
    fn test_zero_weight_edges_are_never_selected() {
        let edges = vec![
            Edge::with_weight(0, 1, 0.0),
            Edge::with_weight(0, 2, 1.0),
        ];
        let graph = Graph::from_edges(3, edges, true).unwrap();
        let explored = vec![false; 3];
        assert_eq!(select_inverse_weight(&graph, 0, &explored, 0.5), Some(2));
    }
}
