use super::get_random_number_generator;
use crate::algorithms::shortest_path::sssp::{single_source, SsspScratch};
use crate::{Error, ErrorKind, Graph};
use rand::Rng;

/**
Approximates betweenness centrality by sampling `max(1, n / sup)` pivot
sources and freezing a vertex's estimate as soon as its accumulated
dependency crosses `c_thr * n`.

A frozen vertex is scaled by `n / t`, where `t` is the number of pivots
processed so far, and never updated again; vertices that stay below the
threshold are scaled by `n / samples` after the last pivot. Vertices that
collect dependency quickly -- the likely-high-centrality ones -- thus
stop early with a lower-variance estimate, while the tail uses every
sample.

# Arguments

* `graph`: a [Graph](../../../struct.Graph.html) instance
* `c_thr`: the freezing-threshold multiplier; the recommended range is `>= 2`
* `sup`: the pivot denominator; the recommended range is `>= 20`
* `seed`: pass `Some` for a reproducible run, `None` to seed from entropy

# Examples

```
use centrars::{algorithms::centrality::adaptive, generators};

let graph = generators::classic::path_graph(5);
let scores = adaptive::adaptive_betweenness_centrality(&graph, 5.0, 20.0, Some(42)).unwrap();
assert_eq!(scores.len(), 5);
```

# References

1. D. Bader, S. Kintali, K. Madduri, M. Mihail: Approximating betweenness
   centrality. WAW 2007.
*/
pub fn adaptive_betweenness_centrality(
    graph: &Graph,
    c_thr: f64,
    sup: f64,
    seed: Option<u64>,
) -> Result<Vec<f64>, Error> {
    if !(c_thr > 0.0) {
        return Err(Error {
            kind: ErrorKind::InvalidArgument,
            message: format!("`c_thr` was {} but it must be positive.", c_thr),
        });
    }
    if !(sup > 0.0) {
        return Err(Error {
            kind: ErrorKind::InvalidArgument,
            message: format!("`sup` was {} but it must be positive.", sup),
        });
    }
    let num_nodes = graph.number_of_nodes();
    if num_nodes == 0 {
        return Ok(vec![]);
    }
    let num_samples = std::cmp::max(1, (num_nodes as f64 / sup) as u64);

    let mut rng = get_random_number_generator(seed);
    let mut centrality = vec![0.0; num_nodes];
    let mut frozen = vec![false; num_nodes];
    let mut scratch = SsspScratch::new(num_nodes);
    for processed in 1..=num_samples {
        let source = rng.gen_range(0..num_nodes);
        single_source(graph, source, &mut scratch)?;
        accumulate_with_freezing(&mut centrality, &mut frozen, &mut scratch, c_thr, processed);
    }

    for v in 0..num_nodes {
        if !frozen[v] {
            centrality[v] = num_nodes as f64 * (centrality[v] / num_samples as f64);
        }
    }
    Ok(centrality)
}

/// The dependency back-accumulation of Brandes' algorithm, with the
/// adaptive twist: frozen vertices are skipped, and a vertex crossing the
/// threshold is rescaled by the running pivot count and frozen.
fn accumulate_with_freezing(
    centrality: &mut [f64],
    frozen: &mut [bool],
    scratch: &mut SsspScratch,
    c_thr: f64,
    processed: u64,
) {
    let num_nodes = centrality.len() as f64;
    let SsspScratch {
        order,
        preds,
        sigma,
        delta,
        source,
        ..
    } = scratch;
    for &u in order.iter().rev() {
        let coeff = (1.0 + delta[u]) / sigma[u] as f64;
        for &p in preds[u].iter() {
            delta[p] += sigma[p] as f64 * coeff;
        }
        if u != *source && !frozen[u] {
            centrality[u] += delta[u];
            if centrality[u] > c_thr * num_nodes {
                centrality[u] = num_nodes * (centrality[u] / processed as f64);
                frozen[u] = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::Edge;

    #[test]
    fn test_crossing_the_threshold_freezes_a_vertex() {
        // middle vertex of a path collects dependency 2 from source 0
        let graph = Graph::from_edges(3, vec![Edge::new(0, 1), Edge::new(1, 2)], false).unwrap();
        let mut centrality = vec![0.0; 3];
        let mut frozen = vec![false; 3];
        let mut scratch = SsspScratch::new(3);
        single_source(&graph, 0, &mut scratch).unwrap();
        // a tiny threshold so the first pivot already crosses it
        accumulate_with_freezing(&mut centrality, &mut frozen, &mut scratch, 0.5, 1);
        assert!(frozen[1]);
        assert_eq!(centrality[1], 6.0); // n * (2 / 1)
        assert!(!frozen[0]);
        assert!(!frozen[2]);
    }

    #[test]
    fn test_frozen_vertices_are_not_updated() {
        let graph = Graph::from_edges(3, vec![Edge::new(0, 1), Edge::new(1, 2)], false).unwrap();
        let mut centrality = vec![0.0, 42.0, 0.0];
        let mut frozen = vec![false, true, false];
        let mut scratch = SsspScratch::new(3);
        single_source(&graph, 0, &mut scratch).unwrap();
        accumulate_with_freezing(&mut centrality, &mut frozen, &mut scratch, 0.5, 1);
        assert_eq!(centrality[1], 42.0);
    }
}
