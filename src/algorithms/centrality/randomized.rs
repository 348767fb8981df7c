use super::betweenness::accumulate;
use super::get_random_number_generator;
use crate::algorithms::shortest_path::sssp::{single_source, SsspScratch};
use crate::{Error, ErrorKind, Graph};
use rand::Rng;

/**
Approximates betweenness centrality with Brandes' single-source phase run
from `2 ln n / epsilon^2` sources drawn uniformly with replacement, the
accumulated dependencies being scaled by `n / samples` at the end.

The expected value of every vertex's score equals its exact unnormalized
betweenness; `epsilon` trades sample count against variance.

# Arguments

* `graph`: a [Graph](../../../struct.Graph.html) instance
* `epsilon`: the accuracy parameter, in `(0, 1]`
* `seed`: pass `Some` for a reproducible run, `None` to seed from entropy

# Examples

```
use centrars::{algorithms::centrality::randomized, generators};

let graph = generators::classic::path_graph(5);
let scores =
    randomized::randomized_betweenness_centrality(&graph, 0.1, Some(42)).unwrap();
assert_eq!(scores.len(), 5);
```

# References

1. D. Eppstein, J. Wang: Fast approximation of centrality.
   J. Graph Algorithms Appl. 8:39-45, 2004.
*/
pub fn randomized_betweenness_centrality(
    graph: &Graph,
    epsilon: f64,
    seed: Option<u64>,
) -> Result<Vec<f64>, Error> {
    if !(epsilon > 0.0 && epsilon <= 1.0) {
        return Err(Error {
            kind: ErrorKind::InvalidArgument,
            message: format!("`epsilon` was {} but it must be in (0.0, 1.0].", epsilon),
        });
    }
    let num_nodes = graph.number_of_nodes();
    if num_nodes == 0 {
        return Ok(vec![]);
    }
    let num_samples =
        std::cmp::max(1, (2.0 * (num_nodes as f64).ln() / (epsilon * epsilon)) as u64);

    let mut rng = get_random_number_generator(seed);
    let mut betweenness = vec![0.0; num_nodes];
    let mut scratch = SsspScratch::new(num_nodes);
    for _ in 0..num_samples {
        let source = rng.gen_range(0..num_nodes);
        single_source(graph, source, &mut scratch)?;
        accumulate(&mut betweenness, &mut scratch);
    }

    let scale = num_nodes as f64 / num_samples as f64;
    for value in betweenness.iter_mut() {
        *value *= scale;
    }
    Ok(betweenness)
}
