use crate::algorithms::shortest_path::sssp::{single_source, SsspScratch};
use crate::{Error, Graph};
use rayon::prelude::*;
use std::sync::Mutex;

/**
Computes the shortest-path betweenness centrality of every vertex.

Runs the single-source phase from every vertex (Dijkstra when the graph
is weighted, breadth-first search otherwise) and back-accumulates
dependencies over each shortest-path DAG. Scores are unnormalized: every
ordered pair of distinct, reachable vertices contributes once, and no
halving is applied for undirected graphs.

Sources are processed in parallel when the graph is large enough and more
than one thread is available.

# Examples

```
use centrars::{algorithms::centrality::betweenness, Edge, Graph};

let edges = vec![Edge::new(0, 1), Edge::new(1, 2)];
let graph = Graph::from_edges(3, edges, false).unwrap();
let scores = betweenness::betweenness_centrality(&graph).unwrap();
assert_eq!(scores, vec![0.0, 2.0, 0.0]);
```

# References

1. Ulrik Brandes: A Faster Algorithm for Betweenness Centrality.
   Journal of Mathematical Sociology 25(2):163-177, 2001.
*/
pub fn betweenness_centrality(graph: &Graph) -> Result<Vec<f64>, Error> {
    let num_nodes = graph.number_of_nodes();
    let parallel = num_nodes > 20 && rayon::current_num_threads() > 1;
    let betweenness_mutex = Mutex::new(vec![0.0; num_nodes]);
    match parallel {
        true => {
            (0..num_nodes).into_par_iter().try_for_each_init(
                || SsspScratch::new(num_nodes),
                |scratch, source| -> Result<(), Error> {
                    single_source(graph, source, scratch)?;
                    let mut betweenness = betweenness_mutex.lock().unwrap();
                    accumulate(&mut betweenness, scratch);
                    Ok(())
                },
            )?;
        }
        false => {
            let mut scratch = SsspScratch::new(num_nodes);
            for source in 0..num_nodes {
                single_source(graph, source, &mut scratch)?;
                let mut betweenness = betweenness_mutex.lock().unwrap();
                accumulate(&mut betweenness, &mut scratch);
            }
        }
    }
    Ok(betweenness_mutex.into_inner().unwrap())
}

/**
Walks the discovery order backwards, accumulating each vertex's
dependency onto its predecessors and adding the finished dependency of
every non-source vertex to `betweenness`.
*/
pub(crate) fn accumulate(betweenness: &mut [f64], scratch: &mut SsspScratch) {
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
        if u != *source {
            betweenness[u] += delta[u];
        }
    }
}
