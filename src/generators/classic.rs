use crate::{Edge, Graph};
use itertools::Itertools;

/**
Generates a "complete" graph: one where every vertex is connected to
every other vertex.

# Arguments

* `num_nodes`: The number of vertices to generate.
* `directed`: `true` for a directed graph, `false` for an undirected graph

# Examples

```
use centrars::generators;
let graph = generators::classic::complete_graph(5, true);
assert_eq!(graph.number_of_edges(), 20);
```
*/
pub fn complete_graph(num_nodes: usize, directed: bool) -> Graph {
    let pairs = match directed {
        false => (0..num_nodes).combinations(2).collect::<Vec<Vec<usize>>>(),
        true => (0..num_nodes).permutations(2).collect::<Vec<Vec<usize>>>(),
    };
    let edges = pairs
        .into_iter()
        .map(|pair| Edge::new(pair[0], pair[1]))
        .collect::<Vec<Edge>>();
    Graph::from_edges(num_nodes, edges, directed).unwrap()
}

/**
Generates a path graph: vertices `0` through `num_nodes - 1` connected in
a line.

# Examples

```
use centrars::generators;
let graph = generators::classic::path_graph(5);
assert_eq!(graph.number_of_edges(), 4);
```
*/
pub fn path_graph(num_nodes: usize) -> Graph {
    let edges = (1..num_nodes)
        .map(|v| Edge::new(v - 1, v))
        .collect::<Vec<Edge>>();
    Graph::from_edges(num_nodes, edges, false).unwrap()
}

/**
Generates a star graph: vertex `0` connected to `num_leaves` leaves.

# Examples

```
use centrars::generators;
let graph = generators::classic::star_graph(4);
assert_eq!(graph.number_of_nodes(), 5);
assert_eq!(graph.degree(0), 4);
```
*/
pub fn star_graph(num_leaves: usize) -> Graph {
    let edges = (1..=num_leaves)
        .map(|v| Edge::new(0, v))
        .collect::<Vec<Edge>>();
    Graph::from_edges(num_leaves + 1, edges, false).unwrap()
}

/**
Generates a cycle graph: a path graph with an extra edge closing the
loop.

# Examples

```
use centrars::generators;
let graph = generators::classic::cycle_graph(4);
assert_eq!(graph.number_of_edges(), 4);
```
*/
pub fn cycle_graph(num_nodes: usize) -> Graph {
    let mut edges = (1..num_nodes)
        .map(|v| Edge::new(v - 1, v))
        .collect::<Vec<Edge>>();
    if num_nodes > 2 {
        edges.push(Edge::new(num_nodes - 1, 0));
    }
    Graph::from_edges(num_nodes, edges, false).unwrap()
}
