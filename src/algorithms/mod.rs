/// Compute the centrality of vertices in the graph.
pub mod centrality;

/// Compute single-source shortest-path DAGs.
pub mod shortest_path;
