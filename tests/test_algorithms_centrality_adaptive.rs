#[cfg(test)]
mod tests {

    use centrars::{algorithms::centrality::adaptive, generators, ErrorKind};

    #[test]
    fn test_adaptive_betweenness_same_seed_is_deterministic() {
        let graph = generators::social::karate_club_graph();
        let first = adaptive::adaptive_betweenness_centrality(&graph, 5.0, 20.0, Some(42)).unwrap();
        let second =
            adaptive::adaptive_betweenness_centrality(&graph, 5.0, 20.0, Some(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_adaptive_betweenness_path_endpoints_are_zero() {
        let graph = generators::classic::path_graph(5);
        // a small pivot denominator so several sources are sampled
        let result = adaptive::adaptive_betweenness_centrality(&graph, 5.0, 1.0, Some(7)).unwrap();
        assert_eq!(result[0], 0.0);
        assert_eq!(result[4], 0.0);
        assert!(result[2] >= 0.0);
    }

    #[test]
    fn test_adaptive_betweenness_complete_graph_is_zero() {
        let graph = generators::classic::complete_graph(6, false);
        let result = adaptive::adaptive_betweenness_centrality(&graph, 2.0, 1.0, Some(1)).unwrap();
        assert_eq!(result, vec![0.0; 6]);
    }

    #[test]
    fn test_adaptive_betweenness_is_non_negative() {
        let graph = generators::social::karate_club_graph();
        let result = adaptive::adaptive_betweenness_centrality(&graph, 2.0, 2.0, Some(3)).unwrap();
        assert!(result.iter().all(|&score| score >= 0.0));
    }

    #[test]
    fn test_adaptive_betweenness_rejects_bad_parameters() {
        let graph = generators::classic::path_graph(3);
        let result = adaptive::adaptive_betweenness_centrality(&graph, 0.0, 20.0, None);
        assert_eq!(result.err().unwrap().kind, ErrorKind::InvalidArgument);
        let result = adaptive::adaptive_betweenness_centrality(&graph, 5.0, -1.0, None);
        assert_eq!(result.err().unwrap().kind, ErrorKind::InvalidArgument);
    }
}
