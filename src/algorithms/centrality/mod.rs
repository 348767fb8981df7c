use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Compute betweenness centrality of vertices with Brandes' algorithm.
pub mod betweenness;

/// Approximate betweenness centrality from uniformly sampled sources.
pub mod randomized;

/// Approximate betweenness centrality with adaptive sampling and
/// per-vertex early termination.
pub mod adaptive;

/// Approximate k-path centrality from bounded random walks.
pub mod kpath;

/// Returns a seeded, reproducible generator when `seed` is given and a
/// thread-local entropy generator otherwise.
pub(crate) fn get_random_number_generator(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        None => Box::new(rand::thread_rng()),
        Some(s) => Box::new(ChaCha20Rng::seed_from_u64(s)),
    }
}
