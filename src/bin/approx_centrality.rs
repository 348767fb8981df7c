use centrars::algorithms::centrality::{adaptive, betweenness, randomized};
use centrars::readwrite::gml;
use centrars::readwrite::report::{self, AlgorithmRun, CentralityReport};
use centrars::Error;
use clap::Parser;
use log::{error, info, warn};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Compute exact Brandes betweenness plus its randomized and \
    adaptive-sampling approximations for every vertex of a GML graph and write \
    the scores to CSV.")]
struct Args {
    /// The input graph, in GML format.
    input: String,

    /// The output CSV file.
    output: String,

    /// Accuracy parameter of the randomized approximation; values outside
    /// (0, 1] fall back to the default of 0.01.
    epsilon: f64,

    /// Freezing-threshold multiplier of the adaptive approximation; values
    /// below 2 fall back to the default of 5.
    c_thr: f64,

    /// Pivot denominator of the adaptive approximation; values below 20
    /// fall back to the default of 20.
    sup: f64,

    /// Seed for the random number generator; omit to seed from entropy.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()
        .unwrap();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        error!("{:?}: {}", e.kind, e.message);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let graph = gml::read_gml_file(&args.input)?;
    info!(
        "read {}: {} vertices, {} edges, directed: {}, weights in [{}, {}]",
        args.input,
        graph.number_of_nodes(),
        graph.number_of_edges(),
        graph.is_directed(),
        graph.weight_min(),
        graph.weight_max()
    );
    let (epsilon, c_thr, sup) = validated_parameters(args);

    let start = Instant::now();
    let brandes = betweenness::betweenness_centrality(&graph)?;
    let brandes_elapsed = start.elapsed();
    info!(
        "betweenness centrality took {:.3}s",
        brandes_elapsed.as_secs_f64()
    );

    let start = Instant::now();
    let sampled = randomized::randomized_betweenness_centrality(&graph, epsilon, args.seed)?;
    let sampled_elapsed = start.elapsed();
    info!(
        "randomized betweenness took {:.3}s",
        sampled_elapsed.as_secs_f64()
    );

    let start = Instant::now();
    let pivoted = adaptive::adaptive_betweenness_centrality(&graph, c_thr, sup, args.seed)?;
    let pivoted_elapsed = start.elapsed();
    info!(
        "adaptive-sampling betweenness took {:.3}s",
        pivoted_elapsed.as_secs_f64()
    );

    let mut centrality_report = CentralityReport::new(&args.input, &graph);
    centrality_report.parameters = vec![
        ("epsilon".to_string(), format!("{:.6}", epsilon)),
        ("c-threshold".to_string(), format!("{:.6}", c_thr)),
        ("pivots".to_string(), format!("{:.6}", sup)),
    ];
    centrality_report.runs = vec![
        AlgorithmRun::new("Brandes", brandes, brandes_elapsed),
        AlgorithmRun::new("RandBrandes", sampled, sampled_elapsed),
        AlgorithmRun::new("AdaptiveSample", pivoted, pivoted_elapsed),
    ];
    report::write_csv_file(&args.output, &centrality_report)
}

/// Replaces out-of-range parameters by their defaults, logging each
/// substitution.
fn validated_parameters(args: &Args) -> (f64, f64, f64) {
    let mut epsilon = args.epsilon;
    if !(epsilon > 0.0 && epsilon <= 1.0) {
        epsilon = 0.01;
        warn!(
            "epsilon {} is outside (0, 1]; using the default of {}",
            args.epsilon, epsilon
        );
    }
    let mut c_thr = args.c_thr;
    if c_thr < 2.0 {
        c_thr = 5.0;
        warn!(
            "c_thr {} is below 2; using the default of {}",
            args.c_thr, c_thr
        );
    }
    let mut sup = args.sup;
    if sup < 20.0 {
        sup = 20.0;
        warn!("sup {} is below 20; using the default of {}", args.sup, sup);
    }
    (epsilon, c_thr, sup)
}
