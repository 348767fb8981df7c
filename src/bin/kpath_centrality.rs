use centrars::algorithms::centrality::{betweenness, kpath};
use centrars::readwrite::gml;
use centrars::readwrite::report::{self, AlgorithmRun, CentralityReport};
use centrars::{Error, Graph};
use clap::Parser;
use log::{error, info, warn};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Compute exact Brandes betweenness and approximate k-path centrality \
    for every vertex of a GML graph and write the scores to CSV.")]
struct Args {
    /// The input graph, in GML format.
    input: String,

    /// The output CSV file.
    output: String,

    /// The k-path walk-count exponent; values outside [-0.5, 0.5] fall back
    /// to the default of 0.
    alpha: f64,

    /// The maximum k-path walk length; values outside (0, n] fall back to
    /// the default of round(ln(n + m)).
    plength: i64,

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
    let (alpha, plength) = validated_parameters(args, &graph);

    let start = Instant::now();
    let brandes = betweenness::betweenness_centrality(&graph)?;
    let brandes_elapsed = start.elapsed();
    info!(
        "betweenness centrality took {:.3}s",
        brandes_elapsed.as_secs_f64()
    );

    let start = Instant::now();
    let nov = kpath::kpath_centrality(&graph, alpha, plength, args.seed)?;
    let kpath_elapsed = start.elapsed();
    info!("k-path centrality took {:.3}s", kpath_elapsed.as_secs_f64());

    let mut centrality_report = CentralityReport::new(&args.input, &graph);
    centrality_report.parameters = vec![
        ("alpha".to_string(), format!("{:.6}", alpha)),
        ("plength".to_string(), plength.to_string()),
    ];
    centrality_report.runs = vec![
        AlgorithmRun::new("Brandes", brandes, brandes_elapsed),
        AlgorithmRun::new("KPath", nov, kpath_elapsed),
    ];
    report::write_csv_file(&args.output, &centrality_report)
}

/// Replaces out-of-range parameters by their defaults, logging each
/// substitution.
fn validated_parameters(args: &Args, graph: &Graph) -> (f64, u64) {
    let mut alpha = args.alpha;
    if !(-0.5..=0.5).contains(&alpha) {
        alpha = 0.0;
        warn!(
            "alpha {} is outside [-0.5, 0.5]; using the default of {}",
            args.alpha, alpha
        );
    }

    let num_nodes = graph.number_of_nodes() as i64;
    let mut plength = args.plength;
    if plength <= 0 || plength > num_nodes {
        let exact = ((graph.number_of_nodes() + graph.number_of_edges()) as f64).ln();
        plength = exact as i64;
        if exact - plength as f64 >= 0.5 {
            plength += 1;
        }
        plength = plength.clamp(1, std::cmp::max(num_nodes, 1));
        warn!(
            "plength {} is outside (0, {}]; using the default of {}",
            args.plength, num_nodes, plength
        );
    }
    (alpha, plength as u64)
}
