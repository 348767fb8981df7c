use centrars::readwrite::gml;
use centrars::{Edge, Error, ErrorKind};
use clap::Parser;
use log::{error, info};
use nohash::IntSet;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(about = "Convert a plain text edge list with `source target weight` \
    lines into the GML graph format.")]
struct Args {
    /// The input edge list: one `source target weight` line per edge, the
    /// weight being optional and defaulting to 1.
    input: String,

    /// The output GML file.
    output: String,

    /// Mark the resulting graph as directed.
    #[arg(long)]
    directed: bool,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    source: usize,
    target: usize,
    weight: Option<f64>,
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
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .from_path(&args.input)
        .map_err(|e| get_read_error(&args.input, &e))?;

    // node records are emitted in order of first appearance, like the ids
    // of the incoming edge list
    let mut seen: IntSet<usize> = IntSet::default();
    let mut nodes: Vec<usize> = vec![];
    let mut edges: Vec<Edge> = vec![];
    for record in reader.deserialize::<EdgeRecord>() {
        let record = record.map_err(|e| get_read_error(&args.input, &e))?;
        for id in [record.source, record.target] {
            if seen.insert(id) {
                nodes.push(id);
            }
        }
        edges.push(Edge::with_weight(
            record.source,
            record.target,
            record.weight.unwrap_or(1.0),
        ));
    }

    gml::write_gml_file(&args.output, &nodes, &edges, args.directed)?;
    info!(
        "wrote {}: {} nodes, {} edges",
        args.output,
        nodes.len(),
        edges.len()
    );
    Ok(())
}

fn get_read_error(file: &str, error: &dyn std::fmt::Display) -> Error {
    Error {
        kind: ErrorKind::ReadError,
        message: format!("could not read the edge list \"{}\": {}", file, error),
    }
}
