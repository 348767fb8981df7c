use crate::{Error, ErrorKind, Graph};
use std::time::Duration;

/// One algorithm's per-vertex scores together with its wall-clock time.
pub struct AlgorithmRun {
    pub name: String,
    pub scores: Vec<f64>,
    pub elapsed: Duration,
}

impl AlgorithmRun {
    pub fn new(name: &str, scores: Vec<f64>, elapsed: Duration) -> AlgorithmRun {
        AlgorithmRun {
            name: name.to_string(),
            scores,
            elapsed,
        }
    }
}

/**
Everything one invocation writes to its output CSV: the input file, the
graph's shape, the effective parameters and one [AlgorithmRun] per
computed centrality.
*/
pub struct CentralityReport {
    pub input_file: String,
    pub num_nodes: usize,
    pub num_edges: usize,
    pub directed: bool,
    pub weight_max: f64,
    pub weight_min: f64,
    pub parameters: Vec<(String, String)>,
    pub runs: Vec<AlgorithmRun>,
}

impl CentralityReport {
    pub fn new(input_file: &str, graph: &Graph) -> CentralityReport {
        CentralityReport {
            input_file: input_file.to_string(),
            num_nodes: graph.number_of_nodes(),
            num_edges: graph.number_of_edges(),
            directed: graph.is_directed(),
            weight_max: graph.weight_max(),
            weight_min: graph.weight_min(),
            parameters: vec![],
            runs: vec![],
        }
    }
}

/**
Writes a centrality report as CSV: metadata, parameter and timing rows,
then a header row and one row per vertex in ascending order.

# Examples

```ignore
use centrars::readwrite::report;
report::write_csv_file("/some/file.csv", &centrality_report);
```
*/
pub fn write_csv_file(file: &str, report: &CentralityReport) -> Result<(), Error> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(file)
        .map_err(|e| get_write_error(file, &e))?;

    let metadata = vec![
        "Input file name:".to_string(),
        report.input_file.clone(),
        "nvertices:".to_string(),
        report.num_nodes.to_string(),
        "nedges:".to_string(),
        report.num_edges.to_string(),
        "directed:".to_string(),
        (report.directed as u8).to_string(),
        "max_weight:".to_string(),
        format!("{:.6}", report.weight_max),
        "min_weight:".to_string(),
        format!("{:.6}", report.weight_min),
    ];
    writer
        .write_record(&metadata)
        .map_err(|e| get_write_error(file, &e))?;

    let mut parameters = vec![];
    for (name, value) in &report.parameters {
        parameters.push(format!("{}:", name));
        parameters.push(value.clone());
    }
    writer
        .write_record(&parameters)
        .map_err(|e| get_write_error(file, &e))?;

    let mut timings = vec![];
    for run in &report.runs {
        timings.push(format!("{} time:", run.name));
        timings.push(format!("{:.6}", run.elapsed.as_secs_f64()));
    }
    writer
        .write_record(&timings)
        .map_err(|e| get_write_error(file, &e))?;

    let mut header = vec!["Vertex".to_string()];
    header.extend(report.runs.iter().map(|run| run.name.clone()));
    writer
        .write_record(&header)
        .map_err(|e| get_write_error(file, &e))?;

    for vertex in 0..report.num_nodes {
        let mut row = vec![vertex.to_string()];
        row.extend(
            report
                .runs
                .iter()
                .map(|run| format!("{:.6}", run.scores[vertex])),
        );
        writer
            .write_record(&row)
            .map_err(|e| get_write_error(file, &e))?;
    }
    writer.flush().map_err(|e| get_write_error(file, &e))
}

fn get_write_error(file: &str, error: &dyn std::fmt::Display) -> Error {
    Error {
        kind: ErrorKind::WriteError,
        message: format!("could not write the file \"{}\": {}", file, error),
    }
}
