use crate::{Edge, Error, ErrorKind, Graph};
use nohash::IntMap;
use std::fs;
use std::fs::File;
use std::io::Write;
use std::iter::Peekable;
use std::str::SplitWhitespace;

/**
Creates a graph from the contents of a GML-formatted file.

The file must contain a `graph [ ... ]` block with `node [ id N ]`
records and `edge [ source A target B value W ]` records; see
[read_gml_string](fn.read_gml_string.html) for the details.

# Examples

```ignore
use centrars::readwrite;
let graph = readwrite::gml::read_gml_file("/some/file.gml");
```
*/
pub fn read_gml_file(file: &str) -> Result<Graph, Error> {
    let string = fs::read_to_string(file).map_err(|e| Error {
        kind: ErrorKind::ReadError,
        message: format!("could not read the file \"{}\": {}", file, e),
    })?;
    read_gml_string(&string)
}

/**
Creates a graph from a GML-formatted string.

Inside the `graph [ ... ]` block the keys `directed 0|1` (defaulting to
undirected), `node [ id N ]` and `edge [ source A target B value W ]`
are honored; any other key, including quoted labels and nested blocks,
is skipped. Edge `value`s are the weights and default to `1`. Node ids
are arbitrary non-negative integers and are remapped to `[0, n)` in
record order; an edge referencing an id without a node record is an
error. For undirected graphs every edge is stored in both directions.

# Examples

```
use centrars::readwrite;
let string = "graph [ directed 0 node [ id 0 ] node [ id 1 ] edge [ source 0 target 1 value 2.5 ] ]";
let graph = readwrite::gml::read_gml_string(string).unwrap();
assert_eq!(graph.number_of_nodes(), 2);
assert_eq!(graph.weight_max(), 2.5);
```
*/
pub fn read_gml_string(string: &str) -> Result<Graph, Error> {
    let mut tokens = string.split_whitespace().peekable();
    loop {
        match tokens.next() {
            None => {
                return Err(get_read_error("no `graph` block was found"));
            }
            Some("graph") => {
                if tokens.peek() == Some(&"[") {
                    break;
                }
            }
            Some(_) => {}
        }
    }
    tokens.next(); // the opening bracket

    let mut directed = false;
    let mut node_indexes: IntMap<usize, usize> = IntMap::default();
    let mut edge_records: Vec<(usize, usize, f64)> = vec![];
    loop {
        match tokens.next() {
            None => {
                return Err(get_read_error("the `graph` block is not closed"));
            }
            Some("]") => {
                break;
            }
            Some("directed") => {
                directed = match tokens.next() {
                    Some("0") => false,
                    Some("1") => true,
                    other => {
                        return Err(get_read_error(&format!(
                            "`directed` must be 0 or 1, found {:?}",
                            other
                        )));
                    }
                };
            }
            Some("node") => {
                let id = read_node_record(&mut tokens)?;
                let next_index = node_indexes.len();
                node_indexes.entry(id).or_insert(next_index);
            }
            Some("edge") => {
                edge_records.push(read_edge_record(&mut tokens)?);
            }
            Some(_) => {
                skip_value(&mut tokens)?;
            }
        }
    }

    let mut edges = Vec::with_capacity(edge_records.len());
    for (source, target, weight) in edge_records {
        let u = *node_indexes.get(&source).ok_or_else(|| {
            get_read_error(&format!("an edge references the unknown node id {}", source))
        })?;
        let v = *node_indexes.get(&target).ok_or_else(|| {
            get_read_error(&format!("an edge references the unknown node id {}", target))
        })?;
        edges.push(Edge::with_weight(u, v, weight));
    }
    Graph::from_edges(node_indexes.len(), edges, directed)
}

/**
Writes a graph, given as raw node ids and edges between them, to a
GML-formatted file. The inverse of [read_gml_file](fn.read_gml_file.html).

# Examples

```ignore
use centrars::{readwrite, Edge};
readwrite::gml::write_gml_file("/some/file.gml", &[1, 2], &[Edge::new(1, 2)], false);
```
*/
pub fn write_gml_file(file: &str, nodes: &[usize], edges: &[Edge], directed: bool) -> Result<(), Error> {
    let string = write_gml_string(nodes, edges, directed);
    let mut file_handle = File::create(file).map_err(|e| Error {
        kind: ErrorKind::WriteError,
        message: format!("could not create the file \"{}\": {}", file, e),
    })?;
    file_handle.write_all(string.as_bytes()).map_err(|e| Error {
        kind: ErrorKind::WriteError,
        message: format!("could not write the file \"{}\": {}", file, e),
    })
}

/// Renders raw node ids and the edges between them as a GML string.
pub fn write_gml_string(nodes: &[usize], edges: &[Edge], directed: bool) -> String {
    let mut string = String::new();
    string.push_str("graph\n[\n");
    string.push_str(&format!("  directed {}\n", directed as u8));
    for id in nodes {
        string.push_str(&format!("  node\n  [\n    id {}\n  ]\n", id));
    }
    for edge in edges {
        string.push_str(&format!(
            "  edge\n  [\n    source {}\n    target {}\n    value {}\n  ]\n",
            edge.u, edge.v, edge.weight
        ));
    }
    string.push_str("]\n");
    string
}

fn read_node_record(tokens: &mut Peekable<SplitWhitespace>) -> Result<usize, Error> {
    expect_token(tokens, "[")?;
    let mut id = None;
    loop {
        match tokens.next() {
            None => {
                return Err(get_read_error("a `node` record is not closed"));
            }
            Some("]") => {
                break;
            }
            Some("id") => {
                id = Some(parse_int(tokens.next(), "id")?);
            }
            Some(_) => {
                skip_value(tokens)?;
            }
        }
    }
    id.ok_or_else(|| get_read_error("a `node` record does not have an `id` key"))
}

fn read_edge_record(tokens: &mut Peekable<SplitWhitespace>) -> Result<(usize, usize, f64), Error> {
    expect_token(tokens, "[")?;
    let mut source = None;
    let mut target = None;
    let mut weight = 1.0;
    loop {
        match tokens.next() {
            None => {
                return Err(get_read_error("an `edge` record is not closed"));
            }
            Some("]") => {
                break;
            }
            Some("source") => {
                source = Some(parse_int(tokens.next(), "source")?);
            }
            Some("target") => {
                target = Some(parse_int(tokens.next(), "target")?);
            }
            Some("value") => {
                weight = parse_float(tokens.next(), "value")?;
            }
            Some(_) => {
                skip_value(tokens)?;
            }
        }
    }
    let source =
        source.ok_or_else(|| get_read_error("an `edge` record does not have a `source` key"))?;
    let target =
        target.ok_or_else(|| get_read_error("an `edge` record does not have a `target` key"))?;
    Ok((source, target, weight))
}

/// Skips the value of an unhandled key: a bracketed block, a quoted
/// string (possibly containing whitespace) or a single token.
fn skip_value(tokens: &mut Peekable<SplitWhitespace>) -> Result<(), Error> {
    match tokens.next() {
        None => Err(get_read_error("a key has no value")),
        Some("[") => {
            let mut depth = 1;
            for token in tokens.by_ref() {
                match token {
                    "[" => depth += 1,
                    "]" => {
                        depth -= 1;
                        if depth == 0 {
                            return Ok(());
                        }
                    }
                    _ => {}
                }
            }
            Err(get_read_error("a nested block is not closed"))
        }
        Some(token) if token.starts_with('"') && !ends_quoted(token) => {
            for token in tokens.by_ref() {
                if ends_quoted(token) {
                    return Ok(());
                }
            }
            Err(get_read_error("a quoted string is not closed"))
        }
        Some(_) => Ok(()),
    }
}

fn ends_quoted(token: &str) -> bool {
    token.len() > 1 && token.ends_with('"')
}

fn expect_token(tokens: &mut Peekable<SplitWhitespace>, expected: &str) -> Result<(), Error> {
    match tokens.next() {
        Some(token) if token == expected => Ok(()),
        other => Err(get_read_error(&format!(
            "expected `{}`, found {:?}",
            expected, other
        ))),
    }
}

fn parse_int(token: Option<&str>, key: &str) -> Result<usize, Error> {
    token
        .and_then(|t| t.parse::<usize>().ok())
        .ok_or_else(|| get_read_error(&format!("`{}` must be a non-negative integer", key)))
}

fn parse_float(token: Option<&str>, key: &str) -> Result<f64, Error> {
    token
        .and_then(|t| t.parse::<f64>().ok())
        .ok_or_else(|| get_read_error(&format!("`{}` must be a number", key)))
}

fn get_read_error(message: &str) -> Error {
    Error {
        kind: ErrorKind::ReadError,
        message: message.to_string(),
    }
}
