#[derive(Clone, Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input file could not be opened or did not parse as a graph.
    ReadError,
    /// The output file could not be written.
    WriteError,
    /// An edge references a vertex outside `[0, n)`.
    EdgeOutOfRange,
    /// An edge weight is negative, NaN or infinite.
    InvalidWeight,
    /// A caller-supplied parameter is outside its valid range.
    InvalidArgument,
    /// A finalized shortest-path distance was improved afterwards; this can
    /// only happen when some edge weight is negative.
    ContradictoryPaths,
    /// A priority-queue operation was used with an absent handle or a
    /// non-decreasing key.
    InvalidKey,
    /// The graph has no vertex with outgoing edges to start a walk from.
    NoUsableVertex,
}
