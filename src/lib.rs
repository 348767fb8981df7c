#[doc = include_str!("../README.md")]
#[macro_use]
extern crate doc_comment;
doc_comment!(include_str!("../README.md"));

mod edge;
pub use edge::Edge;

mod error;
pub use error::{Error, ErrorKind};

mod graph;
pub use graph::{AdjacentEdge, Graph};

mod heap;
pub use heap::VertexHeap;

pub mod algorithms;
pub mod generators;
pub mod readwrite;
