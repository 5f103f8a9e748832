/// Structural problems found while validating a [`GraphData`](crate::ir::GraphData).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidGraph {
    #[error("edge {edge} references node {node}, but the graph has {node_count} nodes")]
    EdgeOutOfRange {
        edge: usize,
        node: usize,
        node_count: usize,
    },
    #[error("edge {edge} connects node {node} to itself")]
    SelfLoop { edge: usize, node: usize },
    #[error("node {node} has a non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { node: usize, x: f64, y: f64 },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid graph: {0}")]
    InvalidGraph(#[from] InvalidGraph),
    #[error("node index {index} is out of range for a graph with {node_count} nodes")]
    IndexOutOfRange { index: usize, node_count: usize },
    #[error("viewport {width}x{height} must have positive, finite dimensions")]
    InvalidViewport { width: f64, height: f64 },
    #[error("padding ratio must be a non-negative number, got {ratio}")]
    InvalidPadding { ratio: f64 },
    #[error("node extent {width}x{height} is too large to scale")]
    UnboundedExtent { width: f64, height: f64 },
    #[error("no node is labelled {label:?}")]
    UnknownLabel { label: String },
    #[error("please select both start and end points")]
    MissingSelection,
}

pub type Result<T> = std::result::Result<T, Error>;
