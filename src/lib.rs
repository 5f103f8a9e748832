//! Shortest walking routes and viewport scaling for floor-plan graphs.
//!
//! A floor plan arrives as [`GraphData`]: walkable points plus undirected
//! `[from, to]` connections. [`Graph`] validates it once; [`find_path`] runs
//! a Dijkstra search over Euclidean edge lengths and [`scale_to_viewport`]
//! fits the same nodes into a drawing area for rendering.

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod ir;
pub mod parser;
pub mod report;
pub mod viewport;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, ViewportConfig, load_config};
pub use error::{Error, InvalidGraph, Result};
pub use graph::{AdjacencyIndex, Graph, PathRequest, PriorityQueue, Route, find_path, find_path_by_label};
pub use ir::{Edge, GraphData, Node};
pub use parser::{load_graph, parse_graph, parse_graph_data};
pub use viewport::{Bounds, ScaledGraph, ScaledNode, Zoom, scale_to_viewport, scale_to_viewport_with};
