mod adjacency;
mod path;
mod queue;

pub use adjacency::AdjacencyIndex;
pub use path::{PathRequest, Route, find_path, find_path_by_label};
pub use queue::PriorityQueue;

use crate::error::{Error, InvalidGraph, Result};
use crate::ir::{Edge, GraphData, Node};

/// Validated, read-only floor-plan graph.
///
/// Every edge endpoint is a valid node index, no edge loops back onto its
/// own node and all coordinates are finite. Duplicate edges are kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self> {
        for (idx, node) in nodes.iter().enumerate() {
            if !node.is_finite() {
                return Err(InvalidGraph::NonFiniteCoordinate {
                    node: idx,
                    x: node.x,
                    y: node.y,
                }
                .into());
            }
        }

        let node_count = nodes.len();
        for (idx, edge) in edges.iter().enumerate() {
            for node in [edge.from, edge.to] {
                if node >= node_count {
                    return Err(InvalidGraph::EdgeOutOfRange {
                        edge: idx,
                        node,
                        node_count,
                    }
                    .into());
                }
            }
            if edge.from == edge.to {
                return Err(InvalidGraph::SelfLoop {
                    edge: idx,
                    node: edge.from,
                }
                .into());
            }
        }

        Ok(Self { nodes, edges })
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.nodes.len() {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                node_count: self.nodes.len(),
            })
        }
    }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edges.iter().any(|edge| edge.connects(a, b))
    }

    /// Euclidean distance between two nodes. Panics on an invalid index.
    pub fn distance(&self, a: usize, b: usize) -> f64 {
        self.nodes[a].distance_to(&self.nodes[b])
    }

    /// Index of the first node whose label matches, preferring an exact match
    /// over a case-insensitive one.
    pub fn find_by_label(&self, label: &str) -> Option<usize> {
        let needle = label.trim();
        if needle.is_empty() {
            return None;
        }
        let labels = || {
            self.nodes
                .iter()
                .enumerate()
                .filter_map(|(idx, node)| node.label.as_deref().map(|l| (idx, l.trim())))
        };
        labels()
            .find(|(_, l)| *l == needle)
            .or_else(|| labels().find(|(_, l)| l.eq_ignore_ascii_case(needle)))
            .map(|(idx, _)| idx)
    }

    pub fn to_data(&self) -> GraphData {
        GraphData {
            nodes: self.nodes.clone(),
            lines: self.edges.clone(),
        }
    }
}

impl TryFrom<GraphData> for Graph {
    type Error = Error;

    fn try_from(data: GraphData) -> Result<Self> {
        Graph::new(data.nodes, data.lines)
    }
}
