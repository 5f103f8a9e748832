use serde::{Deserialize, Serialize};

/// A walkable point extracted from the floor plan, in image coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Node {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, label: None }
    }

    pub fn labelled(x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            x,
            y,
            label: Some(label.into()),
        }
    }

    /// Name shown in point pickers; unlabelled points are numbered from 1.
    pub fn display_label(&self, index: usize) -> String {
        match self.label.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => format!("Point {}", index + 1),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn distance_to(&self, other: &Node) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Undirected connection between two node indices, serialized as `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

impl Edge {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// The opposite endpoint, if `node` is one of this edge's ends.
    pub fn other(&self, node: usize) -> Option<usize> {
        if self.from == node {
            Some(self.to)
        } else if self.to == node {
            Some(self.from)
        } else {
            None
        }
    }

    pub fn connects(&self, a: usize, b: usize) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

impl From<[usize; 2]> for Edge {
    fn from([from, to]: [usize; 2]) -> Self {
        Self { from, to }
    }
}

impl From<Edge> for [usize; 2] {
    fn from(edge: Edge) -> Self {
        [edge.from, edge.to]
    }
}

impl From<(usize, usize)> for Edge {
    fn from((from, to): (usize, usize)) -> Self {
        Self { from, to }
    }
}

/// Interchange shape produced by the image-to-graph extractor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub lines: Vec<Edge>,
}

impl GraphData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_node(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    pub fn connect(&mut self, from: usize, to: usize) {
        self.lines.push(Edge::new(from, to));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_use_pair_arrays_on_the_wire() {
        let data: GraphData = serde_json::from_str(
            r#"{"nodes":[{"x":0,"y":0,"label":"Entrance"},{"x":3,"y":4}],"lines":[[0,1]]}"#,
        )
        .unwrap();
        assert_eq!(data.lines, vec![Edge::new(0, 1)]);
        assert_eq!(data.nodes[0].label.as_deref(), Some("Entrance"));
        assert_eq!(data.nodes[1].label, None);

        let out = serde_json::to_string(&data).unwrap();
        assert!(out.contains(r#""lines":[[0,1]]"#));
        assert!(!out.contains("null"));
    }

    #[test]
    fn display_label_falls_back_to_point_number() {
        assert_eq!(Node::labelled(0.0, 0.0, "Hall A").display_label(0), "Hall A");
        assert_eq!(Node::new(0.0, 0.0).display_label(4), "Point 5");
        assert_eq!(Node::labelled(0.0, 0.0, "  ").display_label(0), "Point 1");
    }

    #[test]
    fn edge_other_endpoint() {
        let edge = Edge::new(2, 7);
        assert_eq!(edge.other(2), Some(7));
        assert_eq!(edge.other(7), Some(2));
        assert_eq!(edge.other(3), None);
        assert!(edge.connects(7, 2));
    }

    #[test]
    fn node_distance_is_euclidean() {
        let a = Node::new(0.0, 0.0);
        let b = Node::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }
}
