use serde::Serialize;

use crate::graph::Route;
use crate::ir::{Edge, Node};

/// Axis-aligned box around a node set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Box enclosing every node, or `None` for an empty slice.
    pub fn from_nodes(nodes: &[Node]) -> Option<Self> {
        let (first, rest) = nodes.split_first()?;
        let mut bounds = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for node in rest {
            bounds.min_x = bounds.min_x.min(node.x);
            bounds.min_y = bounds.min_y.min(node.y);
            bounds.max_x = bounds.max_x.max(node.x);
            bounds.max_y = bounds.max_y.max(node.y);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Grows each axis by `ratio` of its own extent on both sides.
    /// A zero-extent axis stays a single coordinate.
    pub fn padded(&self, ratio: f64) -> Self {
        let pad_x = self.width() * ratio;
        let pad_y = self.height() * ratio;
        Bounds {
            min_x: self.min_x - pad_x,
            min_y: self.min_y - pad_y,
            max_x: self.max_x + pad_x,
            max_y: self.max_y + pad_y,
        }
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

/// A node together with its position in viewport space.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledNode {
    #[serde(flatten)]
    pub node: Node,
    pub scaled_x: f64,
    pub scaled_y: f64,
}

impl ScaledNode {
    pub fn point(&self) -> (f64, f64) {
        (self.scaled_x, self.scaled_y)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaledGraph {
    pub scaled_nodes: Vec<ScaledNode>,
    /// Padded bounds the transform was fitted to.
    pub bounds: Option<Bounds>,
    pub base_scale: Option<f64>,
}

impl ScaledGraph {
    pub fn is_empty(&self) -> bool {
        self.scaled_nodes.is_empty()
    }

    pub fn point(&self, index: usize) -> Option<(f64, f64)> {
        self.scaled_nodes.get(index).map(ScaledNode::point)
    }

    /// Polyline that highlights `route`. `None` if the route addresses a node
    /// this set does not contain.
    pub fn route_points(&self, route: &Route) -> Option<Vec<(f64, f64)>> {
        route.nodes().iter().map(|&idx| self.point(idx)).collect()
    }

    /// Line segments for every edge, skipping edges with unknown endpoints.
    pub fn edge_segments(&self, edges: &[Edge]) -> Vec<((f64, f64), (f64, f64))> {
        edges
            .iter()
            .filter_map(|edge| Some((self.point(edge.from)?, self.point(edge.to)?)))
            .collect()
    }

    /// Copy with every viewport coordinate multiplied by `zoom`.
    pub fn zoomed(&self, zoom: super::Zoom) -> Self {
        let factor = zoom.value();
        ScaledGraph {
            scaled_nodes: self
                .scaled_nodes
                .iter()
                .map(|scaled| ScaledNode {
                    node: scaled.node.clone(),
                    scaled_x: scaled.scaled_x * factor,
                    scaled_y: scaled.scaled_y * factor,
                })
                .collect(),
            bounds: self.bounds,
            base_scale: self.base_scale.map(|scale| scale * factor),
        }
    }
}
