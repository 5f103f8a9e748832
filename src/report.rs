use crate::graph::{Graph, Route};
use crate::viewport::{Bounds, ScaledGraph, Zoom};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub const NO_ROUTE_MESSAGE: &str = "No path found between the selected points";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteReport {
    pub node_count: usize,
    pub edge_count: usize,
    pub viewport: ViewportDump,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestDump>,
    pub route: Option<RouteDump>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub nodes: Vec<NodeDump>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportDump {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
    pub base_scale: Option<f64>,
    pub bounds: Option<Bounds>,
}

#[derive(Debug, Serialize)]
pub struct RequestDump {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDump {
    pub nodes: Vec<usize>,
    pub labels: Vec<String>,
    pub hops: usize,
    pub length: f64,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDump {
    pub index: usize,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub scaled_x: f64,
    pub scaled_y: f64,
    pub on_route: bool,
}

impl RouteReport {
    /// Builds the report. `request` is the resolved `(start, end)` pair, if
    /// one was asked for, and `route` its outcome.
    pub fn new(
        graph: &Graph,
        scaled: &ScaledGraph,
        viewport: (f64, f64),
        zoom: Zoom,
        request: Option<(usize, usize)>,
        route: Option<&Route>,
    ) -> Self {
        let nodes = scaled
            .scaled_nodes
            .iter()
            .enumerate()
            .map(|(index, scaled_node)| NodeDump {
                index,
                label: scaled_node.node.display_label(index),
                x: scaled_node.node.x,
                y: scaled_node.node.y,
                scaled_x: scaled_node.scaled_x,
                scaled_y: scaled_node.scaled_y,
                on_route: route.is_some_and(|r| r.contains(index)),
            })
            .collect();

        let route_dump = route.map(|route| RouteDump {
            nodes: route.nodes().to_vec(),
            labels: route
                .nodes()
                .iter()
                .map(|&idx| graph.nodes()[idx].display_label(idx))
                .collect(),
            hops: route.hops(),
            length: route.length(),
            points: scaled
                .route_points(route)
                .unwrap_or_default()
                .into_iter()
                .map(|(x, y)| [x, y])
                .collect(),
        });

        let message = match (request, route) {
            (Some(_), None) => Some(NO_ROUTE_MESSAGE.to_string()),
            _ => None,
        };

        RouteReport {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            viewport: ViewportDump {
                width: viewport.0,
                height: viewport.1,
                zoom: zoom.value(),
                base_scale: scaled.base_scale,
                bounds: scaled.bounds,
            },
            request: request.map(|(start, end)| RequestDump { start, end }),
            route: route_dump,
            message,
            nodes,
        }
    }
}

pub fn write_report(path: Option<&Path>, report: &RouteReport) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, report)?;
        }
        None => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::find_path;
    use crate::ir::{Edge, Node};
    use crate::viewport::scale_to_viewport;

    fn corridor() -> Graph {
        Graph::new(
            vec![
                Node::labelled(0.0, 0.0, "Entrance"),
                Node::new(10.0, 0.0),
                Node::labelled(20.0, 0.0, "Hall B"),
                Node::new(0.0, 30.0),
            ],
            vec![Edge::new(0, 1), Edge::new(1, 2)],
        )
        .unwrap()
    }

    #[test]
    fn reports_route_with_labels_and_points() {
        let graph = corridor();
        let scaled = scale_to_viewport(graph.nodes(), 800.0, 600.0).unwrap();
        let route = find_path(&graph, 0, 2).unwrap();
        let report = RouteReport::new(
            &graph,
            &scaled,
            (800.0, 600.0),
            Zoom::IDENTITY,
            Some((0, 2)),
            route.as_ref(),
        );
        let dump = report.route.as_ref().unwrap();
        assert_eq!(dump.labels, vec!["Entrance", "Point 2", "Hall B"]);
        assert_eq!(dump.points.len(), 3);
        assert_eq!(report.message, None);
        assert!(report.nodes[1].on_route);
        assert!(!report.nodes[3].on_route);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["route"]["length"], 20.0);
        assert!(json["nodes"][0].get("scaledX").is_some());
    }

    #[test]
    fn unreachable_request_carries_message() {
        let graph = corridor();
        let scaled = scale_to_viewport(graph.nodes(), 800.0, 600.0).unwrap();
        let route = find_path(&graph, 0, 3).unwrap();
        assert!(route.is_none());
        let report = RouteReport::new(
            &graph,
            &scaled,
            (800.0, 600.0),
            Zoom::IDENTITY,
            Some((0, 3)),
            None,
        );
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["route"].is_null());
        assert_eq!(json["message"], NO_ROUTE_MESSAGE);
    }
}
