use floorplan_nav::{Graph, Node, ViewportConfig, Zoom, find_path, parse_graph, scale_to_viewport_with};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScaleOptions {
    padding_ratio: Option<f64>,
    zoom: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PathResponse {
    path: Option<Vec<usize>>,
    length: Option<f64>,
    error: Option<String>,
}

fn to_js(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn route_json(graph: &Graph, start: usize, end: usize) -> Result<String, String> {
    let route = find_path(graph, start, end).map_err(|error| error.to_string())?;
    let response = match route {
        Some(route) => PathResponse {
            length: Some(route.length()),
            path: Some(route.into_nodes()),
            error: None,
        },
        None => PathResponse {
            path: None,
            length: None,
            error: Some("No path found between the selected points".to_string()),
        },
    };
    serde_json::to_string(&response).map_err(|error| error.to_string())
}

fn scale_json(
    nodes: &[Node],
    width: f64,
    height: f64,
    options: ScaleOptions,
) -> Result<String, String> {
    let mut config = ViewportConfig::default();
    if let Some(ratio) = options.padding_ratio {
        config.padding_ratio = ratio;
    }
    let zoom = options
        .zoom
        .map(|value| Zoom::clamped(value, config.min_zoom, config.max_zoom))
        .unwrap_or_default();
    let scaled = scale_to_viewport_with(nodes, width, height, &config)
        .map_err(|error| error.to_string())?
        .zoomed(zoom);
    serde_json::to_string(&scaled).map_err(|error| error.to_string())
}

/// `graph_json` is the `{ nodes, lines }` document. Resolves to
/// `{ path, length, error }`; `path` is null when the points are not connected.
#[wasm_bindgen]
pub fn find_path_json(graph_json: &str, start: usize, end: usize) -> Result<String, JsValue> {
    let graph = parse_graph(graph_json).map_err(|error| to_js(format!("{error:#}")))?;
    route_json(&graph, start, end).map_err(to_js)
}

/// Returns `{ scaledNodes, bounds, baseScale }` for a JSON array of nodes.
#[wasm_bindgen]
pub fn scale_to_viewport_json(
    nodes_json: &str,
    width: f64,
    height: f64,
    options_json: Option<String>,
) -> Result<String, JsValue> {
    let nodes: Vec<Node> = serde_json::from_str(nodes_json).map_err(to_js)?;
    let options = match options_json {
        Some(raw) => serde_json::from_str::<ScaleOptions>(&raw).map_err(to_js)?,
        None => ScaleOptions::default(),
    };
    scale_json(&nodes, width, height, options).map_err(to_js)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAN: &str = r#"{
        "nodes": [{"x":0,"y":0},{"x":1,"y":0},{"x":0,"y":1},{"x":1,"y":1},{"x":5,"y":5}],
        "lines": [[0,1],[1,3],[0,2],[2,3]]
    }"#;

    #[test]
    fn reports_route_and_missing_route() {
        let graph = parse_graph(PLAN).unwrap();
        let found: serde_json::Value = serde_json::from_str(&route_json(&graph, 0, 3).unwrap()).unwrap();
        assert_eq!(found["path"], serde_json::json!([0, 1, 3]));
        assert_eq!(found["length"], 2.0);

        let missing: serde_json::Value =
            serde_json::from_str(&route_json(&graph, 0, 4).unwrap()).unwrap();
        assert!(missing["path"].is_null());
        assert!(missing["error"].is_string());

        assert!(route_json(&graph, 0, 9).is_err());
    }

    #[test]
    fn scales_with_camel_case_fields() {
        let nodes = vec![Node::new(0.0, 0.0), Node::new(10.0, 10.0)];
        let options = ScaleOptions {
            padding_ratio: Some(0.0),
            zoom: Some(2.0),
        };
        let out: serde_json::Value =
            serde_json::from_str(&scale_json(&nodes, 100.0, 100.0, options).unwrap()).unwrap();
        assert_eq!(out["baseScale"], 20.0);
        assert_eq!(out["scaledNodes"][1]["scaledX"], 200.0);
        assert_eq!(out["bounds"]["maxX"], 10.0);
    }

    #[test]
    fn rejects_negative_padding_ratio() {
        let nodes = vec![Node::new(0.0, 0.0), Node::new(10.0, 10.0)];
        let options = ScaleOptions {
            padding_ratio: Some(-0.4),
            zoom: None,
        };
        let err = scale_json(&nodes, 100.0, 100.0, options).unwrap_err();
        assert!(err.contains("padding ratio"));
    }
}
