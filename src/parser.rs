use crate::graph::Graph;
use crate::ir::GraphData;
use anyhow::{Context, Result};
use std::path::Path;

/// Parses the extractor's `{ nodes, lines }` document.
///
/// Strict JSON is tried first; hand-edited fixtures with comments or
/// trailing commas are accepted through JSON5.
pub fn parse_graph_data(input: &str) -> Result<GraphData> {
    let trimmed = input.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        anyhow::bail!("graph document is empty");
    }
    match serde_json::from_str::<GraphData>(trimmed) {
        Ok(data) => Ok(data),
        Err(json_err) => json5::from_str::<GraphData>(trimmed).map_err(|json5_err| {
            anyhow::anyhow!("invalid graph document: {json_err} (JSON5: {json5_err})")
        }),
    }
}

/// Parses and validates a graph document.
pub fn parse_graph(input: &str) -> Result<Graph> {
    let data = parse_graph_data(input)?;
    let graph = Graph::try_from(data)?;
    Ok(graph)
}

pub fn load_graph(path: &Path) -> Result<Graph> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read graph {}", path.display()))?;
    parse_graph(&contents).with_context(|| format!("failed to load graph {}", path.display()))
}
