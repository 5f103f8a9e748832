use crate::config::load_config;
use crate::error::Error;
use crate::graph::{Graph, find_path};
use crate::parser::parse_graph;
use crate::report::{NO_ROUTE_MESSAGE, RouteReport, write_report};
use crate::viewport::{Zoom, scale_to_viewport_with};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "fpnav",
    version,
    about = "Shortest walking routes over floor-plan graphs"
)]
pub struct Args {
    /// Graph file ({ nodes, lines } JSON) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Report file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON file (viewport size, padding, zoom limits)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Start point: node index or label
    #[arg(short = 'f', long = "from", requires = "to")]
    pub from: Option<String>,

    /// Destination: node index or label
    #[arg(short = 't', long = "to", requires = "from")]
    pub to: Option<String>,

    /// Viewport width
    #[arg(short = 'w', long = "width")]
    pub width: Option<f64>,

    /// Viewport height
    #[arg(short = 'H', long = "height")]
    pub height: Option<f64>,

    /// Zoom factor applied after fitting
    #[arg(short = 'z', long = "zoom")]
    pub zoom: Option<f64>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.viewport.width = width;
    }
    if let Some(height) = args.height {
        config.viewport.height = height;
    }
    if let Some(zoom) = args.zoom {
        config.viewport.zoom = zoom;
    }

    let input = read_input(args.input.as_deref())?;
    let graph = parse_graph(&input)?;

    let request = match (args.from.as_deref(), args.to.as_deref()) {
        (Some(from), Some(to)) => Some((
            resolve_node(&graph, from)?,
            resolve_node(&graph, to)?,
        )),
        _ => None,
    };
    let route = match request {
        Some((start, end)) => find_path(&graph, start, end)?,
        None => None,
    };
    if request.is_some() && route.is_none() {
        eprintln!("{NO_ROUTE_MESSAGE}");
    }

    let viewport = &config.viewport;
    let zoom = Zoom::from_config(viewport);
    let scaled = scale_to_viewport_with(graph.nodes(), viewport.width, viewport.height, viewport)?
        .zoomed(zoom);
    let report = RouteReport::new(
        &graph,
        &scaled,
        (viewport.width, viewport.height),
        zoom,
        request,
        route.as_ref(),
    );
    write_report(args.output.as_deref(), &report)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return std::fs::read_to_string(path)
                .with_context(|| format!("failed to read graph {}", path.display()));
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Accepts a zero-based node index or a node label.
fn resolve_node(graph: &Graph, selector: &str) -> Result<usize, Error> {
    let selector = selector.trim();
    if let Ok(index) = selector.parse::<usize>() {
        graph.check_index(index)?;
        return Ok(index);
    }
    graph.find_by_label(selector).ok_or_else(|| Error::UnknownLabel {
        label: selector.to_string(),
    })
}
