use serde::Serialize;

use super::{AdjacencyIndex, Graph, PriorityQueue};
use crate::error::{Error, Result};

/// A connected walk through the graph, from `start()` to `end()`.
///
/// Never empty: a single-node route means the start is the destination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    nodes: Vec<usize>,
    length: f64,
}

impl Route {
    fn single(node: usize) -> Self {
        Self {
            nodes: vec![node],
            length: 0.0,
        }
    }

    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn start(&self) -> usize {
        self.nodes[0]
    }

    pub fn end(&self) -> usize {
        self.nodes[self.nodes.len() - 1]
    }

    /// Total Euclidean length of the walk.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_trivial(&self) -> bool {
        self.nodes.len() == 1
    }

    pub fn contains(&self, node: usize) -> bool {
        self.nodes.contains(&node)
    }

    /// Consecutive `(from, to)` pairs along the route.
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }
}

/// Shortest walking route between two node indices.
///
/// Returns `Ok(None)` when the two nodes lie in different components; an
/// out-of-range index is an error and no search is attempted.
pub fn find_path(graph: &Graph, start: usize, end: usize) -> Result<Option<Route>> {
    graph.check_index(start)?;
    graph.check_index(end)?;
    if start == end {
        return Ok(Some(Route::single(start)));
    }

    let node_count = graph.node_count();
    let adjacency = AdjacencyIndex::build(graph);
    let mut distance: Vec<Option<f64>> = vec![None; node_count];
    let mut previous: Vec<Option<usize>> = vec![None; node_count];
    let mut queue = PriorityQueue::with_capacity(node_count);

    distance[start] = Some(0.0);
    queue.enqueue(start, 0.0);

    tracing::debug!(
        start,
        end,
        nodes = node_count,
        edges = graph.edge_count(),
        "searching for route"
    );

    let mut settled = 0usize;
    while let Some((current, dist)) = queue.dequeue() {
        if current == end {
            break;
        }
        let Some(best) = distance[current] else {
            continue;
        };
        if dist > best {
            continue;
        }
        settled += 1;

        let from = &graph.nodes()[current];
        for &neighbor in adjacency.neighbors(current) {
            let candidate = best + from.distance_to(&graph.nodes()[neighbor]);
            let improves = match distance[neighbor] {
                Some(known) => candidate < known,
                None => true,
            };
            if improves {
                distance[neighbor] = Some(candidate);
                previous[neighbor] = Some(current);
                queue.enqueue(neighbor, candidate);
            }
        }
    }

    let Some(length) = distance[end] else {
        tracing::debug!(start, end, settled, "no route between nodes");
        return Ok(None);
    };

    let mut nodes = vec![end];
    let mut cur = end;
    while let Some(prev) = previous[cur] {
        nodes.push(prev);
        cur = prev;
    }
    nodes.reverse();

    tracing::debug!(start, end, settled, hops = nodes.len() - 1, length, "route found");
    Ok(Some(Route { nodes, length }))
}

/// Like [`find_path`], addressing the endpoints by node label.
pub fn find_path_by_label(graph: &Graph, from: &str, to: &str) -> Result<Option<Route>> {
    let lookup = |label: &str| {
        graph.find_by_label(label).ok_or_else(|| Error::UnknownLabel {
            label: label.to_string(),
        })
    };
    find_path(graph, lookup(from)?, lookup(to)?)
}

/// Start/destination selection as collected by a point picker; either side
/// may still be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathRequest {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl PathRequest {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    pub fn resolve(&self, graph: &Graph) -> Result<Option<Route>> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => find_path(graph, start, end),
            _ => Err(Error::MissingSelection),
        }
    }
}
