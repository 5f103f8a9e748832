use super::Graph;

/// Neighbor lists derived from a graph's edges, in edge order.
#[derive(Debug, Clone)]
pub struct AdjacencyIndex {
    neighbors: Vec<Vec<usize>>,
}

impl AdjacencyIndex {
    pub fn build(graph: &Graph) -> Self {
        let mut neighbors = vec![Vec::new(); graph.node_count()];
        for edge in graph.edges() {
            neighbors[edge.from].push(edge.to);
            neighbors[edge.to].push(edge.from);
        }
        Self { neighbors }
    }

    /// Neighbors of `node`; empty for isolated nodes. Panics on an invalid index.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.neighbors[node]
    }

    pub fn degree(&self, node: usize) -> usize {
        self.neighbors[node].len()
    }

    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Edge, Node};

    #[test]
    fn builds_symmetric_lists_in_edge_order() {
        let nodes = (0..4).map(|i| Node::new(i as f64, 0.0)).collect();
        let graph = Graph::new(
            nodes,
            vec![Edge::new(0, 1), Edge::new(2, 0), Edge::new(1, 2)],
        )
        .unwrap();
        let index = AdjacencyIndex::build(&graph);
        assert_eq!(index.neighbors(0), &[1, 2]);
        assert_eq!(index.neighbors(1), &[0, 2]);
        assert_eq!(index.neighbors(2), &[0, 1]);
        assert!(index.neighbors(3).is_empty());
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn duplicate_edges_contribute_twice() {
        let nodes = vec![Node::new(0.0, 0.0), Node::new(1.0, 0.0)];
        let graph = Graph::new(nodes, vec![Edge::new(0, 1), Edge::new(1, 0)]).unwrap();
        let index = AdjacencyIndex::build(&graph);
        assert_eq!(index.neighbors(0), &[1, 1]);
        assert_eq!(index.degree(1), 2);
    }
}
