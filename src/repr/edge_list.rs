use std::slice::Iter;

use super::*;

/// A flat, ordered sequence of directed weighted edges over `n` nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeList<W> {
    edges: Vec<WeightedEdge<W>>,
    pub(super) num_nodes: NumNodes,
    pub(super) num_edges: NumEdges,
}

impl<W: Weight> EdgeList<W> {
    /// Returns an iterator over all edges in insertion order
    pub fn iter(&self) -> Iter<'_, WeightedEdge<W>> {
        self.edges.iter()
    }

    /// Returns all edges as a slice
    pub fn as_slice(&self) -> &[WeightedEdge<W>] {
        &self.edges
    }
}

impl<'a, W: Weight> IntoIterator for &'a EdgeList<W> {
    type Item = &'a WeightedEdge<W>;
    type IntoIter = Iter<'a, WeightedEdge<W>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<W: Weight> GraphNew for EdgeList<W> {
    fn new(n: NumNodes) -> Self {
        Self {
            edges: Vec::new(),
            num_nodes: n,
            num_edges: 0,
        }
    }
}

impl<W: Weight> GraphEdgeEditing for EdgeList<W> {
    fn add_edge(&mut self, u: Node, v: Node, weight: W) {
        assert!(u < self.num_nodes && v < self.num_nodes);
        self.edges.push(WeightedEdge::new(u, v, weight));
        self.num_edges += 1;
    }
}
