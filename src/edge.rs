use std::fmt::{Debug, Display};

use crate::{Node, Weight};

/// An unweighted edge is defined by two nodes/endpoints.
/// Edges are directed from `.0` to `.1`; undirected graphs store both orientations.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// A directed edge `from -> to` carrying a weight.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct WeightedEdge<W> {
    pub from: Node,
    pub to: Node,
    pub weight: W,
}

impl<W: Weight> WeightedEdge<W> {
    pub fn new(from: Node, to: Node, weight: W) -> Self {
        Self { from, to, weight }
    }
}

impl<W: Debug> Debug for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{};{:?})", self.from, self.to, self.weight)
    }
}

impl<W: Weight> From<(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: (Node, Node, W)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl<W: Weight> From<&(Node, Node, W)> for WeightedEdge<W> {
    fn from(value: &(Node, Node, W)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl<W: Weight> From<&WeightedEdge<W>> for WeightedEdge<W> {
    fn from(value: &WeightedEdge<W>) -> Self {
        *value
    }
}

/// Unweighted edges become zero-weight edges
impl<W: Weight> From<Edge> for WeightedEdge<W> {
    fn from(value: Edge) -> Self {
        Self::new(value.0, value.1, W::zero())
    }
}

/// Unweighted edges become zero-weight edges
impl<W: Weight> From<(Node, Node)> for WeightedEdge<W> {
    fn from(value: (Node, Node)) -> Self {
        Self::new(value.0, value.1, W::zero())
    }
}
