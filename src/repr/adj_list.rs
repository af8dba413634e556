use super::*;

/// A directed, weighted adjacency list.
///
/// Each node stores its outgoing `(neighbor, weight)` pairs in insertion order.
/// Multi-edges and self-loops are kept as inserted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjList<W> {
    nbs: Vec<Vec<(Node, W)>>,
    pub(super) num_nodes: NumNodes,
    pub(super) num_edges: NumEdges,
}

impl<W: Weight> GraphNew for AdjList<W> {
    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_nodes: n,
            num_edges: 0,
        }
    }
}

impl<W: Weight> AdjacencyList for AdjList<W> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().map(|&(v, _)| v)
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl<W: Weight> WeightedAdjacencyList for AdjList<W> {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.nbs[u as usize].iter().copied()
    }
}

impl<W: Weight> AdjacencyTest for AdjList<W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].iter().any(|&(x, _)| x == v)
    }
}

impl<W: Weight> GraphEdgeEditing for AdjList<W> {
    fn add_edge(&mut self, u: Node, v: Node, weight: W) {
        assert!(v < self.num_nodes);
        self.nbs[u as usize].push((v, weight));
        self.num_edges += 1;
    }
}

impl<W: Weight> AdjList<W> {
    /// Returns the outgoing `(neighbor, weight)` pairs of `u` as a slice.
    /// ** Panics if `u >= n` **
    pub fn as_neighbors_slice(&self, u: Node) -> &[(Node, W)] {
        &self.nbs[u as usize]
    }
}
