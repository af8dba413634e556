/*!
# Graph Operations

Traits shared by all graph representations. Algorithms are written against these traits
rather than against a concrete storage, so e.g. Dijkstra runs on both [`AdjList`](crate::repr::AdjList)
and [`AdjMatrix`](crate::repr::AdjMatrix) with a monomorphic hot loop each.
*/

use std::ops::Range;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
    }

    /// Returns the range `0..n`.
    /// In contrast to self.vertices(), the range does not borrow self and hence may be used
    /// where additional mutable references of self are needed
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (directed) edges of the graph.
    /// An undirected edge inserted via [`GraphEdgeEditing::add_undirected_edge`] counts twice.
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Associates a graph with the type of its edge weights
pub trait GraphWeight {
    type Weight: Weight;
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (out-)neighbors of a given vertex in insertion order.
    /// Multi-edges yield the neighbor multiple times.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns the in-degree of every node, indexed by node
    fn in_degrees(&self) -> Vec<NumNodes> {
        let mut in_degs = vec![0; self.len()];
        for u in self.vertices() {
            for v in self.neighbors_of(u) {
                in_degs[v as usize] += 1;
            }
        }
        in_degs
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// ** Panics if `u >= n` **
    fn edges_of(&self, u: Node) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u).map(move |v| Edge(u, v))
    }

    /// Returns an iterator over all edges in the graph (source-major).
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range().flat_map(move |u| self.edges_of(u))
    }
}

/// Neighborhood getters that also expose edge weights
pub trait WeightedAdjacencyList: AdjacencyList + GraphWeight {
    /// Returns an iterator over `(neighbor, weight)` pairs of the outgoing edges of `u`.
    /// ** Panics if `u >= n` **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Self::Weight)> + '_;

    /// Returns an iterator over the weighted outgoing edges of `u`.
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.weighted_neighbors_of(u)
            .map(move |(v, w)| WeightedEdge::new(u, v, w))
    }

    /// Returns an iterator over all weighted edges in the graph (source-major).
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge<Self::Weight>> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.weighted_edges_of(u))
    }
}

/// Trait to test existence of edges
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Trait for creating a new empty graph
pub trait GraphNew {
    /// Creates an empty graph with n singleton nodes
    fn new(n: NumNodes) -> Self;
}

/// Provides functions to insert edges
pub trait GraphEdgeEditing: GraphNew + GraphWeight {
    /// Adds the directed edge *(u,v)* with the given weight to the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn add_edge(&mut self, u: Node, v: Node, weight: Self::Weight);

    /// Adds *(u,v)* as well as *(v,u)* with the same weight.
    /// A self-loop is only inserted once.
    /// ** Panics if `u >= n || v >= n` **
    fn add_undirected_edge(&mut self, u: Node, v: Node, weight: Self::Weight) {
        self.add_edge(u, v, weight);
        if u != v {
            self.add_edge(v, u, weight);
        }
    }

    /// Adds all edges in the collection
    fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge<Self::Weight>>,
    {
        for e in edges {
            let e = e.into();
            self.add_edge(e.from, e.to, e.weight);
        }
    }

    /// Adds all edges in the collection in both orientations
    fn add_undirected_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge<Self::Weight>>,
    {
        for e in edges {
            let e = e.into();
            self.add_undirected_edge(e.from, e.to, e.weight);
        }
    }
}

/// A super trait for creating a graph from scratch from a set of edges and a number of nodes
pub trait GraphFromScratch: GraphWeight + Sized {
    /// Create a graph from a number of nodes and a collection of directed edges
    fn from_edges<I>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge<Self::Weight>>;

    /// Create a graph from a number of nodes and a collection of undirected edges,
    /// each of which is inserted in both orientations
    fn from_undirected_edges<I>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge<Self::Weight>>;
}

impl<G: GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges<I>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge<Self::Weight>>,
    {
        let mut graph = Self::new(n);
        graph.add_edges(edges);
        graph
    }

    fn from_undirected_edges<I>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<WeightedEdge<Self::Weight>>,
    {
        let mut graph = Self::new(n);
        graph.add_undirected_edges(edges);
        graph
    }
}
