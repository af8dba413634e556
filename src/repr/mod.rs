/*!
# Graph Representations

Three views over the same logical (directed, weighted) edge set:

- [`AdjList`]: per-node sequences of `(neighbor, weight)`; used by traversals, topological
  sorting, Dijkstra and Prim.
- [`AdjMatrix`]: dense `n x n` grid of `Option<W>` where `None` encodes "no edge"; used by
  Dijkstra (matrix form) and Floyd–Warshall.
- [`EdgeList`]: flat sequence of [`WeightedEdge`]s; used by Bellman–Ford and Kruskal.

Undirected graphs are modelled by inserting both `(u, v)` and `(v, u)`, see
[`GraphEdgeEditing::add_undirected_edge`].

Views are converted into each other with `From` implementations. Converting preserves the
number of nodes and every edge weight; the only lossy step is [`AdjMatrix`], which keeps the
lightest of several parallel edges.
*/

use crate::{ops::*, *};

mod adj_list;
mod edge_list;
mod matrix;

pub use adj_list::*;
pub use edge_list::*;
pub use matrix::*;

pub(crate) mod macros {
    macro_rules! impl_common_graph_ops {
        ($($struct:ident),*) => {
            $(
                impl<W: Weight> GraphWeight for $struct<W> {
                    type Weight = W;
                }

                impl<W: Weight> GraphNodeOrder for $struct<W> {
                    fn number_of_nodes(&self) -> NumNodes {
                        self.num_nodes
                    }
                }

                impl<W: Weight> GraphEdgeOrder for $struct<W> {
                    fn number_of_edges(&self) -> NumEdges {
                        self.num_edges
                    }
                }
            )*
        };
    }

    pub(super) use impl_common_graph_ops;
}

macros::impl_common_graph_ops!(AdjList, AdjMatrix, EdgeList);

impl<W: Weight> From<&EdgeList<W>> for AdjList<W> {
    fn from(edges: &EdgeList<W>) -> Self {
        AdjList::from_edges(edges.number_of_nodes(), edges.iter())
    }
}

impl<W: Weight> From<&EdgeList<W>> for AdjMatrix<W> {
    fn from(edges: &EdgeList<W>) -> Self {
        AdjMatrix::from_edges(edges.number_of_nodes(), edges.iter())
    }
}

impl<W: Weight> From<&AdjList<W>> for AdjMatrix<W> {
    fn from(graph: &AdjList<W>) -> Self {
        AdjMatrix::from_edges(graph.number_of_nodes(), graph.weighted_edges())
    }
}

impl<W: Weight> From<&AdjList<W>> for EdgeList<W> {
    fn from(graph: &AdjList<W>) -> Self {
        EdgeList::from_edges(graph.number_of_nodes(), graph.weighted_edges())
    }
}

impl<W: Weight> From<&AdjMatrix<W>> for EdgeList<W> {
    fn from(graph: &AdjMatrix<W>) -> Self {
        EdgeList::from_edges(graph.number_of_nodes(), graph.weighted_edges())
    }
}

impl<W: Weight> From<&AdjMatrix<W>> for AdjList<W> {
    fn from(graph: &AdjMatrix<W>) -> Self {
        AdjList::from_edges(graph.number_of_nodes(), graph.weighted_edges())
    }
}
