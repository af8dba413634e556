/*!
`wgraphs` is a library of classical algorithms for graphs that are
- **w**eighted : Every edge carries an integer weight (possibly negative)
- directed : Undirected graphs are modelled by storing both orientations of an edge
- static : Graphs are built once and then only read by the algorithms

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of nodes in the graph.
As most common graphs do not exceed `2^32` nodes, this should normally suffice and save space as compared to `u64/usize`.
For **edges**, we use the tuple-struct `Edge(Node, Node)` and its weighted counterpart [`WeightedEdge`].

Weights are any integer type (see [`Weight`]). Missing edges and unreachable nodes are encoded as
`None` instead of a reserved "infinite" number, so relaxations never overflow into a sentinel.

### Available Representations

See the [`repr`] module for the three views over the same edge set:

- [`AdjList`](crate::repr::AdjList): traversals, topological sorting, Dijkstra, Prim
- [`AdjMatrix`](crate::repr::AdjMatrix): Dijkstra (dense), Floyd–Warshall
- [`EdgeList`](crate::repr::EdgeList): Bellman–Ford, Kruskal

Views can be converted into each other via `From`.

# Design

Algorithms that need working state are provided as configurable structs (e.g. [`algo::Dijkstra`],
[`algo::UnionFind`]) that one can alter using the *Builder* / *Setter* pattern before running them.
The commonly used functionality is additionally implemented via traits on the graph itself, making
it usable without configuring anything beforehand.

Every algorithm is a pure function of its input: all working memory is created per invocation.
Inputs without a valid answer yield an [`Infeasible`] error, while precondition violations
(out-of-range nodes) panic.

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, weights, errors, basic graph operations and all representations,
- [`algo`] includes the algorithms such as BFS (`graph.bfs(start_node)`), topological sorting, Dijkstra, Bellman–Ford, Floyd–Warshall, Kruskal, Prim and union-find,
- [`utils`] includes the set abstraction used for visited markers.

The unrelated [`tree`] module offers an in-order traversal for binary trees.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let g: AdjList<u32> = AdjList::from_undirected_edges(4, [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]);

assert_eq!(g.dijkstra(0).to_vec_with_sentinel(u32::MAX), vec![0, 1, 3, 4]);
assert_eq!(g.prim(0).map(|t| t.total_weight), Ok(4));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod tree;
pub mod utils;
pub mod weight;

pub use edge::*;
pub use error::*;
pub use node::*;
pub use weight::*;

/// `wgraphs::prelude` includes definitions for nodes, edges and weights, all basic graph operation traits as well as all implemented representations.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*, weight::*};
}
