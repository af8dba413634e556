/*!
# Graph Algorithms

This module provides the **graph algorithms** built on top of the graph representations in this crate.
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use wgraphs::algo::*;
```
and gain access to traversals, topological sorting, shortest paths, minimum spanning trees and
the disjoint-set structure.

Algorithms on adjacency lists are provided as extension traits that are implemented for every
suitable graph (e.g. `graph.bfs(start)`, `graph.dijkstra(source)`, `graph.prim(start)`), while
algorithms tied to one representation are methods of it (`edge_list.bellman_ford(source)`,
`edge_list.kruskal()`, `matrix.floyd_warshall()`). If possible, results are provided as
**iterators**, making it easy to consume them lazily.

Results without a meaningful answer (negative cycles, disconnected graphs, cyclic orders,
weights summing past the range of the weight type) are reported as [`Infeasible`] errors.
*/

mod bellman_ford;
mod dijkstra;
mod distances;
mod floyd_warshall;
mod mst;
mod topo;
mod traversal;
mod union_find;

use num::{CheckedAdd, Zero};

use crate::{
    prelude::*,
    utils::*,
    weight::{Sum, checked_total, improves},
};

pub use dijkstra::*;
pub use distances::*;
pub use mst::*;
pub use topo::*;
pub use traversal::*;
pub use union_find::*;
