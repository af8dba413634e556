/*!
# Dijkstra

Single-source shortest paths for graphs with **non-negative** edge weights.

The frontier is a binary min-heap of `(distance, node)` pairs with lazy deletion: whenever a
distance improves, a new entry is pushed and the superseded one is discarded once it is popped
for an already settled node. This runs on every [`WeightedAdjacencyList`], so the same code
serves [`AdjList`] (`O((V + E) log V)`) and [`AdjMatrix`] (`O(V^2 log V)`, scanning each row).

Negative weights are a precondition violation: they are not checked and produce wrong
distances. Use [`EdgeList::bellman_ford`] for them (or an unsigned weight type to rule them out).

Paths longer than `W::max_value()` are never taken. A node all of whose paths are that long
is reported as unreachable, so pick a weight type wide enough for the longest distance.
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::trace;

use super::*;

/// Result of [`ShortestPaths::shortest_path_tree`]: distances plus the predecessor of
/// every reachable node on one shortest path from the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathTree<W> {
    source: Node,
    distances: Distances<W>,
    predecessors: Vec<Option<OptionalNode>>,
}

impl<W: Weight> ShortestPathTree<W> {
    pub fn source(&self) -> Node {
        self.source
    }

    pub fn distances(&self) -> &Distances<W> {
        &self.distances
    }

    pub fn into_distances(self) -> Distances<W> {
        self.distances
    }

    /// Returns the node preceding `v` on its shortest path, or `None` for the source and
    /// unreachable nodes.
    /// ** Panics if `v >= n` **
    pub fn predecessor(&self, v: Node) -> Option<Node> {
        self.predecessors[v as usize].map(|p| p.get())
    }

    /// Returns the nodes of a shortest path `source, ..., target`, or `None` if `target`
    /// is unreachable.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjList<u32> = AdjList::from_edges(4, [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]);
    /// let tree = g.shortest_path_tree(0);
    ///
    /// assert_eq!(tree.path_to(3), Some(vec![0, 1, 2, 3]));
    /// assert_eq!(tree.distances().get(3), Some(4));
    /// ```
    pub fn path_to(&self, target: Node) -> Option<Vec<Node>> {
        if !self.distances.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut u = target;
        while let Some(p) = self.predecessor(u) {
            path.push(p);
            u = p;
        }
        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm with its working state (settled markers and frontier).
///
/// Reusable: [`Dijkstra::run`] resets the state, so one instance can answer queries from
/// several sources without reallocating.
pub struct Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    settled: NodeBitSet,
    heap: BinaryHeap<Reverse<(G::Weight, Node)>>,
    track_predecessors: bool,
}

impl<'a, G> Dijkstra<'a, G>
where
    G: WeightedAdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            settled: graph.vertex_bitset_unset(),
            heap: BinaryHeap::new(),
            track_predecessors: false,
        }
    }

    /// Record predecessors during [`Dijkstra::run`] (default: false)
    pub fn set_track_predecessors(&mut self, track: bool) -> &mut Self {
        self.track_predecessors = track;
        self
    }

    /// Computes shortest paths from `source`. Predecessors are only filled in if tracking was
    /// enabled, otherwise all of them are `None`.
    /// ** Panics if `source >= n` **
    pub fn run(&mut self, source: Node) -> ShortestPathTree<G::Weight> {
        let n = self.graph.number_of_nodes();
        let mut distances = Distances::from_source(n, source);
        let mut predecessors = vec![None; n as usize];

        self.settled.clear_all();
        self.heap.clear();
        self.heap.push(Reverse((G::Weight::zero(), source)));

        let mut pops = 0usize;
        while let Some(Reverse((du, u))) = self.heap.pop() {
            pops += 1;
            if self.settled.set_bit(u) {
                continue;
            }

            for (v, w) in self.graph.weighted_neighbors_of(u) {
                if self.settled.get_bit(v) {
                    continue;
                }

                let Some(dv) = du.checked_add(&w) else {
                    continue;
                };

                if distances.relax(v, dv) {
                    if self.track_predecessors {
                        predecessors[v as usize] = OptionalNode::new(u);
                    }
                    self.heap.push(Reverse((dv, v)));
                }
            }
        }

        trace!(
            source,
            reachable = distances.number_of_reachable(),
            heap_pops = pops,
            "dijkstra finished"
        );

        ShortestPathTree {
            source,
            distances,
            predecessors,
        }
    }
}

/// Single-source shortest paths on graphs with non-negative weights
pub trait ShortestPaths: WeightedAdjacencyList {
    /// Returns the shortest distance from `source` to every node. Nodes whose distance
    /// exceeds `Self::Weight::max_value()` are reported as unreachable.
    /// ** Panics if `source >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let edges = [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)];
    ///
    /// let list: AdjList<u32> = AdjList::from_undirected_edges(5, edges);
    /// let dist = list.dijkstra(0);
    /// assert_eq!(dist.into_vec(), vec![Some(0), Some(1), Some(3), Some(4), None]);
    ///
    /// let matrix: AdjMatrix<u32> = AdjMatrix::from_undirected_edges(5, edges);
    /// assert_eq!(matrix.dijkstra(0), list.dijkstra(0));
    /// ```
    fn dijkstra(&self, source: Node) -> Distances<Self::Weight> {
        Dijkstra::new(self).run(source).into_distances()
    }

    /// Like [`ShortestPaths::dijkstra`] but additionally records a shortest path tree
    fn shortest_path_tree(&self, source: Node) -> ShortestPathTree<Self::Weight> {
        Dijkstra::new(self).set_track_predecessors(true).run(source)
    }
}

impl<G> ShortestPaths for G where G: WeightedAdjacencyList {}
