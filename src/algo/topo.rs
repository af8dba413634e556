/*!
# Topological Sorting

Two independent ways to order the nodes of a directed graph such that every edge `(u, v)`
has `u` before `v`:

- **Kahn's algorithm** ([`TopoSearch`], [`TopologicalSort::topological_sort_kahn`]) repeatedly
  removes nodes without remaining in-edges. Nodes that become available at the same time are
  emitted in the order they became available (FIFO). A directed cycle is detected because its
  nodes never reach in-degree zero.
- **DFS-based** ([`TopologicalSort::topological_sort_dfs`] and its iterative twin) reverses the
  post-order of a full depth-first search. These do **not** detect cycles: on a cyclic graph
  they still return a permutation of all nodes, which is then no valid ordering. Use
  [`TopologicalSort::is_acyclic`] first if the input is not known to be a DAG.
*/

use std::collections::VecDeque;

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Lazy Kahn iterator yielding nodes in topological order.
///
/// If the graph has a cycle, iteration terminates early without covering all nodes.
pub struct TopoSearch<'a, G> {
    graph: &'a G,
    in_degs: Vec<NumNodes>,
    queue: VecDeque<Node>,
}

impl<G> WithGraphRef<G> for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G> Iterator for TopoSearch<'_, G>
where
    G: AdjacencyList,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;

        for v in self.graph.neighbors_of(u) {
            self.in_degs[v as usize] -= 1;
            if self.in_degs[v as usize] == 0 {
                self.queue.push_back(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.graph.len()))
    }
}

impl<'a, G> TopoSearch<'a, G>
where
    G: AdjacencyList,
{
    /// Computes all in-degrees and seeds the queue with the in-degree-zero nodes in increasing order
    pub fn new(graph: &'a G) -> Self {
        let in_degs = graph.in_degrees();
        let queue = in_degs
            .iter()
            .positions(|&d| d == 0)
            .map(|i| i as Node)
            .collect();

        Self {
            graph,
            in_degs,
            queue,
        }
    }
}

impl<'a, G> RankFromOrder<'a, G> for TopoSearch<'a, G> where G: AdjacencyList {}

/// Recursive reverse-post-order DFS. State is kept in one context owned by the
/// top-level call; the recursion only borrows it.
struct PostOrderContext<'a, G> {
    graph: &'a G,
    visited: NodeBitSet,
    post_order: Vec<Node>,
}

impl<G: AdjacencyList> PostOrderContext<'_, G> {
    fn visit(&mut self, u: Node) {
        self.visited.set_bit(u);
        for v in self.graph.neighbors_of(u) {
            if !self.visited.get_bit(v) {
                self.visit(v);
            }
        }
        self.post_order.push(u);
    }
}

/// Topological orderings of directed graphs
pub trait TopologicalSort: AdjacencyList + Sized {
    /// Returns a lazy iterator over the nodes in Kahn order
    fn topo_search(&self) -> TopoSearch<'_, Self> {
        TopoSearch::new(self)
    }

    /// Returns a topological order computed by Kahn's algorithm, or [`Infeasible::Cycle`]
    /// if the graph has a directed cycle. A graph without nodes yields `Ok(vec![])`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let dag: AdjList<u32> = AdjList::from_edges(4, [(2, 0), (3, 1), (0, 1)]);
    /// assert_eq!(dag.topological_sort_kahn(), Ok(vec![2, 3, 0, 1]));
    ///
    /// let cyclic: AdjList<u32> = AdjList::from_edges(3, [(0, 1), (1, 2), (2, 1)]);
    /// assert_eq!(
    ///     cyclic.topological_sort_kahn(),
    ///     Err(Infeasible::Cycle { ordered: 1, total: 3 })
    /// );
    /// ```
    fn topological_sort_kahn(&self) -> Result<Vec<Node>, Infeasible> {
        let order: Vec<Node> = self.topo_search().collect();

        if order.len() < self.len() {
            let err = Infeasible::Cycle {
                ordered: order.len() as NumNodes,
                total: self.number_of_nodes(),
            };
            debug!("topological sort failed: {err}");
            return Err(err);
        }

        Ok(order)
    }

    /// Returns *true* if the graph has no directed cycle (self-loops count as cycles)
    fn is_acyclic(&self) -> bool {
        self.topo_search().count() == self.len()
    }

    /// Returns the reverse post-order of a full recursive DFS that launches from every unvisited
    /// node in increasing order. Valid on DAGs; on cyclic graphs the result is a permutation of
    /// all nodes but no topological order.
    ///
    /// The recursion depth equals the longest simple path explored; use
    /// [`TopologicalSort::topological_sort_dfs_iterative`] for very deep graphs.
    fn topological_sort_dfs(&self) -> Vec<Node> {
        let mut ctx = PostOrderContext {
            graph: self,
            visited: self.vertex_bitset_unset(),
            post_order: Vec::with_capacity(self.len()),
        };

        for u in self.vertices_range() {
            if !ctx.visited.get_bit(u) {
                ctx.visit(u);
            }
        }

        ctx.post_order.reverse();
        ctx.post_order
    }

    /// Same ordering as [`TopologicalSort::topological_sort_dfs`], computed with an explicit
    /// stack instead of recursion
    fn topological_sort_dfs_iterative(&self) -> Vec<Node> {
        let mut order = self.dfs_post_order();
        order.reverse();
        order
    }
}

impl<G> TopologicalSort for G where G: AdjacencyList + Sized {}
