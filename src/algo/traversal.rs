/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- Generic traversal iterators (BFS, DFS, with and without predecessor tracking),
  parameterized over the visited-set, which may also be owned by the caller.
- Full traversals that restart at the smallest unvisited node until every node
  of the graph is covered, one component after the other.
- A recursive-order DFS that simulates the call stack explicitly, next to the
  iterative (push-marking) DFS.
- Abstractions (`TraversalTree`, `RankFromOrder`) that turn traversals into
  parent arrays, rankings or depth arrays.
- A high-level `Traversal` trait that exposes all of the above directly as
  methods on graph data structures.

# Recursive vs. iterative DFS

The iterator returned by [`Traversal::dfs`] marks a node as visited when it is
*pushed* onto the stack and explores neighbors in reverse insertion order (they
are popped last-in first-out). [`Traversal::dfs_recursive_from`] instead marks
a node right before descending into it and scans neighbors in insertion order,
reproducing the visitation order of a textbook recursive DFS. Both visit every
reachable node exactly once in `O(V + E)`, but their orders generally differ
as soon as a node has more than one unvisited neighbor:

```
use wgraphs::{prelude::*, algo::*};

let g: AdjList<u32> = AdjList::from_edges(4, [(0, 1), (0, 2), (1, 3), (2, 3)]);

assert_eq!(g.full_dfs(), vec![0, 1, 3, 2]);
assert_eq!(g.full_dfs_iterative(), vec![0, 2, 3, 1]);
```
*/

use super::*;
use std::{collections::VecDeque, marker::PhantomData};

/// Gives access to the graph an algorithm or iterator operates on
pub trait WithGraphRef<G> {
    /// Returns the graph being processed
    fn graph_ref(&self) -> &G;
}

/// Abstraction for items yielded by a traversal iterator.
///
/// A `SequencedItem` encodes both the **node currently visited**
/// and an **optional predecessor** that represents its parent
/// in the traversal tree.
///
/// Two implementations are provided:
/// - [`Node`] — stores only the node (no predecessor information).
/// - [`PredecessorOfNode`] — stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;

    /// Returns a pair `(predecessor, item)` where the predecessor
    /// may be `None` if not tracked.
    fn predecessor_with_item(&self) -> (Option<Node>, Node) {
        (self.predecessor(), self.item())
    }
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Internally, the absence of a predecessor is encoded by
/// setting both tuple entries to the same node value.
pub type PredecessorOfNode = (Node, Node);
impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }

    fn item(&self) -> Node {
        self.1
    }

    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// Creates an empty sequencer.
    fn empty() -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn empty() -> Self {
        VecDeque::new()
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn empty() -> Self {
        Vec::new()
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and a set of
/// visited nodes. A node is marked as visited when it enters the frontier, so each
/// node enters the frontier at most once, regardless of multi-edges.
pub struct TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    graph: &'a G,
    visited: V,
    sequencer: S,
    _item: PhantomData<I>,
}

/// Type alias for a **breadth-first search** iterator using a queue (`VecDeque`).
pub type BFSWithSet<'a, G, V> = TraversalSearch<'a, G, VecDeque<Node>, Node, V>;

/// Type alias for a **depth-first search** iterator using a stack (`Vec`).
pub type DFSWithSet<'a, G, V> = TraversalSearch<'a, G, Vec<Node>, Node, V>;

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node, NodeBitSet>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// (push-marking) depth-first order from a given starting node.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node, NodeBitSet>;

/// A BFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

/// A DFS traversal iterator that records predecessor information,
/// producing a spanning tree of the search.
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Vec<PredecessorOfNode>, PredecessorOfNode, NodeBitSet>;

impl<G, S, I, V> WithGraphRef<G> for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    fn graph_ref(&self) -> &G {
        self.graph
    }
}

impl<G, S, I, V> Iterator for TraversalSearch<'_, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        for v in self.graph.neighbors_of(u) {
            if !self.visited.insert(v) {
                self.sequencer.push(I::new_with_predecessor(u, v));
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len().saturating_sub(self.visited.len()) + self.sequencer.cardinality()),
        )
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node> + FromCapacity,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        Self::new_multi(graph, [start])
    }

    /// Creates a new traversal iterator whose frontier is seeded with all `sources`
    /// (in the given order, duplicates are ignored).
    pub fn new_multi<N>(graph: &'a G, sources: N) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        let len = graph.len();
        Self::with_visited_multi(graph, sources, V::from_total_used_capacity(len, len))
    }
}

impl<'a, G, S, I, V> TraversalSearch<'a, G, S, I, V>
where
    G: AdjacencyList,
    S: NodeSequencer<I>,
    I: SequencedItem,
    V: Set<Node>,
{
    /// Creates a new traversal iterator starting from `start` that uses (and updates) the given
    /// visited-set. Nodes already contained in `visited` are never yielded; if `start` itself is
    /// contained, the iterator is empty.
    /// ** Panics if `start >= n` **
    pub fn with_visited(graph: &'a G, start: Node, visited: V) -> Self {
        Self::with_visited_multi(graph, [start], visited)
    }

    /// Multi-source version of [`TraversalSearch::with_visited`]
    pub fn with_visited_multi<N>(graph: &'a G, sources: N, mut visited: V) -> Self
    where
        N: IntoIterator<Item = Node>,
    {
        let mut sequencer = S::empty();
        for u in sources {
            assert!(u < graph.number_of_nodes());
            if !visited.insert(u) {
                sequencer.push(I::new_without_predecessor(u));
            }
        }

        Self {
            graph,
            visited,
            sequencer,
            _item: PhantomData,
        }
    }

    /// Tries to restart the search at the smallest yet unvisited node and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        let node = self
            .graph
            .vertices_range()
            .find(|u| !self.visited.contains(u));
        match node {
            None => false,
            Some(x) => {
                self.visited.insert(x);
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }
}

/// Extension trait for traversal iterators that allows computing a ranking (iteration order)
/// of the nodes in the graph.
pub trait RankFromOrder<'a, G>: WithGraphRef<G> + Iterator<Item = Node> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the traversal iterator and produces a vector `ranking` where
    /// `ranking[u]` gives the position (rank, starting at 0) at which node `u`
    /// was visited.
    ///
    /// - Returns `Some(ranking)` if **all nodes of the graph** were visited.
    /// - Returns `None` if the iterator did not cover every node.
    ///
    /// # Panics
    /// Panics if the iterator yields the same node more than once.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjList<u32> = AdjList::from_undirected_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let ranking = g.bfs(0).ranking().unwrap();
    /// assert_eq!(ranking, vec![0, 1, 2]);
    /// ```
    fn ranking(mut self) -> Option<Vec<Node>> {
        let mut ranking = vec![INVALID_NODE; self.graph_ref().len()];
        let mut rank: Node = 0;

        for u in self.by_ref() {
            assert_eq!(ranking[u as usize], INVALID_NODE); // assert no item is repeated by iterator
            ranking[u as usize] = rank;
            rank += 1;
        }

        if rank == self.graph_ref().number_of_nodes() {
            Some(ranking)
        } else {
            None
        }
    }
}

impl<'a, G, S, V> RankFromOrder<'a, G> for TraversalSearch<'a, G, S, Node, V>
where
    G: AdjacencyList,
    S: NodeSequencer<Node>,
    V: Set<Node>,
{
}

/// Extension trait for traversal iterators that return `PredecessorOfNode`,
/// enabling extraction of the implied spanning tree structure (parents, depths).
pub trait TraversalTree<'a, G>:
    WithGraphRef<G> + Iterator<Item = PredecessorOfNode> + Sized
where
    G: 'a + AdjacencyList,
{
    /// Consumes the iterator and records the parent of each node in the implied
    /// traversal tree into the provided slice `tree`.
    /// Unvisited entries remain unchanged.
    fn parent_array_into(&mut self, tree: &mut [Node]) {
        for pred_with_item in self.by_ref() {
            if let Some(p) = pred_with_item.predecessor() {
                tree[pred_with_item.item() as usize] = p;
            }
        }
    }

    /// Constructs a fresh parent array where each node is initially its own parent
    /// and fills in the traversal tree structure.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjList<u32> = AdjList::from_undirected_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let parents = g.bfs_with_predecessor(0).parent_array();
    /// assert_eq!(parents, vec![0, 0, 1]);
    /// ```
    fn parent_array(&mut self) -> Vec<Node> {
        let mut tree: Vec<_> = self.graph_ref().vertices_range().collect();
        self.parent_array_into(&mut tree);
        tree
    }

    /// Consumes the iterator and computes the depth of each visited node in
    /// the traversal tree (root depth = 0). Unreached nodes get `None`.
    ///
    /// For a BFS this is the hop distance from the start.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjList<u32> = AdjList::from_edges(4, [(0, 1), (1, 2)]);
    ///
    /// let depths = g.bfs_with_predecessor(0).depths();
    /// assert_eq!(depths, vec![Some(0), Some(1), Some(2), None]);
    /// ```
    fn depths(&mut self) -> Vec<Option<NumNodes>> {
        let mut depths = vec![None; self.graph_ref().len()];
        for pred_with_item in self.by_ref() {
            depths[pred_with_item.item() as usize] = Some(
                pred_with_item
                    .predecessor()
                    .and_then(|p| depths[p as usize])
                    .map_or(0, |d: NumNodes| d + 1),
            );
        }
        depths
    }
}

impl<'a, G, S, V> TraversalTree<'a, G> for TraversalSearch<'a, G, S, PredecessorOfNode, V>
where
    G: AdjacencyList,
    S: NodeSequencer<PredecessorOfNode>,
    V: Set<Node>,
{
}

/// Recursive-order depth-first search over a caller-provided visited-set.
///
/// The call stack of the recursive formulation is kept as an explicit stack of
/// neighbor iterators, so arbitrarily deep graphs cannot overflow the thread stack.
struct RecursiveDfs<'a, G, V>
where
    G: AdjacencyList,
    V: Set<Node> + ?Sized,
{
    graph: &'a G,
    visited: &'a mut V,
}

impl<'a, G, V> RecursiveDfs<'a, G, V>
where
    G: AdjacencyList,
    V: Set<Node> + ?Sized,
{
    /// Visits everything reachable from `start` and calls `pre` when a node is entered and
    /// `post` once all its descendants are finished.
    fn run<Pre, Post>(&mut self, start: Node, mut pre: Pre, mut post: Post)
    where
        Pre: FnMut(Node),
        Post: FnMut(Node),
    {
        let graph = self.graph;
        if self.visited.insert(start) {
            return;
        }
        pre(start);

        let mut frames = vec![(start, graph.neighbors_of(start))];
        while let Some((u, nbs)) = frames.last_mut() {
            match nbs.find(|v| !self.visited.contains(v)) {
                Some(v) => {
                    self.visited.insert(v);
                    pre(v);
                    frames.push((v, graph.neighbors_of(v)));
                }
                None => {
                    post(*u);
                    frames.pop();
                }
            }
        }
    }
}

/// Provides convenient traversal methods (BFS, DFS and their full variants)
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjList<u32> = AdjList::from_edges(3, [(0, 1), (0, 2)]);
    ///
    /// let order: Vec<_> = g.bfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order** using an explicit stack that
    /// marks nodes when they are pushed (see module documentation).
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjList<u32> = AdjList::from_edges(3, [(0, 1), (1, 2)]);
    ///
    /// let order: Vec<_> = g.dfs(0).collect();
    /// assert_eq!(order, vec![0, 1, 2]);
    /// ```
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (edges traversed).
    fn dfs_with_predecessor(&self, start: Node) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Returns a BFS iterator whose frontier is seeded with all `sources` at once.
    /// Every node reachable from any source is visited once, in non-decreasing
    /// hop distance to the closest source.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjList<u32> = AdjList::from_edges(5, [(0, 1), (1, 2), (4, 3)]);
    ///
    /// let order: Vec<_> = g.multi_source_bfs([4, 0]).collect();
    /// assert_eq!(order, vec![4, 0, 3, 1, 2]);
    /// ```
    fn multi_source_bfs<N>(&self, sources: N) -> BFS<'_, Self>
    where
        N: IntoIterator<Item = Node>,
    {
        BFS::new_multi(self, sources)
    }

    /// Returns the hop distance (number of edges) from `start` to every node,
    /// or `None` for nodes unreachable from `start`.
    fn bfs_levels(&self, start: Node) -> Vec<Option<NumNodes>> {
        self.bfs_with_predecessor(start).depths()
    }

    /// Runs a BFS from `start` using the caller's visited-set and returns the nodes
    /// newly reached, in visiting order. Afterwards all of them are marked in `visited`.
    /// If `start` is already marked, nothing is visited.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjList<u32> = AdjList::from_edges(4, [(0, 1), (2, 1), (2, 3)]);
    /// let mut visited = vec![false; 4];
    ///
    /// assert_eq!(g.bfs_from(0, visited.as_mut_slice()), vec![0, 1]);
    /// assert_eq!(g.bfs_from(2, visited.as_mut_slice()), vec![2, 3]);
    /// assert!(g.bfs_from(3, visited.as_mut_slice()).is_empty());
    /// ```
    fn bfs_from<V>(&self, start: Node, visited: &mut V) -> Vec<Node>
    where
        V: Set<Node> + ?Sized,
    {
        BFSWithSet::with_visited(self, start, visited).collect()
    }

    /// Runs a DFS in recursive order from `start` using the caller's visited-set and returns the
    /// nodes newly reached, in visiting order. If `start` is already marked, nothing is visited.
    fn dfs_recursive_from<V>(&self, start: Node, visited: &mut V) -> Vec<Node>
    where
        V: Set<Node> + ?Sized,
    {
        let mut order = Vec::new();
        RecursiveDfs {
            graph: self,
            visited,
        }
        .run(start, |u| order.push(u), |_| {});
        order
    }

    /// Visits all nodes of the graph exactly once in BFS order: a fresh BFS is launched
    /// from every node (in increasing order) that was not reached before, and the
    /// per-component orders are concatenated.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjList<u32> = AdjList::from_undirected_edges(5, [(0, 2), (3, 1)]);
    /// assert_eq!(g.full_bfs(), vec![0, 2, 1, 3, 4]);
    /// ```
    fn full_bfs(&self) -> Vec<Node> {
        let mut visited = self.vertex_bitset_unset();
        let mut order = Vec::with_capacity(self.len());
        for u in self.vertices_range() {
            order.extend(self.bfs_from(u, &mut visited));
        }
        order
    }

    /// Visits all nodes of the graph exactly once in recursive DFS order, launching from
    /// every not yet visited node in increasing order.
    fn full_dfs(&self) -> Vec<Node> {
        let mut visited = self.vertex_bitset_unset();
        let mut order = Vec::with_capacity(self.len());
        for u in self.vertices_range() {
            order.extend(self.dfs_recursive_from(u, &mut visited));
        }
        order
    }

    /// Visits all nodes of the graph exactly once with the push-marking stack DFS of
    /// [`Traversal::dfs`], restarting at the smallest unvisited node whenever the stack
    /// runs empty. The order differs from [`Traversal::full_dfs`] in general.
    fn full_dfs_iterative(&self) -> Vec<Node> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut dfs = self.dfs(0);
        let mut order = Vec::with_capacity(self.len());
        loop {
            order.extend(dfs.by_ref());
            if !dfs.try_restart_at_unvisited() {
                return order;
            }
        }
    }

    /// Returns every node in depth-first *post-order*: a node appears after everything
    /// reachable from it that was not visited before. Launches from every not yet
    /// visited node in increasing order.
    fn dfs_post_order(&self) -> Vec<Node> {
        let mut visited = self.vertex_bitset_unset();
        let mut order = Vec::with_capacity(self.len());
        for u in self.vertices_range() {
            RecursiveDfs {
                graph: self,
                visited: &mut visited,
            }
            .run(u, |_| {}, |v| order.push(v));
        }
        order
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}
