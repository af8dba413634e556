/*!
# Minimum Spanning Trees

Both algorithms expect an undirected graph, i.e. every edge stored in both orientations
(see [`GraphEdgeEditing::add_undirected_edge`]). Kruskal also accepts a single orientation
per edge since it ignores directions anyway.

- [`EdgeList::kruskal`] sorts all edges stably by weight and accepts an edge whenever its
  endpoints are not yet connected according to a [`UnionFind`].
- [`MinimumSpanningTree::prim`] grows one tree from a start node, always adding the lightest
  edge leaving the tree (lazy deletion, as in [`Dijkstra`]). Unlike Dijkstra, it works with
  negative weights.

If the graph is disconnected, no spanning tree exists and both return
[`Infeasible::Disconnected`]. The total weight of a minimum spanning *forest*, one tree per
component, is available separately via [`MinimumSpanningTree::prim_forest`].

Total weights are summed without intermediate overflow; only a total outside the range of the
weight type yields [`Infeasible::Overflow`].
*/

use std::{cmp::Reverse, collections::BinaryHeap};

use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// A spanning tree over all nodes of a graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree<W> {
    /// Sum of the weights of all tree edges
    pub total_weight: W,
    /// The `n - 1` tree edges in the order they were accepted
    pub edges: Vec<WeightedEdge<W>>,
}

/// A spanning forest consisting of one minimum spanning tree per connected component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest<W> {
    /// Sum of the weights of all trees
    pub total_weight: W,
    /// Number of trees, i.e. connected components
    pub number_of_components: NumNodes,
    /// The `n - number_of_components` forest edges in the order they were accepted
    pub edges: Vec<WeightedEdge<W>>,
}

impl<W: Weight> SpanningTree<W> {
    /// Returns [`Infeasible::Disconnected`] unless `covered == n`, and
    /// [`Infeasible::Overflow`] if the total weight does not fit into `W`
    fn new_spanning(
        edges: Vec<WeightedEdge<W>>,
        covered: NumNodes,
        n: NumNodes,
        algo: &'static str,
    ) -> Result<Self, Infeasible> {
        let tree = if covered < n {
            Err(Infeasible::Disconnected { covered, total: n })
        } else {
            total_weight_of(&edges).map(|total_weight| Self {
                total_weight,
                edges,
            })
        };

        match &tree {
            Ok(tree) => trace!(total_weight = ?tree.total_weight, "{algo} finished"),
            Err(err) => debug!("{algo} aborted: {err}"),
        }
        tree
    }
}

fn total_weight_of<W: Weight>(edges: &[WeightedEdge<W>]) -> Result<W, Infeasible> {
    checked_total(edges.iter().map(|e| e.weight)).ok_or(Infeasible::Overflow)
}

impl<W: Weight> EdgeList<W> {
    /// Computes a minimum spanning tree with Kruskal's algorithm. Edges of equal weight are
    /// considered in their input order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let edges: EdgeList<u32> = EdgeList::from_edges(4, [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]);
    /// let mst = edges.kruskal().unwrap();
    ///
    /// assert_eq!(mst.total_weight, 4);
    /// assert_eq!(mst.edges.len(), 3);
    ///
    /// let split: EdgeList<u32> = EdgeList::from_edges(5, [(0, 1, 1), (2, 3, 1), (3, 4, 1)]);
    /// assert_eq!(split.kruskal(), Err(Infeasible::Disconnected { covered: 3, total: 5 }));
    /// ```
    pub fn kruskal(&self) -> Result<SpanningTree<W>, Infeasible> {
        let n = self.number_of_nodes();

        let mut uf = UnionFind::new(n);
        let mut edges = Vec::with_capacity(n.saturating_sub(1) as usize);

        for e in self.iter().sorted_by_key(|e| e.weight) {
            if edges.len() + 1 >= n as usize {
                break;
            }
            if uf.union(e.from, e.to) {
                edges.push(*e);
            }
        }

        let covered = (0..n).map(|u| uf.set_size(u)).max().unwrap_or(0);
        SpanningTree::new_spanning(edges, covered, n, "kruskal")
    }
}

/// Lazy Prim search sharing its visited markers across several starts
struct PrimSearch<'a, G>
where
    G: WeightedAdjacencyList,
{
    graph: &'a G,
    in_tree: NodeBitSet,
    heap: BinaryHeap<Reverse<(G::Weight, Node, Node)>>,
}

impl<'a, G> PrimSearch<'a, G>
where
    G: WeightedAdjacencyList,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            in_tree: graph.vertex_bitset_unset(),
            heap: BinaryHeap::new(),
        }
    }

    fn push_frontier(&mut self, u: Node) {
        for (v, w) in self.graph.weighted_neighbors_of(u) {
            if !self.in_tree.get_bit(v) {
                self.heap.push(Reverse((w, v, u)));
            }
        }
    }

    /// Grows the tree of the component of `start` and appends its edges to `tree`
    fn grow(&mut self, start: Node, tree: &mut Vec<WeightedEdge<G::Weight>>) {
        self.in_tree.set_bit(start);
        self.push_frontier(start);

        while let Some(Reverse((w, v, u))) = self.heap.pop() {
            if self.in_tree.set_bit(v) {
                continue;
            }
            tree.push(WeightedEdge::new(u, v, w));
            self.push_frontier(v);
        }
    }
}

/// Minimum spanning trees/forests on undirected weighted adjacency lists
pub trait MinimumSpanningTree: WeightedAdjacencyList {
    /// Computes a minimum spanning tree with Prim's algorithm, starting at `start`.
    /// ** Panics if `start >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjList<i32> = AdjList::from_undirected_edges(4, [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]);
    /// assert_eq!(g.prim(3).map(|t| t.total_weight), Ok(4));
    /// ```
    fn prim(&self, start: Node) -> Result<SpanningTree<Self::Weight>, Infeasible> {
        let mut edges = Vec::with_capacity(self.len().saturating_sub(1));
        PrimSearch::new(self).grow(start, &mut edges);

        let covered = edges.len() as NumNodes + 1;
        SpanningTree::new_spanning(edges, covered, self.number_of_nodes(), "prim")
    }

    /// Computes a minimum spanning forest by running Prim's algorithm from every node
    /// (in increasing order) that is not yet covered. For connected graphs, this is the
    /// minimum spanning tree grown from node `0`. Fails only with [`Infeasible::Overflow`].
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjList<i32> = AdjList::from_undirected_edges(5, [(0, 1, 3), (2, 3, -1), (3, 4, 2)]);
    /// let forest = g.prim_forest().unwrap();
    ///
    /// assert_eq!(forest.total_weight, 4);
    /// assert_eq!(forest.number_of_components, 2);
    /// ```
    fn prim_forest(&self) -> Result<SpanningForest<Self::Weight>, Infeasible> {
        let mut search = PrimSearch::new(self);
        let mut edges = Vec::with_capacity(self.len().saturating_sub(1));
        let mut number_of_components = 0;

        for u in self.vertices_range() {
            if !search.in_tree.get_bit(u) {
                number_of_components += 1;
                search.grow(u, &mut edges);
            }
        }

        let total_weight = total_weight_of(&edges).inspect_err(|err| {
            debug!("prim forest aborted: {err}");
        })?;
        trace!(
            total_weight = ?total_weight,
            number_of_components,
            "prim forest finished"
        );

        Ok(SpanningForest {
            total_weight,
            number_of_components,
            edges,
        })
    }
}

impl<G> MinimumSpanningTree for G where G: WeightedAdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn example() -> Vec<(Node, Node, i64)> {
        vec![(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]
    }

    #[test]
    fn kruskal_small_example() {
        let edges: EdgeList<i64> = EdgeList::from_edges(4, example());
        let mst = edges.kruskal().unwrap();

        assert_eq!(mst.total_weight, 4);
        assert_eq!(
            mst.edges,
            vec![
                WeightedEdge::new(0, 1, 1),
                WeightedEdge::new(2, 3, 1),
                WeightedEdge::new(1, 2, 2)
            ]
        );
    }

    #[test]
    fn prim_small_example() {
        let list: AdjList<i64> = AdjList::from_undirected_edges(4, example());

        for start in 0..4 {
            let mst = list.prim(start).unwrap();
            assert_eq!(mst.total_weight, 4);
            assert_eq!(mst.edges.len(), 3);
        }

        assert_eq!(
            list.prim(0).unwrap().edges,
            vec![
                WeightedEdge::new(0, 1, 1),
                WeightedEdge::new(1, 2, 2),
                WeightedEdge::new(2, 3, 1)
            ]
        );
    }

    #[test]
    fn kruskal_ties_keep_input_order() {
        let edges: EdgeList<i64> = EdgeList::from_edges(3, [(1, 2, 5), (0, 1, 5), (0, 2, 5)]);
        assert_eq!(
            edges.kruskal().unwrap().edges,
            vec![WeightedEdge::new(1, 2, 5), WeightedEdge::new(0, 1, 5)]
        );
    }

    #[test]
    fn disconnected() {
        let list: AdjList<i64> = AdjList::from_undirected_edges(5, [(0, 1, 1), (2, 3, 2), (3, 4, 2)]);
        let edges: EdgeList<i64> = (&list).into();

        assert_eq!(
            edges.kruskal(),
            Err(Infeasible::Disconnected {
                covered: 3,
                total: 5
            })
        );
        assert_eq!(
            list.prim(0),
            Err(Infeasible::Disconnected {
                covered: 2,
                total: 5
            })
        );
        assert_eq!(
            list.prim(4),
            Err(Infeasible::Disconnected {
                covered: 3,
                total: 5
            })
        );

        let forest = list.prim_forest().unwrap();
        assert_eq!(forest.total_weight, 5);
        assert_eq!(forest.number_of_components, 2);
        assert_eq!(forest.edges.len(), 3);
    }

    #[test]
    fn trivial_graphs() {
        let empty: EdgeList<i64> = EdgeList::new(0);
        assert_eq!(
            empty.kruskal(),
            Ok(SpanningTree {
                total_weight: 0,
                edges: vec![]
            })
        );
        assert_eq!(AdjList::<i64>::new(0).prim_forest().unwrap().number_of_components, 0);

        let single: AdjList<i64> = AdjList::from_edges(1, [(0, 0, -7)]);
        assert_eq!(single.prim(0).map(|t| t.total_weight), Ok(0));

        let isolated: AdjList<i64> = AdjList::new(3);
        assert_eq!(isolated.prim_forest().unwrap().number_of_components, 3);
        assert!(isolated.prim(1).is_err());
    }

    #[test]
    fn total_weight_out_of_range() {
        let list: AdjList<i8> = AdjList::from_undirected_edges(3, [(0, 1, 100), (1, 2, 100)]);
        let edges: EdgeList<i8> = (&list).into();

        assert_eq!(edges.kruskal(), Err(Infeasible::Overflow));
        assert_eq!(list.prim(0), Err(Infeasible::Overflow));
        assert_eq!(list.prim_forest(), Err(Infeasible::Overflow));
    }

    #[test]
    fn total_weight_in_range_despite_heavy_prefix() {
        // Prim from 0 accepts 100, 100 before -100
        let list: AdjList<i8> =
            AdjList::from_undirected_edges(4, [(0, 1, 100), (1, 2, 100), (2, 3, -100)]);
        let edges: EdgeList<i8> = (&list).into();

        assert_eq!(list.prim(0).map(|t| t.total_weight), Ok(100));
        assert_eq!(edges.kruskal().map(|t| t.total_weight), Ok(100));
        assert_eq!(list.prim_forest().map(|f| f.total_weight), Ok(100));
    }

    #[test]
    fn negative_weights() {
        let list: AdjList<i64> =
            AdjList::from_undirected_edges(3, [(0, 1, -2), (1, 2, 3), (0, 2, -1)]);
        let edges: EdgeList<i64> = (&list).into();

        assert_eq!(list.prim(2).map(|t| t.total_weight), Ok(-3));
        assert_eq!(edges.kruskal().map(|t| t.total_weight), Ok(-3));
    }

    #[test]
    fn kruskal_and_prim_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(19);

        for n in [2 as NumNodes, 10, 50] {
            for avg_deg in [1.0, 3.0, 8.0] {
                for _ in 0..5 {
                    let list: AdjList<i64> = random_undirected_graph(rng, n, avg_deg, -20..50);
                    let edges: EdgeList<i64> = (&list).into();
                    let forest = list.prim_forest().unwrap();

                    match (edges.kruskal(), list.prim(0)) {
                        (Ok(k), Ok(p)) => {
                            assert_eq!(k.total_weight, p.total_weight);
                            assert_eq!(k.total_weight, forest.total_weight);
                            assert_eq!(forest.number_of_components, 1);
                            assert_eq!(k.edges.len(), n as usize - 1);
                        }
                        (Err(k), Err(p)) => {
                            assert!(matches!(k, Infeasible::Disconnected { .. }));
                            assert!(matches!(p, Infeasible::Disconnected { .. }));
                            assert!(forest.number_of_components > 1);
                        }
                        (k, p) => panic!("kruskal {k:?} and prim {p:?} disagree"),
                    }

                    // each forest edge joins two trees of a union-find over the graph
                    let mut uf = UnionFind::new(n);
                    assert!(forest.edges.iter().all(|e| uf.union(e.from, e.to)));
                    assert_eq!(
                        uf.number_of_sets(),
                        forest.number_of_components
                    );
                    assert!(
                        forest
                            .edges
                            .iter()
                            .all(|e| list.as_neighbors_slice(e.from).contains(&(e.to, e.weight)))
                    );
                    assert!(forest.edges.iter().map(|e| e.to).all_unique());
                }
            }
        }
    }
}
