/*!
# Floyd–Warshall

All-pairs shortest paths over an [`AdjMatrix`] in `O(V^3)` time and `O(V^2)` space.
Negative weights are allowed. Negative cycles do not abort the computation; they show up as
negative diagonal entries of the resulting [`DistanceMatrix`] (see
[`DistanceMatrix::has_negative_cycle`]). Entries of pairs connected through such a cycle are
then no shortest distances anymore.

A candidate below `W::min_value()` saturates there, so a negative cycle whose weight leaves
the range of a narrow weight type still marks the diagonal. Candidates above
`W::max_value()` are dropped.
*/

use tracing::{debug, trace};

use super::*;

impl<W: Weight> AdjMatrix<W> {
    /// Computes the distance between every pair of nodes.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let m = AdjMatrix::from_rows_with_sentinel(
    ///     [[0, 3, -1], [-1, 0, -2], [1, -1, 0]],
    ///     -1,
    /// );
    /// let dist = m.floyd_warshall();
    ///
    /// assert_eq!(dist.row(0), &[Some(0), Some(3), Some(1)]);
    /// assert_eq!(dist.get(2, 1), Some(4));
    /// assert!(!dist.has_negative_cycle());
    /// ```
    pub fn floyd_warshall(&self) -> DistanceMatrix<W> {
        let n = self.number_of_nodes() as usize;
        let mut dist = DistanceMatrix::from_adjacency(self);
        let cells = dist.cells_mut();

        for k in 0..n {
            for i in 0..n {
                let Some(dik) = cells[i * n + k] else {
                    continue;
                };

                for j in 0..n {
                    let Some(dkj) = cells[k * n + j] else {
                        continue;
                    };

                    if let Some(candidate) = Sum::of(dik, dkj).saturate_below() {
                        let current = &mut cells[i * n + j];
                        if improves(candidate, *current) {
                            *current = Some(candidate);
                        }
                    }
                }
            }
        }

        if dist.has_negative_cycle() {
            debug!(
                nodes = ?dist.nodes_on_negative_cycles(),
                "floyd-warshall found negative cycles"
            );
        }
        trace!(n, "floyd-warshall finished");

        dist
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn small_example() {
        let matrix: AdjMatrix<i64> =
            AdjMatrix::from_undirected_edges(4, [(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]);
        let dist = matrix.floyd_warshall();

        assert_eq!(
            dist.to_rows_with_sentinel(UNREACHABLE),
            vec![
                vec![0, 1, 3, 4],
                vec![1, 0, 2, 3],
                vec![3, 2, 0, 1],
                vec![4, 3, 1, 0]
            ]
        );
    }

    #[test]
    fn unreachable_pairs() {
        let matrix: AdjMatrix<i64> = AdjMatrix::from_edges(3, [(0, 1, 5)]);
        let dist = matrix.floyd_warshall();

        assert_eq!(dist.get(0, 1), Some(5));
        assert_eq!(dist.get(1, 0), None);
        assert_eq!(dist.get(2, 2), Some(0));
        assert_eq!(
            dist.to_rows_with_sentinel(UNREACHABLE)[1],
            vec![-1, 0, -1]
        );
    }

    #[test]
    fn negative_cycle_on_diagonal() {
        let matrix: AdjMatrix<i64> =
            AdjMatrix::from_edges(4, [(0, 1, 1), (1, 2, -3), (2, 0, 1), (2, 3, 2)]);
        let dist = matrix.floyd_warshall();

        assert!(dist.has_negative_cycle());
        assert_eq!(dist.nodes_on_negative_cycles(), vec![0, 1, 2]);
        assert_eq!(dist.get(3, 3), Some(0));
    }

    #[test]
    fn negative_cycle_past_the_weight_range() {
        let matrix: AdjMatrix<i8> = AdjMatrix::from_edges(3, [(0, 1, -100), (1, 0, -100), (1, 2, 5)]);
        let dist = matrix.floyd_warshall();

        assert!(dist.has_negative_cycle());
        assert_eq!(dist.nodes_on_negative_cycles(), vec![0, 1]);
        assert_eq!(dist.get(0, 0), Some(i8::MIN));
        assert_eq!(dist.get(2, 2), Some(0));
    }

    #[test]
    fn distances_out_of_range() {
        let matrix: AdjMatrix<i8> =
            AdjMatrix::from_edges(4, [(0, 1, -100), (1, 2, -100), (2, 3, 100), (3, 0, 100)]);
        let dist = matrix.floyd_warshall();

        // 0 -> 2 saturates, 2 -> 0 is too long, the cycle itself weighs 0
        assert_eq!(dist.get(0, 2), Some(i8::MIN));
        assert_eq!(dist.get(2, 0), None);
        assert!(!dist.has_negative_cycle());
    }

    #[test]
    fn negative_edges_without_cycle() {
        let matrix: AdjMatrix<i64> =
            AdjMatrix::from_edges(3, [(0, 1, 4), (0, 2, 5), (2, 1, -3), (1, 0, 2)]);
        let dist = matrix.floyd_warshall();

        assert!(!dist.has_negative_cycle());
        assert_eq!(dist.row(0), &[Some(0), Some(2), Some(5)]);
        assert_eq!(dist.row(2), &[Some(-1), Some(-3), Some(0)]);
    }

    #[test]
    fn zero_nodes() {
        let dist = AdjMatrix::<i64>::new(0).floyd_warshall();
        assert_eq!(dist.number_of_nodes(), 0);
        assert!(!dist.has_negative_cycle());
    }

    #[test]
    fn diagonal_and_triangle_inequality() {
        let rng = &mut Pcg64Mcg::seed_from_u64(17);

        for n in [1 as NumNodes, 6, 25] {
            for avg_deg in [0.5, 2.0, 8.0] {
                let list: AdjList<i64> = random_graph(rng, n, avg_deg, 0..30);
                let matrix: AdjMatrix<i64> = (&list).into();
                let dist = matrix.floyd_warshall();

                for i in 0..n {
                    assert_eq!(dist.get(i, i), Some(0));
                    assert_eq!(dist.row(i), list.dijkstra(i).as_slice());

                    for j in 0..n {
                        for k in 0..n {
                            if let (Some(a), Some(b)) = (dist.get(i, k), dist.get(k, j)) {
                                let Sum::Exact(detour) = Sum::of(a, b) else {
                                    continue;
                                };
                                assert!(dist.get(i, j).is_some_and(|d| d <= detour));
                            }
                        }
                    }
                }
            }
        }
    }
}
