//! Random weighted graphs for tests and cross-checks between algorithms

use std::ops::Range;

use rand::{Rng, distr::uniform::SampleUniform};

use crate::prelude::*;

/// Probability `p = d / n` of a `G(n, p)` graph with average degree `d`, capped at `1`
fn edge_probability(n: NumNodes, avg_deg: f64) -> f64 {
    if n == 0 {
        0.0
    } else {
        (avg_deg / n as f64).clamp(0.0, 1.0)
    }
}

/// Directed `G(n, p)` graph: every ordered pair (self-loops included) becomes an edge with
/// probability `avg_deg / n` and a weight drawn uniformly from `weights`.
pub(crate) fn random_graph<G, R>(
    rng: &mut R,
    n: NumNodes,
    avg_deg: f64,
    weights: Range<G::Weight>,
) -> G
where
    G: GraphEdgeEditing,
    G::Weight: SampleUniform,
    R: Rng,
{
    let p = edge_probability(n, avg_deg);
    let mut graph = G::new(n);
    for u in 0..n {
        for v in 0..n {
            if rng.random_bool(p) {
                let w = rng.random_range(weights.clone());
                graph.add_edge(u, v, w);
            }
        }
    }
    graph
}

/// Undirected `G(n, p)` graph without self-loops; each edge is stored in both orientations
pub(crate) fn random_undirected_graph<G, R>(
    rng: &mut R,
    n: NumNodes,
    avg_deg: f64,
    weights: Range<G::Weight>,
) -> G
where
    G: GraphEdgeEditing,
    G::Weight: SampleUniform,
    R: Rng,
{
    let p = edge_probability(n, avg_deg);
    let mut graph = G::new(n);
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random_bool(p) {
                let w = rng.random_range(weights.clone());
                graph.add_undirected_edge(u, v, w);
            }
        }
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn example() -> Vec<(Node, Node, i64)> {
        vec![(0, 1, 1), (1, 2, 2), (0, 2, 4), (2, 3, 1)]
    }

    #[test]
    fn generator_shapes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        let graph: AdjList<i64> = random_undirected_graph(rng, 30, 4.0, -5..5);
        assert_eq!(graph.number_of_edges() % 2, 0);
        assert!(graph.edges().all(|Edge(u, v)| u != v && graph.has_edge(v, u)));
        assert!(graph.weighted_edges().all(|e| (-5..5).contains(&e.weight)));

        let empty: AdjList<i64> = random_graph(rng, 30, 0.0, 0..1);
        assert!(empty.is_singleton_graph());

        let full: AdjList<i64> = random_graph(rng, 5, 10.0, 0..1);
        assert_eq!(full.number_of_edges(), 25);
    }

    #[test]
    fn example_graph_through_all_views() {
        let list: AdjList<i64> = AdjList::from_undirected_edges(4, example());
        let matrix: AdjMatrix<i64> = (&list).into();
        let edges: EdgeList<i64> = EdgeList::from_edges(4, example());

        let expected = vec![0, 1, 3, 4];
        assert_eq!(list.dijkstra(0).to_vec_with_sentinel(UNREACHABLE), expected);
        assert_eq!(matrix.dijkstra(0).to_vec_with_sentinel(UNREACHABLE), expected);
        assert_eq!(
            EdgeList::from(&list)
                .bellman_ford(0)
                .map(|d| d.to_vec_with_sentinel(UNREACHABLE)),
            Ok(expected.clone())
        );
        assert_eq!(
            matrix.floyd_warshall().to_rows_with_sentinel(UNREACHABLE)[0],
            expected
        );

        assert_eq!(edges.kruskal().map(|t| t.total_weight), Ok(4));
        assert_eq!(list.prim(0).map(|t| t.total_weight), Ok(4));
    }

    #[test]
    fn shortest_paths_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(29);

        for n in [1 as NumNodes, 8, 30] {
            for avg_deg in [0.5, 2.0, 6.0] {
                for _ in 0..4 {
                    let list: AdjList<i64> = random_graph(rng, n, avg_deg, 0..1000);
                    let matrix: AdjMatrix<i64> = (&list).into();
                    let edges: EdgeList<i64> = (&list).into();
                    let all_pairs = matrix.floyd_warshall();

                    for s in list.vertices() {
                        let dijkstra = list.dijkstra(s);
                        assert_eq!(dijkstra, matrix.dijkstra(s));
                        assert_eq!(edges.bellman_ford(s), Ok(dijkstra.clone()));
                        assert_eq!(all_pairs.row(s), dijkstra.as_slice());

                        // reachability matches a plain BFS
                        let reachable = list.bfs(s).sorted().collect_vec();
                        let with_distance = list
                            .vertices()
                            .filter(|&v| dijkstra.is_reachable(v))
                            .collect_vec();
                        assert_eq!(reachable, with_distance);
                    }
                }
            }
        }
    }

    #[test]
    fn negative_weights_agree() {
        let rng = &mut Pcg64Mcg::seed_from_u64(31);

        for _ in 0..30 {
            let list: AdjList<i64> = random_graph(rng, 12, 1.5, -3..20);
            let matrix: AdjMatrix<i64> = (&list).into();
            let edges: EdgeList<i64> = (&list).into();
            let all_pairs = matrix.floyd_warshall();

            for s in list.vertices() {
                match edges.bellman_ford(s) {
                    Ok(dist) => assert_eq!(all_pairs.row(s), dist.as_slice()),
                    Err(Infeasible::NegativeCycle { start }) => {
                        assert_eq!(start, s);
                        assert!(all_pairs.has_negative_cycle());
                        // some node on a negative cycle is reachable from s
                        assert!(
                            all_pairs
                                .nodes_on_negative_cycles()
                                .into_iter()
                                .any(|c| all_pairs.get(s, c).is_some())
                        );
                    }
                    Err(e) => panic!("unexpected error {e}"),
                }
            }
        }
    }
}
