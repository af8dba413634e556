/*!
# Distance Containers

Outputs of the shortest-path algorithms. Internally, unreachable nodes are `None`, so no
weight value is reserved for "infinity" and no arithmetic ever touches it. Callers that need
a flat numeric array (e.g. with `-1` for unreachable) can convert with
[`Distances::to_vec_with_sentinel`] / [`DistanceMatrix::to_rows_with_sentinel`].
*/

use itertools::Itertools;

use super::*;

/// Conventional sentinel for unreachable nodes when distances are surfaced as `i64`
pub const UNREACHABLE: i64 = -1;

/// Single-source distances, indexed by node.
///
/// `None` marks a node that has no path from the source whose length fits into `W`. With a
/// weight type too narrow for the graph, this includes nodes that are reachable only along
/// paths longer than `W::max_value()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distances<W> {
    dist: Vec<Option<W>>,
}

impl<W: Weight> Distances<W> {
    /// All nodes unreachable except `source` at distance zero.
    /// ** Panics if `source >= n` **
    pub(crate) fn from_source(n: NumNodes, source: Node) -> Self {
        let mut dist = vec![None; n as usize];
        dist[source as usize] = Some(W::zero());
        Self { dist }
    }

    /// Stores `candidate` for `v` if it is strictly shorter than the known distance
    #[inline]
    pub(crate) fn relax(&mut self, v: Node, candidate: W) -> bool {
        let current = &mut self.dist[v as usize];
        if improves(candidate, *current) {
            *current = Some(candidate);
            true
        } else {
            false
        }
    }

    /// Returns the distance to `v` or `None` if `v` is unreachable.
    /// ** Panics if `v >= n` **
    pub fn get(&self, v: Node) -> Option<W> {
        self.dist[v as usize]
    }

    /// ** Panics if `v >= n` **
    pub fn is_reachable(&self, v: Node) -> bool {
        self.dist[v as usize].is_some()
    }

    /// Number of nodes covered (reachable or not)
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Number of reachable nodes, including the source
    pub fn number_of_reachable(&self) -> NumNodes {
        self.dist.iter().filter(|d| d.is_some()).count() as NumNodes
    }

    /// Iterates over the distances in node order
    pub fn iter(&self) -> impl Iterator<Item = Option<W>> + '_ {
        self.dist.iter().copied()
    }

    pub fn as_slice(&self) -> &[Option<W>] {
        &self.dist
    }

    pub fn into_vec(self) -> Vec<Option<W>> {
        self.dist
    }

    /// Flattens the distances, replacing every unreachable entry by `sentinel`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let g: AdjList<i64> = AdjList::from_edges(3, [(0, 1, 5)]);
    /// assert_eq!(g.dijkstra(0).to_vec_with_sentinel(UNREACHABLE), vec![0, 5, -1]);
    /// ```
    pub fn to_vec_with_sentinel(&self, sentinel: W) -> Vec<W> {
        self.dist.iter().map(|d| d.unwrap_or(sentinel)).collect()
    }
}

impl<W> From<Vec<Option<W>>> for Distances<W> {
    fn from(dist: Vec<Option<W>>) -> Self {
        Self { dist }
    }
}

/// All-pairs distances stored row-major; entry `(i, j)` is the length of a shortest
/// path from `i` to `j` or `None` if there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix<W> {
    cells: Vec<Option<W>>,
    num_nodes: NumNodes,
}

impl<W: Weight> DistanceMatrix<W> {
    /// Seeds the matrix with the direct edge weights of `matrix`. A node reaches itself
    /// at distance zero unless a negative self-loop is lighter.
    pub(crate) fn from_adjacency(matrix: &AdjMatrix<W>) -> Self {
        let n = matrix.number_of_nodes();
        let mut cells = Vec::with_capacity(n as usize * n as usize);
        for u in 0..n {
            cells.extend_from_slice(matrix.row(u));
        }

        let mut dist = Self {
            cells,
            num_nodes: n,
        };
        for u in 0..n {
            let idx = dist.index(u, u);
            dist.cells[idx] = Some(dist.cells[idx].map_or(W::zero(), |w| w.min(W::zero())));
        }
        dist
    }

    #[inline]
    pub(crate) fn index(&self, i: Node, j: Node) -> usize {
        assert!(i < self.num_nodes && j < self.num_nodes);
        i as usize * self.num_nodes as usize + j as usize
    }

    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Option<W>] {
        &mut self.cells
    }

    pub fn number_of_nodes(&self) -> NumNodes {
        self.num_nodes
    }

    /// Returns the distance from `i` to `j`.
    /// ** Panics if `i >= n || j >= n` **
    pub fn get(&self, i: Node, j: Node) -> Option<W> {
        self.cells[self.index(i, j)]
    }

    /// Returns all distances starting in `i`.
    /// ** Panics if `i >= n` **
    pub fn row(&self, i: Node) -> &[Option<W>] {
        let n = self.num_nodes as usize;
        let start = i as usize * n;
        &self.cells[start..start + n]
    }

    /// Returns all nodes `i` with a negative entry `(i, i)`, i.e. those lying on a
    /// cycle of negative total weight
    pub fn nodes_on_negative_cycles(&self) -> Vec<Node> {
        (0..self.num_nodes)
            .filter(|&i| self.get(i, i).is_some_and(|d| d < W::zero()))
            .collect()
    }

    /// Returns *true* if any diagonal entry is negative
    pub fn has_negative_cycle(&self) -> bool {
        (0..self.num_nodes).any(|i| self.get(i, i).is_some_and(|d| d < W::zero()))
    }

    /// Flattens into rows, replacing every unreachable entry by `sentinel`
    pub fn to_rows_with_sentinel(&self, sentinel: W) -> Vec<Vec<W>> {
        (0..self.num_nodes)
            .map(|i| self.row(i).iter().map(|d| d.unwrap_or(sentinel)).collect_vec())
            .collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relax_only_improves() {
        let mut dist: Distances<i32> = Distances::from_source(3, 1);
        assert_eq!(dist.iter().collect::<Vec<_>>(), vec![None, Some(0), None]);

        assert!(dist.relax(0, 4));
        assert!(!dist.relax(0, 4));
        assert!(dist.relax(0, -2));
        assert!(!dist.relax(1, 0));

        assert_eq!(dist.get(0), Some(-2));
        assert!(!dist.is_reachable(2));
        assert_eq!(dist.number_of_reachable(), 2);
        assert_eq!(dist.to_vec_with_sentinel(-1), vec![-2, 0, -1]);
    }

    #[test]
    fn matrix_seeding() {
        let adj = AdjMatrix::from_rows([[None, Some(3i64)], [Some(-1), Some(-4)]]);
        let dist = DistanceMatrix::from_adjacency(&adj);

        assert_eq!(dist.row(0), &[Some(0), Some(3)]);
        assert_eq!(dist.get(1, 1), Some(-4));
        assert!(dist.has_negative_cycle());
        assert_eq!(dist.nodes_on_negative_cycles(), vec![1]);
        assert_eq!(
            dist.to_rows_with_sentinel(UNREACHABLE),
            vec![vec![0, 3], vec![-1, -4]]
        );
    }
}
