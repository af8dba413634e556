use super::*;

/// A dense, directed, weighted adjacency matrix.
///
/// Cell `(u, v)` holds `Some(weight)` for an edge and `None` for "no edge", so no valid
/// weight has to be reserved as a sentinel. The diagonal is `None` unless a self-loop is
/// inserted. Parallel edges collapse to the lightest one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjMatrix<W> {
    cells: Vec<Option<W>>,
    pub(super) num_nodes: NumNodes,
    pub(super) num_edges: NumEdges,
}

impl<W: Weight> AdjMatrix<W> {
    #[inline]
    fn index(&self, u: Node, v: Node) -> usize {
        assert!(u < self.num_nodes && v < self.num_nodes);
        u as usize * self.num_nodes as usize + v as usize
    }

    /// Returns the weight of edge `(u, v)` or `None` if there is no such edge.
    /// ** Panics if `u >= n || v >= n` **
    pub fn weight(&self, u: Node, v: Node) -> Option<W> {
        self.cells[self.index(u, v)]
    }

    /// Returns row `u` of the matrix, i.e. the weights of all potential edges `(u, *)`.
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Option<W>] {
        let n = self.num_nodes as usize;
        let start = u as usize * n;
        &self.cells[start..start + n]
    }

    /// Builds a matrix from rows where `None` encodes "no edge".
    ///
    /// # Panics
    /// Panics if the rows do not form a square matrix.
    pub fn from_rows<R>(rows: R) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = Option<W>>,
    {
        let cells: Vec<Option<W>> = rows.into_iter().flatten().collect();
        let n = cells.len().isqrt();
        assert_eq!(n * n, cells.len(), "adjacency matrix must be square");

        let num_edges = cells.iter().filter(|c| c.is_some()).count() as NumEdges;
        Self {
            cells,
            num_nodes: n as NumNodes,
            num_edges,
        }
    }

    /// Builds a matrix from rows of raw weights where every entry equal to `no_edge`
    /// is treated as "no edge" (e.g. `-1` or `i32::MAX`).
    ///
    /// # Panics
    /// Panics if the rows do not form a square matrix.
    pub fn from_rows_with_sentinel<R>(rows: R, no_edge: W) -> Self
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = W>,
    {
        Self::from_rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(move |w| (w != no_edge).then_some(w))),
        )
    }
}

impl<W: Weight> GraphNew for AdjMatrix<W> {
    fn new(n: NumNodes) -> Self {
        Self {
            cells: vec![None; n as usize * n as usize],
            num_nodes: n,
            num_edges: 0,
        }
    }
}

impl<W: Weight> AdjacencyList for AdjMatrix<W> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.weighted_neighbors_of(u).map(|(v, _)| v)
    }
}

impl<W: Weight> WeightedAdjacencyList for AdjMatrix<W> {
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, W)> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, w)| w.map(|w| (v as Node, w)))
    }
}

impl<W: Weight> AdjacencyTest for AdjMatrix<W> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.weight(u, v).is_some()
    }
}

impl<W: Weight> GraphEdgeEditing for AdjMatrix<W> {
    fn add_edge(&mut self, u: Node, v: Node, weight: W) {
        let idx = self.index(u, v);
        match self.cells[idx] {
            None => {
                self.cells[idx] = Some(weight);
                self.num_edges += 1;
            }
            Some(w) if weight < w => self.cells[idx] = Some(weight),
            Some(_) => {}
        }
    }
}
