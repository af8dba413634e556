/*!
# Bellman–Ford

Single-source shortest paths with arbitrary (also negative) edge weights in `O(V * E)`.
Every edge is relaxed in up to `V - 1` passes; a pass without any improvement ends the search
early. An additional pass that still improves a distance proves a negative cycle reachable
from the source, in which case no distances are returned at all.

Candidates below `W::min_value()` saturate there. Such a candidate still counts as an
improvement, so a negative cycle cannot hide behind the range of narrow weight types. If the
distances reach a fixpoint while some candidate still falls below the range, the result is
[`Infeasible::Overflow`]: either a distance is not representable or a negative cycle is stuck
at the saturation bound. Candidates above `W::max_value()` are never taken.
*/

use tracing::{debug, trace};

use super::*;

impl<W: Weight> EdgeList<W> {
    /// Returns the shortest distances from `source` or [`Infeasible::NegativeCycle`] if a cycle
    /// of negative weight is reachable from `source`. Distances that do not fit into `W` yield
    /// [`Infeasible::Overflow`] (below the range) or are reported as unreachable (above it).
    /// ** Panics if `source >= n` **
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let edges: EdgeList<i32> = EdgeList::from_edges(3, [(0, 1, 4), (0, 2, 5), (2, 1, -3)]);
    /// assert_eq!(
    ///     edges.bellman_ford(0).map(|d| d.into_vec()),
    ///     Ok(vec![Some(0), Some(2), Some(5)])
    /// );
    ///
    /// let cycle: EdgeList<i32> = EdgeList::from_edges(3, [(0, 1, 1), (1, 2, -3), (2, 0, 1)]);
    /// assert_eq!(cycle.bellman_ford(0), Err(Infeasible::NegativeCycle { start: 0 }));
    /// ```
    pub fn bellman_ford(&self, source: Node) -> Result<Distances<W>, Infeasible> {
        let n = self.number_of_nodes();
        let mut distances = Distances::from_source(n, source);

        let mut passes: NumNodes = 0;
        let mut last = Pass::default();
        while passes + 1 < n {
            passes += 1;
            last = self.relax_all(&mut distances);
            if !last.improved {
                break;
            }
        }

        // an early exit already proved a fixpoint
        let check = if passes + 1 == n {
            self.relax_all(&mut distances)
        } else {
            last
        };

        if check.improved || check.underflow {
            let err = if check.improved {
                Infeasible::NegativeCycle { start: source }
            } else {
                Infeasible::Overflow
            };
            debug!("bellman-ford aborted: {err}");
            return Err(err);
        }

        trace!(
            source,
            passes,
            reachable = distances.number_of_reachable(),
            "bellman-ford finished"
        );
        Ok(distances)
    }

    /// One pass over all edges
    fn relax_all(&self, distances: &mut Distances<W>) -> Pass {
        let mut pass = Pass::default();
        for e in self {
            let Some(du) = distances.get(e.from) else {
                continue;
            };

            let sum = Sum::of(du, e.weight);
            pass.underflow |= sum == Sum::Underflow;
            if let Some(candidate) = sum.saturate_below() {
                pass.improved |= distances.relax(e.to, candidate);
            }
        }
        pass
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Pass {
    /// Some distance decreased
    improved: bool,
    /// Some candidate fell below `W::min_value()`
    underflow: bool,
}
