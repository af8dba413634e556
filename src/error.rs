use thiserror::Error;

use crate::{Node, NumNodes};

/// Signals that an algorithm has no meaningful answer on the given input.
///
/// Each variant replaces a whole result: callers never receive partial distances,
/// partial forests or partial orders alongside it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Infeasible {
    /// A cycle of negative total weight is reachable from `start`
    #[error("negative cycle reachable from node {start}")]
    NegativeCycle { start: Node },

    /// No spanning tree exists; the largest tree grown covered only `covered` of `total` nodes
    #[error("graph is disconnected: spanning tree covers {covered} of {total} nodes")]
    Disconnected { covered: NumNodes, total: NumNodes },

    /// An accumulated weight does not fit into the weight type
    #[error("accumulated weight exceeds the range of the weight type")]
    Overflow,

    /// The directed graph has a cycle; only `ordered` of `total` nodes could be ordered
    #[error("graph contains a directed cycle: only {ordered} of {total} nodes can be ordered")]
    Cycle { ordered: NumNodes, total: NumNodes },
}
