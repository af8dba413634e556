/*!
# Disjoint-Set (Union-Find)

Incremental connectivity over the nodes `0..n`.

[`UnionFind::find`] applies full path compression (every node on the walk is repointed to the
root). Together with either merge policy of [`MergePolicy`] this bounds the amortized cost per
operation by the inverse Ackermann function. Both policies produce identical
[`UnionFind::connected`] answers; only the tree shapes differ.

All node arguments must be in `0..n`; out-of-range nodes panic.
*/

use super::*;

/// How two roots are linked by [`UnionFind::union`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergePolicy {
    /// Attach the root of the smaller set below the root of the larger set
    #[default]
    BySize,
    /// Attach the shallower tree below the deeper one; the rank only grows on ties
    ByRank,
}

/// A disjoint-set forest over the nodes `0..n`.
///
/// # Examples
/// ```
/// use wgraphs::algo::*;
///
/// let mut uf = UnionFind::new(4);
/// assert!(uf.union(0, 1));
/// assert!(uf.union(2, 3));
/// assert!(!uf.union(1, 0));
///
/// assert!(uf.connected(0, 1));
/// assert!(!uf.connected(1, 2));
/// assert_eq!(uf.set_size(3), 2);
/// assert_eq!(uf.number_of_sets(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
    rank: Vec<u8>,
    policy: MergePolicy,
    num_sets: NumNodes,
}

impl UnionFind {
    /// Creates `n` singleton sets merged by size
    pub fn new(n: NumNodes) -> Self {
        Self::with_policy(n, MergePolicy::default())
    }

    /// Creates `n` singleton sets merged according to `policy`
    pub fn with_policy(n: NumNodes, policy: MergePolicy) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
            rank: vec![0; n as usize],
            policy,
            num_sets: n,
        }
    }

    /// Creates a structure over `n` nodes and unions the endpoints of every given edge
    pub fn from_edges<I>(n: NumNodes, edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut uf = Self::new(n);
        for Edge(u, v) in edges.into_iter().map(Into::into) {
            uf.union(u, v);
        }
        uf
    }

    /// Returns the number of nodes
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns *true* if the structure holds no nodes
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of disjoint sets
    pub fn number_of_sets(&self) -> NumNodes {
        self.num_sets
    }

    /// Returns the representative of the set containing `x` and compresses the path from `x`.
    /// ** Panics if `x >= n` **
    pub fn find(&mut self, x: Node) -> Node {
        let mut root = x;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut u = x;
        while u != root {
            let next = self.parent[u as usize];
            self.parent[u as usize] = root;
            u = next;
        }

        root
    }

    /// Merges the sets containing `x` and `y`.
    /// Returns *false* if both were already in the same set, in which case nothing changes.
    /// ** Panics if `x >= n || y >= n` **
    pub fn union(&mut self, x: Node, y: Node) -> bool {
        let rx = self.find(x);
        let ry = self.find(y);
        if rx == ry {
            return false;
        }

        let (child, root) = match self.policy {
            MergePolicy::BySize => {
                if self.size[rx as usize] < self.size[ry as usize] {
                    (rx, ry)
                } else {
                    (ry, rx)
                }
            }
            MergePolicy::ByRank => {
                let (kx, ky) = (self.rank[rx as usize], self.rank[ry as usize]);
                if kx < ky {
                    (rx, ry)
                } else {
                    if kx == ky {
                        self.rank[rx as usize] += 1;
                    }
                    (ry, rx)
                }
            }
        };

        self.parent[child as usize] = root;
        self.size[root as usize] += self.size[child as usize];
        self.num_sets -= 1;
        true
    }

    /// Returns *true* if `x` and `y` are in the same set.
    /// ** Panics if `x >= n || y >= n` **
    pub fn connected(&mut self, x: Node, y: Node) -> bool {
        self.find(x) == self.find(y)
    }

    /// Returns the number of nodes in the set containing `x`.
    /// ** Panics if `x >= n` **
    pub fn set_size(&mut self, x: Node) -> NumNodes {
        let root = self.find(x);
        self.size[root as usize]
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    const POLICIES: [MergePolicy; 2] = [MergePolicy::BySize, MergePolicy::ByRank];

    #[test]
    fn union_then_connected() {
        for policy in POLICIES {
            let mut uf = UnionFind::with_policy(6, policy);
            assert_eq!(uf.number_of_sets(), 6);

            assert!(uf.union(0, 1));
            assert!(uf.union(1, 2));
            assert!(uf.union(4, 5));

            assert!(uf.connected(0, 2));
            assert!(uf.connected(5, 4));
            assert!(!uf.connected(2, 3));
            assert_eq!(uf.number_of_sets(), 3);
            assert_eq!(uf.set_size(0), 3);
            assert_eq!(uf.set_size(3), 1);
        }
    }

    #[test]
    fn redundant_union_changes_nothing() {
        for policy in POLICIES {
            let mut uf = UnionFind::with_policy(4, policy);
            uf.union(0, 1);
            uf.union(2, 1);

            let sizes = (0..4).map(|u| uf.set_size(u)).collect_vec();
            assert!(!uf.union(0, 2));
            assert!(!uf.union(2, 2));
            assert_eq!((0..4).map(|u| uf.set_size(u)).collect_vec(), sizes);
            assert_eq!(uf.number_of_sets(), 2);
        }
    }

    #[test]
    fn find_is_idempotent_and_compresses() {
        // Chain 0 <- 1 <- 2 <- ... built by hand to force a deep path
        let mut uf = UnionFind::new(64);
        for u in 1..64 {
            uf.parent[u as usize] = u - 1;
        }

        let root = uf.find(63);
        assert_eq!(root, 0);
        assert_eq!(uf.find(63), root);
        assert!((0..64).all(|u| uf.parent[u as usize] == 0));
    }

    #[test]
    fn policies_agree_on_random_unions() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for n in [2 as NumNodes, 10, 50, 200] {
            let mut by_size = UnionFind::with_policy(n, MergePolicy::BySize);
            let mut by_rank = UnionFind::with_policy(n, MergePolicy::ByRank);

            for _ in 0..n {
                let (u, v) = (rng.random_range(0..n), rng.random_range(0..n));
                assert_eq!(by_size.union(u, v), by_rank.union(u, v));
            }

            assert_eq!(by_size.number_of_sets(), by_rank.number_of_sets());
            for u in 0..n {
                // reported size equals the number of nodes resolving to the same root
                let root = by_size.find(u);
                let members = (0..n).filter(|&v| by_size.find(v) == root).count() as NumNodes;
                assert_eq!(by_size.set_size(u), members);
                assert_eq!(by_rank.set_size(u), members);

                for v in 0..n {
                    assert_eq!(by_size.connected(u, v), by_rank.connected(u, v));
                }
            }
        }
    }

    #[test]
    fn from_edges() {
        let mut uf = UnionFind::from_edges(5, [(0, 1), (3, 4), (1, 0)]);
        assert_eq!(uf.number_of_sets(), 3);
        assert!(uf.connected(3, 4));
        assert!(!uf.connected(1, 2));
    }
}
