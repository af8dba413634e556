/*!
# Binary Trees

A minimal owned binary tree with in-order traversal. Independent of the graph types.

```
use wgraphs::tree::*;

//     2
//    / \
//   1   4
//      /
//     3
let tree = BinaryTree::node(
    BinaryTree::leaf(1),
    2,
    BinaryTree::node(BinaryTree::leaf(3), 4, BinaryTree::empty()),
);

assert_eq!(tree.in_order_recursive(), vec![&1, &2, &3, &4]);
assert_eq!(tree.in_order_iterative(), vec![&1, &2, &3, &4]);
```
*/

/// An inner node owning its subtrees
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<T> {
    pub value: T,
    pub left: BinaryTree<T>,
    pub right: BinaryTree<T>,
}

/// A possibly empty binary tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryTree<T> {
    root: Option<Box<TreeNode<T>>>,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> BinaryTree<T> {
    pub fn empty() -> Self {
        Self { root: None }
    }

    /// A single node without children
    pub fn leaf(value: T) -> Self {
        Self::node(Self::empty(), value, Self::empty())
    }

    pub fn node(left: Self, value: T, right: Self) -> Self {
        Self {
            root: Some(Box::new(TreeNode { value, left, right })),
        }
    }

    pub fn root(&self) -> Option<&TreeNode<T>> {
        self.root.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.in_order_iterative().len()
    }

    /// Returns references to all values in in-order (left subtree, node, right subtree).
    /// The recursion depth equals the height of the tree.
    pub fn in_order_recursive(&self) -> Vec<&T> {
        fn walk<'a, T>(tree: &'a BinaryTree<T>, out: &mut Vec<&'a T>) {
            if let Some(node) = tree.root() {
                walk(&node.left, out);
                out.push(&node.value);
                walk(&node.right, out);
            }
        }

        let mut out = Vec::new();
        walk(self, &mut out);
        out
    }

    /// Same as [`BinaryTree::in_order_recursive`] with an explicit stack
    pub fn in_order_iterative(&self) -> Vec<&T> {
        let mut out = Vec::new();
        let mut stack: Vec<&TreeNode<T>> = Vec::new();
        let mut current = self.root();

        loop {
            while let Some(node) = current {
                stack.push(node);
                current = node.left.root();
            }

            let Some(node) = stack.pop() else {
                return out;
            };
            out.push(&node.value);
            current = node.right.root();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    /// Builds a random tree over the values `lo..hi` with the in-order `lo, lo + 1, ..., hi - 1`
    fn random_tree(rng: &mut impl Rng, lo: u32, hi: u32) -> BinaryTree<u32> {
        if lo >= hi {
            return BinaryTree::empty();
        }
        let mid = rng.random_range(lo..hi);
        BinaryTree::node(random_tree(rng, lo, mid), mid, random_tree(rng, mid + 1, hi))
    }

    #[test]
    fn empty() {
        let tree: BinaryTree<u32> = BinaryTree::default();
        assert!(tree.is_empty());
        assert!(tree.in_order_recursive().is_empty());
        assert!(tree.in_order_iterative().is_empty());
    }

    #[test]
    fn degenerate_chains() {
        let mut left = BinaryTree::empty();
        let mut right = BinaryTree::empty();
        for i in 0..2_000u32 {
            left = BinaryTree::node(left, i, BinaryTree::empty());
            right = BinaryTree::node(BinaryTree::empty(), 1_999 - i, right);
        }

        let expected: Vec<u32> = (0..2_000).collect();
        assert_eq!(left.in_order_iterative().into_iter().copied().collect::<Vec<_>>(), expected);
        assert_eq!(right.in_order_iterative().into_iter().copied().collect::<Vec<_>>(), expected);
        assert_eq!(left.len(), 2_000);
    }

    #[test]
    fn both_orders_agree_on_random_trees() {
        let rng = &mut Pcg64Mcg::seed_from_u64(23);

        for size in [1, 2, 10, 100] {
            let tree = random_tree(rng, 0, size);
            let expected: Vec<u32> = (0..size).collect();

            assert_eq!(tree.len(), size as usize);
            assert_eq!(tree.in_order_recursive().into_iter().copied().collect::<Vec<_>>(), expected);
            assert_eq!(tree.in_order_iterative().into_iter().copied().collect::<Vec<_>>(), expected);
        }
    }
}
