/*!
# Edge Weights

All weighted algorithms are generic over [`Weight`], which is implemented for every type that
is copyable, totally ordered, bounded, has a zero and supports overflow-checked addition. In
practice this covers all primitive integers:
- signed weights (`i32`, `i64`, ...) allow negative edges for Bellman–Ford and Floyd–Warshall,
- unsigned weights (`u32`, `u64`, ...) turn the non-negativity precondition of Dijkstra and
  Prim into a property of the type.

Floating point types are intentionally not covered as they are not totally ordered.

Sums are never allowed to wrap. A path whose length exceeds `W::max_value()` is never taken,
while a sum below `W::min_value()` is still smaller than every representable distance and
saturates there.
*/

use std::fmt::Debug;

use num::{Bounded, CheckedAdd, Zero};

/// Bound shared by all edge weights and accumulated distances
pub trait Weight: Copy + Ord + Debug + Bounded + Zero + CheckedAdd {}

impl<T> Weight for T where T: Copy + Ord + Debug + Bounded + Zero + CheckedAdd {}

/// Outcome of adding two weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sum<W> {
    Exact(W),
    /// The exact sum lies below `W::min_value()`
    Underflow,
    /// The exact sum lies above `W::max_value()`
    Overflow,
}

impl<W: Weight> Sum<W> {
    /// Adds `a + b` and classifies an out-of-range result by its direction
    #[inline]
    pub(crate) fn of(a: W, b: W) -> Self {
        match a.checked_add(&b) {
            Some(s) => Sum::Exact(s),
            None if b < W::zero() => Sum::Underflow,
            None => Sum::Overflow,
        }
    }

    /// Candidate for a relaxation: underflows saturate at `W::min_value()`, overflows
    /// yield `None`
    #[inline]
    pub(crate) fn saturate_below(self) -> Option<W> {
        match self {
            Sum::Exact(s) => Some(s),
            Sum::Underflow => Some(W::min_value()),
            Sum::Overflow => None,
        }
    }
}

/// Sums all `weights`, returning `None` only if the total itself is out of range.
///
/// Negative and non-negative summands are interleaved such that every partial sum lies
/// between zero and one summand, until one kind is used up. From then on the partial sums
/// move monotonically towards the total.
pub(crate) fn checked_total<W: Weight>(weights: impl IntoIterator<Item = W>) -> Option<W> {
    let (mut negative, mut positive): (Vec<W>, Vec<W>) =
        weights.into_iter().partition(|&w| w < W::zero());

    let mut total = W::zero();
    loop {
        let next = if total < W::zero() {
            positive.pop().or_else(|| negative.pop())
        } else {
            negative.pop().or_else(|| positive.pop())
        };

        match next {
            Some(w) => total = total.checked_add(&w)?,
            None => return Some(total),
        }
    }
}

/// Returns *true* if `candidate` is strictly better than the currently known value
#[inline]
pub(crate) fn improves<W: Weight>(candidate: W, current: Option<W>) -> bool {
    current.is_none_or(|c| candidate < c)
}
