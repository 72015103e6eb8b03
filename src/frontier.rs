use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A min-ordered frontier with lazy deletion.
///
/// `BinaryHeap` is a max-heap, so entries are wrapped in `Reverse`. Keys are
/// composite tuples whose last component is the node itself, which gives the
/// tie-break on identifier order for free via lexicographic comparison.
///
/// There is no decrease-key: re-ranking a node means pushing a fresh entry
/// and letting the stale one surface later, where the caller recognises and
/// skips it. Duplicate entries for one node are therefore expected.
#[derive(Clone, Debug)]
pub struct MinFrontier<K>
where
    K: Ord,
{
    heap: BinaryHeap<Reverse<K>>,
}

impl<K> MinFrontier<K>
where
    K: Ord,
{
    #[inline(always)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    #[inline(always)]
    pub fn push(&mut self, key: K) {
        self.heap.push(Reverse(key));
    }

    /// Removes and returns the minimum entry.
    #[inline(always)]
    #[must_use]
    pub fn pop(&mut self) -> Option<K> {
        self.heap.pop().map(|Reverse(key)| key)
    }

    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<K> Default for MinFrontier<K>
where
    K: Ord,
{
    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}
