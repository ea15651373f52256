//! Draining iterator in extraction order.

use std::iter::FusedIterator;

use crate::heap::FlatHeap;

/// Iterator returned by [`FlatHeap::drain_sorted`].
///
/// Yields `(payload, priority)` pairs smallest priority first. Whatever is
/// left when the iterator is dropped is cleared from the heap; the heap's
/// capacity survives.
#[derive(Debug)]
pub struct DrainSorted<'a, T, V> {
    heap: &'a mut FlatHeap<T, V>,
}

impl<'a, T, V: PartialOrd> DrainSorted<'a, T, V> {
    pub(crate) fn new(heap: &'a mut FlatHeap<T, V>) -> Self {
        Self { heap }
    }
}

impl<T, V: PartialOrd> Iterator for DrainSorted<'_, T, V> {
    type Item = (T, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.try_pop_with_priority()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.len();
        (len, Some(len))
    }
}

impl<T, V: PartialOrd> ExactSizeIterator for DrainSorted<'_, T, V> {}

impl<T, V: PartialOrd> FusedIterator for DrainSorted<'_, T, V> {}

impl<T, V> Drop for DrainSorted<'_, T, V> {
    fn drop(&mut self) {
        self.heap.clear();
    }
}
