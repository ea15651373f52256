//! The two-array binary min-heap.

use std::mem;

use crate::drain::DrainSorted;
use crate::error::HeapError;
use crate::index;

/// A binary min-heap storing payloads and priorities in two parallel `Vec`s.
///
/// `items[i]` and `priorities[i]` always describe the same entry; both
/// vectors are grown, shrunk and swapped together and neither is exposed
/// mutably. The entry with the smallest priority sits at index 0.
///
/// `V` only needs [`PartialOrd`]: the heap uses `<` and `>` and nothing
/// else, so `f32`/`f64` priorities work directly. An incomparable priority
/// (NaN) does not panic, but its position in extraction order is
/// unspecified.
///
/// # Example
///
/// ```
/// use flatheap::FlatHeap;
///
/// let mut heap = FlatHeap::new();
/// heap.push(1, 10.0);
/// heap.push(2, 11.0);
/// heap.push(3, 9.0);
///
/// assert_eq!(*heap.peek(), 3);
/// assert_eq!(*heap.peek_priority(), 9.0);
/// assert_eq!(heap.pop(), 3);
/// assert_eq!(heap.pop(), 1);
/// assert_eq!(heap.try_pop(), Some(2));
/// assert_eq!(heap.try_pop(), None);
/// ```
#[derive(Clone, Debug)]
pub struct FlatHeap<T, V> {
    /// Payloads, index-aligned with `priorities`.
    items: Vec<T>,
    /// Ordering keys. Min-heap ordered.
    priorities: Vec<V>,
}

impl<T, V> FlatHeap<T, V> {
    /// Create an empty heap. Does not allocate.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            priorities: Vec::new(),
        }
    }

    /// Create an empty heap with room for `capacity` entries.
    ///
    /// The first `capacity` pushes will not reallocate. A capacity of
    /// zero is the same as [`new`](Self::new).
    pub fn with_capacity(capacity: usize) -> Self {
        log::debug!("FlatHeap reserving {capacity} slots");
        Self {
            items: Vec::with_capacity(capacity),
            priorities: Vec::with_capacity(capacity),
        }
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    ///
    /// Returns [`HeapError::ReserveFailed`] instead of aborting when the
    /// allocation cannot be made.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, HeapError> {
        let mut heap = Self::new();
        heap.try_reserve(capacity)?;
        Ok(heap)
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.items.len(), self.priorities.len());
        self.items.len()
    }

    /// Returns `true` if the heap holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of entries the heap can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.items.capacity().min(self.priorities.capacity())
    }

    /// Reserve room for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        let before = self.capacity();
        self.items.reserve(additional);
        self.priorities.reserve(additional);
        let after = self.capacity();
        if after != before {
            log::debug!(
                "FlatHeap grew from {before} to {after} slots ({} live)",
                self.len()
            );
        }
    }

    /// Fallible form of [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), HeapError> {
        let len = self.len();
        self.items
            .try_reserve(additional)
            .and_then(|()| self.priorities.try_reserve(additional))
            .map_err(|err| {
                log::debug!("FlatHeap failed to reserve {additional} slots ({len} live): {err}");
                HeapError::ReserveFailed { additional, len }
            })
    }

    /// Release unused capacity in both arrays.
    pub fn shrink_to_fit(&mut self) {
        let before = self.capacity();
        self.items.shrink_to_fit();
        self.priorities.shrink_to_fit();
        log::debug!("FlatHeap shrank from {before} to {} slots", self.capacity());
    }

    /// Remove every entry, keeping the allocated capacity for reuse.
    pub fn clear(&mut self) {
        log::trace!("FlatHeap cleared ({} live, {} slots kept)", self.len(), self.capacity());
        self.items.clear();
        self.priorities.clear();
    }

    /// The payload with the smallest priority.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty. Use [`try_peek`](Self::try_peek) when
    /// emptiness is possible.
    #[track_caller]
    pub fn peek(&self) -> &T {
        match self.items.first() {
            Some(item) => item,
            None => empty_access("peek"),
        }
    }

    /// The smallest priority in the heap.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    #[track_caller]
    pub fn peek_priority(&self) -> &V {
        match self.priorities.first() {
            Some(priority) => priority,
            None => empty_access("peek_priority"),
        }
    }

    /// The root entry's payload and priority.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    #[track_caller]
    pub fn peek_with_priority(&self) -> (&T, &V) {
        match self.try_peek_with_priority() {
            Some(entry) => entry,
            None => empty_access("peek_with_priority"),
        }
    }

    /// The payload with the smallest priority, or `None` if empty.
    pub fn try_peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// The smallest priority, or `None` if empty.
    pub fn try_peek_priority(&self) -> Option<&V> {
        self.priorities.first()
    }

    /// The root entry's payload and priority, or `None` if empty.
    pub fn try_peek_with_priority(&self) -> Option<(&T, &V)> {
        self.items.first().zip(self.priorities.first())
    }

    /// Pop every entry in priority order.
    ///
    /// Entries not consumed when the iterator is dropped are cleared;
    /// capacity is kept either way.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, V>
    where
        V: PartialOrd,
    {
        DrainSorted::new(self)
    }

    /// Swap entries `a` and `b` in both arrays.
    #[inline]
    fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
        self.priorities.swap(a, b);
    }
}

impl<T, V: PartialOrd> FlatHeap<T, V> {
    /// Insert `item` with `priority`.
    ///
    /// O(log n). An entry whose priority equals its parent's is moved
    /// above it, so equal priorities are not extracted in insertion order.
    pub fn push(&mut self, item: T, priority: V) {
        self.items.push(item);
        self.priorities.push(priority);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the payload with the smallest priority.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty. Use [`try_pop`](Self::try_pop) when
    /// emptiness is possible.
    #[track_caller]
    pub fn pop(&mut self) -> T {
        match self.try_pop_with_priority() {
            Some((item, _)) => item,
            None => empty_access("pop"),
        }
    }

    /// Remove and return the root entry's payload and priority.
    ///
    /// # Panics
    ///
    /// Panics if the heap is empty.
    #[track_caller]
    pub fn pop_with_priority(&mut self) -> (T, V) {
        match self.try_pop_with_priority() {
            Some(entry) => entry,
            None => empty_access("pop_with_priority"),
        }
    }

    /// Remove and return the payload with the smallest priority, or `None`
    /// if the heap is empty.
    pub fn try_pop(&mut self) -> Option<T> {
        self.try_pop_with_priority().map(|(item, _)| item)
    }

    /// Remove and return the root entry, or `None` if the heap is empty.
    pub fn try_pop_with_priority(&mut self) -> Option<(T, V)> {
        let (mut item, mut priority) = self.items.pop().zip(self.priorities.pop())?;
        if !self.items.is_empty() {
            // The former last entry takes the root slot and sinks.
            mem::swap(&mut item, &mut self.items[0]);
            mem::swap(&mut priority, &mut self.priorities[0]);
            self.sift_down(0);
        }
        Some((item, priority))
    }

    /// Move the entry at `pos` towards the root until its parent is
    /// strictly smaller.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = index::parent(pos);
            if self.priorities[pos] > self.priorities[parent] {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    /// Move the entry at `pos` towards the leaves until its smaller child
    /// is strictly greater. The right child is chosen only when strictly
    /// smaller than the left.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.len();
        let half = len >> 1;
        while pos < half {
            let mut best = index::left_child(pos);
            let right = best + 1;
            if right < len && self.priorities[right] < self.priorities[best] {
                best = right;
            }
            if self.priorities[best] > self.priorities[pos] {
                break;
            }
            self.swap(pos, best);
            pos = best;
        }
    }

    #[cfg(test)]
    fn heap_order_holds(&self) -> bool {
        (1..self.len()).all(|i| self.priorities[index::parent(i)] <= self.priorities[i])
    }
}

impl<T, V> Default for FlatHeap<T, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V: PartialOrd> Extend<(T, V)> for FlatHeap<T, V> {
    fn extend<I: IntoIterator<Item = (T, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        for (item, priority) in iter {
            self.push(item, priority);
        }
    }
}

impl<T, V: PartialOrd> FromIterator<(T, V)> for FlatHeap<T, V> {
    fn from_iter<I: IntoIterator<Item = (T, V)>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

#[cold]
#[inline(never)]
#[track_caller]
fn empty_access(op: &str) -> ! {
    panic!("{op} on empty FlatHeap")
}
