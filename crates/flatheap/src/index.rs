//! Implicit binary tree index arithmetic.
//!
//! The heap is a complete binary tree laid out level by level:
//!
//! ```text
//!                 0
//!          1             2
//!      3       4     5       6
//!    7   8   9  10 11  12  13  14
//! ```
//!
//! The last level is usually incomplete.

/// Index of the parent of `i`. `i` must be non-zero.
///
/// ```
/// use flatheap::index::parent;
/// assert_eq!(parent(1), 0);
/// assert_eq!(parent(2), 0);
/// assert_eq!(parent(5), 2);
/// assert_eq!(parent(14), 6);
/// ```
#[inline]
pub fn parent(i: usize) -> usize {
    (i - 1) >> 1
}

/// Index of the left child of `i`.
///
/// ```
/// use flatheap::index::left_child;
/// assert_eq!(left_child(0), 1);
/// assert_eq!(left_child(3), 7);
/// ```
#[inline]
pub fn left_child(i: usize) -> usize {
    (i << 1) + 1
}

/// Index of the right child of `i`.
///
/// ```
/// use flatheap::index::right_child;
/// assert_eq!(right_child(0), 2);
/// assert_eq!(right_child(6), 14);
/// ```
#[inline]
pub fn right_child(i: usize) -> usize {
    (i << 1) + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn children_point_back_to_parent() {
        for i in 0..1000 {
            assert_eq!(parent(left_child(i)), i);
            assert_eq!(parent(right_child(i)), i);
        }
    }

    #[test]
    fn siblings_are_adjacent() {
        for i in 0..1000 {
            assert_eq!(right_child(i), left_child(i) + 1);
        }
    }
}
