//! Binary min-heap over two parallel dense arrays.
//!
//! [`FlatHeap`] keeps payloads and priorities in two co-indexed `Vec`s
//! instead of an array of structs or linked nodes. Pushing and popping
//! never allocate per entry; storage grows amortized and is retained
//! across [`clear`](FlatHeap::clear) so a heap reused in a hot loop
//! (shortest-path search, event simulation, scheduling) settles into
//! zero allocations.
//!
//! # Layout
//!
//! ```text
//! FlatHeap<T, V>
//! ├── items:      Vec<T>   payloads, index-aligned with priorities
//! └── priorities: Vec<V>   ordering keys, min at index 0
//!
//! parent(i) = (i - 1) / 2    left(i) = 2i + 1    right(i) = 2i + 2
//! ```
//!
//! # Access modes
//!
//! Every read or removal of the root comes in two flavours with
//! incompatible failure contracts:
//!
//! - **Trusting:** [`pop`](FlatHeap::pop), [`peek`](FlatHeap::peek),
//!   [`peek_priority`](FlatHeap::peek_priority) panic on an empty heap.
//! - **Safe:** [`try_pop`](FlatHeap::try_pop), [`try_peek`](FlatHeap::try_peek),
//!   [`try_peek_priority`](FlatHeap::try_peek_priority) return `None`.
//!
//! # Ordering
//!
//! Extraction order is by priority only. Entries with equal priorities come
//! out in an unspecified order; insertion order is not preserved.

#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod drain;
pub mod error;
pub mod heap;
pub mod index;

pub use drain::DrainSorted;
pub use error::HeapError;
pub use heap::FlatHeap;
