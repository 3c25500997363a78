//! ReloVec: a growable vector that relocates raw storage instead of moving
//! elements.
//!
//! A [`ReloVec<T>`] is a contiguous, indexable sequence with the usual
//! `(ptr, len, cap)` bookkeeping, but growth works like a resizing `realloc`:
//! the whole buffer is handed to the allocator with its old and new element
//! counts, and the live elements travel as raw bytes. No element is ever
//! cloned, moved field-by-field, or dropped just because the container grew.
//!
//! ```text
//! ptr ──▶ [ live elements.. | uninitialized slots.. ]
//!          └── len ────────┘
//!          └── cap ───────────────────────────────┘
//! ```
//!
//! # Why relocate?
//!
//! Growth cost is a flat byte copy (often free when the allocator extends the
//! block in place), independent of the element type. This is sound in Rust
//! without any opt-in marker: a Rust move is an untyped bitwise copy, there
//! are no move constructors, and no value's validity may depend on its own
//! address. Every `T` is relocatable by construction.
//!
//! # Ownership protocol
//!
//! `ReloVec` implements no `Clone`. Duplicating or transferring the contents
//! is always an explicit, named operation:
//!
//! - [`ReloVec::copy_to`]: deep copy, element by element.
//! - [`ReloVec::move_to`]: O(1) buffer ownership transfer, source left empty.
//! - [`ReloVec::release`]: hand the buffer out as an independently owned
//!   `Vec<T>`, container left empty.
//!
//! # Example
//!
//! ```
//! use relo_vec::ReloVec;
//!
//! let mut v = ReloVec::new();
//! for i in 1..=5 {
//!     v.push(i);
//! }
//! v.pop();
//! v.pop();
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//! assert_eq!(*v.last(), 3);
//!
//! let mut w = ReloVec::new();
//! v.move_to(&mut w);
//! assert!(v.is_empty());
//! assert_eq!(v.capacity(), 0);
//! assert_eq!(w.as_slice(), &[1, 2, 3]);
//! ```
//!
//! # Gotchas
//!
//! - **Pointers don't survive growth**: anything obtained from
//!   [`ReloVec::base`] or [`ReloVec::end_slot`] is invalidated by any
//!   operation that reallocates, resizes, or releases the buffer. Slice
//!   borrows are protected by the borrow checker; raw pointers are on you.
//! - **Not thread-safe**: no internal synchronization. `Send`/`Sync` follow
//!   `T`, but concurrent mutation needs external locking like any `&mut`.
//! - **Checked, not fallible**: out-of-bounds indexing and popping an empty
//!   container panic. Allocation failure aborts; there is no error type to
//!   handle. The only debug-assert-guarded fast path is the `unsafe`
//!   [`ReloVec::push_unchecked`].

#![no_std]
#![allow(unsafe_code)]

extern crate alloc;

mod raw;
mod vec;

pub use vec::ReloVec;
