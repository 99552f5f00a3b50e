#![no_std]

//! `GrowVec`: a heap-backed growable vector with explicit capacity control.
//!
//! `GrowVec` owns exactly one contiguous buffer at a time and keeps a
//! logical length below or equal to the allocated capacity. Appending is
//! amortized O(1): a full buffer is replaced by a fresh one of
//! `max(required, capacity * 2)` slots (at least one slot on the first
//! growth), the elements are moved across, and buffer ownership is
//! swapped in a single step. The buffer itself is an [`OwnedBuf`], a
//! move-only handle with explicit release and swap.
//!
//! ```
//! use growvec::GrowVec;
//!
//! let mut vec = GrowVec::new();
//! vec.push(1);
//! vec.push(2);
//! vec.push(3);
//!
//! assert_eq!(vec.as_slice(), &[1, 2, 3]);
//! assert!(vec.capacity() >= 3);
//!
//! vec.insert(1, 9);
//! assert_eq!(vec.as_slice(), &[1, 9, 2, 3]);
//!
//! let first = vec.remove(0);
//! assert_eq!(first, 1);
//! assert_eq!(vec.pop(), Some(3));
//! assert_eq!(vec.as_slice(), &[9, 2]);
//! ```
//!
//! # Capacity Control
//!
//! Reallocation is explicit and predictable. `reserve()` allocates
//! exactly the requested capacity, and a [`Reservation`] token pre-sizes
//! a vector at construction so that a known number of appends never
//! reallocates:
//!
//! ```
//! use growvec::{reserve, GrowVec};
//!
//! let mut vec = GrowVec::from(reserve(100));
//! let initial_capacity = vec.capacity();
//! for i in 0..100 {
//!     vec.push(i);
//! }
//! assert_eq!(vec.capacity(), initial_capacity);
//! ```
//!
//! Capacity never shrinks: `clear()` and shrinking `resize()` only lower
//! the logical length and keep the allocation for reuse.
//!
//! # Checked and Unchecked Access
//!
//! Indexing (`vec[i]`) panics on an out-of-bounds index; `try_get()` and
//! `try_get_mut()` report [`GrowVecError::IndexOutOfBounds`] instead:
//!
//! ```
//! use growvec::{GrowVec, GrowVecError};
//!
//! let vec = GrowVec::from([10, 20]);
//! assert_eq!(vec[1], 20);
//! assert_eq!(
//!     vec.try_get(2),
//!     Err(GrowVecError::IndexOutOfBounds { index: 2, length: 2 })
//! );
//! ```
//!
//! # Iteration
//!
//! `iter()`, `iter_mut()` and the owning [`IntoIter`] visit the logical
//! contents in order. Any capacity-changing call moves the elements to a
//! fresh buffer, so borrows taken earlier must be re-fetched afterwards;
//! the borrow checker enforces this.
//!
//! # `no_std` Compatibility
//!
//! The crate is `no_std` and depends only on `alloc`. Enable the optional
//! `std` feature to forward to `thiserror/std`:
//!
//! ```toml
//! [dependencies]
//! growvec = { version = "0.1", features = ["std"] }
//! ```

extern crate alloc;

mod buffer;
mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use buffer::OwnedBuf;
pub use core::{reserve, GrowVec, Reservation};
pub use error::GrowVecError;
pub use iter::IntoIter;
