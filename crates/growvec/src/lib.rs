//! Growable contiguous array with explicit capacity control.
//!
//! This crate provides [`GrowVec`], a dynamic array built on a single
//! contiguous heap block, with:
//!
//! - **Amortized O(1) append** through doubling growth
//! - **Exact capacity reservation** ([`GrowVec::reserve`] allocates
//!   precisely what was asked for)
//! - **Positional insert/remove** with overlap-safe element shifts
//! - **Checked and unchecked access** as two distinct operations
//!   ([`GrowVec::at`] vs [`GrowVec::get_unchecked`])
//!
//! Capacity only ever grows; shrinking operations lower the logical length
//! and leave the block in place.
//!
//! # Architecture
//!
//! - `raw` — `RawBuf` owns the heap block: acquire, O(1) ownership
//!   transfer, release exactly once. No notion of length.
//! - `vec` — [`GrowVec`] layers length tracking, growth policy, and the
//!   public operation surface on top of one `RawBuf`.
//!
//! # Features
//!
//! - `alloc-log`: trace every block acquisition, growth, and release
//!   through `growvec-log`.
//!
//! # Example
//!
//! ```
//! use growvec::growvec;
//!
//! let mut v = growvec![1, 2, 3];
//! v.insert(1, 9).unwrap();
//! assert_eq!(v, [1, 9, 2, 3]);
//!
//! v.remove(1).unwrap();
//! v.resize(5);
//! assert_eq!(v, [1, 2, 3, 0, 0]);
//! ```

mod error;
mod raw;
mod vec;

pub use error::{Error, Result};
pub use vec::GrowVec;
