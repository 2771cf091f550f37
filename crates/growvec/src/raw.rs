//! Raw backing storage for [`GrowVec`](crate::GrowVec).
//!
//! [`RawBuf`] is the single owner of one contiguous heap block of exactly
//! `cap` element slots. It acquires the block from the system allocator,
//! releases it exactly once on drop, and transfers ownership in O(1) via
//! [`RawBuf::swap`] and [`RawBuf::take`]. It has no notion of how many
//! slots are in use: slot initialization and element drops are entirely the
//! owning container's contract.
//!
//! # Safety
//!
//! - The block is live iff `cap > 0` and `T` is not zero-sized; otherwise
//!   the pointer is dangling and nothing is ever deallocated.
//! - Slot access is unchecked. Callers must stay inside `[0, cap)`.
//! - Allocation failure is fatal (`handle_alloc_error`); a slot count whose
//!   byte size would overflow `isize` panics with "capacity overflow".

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// Exclusive owner of a contiguous block of `cap` uninitialized slots.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
}

// The block is plain owned storage; it moves between threads exactly as
// freely as its elements do.
unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// Creates a buffer that owns no allocation (`cap == 0`).
    pub(crate) const fn dangling() -> Self {
        RawBuf {
            ptr: NonNull::dangling(),
            cap: 0,
        }
    }

    /// Allocates a block of exactly `cap` uninitialized slots.
    ///
    /// A request for zero slots, or any request for a zero-sized element
    /// type, performs no allocation. The reported capacity is still `cap`.
    ///
    /// # Panics
    ///
    /// Panics if the byte size of `cap` slots overflows `isize`. Allocator
    /// failure aborts via [`alloc::handle_alloc_error`].
    pub(crate) fn allocate(cap: usize) -> Self {
        if cap == 0 || std::mem::size_of::<T>() == 0 {
            return RawBuf {
                ptr: NonNull::dangling(),
                cap,
            };
        }

        let Ok(layout) = Layout::array::<T>(cap) else {
            panic!("capacity overflow: {cap} slots do not fit in a single block")
        };

        // SAFETY: cap > 0 and T is sized, so the layout has non-zero size.
        let ptr = unsafe { alloc::alloc(layout) };
        let Some(ptr) = NonNull::new(ptr.cast::<T>()) else {
            alloc::handle_alloc_error(layout)
        };

        #[cfg(feature = "alloc-log")]
        growvec_log::trace!("acquired block of {cap} slots ({} bytes)", layout.size());

        RawBuf { ptr, cap }
    }

    /// Number of slots in the block.
    #[inline]
    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    /// Pointer to slot 0. Dangling (but aligned) when `cap == 0`.
    #[inline]
    pub(crate) const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable pointer to slot 0. Dangling (but aligned) when `cap == 0`.
    #[inline]
    pub(crate) const fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Pointer to slot `index` with no bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be at most `cap` (one past the end is valid for
    /// pointer arithmetic only).
    #[inline]
    pub(crate) unsafe fn item_ptr(&self, index: usize) -> *const T {
        debug_assert!(index <= self.cap);
        // SAFETY: caller keeps index within the block per the contract above.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Mutable pointer to slot `index` with no bounds check.
    ///
    /// # Safety
    ///
    /// Same contract as [`RawBuf::item_ptr`].
    #[inline]
    pub(crate) unsafe fn item_mut(&mut self, index: usize) -> *mut T {
        debug_assert!(index <= self.cap);
        // SAFETY: caller keeps index within the block per the contract above.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Exchanges block ownership with `other` in O(1). No allocation.
    #[inline]
    pub(crate) fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.ptr, &mut other.ptr);
        std::mem::swap(&mut self.cap, &mut other.cap);
    }

    /// Transfers the block out, leaving `self` with no allocation.
    #[allow(dead_code)]
    pub(crate) fn take(&mut self) -> Self {
        std::mem::replace(self, RawBuf::dangling())
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 || std::mem::size_of::<T>() == 0 {
            return;
        }

        #[cfg(feature = "alloc-log")]
        growvec_log::trace!("released block of {} slots", self.cap);

        // SAFETY: cap > 0 and T is sized, so this recomputes the exact
        // layout the block was allocated with in `allocate`.
        let layout = unsafe { Layout::array::<T>(self.cap).unwrap_unchecked() };

        // SAFETY: the pointer came from `alloc::alloc` with this layout and
        // ownership is exclusive, so the block is released exactly once.
        unsafe {
            alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}
