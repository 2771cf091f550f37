//! The growable array.
//!
//! [`GrowVec`] owns exactly one [`RawBuf`] plus a `len` counter. Live
//! elements occupy the contiguous slot range `[0, len)`; slots `[len, cap)`
//! are reserved, uninitialized storage. Every operation preserves
//! `len <= cap` and releases each block exactly once.
//!
//! # Growth policy
//!
//! Capacity only ever grows. When a mutation needs more room than the
//! current block holds, a fresh block of exactly twice the target length is
//! allocated, the live elements are moved across, and ownership of the old
//! block is swapped away and released. The one exception: inserting into a
//! container that has never allocated acquires exactly one slot.
//! Shrinking operations (`resize` downward, `clear`, `pop`) never touch
//! capacity.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};
use std::ptr;
use std::slice;

use crate::error::{Error, Result};
use crate::raw::RawBuf;

/// A contiguous growable array with explicit capacity control.
///
/// Semantically a `Vec<T>` reimplementation with a deliberately exact
/// capacity schedule: sized constructors and [`reserve`](GrowVec::reserve)
/// allocate precisely what was asked for, growth on a full container
/// doubles past the target length, and capacity is never given back short
/// of replacing the whole value.
///
/// # Examples
///
/// ```
/// use growvec::{growvec, GrowVec};
///
/// let mut v = growvec![1, 2, 3];
/// v.push(4);
/// assert_eq!(v, [1, 2, 3, 4]);
///
/// let pos = v.insert(1, 9).unwrap();
/// assert_eq!(pos, 1);
/// assert_eq!(v, [1, 9, 2, 3, 4]);
///
/// assert_eq!(v.remove(1), Ok(9));
/// assert_eq!(v, [1, 2, 3, 4]);
/// ```
pub struct GrowVec<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> GrowVec<T> {
    /// Creates an empty container. No allocation is performed.
    #[must_use]
    pub const fn new() -> Self {
        GrowVec {
            buf: RawBuf::dangling(),
            len: 0,
        }
    }

    /// Creates an empty container with room for exactly `cap` elements.
    ///
    /// Appends stay reallocation-free until the `cap + 1`-th element.
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        GrowVec {
            buf: RawBuf::allocate(cap),
            len: 0,
        }
    }

    /// Creates a container of `len` default-valued elements.
    ///
    /// Allocates exactly `len` slots.
    #[must_use]
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut vec = Self::with_capacity(len);
        for _ in 0..len {
            vec.push(T::default());
        }
        vec
    }

    /// Creates a container of `len` clones of `value`.
    ///
    /// Allocates exactly `len` slots.
    #[must_use]
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(len);
        for _ in 0..len {
            vec.push(value.clone());
        }
        vec
    }

    /// Creates a container holding clones of `values`, in order.
    ///
    /// Allocates exactly `values.len()` slots.
    #[must_use]
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(values.len());
        for value in values {
            vec.push(value.clone());
        }
        vec
    }

    /// Number of live elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the container holds no live elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing block.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buf.cap()
    }

    /// Ensures the backing block holds at least `new_capacity` slots.
    ///
    /// A no-op when `new_capacity <= capacity()`. Otherwise a fresh block
    /// of exactly `new_capacity` slots replaces the current one, with the
    /// live elements moved across in order. `len` is unchanged.
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.buf.cap() {
            self.grow_to(new_capacity);
        }
    }

    /// Changes the logical length to `new_len`.
    ///
    /// - Shrinking drops the elements at `[new_len, len)` in place and
    ///   leaves capacity untouched.
    /// - Growing within capacity fills `[len, new_len)` with defaults.
    /// - Growing past capacity replaces the block with one of exactly
    ///   `2 * new_len` slots before filling, so a run of follow-up appends
    ///   stays reallocation-free.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        if new_len < self.len {
            self.truncate_to(new_len);
            return;
        }

        if new_len > self.buf.cap() {
            self.grow_to(doubled(new_len));
        }

        while self.len < new_len {
            // SAFETY: len < new_len <= cap, so slot `len` is in bounds and
            // not yet live.
            unsafe {
                self.buf.item_mut(self.len).write(T::default());
            }
            self.len += 1;
        }
    }

    /// Drops all live elements. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate_to(0);
    }

    /// Appends `value`. Amortized O(1).
    ///
    /// On a full container the block is replaced first, sized by the
    /// doubling policy for `len + 1`.
    pub fn push(&mut self, value: T) {
        if self.len == self.buf.cap() {
            self.grow_to(doubled(self.len + 1));
        }

        // SAFETY: the growth check above guarantees len < cap; slot `len`
        // is reserved and not yet live.
        unsafe {
            self.buf.item_mut(self.len).write(value);
        }
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` when empty.
    ///
    /// The vacated slot's storage is untouched; capacity never shrinks.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: slot `len` held the last live element and is no longer
        // reachable through the public surface after the decrement.
        Some(unsafe { self.buf.item_ptr(self.len).read() })
    }

    /// Inserts `value` at `index`, shifting later elements one slot right.
    ///
    /// `index == len()` appends. Returns the insertion index. A container
    /// that has never allocated acquires exactly one slot; a full one grows
    /// by the doubling policy for `len + 1`.
    ///
    /// # Errors
    ///
    /// [`Error::InsertOutOfBounds`] when `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize> {
        if index > self.len {
            return Err(Error::InsertOutOfBounds {
                index,
                len: self.len,
            });
        }

        if self.len == 0 && self.buf.cap() == 0 {
            let mut block: RawBuf<T> = RawBuf::allocate(1);
            // SAFETY: the fresh block has one reserved slot.
            unsafe {
                block.item_mut(0).write(value);
            }
            self.buf.swap(&mut block);
            self.len = 1;
            return Ok(0);
        }

        if self.len == self.buf.cap() {
            self.grow_to(doubled(self.len + 1));
        }

        // SAFETY: index <= len < cap. The shift copies the overlapping
        // range [index, len) onto [index + 1, len + 1) via memmove, then
        // the freed slot receives the new value.
        unsafe {
            ptr::copy(
                self.buf.item_ptr(index),
                self.buf.item_mut(index + 1),
                self.len - index,
            );
            self.buf.item_mut(index).write(value);
        }
        self.len += 1;

        Ok(index)
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// one slot left. Capacity is unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] when `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        // SAFETY: index < len. The value is read out before the memmove of
        // [index + 1, len) onto [index, len - 1) overwrites its slot.
        let value = unsafe {
            let value = self.buf.item_ptr(index).read();
            ptr::copy(
                self.buf.item_ptr(index + 1),
                self.buf.item_mut(index),
                self.len - index - 1,
            );
            value
        };
        self.len -= 1;

        Ok(value)
    }

    /// Checked access. Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] when `index >= len()`; the error carries
    /// the offending index, never clamped.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        // SAFETY: bounds-checked above.
        Ok(unsafe { &*self.buf.item_ptr(index) })
    }

    /// Checked mutable access, same contract as [`GrowVec::at`].
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfBounds`] when `index >= len()`.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        if index >= self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        // SAFETY: bounds-checked above.
        Ok(unsafe { &mut *self.buf.item_mut(index) })
    }

    /// Unchecked access for callers that have already proven `index < len()`.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`GrowVec::len`]. Violating this is
    /// undefined behavior in release builds; debug builds assert.
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees index < len.
        unsafe { &*self.buf.item_ptr(index) }
    }

    /// Unchecked mutable access, same contract as [`GrowVec::get_unchecked`].
    ///
    /// # Safety
    ///
    /// `index` must be less than [`GrowVec::len`].
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees index < len.
        unsafe { &mut *self.buf.item_mut(index) }
    }

    /// The live elements as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self
    }

    /// The live elements as a mutable slice.
    #[inline]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    /// Replaces the backing block with a fresh one of exactly `new_cap`
    /// slots, moving the live elements across in order.
    ///
    /// The new block is fully acquired before any ownership changes hands,
    /// so an allocation failure leaves the container in its pre-call state.
    fn grow_to(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len);

        let mut block = RawBuf::allocate(new_cap);

        #[cfg(feature = "alloc-log")]
        growvec_log::trace!(
            "growing capacity {} -> {} (len {})",
            self.buf.cap(),
            new_cap,
            self.len
        );

        // SAFETY: both blocks hold at least `len` slots and are distinct
        // allocations. The elements are moved, not duplicated: the old
        // block is released below without dropping its slots, since RawBuf
        // never drops elements.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), block.as_mut_ptr(), self.len);
        }

        self.buf.swap(&mut block);
        // `block` now owns the old allocation and releases it here.
    }

    /// Drops the live elements at `[new_len, len)` and lowers `len`.
    fn truncate_to(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.len);

        let tail_len = self.len - new_len;
        // len is lowered before the drops so a panicking element `Drop`
        // cannot expose already-dropped slots.
        self.len = new_len;

        // SAFETY: the tail slots held live elements; nothing can reach
        // them anymore after the len update.
        unsafe {
            let tail = ptr::slice_from_raw_parts_mut(self.buf.item_mut(new_len), tail_len);
            ptr::drop_in_place(tail);
        }
    }
}

/// Doubling growth target for a mutation that needs `new_len` slots.
///
/// Allocating `2 * new_len` rather than `new_len` is what amortizes a run
/// of appends to O(1) each.
#[inline]
fn doubled(new_len: usize) -> usize {
    match new_len.checked_mul(2) {
        Some(cap) => cap,
        None => panic!("capacity overflow: cannot double past {new_len} slots"),
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        // SAFETY: exactly the slots [0, len) are live. The block itself is
        // released once by RawBuf's own drop.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.buf.as_mut_ptr(),
                self.len,
            ));
        }
    }
}

impl<T> Default for GrowVec<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        // SAFETY: [0, len) is initialized; a dangling (aligned) pointer is
        // valid for a zero-length slice.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }
}

impl<T> DerefMut for GrowVec<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        // SAFETY: same as Deref; exclusive access through &mut self.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }
}

impl<T: Clone> Clone for GrowVec<T> {
    /// Clones the live elements into a block of exactly `len()` slots.
    /// Spare capacity is not carried over.
    fn clone(&self) -> Self {
        Self::from_slice(self)
    }

    /// Cloning from an empty source just clears `self`, keeping its block.
    /// Otherwise a complete temporary is built first and swapped in, so a
    /// failed clone leaves `self` unmodified.
    fn clone_from(&mut self, source: &Self) {
        if source.is_empty() {
            self.clear();
            return;
        }

        let mut tmp = source.clone();
        std::mem::swap(self, &mut tmp);
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(values: &[T]) -> Self {
        Self::from_slice(values)
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut vec = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            vec.push(value);
        }
        vec
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T: PartialEq> PartialEq<[T]> for GrowVec<T> {
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GrowVec<T> {
    #[inline]
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

// Lexicographic ordering is delegated to the slice view; `<=`, `>` and
// `>=` come from the traits' provided methods.
impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for GrowVec<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Constructs a [`GrowVec`] from a literal element list or `[value; count]`
/// repetition, allocating exactly as many slots as elements.
///
/// # Examples
///
/// ```
/// use growvec::growvec;
///
/// let v = growvec![1, 2, 3];
/// assert_eq!(v.capacity(), 3);
///
/// let zeros = growvec![0u8; 4];
/// assert_eq!(zeros, [0, 0, 0, 0]);
///
/// let empty: growvec::GrowVec<u8> = growvec![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! growvec {
    () => {
        $crate::GrowVec::new()
    };
    ($value:expr; $count:expr) => {
        $crate::GrowVec::from_elem($count, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::GrowVec::from_slice(&[$($value),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty_without_allocation() {
        let vec: GrowVec<u32> = GrowVec::new();
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 0);
        assert!(vec.is_empty());
    }

    #[test]
    fn with_capacity_reserves_exactly() {
        let vec: GrowVec<u32> = GrowVec::with_capacity(7);
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.capacity(), 7);
    }

    #[test]
    fn with_len_fills_defaults() {
        let vec: GrowVec<u32> = GrowVec::with_len(3);
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.capacity(), 3);
        assert_eq!(vec, [0, 0, 0]);
    }

    #[test]
    fn from_elem_fills_clones() {
        let vec = GrowVec::from_elem(4, 9u8);
        assert_eq!(vec, [9, 9, 9, 9]);
        assert_eq!(vec.capacity(), 4);
    }

    #[test]
    fn from_slice_copies_in_order() {
        let vec = GrowVec::from_slice(&[1, 2, 3]);
        assert_eq!(vec, [1, 2, 3]);
        assert_eq!(vec.capacity(), 3);
    }

    #[test]
    fn macro_forms() {
        let a: GrowVec<i32> = growvec![];
        assert!(a.is_empty());

        let b = growvec![5; 3];
        assert_eq!(b, [5, 5, 5]);

        let c = growvec![1, 2, 3,];
        assert_eq!(c, [1, 2, 3]);
        assert_eq!(c.capacity(), 3);
    }

    #[test]
    fn push_follows_doubling_schedule() {
        let mut vec = GrowVec::new();

        vec.push(0u32);
        assert_eq!(vec.capacity(), 2);

        vec.push(1);
        assert_eq!(vec.capacity(), 2);

        vec.push(2);
        assert_eq!(vec.capacity(), 6);

        for i in 3..7u32 {
            vec.push(i);
        }
        assert_eq!(vec.capacity(), 14);
        assert_eq!(vec, [0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn push_within_capacity_never_reallocates() {
        let mut vec = GrowVec::with_capacity(8);
        for i in 0..8 {
            vec.push(i);
            assert_eq!(vec.capacity(), 8);
        }
    }

    #[test]
    fn pop_returns_last_and_keeps_capacity() {
        let mut vec = growvec![1, 2, 3];

        assert_eq!(vec.pop(), Some(3));
        assert_eq!(vec.pop(), Some(2));
        assert_eq!(vec.pop(), Some(1));
        assert_eq!(vec.pop(), None);
        assert_eq!(vec.capacity(), 3);
    }

    #[test]
    fn push_pop_restores_prefix() {
        let mut vec = growvec![1, 2, 3];
        vec.push(4);
        assert_eq!(vec.pop(), Some(4));
        assert_eq!(vec, [1, 2, 3]);
    }

    #[test]
    fn reserve_is_exact_and_monotonic() {
        let mut vec = growvec![1, 2];
        assert_eq!(vec.capacity(), 2);

        vec.reserve(10);
        assert_eq!(vec.capacity(), 10);
        assert_eq!(vec.len(), 2);
        assert_eq!(vec, [1, 2]);

        // Smaller or equal requests are no-ops.
        vec.reserve(4);
        assert_eq!(vec.capacity(), 10);
        vec.reserve(10);
        assert_eq!(vec.capacity(), 10);
    }

    #[test]
    fn resize_shrink_keeps_capacity() {
        let mut vec = growvec![1, 2, 3, 4];
        vec.resize(1);
        assert_eq!(vec, [1]);
        assert_eq!(vec.capacity(), 4);
    }

    #[test]
    fn resize_within_capacity_fills_defaults() {
        let mut vec: GrowVec<u32> = GrowVec::with_capacity(5);
        vec.push(7);

        vec.resize(4);
        assert_eq!(vec, [7, 0, 0, 0]);
        assert_eq!(vec.capacity(), 5);
    }

    #[test]
    fn resize_past_capacity_doubles_target() {
        let mut vec = growvec![1u32, 2, 3];
        vec.resize(5);
        assert_eq!(vec, [1, 2, 3, 0, 0]);
        assert_eq!(vec.capacity(), 10);
    }

    #[test]
    fn resize_to_zero_empties() {
        let mut vec = growvec![1, 2, 3];
        vec.resize(0);
        assert!(vec.is_empty());
        assert_eq!(vec.capacity(), 3);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut vec = growvec![1, 2, 3];
        vec.clear();
        assert!(vec.is_empty());
        assert_eq!(vec.capacity(), 3);
    }

    #[test]
    fn insert_into_fresh_container_takes_one_slot() {
        let mut vec = GrowVec::new();
        assert_eq!(vec.insert(0, 42), Ok(0));
        assert_eq!(vec, [42]);
        assert_eq!(vec.capacity(), 1);
    }

    #[test]
    fn insert_mid_shifts_right() {
        let mut vec = growvec![1, 2, 3];
        assert_eq!(vec.insert(1, 9), Ok(1));
        assert_eq!(vec, [1, 9, 2, 3]);
    }

    #[test]
    fn insert_at_len_appends() {
        let mut vec = growvec![1, 2];
        assert_eq!(vec.insert(2, 3), Ok(2));
        assert_eq!(vec, [1, 2, 3]);
    }

    #[test]
    fn insert_full_grows_doubled() {
        let mut vec = growvec![1, 2, 3];
        assert_eq!(vec.capacity(), 3);

        vec.insert(0, 0).unwrap();
        assert_eq!(vec, [0, 1, 2, 3]);
        assert_eq!(vec.capacity(), 8);
    }

    #[test]
    fn insert_past_len_is_rejected() {
        let mut vec = growvec![1, 2];
        assert_eq!(
            vec.insert(3, 9),
            Err(Error::InsertOutOfBounds { index: 3, len: 2 })
        );
        assert_eq!(vec, [1, 2]);
    }

    #[test]
    fn remove_shifts_left_and_returns_value() {
        let mut vec = growvec![1, 2, 3, 4];
        assert_eq!(vec.remove(1), Ok(2));
        assert_eq!(vec, [1, 3, 4]);
        assert_eq!(vec.capacity(), 4);
    }

    #[test]
    fn remove_last_and_out_of_bounds() {
        let mut vec = growvec![1, 2];
        assert_eq!(vec.remove(1), Ok(2));
        assert_eq!(
            vec.remove(1),
            Err(Error::IndexOutOfBounds { index: 1, len: 1 })
        );
        assert_eq!(vec.remove(0), Ok(1));
        assert_eq!(
            vec.remove(0),
            Err(Error::IndexOutOfBounds { index: 0, len: 0 })
        );
    }

    #[test]
    fn remove_then_insert_round_trips() {
        let mut vec = growvec![1, 2, 3, 4];
        for index in 0..vec.len() {
            let original = vec.clone();
            let value = vec.remove(index).unwrap();
            vec.insert(index, value).unwrap();
            assert_eq!(vec, original);
        }
    }

    #[test]
    fn at_checks_bounds() {
        let vec = growvec![10, 20];
        assert_eq!(vec.at(0), Ok(&10));
        assert_eq!(vec.at(1), Ok(&20));
        assert_eq!(vec.at(2), Err(Error::IndexOutOfBounds { index: 2, len: 2 }));
    }

    #[test]
    fn at_mut_writes_through() {
        let mut vec = growvec![1, 2, 3];
        *vec.at_mut(1).unwrap() = 9;
        assert_eq!(vec, [1, 9, 3]);
        assert!(vec.at_mut(3).is_err());
    }

    #[test]
    fn unchecked_access_matches_checked() {
        let mut vec = growvec![4, 5, 6];
        // SAFETY: indices are within [0, 3).
        unsafe {
            assert_eq!(*vec.get_unchecked(2), 6);
            *vec.get_unchecked_mut(0) = 7;
        }
        assert_eq!(vec, [7, 5, 6]);
    }

    #[test]
    fn deref_gives_slice_ops() {
        let mut vec = growvec![3, 1, 2];
        vec.sort();
        assert_eq!(vec.first(), Some(&1));
        assert_eq!(vec[2], 3);
        assert_eq!(vec.iter().sum::<i32>(), 6);
    }

    #[test]
    fn clone_copies_live_elements_only() {
        let mut vec = GrowVec::with_capacity(16);
        vec.extend([1, 2, 3]);

        let copy = vec.clone();
        assert_eq!(copy, vec);
        assert_eq!(copy.capacity(), 3);
    }

    #[test]
    fn clone_is_independent() {
        let vec = growvec![1, 2, 3];
        let mut copy = vec.clone();
        copy[0] = 99;
        copy.push(4);

        assert_eq!(vec, [1, 2, 3]);
        assert_eq!(copy, [99, 2, 3, 4]);
    }

    #[test]
    fn clone_from_empty_source_clears_in_place() {
        let mut vec = growvec![1, 2, 3];
        let empty: GrowVec<i32> = GrowVec::new();

        vec.clone_from(&empty);
        assert!(vec.is_empty());
        assert_eq!(vec.capacity(), 3);
    }

    #[test]
    fn clone_from_nonempty_source_replaces() {
        let mut vec = growvec![1, 2];
        let source = growvec![7, 8, 9];

        vec.clone_from(&source);
        assert_eq!(vec, [7, 8, 9]);
    }

    #[test]
    fn move_semantics_transfer_storage() {
        let vec = growvec![1, 2, 3];
        let ptr = vec.as_ptr();

        let moved = vec;
        assert_eq!(moved, [1, 2, 3]);
        assert_eq!(moved.as_ptr(), ptr);
    }

    #[test]
    fn swap_via_mem_swap() {
        let mut a = growvec![1, 2];
        let mut b = growvec![3, 4, 5];

        std::mem::swap(&mut a, &mut b);
        assert_eq!(a, [3, 4, 5]);
        assert_eq!(b, [1, 2]);
    }

    #[test]
    fn equality_and_ordering() {
        let a = growvec![1, 2, 3];
        let b = growvec![1, 2, 3];
        let c = growvec![1, 2];
        let d = growvec![1, 2, 4];

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(c < a);
        assert!(a < d);
        assert!(a <= b);
        assert!(d > a);
        assert!(b >= a);
    }

    #[test]
    fn capacity_never_affects_equality() {
        let mut a = GrowVec::with_capacity(32);
        a.extend([1, 2, 3]);
        let b = growvec![1, 2, 3];
        assert_eq!(a, b);
    }

    #[test]
    fn from_iterator_collects() {
        let vec: GrowVec<u32> = (0..5).collect();
        assert_eq!(vec, [0, 1, 2, 3, 4]);
    }

    #[test]
    fn debug_formats_as_list() {
        let vec = growvec![1, 2, 3];
        assert_eq!(format!("{vec:?}"), "[1, 2, 3]");
    }

    #[test]
    fn zero_sized_elements() {
        let mut vec = GrowVec::new();
        for _ in 0..100 {
            vec.push(());
        }
        assert_eq!(vec.len(), 100);
        assert_eq!(vec.pop(), Some(()));
        assert_eq!(vec.len(), 99);
    }

    #[test]
    fn owned_elements_survive_growth() {
        let mut vec = GrowVec::new();
        for i in 0..40 {
            vec.push(format!("item-{i}"));
        }
        for (i, item) in vec.iter().enumerate() {
            assert_eq!(item, &format!("item-{i}"));
        }
    }
}
