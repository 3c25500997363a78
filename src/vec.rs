// Invariants maintained by every public method:
// - `0 <= len <= cap` always holds.
// - `ptr` is a live allocation for `cap` elements iff `cap > 0` (for
//   non-zero-sized `T`); dangling iff `cap == 0`.
// - Slots `[0, len)` hold initialized `T` values; slots `[len, cap)` are
//   allocated but uninitialized and must never be read as `T`.
// - The container is the unique owner of the buffer.

use core::{
    fmt,
    marker::PhantomData,
    ops::{Index, IndexMut},
    ptr::{self, NonNull},
    slice,
};

use alloc::vec::Vec;

use crate::raw;

/// A growable, contiguous sequence that grows by relocating its raw buffer.
///
/// See the [crate-level docs](crate) for the design and the ownership
/// protocol. The short version: growth is a `realloc`-style byte relocation
/// with no per-element work, and duplication only happens through the
/// explicit [`copy_to`](ReloVec::copy_to) / [`move_to`](ReloVec::move_to) /
/// [`release`](ReloVec::release) operations.
pub struct ReloVec<T> {
    ptr: NonNull<T>,
    len: usize,
    cap: usize,
    marker: PhantomData<T>,
}

static_assertions::assert_eq_size!(ReloVec<u8>, [usize; 3]);
static_assertions::assert_eq_size!(ReloVec<u8>, Option<ReloVec<u8>>);

// SAFETY: ReloVec uniquely owns its buffer and elements; sending or sharing
// it is exactly as safe as sending or sharing the `T`s themselves.
unsafe impl<T: Send> Send for ReloVec<T> {}
unsafe impl<T: Sync> Sync for ReloVec<T> {}

/// Rounds up to the next even number.
///
/// Capacities are biased even: it costs one mask and keeps the growth
/// sequence predictable for tests.
fn round_up_even(n: usize) -> usize {
    n.checked_add(1).expect("capacity overflow") & !1
}

impl<T> ReloVec<T> {
    /// Creates an empty container. Does not allocate.
    pub const fn new() -> Self {
        ReloVec {
            ptr: NonNull::dangling(),
            len: 0,
            cap: 0,
            marker: PhantomData,
        }
    }

    /// Creates an empty container with capacity for at least `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut vec = Self::new();
        vec.reserve(capacity);
        vec
    }

    /// Number of live elements.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated element slots.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    // ----- storage & growth policy -----

    /// Ensures `capacity() >= min_capacity`. No-op when already satisfied.
    ///
    /// On growth the new capacity is
    /// `max(even(cap + cap/4 + 2), even(min_capacity + 1))`: amortized
    /// ~1.25x plus a small additive constant, rounded up to even. The buffer
    /// is relocated as raw bytes; live elements are untouched.
    #[inline]
    pub fn reserve(&mut self, min_capacity: usize) {
        if self.cap < min_capacity {
            self.grow_capacity(min_capacity);
        }
    }

    #[cold]
    fn grow_capacity(&mut self, min_capacity: usize) {
        let by_policy = round_up_even(self.cap + self.cap / 4 + 2);
        let by_request = round_up_even(min_capacity.checked_add(1).expect("capacity overflow"));
        let new_cap = by_policy.max(by_request);
        // SAFETY: `ptr` was granted with `cap`, and is replaced wholesale.
        self.ptr = unsafe { raw::reallocate(self.ptr, self.cap, new_cap) };
        self.cap = new_cap;
    }

    /// Shrinks capacity to the current length. See [`trim_to`](Self::trim_to).
    pub fn trim(&mut self) {
        self.trim_to(self.len);
    }

    /// Shrinks capacity toward `max_capacity`, but never below `len()`.
    /// No-op when capacity is already within the bound.
    ///
    /// Shrinking never happens implicitly: no other operation reduces
    /// capacity, which is what makes [`push_unchecked`](Self::push_unchecked)
    /// after a [`reserve`](Self::reserve) sound.
    pub fn trim_to(&mut self, max_capacity: usize) {
        let target = max_capacity.max(self.len);
        if self.cap <= target {
            return;
        }
        // SAFETY: `ptr` was granted with `cap`; `target >= len`, so every
        // live element's bytes survive the relocation.
        self.ptr = unsafe { raw::reallocate(self.ptr, self.cap, target) };
        self.cap = target;
    }

    // ----- element lifecycle -----

    /// Grows the container to `size` elements, default-constructing each new
    /// slot in increasing index order. No-op (and never a shrink) when
    /// `size <= len()`.
    pub fn grow_to(&mut self, size: usize)
    where
        T: Default,
    {
        if size <= self.len {
            return;
        }
        self.reserve(size);
        while self.len < size {
            // SAFETY: `len < size <= cap`; the slot is uninitialized.
            unsafe { ptr::write(self.ptr.as_ptr().add(self.len), T::default()) };
            self.len += 1;
        }
    }

    /// Like [`grow_to`](Self::grow_to), but clones `pad` into each new slot.
    pub fn grow_to_with(&mut self, size: usize, pad: &T)
    where
        T: Clone,
    {
        if size <= self.len {
            return;
        }
        self.reserve(size);
        while self.len < size {
            // SAFETY: `len < size <= cap`; the slot is uninitialized.
            unsafe { ptr::write(self.ptr.as_ptr().add(self.len), pad.clone()) };
            self.len += 1;
        }
    }

    /// Drops elements from the end down to `size`, in decreasing index order
    /// (stack discipline). No-op when `size >= len()`. Capacity is untouched.
    pub fn shrink_to(&mut self, size: usize) {
        while self.len > size {
            self.len -= 1;
            // SAFETY: slot `len` held a live element and is now part of the
            // uninitialized tail.
            unsafe { ptr::drop_in_place(self.ptr.as_ptr().add(self.len)) };
        }
    }

    /// Sets the length to `size`, growing with defaults or shrinking as
    /// needed.
    pub fn set_size(&mut self, size: usize)
    where
        T: Default,
    {
        if size > self.len {
            self.grow_to(size);
        } else {
            self.shrink_to(size);
        }
    }

    /// Sets the length to `size`, growing with clones of `pad` or shrinking
    /// as needed.
    pub fn set_size_with(&mut self, size: usize, pad: &T)
    where
        T: Clone,
    {
        if size > self.len {
            self.grow_to_with(size, pad);
        } else {
            self.shrink_to(size);
        }
    }

    /// Appends an element, growing capacity first if needed. Amortized O(1).
    #[inline]
    pub fn push(&mut self, elem: T) {
        if self.len == self.cap {
            self.grow_one();
        }
        // SAFETY: `len < cap` after the check/grow; the slot is uninitialized.
        unsafe { ptr::write(self.ptr.as_ptr().add(self.len), elem) };
        self.len += 1;
    }

    /// Appends a default-constructed element.
    #[inline]
    pub fn push_default(&mut self)
    where
        T: Default,
    {
        self.push(T::default());
    }

    #[cold]
    fn grow_one(&mut self) {
        debug_assert_eq!(self.len, self.cap);
        self.grow_capacity(self.len.checked_add(1).expect("capacity overflow"));
    }

    /// Appends an element without checking or growing capacity.
    ///
    /// The quick-push half of the reserve-then-fill pattern: after
    /// `reserve(n)`, exactly `n` of these never reallocate, so the base
    /// pointer stays stable across the whole fill.
    ///
    /// # Safety
    ///
    /// The caller must have reserved spare capacity: `len() < capacity()`.
    #[inline]
    pub unsafe fn push_unchecked(&mut self, elem: T) {
        debug_assert!(
            self.len < self.cap,
            "push_unchecked without reserved capacity"
        );
        // SAFETY: the caller guarantees `len < cap`.
        unsafe { ptr::write(self.ptr.as_ptr().add(self.len), elem) };
        self.len += 1;
    }

    /// Drops the last element.
    ///
    /// Panics on an empty container.
    pub fn pop(&mut self) {
        assert!(self.len > 0, "pop on empty ReloVec");
        self.len -= 1;
        // SAFETY: slot `len` held a live element.
        unsafe { ptr::drop_in_place(self.ptr.as_ptr().add(self.len)) };
    }

    /// Moves the last element out.
    ///
    /// Panics on an empty container.
    pub fn pop_value(&mut self) -> T {
        assert!(self.len > 0, "pop on empty ReloVec");
        self.len -= 1;
        // SAFETY: slot `len` held a live element and is now part of the
        // uninitialized tail; reading it moves the value out exactly once.
        unsafe { ptr::read(self.ptr.as_ptr().add(self.len)) }
    }

    /// Drops all elements. Capacity is kept.
    pub fn clear(&mut self) {
        self.shrink_to(0);
    }

    /// Drops all elements and returns the buffer to the allocator, leaving
    /// the container with capacity 0.
    pub fn reset(&mut self) {
        self.clear();
        // SAFETY: `ptr` was granted with `cap` and is not used afterwards.
        unsafe { raw::release(self.ptr, self.cap) };
        self.ptr = NonNull::dangling();
        self.cap = 0;
    }

    // ----- indexing & views -----

    /// Returns a reference to the element at `index`, or `None` out of
    /// bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Grows the container (default-constructing any new slots) so that
    /// `index` is valid, then returns a mutable reference to it.
    pub fn at(&mut self, index: usize) -> &mut T
    where
        T: Default,
    {
        self.grow_to(index + 1);
        &mut self[index]
    }

    /// Like [`at`](Self::at), but clones `pad` into any new slots.
    pub fn at_with(&mut self, index: usize, pad: &T) -> &mut T
    where
        T: Clone,
    {
        self.grow_to_with(index + 1, pad);
        &mut self[index]
    }

    /// Returns the element at offset `r` from the top of the stack, i.e. at
    /// index `len() - r - 1`. `peek(0)` is the last element.
    ///
    /// This is a zero-based offset: the one-based end-relative position
    /// `len() - r` addresses the same element with `peek(r - 1)`.
    ///
    /// Panics when `r >= len()`.
    pub fn peek(&self, r: usize) -> &T {
        assert!(r < self.len, "peek past the bottom of the stack");
        &self[self.len - r - 1]
    }

    pub fn peek_mut(&mut self, r: usize) -> &mut T {
        assert!(r < self.len, "peek past the bottom of the stack");
        let index = self.len - r - 1;
        &mut self[index]
    }

    /// The last element. Panics on an empty container.
    #[inline]
    pub fn last(&self) -> &T {
        self.peek(0)
    }

    #[inline]
    pub fn last_mut(&mut self) -> &mut T {
        self.peek_mut(0)
    }

    /// Raw pointer to the storage slot one past the last live element.
    ///
    /// The slot is allocated but *uninitialized*: writing through the pointer
    /// does not make it a live element, and nothing may read it as a `T`.
    /// Invalidated by any operation that resizes or releases the buffer.
    pub fn end_slot(&mut self) -> *mut T {
        debug_assert!(self.len < self.cap, "end_slot without reserved capacity");
        // SAFETY: `len <= cap`, so the offset stays within (or one past) the
        // allocation; the pointer is not dereferenced here.
        unsafe { self.ptr.as_ptr().add(self.len) }
    }

    /// Raw pointer to the start of the buffer. Invalidated by any operation
    /// that resizes or releases the buffer.
    #[inline]
    pub fn base(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[inline]
    pub fn base_mut(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Borrows the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[0, len)` holds initialized elements.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `[0, len)` holds initialized elements, uniquely owned.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Borrows `[start, end)` as a slice. Panics when the range is out of
    /// bounds or inverted.
    pub fn slice(&self, start: usize, end: usize) -> &[T] {
        &self.as_slice()[start..end]
    }

    /// Borrows `[start, len())` as a slice.
    pub fn slice_from(&self, start: usize) -> &[T] {
        &self.as_slice()[start..]
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    // ----- copy/move protocol -----

    /// Deep-copies all elements into `dest`, replacing its contents.
    ///
    /// A destination whose capacity exceeds twice this container's length is
    /// not allowed to keep its oversized buffer: it is released and regrown
    /// tightly to the copied size. Otherwise `dest` is resized in place.
    pub fn copy_to(&self, dest: &mut ReloVec<T>)
    where
        T: Clone,
    {
        dest.clear();
        if dest.cap > 2 * self.len {
            dest.reset();
            dest.ptr = raw::allocate(self.len);
            dest.cap = self.len;
        } else {
            dest.reserve(self.len);
        }
        for (i, elem) in self.iter().enumerate() {
            // SAFETY: `i < len <= dest.cap`; the slot is uninitialized.
            unsafe { ptr::write(dest.ptr.as_ptr().add(i), elem.clone()) };
            dest.len = i + 1;
        }
    }

    /// Transfers buffer ownership to `dest`, dropping `dest`'s prior
    /// contents and leaving `self` empty with capacity 0.
    ///
    /// Pure ownership transfer: no element is cloned or dropped, so this is
    /// O(1) regardless of element type or length.
    pub fn move_to(&mut self, dest: &mut ReloVec<T>) {
        dest.reset();
        dest.ptr = self.ptr;
        dest.len = self.len;
        dest.cap = self.cap;
        self.ptr = NonNull::dangling();
        self.len = 0;
        self.cap = 0;
    }

    // ----- release -----

    /// Hands the buffer out as an independently owned `Vec<T>` and leaves the
    /// container empty with capacity 0.
    ///
    /// Dropping the now-inert container afterwards does not touch the
    /// returned storage.
    pub fn release(&mut self) -> Vec<T> {
        let (ptr, len, cap) = (self.ptr, self.len, self.cap);
        self.ptr = NonNull::dangling();
        self.len = 0;
        self.cap = 0;
        if cap == 0 {
            return Vec::new();
        }
        // SAFETY: the buffer is a live global-allocator allocation laid out
        // as `Layout::array::<T>(cap)` with `len` initialized elements, and
        // ownership transfers wholesale to the Vec.
        unsafe { Vec::from_raw_parts(ptr.as_ptr(), len, cap) }
    }
}

impl<T> Drop for ReloVec<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: `ptr` was granted with `cap` and is never used again.
        unsafe { raw::release(self.ptr, self.cap) };
    }
}

impl<T> Default for ReloVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for ReloVec<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for ReloVec<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T> IntoIterator for &'a ReloVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ReloVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for ReloVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ReloVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ReloVec<T> {}

impl<T: PartialEq> PartialEq<[T]> for ReloVec<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for ReloVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn new_is_inert() {
        let v: ReloVec<i32> = ReloVec::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn push_pop_contents() {
        let mut v = ReloVec::new();
        for i in 1..=5 {
            v.push(i);
        }
        v.pop();
        v.pop();
        assert_eq!(v.len(), 3);
        assert_eq!(*v.last(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn pop_value_moves_out() {
        let mut v = ReloVec::new();
        v.push(7);
        v.push(8);
        assert_eq!(v.pop_value(), 8);
        assert_eq!(v.pop_value(), 7);
        assert!(v.is_empty());
    }

    #[test]
    #[should_panic(expected = "pop on empty")]
    fn pop_empty_panics() {
        let mut v: ReloVec<i32> = ReloVec::new();
        v.pop();
    }

    #[test]
    fn growth_sequence_is_even_and_amortized() {
        let mut v = ReloVec::new();
        let mut caps = Vec::new();
        for i in 0..40 {
            v.push(i);
            if caps.last() != Some(&v.capacity()) {
                caps.push(v.capacity());
            }
        }
        // even(cap + cap/4 + 2) from 0: 2, 4, 8, 12, 18, 24, 32, 42, ...
        assert_eq!(caps, [2, 4, 8, 12, 18, 24, 32, 42]);
        for cap in caps {
            assert_eq!(cap % 2, 0);
        }
    }

    #[test]
    fn size_never_exceeds_capacity() {
        let mut v = ReloVec::new();
        for i in 0..100 {
            v.push(i);
            assert!(v.len() <= v.capacity());
        }
        v.shrink_to(13);
        assert!(v.len() <= v.capacity());
        v.grow_to(64);
        assert!(v.len() <= v.capacity());
        v.trim();
        assert!(v.len() <= v.capacity());
    }

    #[test]
    fn reserve_then_push_unchecked_is_stable() {
        let mut v = ReloVec::new();
        v.reserve(10);
        let cap = v.capacity();
        let base = v.base();
        for i in 0..10 {
            // SAFETY: capacity for 10 was reserved above.
            unsafe { v.push_unchecked(i) };
            assert_eq!(v.base(), base);
        }
        assert!(cap >= 10);
        assert_eq!(v.capacity(), cap);
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn grow_to_pads_with_default_or_value() {
        let mut v: ReloVec<i32> = ReloVec::new();
        v.grow_to(3);
        assert_eq!(v.as_slice(), &[0, 0, 0]);
        v.grow_to_with(5, &9);
        assert_eq!(v.as_slice(), &[0, 0, 0, 9, 9]);
        // Growing to a smaller size is a no-op, never a shrink.
        v.grow_to(1);
        assert_eq!(v.len(), 5);
    }

    #[test]
    fn shrink_keeps_prefix() {
        let mut v = ReloVec::new();
        for i in 0..10 {
            v.push(i);
        }
        v.shrink_to(4);
        assert_eq!(v.as_slice(), &[0, 1, 2, 3]);
        // Shrinking to a larger size is a no-op.
        v.shrink_to(9);
        assert_eq!(v.len(), 4);
    }

    #[test]
    fn grow_then_shrink_preserves_original_prefix() {
        let mut v = ReloVec::new();
        for i in [3, 1, 4, 1, 5] {
            v.push(i);
        }
        v.grow_to(12);
        assert!(v.len() <= v.capacity());
        v.shrink_to(4);
        assert!(v.len() <= v.capacity());
        assert_eq!(v.as_slice(), &[3, 1, 4, 1]);
    }

    #[test]
    fn set_size_dispatches() {
        let mut v: ReloVec<u8> = ReloVec::new();
        v.set_size(4);
        assert_eq!(v.as_slice(), &[0, 0, 0, 0]);
        v.set_size_with(6, &7);
        assert_eq!(v.as_slice(), &[0, 0, 0, 0, 7, 7]);
        v.set_size(2);
        assert_eq!(v.as_slice(), &[0, 0]);
    }

    #[test]
    fn trim_to_respects_len() {
        let mut v = ReloVec::new();
        v.reserve(100);
        for i in 0..10 {
            v.push(i);
        }
        let cap = v.capacity();
        v.trim_to(200);
        assert_eq!(v.capacity(), cap, "trim never increases capacity");
        v.trim_to(3);
        assert_eq!(v.capacity(), 10, "trim never drops below len");
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
        v.trim();
        assert_eq!(v.capacity(), 10);
    }

    #[test]
    fn clear_and_reset() {
        let mut v = ReloVec::new();
        for i in 0..8 {
            v.push(i);
        }
        let cap = v.capacity();
        v.clear();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), cap);
        v.push(1);
        v.reset();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn indexing_and_get() {
        let mut v = ReloVec::new();
        v.push(10);
        v.push(20);
        assert_eq!(v[0], 10);
        v[1] = 21;
        assert_eq!(v.get(1), Some(&21));
        assert_eq!(v.get(2), None);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds_panics() {
        let v: ReloVec<i32> = ReloVec::new();
        let _ = v[0];
    }

    #[test]
    fn at_grows_on_demand() {
        let mut v: ReloVec<i32> = ReloVec::new();
        *v.at(3) = 42;
        assert_eq!(v.as_slice(), &[0, 0, 0, 42]);
        *v.at_with(5, &7) = 8;
        assert_eq!(v.as_slice(), &[0, 0, 0, 42, 7, 8]);
        // An in-bounds index grows nothing.
        *v.at(0) = 1;
        assert_eq!(v.len(), 6);
    }

    #[test]
    fn peek_from_the_top() {
        let mut v = ReloVec::new();
        for i in 1..=4 {
            v.push(i);
        }
        assert_eq!(*v.peek(0), 4);
        assert_eq!(*v.peek(3), 1);
        *v.peek_mut(1) = 30;
        assert_eq!(v.as_slice(), &[1, 2, 30, 4]);
        *v.last_mut() = 40;
        assert_eq!(*v.last(), 40);
    }

    #[test]
    #[should_panic(expected = "peek past the bottom")]
    fn peek_past_the_bottom_panics() {
        let mut v = ReloVec::new();
        v.push(1);
        v.push(2);
        let _ = v.peek(2);
    }

    #[test]
    #[should_panic]
    fn inverted_slice_range_panics() {
        let mut v = ReloVec::new();
        for i in 0..4 {
            v.push(i);
        }
        let _ = v.slice(3, 1);
    }

    #[test]
    #[should_panic]
    fn slice_past_len_panics() {
        let mut v = ReloVec::new();
        v.push(1);
        let _ = v.slice(0, 2);
    }

    #[test]
    fn end_slot_points_past_the_last_element() {
        let mut v = ReloVec::new();
        v.reserve(4);
        v.push(1);
        v.push(2);
        let slot = v.end_slot();
        assert_eq!(slot as *const i32, unsafe { v.base().add(2) });
        // Writing through the slot stages a value without making it live.
        unsafe { slot.write(3) };
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn slices_and_iteration() {
        let mut v = ReloVec::new();
        for i in 0..6 {
            v.push(i);
        }
        assert_eq!(v.slice(1, 4), &[1, 2, 3]);
        assert_eq!(v.slice_from(4), &[4, 5]);
        assert_eq!(v.iter().copied().sum::<i32>(), 15);
        for x in &mut v {
            *x *= 2;
        }
        assert_eq!(v, [0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn copy_to_is_independent() {
        let mut a = ReloVec::new();
        for i in 0..5 {
            a.push(i);
        }
        let mut b = ReloVec::new();
        a.copy_to(&mut b);
        assert_eq!(a, b);
        b[0] = 100;
        assert_eq!(a[0], 0);
    }

    #[test]
    fn copy_to_tightens_oversized_destination() {
        let mut a = ReloVec::new();
        for i in 0..100 {
            a.push(i);
        }
        a.trim();
        assert_eq!(a.capacity(), 100);

        let mut b: ReloVec<i32> = ReloVec::new();
        b.reserve(500);
        assert!(b.capacity() >= 500);
        a.copy_to(&mut b);
        assert_eq!(b.capacity(), 100, "oversized destination regrows tightly");
        assert_eq!(a, b);

        // A destination within 2x is resized in place.
        let mut c: ReloVec<i32> = ReloVec::new();
        c.reserve(150);
        let cap = c.capacity();
        a.copy_to(&mut c);
        assert_eq!(c.capacity(), cap);
        assert_eq!(a, c);
    }

    #[test]
    fn copy_to_keeps_buffer_at_exactly_twice_len() {
        let mut a = ReloVec::new();
        for i in 0..5 {
            a.push(i);
        }
        // A destination at exactly 2x the source length is not oversized.
        let mut b: ReloVec<i32> = ReloVec::new();
        b.reserve(9);
        assert_eq!(b.capacity(), 10);
        a.copy_to(&mut b);
        assert_eq!(b.capacity(), 10, "boundary destination must keep its buffer");
        assert_eq!(a, b);
    }

    #[test]
    fn move_to_empties_the_source() {
        let mut a = ReloVec::new();
        a.push(7);
        a.push(8);
        a.push(9);
        let mut b = ReloVec::new();
        b.push(0);
        a.move_to(&mut b);
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
        assert_eq!(b, [7, 8, 9]);
    }

    #[test]
    fn release_hands_the_buffer_out() {
        let mut v = ReloVec::new();
        for i in 1..=3 {
            v.push(i);
        }
        let out = v.release();
        assert_eq!(out, [1, 2, 3]);
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 0);
        // The inert container can be reused.
        v.push(10);
        assert_eq!(v, [10]);
    }

    #[test]
    fn release_empty_is_empty() {
        let mut v: ReloVec<i32> = ReloVec::new();
        let out = v.release();
        assert!(out.is_empty());
        assert_eq!(out.capacity(), 0);
    }

    #[test]
    fn zero_sized_elements() {
        let mut v = ReloVec::new();
        for _ in 0..1000 {
            v.push(());
        }
        assert_eq!(v.len(), 1000);
        v.shrink_to(10);
        assert_eq!(v.len(), 10);
        assert_eq!(v.pop_value(), ());
        v.reset();
        assert_eq!(v.capacity(), 0);
    }

    #[test]
    fn debug_formats_as_list() {
        let mut v = ReloVec::new();
        v.push(1);
        v.push(2);
        assert_eq!(alloc::format!("{v:?}"), "[1, 2]");
    }
}
