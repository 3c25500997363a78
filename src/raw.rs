//! Raw buffer primitives: the allocator-facing edge of the container.
//!
//! The allocator keeps no per-allocation metadata, so every call here takes
//! the element count explicitly. The count passed to [`reallocate`] and
//! [`release`] must be the capacity most recently granted for that buffer.
//!
//! Zero-sized layouts (`count == 0`, or a zero-sized `T`) never touch the
//! allocator: allocation returns a dangling pointer and release is a no-op.

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error, realloc};
use core::ptr::NonNull;

fn array_layout<T>(count: usize) -> Layout {
    Layout::array::<T>(count).expect("capacity overflow")
}

/// Allocates uninitialized storage for `count` elements of `T`.
///
/// Aborts the process via [`handle_alloc_error`] if the allocator fails.
pub(crate) fn allocate<T>(count: usize) -> NonNull<T> {
    let layout = array_layout::<T>(count);
    if layout.size() == 0 {
        return NonNull::dangling();
    }
    // SAFETY: the layout has non-zero size.
    let ptr = unsafe { alloc(layout) };
    match NonNull::new(ptr.cast()) {
        Some(ptr) => ptr,
        None => handle_alloc_error(layout),
    }
}

/// Resizes a buffer from `old_count` to `new_count` elements.
///
/// The raw bytes of the first `min(old_count, new_count)` elements are
/// preserved at their relative offsets; the address may change. Element
/// values are carried by the byte copy alone, no per-element work happens.
///
/// # Safety
///
/// `ptr` must have come from [`allocate`] or [`reallocate`] with a count of
/// exactly `old_count`, and must not be used after this call.
pub(crate) unsafe fn reallocate<T>(
    ptr: NonNull<T>,
    old_count: usize,
    new_count: usize,
) -> NonNull<T> {
    let old_layout = array_layout::<T>(old_count);
    let new_layout = array_layout::<T>(new_count);
    if old_layout.size() == 0 {
        return allocate(new_count);
    }
    if new_layout.size() == 0 {
        // SAFETY: per contract, `ptr` was granted with `old_count`.
        unsafe { release(ptr, old_count) };
        return NonNull::dangling();
    }
    // SAFETY: `ptr` was allocated with `old_layout`, and both layouts have
    // non-zero size. `Layout::array` already bounds the byte size.
    let new_ptr = unsafe { realloc(ptr.as_ptr().cast(), old_layout, new_layout.size()) };
    match NonNull::new(new_ptr.cast()) {
        Some(ptr) => ptr,
        None => handle_alloc_error(new_layout),
    }
}

/// Returns a buffer to the allocator.
///
/// # Safety
///
/// `ptr` must have come from [`allocate`] or [`reallocate`] with a count of
/// exactly `count`, and must not be used after this call.
pub(crate) unsafe fn release<T>(ptr: NonNull<T>, count: usize) {
    let layout = array_layout::<T>(count);
    if layout.size() == 0 {
        return;
    }
    // SAFETY: `ptr` was allocated with exactly this layout.
    unsafe { dealloc(ptr.as_ptr().cast(), layout) }
}
