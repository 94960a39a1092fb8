use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

/// An owned, fixed-capacity heap allocation of `cap` slots for values of `T`. The Buffer itself
/// never tracks which slots are initialized: that is up to the owner (see
/// [`ArrayList`](super::ArrayList), which keeps every slot below its `len` initialized).
///
/// Dropping a Buffer deallocates the memory without dropping any values in it.
pub(crate) struct Buffer<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) cap: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Buffer<T> {
    /// Allocates a new Buffer with exactly `cap` uninitialized slots.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Buffer<T> {
        Buffer {
            ptr: Self::make_ptr(Self::make_layout(cap)),
            cap,
            _phantom: PhantomData,
        }
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    /// Writes `value` into the slot at `index`, without dropping whatever the slot held before.
    ///
    /// # Safety
    /// `index` must be less than `cap`.
    pub unsafe fn write(&mut self, index: usize, value: T) {
        // SAFETY: The caller guarantees that index is within the allocation.
        unsafe { self.ptr.add(index).write(MaybeUninit::new(value)); }
    }

    /// Moves the value out of the slot at `index`, leaving the slot logically uninitialized.
    ///
    /// # Safety
    /// `index` must be less than `cap` and the slot must be initialized.
    pub unsafe fn read(&self, index: usize) -> T {
        // SAFETY: The caller guarantees that the slot is in bounds and initialized.
        unsafe { self.ptr.add(index).read().assume_init() }
    }

    /// Moves `count` values starting at `index` one slot to the right, leaving `index` free.
    ///
    /// # Safety
    /// `index + count` must be less than `cap` and the `count` slots from `index` must be
    /// initialized.
    pub unsafe fn shift_right(&mut self, index: usize, count: usize) {
        // SAFETY: Both ranges are within the allocation, ptr::copy handles the overlap.
        unsafe {
            let src = self.ptr.add(index).as_ptr();
            ptr::copy(src, src.add(1), count);
        }
    }

    /// Moves `count` values starting at `index + 1` one slot to the left, overwriting `index`
    /// without dropping it.
    ///
    /// # Safety
    /// `index + count` must be less than `cap` and the `count` slots from `index + 1` must be
    /// initialized.
    pub unsafe fn shift_left(&mut self, index: usize, count: usize) {
        // SAFETY: Both ranges are within the allocation, ptr::copy handles the overlap.
        unsafe {
            let dst = self.ptr.add(index).as_ptr();
            ptr::copy(dst.add(1), dst, count);
        }
    }

    /// # Safety
    /// The first `len` slots must be initialized and `len <= cap`.
    pub unsafe fn as_slice(&self, len: usize) -> &[T] {
        // SAFETY: The pointer is non-null and aligned, and the caller guarantees that all `len`
        // values are initialized. Reinterpreting MaybeUninit<T> as T is valid for those slots.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr().cast(), len) }
    }

    /// # Safety
    /// The first `len` slots must be initialized and `len <= cap`.
    pub unsafe fn as_mut_slice(&mut self, len: usize) -> &mut [T] {
        // SAFETY: See as_slice, the borrow of self guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr().cast(), len) }
    }

    /// Drops the values in the first `len` slots in place.
    ///
    /// # Safety
    /// The first `len` slots must be initialized, and must be treated as uninitialized afterwards.
    pub unsafe fn drop_prefix(&mut self, len: usize) {
        // SAFETY: The caller guarantees that the slice is valid and won't be used again.
        unsafe { ptr::drop_in_place(self.as_mut_slice(len)); }
    }

    /// Replaces this allocation with a new one of `new_cap` slots, moving the first `len` values
    /// across. The old allocation is only freed after the copy, and the two never overlap.
    ///
    /// # Safety
    /// The first `len` slots must be initialized and `len <= new_cap`.
    ///
    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub unsafe fn realloc(&mut self, new_cap: usize, len: usize) {
        debug_assert!(len <= new_cap && len <= self.cap);

        let mut new = Buffer::<T>::with_cap(new_cap);
        // SAFETY: Both allocations are valid for len values and are distinct.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), new.ptr.as_ptr(), len);
        }
        // The values now belong to new, so the old allocation is freed without dropping anything.
        mem::swap(self, &mut new);
    }

    /// # Panics
    /// Panics if the memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(cap: usize) -> Layout {
        Layout::array::<MaybeUninit<T>>(cap).map_err(|_| CapacityOverflow).throw()
    }

    /// Returns a dangling pointer for a zero-sized layout, which covers both `cap == 0` and
    /// zero-sized types.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Drop for Buffer<T> {
    fn drop(&mut self) {
        let layout = Self::make_layout(self.cap);
        if layout.size() != 0 {
            // SAFETY: ptr was allocated by make_ptr with this exact layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout); }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::alloc::ZeroSizedType;

    #[test]
    fn test_realloc_moves_prefix() {
        let mut buf = Buffer::<usize>::with_cap(3);
        for i in 0..3 {
            unsafe { buf.write(i, i * 10); }
        }

        let old_ptr = buf.ptr;
        unsafe { buf.realloc(7, 3); }
        assert_ne!(buf.ptr, old_ptr, "Growing should produce a fresh allocation.");
        assert_eq!(buf.cap(), 7);
        assert_eq!(unsafe { buf.as_slice(3) }, &[0, 10, 20]);
    }

    #[test]
    fn test_shifts() {
        let mut buf = Buffer::<u8>::with_cap(4);
        for i in 0..3 {
            unsafe { buf.write(i, i as u8 + 1); }
        }

        unsafe {
            buf.shift_right(1, 2);
            buf.write(1, 9);
        }
        assert_eq!(unsafe { buf.as_slice(4) }, &[1, 9, 2, 3]);

        unsafe { buf.shift_left(0, 3); }
        assert_eq!(unsafe { buf.as_slice(3) }, &[9, 2, 3]);
    }

    #[test]
    fn test_zst_support() {
        let mut buf = Buffer::<ZeroSizedType>::with_cap(5);
        let old_ptr = buf.ptr;
        unsafe { buf.realloc(30, 0); }
        assert_eq!(buf.ptr, old_ptr, "Pointer shouldn't change when reallocated for a ZST.");
        assert_eq!(buf.cap(), 30);
    }
}
