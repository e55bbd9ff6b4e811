//! Low-level storage primitives for [`Buffer`](crate::Buffer).
//!
//! This is the only module in the crate that talks to the global allocator
//! or dereferences raw element pointers. Every `unsafe` block carries a
//! `// SAFETY:` comment.
//!
//! [`RawStorage`] owns one allocation of exactly `slots` elements, the
//! first `len` of which are initialised. Every method that returns leaves
//! `len == slots`; the two only diverge while a fill is in progress, so a
//! panicking producer drops exactly the elements already written and the
//! block is still released.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};

use crate::config::BufferConfig;
use crate::error::BufferError;

/// An exact-size allocation with no knowledge of which slots are live.
struct Block<T> {
    ptr: NonNull<T>,
    slots: usize,
    _marker: PhantomData<T>,
}

// SAFETY: a Block uniquely owns its allocation, like `Box<[MaybeUninit<T>]>`.
unsafe impl<T: Send> Send for Block<T> {}
// SAFETY: shared access to a Block never hands out anything but `&T`.
unsafe impl<T: Sync> Sync for Block<T> {}

impl<T> Block<T> {
    const fn empty() -> Self {
        Self {
            ptr: NonNull::dangling(),
            slots: 0,
            _marker: PhantomData,
        }
    }

    /// Validated layout for `slots` elements under the budget in `config`.
    fn layout(slots: usize, config: &BufferConfig) -> Result<Layout, BufferError> {
        let failed = || BufferError::AllocationFailed {
            requested_bytes: slots.saturating_mul(mem::size_of::<T>()),
        };
        let layout = Layout::array::<T>(slots).map_err(|_| failed())?;
        if !config.admits(layout.size()) {
            return Err(failed());
        }
        Ok(layout)
    }

    fn allocate(slots: usize, config: &BufferConfig) -> Result<Self, BufferError> {
        if slots == 0 {
            return Ok(Self::empty());
        }
        let layout = Self::layout(slots, config)?;
        if layout.size() == 0 {
            // Zero-sized T: nothing to allocate.
            return Ok(Self {
                ptr: NonNull::dangling(),
                slots,
                _marker: PhantomData,
            });
        }
        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(BufferError::AllocationFailed {
            requested_bytes: layout.size(),
        })?;
        Ok(Self {
            ptr,
            slots,
            _marker: PhantomData,
        })
    }

    fn current_layout(&self) -> Layout {
        // SAFETY: the same size/align pair passed `Layout::array::<T>(slots)`
        // when this block was (re)allocated.
        unsafe {
            Layout::from_size_align_unchecked(
                self.slots * mem::size_of::<T>(),
                mem::align_of::<T>(),
            )
        }
    }

    /// Reallocate to exactly `slots` elements, moving the bytes of the
    /// common prefix. On error the block is untouched.
    fn reallocate(&mut self, slots: usize, config: &BufferConfig) -> Result<(), BufferError> {
        if slots == 0 {
            *self = Self::empty();
            return Ok(());
        }
        if self.slots == 0 {
            *self = Self::allocate(slots, config)?;
            return Ok(());
        }
        let layout = Self::layout(slots, config)?;
        if layout.size() == 0 {
            self.slots = slots;
            return Ok(());
        }
        // SAFETY: `ptr` was returned by the global allocator for
        // `current_layout()`, which has the same alignment as `layout`, and
        // the new size is non-zero and was validated by `Layout::array`.
        let raw = unsafe {
            alloc::realloc(
                self.ptr.as_ptr().cast::<u8>(),
                self.current_layout(),
                layout.size(),
            )
        };
        self.ptr = NonNull::new(raw.cast::<T>()).ok_or(BufferError::AllocationFailed {
            requested_bytes: layout.size(),
        })?;
        self.slots = slots;
        Ok(())
    }
}

impl<T> Drop for Block<T> {
    fn drop(&mut self) {
        if self.slots != 0 && mem::size_of::<T>() != 0 {
            // SAFETY: a non-empty block of non-zero-sized T always holds a live
            // allocation made with `current_layout()`.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), self.current_layout()) }
        }
    }
}

/// Exact-size element storage: an allocation plus its initialised prefix.
pub(crate) struct RawStorage<T> {
    block: Block<T>,
    len: usize,
}

impl<T> RawStorage<T> {
    pub(crate) const fn new() -> Self {
        Self {
            block: Block::empty(),
            len: 0,
        }
    }

    /// Build storage of exactly `len` elements, producing slot `i` with `f(i)`.
    ///
    /// If `f` panics, the elements produced so far are dropped and the
    /// allocation is released.
    pub(crate) fn try_from_fn(
        len: usize,
        config: &BufferConfig,
        mut f: impl FnMut(usize) -> T,
    ) -> Result<Self, BufferError> {
        let mut storage = Self {
            block: Block::allocate(len, config)?,
            len: 0,
        };
        while storage.len < len {
            let value = f(storage.len);
            // SAFETY: `storage.len < block.slots`, so the slot is allocated and
            // not yet initialised.
            unsafe { storage.block.ptr.as_ptr().add(storage.len).write(value) };
            storage.len += 1;
        }
        Ok(storage)
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// Bytes currently held from the allocator.
    pub(crate) fn allocated_bytes(&self) -> usize {
        self.block.slots * mem::size_of::<T>()
    }

    /// Base pointer, or null when nothing is stored.
    pub(crate) fn as_ptr(&self) -> *const T {
        if self.len == 0 {
            ptr::null()
        } else {
            self.block.ptr.as_ptr()
        }
    }

    /// Mutable base pointer, or null when nothing is stored.
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        if self.len == 0 {
            ptr::null_mut()
        } else {
            self.block.ptr.as_ptr()
        }
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        // SAFETY: the pointer is non-null and aligned (dangling when empty)
        // and the first `len` slots are initialised.
        unsafe { std::slice::from_raw_parts(self.block.ptr.as_ptr(), self.len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` makes the borrow unique.
        unsafe { std::slice::from_raw_parts_mut(self.block.ptr.as_ptr(), self.len) }
    }

    /// Grow by exactly one slot and write `value` into it.
    ///
    /// On error the storage is untouched and `value` is dropped.
    pub(crate) fn push(&mut self, value: T, config: &BufferConfig) -> Result<(), BufferError> {
        let new_len = self
            .len
            .checked_add(1)
            .ok_or(BufferError::AllocationFailed {
                requested_bytes: usize::MAX,
            })?;
        self.block.reallocate(new_len, config)?;
        // SAFETY: the block now has `new_len` slots and slot `len` is the
        // freshly added, uninitialised one.
        unsafe { self.block.ptr.as_ptr().add(self.len).write(value) };
        self.len = new_len;
        Ok(())
    }

    /// Shrink by exactly one slot, returning the removed element.
    ///
    /// At most one element stored: the storage is released entirely. On
    /// error the storage is untouched.
    pub(crate) fn pop(&mut self, config: &BufferConfig) -> Result<Option<T>, BufferError> {
        if self.len <= 1 {
            let value = self.take_single();
            self.block = Block::empty();
            return Ok(value);
        }
        let len = self.len;
        let last = len - 1;
        // SAFETY: slot `last` is initialised. The copy only becomes the owner
        // if the shrink succeeds; otherwise it is forgotten and the slot keeps
        // ownership.
        let value = unsafe { self.block.ptr.as_ptr().add(last).read() };
        self.len = last;
        if let Err(err) = self.block.reallocate(last, config) {
            mem::forget(value);
            self.len = len;
            return Err(err);
        }
        Ok(Some(value))
    }

    fn take_single(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len = 0;
        // SAFETY: slot 0 was initialised and `len` is now 0, so nothing else
        // will read or drop it.
        Some(unsafe { self.block.ptr.as_ptr().read() })
    }

    /// Drop every element and release the allocation.
    pub(crate) fn clear(&mut self) {
        // The block is moved out first so it is released even if an
        // element's `Drop` panics.
        let block = mem::replace(&mut self.block, Block::empty());
        let len = mem::replace(&mut self.len, 0);
        // SAFETY: the first `len` slots of `block` are initialised and no
        // longer reachable through `self`.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(block.ptr.as_ptr(), len));
        }
    }
}

impl<T> Drop for RawStorage<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
