//! The exact-size growable buffer.
//!
//! [`Buffer`] never holds spare capacity: every resize, push and pop
//! reallocates to exactly the new element count, and an empty buffer holds
//! no allocation at all. Growth is therefore linear per push rather than
//! amortised.

use std::fmt;
use std::ops::{AddAssign, Range};
use std::ptr;

use crate::config::BufferConfig;
use crate::error::BufferError;
use crate::raw::RawStorage;

/// A contiguous, exclusively owned sequence of `T` sized to exactly its
/// element count.
///
/// The backing allocation is released exactly once, when the buffer is
/// cleared, resized to zero, popped empty, or dropped (including during
/// unwinding).
///
/// # Resize overwrites every slot
///
/// [`resize`](Buffer::resize) is "reset and resize", not "grow and keep":
/// after a successful call **every** slot, old and new alike, holds the
/// fill value. Use [`push`](Buffer::push) to append while keeping existing
/// elements.
pub struct Buffer<T> {
    storage: RawStorage<T>,
    config: BufferConfig,
}

impl<T> Buffer<T> {
    /// Create an empty buffer with the default configuration.
    pub const fn new() -> Self {
        Self {
            storage: RawStorage::new(),
            config: BufferConfig {
                max_bytes: BufferConfig::DEFAULT_MAX_BYTES,
            },
        }
    }

    /// Create an empty buffer with the given configuration.
    pub fn with_config(config: BufferConfig) -> Self {
        Self {
            storage: RawStorage::new(),
            config,
        }
    }

    /// The configuration this buffer allocates under.
    pub fn config(&self) -> &BufferConfig {
        &self.config
    }

    /// Number of elements stored.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the buffer holds no elements (and therefore no allocation).
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Bytes currently held from the allocator: `len() * size_of::<T>()`.
    pub fn allocated_bytes(&self) -> usize {
        self.storage.allocated_bytes()
    }

    /// Address of the backing storage, or null when empty.
    ///
    /// The pointer is only valid for `[0, len())` and only until the next
    /// mutation.
    pub fn as_ptr(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Mutable address of the backing storage, or null when empty.
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.storage.as_mut_ptr()
    }

    /// Address of the first element, or null when empty.
    pub fn begin(&self) -> *const T {
        self.storage.as_ptr()
    }

    /// Address one past the last element, or null when empty.
    pub fn end(&self) -> *const T {
        if self.is_empty() {
            ptr::null()
        } else {
            self.as_slice().as_ptr_range().end
        }
    }

    /// Address of the last element, or null when empty.
    pub fn last_ptr(&self) -> *const T {
        self.last().map_or(ptr::null(), ptr::from_ref)
    }

    /// Half-open index range of the stored elements. Empty when the buffer is.
    pub fn bounds(&self) -> Range<usize> {
        0..self.len()
    }

    /// The stored elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// The stored elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutable reference to the last element, if any.
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Iterate over the elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the elements in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Drop every element and release the allocation. Idempotent.
    pub fn clear(&mut self) {
        self.storage.clear();
    }

    /// Append `value`, reallocating to exactly `len() + 1` elements.
    ///
    /// Existing elements are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if the reallocation is
    /// refused; the buffer is unchanged and `value` is dropped.
    pub fn push(&mut self, value: T) -> Result<(), BufferError> {
        self.storage.push(value, &self.config)
    }

    /// Remove and return the last element.
    ///
    /// With at most one element stored this behaves as [`clear`](Buffer::clear)
    /// and always succeeds. Otherwise the storage is reallocated down to
    /// `len() - 1` elements, keeping the rest in order.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if the shrinking
    /// reallocation fails; the buffer is unchanged.
    pub fn pop(&mut self) -> Result<Option<T>, BufferError> {
        self.storage.pop(&self.config)
    }
}

impl<T: Clone> Buffer<T> {
    /// Create a buffer of `len` copies of `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if the allocation is refused.
    pub fn filled(len: usize, fill: T) -> Result<Self, BufferError> {
        let mut buffer = Self::new();
        buffer.resize(len, fill)?;
        Ok(buffer)
    }

    /// Set the length to exactly `new_len` and overwrite **every** slot with
    /// `fill`.
    ///
    /// `new_len == 0` behaves as [`clear`](Buffer::clear). Previously stored
    /// values are not kept, even when growing.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if the new allocation is
    /// refused; the buffer keeps its previous length and contents.
    pub fn resize(&mut self, new_len: usize, fill: T) -> Result<(), BufferError> {
        if new_len == 0 {
            self.clear();
            return Ok(());
        }
        // The replacement is built in full before the old storage is dropped,
        // so a refused allocation or a panicking clone leaves `self` intact.
        self.storage = RawStorage::try_from_fn(new_len, &self.config, |_| fill.clone())?;
        Ok(())
    }

    /// Deep copy under the same configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if the copy cannot be
    /// allocated.
    pub fn try_clone(&self) -> Result<Self, BufferError> {
        Self::try_from_slice_with_config(self.as_slice(), self.config)
    }

    /// Copy `items` into a new buffer with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if the copy cannot be
    /// allocated.
    pub fn try_from_slice(items: &[T]) -> Result<Self, BufferError> {
        Self::try_from_slice_with_config(items, BufferConfig::default())
    }

    fn try_from_slice_with_config(items: &[T], config: BufferConfig) -> Result<Self, BufferError> {
        let storage = RawStorage::try_from_fn(items.len(), &config, |i| items[i].clone())?;
        Ok(Self { storage, config })
    }

    /// Overwrite every slot, in index order, with `start`, `start + step`,
    /// `start + 2 * step`, and so on. The length never changes; an empty
    /// buffer is left alone.
    pub fn assign<S: Clone>(&mut self, start: T, step: S)
    where
        T: AddAssign<S>,
    {
        let mut value = start;
        for (index, slot) in self.iter_mut().enumerate() {
            if index > 0 {
                value += step.clone();
            }
            *slot = value.clone();
        }
    }

    /// [`assign`](Buffer::assign) counting up from zero in steps of one.
    pub fn assign_counting(&mut self)
    where
        T: From<u8> + AddAssign,
    {
        self.assign(T::from(0), T::from(1));
    }
}

impl<T: Clone + Default> Buffer<T> {
    /// Create a buffer of `len` default values.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if the allocation is refused.
    pub fn with_len(len: usize) -> Result<Self, BufferError> {
        Self::filled(len, T::default())
    }

    /// [`resize`](Buffer::resize) with `T::default()` as the fill value.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::AllocationFailed`] if the new allocation is
    /// refused; the buffer is unchanged.
    pub fn resize_default(&mut self, new_len: usize) -> Result<(), BufferError> {
        self.resize(new_len, T::default())
    }
}

impl<T> Default for Buffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Buffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for Buffer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Buffer<T> {}

impl<T> AsRef<[T]> for Buffer<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T> IntoIterator for &'a Buffer<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Buffer<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
