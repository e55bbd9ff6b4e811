//! Buffer configuration parameters.

/// Configuration for a [`Buffer`](crate::Buffer).
///
/// The only knob is the allocation budget: a reallocation whose byte size
/// would exceed `max_bytes` is refused with
/// [`BufferError::AllocationFailed`](crate::BufferError::AllocationFailed)
/// before the allocator is consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BufferConfig {
    /// Largest backing allocation, in bytes, the buffer may hold.
    ///
    /// Default: `isize::MAX`, the ceiling the global allocator imposes anyway.
    pub max_bytes: usize,
}

impl BufferConfig {
    /// Default allocation budget in bytes.
    pub const DEFAULT_MAX_BYTES: usize = isize::MAX as usize;

    /// Create a config with the default budget.
    pub fn new() -> Self {
        Self {
            max_bytes: Self::DEFAULT_MAX_BYTES,
        }
    }

    /// Return a copy of this config with the given byte budget.
    pub fn with_max_bytes(mut self, max_bytes: usize) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    /// Whether an allocation of `bytes` fits within the budget.
    pub fn admits(&self, bytes: usize) -> bool {
        bytes <= self.max_bytes
    }
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self::new()
    }
}
