//! Exact-size, reallocation-backed growable buffer.
//!
//! [`Buffer<T>`] owns a contiguous run of exactly `len` elements. There is
//! no spare capacity: every size change reallocates to the new element
//! count, and an empty buffer holds no allocation at all. The only failure
//! any operation reports is [`BufferError::AllocationFailed`], returned as a
//! value from the operations that reallocate; a failed operation leaves the
//! buffer untouched.
//!
//! # Architecture
//!
//! ```text
//! Buffer<T> (policy: clobber-on-resize, budget, printing)
//! ├── BufferConfig (allocation budget)
//! └── RawStorage<T> (exact-size block + initialised prefix, raw.rs)
//!     └── Block<T> (global allocator alloc / realloc / dealloc)
//! ```
//!
//! This crate may contain `unsafe` code, confined to `raw.rs`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod error;
pub mod print;
mod raw;

// Public re-exports for the primary API surface.
pub use buffer::Buffer;
pub use config::BufferConfig;
pub use error::BufferError;
