//! roomvec: an exact-size growable buffer and room dimension records.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the roomvec sub-crates, plus the small routine the `roomvec` binary
//! runs.
//!
//! # Quick start
//!
//! ```rust
//! use roomvec::prelude::*;
//!
//! let mut rooms = Buffer::new();
//! rooms.push(Room::new(10.0, 5.0, 2.5)).unwrap();
//! rooms.push(Room::new(20.0, 10.0, 3.0)).unwrap();
//! assert_eq!(rooms.len(), 2);
//! assert_eq!(rooms.first().map(Room::area), Some(50.0));
//!
//! let mut numbers = Buffer::new();
//! numbers.resize(3, 0i32).unwrap();
//! numbers.assign(1, 2i32);
//! assert_eq!(numbers.as_slice(), &[1, 3, 5]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`buffer`] | `roomvec-buffer` | `Buffer`, `BufferConfig`, `BufferError` |
//! | [`room`] | `roomvec-room` | `Room` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod listing;

/// Exact-size buffer (re-export of `roomvec-buffer`).
pub mod buffer {
    pub use roomvec_buffer::*;
}

/// Room records (re-export of `roomvec-room`).
pub mod room {
    pub use roomvec_room::*;
}

/// The types most programs need.
pub mod prelude {
    pub use roomvec_buffer::{Buffer, BufferConfig, BufferError};
    pub use roomvec_room::Room;
}
