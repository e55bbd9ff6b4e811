//! Benchmark profiles for the roomvec buffer.
//!
//! - [`pushed_profile`]: a buffer grown one push at a time
//! - [`room_profile`]: a buffer of `n` rooms with varying dimensions

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use roomvec_buffer::{Buffer, BufferError};
use roomvec_room::Room;

/// Build a buffer of `0..len` by repeated [`Buffer::push`].
///
/// Every push reallocates, so this is quadratic in bytes copied in the
/// worst case; it is the path the push benchmarks measure.
pub fn pushed_profile(len: u64) -> Result<Buffer<u64>, BufferError> {
    let mut buffer = Buffer::new();
    for value in 0..len {
        buffer.push(value)?;
    }
    Ok(buffer)
}

/// Build a buffer of `len` rooms whose dimensions grow with the index.
pub fn room_profile(len: u32) -> Result<Buffer<Room>, BufferError> {
    let mut buffer = Buffer::new();
    for i in 0..len {
        let side = f64::from(i % 50) + 1.0;
        buffer.push(Room::new(side, side / 2.0, 2.5))?;
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pushed_profile_counts_up() {
        let buffer = pushed_profile(4).unwrap();
        assert_eq!(buffer.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn room_profile_has_requested_len() {
        let buffer = room_profile(60).unwrap();
        assert_eq!(buffer.len(), 60);
        assert_eq!(buffer.first().map(Room::area), Some(0.5));
    }
}
