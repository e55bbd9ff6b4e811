//! Storing rooms in a [`Buffer`] and printing them.

use std::io::{self, Write};

use roomvec_buffer::{Buffer, BufferError};
use roomvec_room::Room;
use tracing::debug;

/// The rooms the `roomvec` binary lists, in insertion order.
pub fn default_rooms() -> [Room; 3] {
    [
        Room::new(10.0, 5.0, 2.5),
        Room::new(20.0, 10.0, 3.0),
        Room::new(5.0, 5.0, 5.0),
    ]
}

/// Push every room into a new buffer, in order.
///
/// # Errors
///
/// Returns the first [`BufferError`] raised by a push.
pub fn store_rooms<I>(rooms: I) -> Result<Buffer<Room>, BufferError>
where
    I: IntoIterator<Item = Room>,
{
    let mut stored = Buffer::new();
    for room in rooms {
        stored.push(room)?;
        debug!(
            len = stored.len(),
            area = room.area(),
            volume = room.volume(),
            "stored room"
        );
    }
    Ok(stored)
}

/// Write each room's block to `out`, in index order.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_rooms<W: Write + ?Sized>(rooms: &Buffer<Room>, out: &mut W) -> io::Result<()> {
    for room in rooms {
        room.print_to(out)?;
    }
    Ok(())
}
