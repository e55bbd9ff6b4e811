//! Reference rooms shared by tests and benchmarks.

use roomvec_room::Room;

/// The three rooms the demo program stores, in insertion order.
pub fn reference_rooms() -> [Room; 3] {
    [
        Room::new(10.0, 5.0, 2.5),
        Room::new(20.0, 10.0, 3.0),
        Room::new(5.0, 5.0, 5.0),
    ]
}

/// Expected stdout of printing [`reference_rooms`] in order.
pub fn reference_listing() -> String {
    reference_rooms().iter().map(Room::to_string).collect()
}
