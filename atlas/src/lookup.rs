//! Read-only queries over a room list. None of these mutate their input.

use crate::error::StoreError;
use crate::model::Room;

/// Find a room by id.
///
/// # Errors
///
/// Returns `RoomNotFound` if no room has this id.
pub fn room_by_id<'a>(rooms: &'a [Room], id: &str) -> Result<&'a Room, StoreError> {
    rooms
        .iter()
        .find(|room| room.id == id)
        .ok_or_else(|| StoreError::RoomNotFound(id.to_owned()))
}

/// Find the room holding a list position.
///
/// # Errors
///
/// Returns `NoRoomAtPosition` if no room holds `position`.
pub fn room_by_list_position(rooms: &[Room], position: u32) -> Result<&Room, StoreError> {
    rooms
        .iter()
        .find(|room| room.list_position == position)
        .ok_or(StoreError::NoRoomAtPosition(position))
}

/// Copy of the list in sidebar order. Ties keep their input order.
#[must_use]
pub fn sorted_by_list_position(rooms: &[Room]) -> Vec<Room> {
    let mut sorted = rooms.to_vec();
    sorted.sort_by_key(|room| room.list_position);
    sorted
}
