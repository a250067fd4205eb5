//! Pure state transitions.
//!
//! DESIGN
//! ======
//! `reduce` takes the current aggregate by reference and builds the next one;
//! the input is never mutated, so a failed action leaves the caller holding
//! exactly the state it had. Rooms and markers are kept in lock-step by id:
//! add appends one of each under an id not yet on the map, delete removes
//! one of each.
//!
//! Deleting a room renumbers the survivors `1..N-1` in their existing order
//! and moves the active room to the neighbour of the deleted one: the room
//! at the next-higher list position, or the next-lower one when the deleted
//! room was last. The only room on a map cannot be deleted.

#[cfg(test)]
#[path = "reduce_test.rs"]
mod reduce_test;

use crate::action::Action;
use crate::error::StoreError;
use crate::ids::IdGenerator;
use crate::lookup::{room_by_id, room_by_list_position, sorted_by_list_position};
use crate::model::{DEFAULT_MARKER_POSITION, MapState, Marker, NEW_ROOM_DESCRIPTION, NEW_ROOM_NAME, Position, Room};

/// Apply one action and return the resulting aggregate.
///
/// # Errors
///
/// `DeleteRoom` fails with `RoomNotFound` for an unknown id, `LastRoom` when
/// it targets the only room, and `NoRoomAtPosition` when list positions are
/// not contiguous. Every other action always succeeds.
pub fn reduce(state: &MapState, action: Action, ids: &mut dyn IdGenerator) -> Result<MapState, StoreError> {
    match action {
        Action::SetMapData(data) => Ok(data),
        Action::SetActiveRoomId(id) => Ok(MapState { active_room_id: id, ..state.clone() }),
        Action::UpdateRoomDescription { id, description } => {
            Ok(map_room(state, &id, |room| Room { description: description.clone(), ..room.clone() }))
        }
        Action::UpdateRoomName { room_id, new_name } => {
            Ok(map_room(state, &room_id, |room| Room { name: new_name.clone(), ..room.clone() }))
        }
        Action::UpdateMarkerPosition { id, position } => Ok(move_marker(state, &id, position)),
        Action::AddRoom => Ok(add_room(state, ids)),
        Action::DeleteRoom { id } => delete_room(state, &id),
    }
}

// =============================================================================
// UPDATERS
// =============================================================================

fn map_room(state: &MapState, id: &str, update: impl Fn(&Room) -> Room) -> MapState {
    let room_list = state
        .room_list
        .iter()
        .map(|room| if room.id == id { update(room) } else { room.clone() })
        .collect();
    MapState { room_list, ..state.clone() }
}

fn move_marker(state: &MapState, id: &str, position: Position) -> MapState {
    let marker_list = state
        .marker_list
        .iter()
        .map(|marker| if marker.id == id { Marker { id: marker.id.clone(), position } } else { marker.clone() })
        .collect();
    MapState { marker_list, ..state.clone() }
}

fn add_room(state: &MapState, ids: &mut dyn IdGenerator) -> MapState {
    let id = fresh_id(state, ids);
    let mut next = state.clone();
    next.room_list.push(Room {
        id: id.clone(),
        list_position: room_count(state) + 1,
        name: NEW_ROOM_NAME.to_owned(),
        description: NEW_ROOM_DESCRIPTION.to_owned(),
    });
    next.marker_list.push(Marker { id, position: DEFAULT_MARKER_POSITION });
    next
}

fn delete_room(state: &MapState, id: &str) -> Result<MapState, StoreError> {
    let current = room_by_id(&state.room_list, id)?;
    if state.len() == 1 {
        return Err(StoreError::LastRoom(id.to_owned()));
    }

    // Neighbour is resolved against the pre-delete numbering.
    let neighbour = if current.list_position < room_count(state) {
        current.list_position + 1
    } else {
        current.list_position.saturating_sub(1)
    };
    let active_room_id = room_by_list_position(&state.room_list, neighbour)?.id.clone();

    let room_list = sorted_by_list_position(&state.room_list)
        .into_iter()
        .filter(|room| room.id != id)
        .zip(1..)
        .map(|(room, list_position)| Room { list_position, ..room })
        .collect();
    let marker_list = state.marker_list.iter().filter(|m| m.id != id).cloned().collect();

    Ok(MapState { room_list, marker_list, active_room_id, ..state.clone() })
}

fn room_count(state: &MapState) -> u32 {
    u32::try_from(state.len()).unwrap_or(u32::MAX)
}

/// Next generated id that no room or marker on the map already uses. Maps
/// loaded from elsewhere may hold ids the generator has not issued itself.
fn fresh_id(state: &MapState, ids: &mut dyn IdGenerator) -> String {
    loop {
        let id = ids.next_id();
        let taken = state.room_list.iter().any(|r| r.id == id) || state.marker_list.iter().any(|m| m.id == id);
        if !taken {
            return id;
        }
    }
}
