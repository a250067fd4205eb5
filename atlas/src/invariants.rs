//! Consistency checks for a map aggregate.
//!
//! The reducer keeps these true on its own. Maps that come from elsewhere
//! (a seed file, a backend response) are checked here so problems are
//! reported up front instead of surfacing as lookup failures later.

use std::collections::HashSet;

use crate::model::MapState;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("room id {0} appears more than once")]
    DuplicateRoomId(String),
    #[error("marker id {0} appears more than once")]
    DuplicateMarkerId(String),
    #[error("marker {0} has no room")]
    MarkerWithoutRoom(String),
    #[error("room {0} has no marker")]
    RoomWithoutMarker(String),
    #[error("active room {0} does not exist")]
    DanglingActiveRoom(String),
    #[error("list positions are not 1..N: expected {expected}, found {found}")]
    ListPositionGap { expected: u32, found: u32 },
}

/// Every violation found, in a stable order: ids, markers, active room,
/// then list positions.
#[must_use]
pub fn check_invariants(state: &MapState) -> Vec<Violation> {
    let mut violations = Vec::new();

    let mut room_ids = HashSet::new();
    for room in &state.room_list {
        if !room_ids.insert(room.id.as_str()) {
            violations.push(Violation::DuplicateRoomId(room.id.clone()));
        }
    }

    let mut marker_ids = HashSet::new();
    for marker in &state.marker_list {
        if !marker_ids.insert(marker.id.as_str()) {
            violations.push(Violation::DuplicateMarkerId(marker.id.clone()));
        }
        if !room_ids.contains(marker.id.as_str()) {
            violations.push(Violation::MarkerWithoutRoom(marker.id.clone()));
        }
    }
    for room in &state.room_list {
        if !marker_ids.contains(room.id.as_str()) {
            violations.push(Violation::RoomWithoutMarker(room.id.clone()));
        }
    }

    if !state.is_empty() && !room_ids.contains(state.active_room_id.as_str()) {
        violations.push(Violation::DanglingActiveRoom(state.active_room_id.clone()));
    }

    let mut positions: Vec<u32> = state.room_list.iter().map(|r| r.list_position).collect();
    positions.sort_unstable();
    if let Some((expected, found)) = (1..).zip(positions).find(|(expected, found)| expected != found) {
        violations.push(Violation::ListPositionGap { expected, found });
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Marker, Position, Room};

    fn room(id: &str, list_position: u32) -> Room {
        Room { id: id.into(), list_position, name: String::new(), description: String::new() }
    }

    fn marker(id: &str) -> Marker {
        Marker { id: id.into(), position: Position(0.0, 0.0) }
    }

    #[test]
    fn consistent_map_has_no_violations() {
        let state = MapState {
            active_room_id: "b".into(),
            room_list: vec![room("b", 2), room("a", 1)],
            marker_list: vec![marker("a"), marker("b")],
            ..MapState::default()
        };
        assert!(check_invariants(&state).is_empty());
    }

    #[test]
    fn empty_map_is_consistent() {
        assert!(check_invariants(&MapState::default()).is_empty());
    }

    #[test]
    fn reports_marker_mismatch_and_dangling_active() {
        let state = MapState {
            active_room_id: "ghost".into(),
            room_list: vec![room("a", 1), room("b", 2)],
            marker_list: vec![marker("a"), marker("2")],
            ..MapState::default()
        };
        assert_eq!(
            check_invariants(&state),
            [
                Violation::MarkerWithoutRoom("2".into()),
                Violation::RoomWithoutMarker("b".into()),
                Violation::DanglingActiveRoom("ghost".into()),
            ]
        );
    }

    #[test]
    fn reports_duplicates_and_position_gap() {
        let state = MapState {
            active_room_id: "a".into(),
            room_list: vec![room("a", 1), room("a", 3)],
            marker_list: vec![marker("a"), marker("a")],
            ..MapState::default()
        };
        assert_eq!(
            check_invariants(&state),
            [
                Violation::DuplicateRoomId("a".into()),
                Violation::DuplicateMarkerId("a".into()),
                Violation::ListPositionGap { expected: 2, found: 3 },
            ]
        );
    }
}
