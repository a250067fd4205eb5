//! Document model: rooms, their markers, and the map aggregate.
//!
//! The JSON shape matches what the backend's `GET /api/map` returns, so a
//! fetched body deserializes straight into a `MapState` and can be handed to
//! `Action::SetMapData`. Keys are camelCase on the wire.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Name given to rooms created with `Action::AddRoom`.
pub const NEW_ROOM_NAME: &str = "New Location";

/// Markdown body given to rooms created with `Action::AddRoom`.
pub const NEW_ROOM_DESCRIPTION: &str = "## Description\nClick 'edit' to customize this text.";

/// Where the marker for a freshly added room is dropped.
pub const DEFAULT_MARKER_POSITION: Position = Position(30.0, 50.0);

/// A named location on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    /// 1-based rank in the sidebar.
    pub list_position: u32,
    pub name: String,
    /// Markdown. May contain `[text](roomId)` cross-references.
    pub description: String,
}

/// Image-space coordinate pair. Serialized as a two-element array.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position(pub f64, pub f64);

impl Position {
    #[must_use]
    pub fn x(self) -> f64 {
        self.0
    }

    #[must_use]
    pub fn y(self) -> f64 {
        self.1
    }
}

/// The on-image pin for a room. Shares the room's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    pub position: Position,
}

/// The aggregate: map metadata, rooms, markers and the active room.
///
/// Metadata fields default to empty so bodies from older clients that only
/// carry `roomList`, `markerList` and `activeRoomId` still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapState {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    pub active_room_id: String,
    pub room_list: Vec<Room>,
    pub marker_list: Vec<Marker>,
}

impl MapState {
    /// Number of rooms on the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.room_list.len()
    }

    /// Returns `true` if the map has no rooms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.room_list.is_empty()
    }

    /// The marker pinned for `room_id`, if any.
    #[must_use]
    pub fn marker(&self, room_id: &str) -> Option<&Marker> {
        self.marker_list.iter().find(|m| m.id == room_id)
    }
}
