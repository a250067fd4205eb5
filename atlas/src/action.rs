//! Actions: the closed set of edits the reducer understands.
//!
//! DESIGN
//! ======
//! In Rust an unhandled action cannot be constructed, so the only place an
//! unknown action can show up is the wire. `Action::from_wire` reads the
//! `type` tag first and rejects anything outside the known set with
//! `StoreError::UnknownAction` before looking at the payload. Encoding goes
//! through the derived `Serialize`, which produces the same
//! `{ "type": ..., "payload": ... }` envelope.

#[cfg(test)]
#[path = "action_test.rs"]
mod action_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::StoreError;
use crate::model::{MapState, Position};

pub const SET_MAP_DATA: &str = "SET_MAP_DATA";
pub const SET_ACTIVE_ROOM_ID: &str = "SET_ACTIVE_ROOM_ID";
pub const UPDATE_ROOM_DESCRIPTION: &str = "UPDATE_ROOM_DESCRIPTION";
pub const UPDATE_ROOM_NAME: &str = "UPDATE_ROOM_NAME";
pub const UPDATE_MARKER_POSITION: &str = "UPDATE_MARKER_POSITION";
pub const ADD_ROOM: &str = "ADD_ROOM";
pub const DELETE_ROOM: &str = "DELETE_ROOM";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the whole aggregate with a fetched map.
    SetMapData(MapState),
    /// Point the active room at an id. Not checked against the room list.
    SetActiveRoomId(String),
    UpdateRoomDescription { id: String, description: String },
    #[serde(rename_all = "camelCase")]
    UpdateRoomName { room_id: String, new_name: String },
    /// Marker drag ended.
    UpdateMarkerPosition { id: String, position: Position },
    AddRoom,
    DeleteRoom { id: String },
}

#[derive(Deserialize)]
struct DescriptionPayload {
    id: String,
    description: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenamePayload {
    room_id: String,
    new_name: String,
}

#[derive(Deserialize)]
struct MarkerPayload {
    id: String,
    position: Position,
}

#[derive(Deserialize)]
struct DeletePayload {
    id: String,
}

impl Action {
    /// The wire tag for this action.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetMapData(_) => SET_MAP_DATA,
            Self::SetActiveRoomId(_) => SET_ACTIVE_ROOM_ID,
            Self::UpdateRoomDescription { .. } => UPDATE_ROOM_DESCRIPTION,
            Self::UpdateRoomName { .. } => UPDATE_ROOM_NAME,
            Self::UpdateMarkerPosition { .. } => UPDATE_MARKER_POSITION,
            Self::AddRoom => ADD_ROOM,
            Self::DeleteRoom { .. } => DELETE_ROOM,
        }
    }

    /// Decode a `{ "type": ..., "payload": ... }` envelope.
    ///
    /// # Errors
    ///
    /// Returns `UnknownAction` if `type` is missing or not a known tag, and
    /// `BadPayload` if the payload does not have the shape the tag requires.
    pub fn from_wire(mut envelope: Value) -> Result<Self, StoreError> {
        let kind = match envelope.get("type") {
            Some(Value::String(kind)) => kind.clone(),
            Some(other) => return Err(StoreError::UnknownAction(other.to_string())),
            None => return Err(StoreError::UnknownAction("<missing>".into())),
        };
        let payload = envelope
            .as_object_mut()
            .and_then(|map| map.remove("payload"))
            .unwrap_or(Value::Null);

        match kind.as_str() {
            SET_MAP_DATA => Ok(Self::SetMapData(decode(&kind, payload)?)),
            SET_ACTIVE_ROOM_ID => Ok(Self::SetActiveRoomId(decode(&kind, payload)?)),
            UPDATE_ROOM_DESCRIPTION => {
                let p: DescriptionPayload = decode(&kind, payload)?;
                Ok(Self::UpdateRoomDescription { id: p.id, description: p.description })
            }
            UPDATE_ROOM_NAME => {
                let p: RenamePayload = decode(&kind, payload)?;
                Ok(Self::UpdateRoomName { room_id: p.room_id, new_name: p.new_name })
            }
            UPDATE_MARKER_POSITION => {
                let p: MarkerPayload = decode(&kind, payload)?;
                Ok(Self::UpdateMarkerPosition { id: p.id, position: p.position })
            }
            // Payload is ignored; clients send `null` or omit it.
            ADD_ROOM => Ok(Self::AddRoom),
            DELETE_ROOM => {
                let p: DeletePayload = decode(&kind, payload)?;
                Ok(Self::DeleteRoom { id: p.id })
            }
            _ => Err(StoreError::UnknownAction(kind)),
        }
    }

    /// Encode as a wire envelope.
    ///
    /// # Errors
    ///
    /// Propagates `serde_json` serialization failures.
    pub fn to_wire(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

fn decode<T: DeserializeOwned>(kind: &str, payload: Value) -> Result<T, StoreError> {
    serde_json::from_value(payload)
        .map_err(|e| StoreError::BadPayload { action: kind.to_owned(), reason: e.to_string() })
}
