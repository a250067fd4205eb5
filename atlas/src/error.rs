//! Store errors.
//!
//! Every variant is a programmer error on the caller's side: a lookup of an
//! id that was assumed to exist, an action tag nobody handles, or a payload
//! of the wrong shape. The store never recovers from these; it returns them
//! and leaves the aggregate untouched.

/// Grepable error code for structured error bodies.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no room found with id: {0}")]
    RoomNotFound(String),
    #[error("no room found with listPosition: {0}")]
    NoRoomAtPosition(u32),
    #[error("no action found in reducer with type: {0}")]
    UnknownAction(String),
    #[error("bad payload for {action}: {reason}")]
    BadPayload { action: String, reason: String },
    #[error("cannot delete {0}: it is the only room on the map")]
    LastRoom(String),
}

impl ErrorCode for StoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::RoomNotFound(_) => "E_ROOM_NOT_FOUND",
            Self::NoRoomAtPosition(_) => "E_NO_ROOM_AT_POSITION",
            Self::UnknownAction(_) => "E_UNKNOWN_ACTION",
            Self::BadPayload { .. } => "E_BAD_PAYLOAD",
            Self::LastRoom(_) => "E_LAST_ROOM",
        }
    }
}
