//! Map service: read a map, apply an action to it.
//!
//! DESIGN
//! ======
//! Every map has one `Store` for the life of the process. Reads clone the
//! current snapshot under the read lock; actions decode the wire envelope
//! first (so a bad request never touches the lock) and then dispatch under
//! the write lock. The store's own error comes back unchanged so routes can
//! map it to a status.

use atlas::{Action, ErrorCode, MapState, Store, StoreError};

use crate::state::AppState;

#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("map not found: {0}")]
    NotFound(String),
    #[error("map data for {payload} cannot replace map {route}")]
    IdMismatch { route: String, payload: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ErrorCode for MapError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "E_MAP_NOT_FOUND",
            Self::IdMismatch { .. } => "E_MAP_ID_MISMATCH",
            Self::Store(e) => e.error_code(),
        }
    }
}

/// Wrap a seeded or loaded map in a store that logs its changes.
#[must_use]
pub fn open_store(map: MapState) -> Store {
    report_inconsistencies(&map);

    let mut store = Store::with_state(map);
    store.subscribe(|state| {
        tracing::info!(
            map_id = %state.id,
            rooms = state.room_list.len(),
            active_room_id = %state.active_room_id,
            "map updated"
        );
    });
    store
}

fn report_inconsistencies(map: &MapState) {
    for violation in atlas::check_invariants(map) {
        tracing::warn!(map_id = %map.id, %violation, "map is inconsistent");
    }
    for dangling in atlas::dangling_links(map) {
        tracing::debug!(map_id = %map.id, room_id = %dangling.source, target = %dangling.link.target, "dangling room link");
    }
}

/// Replacement data keeps the map's identity: a blank id takes the route's
/// id, a different one is refused.
fn bind_map_data(map_id: &str, action: Action) -> Result<Action, MapError> {
    let mut data = match action {
        Action::SetMapData(data) => data,
        other => return Ok(other),
    };
    if data.id.is_empty() {
        data.id = map_id.to_owned();
    } else if data.id != map_id {
        return Err(MapError::IdMismatch { route: map_id.to_owned(), payload: data.id });
    }
    report_inconsistencies(&data);
    Ok(Action::SetMapData(data))
}

/// Snapshot of a map.
///
/// # Errors
///
/// Returns `NotFound` if no map has this id.
pub async fn get_map(state: &AppState, map_id: &str) -> Result<MapState, MapError> {
    let maps = state.maps.read().await;
    let store = maps.get(map_id).ok_or_else(|| MapError::NotFound(map_id.to_owned()))?;
    Ok(store.state().clone())
}

/// Decode a wire action and dispatch it on a map. Returns the new snapshot.
///
/// # Errors
///
/// Returns `NotFound` for an unknown map, `IdMismatch` for map data
/// carrying another map's id, or the store's error for an unknown action,
/// a malformed payload, or a rejected delete.
pub async fn apply_action(
    state: &AppState,
    map_id: &str,
    envelope: serde_json::Value,
) -> Result<MapState, MapError> {
    let action = bind_map_data(map_id, Action::from_wire(envelope)?)?;
    let mut maps = state.maps.write().await;
    let store = maps
        .get_mut(map_id)
        .ok_or_else(|| MapError::NotFound(map_id.to_owned()))?;
    Ok(store.dispatch(action)?.clone())
}

#[cfg(test)]
#[path = "maps_test.rs"]
mod tests;
