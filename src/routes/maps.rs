//! Map routes: fetch a map, dispatch an action on it.

use atlas::MapState;
use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use super::error::ApiError;
use crate::services::maps;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MapQuery {
    pub id: Option<String>,
}

/// `GET /api/map?id=<id>`: the full map aggregate.
pub async fn get_map(State(state): State<AppState>, Query(query): Query<MapQuery>) -> Result<Json<MapState>, ApiError> {
    let map_id = query.id.ok_or_else(|| ApiError::missing_param("id"))?;
    Ok(Json(maps::get_map(&state, &map_id).await?))
}

/// `POST /api/map/actions?id=<id>`: dispatch a `{type, payload}` action and
/// return the resulting aggregate.
pub async fn dispatch_action(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
    Json(envelope): Json<serde_json::Value>,
) -> Result<Json<MapState>, ApiError> {
    let map_id = query.id.ok_or_else(|| ApiError::missing_param("id"))?;
    Ok(Json(maps::apply_action(&state, &map_id, envelope).await?))
}
