//! User and directory routes.

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use super::error::ApiError;
use crate::seed::User;
use crate::services::catalog::{self, Directory};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoriesQuery {
    pub user_id: Option<String>,
}

/// `GET /api/user`: the signed-in user.
pub async fn current_user(State(state): State<AppState>) -> Result<Json<User>, ApiError> {
    Ok(Json(catalog::current_user(&state)?))
}

/// `GET /api/directories?userId=<id>`: the user's directories and maps.
pub async fn list_directories(
    State(state): State<AppState>,
    Query(query): Query<DirectoriesQuery>,
) -> Result<Json<Vec<Directory>>, ApiError> {
    let user_id = query.user_id.ok_or_else(|| ApiError::missing_param("userId"))?;
    let directories = catalog::list_directories(&state, &user_id).await?;
    Ok(Json(directories))
}
