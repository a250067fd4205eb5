//! JSON error bodies for API routes.

use atlas::{ErrorCode, StoreError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::services::catalog::CatalogError;
use crate::services::maps::MapError;

/// An error response: `{ "code": "E_...", "message": "..." }`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    code: &'a str,
    message: &'a str,
}

impl ApiError {
    pub fn new(status: StatusCode, err: &impl ErrorCode) -> Self {
        Self { status, code: err.error_code(), message: err.to_string() }
    }

    /// A required query parameter was not supplied.
    pub fn missing_param(name: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "E_MISSING_PARAM",
            message: format!("missing query parameter: {name}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { code: self.code, message: &self.message };
        (self.status, Json(body)).into_response()
    }
}

pub(crate) fn store_error_to_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::UnknownAction(_) | StoreError::BadPayload { .. } => StatusCode::BAD_REQUEST,
        StoreError::RoomNotFound(_) => StatusCode::NOT_FOUND,
        StoreError::NoRoomAtPosition(_) | StoreError::LastRoom(_) => StatusCode::CONFLICT,
    }
}

impl From<MapError> for ApiError {
    fn from(err: MapError) -> Self {
        let status = match &err {
            MapError::NotFound(_) => StatusCode::NOT_FOUND,
            MapError::IdMismatch { .. } => StatusCode::BAD_REQUEST,
            MapError::Store(e) => store_error_to_status(e),
        };
        if status.is_client_error() {
            tracing::debug!(error = %err, code = err.error_code(), "map request rejected");
        }
        Self::new(status, &err)
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self::new(StatusCode::NOT_FOUND, &err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_statuses() {
        assert_eq!(store_error_to_status(&StoreError::UnknownAction("X".into())), StatusCode::BAD_REQUEST);
        assert_eq!(store_error_to_status(&StoreError::RoomNotFound("a".into())), StatusCode::NOT_FOUND);
        assert_eq!(store_error_to_status(&StoreError::LastRoom("a".into())), StatusCode::CONFLICT);
        assert_eq!(store_error_to_status(&StoreError::NoRoomAtPosition(2)), StatusCode::CONFLICT);
    }

    #[test]
    fn map_not_found_is_404_with_code() {
        let err = ApiError::from(MapError::NotFound("m".into()));
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.code, "E_MAP_NOT_FOUND");
        assert_eq!(err.message, "map not found: m");
    }

    #[test]
    fn store_error_keeps_its_code() {
        let err = ApiError::from(MapError::Store(StoreError::BadPayload { action: "DELETE_ROOM".into(), reason: "x".into() }));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "E_BAD_PAYLOAD");
    }

    #[test]
    fn map_id_mismatch_is_400() {
        let err = ApiError::from(MapError::IdMismatch { route: "a".into(), payload: "b".into() });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "E_MAP_ID_MISMATCH");
    }

    #[test]
    fn missing_param_is_400() {
        let err = ApiError::missing_param("id");
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
