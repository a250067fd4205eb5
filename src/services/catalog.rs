//! Catalog service: the signed-in user and their map directories.
//!
//! DESIGN
//! ======
//! Users and directories are fixed at startup. Map names are not: they live
//! in each map's store and can change through `SET_MAP_DATA`, so directory
//! listings read names from the live stores at request time. A directory
//! entry whose map is not loaded is left out of the listing.

use atlas::ErrorCode;
use serde::Serialize;

use crate::seed::{DirectoryRecord, User};
use crate::state::AppState;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapSummary {
    pub id: String,
    pub name: String,
}

/// A directory as returned by `GET /api/directories`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Directory {
    pub id: String,
    pub name: String,
    pub maps: Vec<MapSummary>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no signed-in user configured")]
    NoCurrentUser,
    #[error("user not found: {0}")]
    UserNotFound(String),
}

impl ErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoCurrentUser => "E_NO_CURRENT_USER",
            Self::UserNotFound(_) => "E_USER_NOT_FOUND",
        }
    }
}

pub struct Catalog {
    users: Vec<User>,
    directories: Vec<DirectoryRecord>,
    current_user_id: Option<String>,
}

impl Catalog {
    #[must_use]
    pub fn new(users: Vec<User>, directories: Vec<DirectoryRecord>, current_user_id: Option<String>) -> Self {
        let current_user_id = current_user_id.or_else(|| users.first().map(|u| u.id.clone()));
        if let Some(id) = &current_user_id {
            if !users.iter().any(|u| &u.id == id) {
                tracing::warn!(user_id = %id, "configured user is not in the seed");
            }
        }
        Self { users, directories, current_user_id }
    }

    /// The signed-in user, if configured and known.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        let id = self.current_user_id.as_deref()?;
        self.users.iter().find(|u| u.id == id)
    }

    /// Look up a user by id.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` if no user has this id.
    pub fn user(&self, id: &str) -> Result<&User, CatalogError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .ok_or_else(|| CatalogError::UserNotFound(id.to_owned()))
    }

    /// Directories owned by `user_id`, in seed order.
    ///
    /// # Errors
    ///
    /// Returns `UserNotFound` for an unknown user.
    pub fn directories_of(&self, user_id: &str) -> Result<Vec<&DirectoryRecord>, CatalogError> {
        self.user(user_id)?;
        Ok(self.directories.iter().filter(|d| d.owner_id == user_id).collect())
    }
}

// =============================================================================
// QUERIES
// =============================================================================

/// The signed-in user.
///
/// # Errors
///
/// Returns `NoCurrentUser` if no user is configured or it is not seeded.
pub fn current_user(state: &AppState) -> Result<User, CatalogError> {
    state.catalog.current_user().cloned().ok_or(CatalogError::NoCurrentUser)
}

/// Directories of `user_id` with map names resolved from the live stores.
///
/// # Errors
///
/// Returns `UserNotFound` for an unknown user.
pub async fn list_directories(state: &AppState, user_id: &str) -> Result<Vec<Directory>, CatalogError> {
    let records = state.catalog.directories_of(user_id)?;
    let maps = state.maps.read().await;

    let directories = records
        .into_iter()
        .map(|record| {
            let summaries = record
                .map_ids
                .iter()
                .filter_map(|map_id| match maps.get(map_id) {
                    Some(store) => Some(MapSummary { id: map_id.clone(), name: store.state().name.clone() }),
                    None => {
                        tracing::warn!(directory_id = %record.id, %map_id, "directory references unknown map");
                        None
                    }
                })
                .collect();
            Directory { id: record.id.clone(), name: record.name.clone(), maps: summaries }
        })
        .collect();
    Ok(directories)
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
