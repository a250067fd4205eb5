//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the read-only user/directory catalog and one live `Store` per map.
//! Stores sit behind a single async `RwLock`; an action request holds the
//! write lock for one synchronous dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use atlas::Store;
use tokio::sync::RwLock;

use crate::seed::SeedData;
use crate::services::catalog::Catalog;
use crate::services::maps;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub maps: Arc<RwLock<HashMap<String, Store>>>,
}

impl AppState {
    /// Build state from seed data. `user_id` picks the signed-in user; the
    /// first seeded user is used when it is `None`.
    #[must_use]
    pub fn from_seed(seed: SeedData, user_id: Option<String>) -> Self {
        let catalog = Catalog::new(seed.users, seed.directories, user_id);
        let stores = seed
            .maps
            .into_iter()
            .map(|map| (map.id.clone(), maps::open_store(map)))
            .collect();
        Self { catalog: Arc::new(catalog), maps: Arc::new(RwLock::new(stores)) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// State over the built-in seed.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::from_seed(crate::seed::builtin(), None)
    }

    /// Id of the built-in seed's only map.
    pub const SEED_MAP_ID: &str = "l23kd";

    /// Id of the built-in seed's only user.
    pub const SEED_USER_ID: &str = "03qed";
}
