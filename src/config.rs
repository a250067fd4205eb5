//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// JSON seed document. Built-in seed when absent.
    pub seed_path: Option<PathBuf>,
    /// Built frontend to serve for non-API paths.
    pub static_dir: Option<PathBuf>,
    /// User returned by `GET /api/user`. First seeded user when absent.
    pub user_id: Option<String>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `MAPKEEPER_SEED`: path to a seed JSON file
    /// - `MAPKEEPER_STATIC_DIR`: directory with the built frontend
    /// - `MAPKEEPER_USER_ID`: id of the signed-in user
    ///
    /// # Errors
    ///
    /// Returns `InvalidPort` if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        Ok(Self {
            port,
            seed_path: non_empty(lookup("MAPKEEPER_SEED")).map(PathBuf::from),
            static_dir: non_empty(lookup("MAPKEEPER_STATIC_DIR")).map(PathBuf::from),
            user_id: non_empty(lookup("MAPKEEPER_USER_ID")),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
