//! Seed data: users, directories and maps the server starts with.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no database. At startup the server either reads a JSON seed file
//! (`MAPKEEPER_SEED`) or falls back to `builtin()`, and keeps everything in
//! memory for the life of the process.

use std::path::{Path, PathBuf};

use atlas::{MapState, Marker, Position, Room};
use serde::{Deserialize, Serialize};

// =============================================================================
// TYPES
// =============================================================================

/// A user as returned by `GET /api/user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

/// A directory as stored: owner plus the ids of the maps it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryRecord {
    pub id: String,
    pub name: String,
    pub owner_id: String,
    pub map_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub directories: Vec<DirectoryRecord>,
    #[serde(default)]
    pub maps: Vec<MapState>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
    #[error("failed to parse seed file {path}: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },
}

// =============================================================================
// LOADING
// =============================================================================

/// Read the seed file at `path`, or return the built-in seed when `None`.
///
/// # Errors
///
/// Returns `Io` if the file cannot be read and `Parse` if it is not a valid
/// seed document.
pub fn load(path: Option<&Path>) -> Result<SeedData, SeedError> {
    let Some(path) = path else {
        return Ok(builtin());
    };
    let raw = std::fs::read_to_string(path).map_err(|source| SeedError::Io { path: path.to_owned(), source })?;
    let seed: SeedData =
        serde_json::from_str(&raw).map_err(|source| SeedError::Parse { path: path.to_owned(), source })?;
    tracing::info!(
        path = %path.display(),
        users = seed.users.len(),
        directories = seed.directories.len(),
        maps = seed.maps.len(),
        "loaded seed file"
    );
    Ok(seed)
}

/// One user with one directory holding one three-room map.
#[must_use]
pub fn builtin() -> SeedData {
    SeedData {
        users: vec![User { id: "03qed".into(), name: "Jessica".into() }],
        directories: vec![DirectoryRecord {
            id: "5532f".into(),
            name: "My Maps".into(),
            owner_id: "03qed".into(),
            map_ids: vec!["l23kd".into()],
        }],
        maps: vec![dummy_map()],
    }
}

fn dummy_map() -> MapState {
    let rooms = [
        (
            "332e3",
            1,
            "Barracks",
            [54.0, 70.0],
            "## Description\nStraw mattresses line the walls, each with a small chest at its foot. \
             A long table with benches fills the middle of the room.\n\n\
             ## Exits\nThe north door opens onto a hallway leading to the \
             [Officer's Quarters](9cws2) and the [Storage Room](23e21).",
        ),
        (
            "9cws2",
            2,
            "Officer's Quarters",
            [30.0, 70.0],
            "## Description\nA table against the north wall holds a jug and a cup. \
             A bed with a locked, brass-bound chest stands against the west wall.\n\n\
             ## Exits\nThe hallway leads back to the [Barracks](332e3) and on to the \
             [Storage Room](23e21). A passage south leads to the Armory.",
        ),
        (
            "23e21",
            3,
            "Storage Room",
            [65.0, 35.0],
            "## Description\nCrates, baskets and barrels of fruit, oil and salted meat are \
             stacked against the walls. Carcasses hang from ceiling hooks.\n\n\
             ## Exits\nThe east door opens onto the hallway to the [Barracks](332e3) and the \
             [Officer's Quarters](9cws2).",
        ),
    ];

    MapState {
        id: "l23kd".into(),
        name: "Dummy Map".into(),
        description: "A lizardfolk outpost.".into(),
        image_url: "https://rapidnotes.files.wordpress.com/2016/08/dyson-logos-camping-map.jpg".into(),
        active_room_id: "332e3".into(),
        room_list: rooms
            .iter()
            .map(|(id, list_position, name, _, description)| Room {
                id: (*id).into(),
                list_position: *list_position,
                name: (*name).into(),
                description: (*description).into(),
            })
            .collect(),
        marker_list: rooms
            .iter()
            .map(|(id, _, _, [x, y], _)| Marker { id: (*id).into(), position: Position(*x, *y) })
            .collect(),
    }
}
