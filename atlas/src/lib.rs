//! Room and marker state for annotated maps.
//!
//! A map is a background image with rooms pinned onto it. Each room has a
//! markdown description and a marker at an image-space position; the rooms
//! are listed in a sidebar ordered by their 1-based list position. This crate
//! owns the aggregate (`MapState`), the closed set of edits that can be made
//! to it (`Action`), the pure reducer that applies them, and a `Store` that
//! UI layers and the HTTP backend share.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | `Room`, `Marker`, `Position` and the `MapState` aggregate |
//! | [`action`] | Action enum and `{type, payload}` wire decoding |
//! | [`reduce`] | Pure state transitions |
//! | [`lookup`] | Find-by-id, find-by-position and sidebar ordering |
//! | [`store`] | Subscribing store with injected ids and load fencing |
//! | [`ids`] | Id generators for new rooms |
//! | [`links`] | `[text](roomId)` cross-reference extraction |
//! | [`invariants`] | Consistency report for loaded or seeded maps |
//! | [`error`] | `StoreError` and grepable error codes |

pub mod action;
pub mod error;
pub mod ids;
pub mod invariants;
pub mod links;
pub mod lookup;
pub mod model;
pub mod reduce;
pub mod store;

pub use action::Action;
pub use error::{ErrorCode, StoreError};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use invariants::{Violation, check_invariants};
pub use links::{RoomLink, backlinks, dangling_links, room_links};
pub use model::{MapState, Marker, Position, Room};
pub use store::{LoadTicket, Store, SubscriptionId};
