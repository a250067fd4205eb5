//! The map store: current aggregate, dispatch, and change subscriptions.
//!
//! DESIGN
//! ======
//! A `Store` is an explicit object handed to whoever needs it (a UI tree,
//! the backend's session map, the CLI). It owns the current `MapState`, the
//! id generator used by `AddRoom`, and a list of subscribers. `dispatch` runs
//! the pure reducer; on success the new aggregate replaces the old one and
//! every subscriber is called with it in registration order. On failure the
//! aggregate is unchanged and nobody is notified.
//!
//! LOAD FENCING
//! ============
//! Fetching a map is asynchronous and may race a newer fetch (the user
//! picked another map before the first response arrived). `begin_load`
//! hands out a ticket; `finish_load` applies the fetched map only if no
//! newer ticket has been issued since. Late responses are dropped.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::action::Action;
use crate::error::StoreError;
use crate::ids::{IdGenerator, UuidIds};
use crate::lookup::sorted_by_list_position;
use crate::model::{MapState, Room};
use crate::reduce::reduce;

/// Change callback. Receives the aggregate after each successful dispatch.
pub type Subscriber = Box<dyn Fn(&MapState) + Send + Sync>;

/// Handle returned by `Store::subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Proof that a load was started. Only the most recent ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

pub struct Store {
    state: MapState,
    ids: Box<dyn IdGenerator + Send + Sync>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
    load_generation: u64,
}

impl Store {
    #[must_use]
    pub fn new(state: MapState, ids: impl IdGenerator + Send + Sync + 'static) -> Self {
        Self { state, ids: Box::new(ids), subscribers: Vec::new(), next_subscription: 0, load_generation: 0 }
    }

    /// Store with UUID ids for new rooms.
    #[must_use]
    pub fn with_state(state: MapState) -> Self {
        Self::new(state, UuidIds)
    }

    /// Current aggregate.
    #[must_use]
    pub fn state(&self) -> &MapState {
        &self.state
    }

    /// Apply an action and notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns the reducer's error unchanged; the aggregate is left as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<&MapState, StoreError> {
        let kind = action.kind();
        let next = match reduce(&self.state, action, self.ids.as_mut()) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!(map_id = %self.state.id, action = kind, error = %e, "dispatch rejected");
                return Err(e);
            }
        };
        self.state = next;
        tracing::debug!(
            map_id = %self.state.id,
            action = kind,
            rooms = self.state.room_list.len(),
            active = %self.state.active_room_id,
            "dispatch applied"
        );
        for (_, subscriber) in &self.subscribers {
            subscriber(&self.state);
        }
        Ok(&self.state)
    }

    /// Register a change callback.
    pub fn subscribe(&mut self, subscriber: impl Fn(&MapState) + Send + Sync + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a callback. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of registered callbacks.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Start a load, invalidating any ticket issued before.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.load_generation += 1;
        LoadTicket { generation: self.load_generation }
    }

    /// Apply a fetched map if `ticket` is still the newest. Returns whether
    /// the map was applied.
    pub fn finish_load(&mut self, ticket: LoadTicket, data: MapState) -> bool {
        if ticket.generation != self.load_generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.load_generation,
                map_id = %data.id,
                "dropping stale map load"
            );
            return false;
        }
        self.dispatch(Action::SetMapData(data)).is_ok()
    }

    /// The room `activeRoomId` points at, if it exists.
    #[must_use]
    pub fn active_room(&self) -> Option<&Room> {
        self.state.room_list.iter().find(|room| room.id == self.state.active_room_id)
    }

    /// Rooms in sidebar order.
    #[must_use]
    pub fn sorted_rooms(&self) -> Vec<Room> {
        sorted_by_list_position(&self.state.room_list)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("subscribers", &self.subscribers.len())
            .field("load_generation", &self.load_generation)
            .finish_non_exhaustive()
    }
}
