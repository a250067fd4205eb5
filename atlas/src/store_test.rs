use std::sync::{Arc, Mutex};

use super::*;
use crate::ids::SequentialIds;
use crate::model::{Marker, Position};

fn room(id: &str, list_position: u32) -> Room {
    Room { id: id.into(), list_position, name: id.to_uppercase(), description: String::new() }
}

fn seeded_store() -> Store {
    let state = MapState {
        id: "m1".into(),
        active_room_id: "a".into(),
        room_list: vec![room("b", 2), room("a", 1), room("c", 3)],
        marker_list: ["a", "b", "c"]
            .iter()
            .map(|id| Marker { id: (*id).into(), position: Position(0.0, 0.0) })
            .collect(),
        ..MapState::default()
    };
    Store::new(state, SequentialIds::new("s"))
}

fn recorder(store: &mut Store) -> (SubscriptionId, Arc<Mutex<Vec<String>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let id = store.subscribe(move |state| {
        sink.lock().expect("recorder mutex").push(state.active_room_id.clone());
    });
    (id, seen)
}

#[test]
fn dispatch_replaces_state() {
    let mut store = seeded_store();
    let state = store.dispatch(Action::SetActiveRoomId("c".into())).unwrap();
    assert_eq!(state.active_room_id, "c");
    assert_eq!(store.active_room().map(|r| r.name.as_str()), Some("C"));
}

#[test]
fn dispatch_uses_injected_ids() {
    let mut store = seeded_store();
    store.dispatch(Action::AddRoom).unwrap();
    store.dispatch(Action::AddRoom).unwrap();
    let ids: Vec<&str> = store.state().room_list.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["b", "a", "c", "s1", "s2"]);
}

#[test]
fn failed_dispatch_keeps_state_and_skips_subscribers() {
    let mut store = seeded_store();
    let (_, seen) = recorder(&mut store);
    let before = store.state().clone();

    let err = store.dispatch(Action::DeleteRoom { id: "nope".into() }).unwrap_err();

    assert_eq!(err, StoreError::RoomNotFound("nope".into()));
    assert_eq!(store.state(), &before);
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn subscribers_see_each_transition_in_order() {
    let mut store = seeded_store();
    let order = Arc::new(Mutex::new(Vec::new()));
    for tag in ["first", "second"] {
        let sink = Arc::clone(&order);
        store.subscribe(move |_| sink.lock().unwrap().push(tag));
    }

    store.dispatch(Action::SetActiveRoomId("b".into())).unwrap();

    assert_eq!(*order.lock().unwrap(), ["first", "second"]);
}

#[test]
fn unsubscribe_stops_notifications() {
    let mut store = seeded_store();
    let (id, seen) = recorder(&mut store);

    store.dispatch(Action::SetActiveRoomId("b".into())).unwrap();
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.dispatch(Action::SetActiveRoomId("c".into())).unwrap();

    assert_eq!(*seen.lock().unwrap(), ["b"]);
    assert_eq!(store.subscriber_count(), 0);
}

#[test]
fn delete_notifies_with_reassigned_active_room() {
    let mut store = seeded_store();
    let (_, seen) = recorder(&mut store);
    store.dispatch(Action::DeleteRoom { id: "a".into() }).unwrap();
    assert_eq!(*seen.lock().unwrap(), ["b"]);
}

#[test]
fn sorted_rooms_follow_list_position() {
    let store = seeded_store();
    let names: Vec<String> = store.sorted_rooms().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["A", "B", "C"]);
}

#[test]
fn active_room_is_none_for_dangling_pointer() {
    let mut store = seeded_store();
    store.dispatch(Action::SetActiveRoomId("ghost".into())).unwrap();
    assert!(store.active_room().is_none());
}

// =============================================================
// Load fencing
// =============================================================

fn fetched(id: &str) -> MapState {
    MapState {
        id: id.into(),
        active_room_id: "x".into(),
        room_list: vec![room("x", 1)],
        marker_list: vec![Marker { id: "x".into(), position: Position(3.0, 4.0) }],
        ..MapState::default()
    }
}

#[test]
fn latest_load_is_applied() {
    let mut store = seeded_store();
    let ticket = store.begin_load();
    assert!(store.finish_load(ticket, fetched("m2")));
    assert_eq!(store.state().id, "m2");
}

#[test]
fn stale_load_is_dropped() {
    let mut store = seeded_store();
    let old = store.begin_load();
    let new = store.begin_load();
    assert_ne!(old, new);

    assert!(store.finish_load(new, fetched("m3")));
    assert!(!store.finish_load(old, fetched("m2")));
    assert_eq!(store.state().id, "m3");
}

#[test]
fn load_notifies_subscribers() {
    let mut store = seeded_store();
    let (_, seen) = recorder(&mut store);
    let ticket = store.begin_load();
    store.finish_load(ticket, fetched("m2"));
    assert_eq!(*seen.lock().unwrap(), ["x"]);
}
