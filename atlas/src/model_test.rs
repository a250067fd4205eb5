use serde_json::json;

use super::*;

#[test]
fn room_uses_camel_case_keys() {
    let room = Room { id: "a".into(), list_position: 2, name: "Hall".into(), description: String::new() };
    let value = serde_json::to_value(&room).unwrap();
    assert_eq!(value["listPosition"], 2);
    assert!(value.get("list_position").is_none());
}

#[test]
fn position_serializes_as_pair() {
    let marker = Marker { id: "a".into(), position: Position(54.0, 70.5) };
    let value = serde_json::to_value(&marker).unwrap();
    assert_eq!(value, json!({"id": "a", "position": [54.0, 70.5]}));
}

#[test]
fn position_rejects_three_elements() {
    let result: Result<Position, _> = serde_json::from_value(json!([1.0, 2.0, 3.0]));
    assert!(result.is_err());
}

#[test]
fn map_state_decodes_without_metadata() {
    let body = json!({
        "activeRoomId": "1",
        "roomList": [{"id": "1", "listPosition": 1, "name": "Barracks", "description": "## Description"}],
        "markerList": [{"id": "1", "position": [54, 70]}]
    });
    let state: MapState = serde_json::from_value(body).unwrap();
    assert_eq!(state.id, "");
    assert_eq!(state.image_url, "");
    assert_eq!(state.len(), 1);
    assert_eq!(state.marker("1").map(|m| m.position.x()), Some(54.0));
}

#[test]
fn map_state_decodes_full_backend_shape() {
    let body = json!({
        "id": "l23kd",
        "name": "Dummy Map",
        "description": "",
        "imageUrl": "https://example.test/map.jpg",
        "activeRoomId": "1",
        "roomList": [],
        "markerList": []
    });
    let state: MapState = serde_json::from_value(body).unwrap();
    assert_eq!(state.name, "Dummy Map");
    assert_eq!(state.image_url, "https://example.test/map.jpg");
    assert!(state.is_empty());
}

#[test]
fn marker_lookup_misses_unknown_room() {
    let state = MapState::default();
    assert!(state.marker("missing").is_none());
}
