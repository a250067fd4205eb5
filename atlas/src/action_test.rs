use serde_json::json;

use super::*;

#[test]
fn decodes_set_active_room_id() {
    let action = Action::from_wire(json!({"type": "SET_ACTIVE_ROOM_ID", "payload": "23e21"})).unwrap();
    assert_eq!(action, Action::SetActiveRoomId("23e21".into()));
}

#[test]
fn decodes_update_room_name_camel_case() {
    let action = Action::from_wire(json!({
        "type": "UPDATE_ROOM_NAME",
        "payload": {"roomId": "a", "newName": "Armory"}
    }))
    .unwrap();
    assert_eq!(action, Action::UpdateRoomName { room_id: "a".into(), new_name: "Armory".into() });
}

#[test]
fn decodes_add_room_with_null_or_missing_payload() {
    let with_null = Action::from_wire(json!({"type": "ADD_ROOM", "payload": null})).unwrap();
    let without = Action::from_wire(json!({"type": "ADD_ROOM"})).unwrap();
    assert_eq!(with_null, Action::AddRoom);
    assert_eq!(without, Action::AddRoom);
}

#[test]
fn decodes_marker_position() {
    let action = Action::from_wire(json!({
        "type": "UPDATE_MARKER_POSITION",
        "payload": {"id": "a", "position": [12.5, 40]}
    }))
    .unwrap();
    assert_eq!(action, Action::UpdateMarkerPosition { id: "a".into(), position: Position(12.5, 40.0) });
}

#[test]
fn unknown_type_is_rejected() {
    let err = Action::from_wire(json!({"type": "DEL_CONTACT", "payload": "a"})).unwrap_err();
    assert_eq!(err, StoreError::UnknownAction("DEL_CONTACT".into()));
}

#[test]
fn tag_is_case_sensitive() {
    let err = Action::from_wire(json!({"type": "Set_ACTIVE_ROOM_ID", "payload": "a"})).unwrap_err();
    assert!(matches!(err, StoreError::UnknownAction(_)));
}

#[test]
fn missing_type_is_rejected() {
    let err = Action::from_wire(json!({"payload": {"id": "a"}})).unwrap_err();
    assert!(matches!(err, StoreError::UnknownAction(_)));
}

#[test]
fn wrong_payload_shape_is_bad_payload() {
    let err = Action::from_wire(json!({"type": "DELETE_ROOM", "payload": "a"})).unwrap_err();
    match err {
        StoreError::BadPayload { action, .. } => assert_eq!(action, DELETE_ROOM),
        other => panic!("expected BadPayload, got {other:?}"),
    }
}

#[test]
fn to_wire_matches_decoder() {
    let action = Action::UpdateRoomName { room_id: "a".into(), new_name: "Armory".into() };
    let wire = action.to_wire().unwrap();
    assert_eq!(wire, json!({"type": "UPDATE_ROOM_NAME", "payload": {"roomId": "a", "newName": "Armory"}}));
    assert_eq!(Action::from_wire(wire).unwrap(), action);
}

#[test]
fn kind_matches_wire_tag() {
    let wire = Action::DeleteRoom { id: "x".into() }.to_wire().unwrap();
    assert_eq!(wire["type"], DELETE_ROOM);
    assert_eq!(Action::AddRoom.kind(), ADD_ROOM);
}
