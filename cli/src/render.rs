//! Plain-text rendering of a map for the terminal.

use std::fmt::Write;

use atlas::lookup::{room_by_id, sorted_by_list_position};
use atlas::{MapState, Room, backlinks, check_invariants, dangling_links, room_links};

/// Map name, then one line per room in list order. The active room is
/// starred.
pub fn render_sidebar(state: &MapState) -> String {
    let mut out = format!("{}\n", state.name.to_uppercase());
    for room in sorted_by_list_position(&state.room_list) {
        let star = if room.id == state.active_room_id { '*' } else { ' ' };
        let _ = writeln!(out, "{star} {}. {}", room.list_position, room.name);
    }
    out
}

/// Room title, description, and its links in both directions.
pub fn render_room(state: &MapState, room: &Room) -> String {
    let mut out = format!("# {}\n\n{}\n", room.name, room.description.trim_end());

    let outgoing = room_links(&room.description);
    if !outgoing.is_empty() {
        out.push_str("\nLinks:\n");
        for link in outgoing {
            let target = room_by_id(&state.room_list, &link.target)
                .map_or_else(|_| format!("{} (missing)", link.target), |r| r.name.clone());
            let _ = writeln!(out, "  {} -> {target}", link.text);
        }
    }

    let incoming = backlinks(state, &room.id);
    if !incoming.is_empty() {
        out.push_str("\nLinked from:\n");
        for id in incoming {
            if let Ok(source) = room_by_id(&state.room_list, &id) {
                let _ = writeln!(out, "  {}", source.name);
            }
        }
    }
    out
}

/// Invariant violations and dangling links, or `ok`.
pub fn render_check(state: &MapState) -> String {
    let violations = check_invariants(state);
    let dangling = dangling_links(state);
    if violations.is_empty() && dangling.is_empty() {
        return "ok\n".to_owned();
    }

    let mut out = String::new();
    for violation in violations {
        let _ = writeln!(out, "violation: {violation}");
    }
    for d in dangling {
        let _ = writeln!(out, "dangling link in {}: [{}]({})", d.source, d.link.text, d.link.target);
    }
    out
}
