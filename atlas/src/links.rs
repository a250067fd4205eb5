//! Cross-references between rooms.
//!
//! Room descriptions are markdown, and `[text](target)` links whose target is
//! a bare room id point at another room on the same map. Anything that looks
//! like a URL, an anchor, an absolute path or a mail link is external and is
//! ignored here.

#[cfg(test)]
#[path = "links_test.rs"]
mod links_test;

use std::collections::HashSet;

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::lookup::sorted_by_list_position;
use crate::model::MapState;

/// One internal link found in a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomLink {
    /// Visible link text, with inline formatting stripped.
    pub text: String,
    /// The room id the link points at.
    pub target: String,
}

/// A link whose target is not a room on the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DanglingLink {
    pub source: String,
    pub link: RoomLink,
}

/// Internal links in document order.
#[must_use]
pub fn room_links(description: &str) -> Vec<RoomLink> {
    let mut links = Vec::new();
    let mut open: Option<RoomLink> = None;

    for event in Parser::new(description) {
        match event {
            Event::Start(Tag::Link { dest_url, .. }) => {
                open = is_internal(&dest_url).then(|| RoomLink { text: String::new(), target: dest_url.to_string() });
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(link) = open.as_mut() {
                    link.text.push_str(&text);
                }
            }
            Event::End(TagEnd::Link) => {
                if let Some(link) = open.take() {
                    links.push(link);
                }
            }
            _ => {}
        }
    }
    links
}

/// Links on the map whose target matches no room id, in sidebar order.
#[must_use]
pub fn dangling_links(state: &MapState) -> Vec<DanglingLink> {
    let known: HashSet<&str> = state.room_list.iter().map(|r| r.id.as_str()).collect();
    sorted_by_list_position(&state.room_list)
        .into_iter()
        .flat_map(|room| {
            room_links(&room.description)
                .into_iter()
                .filter(|link| !known.contains(link.target.as_str()))
                .map(move |link| DanglingLink { source: room.id.clone(), link })
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Ids of rooms whose description links to `room_id`, in sidebar order.
/// A room linking to itself is not listed.
#[must_use]
pub fn backlinks(state: &MapState, room_id: &str) -> Vec<String> {
    sorted_by_list_position(&state.room_list)
        .into_iter()
        .filter(|room| room.id != room_id)
        .filter(|room| room_links(&room.description).iter().any(|l| l.target == room_id))
        .map(|room| room.id)
        .collect()
}

fn is_internal(target: &str) -> bool {
    !(target.is_empty()
        || target.contains("://")
        || target.starts_with('#')
        || target.starts_with('/')
        || target.starts_with("mailto:"))
}
