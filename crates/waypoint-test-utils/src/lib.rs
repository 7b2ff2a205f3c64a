//! Testing utilities for the Waypoint workspace
//!
//! Shared fixtures: canned transcripts, roadmap builders, scripted
//! fragment streams.

#![allow(missing_docs)]

use tokio::sync::mpsc;
use waypoint_ingest::StreamEvent;
use waypoint_model::{Roadmap, RoadmapNode};

/// A well-formed plan payload with two connected nodes
pub const PLAN_JSON: &str = r#"{
  "title": "Learn Rust",
  "description": "A twelve week plan",
  "nodes": [
    {
      "id": "basics",
      "title": "Language basics",
      "content": "Ownership, borrowing, enums.",
      "connections": ["tooling"]
    },
    {
      "id": "tooling",
      "title": "Cargo and tooling",
      "content": "Workspaces, clippy, rustfmt.",
      "references": ["The Cargo Book"]
    }
  ],
  "sources": [{"uri": "https://doc.rust-lang.org/book/", "title": "The Book"}]
}"#;

/// Wrap a payload the way chatty model output usually arrives
pub fn fenced_transcript(json: &str) -> String {
    format!("Here is your plan:\n```json\n{json}\n```\nEnjoy!")
}

/// Split text into fragment events of `chunk_len` chars plus a terminal Done
pub fn fragments_of(text: &str, chunk_len: usize) -> Vec<StreamEvent> {
    let chars: Vec<char> = text.chars().collect();
    let mut events: Vec<StreamEvent> = chars
        .chunks(chunk_len.max(1))
        .map(|chunk| StreamEvent::Fragment(chunk.iter().collect()))
        .collect();
    events.push(StreamEvent::Done);
    events
}

/// Queue scripted events on a closed-when-drained channel
pub fn scripted_stream(events: Vec<StreamEvent>) -> mpsc::Receiver<StreamEvent> {
    let (tx, rx) = mpsc::channel(events.len().max(1));
    for event in events {
        tx.try_send(event).expect("scripted stream fits in channel");
    }
    rx
}

/// Canonical roadmap with a fixed id, for store tests
pub fn sample_roadmap(id: &str, title: &str) -> Roadmap {
    let mut roadmap = Roadmap::new(title).with_nodes(vec![
        RoadmapNode::new("a", "Step A", "First step")
            .with_connections(vec!["b".to_string()]),
        RoadmapNode::new("b", "Step B", "Second step"),
    ]);
    roadmap.id = id.into();
    roadmap
}
