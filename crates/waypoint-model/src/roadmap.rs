//! Roadmap documents and their nodes

use crate::id::{NodeId, RoadmapId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Canonical structured plan document
///
/// The `id` is immutable after creation; mutation happens by replacing
/// the document wholesale (copy-on-write), never by editing a stored
/// entry in place through an active copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Roadmap {
    /// Generated document id
    pub id: RoadmapId,
    /// Generation timestamp (UTC)
    pub generated_at: DateTime<Utc>,
    /// Document title
    pub title: String,
    /// Document description (may be empty)
    #[serde(default)]
    pub description: String,
    /// Ordered steps
    pub nodes: Vec<RoadmapNode>,
    /// Supporting source references
    #[serde(default)]
    pub sources: Vec<SourceRef>,
}

impl Roadmap {
    /// Create an empty roadmap with a fresh id and timestamp
    #[inline]
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: RoadmapId::generate(),
            generated_at: Utc::now(),
            title: title.into(),
            description: String::new(),
            nodes: Vec::new(),
            sources: Vec::new(),
        }
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With nodes
    #[inline]
    #[must_use]
    pub fn with_nodes(mut self, nodes: Vec<RoadmapNode>) -> Self {
        self.nodes = nodes;
        self
    }

    /// With source references
    #[inline]
    #[must_use]
    pub fn with_sources(mut self, sources: Vec<SourceRef>) -> Self {
        self.sources = sources;
        self
    }

    /// Look up a node by id
    #[must_use]
    pub fn node(&self, node_id: &str) -> Option<&RoadmapNode> {
        self.nodes.iter().find(|n| n.id.as_str() == node_id)
    }

    /// Check the node-id uniqueness invariant
    #[must_use]
    pub fn has_unique_node_ids(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.nodes.len());
        self.nodes.iter().all(|n| seen.insert(n.id.as_str()))
    }
}

/// One step within a roadmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapNode {
    /// Node id, unique within the owning roadmap
    pub id: NodeId,
    /// Step title
    pub title: String,
    /// Step content (markdown)
    pub content: String,
    /// Reference strings (free-form)
    #[serde(default)]
    pub references: Vec<String>,
    /// Ids of connected nodes; dangling ids are tolerated
    #[serde(default)]
    pub connections: Vec<String>,
    /// Completion flag, toggled by the progress tracker
    #[serde(default)]
    pub completed: bool,
}

impl RoadmapNode {
    /// Create a node with the given id, title and content
    #[inline]
    #[must_use]
    pub fn new(
        id: impl Into<NodeId>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            references: Vec::new(),
            connections: Vec::new(),
            completed: false,
        }
    }

    /// With connections
    #[inline]
    #[must_use]
    pub fn with_connections(mut self, connections: Vec<String>) -> Self {
        self.connections = connections;
        self
    }

    /// With references
    #[inline]
    #[must_use]
    pub fn with_references(mut self, references: Vec<String>) -> Self {
        self.references = references;
        self
    }
}

/// Supporting source reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Source location
    pub uri: String,
    /// Display title (may be empty)
    #[serde(default)]
    pub title: String,
}

impl SourceRef {
    /// Create a source reference
    #[inline]
    #[must_use]
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roadmap_builder() {
        let roadmap = Roadmap::new("Learn Rust")
            .with_description("A plan")
            .with_nodes(vec![RoadmapNode::new("a", "Basics", "Start here")]);

        assert_eq!(roadmap.title, "Learn Rust");
        assert_eq!(roadmap.description, "A plan");
        assert_eq!(roadmap.nodes.len(), 1);
        assert!(roadmap.sources.is_empty());
    }

    #[test]
    fn node_lookup() {
        let roadmap = Roadmap::new("T").with_nodes(vec![
            RoadmapNode::new("a", "A", "aa"),
            RoadmapNode::new("b", "B", "bb"),
        ]);

        assert!(roadmap.node("b").is_some());
        assert!(roadmap.node("c").is_none());
    }

    #[test]
    fn unique_node_ids_invariant() {
        let unique = Roadmap::new("T").with_nodes(vec![
            RoadmapNode::new("a", "A", ""),
            RoadmapNode::new("b", "B", ""),
        ]);
        assert!(unique.has_unique_node_ids());

        let duplicated = Roadmap::new("T").with_nodes(vec![
            RoadmapNode::new("a", "A", ""),
            RoadmapNode::new("a", "B", ""),
        ]);
        assert!(!duplicated.has_unique_node_ids());
    }

    #[test]
    fn roadmap_serde_round_trip() {
        let roadmap = Roadmap::new("T").with_nodes(vec![RoadmapNode::new("a", "A", "body")
            .with_connections(vec!["b".to_string()])]);

        let json = serde_json::to_string(&roadmap).unwrap();
        assert!(json.contains("\"generatedAt\""));

        let back: Roadmap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, roadmap);
    }

    #[test]
    fn node_defaults_on_deserialize() {
        let json = r#"{"id":"a","title":"A","content":"body"}"#;
        let node: RoadmapNode = serde_json::from_str(json).unwrap();

        assert!(node.references.is_empty());
        assert!(node.connections.is_empty());
        assert!(!node.completed);
    }
}
