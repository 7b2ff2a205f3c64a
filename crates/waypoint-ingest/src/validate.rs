//! Canonicalization of parsed-but-untrusted roadmap objects
//!
//! The parsed JSON is walked as an untyped tree with explicit presence
//! and type checks per field; it is never deserialized straight into
//! the target schema. `title` and `nodes` are required; everything
//! else is defaulted deterministically. The output always satisfies
//! the model invariants (unique node ids, generated document id)
//! regardless of how malformed the non-fatal input fields were.

use crate::error::ValidateError;
use serde_json::Value;
use std::collections::HashSet;
use tracing::debug;
use waypoint_model::{NodeId, Roadmap, RoadmapId, RoadmapNode, SourceRef};

/// Placeholder texts applied to unusable node fields
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Title used when a node has none
    pub node_title_placeholder: String,
    /// Content used when a node has none
    pub node_content_placeholder: String,
}

impl ValidatorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            node_title_placeholder: "Untitled step".to_string(),
            node_content_placeholder: "No content provided.".to_string(),
        }
    }
}

/// Turns untrusted parsed JSON into a canonical [`Roadmap`]
///
/// Pure: no I/O, no storage access. The document id and timestamp are
/// always generated here, never trusted from input.
#[derive(Debug, Clone, Default)]
pub struct DocumentValidator {
    config: ValidatorConfig,
}

impl DocumentValidator {
    /// Create a validator with default placeholders
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with explicit configuration
    #[inline]
    #[must_use]
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Canonicalize `value` into a roadmap
    pub fn validate(&self, value: &Value) -> Result<Roadmap, ValidateError> {
        let title = value
            .get("title")
            .and_then(Value::as_str)
            .filter(|t| !t.trim().is_empty());
        let raw_nodes = value.get("nodes").and_then(Value::as_array);

        let (Some(title), Some(raw_nodes)) = (title, raw_nodes) else {
            return Err(ValidateError::MissingTitleOrNodes);
        };

        let description = value
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let mut seen_ids = HashSet::with_capacity(raw_nodes.len());
        let nodes = raw_nodes
            .iter()
            .map(|raw| self.sanitize_node(raw, &mut seen_ids))
            .collect();

        let roadmap = Roadmap {
            id: RoadmapId::generate(),
            generated_at: chrono::Utc::now(),
            title: title.to_string(),
            description,
            nodes,
            sources: sanitize_sources(value.get("sources")),
        };

        debug!(id = %roadmap.id, nodes = roadmap.nodes.len(), "roadmap canonicalized");
        Ok(roadmap)
    }

    /// Sanitize one node, guaranteeing a unique non-empty id
    fn sanitize_node(&self, raw: &Value, seen_ids: &mut HashSet<String>) -> RoadmapNode {
        let supplied = raw
            .get("id")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty());

        let mut id = match supplied {
            Some(s) => s.to_string(),
            None => NodeId::generate().to_string(),
        };
        // Duplicates (supplied or generated) get a fresh token; the
        // uniqueness invariant beats fidelity to the input id
        while !seen_ids.insert(id.clone()) {
            id = NodeId::generate().to_string();
        }

        let title = raw
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(&self.config.node_title_placeholder);
        let content = raw
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or(&self.config.node_content_placeholder);

        RoadmapNode {
            id: NodeId::from(id),
            title: title.to_string(),
            content: content.to_string(),
            references: string_items(raw.get("references")),
            connections: string_items(raw.get("connections")),
            completed: false,
        }
    }
}

/// Collect string elements of an optional array; non-arrays are
/// discarded wholesale, not coerced
fn string_items(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Keep source items carrying a string `uri`; `title` defaults empty
fn sanitize_sources(value: Option<&Value>) -> Vec<SourceRef> {
    value
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(|item| {
                    let uri = item.get("uri").and_then(Value::as_str)?;
                    let title = item.get("title").and_then(Value::as_str).unwrap_or_default();
                    Some(SourceRef::new(uri, title))
                })
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn minimal_valid_document() {
        let value = json!({"title": "T", "nodes": []});
        let roadmap = DocumentValidator::new().validate(&value).unwrap();

        assert_eq!(roadmap.title, "T");
        assert_eq!(roadmap.description, "");
        assert!(roadmap.nodes.is_empty());
        assert!(roadmap.sources.is_empty());
        assert!(roadmap.id.as_str().starts_with("roadmap-"));
    }

    #[test]
    fn missing_title_is_structural_failure() {
        let value = json!({"nodes": [{"id": "a", "title": "A"}]});
        let err = DocumentValidator::new().validate(&value).unwrap_err();
        assert!(matches!(err, ValidateError::MissingTitleOrNodes));
    }

    #[test]
    fn missing_nodes_is_structural_failure() {
        let value = json!({"title": "T"});
        assert!(DocumentValidator::new().validate(&value).is_err());
    }

    #[test]
    fn empty_title_is_structural_failure() {
        let value = json!({"title": "   ", "nodes": []});
        assert!(DocumentValidator::new().validate(&value).is_err());
    }

    #[test]
    fn non_array_nodes_is_structural_failure() {
        let value = json!({"title": "T", "nodes": "not-a-list"});
        assert!(DocumentValidator::new().validate(&value).is_err());
    }

    #[test]
    fn incoming_id_and_timestamp_are_overridden() {
        let value = json!({"title": "T", "nodes": [], "id": "evil", "generatedAt": "1970-01-01"});
        let roadmap = DocumentValidator::new().validate(&value).unwrap();
        assert_ne!(roadmap.id.as_str(), "evil");
    }

    #[test]
    fn node_defaults_applied() {
        let value = json!({"title": "T", "nodes": [{}]});
        let roadmap = DocumentValidator::new().validate(&value).unwrap();

        let node = &roadmap.nodes[0];
        assert!(!node.id.as_str().is_empty());
        assert_eq!(node.title, "Untitled step");
        assert_eq!(node.content, "No content provided.");
        assert!(node.references.is_empty());
        assert!(node.connections.is_empty());
        assert!(!node.completed);
    }

    #[test]
    fn completed_is_always_forced_false() {
        let value = json!({
            "title": "T",
            "nodes": [{"id": "a", "title": "A", "content": "c", "completed": true}]
        });
        let roadmap = DocumentValidator::new().validate(&value).unwrap();
        assert!(!roadmap.nodes[0].completed);
    }

    #[test]
    fn non_array_references_discarded_not_coerced() {
        let value = json!({
            "title": "T",
            "nodes": [{"id": "a", "references": "see chapter 3", "connections": 7}]
        });
        let roadmap = DocumentValidator::new().validate(&value).unwrap();
        assert!(roadmap.nodes[0].references.is_empty());
        assert!(roadmap.nodes[0].connections.is_empty());
    }

    #[test]
    fn dangling_connections_are_tolerated() {
        let value = json!({
            "title": "T",
            "nodes": [{"id": "a", "connections": ["a", "missing"]}]
        });
        let roadmap = DocumentValidator::new().validate(&value).unwrap();
        assert_eq!(roadmap.nodes[0].connections, vec!["a", "missing"]);
    }

    #[test]
    fn duplicate_node_ids_are_regenerated() {
        let value = json!({
            "title": "T",
            "nodes": [{"id": "a"}, {"id": "a"}, {"id": "a"}]
        });
        let roadmap = DocumentValidator::new().validate(&value).unwrap();

        assert!(roadmap.has_unique_node_ids());
        assert_eq!(roadmap.nodes[0].id.as_str(), "a");
        assert_ne!(roadmap.nodes[1].id.as_str(), "a");
    }

    #[test]
    fn sources_keep_only_items_with_string_uri() {
        let value = json!({
            "title": "T",
            "nodes": [],
            "sources": [
                {"uri": "https://example.com", "title": "Example"},
                {"title": "no uri"},
                {"uri": 42},
                "not an object"
            ]
        });
        let roadmap = DocumentValidator::new().validate(&value).unwrap();

        assert_eq!(roadmap.sources.len(), 1);
        assert_eq!(roadmap.sources[0].uri, "https://example.com");
    }

    #[test]
    fn custom_placeholders() {
        let config = ValidatorConfig {
            node_title_placeholder: "??".to_string(),
            node_content_placeholder: "tbd".to_string(),
        };
        let value = json!({"title": "T", "nodes": [{}]});
        let roadmap = DocumentValidator::with_config(config).validate(&value).unwrap();

        assert_eq!(roadmap.nodes[0].title, "??");
        assert_eq!(roadmap.nodes[0].content, "tbd");
    }

    proptest! {
        // Sanitization never yields an empty node id and never lets two
        // nodes collide, no matter how ids are present, missing or
        // duplicated in the input.
        #[test]
        fn sanitized_node_ids_unique_and_non_empty(
            ids in proptest::collection::vec(
                proptest::option::of("[a-z]{0,4}"),
                0..16,
            )
        ) {
            let nodes: Vec<_> = ids
                .iter()
                .map(|id| match id {
                    Some(id) => json!({"id": id}),
                    None => json!({}),
                })
                .collect();
            let value = json!({"title": "T", "nodes": nodes});

            let roadmap = DocumentValidator::new().validate(&value).unwrap();

            prop_assert!(roadmap.has_unique_node_ids());
            prop_assert!(roadmap.nodes.iter().all(|n| !n.id.as_str().is_empty()));
            prop_assert_eq!(roadmap.nodes.len(), ids.len());
        }
    }
}
