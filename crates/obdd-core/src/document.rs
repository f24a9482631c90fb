//! Structured document exchange for diagrams.
//!
//! ## Shape
//!
//! ```text
//! {
//!   "nodes": [ { "id": "2", "kind": "decision", "label": "p", "x": 400.0, "y": 200.0 }, ... ],
//!   "edges": [ { "source": "2", "kind": "one", "target": "1" }, ... ],
//!   "root": "2"
//! }
//! ```
//!
//! Import is atomic: a replacement graph is fully validated aside and only
//! then swapped in, so a rejected document never touches the current graph.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{GraphError, GraphResult};
use crate::graph::ObddGraph;
use crate::node::{EdgeKind, Node, NodeId, NodeKind, Position};

/// Serialized form of a whole diagram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub nodes: Vec<DocumentNode>,
    pub edges: Vec<DocumentEdge>,
    pub root: Option<String>,
}

/// Serialized node entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub x: f32,
    pub y: f32,
}

/// Serialized edge entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentEdge {
    pub source: String,
    pub kind: EdgeKind,
    pub target: String,
}

impl Document {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Render the document as pretty-printed JSON.
    pub fn to_json(&self) -> GraphResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| GraphError::malformed(e.to_string()))
    }
}

/// Read a document file.
pub fn load_json(path: impl AsRef<Path>) -> GraphResult<Document> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let document = Document::from_json(&contents)?;
    info!(path = %path.display(), nodes = document.nodes.len(), "loaded document");
    Ok(document)
}

/// Write a document file, creating parent directories as needed.
pub fn save_json(path: impl AsRef<Path>, document: &Document) -> GraphResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, document.to_json()?)?;
    info!(path = %path.display(), nodes = document.nodes.len(), "saved document");
    Ok(())
}

impl ObddGraph {
    /// Export the current state.
    pub fn to_document(&self) -> Document {
        let nodes = self
            .nodes()
            .map(|node| DocumentNode {
                id: node.id().to_string(),
                kind: node.kind(),
                label: node.label().to_string(),
                x: node.position.x,
                y: node.position.y,
            })
            .collect();

        let edges = self
            .edges()
            .map(|edge| DocumentEdge {
                source: edge.source.to_string(),
                kind: edge.kind,
                target: edge.target.to_string(),
            })
            .collect();

        Document {
            nodes,
            edges,
            root: self.root().map(|id| id.to_string()),
        }
    }

    /// Build a graph from a document, validating every structural rule.
    pub fn from_document(document: &Document) -> GraphResult<Self> {
        let mut nodes = BTreeMap::new();
        let mut terminal_zero = None;
        let mut terminal_one = None;

        for entry in &document.nodes {
            let id = parse_id(&entry.id)?;
            if nodes.contains_key(&id) {
                return Err(GraphError::malformed(format!("duplicate node id {}", entry.id)));
            }

            if !entry.x.is_finite() || !entry.y.is_finite() {
                return Err(GraphError::malformed(format!(
                    "node {} has a non-finite position",
                    entry.id
                )));
            }
            let position = Position::new(entry.x, entry.y);
            let node = match entry.kind {
                NodeKind::Terminal => {
                    let slot = match entry.label.as_str() {
                        "0" => &mut terminal_zero,
                        "1" => &mut terminal_one,
                        other => {
                            return Err(GraphError::malformed(format!(
                                "terminal {} has label {other:?}, expected \"0\" or \"1\"",
                                entry.id
                            )))
                        }
                    };
                    if slot.replace(id).is_some() {
                        return Err(GraphError::malformed(format!(
                            "more than one terminal labeled {:?}",
                            entry.label
                        )));
                    }
                    Node::terminal(id, entry.label == "1", position)
                }
                NodeKind::Decision => {
                    if entry.label.trim().is_empty() {
                        return Err(GraphError::malformed(format!(
                            "decision node {} has an empty label",
                            entry.id
                        )));
                    }
                    Node::decision(id, entry.label.trim(), position)
                }
            };
            nodes.insert(id, node);
        }

        let (Some(zero), Some(one)) = (terminal_zero, terminal_one) else {
            return Err(GraphError::malformed(
                "document requires terminal nodes labeled \"0\" and \"1\"",
            ));
        };

        let mut seen_slots = HashSet::new();
        for edge in &document.edges {
            let source = parse_id(&edge.source)?;
            let target = parse_id(&edge.target)?;
            if !nodes.contains_key(&target) {
                return Err(GraphError::malformed(format!(
                    "edge target {} does not exist",
                    edge.target
                )));
            }
            let node = nodes.get_mut(&source).ok_or_else(|| {
                GraphError::malformed(format!("edge source {} does not exist", edge.source))
            })?;
            if node.is_terminal() {
                return Err(GraphError::malformed(format!(
                    "terminal node {} cannot have outgoing edges",
                    edge.source
                )));
            }
            if !seen_slots.insert((source, edge.kind)) {
                return Err(GraphError::malformed(format!(
                    "node {} has more than one {} edge",
                    edge.source, edge.kind
                )));
            }
            node.outgoing.set(edge.kind, target);
        }

        let root = match &document.root {
            Some(raw) => {
                let id = parse_id(raw)?;
                if !nodes.contains_key(&id) {
                    return Err(GraphError::malformed(format!("root {raw} does not exist")));
                }
                Some(id)
            }
            None => None,
        };

        debug!(nodes = nodes.len(), edges = document.edges.len(), "validated document");
        ObddGraph::from_parts(nodes, root, [zero, one])
    }

    /// Replace the current state with a document; on error nothing changes.
    pub fn load_document(&mut self, document: &Document) -> GraphResult<()> {
        let replacement = ObddGraph::from_document(document)?;
        self.replace_with(replacement);
        Ok(())
    }
}

fn parse_id(raw: &str) -> GraphResult<NodeId> {
    raw.parse()
        .map_err(|_| GraphError::malformed(format!("invalid node id {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_graph() -> ObddGraph {
        let mut graph = ObddGraph::new();
        let p = graph.add_decision_node();
        let q = graph.add_decision_node();
        graph.move_node(q, Position::new(512.5, 301.25)).unwrap();
        graph.connect(p, EdgeKind::Zero, graph.terminal(false)).unwrap();
        graph.connect(p, EdgeKind::One, q).unwrap();
        graph.connect(q, EdgeKind::One, graph.terminal(true)).unwrap();
        graph.set_root(p).unwrap();
        graph
    }

    #[test]
    fn test_round_trip_preserves_structure() {
        let graph = sample_graph();
        let restored = ObddGraph::from_document(&graph.to_document()).unwrap();
        assert_eq!(restored.to_document(), graph.to_document());
        assert_eq!(restored.root(), graph.root());
        assert_eq!(restored.edges().collect::<Vec<_>>(), graph.edges().collect::<Vec<_>>());
    }

    #[test]
    fn test_json_shape() {
        let json = sample_graph().to_document().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["root"], "2");
        assert_eq!(value["nodes"][0]["kind"], "terminal");
        assert_eq!(value["nodes"][2]["kind"], "decision");
        assert_eq!(value["nodes"][2]["label"], "p");
        assert_eq!(value["edges"][0]["kind"], "zero");
        assert_eq!(value["edges"][0]["source"], "2");
    }

    #[test]
    fn test_dangling_target_rejected_and_graph_untouched() {
        let mut graph = sample_graph();
        let before = graph.clone();

        let mut doc = graph.to_document();
        doc.edges[0].target = "99".to_string();

        let err = graph.load_document(&doc).unwrap_err();
        assert!(matches!(err, GraphError::MalformedDocument(_)));
        assert_eq!(graph, before);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut doc = sample_graph().to_document();
        doc.nodes[3].id = doc.nodes[2].id.clone();
        assert!(matches!(
            ObddGraph::from_document(&doc),
            Err(GraphError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_duplicate_edge_kind_rejected() {
        let mut doc = sample_graph().to_document();
        let mut extra = doc.edges[0].clone();
        extra.target = "1".to_string();
        doc.edges.push(extra);
        assert!(matches!(
            ObddGraph::from_document(&doc),
            Err(GraphError::MalformedDocument(_))
        ));
    }

    #[test]
    fn test_edge_from_terminal_rejected() {
        let mut doc = sample_graph().to_document();
        doc.edges.push(DocumentEdge {
            source: "0".to_string(),
            kind: EdgeKind::One,
            target: "1".to_string(),
        });
        assert!(ObddGraph::from_document(&doc).is_err());
    }

    #[test]
    fn test_missing_terminal_rejected() {
        let mut doc = sample_graph().to_document();
        doc.nodes.retain(|n| n.label != "1");
        doc.edges.retain(|e| e.target != "1");
        assert!(ObddGraph::from_document(&doc).is_err());
    }

    #[test]
    fn test_unknown_kind_and_missing_fields_rejected() {
        let unknown = r#"{"nodes":[{"id":"0","kind":"leaf","label":"0","x":0,"y":0}],"edges":[],"root":null}"#;
        assert!(matches!(
            Document::from_json(unknown),
            Err(GraphError::MalformedDocument(_))
        ));

        let missing = r#"{"nodes":[{"id":"0","kind":"terminal","x":0,"y":0}],"edges":[],"root":null}"#;
        assert!(Document::from_json(missing).is_err());

        let bad_edge = r#"{"nodes":[],"edges":[{"source":"2","kind":"two","target":"0"}],"root":null}"#;
        assert!(Document::from_json(bad_edge).is_err());
    }

    #[test]
    fn test_non_finite_position_rejected() {
        let json = r#"{"nodes":[
            {"id":"0","kind":"terminal","label":"0","x":1e39,"y":0},
            {"id":"1","kind":"terminal","label":"1","x":0,"y":0}
        ],"edges":[],"root":null}"#;
        let doc = Document::from_json(json).unwrap();
        assert!(doc.nodes[0].x.is_infinite());
        assert!(matches!(
            ObddGraph::from_document(&doc),
            Err(GraphError::MalformedDocument(_))
        ));

        let mut doc = sample_graph().to_document();
        doc.nodes[2].y = f32::NAN;
        assert!(ObddGraph::from_document(&doc).is_err());
    }

    #[test]
    fn test_huge_node_id_rejected_and_graph_untouched() {
        let mut graph = sample_graph();
        let before = graph.clone();

        let mut doc = graph.to_document();
        doc.nodes[3].id = u64::MAX.to_string();
        doc.edges.retain(|e| e.source != "3" && e.target != "3");

        let err = graph.load_document(&doc).unwrap_err();
        assert!(matches!(err, GraphError::MalformedDocument(_)));
        assert_eq!(graph, before);
        assert_eq!(graph.add_decision_node(), NodeId(4));
        assert_eq!(graph.node_count(), 5);
    }

    #[test]
    fn test_dangling_root_rejected() {
        let mut doc = sample_graph().to_document();
        doc.root = Some("123".to_string());
        assert!(ObddGraph::from_document(&doc).is_err());
    }

    #[test]
    fn test_import_continues_ids_and_labels() {
        let mut graph = ObddGraph::from_document(&sample_graph().to_document()).unwrap();
        let next = graph.add_decision_node();
        assert_eq!(next, NodeId(4));
        assert_eq!(graph.node(next).unwrap().label(), "r");
    }

    #[test]
    fn test_save_and_load_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("diagram.json");
        let graph = sample_graph();

        save_json(&path, &graph.to_document()).unwrap();
        let loaded = load_json(&path).unwrap();
        assert_eq!(loaded, graph.to_document());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = load_json(temp_dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
    }
}
