//! Core data model for the OBDD editor.
//!
//! This crate owns everything that does not depend on a windowing toolkit:
//!
//! - [`ObddGraph`]: the node arena, the single root and every mutation
//! - [`LabelAllocator`]: variable names for new decision nodes
//! - [`Document`]: the JSON exchange format with atomic import
//! - [`StructureReport`]: read-only acyclicity and reachability checks
//! - [`Sample`]: ready-made diagrams
//!
//! ## Example
//!
//! ```
//! use obdd_core::{EdgeKind, ObddGraph};
//!
//! let mut graph = ObddGraph::new();
//! let p = graph.add_decision_node();
//! graph.connect(p, EdgeKind::One, graph.terminal(true)).unwrap();
//! graph.connect(p, EdgeKind::Zero, graph.terminal(false)).unwrap();
//! graph.set_root(p).unwrap();
//!
//! assert_eq!(graph.edge_count(), 2);
//! assert!(graph.analyze().is_well_formed(&graph));
//! ```

mod analysis;
mod document;
mod error;
mod graph;
mod labels;
mod node;
mod samples;

pub use analysis::StructureReport;
pub use document::{load_json, save_json, Document, DocumentEdge, DocumentNode};
pub use error::{GraphError, GraphResult};
pub use graph::{
    ObddGraph, DEFAULT_DECISION_POSITION, TERMINAL_ONE_POSITION, TERMINAL_ZERO_POSITION,
};
pub use labels::{label_at, LabelAllocator};
pub use node::{terminal_label, Edge, EdgeKind, Node, NodeId, NodeKind, Outgoing, Position};
pub use samples::Sample;
