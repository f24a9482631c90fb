//! Validate a document file.

use std::path::Path;

use anyhow::{Context, Result};
use obdd_core::{load_json, ObddGraph};

/// Load and validate a document, then print its structural report.
///
/// Malformed documents are errors; structural gaps are warnings.
pub fn execute(path: &Path) -> Result<()> {
    let document =
        load_json(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let graph = ObddGraph::from_document(&document)
        .with_context(|| format!("Invalid document: {}", path.display()))?;

    println!(
        "✅ {}: {} nodes ({} decision), {} edges",
        path.display(),
        graph.node_count(),
        graph.decision_count(),
        graph.edge_count()
    );

    let label = |id| graph.node(id).map_or("?", |n| n.label());
    let report = graph.analyze();

    match graph.root() {
        Some(root) => println!("   Root: {}", label(root)),
        None => println!("⚠️  No root set"),
    }
    if !report.acyclic {
        println!("⚠️  Diagram contains a cycle");
    }
    for id in &report.incomplete {
        println!("⚠️  Node {} is missing an edge", label(*id));
    }
    for id in &report.unreachable {
        println!("⚠️  Node {} is unreachable from the root", label(*id));
    }
    if report.is_well_formed(&graph) && report.unreachable.is_empty() {
        println!("   Well formed");
    }

    Ok(())
}
