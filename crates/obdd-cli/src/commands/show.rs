//! Print the structure of a document.

use std::path::Path;

use anyhow::{Context, Result};
use obdd_core::{load_json, EdgeKind, ObddGraph};

/// Print the root and each node with its outgoing edges.
pub fn execute(path: &Path) -> Result<()> {
    let document =
        load_json(path).with_context(|| format!("Failed to load {}", path.display()))?;
    let graph = ObddGraph::from_document(&document)
        .with_context(|| format!("Invalid document: {}", path.display()))?;

    let label = |id| graph.node(id).map_or("?", |n| n.label());

    println!("📊 OBDD: {}", path.display());
    println!("{:─<50}", "");
    match graph.root() {
        Some(root) => println!("Root: {} [{}]", label(root), root),
        None => println!("Root: (none)"),
    }
    println!();

    for node in graph.nodes().filter(|n| !n.is_terminal()) {
        println!(
            "● {} [{}] at ({:.0}, {:.0})",
            node.label(),
            node.id(),
            node.position.x,
            node.position.y
        );
        for kind in EdgeKind::ALL {
            let target = graph
                .target(node.id(), kind)
                .map_or("(unconnected)", label);
            println!("   {} → {}", kind.symbol(), target);
        }
    }

    for value in [false, true] {
        let id = graph.terminal(value);
        println!("■ {} [{}]", label(id), id);
    }

    Ok(())
}
