//! Write a built-in sample diagram.

use std::path::Path;

use anyhow::{Context, Result};
use obdd_core::{save_json, Sample};

/// Build a sample and write it to `output`, or to stdout when no path is given.
pub fn execute(sample: Sample, output: Option<&Path>) -> Result<()> {
    let graph = sample
        .build()
        .with_context(|| format!("Failed to build sample {sample}"))?;
    let document = graph.to_document();

    match output {
        Some(path) => {
            save_json(path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "✅ Wrote {} ({}) to {}",
                sample,
                sample.description(),
                path.display()
            );
        }
        None => println!("{}", document.to_json()?),
    }

    Ok(())
}
