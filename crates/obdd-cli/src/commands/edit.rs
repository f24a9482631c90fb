//! Native editor command.
//!
//! Launches a desktop window for a document.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;

/// Resolve which document to open: the argument, then the configured default.
pub fn document_path(config: &Config, file: Option<PathBuf>) -> Option<PathBuf> {
    file.or_else(|| config.document.clone())
}

/// Execute the edit command.
#[cfg(feature = "native-viz")]
pub fn execute(config: &Config, file: Option<PathBuf>) -> Result<()> {
    use anyhow::Context;
    use obdd_core::{load_json, ObddGraph};
    use obdd_viz::VizSettings;

    let path = document_path(config, file);

    let graph = match &path {
        Some(path) if path.exists() => {
            println!("📊 Loading {}", path.display());
            let document =
                load_json(path).with_context(|| format!("Failed to load {}", path.display()))?;
            ObddGraph::from_document(&document)
                .with_context(|| format!("Invalid document: {}", path.display()))?
        }
        Some(path) => {
            println!("📄 New diagram, export will write {}", path.display());
            ObddGraph::new()
        }
        None => ObddGraph::new(),
    };

    let mut settings = VizSettings {
        dark_mode: config.dark_mode,
        canvas_width: config.canvas_width,
        canvas_height: config.canvas_height,
        ..VizSettings::default()
    };
    if let Some(path) = &path {
        settings.document_path = path.clone();
    }

    let title = match &path {
        Some(path) => format!("OBDD Editor - {}", path.display()),
        None => "OBDD Editor".to_string(),
    };

    println!("🖼️  Launching editor...");
    obdd_viz::launch(graph, settings, &title)
        .map_err(|e| anyhow::anyhow!("Editor error: {}", e))?;

    Ok(())
}

/// Execute the edit command.
#[cfg(not(feature = "native-viz"))]
pub fn execute(config: &Config, file: Option<PathBuf>) -> Result<()> {
    let path = document_path(config, file);
    tracing::debug!(?path, "edit requested without native-viz");
    anyhow::bail!(
        "The editor window requires the `native-viz` feature. Rebuild with: cargo build --features native-viz"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_wins_over_config() {
        let config = Config {
            document: Some(PathBuf::from("configured.json")),
            ..Config::default()
        };
        assert_eq!(
            document_path(&config, Some(PathBuf::from("arg.json"))),
            Some(PathBuf::from("arg.json"))
        );
        assert_eq!(
            document_path(&config, None),
            Some(PathBuf::from("configured.json"))
        );
        assert_eq!(document_path(&Config::default(), None), None);
    }
}
