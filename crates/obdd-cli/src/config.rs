//! CLI configuration management.
//!
//! Values come from, in increasing precedence: built-in defaults, the JSON
//! config file, then environment variables (a `.env` file is honored).

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Keys accepted by `obdd config get/set`.
pub const KEYS: &[&str] = &["document", "dark-mode", "canvas-width", "canvas-height"];

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document opened by `obdd edit` when no file is given; also the export target.
    pub document: Option<PathBuf>,

    /// Use the dark theme in the editor.
    pub dark_mode: bool,

    /// Initial canvas width in points.
    pub canvas_width: f32,

    /// Initial canvas height in points.
    pub canvas_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: None,
            dark_mode: true,
            canvas_width: 800.0,
            canvas_height: 600.0,
        }
    }
}

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config from {}", path.display()))?;
                serde_json::from_str(&contents).with_context(|| "Failed to parse config file")?
            }
            _ => Self::default(),
        };

        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Override fields from environment variables; unparsable values are ignored.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(document) = var("OBDD_DOCUMENT") {
            self.document = Some(PathBuf::from(document));
        }
        if let Some(raw) = var("OBDD_DARK_MODE") {
            match parse_bool(&raw) {
                Some(dark) => self.dark_mode = dark,
                None => warn!(value = %raw, "ignoring invalid OBDD_DARK_MODE"),
            }
        }
        if let Some(raw) = var("OBDD_CANVAS_WIDTH") {
            match parse_dimension(&raw) {
                Ok(width) => self.canvas_width = width,
                Err(_) => warn!(value = %raw, "ignoring invalid OBDD_CANVAS_WIDTH"),
            }
        }
        if let Some(raw) = var("OBDD_CANVAS_HEIGHT") {
            match parse_dimension(&raw) {
                Ok(height) => self.canvas_height = height,
                Err(_) => warn!(value = %raw, "ignoring invalid OBDD_CANVAS_HEIGHT"),
            }
        }
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        if let Some(config_path) = Self::config_file_path() {
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create config directory: {}", parent.display())
                })?;
            }
            let contents = serde_json::to_string_pretty(self)?;
            std::fs::write(&config_path, contents)
                .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        }
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "obdd-editor", "obdd")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Read a value by key.
    pub fn get(&self, key: &str) -> Result<String> {
        let value = match key {
            "document" => self
                .document
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string()),
            "dark-mode" => self.dark_mode.to_string(),
            "canvas-width" => self.canvas_width.to_string(),
            "canvas-height" => self.canvas_height.to_string(),
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {}", KEYS.join(", ")),
        };
        Ok(value)
    }

    /// Update a value by key. An empty `document` clears it.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "document" => {
                let value = value.trim();
                self.document = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "dark-mode" => {
                self.dark_mode = parse_bool(value)
                    .with_context(|| format!("Invalid boolean for dark-mode: {value}"))?;
            }
            "canvas-width" => self.canvas_width = parse_dimension(value)?,
            "canvas-height" => self.canvas_height = parse_dimension(value)?,
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {}", KEYS.join(", ")),
        }
        Ok(())
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_dimension(raw: &str) -> Result<f32> {
    let value: f32 = raw
        .trim()
        .parse()
        .with_context(|| format!("Invalid number: {raw}"))?;
    if !value.is_finite() || value < 100.0 {
        anyhow::bail!("Canvas dimension must be at least 100, got {value}");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_env_overrides() {
        let env = HashMap::from([
            ("OBDD_DOCUMENT", "diagram.json"),
            ("OBDD_DARK_MODE", "off"),
            ("OBDD_CANVAS_WIDTH", "1024"),
            ("OBDD_CANVAS_HEIGHT", "tall"),
        ]);
        let mut config = Config::default();
        config.apply_env(|name| env.get(name).map(|v| v.to_string()));

        assert_eq!(config.document, Some(PathBuf::from("diagram.json")));
        assert!(!config.dark_mode);
        assert_eq!(config.canvas_width, 1024.0);
        assert_eq!(config.canvas_height, 600.0);
    }

    #[test]
    fn test_set_and_get() {
        let mut config = Config::default();
        config.set("canvas-height", "720").unwrap();
        config.set("dark-mode", "false").unwrap();
        config.set("document", "a.json").unwrap();
        assert_eq!(config.get("canvas-height").unwrap(), "720");
        assert_eq!(config.get("dark-mode").unwrap(), "false");
        assert_eq!(config.get("document").unwrap(), "a.json");

        config.set("document", "").unwrap();
        assert_eq!(config.document, None);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = Config::default();
        assert!(config.set("canvas-width", "10").is_err());
        assert!(config.set("dark-mode", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert!(config.get("colour").is_err());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"dark_mode": false}"#).unwrap();
        assert!(!config.dark_mode);
        assert_eq!(config.canvas_width, 800.0);
    }
}
