//! Config command implementation.
//!
//! Manages CLI configuration.

use anyhow::Result;

use crate::config::Config;

/// Show current configuration.
pub fn show(config: &Config) -> Result<()> {
    println!("OBDD Editor Configuration");
    println!("{:-<40}", "");

    println!(
        "Document:       {}",
        config
            .document
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(not set)".to_string())
    );
    println!("Dark Mode:      {}", config.dark_mode);
    println!(
        "Canvas Size:    {} x {}",
        config.canvas_width, config.canvas_height
    );

    if let Some(config_path) = Config::config_file_path() {
        println!("\nConfig file: {}", config_path.display());
    }

    Ok(())
}

/// Set a configuration value.
pub fn set(config: &mut Config, key: &str, value: &str) -> Result<()> {
    config.set(key, value)?;
    config.save()?;
    println!("✅ Set {key} to: {}", config.get(key)?);
    Ok(())
}

/// Get a configuration value.
pub fn get(config: &Config, key: &str) -> Result<()> {
    println!("{}", config.get(key)?);
    Ok(())
}

/// Reset configuration to defaults.
pub fn reset() -> Result<()> {
    let config = Config::default();
    config.save()?;
    println!("Configuration reset to defaults");
    Ok(())
}
