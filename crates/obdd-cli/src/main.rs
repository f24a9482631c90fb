//! OBDD CLI - edit, inspect and validate ordered binary decision diagrams.
//!
//! Running `obdd` with no command opens the editor on the configured document.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use obdd_core::Sample;
use tracing::Level;

mod commands;
mod config;

use commands::config as config_cmd;
use config::Config;

/// OBDD CLI - Draw and check binary decision diagrams.
#[derive(Parser, Debug)]
#[command(
    name = "obdd",
    author,
    version,
    about = "OBDD: Draw, inspect and check binary decision diagrams",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the editor window (default command).
    ///
    /// Requires the `native-viz` feature.
    Edit {
        /// Document to open; created on export if missing.
        file: Option<PathBuf>,
    },

    /// Validate a document and report structural problems.
    Check {
        /// Document to check.
        file: PathBuf,
    },

    /// Print the nodes and edges of a document.
    Show {
        /// Document to print.
        file: PathBuf,
    },

    /// Write a built-in sample diagram (and, xor).
    Sample {
        /// Sample name.
        name: Sample,

        /// Output file (prints JSON to stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage CLI configuration.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Configuration subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration.
    Show,

    /// Set a configuration value.
    Set {
        /// Configuration key (document, dark-mode, canvas-width, canvas-height).
        key: String,
        /// Value to set.
        value: String,
    },

    /// Get a configuration value.
    Get {
        /// Configuration key.
        key: String,
    },

    /// Reset configuration to defaults.
    Reset,

    /// Show config file path.
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = Config::load()?;

    let command = cli.command.unwrap_or(Commands::Edit { file: None });

    match command {
        Commands::Edit { file } => commands::edit::execute(&config, file)?,

        Commands::Check { file } => commands::check::execute(&file)?,

        Commands::Show { file } => commands::show::execute(&file)?,

        Commands::Sample { name, output } => commands::sample::execute(name, output.as_deref())?,

        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => config_cmd::show(&config)?,
            ConfigCommands::Set { key, value } => config_cmd::set(&mut config, &key, &value)?,
            ConfigCommands::Get { key } => config_cmd::get(&config, &key)?,
            ConfigCommands::Reset => config_cmd::reset()?,
            ConfigCommands::Path => match Config::config_file_path() {
                Some(path) => println!("{}", path.display()),
                None => println!("Could not determine config path"),
            },
        },
    }

    Ok(())
}
