//! Native desktop runner for obdd-viz development.
//!
//! Run with: cargo run -p obdd-viz --example native --features native
//! Start from a sample: cargo run -p obdd-viz --example native --features native -- --sample xor

use std::path::PathBuf;

use obdd_core::{load_json, ObddGraph, Sample};
use obdd_viz::{launch, VizSettings};

fn main() -> eframe::Result<()> {
    #[cfg(debug_assertions)]
    {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};
        tracing_subscriber::registry()
            .with(fmt::layer())
            .with(
                EnvFilter::from_default_env()
                    .add_directive("obdd_viz=debug".parse().unwrap())
                    .add_directive("obdd_interaction=debug".parse().unwrap()),
            )
            .init();
    }

    let args: Vec<String> = std::env::args().collect();
    let mut settings = VizSettings::default();
    let mut graph = ObddGraph::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--sample" | "-s" => {
                let Some(name) = args.get(i + 1) else {
                    eprintln!("Error: --sample requires a name (and, xor)");
                    std::process::exit(1);
                };
                match name.parse::<Sample>().map(|s| s.build()) {
                    Ok(Ok(sample)) => graph = sample,
                    Ok(Err(e)) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                    Err(e) => {
                        eprintln!("Error: {e}");
                        std::process::exit(1);
                    }
                }
                i += 2;
            }
            "--light" => {
                settings.dark_mode = false;
                i += 1;
            }
            "--help" | "-h" => {
                println!("OBDD Viz - Native Development Runner");
                println!();
                println!("Usage: native [OPTIONS] [FILE]");
                println!();
                println!("Options:");
                println!("  --sample, -s <NAME>  Start from a sample diagram (and, xor)");
                println!("  --light              Use the light theme");
                println!("  --help, -h           Show this help message");
                println!();
                println!("Keyboard Shortcuts:");
                for shortcut in obdd_interaction::SHORTCUTS {
                    println!("  {:<10}  {}", shortcut.keys, shortcut.description);
                }
                return Ok(());
            }
            path => {
                match load_json(path).and_then(|doc| ObddGraph::from_document(&doc)) {
                    Ok(loaded) => graph = loaded,
                    Err(e) => {
                        eprintln!("Error: {path}: {e}");
                        std::process::exit(1);
                    }
                }
                settings.document_path = PathBuf::from(path);
                i += 1;
            }
        }
    }

    launch(graph, settings, "OBDD Editor - Development")
}
