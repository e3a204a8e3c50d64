//! Flowlayout CLI - check and lay out YAML scenes.

#![allow(clippy::needless_pass_by_value, clippy::uninlined_format_args)]

mod report;

use clap::{Parser, Subcommand, ValueEnum};
use flowlayout_yaml::{ParseError, Scene};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::report::LayoutReport;

#[derive(Parser)]
#[command(name = "flowlayout")]
#[command(about = "Measure and lay out wrapping flow containers")]
#[command(version)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check scene validity
    Check {
        /// Path to scene file
        #[arg(default_value = "scene.yaml")]
        scene: PathBuf,
    },

    /// Run a measure + layout pass and print the result
    Layout {
        /// Path to scene file
        #[arg(default_value = "scene.yaml")]
        scene: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Errors surfaced to the user.
#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("scene invalid: {0}")]
    Scene(#[from] ParseError),

    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_scene(path: &Path) -> Result<Scene, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!("loaded scene from {}", path.display());
    Ok(Scene::from_yaml(&content)?)
}

fn check_scene(path: &Path) -> Result<(), CliError> {
    let scene = load_scene(path)?;
    let hidden = scene
        .children
        .iter()
        .filter(|c| c.visibility.is_gone())
        .count();
    println!("Scene valid: {}", path.display());
    println!("  Children: {} ({} gone)", scene.children.len(), hidden);
    println!("  Constraints: {:?}", scene.constraints()?);
    Ok(())
}

fn layout_scene(path: &Path, format: Format) -> Result<(), CliError> {
    let scene = load_scene(path)?;
    let report = LayoutReport::run(&scene)?;
    match format {
        Format::Text => print!("{}", report.to_text()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check { scene } => check_scene(&scene),
        Commands::Layout { scene, format } => layout_scene(&scene, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
