/* src/cli/core/src/main.rs */

mod clean;
mod config;
mod files;
mod generate;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use config::{WeftConfig, find_weft_config, load_weft_config};

#[derive(Parser)]
#[command(name = "weft", about = "Weft route-manifest codegen")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Generate the client/server manifests, App template, and service-worker asset list
  Generate {
    /// Path to weft.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Path to the route manifest JSON file
    #[arg(short, long)]
    manifest: Option<PathBuf>,
    /// Emit dev-mode artifacts (live-reload hook, dev flag)
    #[arg(long)]
    dev: bool,
    /// Dev server port for the live-reload client
    #[arg(long)]
    port: Option<u16>,
  },
  /// Remove generated output
  Clean {
    /// Path to weft.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

/// Load weft.toml from the given path or by upward discovery; the config
/// file's directory anchors every relative path in it.
fn resolve_config(path: Option<PathBuf>) -> Result<(WeftConfig, PathBuf)> {
  let config_path = match path {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to determine current directory")?;
      find_weft_config(&cwd)?
    }
  };
  let config = load_weft_config(&config_path)?;
  let base_dir = config_path.parent().unwrap_or_else(|| Path::new(".")).to_path_buf();
  Ok((config, base_dir))
}

fn run() -> Result<()> {
  let cli = Cli::parse();
  match cli.command {
    Command::Generate { config, manifest, dev, port } => {
      let (config, base_dir) = resolve_config(config)?;
      generate::run_generate(&config, &base_dir, manifest.as_deref(), dev, port)
    }
    Command::Clean { config } => {
      let (config, base_dir) = resolve_config(config)?;
      clean::run_clean(&config, &base_dir)
    }
  }
}

fn main() {
  if let Err(err) = run() {
    ui::fail(&format!("{err:#}"));
    std::process::exit(1);
  }
}
