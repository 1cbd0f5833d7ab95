/* src/cli/core/src/config.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use weft_codegen::Bundler;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Deserialize)]
pub struct WeftConfig {
  pub project: ProjectConfig,
  #[serde(default)]
  pub build: BuildSection,
  #[serde(default)]
  pub dev: DevSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
  /// Route source tree the generated import specifiers resolve into.
  #[serde(default = "default_routes_dir")]
  pub routes: String,
  #[serde(default = "default_src_dir")]
  pub src: String,
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
  #[serde(default = "default_static_dir")]
  pub static_dir: String,
  #[serde(default = "default_bundler")]
  pub bundler: String,
  /// Route manifest JSON path; defaults to weft-manifest.json next to weft.toml.
  pub manifest: Option<String>,
  /// Client bundle file names forming the offline shell.
  #[serde(default)]
  pub shell: Vec<String>,
}

impl Default for BuildSection {
  fn default() -> Self {
    Self {
      routes: default_routes_dir(),
      src: default_src_dir(),
      out_dir: default_out_dir(),
      static_dir: default_static_dir(),
      bundler: default_bundler(),
      manifest: None,
      shell: Vec::new(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DevSection {
  #[serde(default = "default_dev_port")]
  pub port: u16,
}

impl Default for DevSection {
  fn default() -> Self {
    Self { port: default_dev_port() }
  }
}

fn default_routes_dir() -> String {
  "src/routes".to_string()
}

fn default_src_dir() -> String {
  "src".to_string()
}

fn default_out_dir() -> String {
  "__weft__".to_string()
}

fn default_static_dir() -> String {
  "static".to_string()
}

fn default_bundler() -> String {
  "rollup".to_string()
}

fn default_dev_port() -> u16 {
  10000
}

impl WeftConfig {
  pub fn bundler(&self) -> Result<Bundler> {
    self.build.bundler.parse()
  }

  pub fn validate(&self) -> Result<()> {
    if self.project.name.is_empty() {
      bail!("project.name must not be empty");
    }
    self.bundler()?;
    Ok(())
  }
}

/// Walk upward from `start` to find `weft.toml`, like Cargo.toml discovery.
pub fn find_weft_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join("weft.toml");
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("weft.toml not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_weft_config(path: &Path) -> Result<WeftConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: WeftConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate()?;
  Ok(config)
}
