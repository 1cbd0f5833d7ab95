/* src/cli/codegen/src/manifest.rs */

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
  #[default]
  Page,
  Layout,
  Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
  pub name: String,
  /// Source file path, relative to the routes directory.
  pub file: String,
  #[serde(default)]
  pub kind: ComponentKind,
  /// Framework-provided fallback, materialized next to the generated files.
  #[serde(default)]
  pub default: bool,
}

/// One layout slot of a page. `component` indexes `ManifestData::components`;
/// a param name prefixed with `...` captures the trailing path as segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagePart {
  pub component: usize,
  #[serde(default)]
  pub params: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
  /// JS regex body, without the surrounding slashes.
  pub pattern: String,
  /// One slot per layout depth, innermost last; `None` inherits the parent layout.
  pub parts: Vec<Option<PagePart>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerRoute {
  pub name: String,
  pub pattern: String,
  /// Handler module path, relative to the routes directory.
  pub file: String,
  #[serde(default)]
  pub params: Vec<String>,
}

/// Root aggregate handed to every generator, produced once per build by the
/// route scanner and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestData {
  pub root: Component,
  pub error: Component,
  #[serde(default)]
  pub components: Vec<Component>,
  #[serde(default)]
  pub pages: Vec<Page>,
  #[serde(rename = "serverRoutes", default)]
  pub server_routes: Vec<ServerRoute>,
}

/// Count capture groups of a pattern. Patterns with JS-only syntax that the
/// regex crate rejects are skipped rather than failing validation; they are
/// passed through to the generated source verbatim either way.
fn capture_count(pattern: &str) -> Option<usize> {
  Regex::new(pattern).ok().map(|re| re.captures_len() - 1)
}

impl ManifestData {
  pub fn from_json(json: &str) -> Result<Self> {
    serde_json::from_str(json).context("failed to parse route manifest JSON")
  }

  /// Check part indices and pattern capture counts before any codegen runs.
  /// Collects all problems and reports them together.
  pub fn validate(&self) -> Result<()> {
    let mut errors = Vec::new();

    for page in &self.pages {
      for part in page.parts.iter().flatten() {
        if part.component >= self.components.len() {
          errors.push(format!(
            "  page /{}/ references component index {} but only {} components exist",
            page.pattern,
            part.component,
            self.components.len()
          ));
        }
        if !part.params.is_empty()
          && let Some(captures) = capture_count(&page.pattern)
          && captures != part.params.len()
        {
          errors.push(format!(
            "  page /{}/ declares {} params but its pattern has {captures} capture groups",
            page.pattern,
            part.params.len()
          ));
        }
      }
    }

    for route in &self.server_routes {
      if let Some(captures) = capture_count(&route.pattern)
        && captures != route.params.len()
      {
        errors.push(format!(
          "  server route \"{}\" declares {} params but its pattern /{}/ has {captures} capture groups",
          route.name,
          route.params.len(),
          route.pattern
        ));
      }
    }

    if errors.is_empty() {
      return Ok(());
    }

    bail!("invalid route manifest\n\n{}", errors.join("\n"));
  }
}
