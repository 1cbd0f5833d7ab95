/* src/cli/codegen/src/javascript/client.rs */

use std::collections::BTreeSet;
use std::str::FromStr;

use anyhow::bail;

use super::params::param_extractor;
use super::paths::{component_file, escape_js_string};
use crate::manifest::{ManifestData, Page, PagePart};

/// Bundler flavor; only affects the chunk-name annotation on lazy imports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bundler {
  Rollup,
  Webpack,
}

impl FromStr for Bundler {
  type Err = anyhow::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "rollup" => Ok(Self::Rollup),
      "webpack" => Ok(Self::Webpack),
      other => bail!("unknown bundler \"{other}\" (expected \"rollup\" or \"webpack\")"),
    }
  }
}

/// Fallback dev server port when none is configured.
const DEFAULT_DEV_PORT: u16 = 10000;

/// Server-only patterns the client router must not intercept: every server
/// route whose pattern is not also a page pattern, each emitted once.
fn ignored_patterns(manifest: &ManifestData) -> Vec<&str> {
  let page_patterns: BTreeSet<&str> = manifest.pages.iter().map(|p| p.pattern.as_str()).collect();
  let mut seen = BTreeSet::new();
  manifest
    .server_routes
    .iter()
    .map(|r| r.pattern.as_str())
    .filter(|p| !page_patterns.contains(p) && seen.insert(*p))
    .collect()
}

/// Source file of the innermost resolved part, used as an entry comment.
fn innermost_file<'a>(manifest: &'a ManifestData, page: &Page) -> Option<&'a str> {
  let part = page.parts.iter().rev().flatten().next()?;
  manifest.components.get(part.component).map(|c| c.file.as_str())
}

/// Per-depth entry: `null` for an inherited slot, `{ i }` for a plain part,
/// `{ i, params }` when the part decodes captures (`d` is bound by the
/// surrounding closure).
fn part_entry(part: Option<&PagePart>) -> String {
  match part {
    None => "null".to_string(),
    Some(part) if part.params.is_empty() => format!("{{ i: {} }}", part.component),
    Some(part) => {
      format!("{{ i: {}, params: {} }}", part.component, param_extractor(&part.params, "d"))
    }
  }
}

fn route_entry(manifest: &ManifestData, page: &Page) -> String {
  let mut out = String::from("  {\n");
  if let Some(file) = innermost_file(manifest, page) {
    out.push_str(&format!("    // {file}\n"));
  }
  out.push_str(&format!("    pattern: /{}/,\n", page.pattern));
  let parts: Vec<String> = page.parts.iter().map(|p| part_entry(p.as_ref())).collect();
  out.push_str(&format!("    parts: [\n      {}\n    ]\n", parts.join(",\n      ")));
  out.push_str("  }");
  out
}

/// Generate the client route manifest module: ignore list, lazy component
/// loaders, route table, and (in dev mode) the live-reload hook.
pub fn generate_client_manifest(
  manifest: &ManifestData,
  path_to_routes: &str,
  bundler: Bundler,
  dev: bool,
  dev_port: Option<u16>,
) -> String {
  let mut out = String::new();
  out.push_str("// Auto-generated by weft. Do not edit.\n\n");

  let ignore = ignored_patterns(manifest);
  if ignore.is_empty() {
    out.push_str("const ignore = [];\n\n");
  } else {
    let patterns: Vec<String> = ignore.iter().map(|p| format!("  /{p}/")).collect();
    out.push_str(&format!("const ignore = [\n{}\n];\n\n", patterns.join(",\n")));
  }

  // Lazy loader table, one entry per component in list order. The css token
  // is replaced with the bundled stylesheet name by a later build step.
  out.push_str("const components = [\n");
  let loaders: Vec<String> = manifest
    .components
    .iter()
    .map(|component| {
      let file = escape_js_string(&component_file(component, path_to_routes));
      let chunk = match bundler {
        Bundler::Webpack => format!("/* webpackChunkName: \"{}\" */ ", component.name),
        Bundler::Rollup => String::new(),
      };
      format!(
        "  {{\n    js: () => import({chunk}\"{file}\"),\n    css: \"__WEFT_CSS_PLACEHOLDER:{}__\"\n  }}",
        escape_js_string(&component.file)
      )
    })
    .collect();
  out.push_str(&loaders.join(",\n"));
  out.push_str("\n];\n\n");

  // The decoding closure is only emitted when some part actually binds
  // params; otherwise the bare array literal avoids an unused binding.
  let needs_decoder =
    manifest.pages.iter().any(|p| p.parts.iter().flatten().any(|part| !part.params.is_empty()));

  let entries: Vec<String> = manifest.pages.iter().map(|p| route_entry(manifest, p)).collect();
  if needs_decoder {
    out.push_str(&format!("const routes = (d => [\n{}\n])(decodeURIComponent);\n", entries.join(",\n\n")));
  } else {
    out.push_str(&format!("const routes = [\n{}\n];\n", entries.join(",\n\n")));
  }

  if dev {
    let port = dev_port.unwrap_or(DEFAULT_DEV_PORT);
    out.push_str("\nif (typeof window !== \"undefined\") {\n");
    out.push_str("  import(\"weft/internal/dev-client\").then(client => {\n");
    out.push_str(&format!("    client.connect({port});\n"));
    out.push_str("  });\n");
    out.push_str("}\n");
  }

  out.push_str("\nexport { ignore, components, routes };\n");
  out
}
