/* src/cli/codegen/src/javascript/service_worker.rs */

use std::path::Path;

use anyhow::{Context, Result, bail};

use super::paths::{escape_js_string, posixify};
use crate::manifest::ManifestData;

/// Offline fallback page, always first in the cached file list.
const SEED_FILE: &str = "/service-worker-index.html";

/// Directory name used for static assets before the current layout.
const LEGACY_STATIC_DIR: &str = "assets";

/// Recursive listing of files under the walk root, as root-relative paths.
fn walk(root: &Path, prefix: &Path, out: &mut Vec<String>) -> Result<()> {
  let dir = root.join(prefix);
  let entries =
    std::fs::read_dir(&dir).with_context(|| format!("failed to read {}", dir.display()))?;
  for entry in entries {
    let entry = entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
    let file_type =
      entry.file_type().with_context(|| format!("failed to stat entry in {}", dir.display()))?;
    let rel = prefix.join(entry.file_name());
    if file_type.is_dir() {
      walk(root, &rel, out)?;
    } else {
      out.push(rel.to_string_lossy().into_owned());
    }
  }
  Ok(())
}

fn string_array(name: &str, values: &[String]) -> String {
  if values.is_empty() {
    return format!("export const {name} = [];\n");
  }
  let quoted: Vec<String> = values.iter().map(|v| format!("  \"{}\"", escape_js_string(v))).collect();
  format!("export const {name} = [\n{}\n];\n", quoted.join(",\n"))
}

/// Generate the service-worker asset manifest: cache timestamp, static file
/// list (seeded with the offline fallback), client shell, and the page
/// patterns a worker may serve from cache.
///
/// The timestamp is an input so output stays a pure function of its
/// arguments; callers sample the clock once per build.
pub fn generate_service_worker(
  manifest: &ManifestData,
  bundle_files: &[String],
  static_dir: &Path,
  timestamp_ms: u64,
) -> Result<String> {
  let mut files = vec![SEED_FILE.to_string()];

  if static_dir.is_dir() {
    let mut found = Vec::new();
    walk(static_dir, Path::new(""), &mut found)?;
    found.sort();
    files.extend(found.into_iter().map(|f| format!("/{}", posixify(&f))));
  } else {
    let legacy = static_dir.parent().unwrap_or_else(|| Path::new("")).join(LEGACY_STATIC_DIR);
    if legacy.is_dir() {
      bail!(
        "found a legacy \"{}\" directory but no \"{}\" \u{2014} this layout is no longer supported; rename \"{}\" to \"{}\"",
        legacy.display(),
        static_dir.display(),
        legacy.display(),
        static_dir.display()
      );
    }
  }

  let shell: Vec<String> = bundle_files.iter().map(|f| format!("/client/{}", posixify(f))).collect();

  let mut out = String::new();
  out.push_str("// Auto-generated by weft. Do not edit.\n\n");
  out.push_str(&format!("export const timestamp = {timestamp_ms};\n\n"));
  out.push_str(&string_array("files", &files));
  out.push('\n');
  out.push_str("// Legacy alias kept for older service workers.\n");
  out.push_str("export { files as assets };\n\n");
  out.push_str(&string_array("shell", &shell));
  out.push('\n');

  if manifest.pages.is_empty() {
    out.push_str("export const routes = [];\n");
  } else {
    let patterns: Vec<String> =
      manifest.pages.iter().map(|p| format!("  {{ pattern: /{}/ }}", p.pattern)).collect();
    out.push_str(&format!("export const routes = [\n{}\n];\n", patterns.join(",\n")));
  }

  Ok(out)
}
