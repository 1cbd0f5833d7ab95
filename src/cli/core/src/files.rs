/* src/cli/core/src/files.rs */

use std::path::Path;

use anyhow::{Context, Result};

#[cfg(test)]
mod tests;

/// Write `content` to `path` only if it differs from what is already there.
/// Creates parent directories as needed; returns whether a write happened.
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool> {
  if let Some(parent) = path.parent() {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  if let Ok(existing) = std::fs::read_to_string(path)
    && existing == content
  {
    return Ok(false);
  }
  std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
  Ok(true)
}
