/* src/cli/core/src/clean.rs */

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::WeftConfig;
use crate::ui;

/// Run `weft clean`: remove the generated output directory.
pub fn run_clean(config: &WeftConfig, base_dir: &Path) -> Result<()> {
  ui::banner("clean");

  let out_dir = base_dir.join(&config.build.out_dir);
  if out_dir.exists() {
    std::fs::remove_dir_all(&out_dir)
      .with_context(|| format!("failed to remove {}", out_dir.display()))?;
    ui::detail_ok(&format!("removed {}", out_dir.display()));
  } else {
    ui::detail(&format!("nothing to remove at {}", out_dir.display()));
  }

  ui::blank();
  ui::ok("clean complete");
  Ok(())
}
