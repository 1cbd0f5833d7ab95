/* src/cli/core/src/generate.rs */

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use weft_codegen::manifest::ManifestData;
use weft_codegen::{
  generate_app, generate_client_manifest, generate_server_manifest, generate_service_worker,
  relative_posix,
};

use crate::config::WeftConfig;
use crate::files::write_if_changed;
use crate::ui::{self, DIM, RESET};

/// Run `weft generate`: read and validate the route manifest, then emit the
/// client manifest, server manifest, App template, and service-worker asset
/// list under the configured output directory.
pub fn run_generate(
  config: &WeftConfig,
  base_dir: &Path,
  manifest_path: Option<&Path>,
  dev: bool,
  port: Option<u16>,
) -> Result<()> {
  ui::banner("generate");

  let manifest_path: PathBuf = match manifest_path {
    Some(p) => p.to_path_buf(),
    None => base_dir.join(config.build.manifest.as_deref().unwrap_or("weft-manifest.json")),
  };
  let json = std::fs::read_to_string(&manifest_path)
    .with_context(|| format!("failed to read {}", manifest_path.display()))?;
  let manifest = ManifestData::from_json(&json)?;
  manifest.validate()?;
  ui::detail_ok(&format!(
    "{} pages, {} server routes, {} components",
    manifest.pages.len(),
    manifest.server_routes.len(),
    manifest.components.len()
  ));

  let out_dir = base_dir.join(&config.build.out_dir);
  let internal = out_dir.join("internal");
  // Import specifiers are relative to the generated files in {out_dir}/internal;
  // keep the anchor lexical so regeneration is location-independent.
  let path_to_routes =
    relative_posix(&Path::new(&config.build.out_dir).join("internal"), Path::new(&config.build.routes));

  let bundler = config.bundler()?;
  let dev_port = port.unwrap_or(config.dev.port);

  ui::arrow("generating artifacts");

  let client =
    generate_client_manifest(&manifest, &path_to_routes, bundler, dev, Some(dev_port));
  emit(&internal.join("manifest-client.mjs"), &client)?;

  let server = generate_server_manifest(
    &manifest,
    &path_to_routes,
    Path::new(&config.build.src),
    Path::new(&config.build.out_dir),
    dev,
  );
  emit(&internal.join("manifest-server.mjs"), &server)?;

  let app = generate_app(&manifest, &path_to_routes);
  emit(&internal.join("App.svelte"), &app)?;

  let timestamp =
    SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_millis() as u64).unwrap_or(0);
  let sw = generate_service_worker(
    &manifest,
    &config.build.shell,
    &base_dir.join(&config.build.static_dir),
    timestamp,
  )?;
  emit(&out_dir.join("service-worker.js"), &sw)?;

  ui::blank();
  ui::ok("generate complete");
  Ok(())
}

fn emit(path: &Path, content: &str) -> Result<()> {
  let wrote = write_if_changed(path, content)?;
  if wrote {
    let size = ui::format_size(content.len() as u64);
    ui::detail_ok(&format!("{}  {DIM}({size}){RESET}", path.display()));
  } else {
    ui::detail_ok(&format!("{}  {DIM}(unchanged){RESET}", path.display()));
  }
  Ok(())
}
