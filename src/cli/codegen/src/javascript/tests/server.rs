/* src/cli/codegen/src/javascript/tests/server.rs */

use std::path::Path;

use super::super::generate_server_manifest;
use super::{blog_manifest, minimal_manifest};

const ROUTES: &str = "../../src/routes";

fn generate(manifest: &crate::manifest::ManifestData, dev: bool) -> String {
  generate_server_manifest(manifest, ROUTES, Path::new("src"), Path::new("__weft__"), dev)
}

#[test]
fn everything_is_imported_eagerly() {
  let out = generate(&blog_manifest(), false);
  assert!(out.contains("import root from \"./_layout.svelte\";"));
  assert!(out.contains("import error from \"./_error.svelte\";"));
  assert!(out.contains("import route_0 from \"../../src/routes/api/posts.json.js\";"));
  assert!(out.contains("import component_0 from \"../../src/routes/index.svelte\";"));
  assert!(out.contains("import component_2 from \"../../src/routes/blog/[slug].svelte\";"));
}

#[test]
fn paramless_server_route_gets_noop_extractor() {
  let out = generate(&blog_manifest(), false);
  assert!(out.contains("handlers: route_0"));
  assert!(out.contains("params: () => ({})"));
}

#[test]
fn parts_reference_eager_imports_by_name() {
  let out = generate(&blog_manifest(), false);
  assert!(out.contains("{ name: \"index\", file: \"index.svelte\", component: component_0 }"));
  assert!(out.contains(
    "{ name: \"blog_$slug\", file: \"blog/[slug].svelte\", component: component_2, params: match => ({ slug: decodeURIComponent(match[1]) }) }"
  ));
}

#[test]
fn build_metadata_resolves_at_module_load() {
  let out = generate(&minimal_manifest(), false);
  assert!(out.contains("const generated_dir = path.dirname(fileURLToPath(import.meta.url));"));
  assert!(out.contains("export const build_dir = path.resolve(generated_dir, \"..\");"));
  assert!(out.contains("export const src_dir = path.resolve(generated_dir, \"../../src\");"));
}

#[test]
fn dev_flag_is_a_literal() {
  assert!(generate(&minimal_manifest(), true).contains("export const dev = true;"));
  assert!(generate(&minimal_manifest(), false).contains("export const dev = false;"));
}

#[test]
fn inherited_slots_stay_null() {
  let out = generate(&blog_manifest(), false);
  assert!(out.contains("parts: [\n        null,\n        { name: \"blog_$slug\""));
}
