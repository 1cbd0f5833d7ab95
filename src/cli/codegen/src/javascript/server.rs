/* src/cli/codegen/src/javascript/server.rs */

use std::collections::BTreeMap;
use std::path::Path;

use super::params::param_extractor;
use super::paths::{component_file, escape_js_string, posixify, relative_posix};
use crate::manifest::ManifestData;

/// Generate the server route manifest module. Unlike the client manifest,
/// everything is imported eagerly: the server loads once per process and
/// needs synchronous access to all handlers and components.
///
/// `src_dir` and `dest_dir` share an anchor with the caller's base directory;
/// the emitted `build_dir`/`src_dir` exports resolve them from the generated
/// file's own location at module load.
pub fn generate_server_manifest(
  manifest: &ManifestData,
  path_to_routes: &str,
  src_dir: &Path,
  dest_dir: &Path,
  dev: bool,
) -> String {
  let mut out = String::new();
  out.push_str("// Auto-generated by weft. Do not edit.\n\n");
  out.push_str("import * as path from \"node:path\";\n");
  out.push_str("import { fileURLToPath } from \"node:url\";\n\n");

  out.push_str(&format!(
    "import root from \"{}\";\n",
    escape_js_string(&component_file(&manifest.root, path_to_routes))
  ));
  out.push_str(&format!(
    "import error from \"{}\";\n",
    escape_js_string(&component_file(&manifest.error, path_to_routes))
  ));

  for (i, route) in manifest.server_routes.iter().enumerate() {
    let file = escape_js_string(&posixify(&format!("{path_to_routes}/{}", route.file)));
    out.push_str(&format!("import route_{i} from \"{file}\";\n"));
  }

  // Fresh per invocation; component names resolve to their eager import.
  let mut component_index: BTreeMap<&str, usize> = BTreeMap::new();
  for (i, component) in manifest.components.iter().enumerate() {
    component_index.insert(component.name.as_str(), i);
    out.push_str(&format!(
      "import component_{i} from \"{}\";\n",
      escape_js_string(&component_file(component, path_to_routes))
    ));
  }

  out.push_str("\nexport const manifest = {\n");

  out.push_str("  server_routes: [\n");
  let routes: Vec<String> = manifest
    .server_routes
    .iter()
    .enumerate()
    .map(|(i, route)| {
      let params = if route.params.is_empty() {
        "() => ({})".to_string()
      } else {
        param_extractor(&route.params, "decodeURIComponent")
      };
      format!(
        "    {{\n      // {}\n      pattern: /{}/,\n      handlers: route_{i},\n      params: {params}\n    }}",
        route.file, route.pattern
      )
    })
    .collect();
  out.push_str(&routes.join(",\n"));
  out.push_str("\n  ],\n\n");

  out.push_str("  pages: [\n");
  let pages: Vec<String> = manifest
    .pages
    .iter()
    .map(|page| {
      let parts: Vec<String> = page
        .parts
        .iter()
        .map(|part| match part {
          None => "null".to_string(),
          Some(part) => {
            // Part indices are checked by ManifestData::validate before
            // any generator runs.
            let component = &manifest.components[part.component];
            let import = component_index[component.name.as_str()];
            let mut entry = format!(
              "{{ name: \"{}\", file: \"{}\", component: component_{import}",
              escape_js_string(&component.name),
              escape_js_string(&component.file)
            );
            if !part.params.is_empty() {
              entry.push_str(&format!(
                ", params: {}",
                param_extractor(&part.params, "decodeURIComponent")
              ));
            }
            entry.push_str(" }");
            entry
          }
        })
        .collect();
      format!(
        "    {{\n      pattern: /{}/,\n      parts: [\n        {}\n      ]\n    }}",
        page.pattern,
        parts.join(",\n        ")
      )
    })
    .collect();
  out.push_str(&pages.join(",\n"));
  out.push_str("\n  ],\n\n");

  out.push_str("  root,\n  error\n};\n\n");

  let internal = dest_dir.join("internal");
  out.push_str("const generated_dir = path.dirname(fileURLToPath(import.meta.url));\n\n");
  out.push_str(&format!(
    "export const build_dir = path.resolve(generated_dir, \"{}\");\n",
    escape_js_string(&relative_posix(&internal, dest_dir))
  ));
  out.push_str(&format!(
    "export const src_dir = path.resolve(generated_dir, \"{}\");\n",
    escape_js_string(&relative_posix(&internal, src_dir))
  ));
  out.push_str(&format!("export const dev = {dev};\n"));

  out
}
