/* src/cli/codegen/src/javascript/paths.rs */

use std::path::{Component as PathComponent, Path};

use crate::manifest::Component;

/// Normalize path separators so generated import specifiers work cross-platform.
pub fn posixify(path: &str) -> String {
  path.replace('\\', "/")
}

/// Escape a string for embedding in a double-quoted JS literal.
pub fn escape_js_string(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '\\' => out.push_str("\\\\"),
      '"' => out.push_str("\\\""),
      '\n' => out.push_str("\\n"),
      _ => out.push(c),
    }
  }
  out
}

/// Import path for a component: framework defaults sit next to the generated
/// files, user components resolve through the routes tree.
pub fn component_file(component: &Component, path_to_routes: &str) -> String {
  if component.default {
    format!("./{}.svelte", component.name)
  } else {
    posixify(&format!("{path_to_routes}/{}", component.file))
  }
}

/// Lexical relative path from `from` to `to`, posix separators. Both paths
/// must share an anchor; callers join them onto the same base directory.
pub fn relative_posix(from: &Path, to: &Path) -> String {
  let from: Vec<PathComponent> = from.components().collect();
  let to: Vec<PathComponent> = to.components().collect();
  let common = from.iter().zip(to.iter()).take_while(|(a, b)| a == b).count();

  let mut parts: Vec<String> = Vec::new();
  for _ in &from[common..] {
    parts.push("..".to_string());
  }
  for component in &to[common..] {
    if let PathComponent::Normal(segment) = component {
      parts.push(segment.to_string_lossy().into_owned());
    }
  }

  if parts.is_empty() { ".".to_string() } else { parts.join("/") }
}
