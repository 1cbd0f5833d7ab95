/* src/cli/codegen/src/javascript/app.rs */

use super::paths::{component_file, escape_js_string};
use crate::manifest::ManifestData;

/// One nesting level of the layout pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
  pub depth: usize,
  /// Rendered inside `{#if level<depth>}`; pages shallower than this depth
  /// leave the slot unpopulated.
  pub conditional: bool,
  /// Passes a positional segment down to its child level.
  pub has_segment: bool,
}

/// Build the level tree: one entry per layout depth across all pages,
/// minimum one so a manifest with only the root layout still renders.
pub fn layout_levels(manifest: &ManifestData) -> Vec<Level> {
  let max_depth =
    manifest.pages.iter().map(|p| p.parts.iter().flatten().count()).max().unwrap_or(0).max(1);
  (1..=max_depth)
    .map(|depth| Level { depth, conditional: depth > 1, has_segment: depth < max_depth })
    .collect()
}

/// Recursive-descent printer for the level tree. The innermost level is a
/// bare component reference; every enclosing level wraps its child in the
/// child's presence conditional.
fn render_pyramid(levels: &[Level], indent: &str) -> String {
  let Some((level, rest)) = levels.split_first() else {
    return String::new();
  };
  let d = level.depth;

  if rest.is_empty() {
    return format!("{indent}<svelte:component this={{level{d}.component}} {{...level{d}.props}}/>\n");
  }

  let mut out = String::new();
  out.push_str(&format!(
    "{indent}<svelte:component this={{level{d}.component}} segment={{segments[{d}]}} {{...level{d}.props}}>\n"
  ));
  let inner = format!("{indent}  ");
  if rest[0].conditional {
    out.push_str(&format!("{inner}{{#if level{}}}\n", rest[0].depth));
    out.push_str(&render_pyramid(rest, &format!("{inner}  ")));
    out.push_str(&format!("{inner}{{/if}}\n"));
  } else {
    out.push_str(&render_pyramid(rest, &inner));
  }
  out.push_str(&format!("{indent}</svelte:component>\n"));
  out
}

/// Generate the App template: the root layout unconditionally wraps either
/// the error view or the layout pyramid.
pub fn generate_app(manifest: &ManifestData, path_to_routes: &str) -> String {
  let levels = layout_levels(manifest);

  let mut out = String::new();
  out.push_str("<!-- Auto-generated by weft. Do not edit. -->\n");
  out.push_str("<script>\n");
  out.push_str(&format!(
    "  import Root from \"{}\";\n",
    escape_js_string(&component_file(&manifest.root, path_to_routes))
  ));
  out.push_str(&format!(
    "  import ErrorPage from \"{}\";\n\n",
    escape_js_string(&component_file(&manifest.error, path_to_routes))
  ));
  out.push_str("  export let status;\n");
  out.push_str("  export let error;\n");
  out.push_str("  export let segments;\n");
  out.push_str("  export let level0;\n");
  for level in &levels {
    out.push_str(&format!("  export let level{} = null;\n", level.depth));
  }
  out.push_str("</script>\n\n");

  out.push_str("<Root segment={segments[0]} {...level0.props}>\n");
  out.push_str("  {#if error}\n");
  out.push_str("    <ErrorPage {error} {status}/>\n");
  out.push_str("  {:else}\n");
  out.push_str(&render_pyramid(&levels, "    "));
  out.push_str("  {/if}\n");
  out.push_str("</Root>\n");
  out
}
