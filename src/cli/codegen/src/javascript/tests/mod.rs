/* src/cli/codegen/src/javascript/tests/mod.rs */

mod server;

use crate::manifest::{Component, ComponentKind, ManifestData, Page, PagePart, ServerRoute};

fn component(name: &str, file: &str) -> Component {
  Component {
    name: name.to_string(),
    file: file.to_string(),
    kind: ComponentKind::Page,
    default: false,
  }
}

fn default_component(name: &str, kind: ComponentKind) -> Component {
  Component {
    name: name.to_string(),
    file: format!("{name}.svelte"),
    kind,
    default: true,
  }
}

fn page(pattern: &str, parts: Vec<Option<PagePart>>) -> Page {
  Page { pattern: pattern.to_string(), parts }
}

fn part(component: usize, params: &[&str]) -> Option<PagePart> {
  Some(PagePart { component, params: params.iter().map(|p| (*p).to_string()).collect() })
}

fn server_route(name: &str, pattern: &str, file: &str, params: &[&str]) -> ServerRoute {
  ServerRoute {
    name: name.to_string(),
    pattern: pattern.to_string(),
    file: file.to_string(),
    params: params.iter().map(|p| (*p).to_string()).collect(),
  }
}

/// Single root layout, one `/` page with one paramless part, default error.
fn minimal_manifest() -> ManifestData {
  ManifestData {
    root: default_component("_layout", ComponentKind::Layout),
    error: default_component("_error", ComponentKind::Error),
    components: vec![component("index", "index.svelte")],
    pages: vec![page("^\\/$", vec![part(0, &[])])],
    server_routes: vec![],
  }
}

/// Blog-style manifest: nested layout, dynamic segment, one API route.
fn blog_manifest() -> ManifestData {
  ManifestData {
    root: default_component("_layout", ComponentKind::Layout),
    error: default_component("_error", ComponentKind::Error),
    components: vec![
      component("index", "index.svelte"),
      component("blog", "blog/index.svelte"),
      component("blog_$slug", "blog/[slug].svelte"),
    ],
    pages: vec![
      page("^\\/$", vec![part(0, &[])]),
      page("^\\/blog\\/?$", vec![part(1, &[])]),
      page("^\\/blog\\/([^/]+?)\\/?$", vec![None, part(2, &["slug"])]),
    ],
    server_routes: vec![server_route(
      "api_posts",
      "^\\/api\\/posts\\.json$",
      "api/posts.json.js",
      &[],
    )],
  }
}
