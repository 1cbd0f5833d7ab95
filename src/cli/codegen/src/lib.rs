/* src/cli/codegen/src/lib.rs */

mod javascript;

pub mod manifest;

pub use javascript::{
  Bundler, Level, component_file, escape_js_string, generate_app, generate_client_manifest,
  generate_server_manifest, generate_service_worker, layout_levels, posixify, relative_posix,
};
