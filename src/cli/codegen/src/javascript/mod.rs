/* src/cli/codegen/src/javascript/mod.rs */

mod app;
mod client;
mod params;
mod paths;
mod server;
mod service_worker;

#[cfg(test)]
mod tests;

pub use app::{Level, generate_app, layout_levels};
pub use client::{Bundler, generate_client_manifest};
pub use paths::{component_file, escape_js_string, posixify, relative_posix};
pub use server::generate_server_manifest;
pub use service_worker::generate_service_worker;
