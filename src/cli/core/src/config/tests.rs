/* src/cli/core/src/config/tests.rs */

use super::*;

#[test]
fn parse_minimal_config() {
  let toml_str = r#"
[project]
name = "my-app"
"#;
  let config: WeftConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.project.name, "my-app");
  assert_eq!(config.build.routes, "src/routes");
  assert_eq!(config.build.out_dir, "__weft__");
  assert_eq!(config.build.static_dir, "static");
  assert_eq!(config.build.bundler, "rollup");
  assert!(config.build.manifest.is_none());
  assert!(config.build.shell.is_empty());
  assert_eq!(config.dev.port, 10000);
  config.validate().unwrap();
}

#[test]
fn parse_full_config() {
  let toml_str = r#"
[project]
name = "blog"

[build]
routes = "app/routes"
src = "app"
out_dir = ".weft"
static_dir = "public"
bundler = "webpack"
manifest = ".weft/weft-manifest.json"
shell = ["main.abc123.js"]

[dev]
port = 10001
"#;
  let config: WeftConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.build.routes, "app/routes");
  assert_eq!(config.build.manifest.as_deref(), Some(".weft/weft-manifest.json"));
  assert_eq!(config.build.shell, vec!["main.abc123.js".to_string()]);
  assert_eq!(config.dev.port, 10001);
  config.validate().unwrap();
}

#[test]
fn unknown_bundler_is_rejected() {
  let toml_str = r#"
[project]
name = "my-app"

[build]
bundler = "parcel"
"#;
  let config: WeftConfig = toml::from_str(toml_str).unwrap();
  let err = config.validate().unwrap_err();
  assert!(err.to_string().contains("unknown bundler"));
}

#[test]
fn find_config_walks_upward() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join("weft.toml"), "[project]\nname = \"up\"\n").unwrap();
  let nested = tmp.path().join("src/routes/blog");
  std::fs::create_dir_all(&nested).unwrap();
  let found = find_weft_config(&nested).unwrap();
  assert!(found.ends_with("weft.toml"));
  let config = load_weft_config(&found).unwrap();
  assert_eq!(config.project.name, "up");
}

#[test]
fn find_config_fails_outside_a_project() {
  let tmp = tempfile::tempdir().unwrap();
  let err = find_weft_config(tmp.path()).unwrap_err();
  assert!(err.to_string().contains("weft.toml not found"));
}
