/* src/cli/core/src/files/tests.rs */

use super::*;

#[test]
fn writes_new_file_and_parents() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("internal/manifest-client.mjs");
  assert!(write_if_changed(&path, "a").unwrap());
  assert_eq!(std::fs::read_to_string(&path).unwrap(), "a");
}

#[test]
fn identical_content_skips_the_write() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join("out.js");
  assert!(write_if_changed(&path, "same").unwrap());
  assert!(!write_if_changed(&path, "same").unwrap());
  assert!(write_if_changed(&path, "different").unwrap());
  assert_eq!(std::fs::read_to_string(&path).unwrap(), "different");
}
