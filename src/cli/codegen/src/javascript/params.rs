/* src/cli/codegen/src/javascript/params.rs */

/// Marker prefix for variadic trailing path parameters.
const REST_PREFIX: &str = "...";

/// Binding expression for one captured parameter. Rest parameters decode the
/// capture and split it on the path separator; the prefix is stripped from
/// the bound name.
fn param_binding(name: &str, index: usize, decoder: &str) -> String {
  let group = index + 1;
  match name.strip_prefix(REST_PREFIX) {
    Some(rest) => format!("{rest}: {decoder}(match[{group}]).split('/')"),
    None => format!("{name}: {decoder}(match[{group}])"),
  }
}

/// Build a `match => ({ ... })` extractor covering every declared parameter,
/// in capture-group order.
pub(super) fn param_extractor(params: &[String], decoder: &str) -> String {
  let bindings: Vec<String> =
    params.iter().enumerate().map(|(i, name)| param_binding(name, i, decoder)).collect();
  format!("match => ({{ {} }})", bindings.join(", "))
}
