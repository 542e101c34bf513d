//! Parameter names derived from field-style reference names.

use mixin_model::escape_identifier;
use mixin_model::keywords::unescape_identifier;

/// Call-site parameter name for a reference called `field`.
///
/// `_name` and `m_name` lose their prefix, a single lowercase marker letter in
/// front of an uppercase letter is dropped (`mName` -> `name`), anything else
/// gets an underscore prefix. Reserved results are escaped.
pub fn parameter_name(field: &str) -> String {
    let field = unescape_identifier(field);

    let stripped = strip_prefix_marker(field).or_else(|| strip_hungarian_marker(field));
    let name = stripped.unwrap_or_else(|| format!("_{}", field));

    escape_identifier(&name)
}

fn strip_prefix_marker(field: &str) -> Option<String> {
    ["m_", "_"]
        .iter()
        .find_map(|prefix| field.strip_prefix(prefix))
        .filter(|rest| !rest.is_empty() && !rest.starts_with('_'))
        .map(str::to_string)
}

fn strip_hungarian_marker(field: &str) -> Option<String> {
    let mut chars = field.chars();
    let marker = chars.next()?;
    let first = chars.next()?;
    if !marker.is_ascii_lowercase() || !first.is_uppercase() {
        return None;
    }

    let mut name: String = first.to_lowercase().collect();
    name.push_str(chars.as_str());
    Some(name)
}
