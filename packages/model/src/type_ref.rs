//! Helpers for textual type references such as `Repository<int, List<string>>`.

use std::collections::HashMap;

const ROOT_TYPES: &[&str] = &["object", "Object", "System.Object"];

/// Whether the reference names the universal root type.
pub fn is_root_type(type_ref: &str) -> bool {
    ROOT_TYPES.contains(&type_ref.trim())
}

/// Split a reference into its generic name and top-level type arguments.
pub fn parse_type_ref(type_ref: &str) -> (String, Vec<String>) {
    let type_ref = type_ref.trim();
    let Some(open) = type_ref.find('<') else {
        return (type_ref.to_string(), Vec::new());
    };
    if !type_ref.ends_with('>') {
        return (type_ref.to_string(), Vec::new());
    }

    let name = type_ref[..open].trim().to_string();
    let inner = &type_ref[open + 1..type_ref.len() - 1];

    let mut arguments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in inner.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                arguments.push(inner[start..index].trim().to_string());
                start = index + 1;
            }
            _ => {}
        }
    }
    let last = inner[start..].trim();
    if !last.is_empty() {
        arguments.push(last.to_string());
    }

    (name, arguments)
}

/// Replace whole identifiers that name type parameters with their closed arguments.
pub fn substitute_type_parameters(type_ref: &str, bindings: &HashMap<String, String>) -> String {
    if bindings.is_empty() {
        return type_ref.to_string();
    }

    let mut output = String::with_capacity(type_ref.len());
    let mut identifier = String::new();

    let flush = |identifier: &mut String, output: &mut String| {
        if !identifier.is_empty() {
            match bindings.get(identifier.as_str()) {
                Some(bound) => output.push_str(bound),
                None => output.push_str(identifier),
            }
            identifier.clear();
        }
    };

    for ch in type_ref.chars() {
        if ch.is_alphanumeric() || ch == '_' || ch == '.' {
            identifier.push(ch);
        } else {
            flush(&mut identifier, &mut output);
            output.push(ch);
        }
    }
    flush(&mut identifier, &mut output);

    output
}
