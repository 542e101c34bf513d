//! Reserved identifiers of the target language.

/// Prefix that turns a reserved word into a verbatim identifier.
pub const VERBATIM_PREFIX: char = '@';

const RESERVED: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed",
    "short", "sizeof", "stackalloc", "static", "string", "struct", "switch", "this",
    "throw", "true", "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort",
    "using", "virtual", "void", "volatile", "while",
];

pub fn is_reserved(identifier: &str) -> bool {
    RESERVED.contains(&identifier)
}

/// Escape an identifier that collides with a reserved word.
///
/// Already-escaped identifiers are returned unchanged, so escaping twice is a no-op.
pub fn escape_identifier(identifier: &str) -> String {
    if is_reserved(identifier) {
        format!("{}{}", VERBATIM_PREFIX, identifier)
    } else {
        identifier.to_string()
    }
}

/// Strip the verbatim prefix, if any.
pub fn unescape_identifier(identifier: &str) -> &str {
    identifier.strip_prefix(VERBATIM_PREFIX).unwrap_or(identifier)
}
