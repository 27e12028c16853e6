/// Swift keywords that must be backtick-escaped when used as identifiers
const RESERVED_WORDS: &[&str] = &[
    "associatedtype", "class", "deinit", "enum", "extension", "fileprivate", "func",
    "import", "init", "inout", "internal", "let", "operator", "private",
    "protocol", "public", "static", "struct", "subscript", "typealias", "var",
    "break", "case", "continue", "default", "defer", "do", "else", "fallthrough",
    "for", "guard", "if", "in", "repeat", "return", "switch", "where", "while", "is",
];

/// Name of the static constant generated for a style.
///
/// The style is lower-cased; anything that cannot appear in an identifier
/// becomes `_`.
pub fn constant_name(style: &str) -> String {
    let mut name: String = style
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if name.is_empty() {
        name.push('_');
    }
    if name.chars().next().map_or(false, |c| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    if RESERVED_WORDS.contains(&name.as_str()) {
        name = format!("`{}`", name);
    }
    name
}
