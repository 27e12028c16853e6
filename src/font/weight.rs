/// Determine the canonical weight value from a style label.
///
/// "italic" is stripped before lookup, so "BoldItalic" is 700 and a bare
/// "Italic" is 400. The "italics" spelling leaves a trailing `s` behind and
/// gets no weight. Unknown labels yield `None`.
pub fn determine_weight(style: &str) -> Option<u16> {
    let style_lower = style.to_lowercase();
    let stripped = style_lower.replace("italic", "").replace("italics", "");

    match stripped.as_str() {
        "thin" => Some(100),
        "extralight" | "ultralight" => Some(200),
        "light" => Some(300),
        "normal" | "regular" | "" => Some(400),
        "medium" => Some(500),
        "semibold" | "demibold" => Some(600),
        "bold" => Some(700),
        "extrabold" | "ultrabold" => Some(800),
        "black" | "heavy" => Some(900),
        _ => None,
    }
}

/// Check if a style label names an italic font
pub fn is_italic_font(style: &str) -> bool {
    style.to_lowercase().contains("italic")
}
