use std::path::{Path, PathBuf};
use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use crate::error::{Error, Result};
use crate::models::FontEntry;
use super::weight::{determine_weight, is_italic_font};

lazy_static! {
    /// Exactly two non-empty `-` separated segments; runs of `-` count as one.
    static ref FAMILY_STYLE: Regex = Regex::new(r"^-*([^-]+)-+([^-]+)-*$").unwrap();
}

/// Extensions accepted as font inputs (compared case-insensitively)
const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Check whether a path has a `ttf` or `otf` extension
pub fn is_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Split a file stem of the form `Family-Style` into its two parts
pub fn split_family_style(stem: &str) -> Option<(&str, &str)> {
    let captures = FAMILY_STYLE.captures(stem)?;
    let family = captures.get(1)?.as_str();
    let style = captures.get(2)?.as_str();
    Some((family, style))
}

/// Parse a `Family-Style.ext` path into its family name and font entry
pub fn parse_font_path(path: &Path) -> Result<(String, FontEntry)> {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| Error::InvalidFileName(path.to_path_buf()))?;
    let (family, style) =
        split_family_style(stem).ok_or_else(|| Error::InvalidFileName(path.to_path_buf()))?;

    let weight = determine_weight(style);
    let is_italic = is_italic_font(style);
    let source_path = absolute_path(path)?;

    debug!(
        "Parsed {} - Family: {}, Style: {}, Weight: {:?}, Italic: {}",
        path.display(),
        family,
        style,
        weight,
        is_italic
    );

    let entry = FontEntry::new(
        style.to_string(),
        weight,
        is_italic,
        source_path,
        stem.to_string(),
    );
    Ok((family.to_string(), entry))
}

fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_family_and_style() {
        assert_eq!(split_family_style("Roboto-Bold"), Some(("Roboto", "Bold")));
        assert_eq!(split_family_style("Roboto--Bold"), Some(("Roboto", "Bold")));
        assert_eq!(split_family_style("MyFont"), None);
        assert_eq!(split_family_style("My-Font-Extra"), None);
        assert_eq!(split_family_style("-Bold"), None);
        assert_eq!(split_family_style("Roboto-"), None);
    }

    #[test]
    fn font_extensions_are_case_insensitive() {
        assert!(is_font_extension(Path::new("a/Roboto-Bold.ttf")));
        assert!(is_font_extension(Path::new("a/Roboto-Bold.OTF")));
        assert!(!is_font_extension(Path::new("a/Roboto-Bold.woff")));
        assert!(!is_font_extension(Path::new("a/Roboto-Bold")));
    }

    #[test]
    fn parses_semibold_italic() {
        let (family, entry) = parse_font_path(Path::new("/fonts/Inter-SemiBoldItalic.otf")).unwrap();
        assert_eq!(family, "Inter");
        assert_eq!(entry.style, "SemiBoldItalic");
        assert_eq!(entry.weight, Some(600));
        assert!(entry.is_italic);
        assert_eq!(entry.sort_key(), 601);
        assert_eq!(entry.data_set_id, "Inter-SemiBoldItalic");
        assert_eq!(entry.source_path, PathBuf::from("/fonts/Inter-SemiBoldItalic.otf"));
    }

    #[test]
    fn unknown_style_is_not_an_error() {
        let (_, entry) = parse_font_path(Path::new("/fonts/Inter-Condensed.ttf")).unwrap();
        assert_eq!(entry.weight, None);
        assert_eq!(entry.sort_key(), 1000);
    }

    #[test]
    fn relative_paths_become_absolute() {
        let (_, entry) = parse_font_path(Path::new("fonts/Inter-Bold.ttf")).unwrap();
        assert!(entry.source_path.is_absolute());
        assert!(entry.source_path.ends_with("fonts/Inter-Bold.ttf"));
    }

    #[test]
    fn rejects_other_shapes() {
        assert!(matches!(
            parse_font_path(Path::new("/fonts/Inter.ttf")),
            Err(Error::InvalidFileName(_))
        ));
    }
}
