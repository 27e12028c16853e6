//! Text renderers for the generated package artifacts.
//!
//! Every renderer is a pure function of a [`FontFamily`](crate::models::FontFamily)
//! (plus run configuration for the manifest); nothing here touches the
//! filesystem.

pub mod accessor;
pub mod catalog;
pub mod extensions;
pub mod manifest;
pub mod registration;

pub use accessor::render_accessor;
pub use catalog::{render_catalog, CatalogFile};
pub use extensions::{render_font_extension, render_uifont_extension};
pub use manifest::{render_manifest, MANIFEST_FILE_NAME};
pub use registration::{render_registration, REGISTRATION_FILE_NAME};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use crate::models::FontFamily;

/// A generated source file, named relative to the target's source directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub file_name: String,
    pub contents: String,
}

/// Render every source file that goes into `Sources/<Family>Font/`
pub fn render_sources(family: &FontFamily) -> Vec<SourceFile> {
    vec![
        SourceFile {
            file_name: REGISTRATION_FILE_NAME.to_string(),
            contents: render_registration(),
        },
        SourceFile {
            file_name: format!("{}.swift", family.package_name()),
            contents: render_accessor(family),
        },
        SourceFile {
            file_name: format!("Font+{}.swift", family.name()),
            contents: render_font_extension(family),
        },
        SourceFile {
            file_name: format!("UIFont+{}.swift", family.name()),
            contents: render_uifont_extension(family),
        },
    ]
}

lazy_static! {
    static ref PLACEHOLDER: Regex = Regex::new(r"\{\{([A-Z_]+)\}\}").unwrap();
}

/// Substitute `{{KEY}}` placeholders in a template.
///
/// Substituted text is never rescanned; unknown keys are left as written.
pub(crate) fn fill(template: &str, values: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            let key = &caps[1];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;
    use crate::font::{determine_weight, is_italic_font};
    use crate::models::{FontEntry, FontFamily};

    /// Family built from style labels, as if parsed from `<family>-<style>.ttf`
    pub fn family(name: &str, styles: &[&str]) -> FontFamily {
        let fonts = styles
            .iter()
            .map(|style| {
                let id = format!("{}-{}", name, style);
                FontEntry::new(
                    style.to_string(),
                    determine_weight(style),
                    is_italic_font(style),
                    PathBuf::from(format!("/fonts/{}.ttf", id)),
                    id,
                )
            })
            .collect();
        FontFamily::new(name.to_string(), fonts).unwrap()
    }
}
