use crate::models::{FontFamily, ManifestSettings};
use super::fill;

pub const MANIFEST_FILE_NAME: &str = "Package.swift";

const MANIFEST_TEMPLATE: &str = r#"// swift-tools-version: {{TOOLS_VERSION}}

import PackageDescription

let package = Package(
   name: "{{PACKAGE}}",
   platforms: [.iOS(.{{IOS}}), .macOS(.{{MACOS}})],
   products: [
      .library(name: "{{PACKAGE}}", targets: ["{{PACKAGE}}"])
   ],
   targets: [
      .target(name: "{{PACKAGE}}")
   ]
)
"#;

/// Render the package manifest declaring the `<Family>Font` library
pub fn render_manifest(family: &FontFamily, settings: &ManifestSettings) -> String {
    let package = family.package_name();
    fill(
        MANIFEST_TEMPLATE,
        &[
            ("TOOLS_VERSION", &settings.tools_version),
            ("PACKAGE", &package),
            ("IOS", &settings.ios_version),
            ("MACOS", &settings.macos_version),
        ],
    )
}
