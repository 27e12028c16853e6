use std::path::{Path, PathBuf};
use log::info;
use crate::error::Result;
use crate::models::{Config, FontFamily};
use crate::templates::{self, catalog::data_set_dir, MANIFEST_FILE_NAME};
use crate::utils::{copy_file, ensure_directory_exists, write_text_file};

/// Write one family's package under `output_dir`, returning its directory.
///
/// Layout: `<Family>Font/Package.swift` and `<Family>Font/Sources/<Family>Font/`
/// holding the generated sources and the `<Family>Font.xcassets` catalog.
pub fn write_family_package(family: &FontFamily, output_dir: &Path, config: &Config) -> Result<PathBuf> {
    info!("Generating asset catalog for {}...", family.name());

    let package_name = family.package_name();
    let package_dir = output_dir.join(&package_name);
    let sources_dir = package_dir.join("Sources").join(&package_name);
    ensure_directory_exists(&sources_dir)?;

    let manifest = templates::render_manifest(family, &config.manifest);
    write_text_file(&package_dir.join(MANIFEST_FILE_NAME), &manifest)?;

    write_catalog(family, &sources_dir)?;

    for source in templates::render_sources(family) {
        write_text_file(&sources_dir.join(&source.file_name), &source.contents)?;
    }

    Ok(package_dir)
}

fn write_catalog(family: &FontFamily, sources_dir: &Path) -> Result<()> {
    for file in templates::render_catalog(family)? {
        let path = sources_dir.join(&file.relative_path);
        if let Some(parent) = path.parent() {
            ensure_directory_exists(parent)?;
        }
        write_text_file(&path, &file.contents)?;
    }

    for font in family.fonts() {
        let dest = sources_dir.join(data_set_dir(family, font)).join(font.file_name());
        copy_file(&font.source_path, &dest)?;
    }

    Ok(())
}
