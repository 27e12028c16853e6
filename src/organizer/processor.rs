use std::path::{Path, PathBuf};
use log::info;
use rayon::prelude::*;
use crate::error::{Error, Result};
use crate::models::Config;
use crate::utils::{ensure_directory_exists, remove_directory_if_exists};
use super::bundle::write_family_package;
use super::discovery::find_font_files;
use super::group::{aggregate, parse_fonts};

/// Directory created under the output base to hold all generated packages
pub const OUTPUT_DIR_NAME: &str = "mkfont";

/// Generate one package per font family found in `inputs`.
///
/// `inputs` may mix font files and directories (searched recursively).
/// Packages are written to `<output_dir>/mkfont`, or under the system
/// temporary directory when no output directory is given. Any previous
/// `mkfont` directory there is deleted first. Returns the `mkfont` path.
pub fn generate(inputs: &[PathBuf], output_dir: Option<&Path>, config: &Config) -> Result<PathBuf> {
    let font_paths = find_font_files(inputs)?;
    if font_paths.is_empty() {
        return Err(Error::NoFontFilesFound);
    }
    info!("Found {} font files", font_paths.len());

    let families = aggregate(parse_fonts(&font_paths)?);

    let base_dir = match output_dir {
        Some(dir) if dir.exists() => dir.to_path_buf(),
        Some(dir) => return Err(Error::OutputDirectoryMissing(dir.to_path_buf())),
        None => std::env::temp_dir(),
    };

    let output_path = base_dir.join(OUTPUT_DIR_NAME);
    remove_directory_if_exists(&output_path)?;
    ensure_directory_exists(&output_path)?;

    // Families write to disjoint subdirectories of `output_path`.
    families
        .par_iter()
        .try_for_each(|(_, family)| write_family_package(family, &output_path, config).map(|_| ()))?;

    info!("Generated {} package(s) in {}", families.len(), output_path.display());
    Ok(output_path)
}
