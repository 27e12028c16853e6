use std::fs;
use std::path::{Path, PathBuf};
use log::debug;
use crate::error::Result;
use crate::font::{is_font_extension, split_family_style};

/// Check if a path looks like a `Family-Style.ttf/otf` input
pub fn is_font_candidate(path: &Path) -> bool {
    if !is_font_extension(path) {
        return false;
    }
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(|stem| split_family_style(stem).is_some())
        .unwrap_or(false)
}

/// Expand input paths into candidate font files, in discovery order.
///
/// Directories are walked recursively with entries visited in file name
/// order; other paths are taken as given. Paths that are not font
/// candidates are dropped silently.
pub fn find_font_files(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut font_files = Vec::new();

    for input in inputs {
        if input.is_dir() {
            collect_directory(input, &mut font_files)?;
        } else {
            font_files.push(input.clone());
        }
    }

    font_files.retain(|path| {
        let keep = is_font_candidate(path);
        if !keep {
            debug!("Skipping {}", path.display());
        }
        keep
    });

    Ok(font_files)
}

// Symlinked directories are not descended into; symlinked files are kept.
fn collect_directory(dir: &Path, font_files: &mut Vec<PathBuf>) -> Result<()> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| entry.and_then(|e| Ok((e.path(), e.file_type()?))))
        .collect::<std::io::Result<Vec<(PathBuf, fs::FileType)>>>()?;
    entries.sort_by(|a, b| a.0.cmp(&b.0));

    for (path, file_type) in entries {
        if file_type.is_dir() {
            collect_directory(&path, font_files)?;
        } else if path.is_file() {
            font_files.push(path);
        } else if file_type.is_symlink() {
            debug!("Not following symlink {}", path.display());
        }
    }

    Ok(())
}
