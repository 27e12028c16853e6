use std::fs;
use std::path::Path;
use log::debug;
use crate::error::Result;

/// Create a directory (and parents) if it doesn't exist
pub fn ensure_directory_exists(dir: &Path) -> Result<()> {
    if !dir.exists() {
        debug!("Directory {} does not exist. Creating it now.", dir.display());
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Delete a directory tree left over from a previous run
pub fn remove_directory_if_exists(dir: &Path) -> Result<()> {
    if dir.exists() {
        debug!("Removing previous output at {}", dir.display());
        fs::remove_dir_all(dir)?;
    }
    Ok(())
}

/// Write generated text to `path`, replacing any existing file
pub fn write_text_file(path: &Path, contents: &str) -> Result<()> {
    debug!("Writing {}", path.display());
    fs::write(path, contents)?;
    Ok(())
}

/// Copy a file's bytes verbatim
pub fn copy_file(src: &Path, dest: &Path) -> Result<()> {
    debug!("Copying {} to {}", src.display(), dest.display());
    fs::copy(src, dest)?;
    Ok(())
}
