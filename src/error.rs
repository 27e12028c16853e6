use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for mkfont package generation
#[derive(Debug, Error)]
pub enum Error {
    /// Discovery found no usable `Family-Style.ttf/otf` files
    #[error("No font files were found.")]
    NoFontFilesFound,
    /// The caller supplied an output directory that does not exist
    #[error("Output directory does not exist: {}", .0.display())]
    OutputDirectoryMissing(PathBuf),
    /// IO operations errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A path whose file stem is not of the form `Family-Style`
    #[error("Invalid font file name (expected FontFamily-Style.ttf): {}", .0.display())]
    InvalidFileName(PathBuf),
    /// Asset catalog metadata could not be serialized
    #[error("Asset catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
    /// Requested surface is not part of this build
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

/// Result type alias for mkfont operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions_match_user_facing_messages() {
        assert_eq!(Error::NoFontFilesFound.to_string(), "No font files were found.");
        let missing = Error::OutputDirectoryMissing(PathBuf::from("/nope/out"));
        assert_eq!(missing.to_string(), "Output directory does not exist: /nope/out");
    }

    #[test]
    fn io_errors_convert_with_question_mark() {
        fn fails() -> Result<()> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(Error::Io(_))));
    }
}
