use std::path::PathBuf;
use clap::{Parser, Subcommand};

/// Create font Swift packages from `FontFamily-Style.ttf/otf` files
#[derive(Parser, Debug)]
#[command(name = "mkfont", version, about = "Create a font Swift package.", arg_required_else_help = true)]
pub struct Cli {
    /// Enable debug output
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run mkfont with a UI for creating font Swift packages.
    Ui,
    /// Make a font Swift package from TTF/OTF font files.
    Package {
        /// Path to a directory (or a single font file) containing the font files.
        path: PathBuf,
        /// Path to directory where the package(s) will be generated.
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_with_output() {
        let cli = Cli::try_parse_from(["mkfont", "package", "fonts", "out"]).unwrap();
        assert!(!cli.debug);
        match cli.command {
            Command::Package { path, output } => {
                assert_eq!(path, PathBuf::from("fonts"));
                assert_eq!(output, Some(PathBuf::from("out")));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn output_is_optional_and_debug_is_global() {
        let cli = Cli::try_parse_from(["mkfont", "package", "fonts", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Command::Package { output: None, .. }));
    }

    #[test]
    fn ui_subcommand() {
        let cli = Cli::try_parse_from(["mkfont", "ui"]).unwrap();
        assert!(matches!(cli.command, Command::Ui));
    }

    #[test]
    fn package_requires_a_path() {
        assert!(Cli::try_parse_from(["mkfont", "package"]).is_err());
    }
}
