//! Font discovery, grouping and package generation

pub mod bundle;
pub mod discovery;
pub mod group;
pub mod processor;

pub use bundle::write_family_package;
pub use discovery::{find_font_files, is_font_candidate};
pub use group::{aggregate, parse_fonts};
pub use processor::{generate, OUTPUT_DIR_NAME};
