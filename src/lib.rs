//! Turn `FontFamily-Style.ttf/otf` files into Swift packages that bundle the
//! fonts in an asset catalog and expose them as typed, self-registering
//! constants.

pub mod error;
pub mod font;
pub mod models;
pub mod organizer;
pub mod templates;
pub mod utils;

pub use error::{Error, Result};
pub use models::{Config, FontEntry, FontFamily, ManifestSettings};
pub use organizer::generate;
