//! Data types shared across the generation pipeline

pub mod config;
pub mod font;

pub use config::{Config, ManifestSettings};
pub use font::{FontEntry, FontFamily};
