//! File name parsing and weight inference

pub mod parser;
pub mod weight;

pub use parser::{is_font_extension, parse_font_path, split_family_style};
pub use weight::{determine_weight, is_italic_font};
