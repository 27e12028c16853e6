//! Command-line interface handling

mod args;

pub use args::{Cli, Command};
