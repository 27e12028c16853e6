pub mod file;
pub mod naming;
pub mod logging;

pub use file::{copy_file, ensure_directory_exists, remove_directory_if_exists, write_text_file};
pub use naming::constant_name;
pub use logging::init_logging;
