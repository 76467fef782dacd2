pub mod file;
pub mod logging;
pub mod naming;

pub use file::{ensure_directory_exists, list_files};
pub use naming::{clean_stem, title_case, to_camel_case, to_lower_case};
