//! URL path handling for extension hints and safe file names.

mod path;
mod sanitize;

pub use path::{path_extension, url_path};
pub use sanitize::sanitize_upload_name;
