//! Extension resolution from URL suffix and declared media type.

use crate::url_model::path_extension;

use super::registry::is_registered_extension;
use super::table::ExtensionTable;
use super::MediaType;

/// Extension used when neither the URL nor the media type yields one.
pub const DEFAULT_EXTENSION: &str = ".bin";

/// Resolves a file extension (with leading dot) for a response body.
///
/// The URL suffix is kept unless it disagrees with the media type's
/// extension and is not itself a registered extension; then the media type
/// wins. Falls back to [`DEFAULT_EXTENSION`].
pub fn resolve_extension(table: &ExtensionTable, media_type: Option<&str>, url_path: &str) -> String {
    let mut path_ext = path_extension(url_path);
    let mime_ext = media_type
        .and_then(MediaType::parse)
        .and_then(|mt| table.extension_for(&mt.essence).map(str::to_string));

    if let (Some(p), Some(m)) = (&path_ext, &mime_ext) {
        if p != m && !is_registered_extension(p) {
            path_ext = None;
        }
    }

    path_ext
        .or(mime_ext)
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string())
}
