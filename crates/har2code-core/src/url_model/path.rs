//! Path component extraction and suffix detection.

/// Path component of `url`, without query or fragment.
///
/// Falls back to plain string splitting when `url` is not absolute (HAR
/// files from some proxies record relative URLs).
pub fn url_path(url: &str) -> String {
    if let Ok(parsed) = url::Url::parse(url) {
        return parsed.path().to_string();
    }
    let end = url.find(['?', '#']).unwrap_or(url.len());
    let without_query = &url[..end];
    match without_query.split_once("://") {
        Some((_, rest)) => rest.find('/').map_or(String::new(), |i| rest[i..].to_string()),
        None => without_query.to_string(),
    }
}

/// Lower-cased suffix (with leading dot) of the last path segment.
///
/// A segment that only starts with a dot (`.well-known`) or ends with one
/// has no suffix.
pub fn path_extension(path: &str) -> Option<String> {
    let segment = path.rsplit('/').next()?;
    let stem_len = segment.len() - segment.trim_start_matches('.').len();
    let dot = segment[stem_len..].rfind('.')? + stem_len;
    let ext = &segment[dot..];
    if ext.len() < 2 {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
