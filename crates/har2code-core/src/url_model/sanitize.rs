//! Upload file names made safe to embed in an output file name.

/// Longest sanitized name kept; the `binary-<token>-` prefix must still fit
/// under Linux NAME_MAX (255 bytes).
const MAX_UPLOAD_NAME: usize = 200;

/// Name used when nothing printable survives sanitizing.
const EMPTY_UPLOAD_NAME: &str = "upload";

/// Makes a client-declared upload file name safe as the tail of an output
/// file name: path separators, NUL and control characters become `_`,
/// runs of `_` collapse, leading/trailing dots and spaces are trimmed and the
/// result is capped at a char boundary.
pub fn sanitize_upload_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        let c = if c == '/' || c == '\\' || c.is_control() {
            '_'
        } else {
            c
        };
        if c == '_' && out.ends_with('_') {
            continue;
        }
        out.push(c);
    }

    let trimmed = out.trim_matches(|c: char| c == '.' || c == ' ');
    let mut end = trimmed.len().min(MAX_UPLOAD_NAME);
    while !trimmed.is_char_boundary(end) {
        end -= 1;
    }
    let capped = &trimmed[..end];
    if capped.is_empty() {
        EMPTY_UPLOAD_NAME.to_string()
    } else {
        capped.to_string()
    }
}
