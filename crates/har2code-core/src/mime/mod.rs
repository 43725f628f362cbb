//! Media type parsing and extension resolution.
//!
//! An extension is chosen from the URL suffix and the declared content type;
//! the content type wins when the suffix is not a registered extension (an
//! endpoint like `/items/12.5` says nothing about its payload).

mod charset;
mod registry;
mod resolve;
mod table;

pub use charset::{Charset, CharsetError};
pub use registry::{is_registered_extension, registry_extension, REGISTRY_VERSION};
pub use resolve::{resolve_extension, DEFAULT_EXTENSION};
pub use table::{ExtensionTable, MimeMapError};

/// A parsed `Content-Type` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaType {
    /// `type/subtype`, lower-cased, parameters removed.
    pub essence: String,
    /// Raw `charset` parameter, if declared.
    pub charset: Option<String>,
}

impl MediaType {
    /// Parses a header value such as `text/html; charset="UTF-8"`.
    /// Returns `None` for an empty value.
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.split(';');
        let essence = parts.next()?.trim().to_ascii_lowercase();
        if essence.is_empty() {
            return None;
        }
        let charset = parts.find_map(|param| {
            let (name, v) = param.split_once('=')?;
            if !name.trim().eq_ignore_ascii_case("charset") {
                return None;
            }
            let v = v.trim().trim_matches('"').trim();
            (!v.is_empty()).then(|| v.to_string())
        });
        Some(Self { essence, charset })
    }

    /// Charset to decode bodies with; unknown labels fall back to UTF-8.
    pub fn decoding_charset(&self) -> Charset {
        match self.charset.as_deref() {
            None => Charset::Utf8,
            Some(label) => Charset::from_label(label).unwrap_or_else(|e| {
                tracing::debug!("{e}; decoding as utf-8");
                Charset::Utf8
            }),
        }
    }
}
