//! Read a HAR file into its entries.

use anyhow::{Context, Result};
use std::path::Path;

use crate::mime::Charset;

use super::parse::{HarEntry, HarLog};

/// Reads `path`, decoding it with the named text `encoding` (`utf-8`,
/// `utf-8-sig`, `latin-1`, `utf-16`, `gbk`, ...), and returns its entries in file
/// order. A leading byte-order mark is ignored.
pub fn load_archive(path: &Path, encoding: &str) -> Result<Vec<HarEntry>> {
    let charset = Charset::from_label(encoding)
        .with_context(|| format!("HAR encoding for {}", path.display()))?;
    let bytes = std::fs::read(path)
        .with_context(|| format!("read HAR file: {}", path.display()))?;
    let text = charset
        .decode(&bytes)
        .with_context(|| format!("decode HAR file: {}", path.display()))?;
    let entries =
        parse_archive(&text).with_context(|| format!("parse HAR JSON: {}", path.display()))?;
    tracing::info!("loaded {} entries from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parses HAR JSON text.
pub fn parse_archive(text: &str) -> Result<Vec<HarEntry>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let har: HarLog = serde_json::from_str(text)?;
    Ok(har.log.entries)
}
