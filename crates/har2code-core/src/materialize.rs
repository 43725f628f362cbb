//! Response bodies: inline as text, or extract to a file.

use anyhow::Result;

use crate::codec::decode_base64;
use crate::har::HarContent;
use crate::mime::{resolve_extension, Charset, MediaType, DEFAULT_EXTENSION};
use crate::model::MaterializedContent;
use crate::pipeline::Pipeline;

impl Pipeline {
    /// Decides how a response body appears in the record.
    ///
    /// Empty bodies (`size` absent or not positive) are `Inline("")`. Bodies
    /// whose resolved extension is excluded are decoded to text under the
    /// declared charset; bytes that do not decode go to an `unknown-*.bin`
    /// file instead. Everything else is written to `binary-*<ext>`.
    ///
    /// Malformed base64 or charset mismatches never fail the run; only I/O
    /// errors writing the output file do.
    pub fn materialize(&mut self, content: &HarContent, url_path: &str) -> Result<MaterializedContent> {
        if content.size.unwrap_or(0) <= 0 {
            return Ok(MaterializedContent::Inline(String::new()));
        }

        let ext = resolve_extension(&self.table, content.mime_type.as_deref(), url_path);
        let text = content.text.as_deref().unwrap_or_default();
        let raw = if is_base64(content.encoding.as_deref()) {
            match decode_base64(text) {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    tracing::debug!("content for {url_path} is not valid base64 ({e}); using text as-is");
                    None
                }
            }
        } else {
            None
        };

        if self.excluded.contains(&ext) {
            let Some(bytes) = raw else {
                return Ok(MaterializedContent::Inline(text.to_string()));
            };
            let charset = content
                .mime_type
                .as_deref()
                .and_then(MediaType::parse)
                .map_or(Charset::Utf8, |mt| mt.decoding_charset());
            return match charset.decode(&bytes) {
                Ok(decoded) => Ok(MaterializedContent::Inline(decoded)),
                Err(e) => {
                    tracing::debug!("content for {url_path}: {e}; extracting to file");
                    let path = self.output.write_unique("unknown", DEFAULT_EXTENSION, &bytes)?;
                    Ok(MaterializedContent::FileRef(path))
                }
            };
        }

        let bytes = raw.unwrap_or_else(|| text.as_bytes().to_vec());
        let path = self.output.write_unique("binary", &ext, &bytes)?;
        Ok(MaterializedContent::FileRef(path))
    }
}

fn is_base64(encoding: Option<&str>) -> bool {
    encoding.is_some_and(|e| e.trim().eq_ignore_ascii_case("base64"))
}

#[cfg(test)]
mod tests;
