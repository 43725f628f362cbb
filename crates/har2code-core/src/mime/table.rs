//! MIME → extension lookup table: user overrides over the pinned registry
//! and the built-in fallback.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use super::registry::{builtin_fallback, registry_extension};

/// Failure loading a user-supplied override file. A missing file is not an
/// error and never produces one of these.
#[derive(Debug, thiserror::Error)]
pub enum MimeMapError {
    #[error("read MIME override file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("parse MIME override file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionTable {
    overrides: HashMap<String, String>,
    fallback: HashMap<String, String>,
}

impl Default for ExtensionTable {
    fn default() -> Self {
        Self {
            overrides: HashMap::new(),
            fallback: builtin_fallback().into_iter().collect(),
        }
    }
}

impl ExtensionTable {
    /// Built-in table plus the overrides in `path`, if the file exists.
    pub fn load(path: &Path) -> Result<Self, MimeMapError> {
        let mut table = Self::default();
        match std::fs::read(path) {
            Ok(bytes) => {
                let raw: HashMap<String, String> =
                    serde_json::from_slice(&bytes).map_err(|source| MimeMapError::Parse {
                        path: path.to_path_buf(),
                        source,
                    })?;
                tracing::debug!(
                    "loaded {} MIME overrides from {}",
                    raw.len(),
                    path.display()
                );
                table.extend_overrides(raw);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("no MIME override file at {}", path.display());
            }
            Err(source) => {
                return Err(MimeMapError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
        Ok(table)
    }

    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::default();
        table.extend_overrides(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
        table
    }

    fn extend_overrides(&mut self, overrides: impl IntoIterator<Item = (String, String)>) {
        for (mime, ext) in overrides {
            let mime = mime.trim().to_ascii_lowercase();
            let ext = ext.trim().to_ascii_lowercase();
            if mime.is_empty() || ext.is_empty() {
                continue;
            }
            let ext = if ext.starts_with('.') {
                ext
            } else {
                format!(".{ext}")
            };
            self.overrides.insert(mime, ext);
        }
    }

    /// Extension for a lower-cased, parameter-free MIME type: overrides first,
    /// then the registry, then the fallback table.
    pub fn extension_for(&self, mime: &str) -> Option<&str> {
        self.overrides
            .get(mime)
            .map(String::as_str)
            .or_else(|| registry_extension(mime))
            .or_else(|| self.fallback.get(mime).map(String::as_str))
    }
}
