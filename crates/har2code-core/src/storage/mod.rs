//! Output directory for materialized bodies.
//!
//! The directory is created on first write together with a `.gitignore`
//! that ignores everything in it. Each file gets a fresh token from a
//! [`NameGenerator`] and is created exclusively, so a file is never
//! overwritten and no coordination between records is needed.

mod names;

pub use names::{NameGenerator, RandomNames, SequentialNames};

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "out";

/// Attempts before giving up on finding an unused name.
const MAX_NAME_ATTEMPTS: usize = 8;

pub struct OutputDir {
    root: PathBuf,
    names: Box<dyn NameGenerator>,
    prepared: bool,
}

impl std::fmt::Debug for OutputDir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputDir")
            .field("root", &self.root)
            .field("prepared", &self.prepared)
            .finish()
    }
}

impl OutputDir {
    /// Output directory at `root` with random file-name tokens.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_names(root, Box::new(RandomNames))
    }

    pub fn with_names(root: impl Into<PathBuf>, names: Box<dyn NameGenerator>) -> Self {
        Self {
            root: root.into(),
            names,
            prepared: false,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn prepare(&mut self) -> Result<()> {
        if self.prepared {
            return Ok(());
        }
        fs::create_dir_all(&self.root)
            .with_context(|| format!("create output dir: {}", self.root.display()))?;
        let ignore = self.root.join(".gitignore");
        fs::write(&ignore, "*").with_context(|| format!("write {}", ignore.display()))?;
        tracing::debug!("prepared output dir {}", self.root.display());
        self.prepared = true;
        Ok(())
    }

    /// Writes `bytes` to `<prefix>-<token><suffix>` and returns its path.
    pub fn write_unique(&mut self, prefix: &str, suffix: &str, bytes: &[u8]) -> Result<PathBuf> {
        self.prepare()?;
        for _ in 0..MAX_NAME_ATTEMPTS {
            let token = self.names.next_token()?;
            let path = self.root.join(format!("{prefix}-{token}{suffix}"));
            let mut file = match fs::OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(f) => f,
                Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                    tracing::debug!("name collision at {}, retrying", path.display());
                    continue;
                }
                Err(e) => {
                    return Err(e).with_context(|| format!("create {}", path.display()));
                }
            };
            file.write_all(bytes)
                .with_context(|| format!("write {}", path.display()))?;
            tracing::debug!("wrote {} bytes to {}", bytes.len(), path.display());
            return Ok(path);
        }
        anyhow::bail!(
            "no unused file name for {prefix}-*{suffix} in {} after {MAX_NAME_ATTEMPTS} attempts",
            self.root.display()
        )
    }
}
