//! One conversion run: load overrides and archive, assemble, render.

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Har2CodeConfig;
use crate::har::load_archive;
use crate::mime::ExtensionTable;
use crate::pipeline::{ExcludedExtensions, Pipeline};
use crate::render::{render, Library};
use crate::storage::{NameGenerator, OutputDir, RandomNames};

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub har_path: PathBuf,
    pub encoding: String,
    pub library: Library,
    pub excluded: ExcludedExtensions,
    pub fallback_mime_map: PathBuf,
    pub output_dir: PathBuf,
}

impl ConvertOptions {
    /// Options for `har_path` taken from the config file values.
    pub fn from_config(har_path: impl Into<PathBuf>, cfg: &Har2CodeConfig) -> Self {
        Self {
            har_path: har_path.into(),
            encoding: cfg.encoding.clone(),
            library: cfg.library,
            excluded: cfg.excluded_extensions.iter().collect(),
            fallback_mime_map: cfg.fallback_mime_map.clone(),
            output_dir: cfg.output_dir.clone(),
        }
    }
}

/// Converts a HAR file to Python client code, writing extracted bodies
/// under the output dir with random names.
pub fn convert(opts: &ConvertOptions) -> Result<String> {
    convert_with_names(opts, Box::new(RandomNames))
}

/// Same as [`convert`] with a caller-chosen file-name generator.
pub fn convert_with_names(opts: &ConvertOptions, names: Box<dyn NameGenerator>) -> Result<String> {
    let table = ExtensionTable::load(&opts.fallback_mime_map)?;
    let entries = load_archive(&opts.har_path, &opts.encoding)?;
    let mut pipeline = Pipeline::new(
        table,
        opts.excluded.clone(),
        OutputDir::with_names(&opts.output_dir, names),
    );
    let records = pipeline.assemble(&entries)?;
    Ok(render(&records, opts.library))
}
