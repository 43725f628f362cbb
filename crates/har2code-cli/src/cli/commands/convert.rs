//! `har2code convert <har>`: print generated code for a HAR file.

use anyhow::Result;
use har2code_core::config::Har2CodeConfig;
use har2code_core::render::Library;
use har2code_core::{convert, ConvertOptions, ExcludedExtensions};
use std::io::Write;
use std::path::PathBuf;

/// Flags given on the command line; `None` means "use the config value".
#[derive(Debug, Default)]
pub struct ConvertArgs {
    pub har_file: PathBuf,
    pub library: Option<Library>,
    pub encoding: Option<String>,
    pub no_files: Option<ExcludedExtensions>,
    pub fallback_mime_map: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

/// Config values with command-line flags layered on top.
pub fn resolve_options(cfg: &Har2CodeConfig, args: ConvertArgs) -> ConvertOptions {
    let mut opts = ConvertOptions::from_config(args.har_file, cfg);
    if let Some(library) = args.library {
        opts.library = library;
    }
    if let Some(encoding) = args.encoding {
        opts.encoding = encoding;
    }
    if let Some(excluded) = args.no_files {
        opts.excluded = excluded;
    }
    if let Some(path) = args.fallback_mime_map {
        opts.fallback_mime_map = path;
    }
    if let Some(dir) = args.output_dir {
        opts.output_dir = dir;
    }
    opts
}

pub fn run_convert(cfg: &Har2CodeConfig, args: ConvertArgs) -> Result<()> {
    let opts = resolve_options(cfg, args);
    tracing::info!(
        "convert {} library={} output_dir={}",
        opts.har_path.display(),
        opts.library,
        opts.output_dir.display()
    );
    let code = convert(&opts)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{code}")?;
    stdout.flush()?;
    Ok(())
}
