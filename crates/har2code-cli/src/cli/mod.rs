//! CLI for har2code.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use har2code_core::config;
use har2code_core::render::Library;
use har2code_core::ExcludedExtensions;
use std::path::PathBuf;

use commands::{run_completions, run_convert, ConvertArgs};

/// Top-level CLI for har2code.
#[derive(Debug, Parser)]
#[command(name = "har2code")]
#[command(about = "Convert HAR captures into Python requests/httpx code", long_about = None)]
pub struct Cli {
    /// Log debug details (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Convert a HAR file and print the generated code to stdout.
    Convert {
        /// Path to the HAR file.
        har_file: PathBuf,

        /// Python library for the generated code [default: from config, else requests].
        #[arg(long, value_parser = parse_library)]
        library: Option<Library>,

        /// Text encoding of the HAR file [default: from config, else utf-8].
        #[arg(long)]
        encoding: Option<String>,

        /// Comma-separated response extensions to keep inline instead of
        /// saving to files, e.g. `json,js` [default: from config, else json].
        #[arg(long, value_name = "EXTS", value_parser = parse_excluded)]
        no_files: Option<ExcludedExtensions>,

        /// JSON file mapping MIME types to extensions, e.g.
        /// {"application/wasm": ".wasm"}. Ignored if it does not exist.
        #[arg(long, value_name = "PATH")]
        fallback_mime_map: Option<PathBuf>,

        /// Directory extracted bodies are written to [default: out].
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn parse_library(s: &str) -> Result<Library, String> {
    s.parse().map_err(|e: anyhow::Error| e.to_string())
}

fn parse_excluded(s: &str) -> Result<ExcludedExtensions, String> {
    Ok(ExcludedExtensions::parse_list(s))
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    pub fn run(self) -> Result<()> {
        match self.command {
            CliCommand::Convert {
                har_file,
                library,
                encoding,
                no_files,
                fallback_mime_map,
                output_dir,
            } => {
                let cfg = config::load_or_init()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_convert(
                    &cfg,
                    ConvertArgs {
                        har_file,
                        library,
                        encoding,
                        no_files,
                        fallback_mime_map,
                        output_dir,
                    },
                )?;
            }
            CliCommand::Completions { shell } => run_completions(shell),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
