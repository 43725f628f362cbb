use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::render::Library;
use crate::storage::DEFAULT_OUTPUT_DIR;

/// Default location of the user's MIME override table (relative to the
/// working directory).
pub const DEFAULT_FALLBACK_MIME_MAP: &str = ".fallback_mime_map.json";

/// Global configuration loaded from `~/.config/har2code/config.toml`.
/// Command-line flags override every field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Har2CodeConfig {
    /// Directory extracted bodies and uploads are written to.
    pub output_dir: PathBuf,
    /// Extensions (without dot) whose response bodies stay inline as text.
    pub excluded_extensions: Vec<String>,
    /// Client library for generated code.
    #[serde(default)]
    pub library: Library,
    /// JSON file with MIME type -> extension overrides; missing is fine.
    #[serde(default = "default_fallback_mime_map")]
    pub fallback_mime_map: PathBuf,
    /// Text encoding of HAR input files.
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

fn default_fallback_mime_map() -> PathBuf {
    PathBuf::from(DEFAULT_FALLBACK_MIME_MAP)
}

fn default_encoding() -> String {
    "utf-8".to_string()
}

impl Default for Har2CodeConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            excluded_extensions: vec!["json".to_string()],
            library: Library::default(),
            fallback_mime_map: default_fallback_mime_map(),
            encoding: default_encoding(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("har2code")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<Har2CodeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = Har2CodeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: Har2CodeConfig = toml::from_str(&data)
        .map_err(|e| anyhow::anyhow!("parse config {}: {e}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = Har2CodeConfig::default();
        assert_eq!(cfg.output_dir, PathBuf::from("out"));
        assert_eq!(cfg.excluded_extensions, vec!["json"]);
        assert_eq!(cfg.library, Library::Requests);
        assert_eq!(cfg.fallback_mime_map, PathBuf::from(".fallback_mime_map.json"));
        assert_eq!(cfg.encoding, "utf-8");
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = Har2CodeConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Har2CodeConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            output_dir = "captures/bodies"
            excluded_extensions = ["json", "js", "html"]
            library = "httpx"
        "#;
        let cfg: Har2CodeConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.output_dir, PathBuf::from("captures/bodies"));
        assert_eq!(cfg.excluded_extensions.len(), 3);
        assert_eq!(cfg.library, Library::Httpx);
        assert_eq!(cfg.fallback_mime_map, PathBuf::from(DEFAULT_FALLBACK_MIME_MAP));
        assert_eq!(cfg.encoding, "utf-8");
    }

    #[test]
    fn config_toml_rejects_unknown_library() {
        let toml = r#"
            output_dir = "out"
            excluded_extensions = []
            library = "urllib"
        "#;
        assert!(toml::from_str::<Har2CodeConfig>(toml).is_err());
    }
}
