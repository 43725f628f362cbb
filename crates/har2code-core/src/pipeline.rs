//! Pipeline context: everything one conversion run reads besides the
//! archive itself. Built once, then passed explicitly.

use std::collections::BTreeSet;

use crate::mime::ExtensionTable;
use crate::storage::OutputDir;

/// Extensions (no leading dot, lower-case) whose bodies are inlined as text
/// instead of extracted to files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedExtensions(BTreeSet<String>);

impl Default for ExcludedExtensions {
    fn default() -> Self {
        Self::from_iter(["json"])
    }
}

impl ExcludedExtensions {
    pub fn none() -> Self {
        Self(BTreeSet::new())
    }

    /// Parses a comma-separated list such as `json, .JS`.
    pub fn parse_list(list: &str) -> Self {
        Self::from_iter(list.split(','))
    }

    /// `ext` may carry a leading dot.
    pub fn contains(&self, ext: &str) -> bool {
        self.0.contains(&normalize(ext))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ExcludedExtensions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|s| normalize(s.as_ref()))
                .filter(|s| !s.is_empty())
                .collect(),
        )
    }
}

fn normalize(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_ascii_lowercase()
}

/// Shared state of one conversion run.
#[derive(Debug)]
pub struct Pipeline {
    pub table: ExtensionTable,
    pub excluded: ExcludedExtensions,
    pub output: OutputDir,
}

impl Pipeline {
    pub fn new(table: ExtensionTable, excluded: ExcludedExtensions, output: OutputDir) -> Self {
        Self {
            table,
            excluded,
            output,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_excludes_json_only() {
        let ex = ExcludedExtensions::default();
        assert!(ex.contains("json"));
        assert!(ex.contains(".json"));
        assert!(!ex.contains("js"));
    }

    #[test]
    fn parse_list_normalizes() {
        let ex = ExcludedExtensions::parse_list(" json, .JS ,, html");
        assert_eq!(ex.iter().collect::<Vec<_>>(), vec!["html", "js", "json"]);
    }

    #[test]
    fn empty_list_excludes_nothing() {
        assert_eq!(ExcludedExtensions::parse_list(""), ExcludedExtensions::none());
    }
}
