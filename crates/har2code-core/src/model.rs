//! Normalized request/response records handed to the code renderer.

use chrono::{DateTime, FixedOffset};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::path::PathBuf;

/// Order-preserving string-keyed map. Re-inserting a key keeps its first
/// position and replaces the value (last occurrence wins).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMap<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for FieldMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> FieldMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for FieldMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V: Serialize> Serialize for FieldMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A response body after the inline-or-extract decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MaterializedContent {
    Inline(String),
    FileRef(PathBuf),
}

impl MaterializedContent {
    pub fn is_empty(&self) -> bool {
        matches!(self, MaterializedContent::Inline(text) if text.is_empty())
    }
}

/// Form field value: a key seen once collapses to a scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Single(String),
    Multiple(Vec<String>),
}

/// The `data` slot of a decoded body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum BodyData {
    Text(String),
    Fields(FieldMap<FieldValue>),
}

/// A multipart file part extracted to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UploadedFile {
    /// File name declared by the client.
    pub file_name: String,
    /// Where the decoded bytes were written.
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DecodedBody {
    pub data: Option<BodyData>,
    pub json: Option<serde_json::Value>,
    pub files: Option<FieldMap<UploadedFile>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordCookie {
    pub name: String,
    pub value: String,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub expires: Option<String>,
    pub http_only: Option<bool>,
    pub secure: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordHeader {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordRequest {
    pub method: String,
    pub url: String,
    pub headers: FieldMap<String>,
    pub cookies: Vec<RecordCookie>,
    pub query_params: FieldMap<String>,
    pub body: DecodedBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordResponse {
    pub status: i64,
    pub http_version: String,
    pub headers: Vec<RecordHeader>,
    pub content: MaterializedContent,
}

/// One captured exchange, normalized. Never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub captured_at: DateTime<FixedOffset>,
    /// `startedDateTime` exactly as captured.
    pub started_date_time: String,
    /// Total elapsed time of the exchange in milliseconds.
    pub elapsed_ms: f64,
    pub request: RecordRequest,
    pub response: RecordResponse,
}
