//! HAR documents for end-to-end tests.

use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Builds a HAR 1.2 document entry by entry.
#[derive(Default)]
pub struct HarFixture {
    entries: Vec<Value>,
}

impl HarFixture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(mut self, started: &str, request: Value, response: Value) -> Self {
        self.entries.push(json!({
            "startedDateTime": started,
            "time": 10,
            "request": request,
            "response": response,
            "cache": {},
            "timings": { "wait": 10 }
        }));
        self
    }

    pub fn to_json(&self) -> String {
        json!({
            "log": {
                "version": "1.2",
                "creator": { "name": "har2code-tests", "version": "1" },
                "entries": self.entries
            }
        })
        .to_string()
    }

    /// Writes the document to `dir/capture.har` and returns the path.
    pub fn write_to(&self, dir: &Path) -> PathBuf {
        let path = dir.join("capture.har");
        std::fs::write(&path, self.to_json()).unwrap();
        path
    }
}

pub fn get(url: &str) -> Value {
    json!({ "method": "GET", "url": url, "httpVersion": "HTTP/1.1", "headers": [] })
}

pub fn response(status: i64, content: Value) -> Value {
    json!({ "status": status, "httpVersion": "HTTP/1.1", "headers": [], "content": content })
}
