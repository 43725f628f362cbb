//! Python client code generation from normalized records.
//!
//! Each record becomes a commented block that assigns `url`, `headers`,
//! `cookies`, `params`, `data`, `json` and `files`, issues the request with
//! the chosen library, and documents the captured response in a docstring.

mod pyrepr;

pub use pyrepr::PyLiteral;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::model::{
    BodyData, FieldMap, MaterializedContent, NormalizedRecord, RecordRequest, RecordResponse,
};

/// HTTP client library the generated code targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Library {
    #[default]
    Requests,
    Httpx,
}

impl fmt::Display for Library {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Library::Requests => "requests",
            Library::Httpx => "httpx",
        })
    }
}

impl FromStr for Library {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "requests" => Ok(Library::Requests),
            "httpx" => Ok(Library::Httpx),
            other => anyhow::bail!("unknown library: {other} (expected requests or httpx)"),
        }
    }
}

const BANNER: &str = "############## ======== HAR2CODE ======== ###############";

const CALL_ARGS: &str =
    "url, headers=headers, cookies=cookies, params=params, data=data, json=json, files=files)";

/// Renders the whole record sequence as one Python module.
pub fn render(records: &[NormalizedRecord], library: Library) -> String {
    let mut lines = vec![format!("import {library}")];
    for record in records {
        lines.extend(header_block(record));
        lines.extend(request_lines(&record.request));
        let method = record.request.method.to_py();
        match library {
            Library::Requests => {
                lines.push(format!("response = requests.request({method}, {CALL_ARGS}"));
            }
            Library::Httpx => {
                lines.push("with httpx.Client() as client:".to_string());
                lines.push(format!("    response = client.request({method}, {CALL_ARGS}"));
            }
        }
        lines.extend(response_docstring(&record.response));
        lines.push(String::new());
        lines.push(String::new());
    }
    lines.join("\n")
}

fn header_block(record: &NormalizedRecord) -> Vec<String> {
    let timestamp = record.captured_at.timestamp_millis() as f64 / 1000.0;
    vec![
        BANNER.to_string(),
        format!("# timestamp: {timestamp:.3}"),
        format!("# time: {}, {}", record.elapsed_ms, record.started_date_time),
        format!("# datetime: {}", record.started_date_time),
        "#".to_string(),
    ]
}

fn assign(name: &str, value: Option<String>) -> String {
    format!("{name} = {}", value.unwrap_or_else(|| "None".to_string()))
}

fn non_empty<V: PyLiteral>(map: &FieldMap<V>) -> Option<String> {
    (!map.is_empty()).then(|| map.to_py())
}

/// Python truthiness of a decoded JSON value.
fn is_truthy(value: &serde_json::Value) -> bool {
    use serde_json::Value;
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn request_lines(request: &RecordRequest) -> Vec<String> {
    let body = &request.body;
    let cookies: FieldMap<String> = request
        .cookies
        .iter()
        .map(|c| (c.name.clone(), c.value.clone()))
        .collect();
    let data = body.data.as_ref().and_then(|d| match d {
        BodyData::Text(t) if t.is_empty() => None,
        BodyData::Fields(f) if f.is_empty() => None,
        d => Some(d.to_py()),
    });
    let json = body.json.as_ref().filter(|v| is_truthy(v)).map(|v| v.to_py());
    let files = body.files.as_ref().and_then(non_empty);

    vec![
        format!("url = {}", request.url.to_py()),
        assign("headers", non_empty(&request.headers)),
        assign("cookies", non_empty(&cookies)),
        assign("params", non_empty(&request.query_params)),
        assign("data", data),
        assign("json", json),
        assign("files", files),
    ]
}

fn response_docstring(response: &RecordResponse) -> Vec<String> {
    if response.status == 0 {
        return Vec::new();
    }
    let mut doc = vec![
        "\"\"\"".to_string(),
        format!("Response: {} {}", response.http_version, response.status),
        String::new(),
    ];
    for header in &response.headers {
        doc.push(docstring_safe(&format!("{}: {}", header.name, header.value)));
    }
    let content = match &response.content {
        MaterializedContent::Inline(text) => text.clone(),
        MaterializedContent::FileRef(path) => format!("=== Save to file: {} ===", path.display()),
    };
    if !content.is_empty() {
        doc.push(String::new());
        doc.push(docstring_safe(&content));
    }
    doc.push("\"\"\"".to_string());
    doc
}

/// Escapes text so it cannot terminate or alter a `"""` docstring.
fn docstring_safe(text: &str) -> String {
    text.replace('\\', "\\\\").replace("\"\"\"", "\\\"\\\"\\\"")
}
