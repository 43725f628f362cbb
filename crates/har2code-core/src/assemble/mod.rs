//! Entry assembly: one normalized record per HAR entry, ordered by capture
//! time.

mod error;

pub use error::EntryError;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::har::{HarCookie, HarEntry, HarHeader};
use crate::model::{
    FieldMap, NormalizedRecord, RecordCookie, RecordHeader, RecordRequest, RecordResponse,
};
use crate::pipeline::Pipeline;
use crate::url_model::url_path;

/// Offset-less timestamp layouts accepted after RFC 3339; read as UTC.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

impl Pipeline {
    /// Normalizes every entry and sorts the result by capture time (stable for
    /// equal timestamps). The first failing entry aborts the run: records
    /// must be totally ordered before rendering, so there is no partial result.
    pub fn assemble(&mut self, entries: &[HarEntry]) -> Result<Vec<NormalizedRecord>> {
        let mut records = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let record = self
                .assemble_entry(index, entry)
                .with_context(|| format!("entry {index} ({} {})", entry.request.method, entry.request.url))?;
            records.push(record);
        }
        records.sort_by_key(|r| r.captured_at);
        tracing::info!("assembled {} records", records.len());
        Ok(records)
    }

    fn assemble_entry(&mut self, index: usize, entry: &HarEntry) -> Result<NormalizedRecord> {
        let captured_at = parse_timestamp(index, &entry.started_date_time)?;
        let request = &entry.request;
        let response = &entry.response;

        let body = self.decode_body(request.post_data.as_ref())?;
        let content = self.materialize(&response.content, &url_path(&request.url))?;

        Ok(NormalizedRecord {
            captured_at,
            started_date_time: entry.started_date_time.clone(),
            elapsed_ms: entry.time,
            request: RecordRequest {
                method: request.method.clone(),
                url: request.url.clone(),
                headers: header_map(&request.headers),
                cookies: request.cookies.iter().map(record_cookie).collect(),
                query_params: request
                    .query_string
                    .iter()
                    .map(|q| (q.name.clone(), q.value.clone()))
                    .collect(),
                body,
            },
            response: RecordResponse {
                status: response.status,
                http_version: response.http_version.clone(),
                headers: response
                    .headers
                    .iter()
                    .map(|h| RecordHeader {
                        name: h.name.clone(),
                        value: h.value.clone(),
                    })
                    .collect(),
                content,
            },
        })
    }
}

fn header_map(headers: &[HarHeader]) -> FieldMap<String> {
    headers
        .iter()
        .map(|h| (h.name.clone(), h.value.clone()))
        .collect()
}

fn record_cookie(cookie: &HarCookie) -> RecordCookie {
    RecordCookie {
        name: cookie.name.clone(),
        value: cookie.value.clone(),
        path: cookie.path.clone(),
        domain: cookie.domain.clone(),
        expires: cookie.expires.clone(),
        http_only: cookie.http_only,
        secure: cookie.secure,
    }
}

/// Parses an ISO-8601 capture timestamp.
pub fn parse_timestamp(index: usize, value: &str) -> Result<DateTime<FixedOffset>, EntryError> {
    let trimmed = value.trim();
    match DateTime::parse_from_rfc3339(trimmed) {
        Ok(ts) => Ok(ts),
        Err(source) => NAIVE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
            .map(|naive| naive.and_utc().fixed_offset())
            .ok_or_else(|| EntryError::Timestamp {
                index,
                value: value.to_string(),
                source,
            }),
    }
}
