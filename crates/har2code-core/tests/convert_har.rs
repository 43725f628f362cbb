//! End to end: HAR file on disk → generated code and extracted bodies.

mod common;

use std::fs;

use common::har_fixture::{get, response, HarFixture};
use har2code_core::config::Har2CodeConfig;
use har2code_core::render::Library;
use har2code_core::storage::SequentialNames;
use har2code_core::{convert_with_names, ConvertOptions, ExcludedExtensions};
use serde_json::json;
use tempfile::tempdir;

fn options(dir: &std::path::Path, har: std::path::PathBuf) -> ConvertOptions {
    let mut opts = ConvertOptions::from_config(har, &Har2CodeConfig::default());
    opts.output_dir = dir.join("out");
    opts.fallback_mime_map = dir.join("no-overrides.json");
    opts
}

#[test]
fn converts_mixed_capture_in_time_order() {
    let dir = tempdir().unwrap();
    let har = HarFixture::new()
        .entry(
            "2024-05-01T10:00:02.000Z",
            get("https://api.test/v1/user"),
            response(
                200,
                json!({ "size": 15, "mimeType": "application/json", "encoding": "base64", "text": "eyJhIjoxfQ==" }),
            ),
        )
        .entry(
            "2024-05-01T10:00:01.000Z",
            json!({
                "method": "POST",
                "url": "https://api.test/upload",
                "headers": [],
                "postData": {
                    "mimeType": "multipart/form-data; boundary=b",
                    "params": [
                        { "name": "upload", "fileName": "x.bin", "value": "AAEC" },
                        { "name": "token", "value": "abc" }
                    ]
                }
            }),
            response(204, json!({ "size": 0 })),
        )
        .entry(
            "2024-05-01T10:00:03.000Z",
            get("https://cdn.test/logo.png"),
            response(
                200,
                json!({ "size": 4, "mimeType": "image/png", "encoding": "base64", "text": "iVBORw==" }),
            ),
        )
        .write_to(dir.path());

    let opts = options(dir.path(), har);
    let code = convert_with_names(&opts, Box::new(SequentialNames::default())).unwrap();

    let upload = code.find("https://api.test/upload").unwrap();
    let user = code.find("https://api.test/v1/user").unwrap();
    let logo = code.find("https://cdn.test/logo.png").unwrap();
    assert!(upload < user && user < logo);

    assert!(code.starts_with("import requests\n"));
    assert!(code.contains("data = {'token': 'abc'}"));
    assert!(code.contains("'upload': ('x.bin', open("));
    assert!(code.contains("\n{\"a\":1}\n"));

    let out = dir.path().join("out");
    assert_eq!(fs::read(out.join("binary-00000000-x.bin")).unwrap(), vec![0, 1, 2]);
    assert_eq!(fs::read(out.join("binary-00000001.png")).unwrap(), vec![0x89, b'P', b'N', b'G']);
    assert_eq!(fs::read_to_string(out.join(".gitignore")).unwrap(), "*");
    assert!(code.contains(&format!("=== Save to file: {} ===", out.join("binary-00000001.png").display())));
}

#[test]
fn empty_exclusions_extract_json_and_httpx_style() {
    let dir = tempdir().unwrap();
    let har = HarFixture::new()
        .entry(
            "2024-05-01T10:00:00Z",
            get("https://api.test/v1/user"),
            response(
                200,
                json!({ "size": 15, "mimeType": "application/json", "encoding": "base64", "text": "eyJhIjoxfQ==" }),
            ),
        )
        .write_to(dir.path());

    let mut opts = options(dir.path(), har);
    opts.excluded = ExcludedExtensions::none();
    opts.library = Library::Httpx;
    let code = convert_with_names(&opts, Box::new(SequentialNames::default())).unwrap();

    let file = dir.path().join("out").join("binary-00000000.json");
    assert_eq!(fs::read(&file).unwrap(), br#"{"a":1}"#);
    assert!(code.starts_with("import httpx\n"));
    assert!(code.contains("with httpx.Client() as client:"));
}

#[test]
fn override_table_changes_extracted_extension() {
    let dir = tempdir().unwrap();
    let har = HarFixture::new()
        .entry(
            "2024-05-01T10:00:00Z",
            get("https://api.test/v1/model"),
            response(200, json!({ "size": 2, "mimeType": "application/x-model", "text": "mm" })),
        )
        .write_to(dir.path());

    let mut opts = options(dir.path(), har);
    opts.fallback_mime_map = dir.path().join("mime.json");
    fs::write(&opts.fallback_mime_map, r#"{"application/x-model": ".mdl"}"#).unwrap();
    convert_with_names(&opts, Box::new(SequentialNames::default())).unwrap();
    assert!(dir.path().join("out").join("binary-00000000.mdl").exists());
}

#[test]
fn malformed_override_file_is_fatal() {
    let dir = tempdir().unwrap();
    let har = HarFixture::new().write_to(dir.path());
    let mut opts = options(dir.path(), har);
    opts.fallback_mime_map = dir.path().join("mime.json");
    fs::write(&opts.fallback_mime_map, "[1, 2").unwrap();
    let err = convert_with_names(&opts, Box::new(SequentialNames::default())).unwrap_err();
    assert!(format!("{err:#}").contains("mime.json"));
}

#[test]
fn bad_timestamp_produces_no_output() {
    let dir = tempdir().unwrap();
    let har = HarFixture::new()
        .entry("not-a-date", get("https://a.test/"), response(200, json!({ "size": 0 })))
        .write_to(dir.path());
    let opts = options(dir.path(), har);
    let err = convert_with_names(&opts, Box::new(SequentialNames::default())).unwrap_err();
    assert!(format!("{err:#}").contains("not-a-date"));
}
