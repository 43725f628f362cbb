//! Materializer tests against a temp output dir with deterministic names.

use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tempfile::TempDir;

use crate::har::HarContent;
use crate::mime::{Charset, ExtensionTable};
use crate::model::MaterializedContent;
use crate::pipeline::{ExcludedExtensions, Pipeline};
use crate::storage::{OutputDir, SequentialNames};

fn pipeline(excluded: ExcludedExtensions) -> (TempDir, Pipeline) {
    let tmp = tempfile::tempdir().unwrap();
    let output = OutputDir::with_names(tmp.path().join("out"), Box::new(SequentialNames::default()));
    let p = Pipeline::new(ExtensionTable::default(), excluded, output);
    (tmp, p)
}

fn content(size: Option<i64>, mime: Option<&str>, encoding: Option<&str>, text: Option<&str>) -> HarContent {
    HarContent {
        size,
        mime_type: mime.map(String::from),
        encoding: encoding.map(String::from),
        text: text.map(String::from),
    }
}

fn file_ref(m: MaterializedContent) -> std::path::PathBuf {
    match m {
        MaterializedContent::FileRef(p) => p,
        other => panic!("expected FileRef, got {other:?}"),
    }
}

#[test]
fn empty_or_missing_size_is_blank_inline() {
    let (tmp, mut p) = pipeline(ExcludedExtensions::none());
    for size in [None, Some(0), Some(-1)] {
        let c = content(size, Some("image/png"), Some("base64"), Some("iVBORw0KGgo="));
        assert_eq!(
            p.materialize(&c, "/logo.png").unwrap(),
            MaterializedContent::Inline(String::new())
        );
    }
    assert!(!tmp.path().join("out").exists());
}

#[test]
fn excluded_base64_json_is_inlined() {
    let (_tmp, mut p) = pipeline(ExcludedExtensions::default());
    let c = content(Some(15), Some("application/json"), Some("base64"), Some("eyJhIjoxfQ=="));
    assert_eq!(
        p.materialize(&c, "/api/thing").unwrap(),
        MaterializedContent::Inline(r#"{"a":1}"#.to_string())
    );
}

#[test]
fn non_excluded_json_is_extracted() {
    let (tmp, mut p) = pipeline(ExcludedExtensions::none());
    let c = content(Some(15), Some("application/json"), Some("base64"), Some("eyJhIjoxfQ=="));
    let path = file_ref(p.materialize(&c, "/api/thing").unwrap());
    assert_eq!(path, tmp.path().join("out").join("binary-00000000.json"));
    assert_eq!(fs::read(&path).unwrap(), br#"{"a":1}"#);
}

#[test]
fn plain_text_body_written_as_utf8() {
    let (_tmp, mut p) = pipeline(ExcludedExtensions::none());
    let c = content(Some(5), Some("text/html; charset=utf-8"), None, Some("<p>é</p>"));
    let path = file_ref(p.materialize(&c, "/").unwrap());
    assert!(path.to_string_lossy().ends_with(".html"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "<p>é</p>");
}

#[test]
fn excluded_plain_text_passes_through() {
    let (_tmp, mut p) = pipeline(ExcludedExtensions::parse_list("html"));
    let c = content(Some(9), Some("text/html"), None, Some("<b>hi</b>"));
    assert_eq!(
        p.materialize(&c, "/index").unwrap(),
        MaterializedContent::Inline("<b>hi</b>".to_string())
    );
}

#[test]
fn declared_charset_is_honoured() {
    let (_tmp, mut p) = pipeline(ExcludedExtensions::parse_list("txt"));
    let encoded = STANDARD.encode([0x63, 0x61, 0x66, 0xe9]);
    let c = content(Some(4), Some("text/plain; charset=ISO-8859-1"), Some("base64"), Some(&encoded));
    assert_eq!(
        p.materialize(&c, "/menu").unwrap(),
        MaterializedContent::Inline("café".to_string())
    );
}

#[test]
fn undecodable_bytes_fall_back_to_unknown_bin() {
    let (tmp, mut p) = pipeline(ExcludedExtensions::default());
    let bytes = [0xff, 0xfe, 0x00, 0x81];
    let encoded = STANDARD.encode(bytes);
    let c = content(Some(4), Some("application/json"), Some("base64"), Some(&encoded));
    let path = file_ref(p.materialize(&c, "/api").unwrap());
    assert_eq!(path, tmp.path().join("out").join("unknown-00000000.bin"));
    assert_eq!(fs::read(&path).unwrap(), bytes);
}

#[test]
fn malformed_base64_treated_as_text() {
    let (_tmp, mut p) = pipeline(ExcludedExtensions::default());
    let c = content(Some(3), Some("application/json"), Some("base64"), Some("{\"a\": !}"));
    assert_eq!(
        p.materialize(&c, "/api").unwrap(),
        MaterializedContent::Inline("{\"a\": !}".to_string())
    );

    let (_tmp2, mut p2) = pipeline(ExcludedExtensions::none());
    let path = file_ref(p2.materialize(&c, "/api").unwrap());
    assert_eq!(fs::read(&path).unwrap(), b"{\"a\": !}");
}

#[test]
fn url_suffix_picks_extension_when_registered() {
    let (_tmp, mut p) = pipeline(ExcludedExtensions::none());
    let c = content(Some(3), Some("text/plain"), None, Some("a,b"));
    let path = file_ref(p.materialize(&c, "/export/report.csv").unwrap());
    assert!(path.to_string_lossy().ends_with("binary-00000000.csv"));
}

#[test]
fn each_body_gets_its_own_file() {
    let (_tmp, mut p) = pipeline(ExcludedExtensions::none());
    let c = content(Some(1), Some("image/gif"), None, Some("x"));
    let a = file_ref(p.materialize(&c, "/a").unwrap());
    let b = file_ref(p.materialize(&c, "/b").unwrap());
    assert_ne!(a, b);
    assert!(a.exists() && b.exists());
}

fn assert_round_trip(bytes: &[u8], mime: &str, charset: Charset) {
    let (_tmp, mut p) = pipeline(ExcludedExtensions::parse_list("txt"));
    let encoded = STANDARD.encode(bytes);
    let c = content(Some(bytes.len() as i64), Some(mime), Some("base64"), Some(&encoded));
    match p.materialize(&c, "/r").unwrap() {
        MaterializedContent::Inline(text) => {
            assert_eq!(charset.encode(&text).as_deref(), Some(bytes));
        }
        MaterializedContent::FileRef(path) => {
            assert!(charset.decode(bytes).is_err());
            assert_eq!(fs::read(Path::new(&path)).unwrap(), bytes);
        }
    }
}

#[test]
fn base64_round_trip_through_excluded_extension() {
    assert_round_trip("plain ascii".as_bytes(), "text/plain", Charset::Utf8);
    assert_round_trip("ünïcödé ✓".as_bytes(), "text/plain; charset=utf-8", Charset::Utf8);
    assert_round_trip(&[0xc3, 0x28, 0xa0], "text/plain", Charset::Utf8);
    assert_round_trip(&[0x80, 0xff, 0x41], "text/plain; charset=latin-1", Charset::Latin1);
    assert_round_trip(&[0x41, 0x80], "text/plain; charset=us-ascii", Charset::Ascii);
    assert_round_trip(&[], "text/plain", Charset::Utf8);
    assert_round_trip(
        &[0x82, 0xA0, 0x82, 0xA2],
        "text/plain; charset=shift_jis",
        Charset::Other(encoding_rs::SHIFT_JIS),
    );
}

#[test]
fn gbk_body_is_inlined() {
    let (tmp, mut p) = pipeline(ExcludedExtensions::parse_list("txt"));
    let encoded = STANDARD.encode([0xD6, 0xD0, 0xCE, 0xC4]);
    let c = content(Some(4), Some("text/plain; charset=gbk"), Some("base64"), Some(&encoded));
    assert_eq!(
        p.materialize(&c, "/zh").unwrap(),
        MaterializedContent::Inline("中文".to_string())
    );
    assert!(!tmp.path().join("out").exists());
}

#[test]
fn windows_1252_body_is_inlined() {
    let (_tmp, mut p) = pipeline(ExcludedExtensions::parse_list("txt"));
    let encoded = STANDARD.encode([0x63, 0x61, 0x66, 0xE9, 0x20, 0x80]);
    let c = content(
        Some(6),
        Some("text/plain; charset=windows-1252"),
        Some("base64"),
        Some(&encoded),
    );
    assert_eq!(
        p.materialize(&c, "/menu").unwrap(),
        MaterializedContent::Inline("café €".to_string())
    );
}
