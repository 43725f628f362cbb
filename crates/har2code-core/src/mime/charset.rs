//! Character sets for response bodies and HAR files.
//!
//! UTF-8, ASCII, Latin-1 and UTF-16 are handled here so `iso-8859-1` stays
//! true Latin-1 (the WHATWG table maps it to windows-1252). Every other
//! label goes through `encoding_rs`.

use encoding_rs::Encoding;
use std::fmt;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CharsetError {
    #[error("unknown character set: {0}")]
    UnknownLabel(String),

    #[error("bytes are not valid {charset}")]
    Invalid { charset: Charset },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    /// UTF-8 with an optional leading byte-order mark that is stripped.
    Utf8Sig,
    Ascii,
    Latin1,
    /// UTF-16 with byte-order mark detection; little-endian without one.
    Utf16,
    Utf16Le,
    Utf16Be,
    /// Any other WHATWG encoding (`gbk`, `windows-1252`, `shift_jis`, ...).
    Other(&'static Encoding),
}

impl Charset {
    /// Looks up a charset label (`UTF-8`, `latin_1`, `utf16le`, ...).
    pub fn from_label(label: &str) -> Result<Self, CharsetError> {
        let key: String = label
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        let charset = match key.as_str() {
            "utf8" | "u8" => Charset::Utf8,
            "utf8sig" => Charset::Utf8Sig,
            "ascii" | "usascii" | "646" => Charset::Ascii,
            "latin1" | "latin" | "l1" | "iso88591" | "iso8859" | "8859" => Charset::Latin1,
            "utf16" | "u16" => Charset::Utf16,
            "utf16le" => Charset::Utf16Le,
            "utf16be" => Charset::Utf16Be,
            _ => {
                return Encoding::for_label(label.trim().as_bytes())
                    .map(Charset::Other)
                    .ok_or_else(|| CharsetError::UnknownLabel(label.to_string()));
            }
        };
        Ok(charset)
    }

    pub fn decode(self, bytes: &[u8]) -> Result<String, CharsetError> {
        let invalid = || CharsetError::Invalid { charset: self };
        match self {
            Charset::Utf8 => String::from_utf8(bytes.to_vec()).map_err(|_| invalid()),
            Charset::Utf8Sig => {
                let body = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
                String::from_utf8(body.to_vec()).map_err(|_| invalid())
            }
            Charset::Ascii => {
                if bytes.is_ascii() {
                    Ok(bytes.iter().map(|&b| b as char).collect())
                } else {
                    Err(invalid())
                }
            }
            Charset::Latin1 => Ok(bytes.iter().map(|&b| b as char).collect()),
            Charset::Utf16 => match bytes {
                [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes).ok_or_else(invalid),
                [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes).ok_or_else(invalid),
                _ => decode_utf16(bytes, u16::from_le_bytes).ok_or_else(invalid),
            },
            Charset::Utf16Le => decode_utf16(bytes, u16::from_le_bytes).ok_or_else(invalid),
            Charset::Utf16Be => decode_utf16(bytes, u16::from_be_bytes).ok_or_else(invalid),
            Charset::Other(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(|text| text.into_owned())
                .ok_or_else(invalid),
        }
    }

    pub fn encode(self, text: &str) -> Option<Vec<u8>> {
        match self {
            Charset::Utf8 | Charset::Utf8Sig => Some(text.as_bytes().to_vec()),
            Charset::Ascii => text.is_ascii().then(|| text.as_bytes().to_vec()),
            Charset::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).ok())
                .collect(),
            Charset::Utf16 | Charset::Utf16Le => {
                Some(text.encode_utf16().flat_map(u16::to_le_bytes).collect())
            }
            Charset::Utf16Be => Some(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            Charset::Other(encoding) => {
                let (bytes, _, unmappable) = encoding.encode(text);
                (!unmappable).then(|| bytes.into_owned())
            }
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Charset::Other(encoding) => return f.write_str(&encoding.name().to_ascii_lowercase()),
            Charset::Utf8 => "utf-8",
            Charset::Utf8Sig => "utf-8-sig",
            Charset::Ascii => "ascii",
            Charset::Latin1 => "latin-1",
            Charset::Utf16 => "utf-16",
            Charset::Utf16Le => "utf-16-le",
            Charset::Utf16Be => "utf-16-be",
        };
        f.write_str(name)
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }
    let units = bytes.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    char::decode_utf16(units).collect::<Result<String, _>>().ok()
}
