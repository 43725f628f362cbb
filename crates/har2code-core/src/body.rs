//! Request body decoding by declared media type.

use anyhow::Result;

use crate::codec::decode_base64;
use crate::har::{HarParam, HarPostData};
use crate::mime::MediaType;
use crate::model::{BodyData, DecodedBody, FieldMap, FieldValue, UploadedFile};
use crate::pipeline::Pipeline;
use crate::url_model::sanitize_upload_name;

impl Pipeline {
    /// Decodes a posted-data block into `data` / `json` / `files`.
    ///
    /// JSON that fails to parse is kept as text. Multipart file parts are
    /// written to the output dir; their content is base64 when the capture
    /// tool encoded it, raw text otherwise. The only error is failing to
    /// write such a file.
    pub fn decode_body(&mut self, post_data: Option<&HarPostData>) -> Result<DecodedBody> {
        let Some(post) = post_data else {
            return Ok(DecodedBody::default());
        };
        let text = post.text.as_deref();
        let essence = post
            .mime_type
            .as_deref()
            .and_then(MediaType::parse)
            .map(|mt| mt.essence);

        let Some(essence) = essence else {
            return Ok(DecodedBody {
                data: text.map(|t| BodyData::Text(t.to_string())),
                ..Default::default()
            });
        };

        let body = if essence.starts_with("application/json") {
            decode_json(text)
        } else if essence.starts_with("application/x-www-form-urlencoded") {
            DecodedBody {
                data: Some(BodyData::Fields(parse_form(text.unwrap_or_default()))),
                ..Default::default()
            }
        } else if essence.starts_with("multipart/form-data") {
            self.decode_multipart(post.params.as_deref().unwrap_or_default())?
        } else {
            DecodedBody {
                data: text
                    .filter(|t| !t.is_empty())
                    .map(|t| BodyData::Text(t.to_string())),
                ..Default::default()
            }
        };
        Ok(body)
    }

    fn decode_multipart(&mut self, params: &[HarParam]) -> Result<DecodedBody> {
        let mut fields = FieldMap::new();
        let mut files = FieldMap::new();
        for param in params {
            let value = param.value.as_deref().unwrap_or_default();
            match param.file_name.as_deref() {
                Some(file_name) if !file_name.is_empty() => {
                    let bytes = decode_base64(value).unwrap_or_else(|e| {
                        tracing::debug!("upload {file_name} is not base64 ({e}); writing raw value");
                        value.as_bytes().to_vec()
                    });
                    let suffix = format!("-{}", sanitize_upload_name(file_name));
                    let path = self.output.write_unique("binary", &suffix, &bytes)?;
                    files.insert(
                        param.name.clone(),
                        UploadedFile {
                            file_name: file_name.to_string(),
                            path,
                        },
                    );
                }
                _ => fields.insert(param.name.clone(), FieldValue::Single(value.to_string())),
            }
        }
        Ok(DecodedBody {
            data: Some(BodyData::Fields(fields)),
            json: None,
            files: Some(files),
        })
    }
}

fn decode_json(text: Option<&str>) -> DecodedBody {
    match serde_json::from_str::<serde_json::Value>(text.unwrap_or_default()) {
        Ok(value) => DecodedBody {
            json: Some(value),
            ..Default::default()
        },
        Err(e) => {
            tracing::debug!("JSON request body does not parse ({e}); keeping text");
            DecodedBody {
                data: text.map(|t| BodyData::Text(t.to_string())),
                ..Default::default()
            }
        }
    }
}

/// URL-encoded pairs; repeated keys keep all values in order, blank values
/// are dropped.
fn parse_form(text: &str) -> FieldMap<FieldValue> {
    let mut grouped: FieldMap<Vec<String>> = FieldMap::new();
    for (key, value) in url::form_urlencoded::parse(text.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        match grouped.get_mut(&key) {
            Some(values) => values.push(value.into_owned()),
            None => grouped.insert(key.into_owned(), vec![value.into_owned()]),
        }
    }
    grouped
        .iter()
        .map(|(k, values)| {
            let value = match values.as_slice() {
                [single] => FieldValue::Single(single.clone()),
                _ => FieldValue::Multiple(values.clone()),
            };
            (k, value)
        })
        .collect()
}
