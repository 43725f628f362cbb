//! har2code: HAR captures to normalized request records and Python client
//! code.
//!
//! [`Pipeline`] carries the per-run state (extension table, exclusion set,
//! output dir); [`Pipeline::assemble`] turns HAR entries into time-ordered
//! [`model::NormalizedRecord`]s, and [`render::render`] prints them.

pub mod config;
pub mod logging;

pub mod assemble;
mod body;
mod codec;
pub mod convert;
pub mod har;
mod materialize;
pub mod mime;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod storage;
pub mod url_model;

pub use convert::{convert, convert_with_names, ConvertOptions};
pub use pipeline::{ExcludedExtensions, Pipeline};
