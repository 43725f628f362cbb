//! HAR (HTTP Archive) loading.
//!
//! Maps a capture onto typed structures. Fields the pipeline never reads are
//! ignored, and optional HAR members stay optional so partial captures from
//! proxies still load.

mod load;
mod parse;

pub use load::{load_archive, parse_archive};
pub use parse::{
    HarContent, HarCookie, HarEntry, HarHeader, HarLog, HarParam, HarPostData, HarQueryParam,
    HarRequest, HarResponse, HarRoot,
};
