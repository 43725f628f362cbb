//! Pinned MIME registry and built-in fallback table.
//!
//! The registry is compiled in rather than read from the host's
//! `/etc/mime.types`, so extension resolution is the same on every machine.
//! Bump `REGISTRY_VERSION` whenever an entry changes.

pub const REGISTRY_VERSION: u32 = 1;

/// MIME type → known extensions, preferred extension first.
static REGISTRY: &[(&str, &[&str])] = &[
    ("application/javascript", &[".js", ".mjs"]),
    ("application/json", &[".json"]),
    ("application/manifest+json", &[".webmanifest"]),
    ("application/msword", &[".doc", ".dot", ".wiz"]),
    ("application/octet-stream", &[".bin", ".a", ".dll", ".exe", ".o", ".obj", ".so"]),
    ("application/oda", &[".oda"]),
    ("application/pdf", &[".pdf"]),
    ("application/pkcs7-mime", &[".p7c"]),
    ("application/postscript", &[".ps", ".ai", ".eps"]),
    ("application/rtf", &[".rtf"]),
    ("application/trig", &[".trig"]),
    ("application/vnd.apple.mpegurl", &[".m3u", ".m3u8"]),
    ("application/vnd.ms-excel", &[".xls", ".xlb"]),
    ("application/vnd.ms-fontobject", &[".eot"]),
    ("application/vnd.ms-powerpoint", &[".ppt", ".pot", ".ppa", ".pps", ".pwz"]),
    (
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        &[".pptx"],
    ),
    (
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        &[".xlsx"],
    ),
    (
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        &[".docx"],
    ),
    ("application/wasm", &[".wasm"]),
    ("application/x-bcpio", &[".bcpio"]),
    ("application/x-cpio", &[".cpio"]),
    ("application/x-csh", &[".csh"]),
    ("application/x-dvi", &[".dvi"]),
    ("application/x-gtar", &[".gtar"]),
    ("application/x-hdf", &[".hdf"]),
    ("application/x-hdf5", &[".h5"]),
    ("application/x-latex", &[".latex"]),
    ("application/x-mif", &[".mif"]),
    ("application/x-netcdf", &[".cdf", ".nc"]),
    ("application/x-pkcs12", &[".p12", ".pfx"]),
    ("application/x-pn-realaudio", &[".ram"]),
    ("application/x-python-code", &[".pyc", ".pyo"]),
    ("application/x-sh", &[".sh"]),
    ("application/x-shar", &[".shar"]),
    ("application/x-shockwave-flash", &[".swf"]),
    ("application/x-sv4cpio", &[".sv4cpio"]),
    ("application/x-sv4crc", &[".sv4crc"]),
    ("application/x-tar", &[".tar"]),
    ("application/x-tcl", &[".tcl"]),
    ("application/x-tex", &[".tex"]),
    ("application/x-texinfo", &[".texi", ".texinfo"]),
    ("application/x-troff", &[".tr", ".roff", ".t"]),
    ("application/x-troff-man", &[".man"]),
    ("application/x-troff-me", &[".me"]),
    ("application/x-troff-ms", &[".ms"]),
    ("application/x-ustar", &[".ustar"]),
    ("application/x-wais-source", &[".src"]),
    ("application/xml", &[".xml", ".xsl", ".rdf", ".wsdl", ".xpdl"]),
    ("application/zip", &[".zip"]),
    ("audio/3gpp", &[".3gp"]),
    ("audio/3gpp2", &[".3g2"]),
    ("audio/aac", &[".aac", ".adts", ".loas", ".ass"]),
    ("audio/basic", &[".au", ".snd"]),
    ("audio/mpeg", &[".mp3", ".mp2"]),
    ("audio/opus", &[".opus"]),
    ("audio/x-aiff", &[".aif", ".aifc", ".aiff"]),
    ("audio/x-pn-realaudio", &[".ra"]),
    ("audio/x-wav", &[".wav"]),
    ("font/otf", &[".otf"]),
    ("font/ttf", &[".ttf"]),
    ("font/woff", &[".woff"]),
    ("font/woff2", &[".woff2"]),
    ("image/avif", &[".avif"]),
    ("image/bmp", &[".bmp"]),
    ("image/gif", &[".gif"]),
    ("image/ief", &[".ief"]),
    ("image/jpeg", &[".jpg", ".jpe", ".jpeg"]),
    ("image/png", &[".png"]),
    ("image/svg+xml", &[".svg"]),
    ("image/tiff", &[".tiff", ".tif"]),
    ("image/vnd.microsoft.icon", &[".ico"]),
    ("image/webp", &[".webp"]),
    ("image/x-cmu-raster", &[".ras"]),
    ("image/x-portable-anymap", &[".pnm"]),
    ("image/x-portable-bitmap", &[".pbm"]),
    ("image/x-portable-graymap", &[".pgm"]),
    ("image/x-portable-pixmap", &[".ppm"]),
    ("image/x-rgb", &[".rgb"]),
    ("image/x-xbitmap", &[".xbm"]),
    ("image/x-xpixmap", &[".xpm"]),
    ("image/x-xwindowdump", &[".xwd"]),
    ("message/rfc822", &[".eml", ".mht", ".mhtml", ".nws"]),
    ("text/css", &[".css"]),
    ("text/csv", &[".csv"]),
    ("text/html", &[".html", ".htm"]),
    ("text/javascript", &[".js", ".mjs"]),
    ("text/markdown", &[".md", ".markdown"]),
    ("text/plain", &[".txt", ".bat", ".c", ".h", ".ksh", ".pl", ".srt"]),
    ("text/richtext", &[".rtx"]),
    ("text/tab-separated-values", &[".tsv"]),
    ("text/vtt", &[".vtt"]),
    ("text/x-python", &[".py"]),
    ("text/x-setext", &[".etx"]),
    ("text/x-sgml", &[".sgm", ".sgml"]),
    ("text/x-vcard", &[".vcf"]),
    ("text/xml", &[".xml"]),
    ("video/mp4", &[".mp4"]),
    ("video/mpeg", &[".mpeg", ".m1v", ".mpa", ".mpe", ".mpg"]),
    ("video/quicktime", &[".mov", ".qt"]),
    ("video/webm", &[".webm"]),
    ("video/x-msvideo", &[".avi"]),
    ("video/x-sgi-movie", &[".movie"]),
];

const OFFICE_DOCUMENT: &str = "application/vnd.openxmlformats-officedocument";

/// Built-in fallback table for types the registry does not know (or knows
/// under a less useful extension). User overrides are layered on top.
pub fn builtin_fallback() -> Vec<(String, String)> {
    let fixed = [
        ("application/json", ".json"),
        ("application/javascript", ".js"),
        ("application/xml", ".xml"),
        ("text/html", ".html"),
        ("text/plain", ".txt"),
        ("text/css", ".css"),
        ("text/markdown", ".md"),
        ("text/csv", ".csv"),
        ("application/x-www-form-urlencoded", ".txt"),
        ("application/octet-stream", ".bin"),
        ("application/x-protobuf", ".pb"),
        ("application/x-rar-compressed", ".rar"),
        ("application/zip", ".zip"),
        ("application/pdf", ".pdf"),
        ("image/jpeg", ".jpg"),
        ("image/png", ".png"),
        ("image/gif", ".gif"),
        ("image/webp", ".webp"),
        ("application/msword", ".doc"),
        ("application/vnd.ms-excel", ".xls"),
        ("application/vnd.ms-powerpoint", ".ppt"),
    ];
    let office = [
        (".spreadsheetml.sheet", ".xlsx"),
        (".wordprocessingml.document", ".docx"),
        (".presentationml.presentation", ".pptx"),
    ];
    fixed
        .iter()
        .map(|(m, e)| (m.to_string(), e.to_string()))
        .chain(
            office
                .iter()
                .map(|(suffix, e)| (format!("{OFFICE_DOCUMENT}{suffix}"), e.to_string())),
        )
        .collect()
}

/// Preferred registry extension for a (lower-cased, parameter-free) MIME type.
pub fn registry_extension(mime: &str) -> Option<&'static str> {
    REGISTRY
        .iter()
        .find(|(m, _)| *m == mime)
        .and_then(|(_, exts)| exts.first().copied())
}

/// True if `ext` (with leading dot, lower-cased) belongs to any registry type.
pub fn is_registered_extension(ext: &str) -> bool {
    REGISTRY
        .iter()
        .any(|(_, exts)| exts.iter().any(|e| *e == ext))
}
