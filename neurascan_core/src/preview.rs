//! Preview data URLs.
//!
//! The preview is the uploaded bytes, base64-encoded into a `data:` URL so the
//! page can show it without storing anything.

use base64::{Engine, engine::general_purpose::STANDARD};

/// Encode bytes as `data:<mime>;base64,<payload>`.
///
/// An empty MIME type becomes `application/octet-stream`, which is what a
/// browser `FileReader` emits for untyped files.
pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    let mime = mime_type.trim();
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Split a base64 data URL back into MIME type and bytes.
pub fn decode_data_url(data_url: &str) -> Option<(String, Vec<u8>)> {
    let rest = data_url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime = header.strip_suffix(";base64")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}

/// MIME type a browser would report for a file name.
///
/// Unknown extensions yield an empty string, as `File.type` does.
pub fn guess_mime_type(file_name: &str) -> &'static str {
    let ext = match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return "",
    };
    match ext.as_str() {
        "jpg" | "jpeg" | "jfif" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "webp" => "image/webp",
        "tif" | "tiff" => "image/tiff",
        "svg" => "image/svg+xml",
        "dcm" => "application/dicom",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "",
    }
}
