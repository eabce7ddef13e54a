//! URL-embeddable transport form.
//!
//! `persisted JSON -> raw DEFLATE -> base64url without padding`. Decoding
//! also accepts the standard base64 alphabet and padding, and payloads that
//! were never compressed (plain JSON), which is what older share links carry.

use std::io::{Read, Write};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use counterpick_foundation::{Error, ErrorKind, Result};
use flate2::Compression;
use flate2::read::DeflateDecoder;
use flate2::write::DeflateEncoder;

/// Compresses text with raw DEFLATE (no zlib or gzip header).
///
/// # Errors
///
/// Returns an error if the encoder fails.
pub fn compress(text: &str) -> Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(text.as_bytes())
        .map_err(|e| Error::new(ErrorKind::Compression(format!("deflate failed: {e}"))))?;
    encoder
        .finish()
        .map_err(|e| Error::new(ErrorKind::Compression(format!("deflate failed: {e}"))))
}

/// Inflates raw DEFLATE bytes back to UTF-8 text.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid stream or not UTF-8.
pub fn decompress(bytes: &[u8]) -> Result<String> {
    let mut text = String::new();
    DeflateDecoder::new(bytes)
        .read_to_string(&mut text)
        .map_err(|e| Error::new(ErrorKind::Compression(format!("inflate failed: {e}"))))?;
    Ok(text)
}

/// Encodes persisted JSON as a transport payload.
///
/// # Errors
///
/// Returns an error if compression fails.
pub fn encode(json: &str) -> Result<String> {
    Ok(URL_SAFE_NO_PAD.encode(compress(json)?))
}

/// Decodes a transport payload back to persisted JSON.
///
/// Tries inflate first; if that fails or does not yield JSON, the decoded
/// bytes are taken as uncompressed JSON text.
///
/// # Errors
///
/// Returns a decode error if the payload is not base64 or the fallback bytes
/// are not UTF-8.
pub fn decode(payload: &str) -> Result<String> {
    let normalized: String = payload
        .trim()
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    let bytes = URL_SAFE_NO_PAD
        .decode(normalized.as_bytes())
        .map_err(|e| Error::decode(format!("invalid base64 payload: {e}")))?;

    let inflated = decompress(&bytes)
        .ok()
        .filter(|text| serde_json::from_str::<serde_json::Value>(text).is_ok());
    if let Some(text) = inflated {
        return Ok(text);
    }
    tracing::debug!("payload is not deflated, reading as plain JSON");
    String::from_utf8(bytes).map_err(|e| Error::decode(format!("payload is not UTF-8: {e}")))
}
