//! Byte-to-text decoding for chat exports.
//!
//! Exports are frequently mis-encoded: mail clients re-encode attachments as
//! UTF-16, some devices prepend a BOM, some strip it. The decoder tries the
//! configured encodings in priority order and accepts the first clean decode.
//! If everything fails it falls back to lossy UTF-8 rather than rejecting the
//! file, because partial recovery beats total rejection for this input class.

use tracing::{debug, warn};

use crate::config::TextEncoding;
use crate::error::Result;

/// Decodes raw export bytes into lines, trying `encodings` in order.
///
/// A BOM, when present, short-circuits the search to the encoding it
/// indicates. An encoding "succeeds" only if the whole input decodes without
/// replacement characters. The lossy UTF-8 fallback cannot fail, so this
/// returns `Err` only for future encodings that have no fallback path.
pub fn decode_bytes(bytes: &[u8], encodings: &[TextEncoding]) -> Result<Vec<String>> {
    if let Some((encoding, stripped)) = sniff_bom(bytes) {
        let (text, had_errors) = encoding_for(encoding).decode_without_bom_handling(stripped);
        if !had_errors {
            debug!(encoding = ?encoding, "decoded via BOM");
            return Ok(split_lines(&text));
        }
    }

    for &encoding in encodings {
        let (text, had_errors) = encoding_for(encoding).decode_without_bom_handling(bytes);
        if !had_errors {
            debug!(encoding = ?encoding, "decoded successfully");
            return Ok(split_lines(&text));
        }
        debug!(encoding = ?encoding, "decode attempt failed");
    }

    warn!("all encodings failed, falling back to lossy UTF-8");
    let text = String::from_utf8_lossy(bytes);
    Ok(split_lines(&text))
}

/// Splits already-decoded text into lines without any decoding attempt.
///
/// Recognizes `\n`, `\r\n`, and lone `\r` as line boundaries; old Mac-style
/// exports and transcripts mangled in transit use CR alone. A trailing
/// terminator does not produce a final empty line.
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split_terminator(['\n', '\r'])
        .map(str::to_owned)
        .collect()
}

fn encoding_for(encoding: TextEncoding) -> &'static encoding_rs::Encoding {
    match encoding {
        TextEncoding::Utf8 => encoding_rs::UTF_8,
        TextEncoding::Utf16Le => encoding_rs::UTF_16LE,
        TextEncoding::Utf16Be => encoding_rs::UTF_16BE,
    }
}

/// Returns the encoding a BOM indicates plus the bytes after the BOM.
fn sniff_bom(bytes: &[u8]) -> Option<(TextEncoding, &[u8])> {
    if bytes.starts_with(&[0xEF, 0xBB, 0xBF]) {
        Some((TextEncoding::Utf8, &bytes[3..]))
    } else if bytes.starts_with(&[0xFF, 0xFE]) {
        Some((TextEncoding::Utf16Le, &bytes[2..]))
    } else if bytes.starts_with(&[0xFE, 0xFF]) {
        Some((TextEncoding::Utf16Be, &bytes[2..]))
    } else {
        None
    }
}
