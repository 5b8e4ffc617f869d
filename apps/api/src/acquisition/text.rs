use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

/// Decodes an uploaded plain-text document.
///
/// UTF-8 first. Falls back to Latin-1 when the bytes are not valid UTF-8 or
/// decode to nothing but whitespace.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => {
            let text = text.strip_prefix(UTF8_BOM).unwrap_or(text);
            if text.trim().is_empty() {
                decode_latin1(bytes)
            } else {
                text.to_string()
            }
        }
        Err(e) => {
            debug!(error = %e, "Upload is not valid UTF-8, decoding as Latin-1");
            decode_latin1(bytes)
        }
    }
}

/// ISO-8859-1: every byte maps to the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}
