//! Wire encoding for request bodies.
//!
//! Bodies are written as compact JSON (no whitespace between tokens) with
//! every non-ASCII character escaped as `\uXXXX`, so the payload is pure
//! ASCII on the wire.

use std::io;

use serde::Serialize;
use serde_json::ser::Formatter;

/// Compact formatter that escapes non-ASCII characters.
#[derive(Clone, Copy, Debug, Default)]
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut start = 0;
        for (index, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(&fragment.as_bytes()[start..index])?;
            let mut units = [0_u16; 2];
            for unit in ch.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{unit:04x}")?;
            }
            start = index + ch.len_utf8();
        }
        writer.write_all(&fragment.as_bytes()[start..])
    }
}

/// Serializes `value` to compact, ASCII-only JSON.
///
/// # Errors
///
/// Returns [`serde_json::Error`] if `value` cannot be represented as JSON
/// (e.g. a map with non-string keys).
///
/// # Example
///
/// ```rust
/// use youcan_store::clients::to_json;
/// use serde_json::json;
///
/// let body = to_json(&json!({"seller_note": "livré", "tracking_number": null})).unwrap();
/// assert_eq!(body, r#"{"seller_note":"livr\u00e9","tracking_number":null}"#);
/// ```
pub fn to_json<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: ?Sized + Serialize,
{
    let mut buffer = Vec::with_capacity(128);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, AsciiFormatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer)
        .map_err(|error| serde_json::Error::io(io::Error::new(io::ErrorKind::InvalidData, error)))
}
