//! JSON text encoding for structured query parameter values.
//!
//! The scoring server receives `voter_weights` as a single query string value
//! holding JSON text. The server side was written against text shaped like
//! `{"alice": 10, "bob": 5}`: a space after every `,` and `:` separator, and
//! every non-ASCII character escaped as `\uXXXX`. [`to_json_text`] produces
//! exactly that shape from any `Serialize` value.

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use std::io;

/// serde_json formatter that writes `", "` and `": "` separators and escapes
/// non-ASCII characters.
#[derive(Debug, Default, Clone, Copy)]
struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if ch.is_ascii() {
                writer.write_all(&[ch as u8])?;
            } else {
                // Characters above the BMP become a surrogate pair
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

/// Encodes `value` as JSON text with spaced separators and ASCII-only output.
///
/// Key order follows the value's own `Serialize` order. A `BTreeMap` and a
/// `serde_json::Value` object (including one built with `json!`) come out
/// sorted by key, whatever order they were written in. To send keys in a
/// fixed order, pass a `#[derive(Serialize)]` struct; it keeps field
/// declaration order.
///
/// # Errors
///
/// Returns an error if `value` fails to serialize (for example a map with
/// non-string keys).
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
///
/// let weights = BTreeMap::from([("alice", 10), ("bob", 5)]);
/// let text = mcp_defi_rs::wire_format::to_json_text(&weights).unwrap();
/// assert_eq!(text, r#"{"alice": 10, "bob": 5}"#);
/// ```
pub fn to_json_text<T>(value: &T) -> Result<String, serde_json::Error>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::with_capacity(64);
    let mut serializer = Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    value.serialize(&mut serializer)?;
    // Output is pure ASCII, so this never replaces anything
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
