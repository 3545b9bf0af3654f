//! Compatibility shim for storage-format request bodies.
//!
//! Confluence stores page bodies in its XHTML storage representation and
//! expects `<`, `>` and `&` to arrive as literal characters. Some JSON
//! encoders emit them as `\u003c`, `\u003e` and `\u0026`. Every write body is
//! passed through [`unescape_markup`] after serialization so the payload
//! always carries the literal characters, whatever the encoder does.

use crate::error::AppError;
use serde::{Deserialize, Deserializer, Serialize};

/// Serializes `value` to JSON and rewrites markup escapes as literal characters
///
/// # Errors
/// Returns [`AppError::Serialization`] if the value cannot be serialized.
pub fn to_storage_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, AppError> {
    let encoded = serde_json::to_vec(value)?;
    Ok(unescape_markup(&encoded))
}

/// Replaces `\u003c`, `\u003e` and `\u0026` escapes (any hex case) in a JSON
/// document with `<`, `>` and `&`.
///
/// Other escape sequences are copied untouched. An escaped backslash followed
/// by `u003c` is text, not an escape, and is left as is.
#[must_use]
pub fn unescape_markup(json: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(json.len());
    let mut i = 0;
    while i < json.len() {
        let byte = json[i];
        if byte != b'\\' {
            out.push(byte);
            i += 1;
            continue;
        }
        if let Some(literal) = markup_escape(&json[i..]) {
            out.push(literal);
            i += 6;
            continue;
        }
        out.push(byte);
        if let Some(&next) = json.get(i + 1) {
            out.push(next);
        }
        i += 2;
    }
    out
}

fn markup_escape(sequence: &[u8]) -> Option<u8> {
    let sequence = sequence.get(..6)?;
    if sequence[1] != b'u' {
        return None;
    }
    let code = sequence[2..].to_ascii_lowercase();
    match code.as_slice() {
        b"003c" => Some(b'<'),
        b"003e" => Some(b'>'),
        b"0026" => Some(b'&'),
        _ => None,
    }
}

/// Deserializes an explicit `null` as the default value of `T`
///
/// Used on record fields together with `#[serde(default)]`, so a missing
/// field and a `null` field both decode to the zero value.
pub fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let opt = Option::<T>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}
