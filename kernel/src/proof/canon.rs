//! Canonical JSON bytes: the single serialization-for-hashing implementation.
//!
//! All digests over JSON artifacts (search graphs, solve reports) go through
//! [`canonical_json_bytes`].
//!
//! # Canonicalization rules
//!
//! 1. Object keys are sorted lexicographically (byte order), independent of
//!    how `serde_json::Map` happens to be backed.
//! 2. Compact form, no whitespace: `{"a":1,"b":2}`.
//! 3. Strings use `serde_json`'s RFC 8259 escaping.
//! 4. Numbers must be integers. Floats are rejected to avoid cross-platform
//!    formatting drift.

use std::fmt;

/// Error type for canonical JSON serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanonError {
    /// A JSON number was not an integer.
    NonIntegerNumber { raw: String },
    /// The underlying writer failed (only possible on allocation failure).
    Write { detail: String },
}

impl fmt::Display for CanonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonIntegerNumber { raw } => {
                write!(f, "non-integer number in canonical JSON: {raw}")
            }
            Self::Write { detail } => write!(f, "canonical JSON write failed: {detail}"),
        }
    }
}

impl std::error::Error for CanonError {}

/// Produce canonical JSON bytes from a `serde_json::Value`.
///
/// # Errors
///
/// Returns [`CanonError::NonIntegerNumber`] if any number is not an `i64`
/// or `u64`.
pub fn canonical_json_bytes(value: &serde_json::Value) -> Result<Vec<u8>, CanonError> {
    let mut buf = Vec::new();
    write_value(&mut buf, value)?;
    Ok(buf)
}

fn write_value(buf: &mut Vec<u8>, value: &serde_json::Value) -> Result<(), CanonError> {
    match value {
        serde_json::Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            Err(CanonError::NonIntegerNumber { raw: n.to_string() })
        }
        serde_json::Value::Array(items) => {
            buf.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_value(buf, item)?;
            }
            buf.push(b']');
            Ok(())
        }
        serde_json::Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
            buf.push(b'{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    buf.push(b',');
                }
                write_scalar(buf, &serde_json::Value::String(key.clone()))?;
                buf.push(b':');
                write_value(buf, item)?;
            }
            buf.push(b'}');
            Ok(())
        }
        scalar => write_scalar(buf, scalar),
    }
}

fn write_scalar(buf: &mut Vec<u8>, scalar: &serde_json::Value) -> Result<(), CanonError> {
    serde_json::to_writer(&mut *buf, scalar).map_err(|e| CanonError::Write {
        detail: e.to_string(),
    })
}
