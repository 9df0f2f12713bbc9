//! Canonical serialized form.
//!
//! Documents are written as pretty-printed JSON with a fixed number of spaces
//! per nesting level. Key order follows the document (`serde_json` is built
//! with `preserve_order`).

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;

use crate::error::StoreError;

/// Serializes `doc` into canonical text indented by `indent` spaces.
pub fn to_canonical_text(doc: &Value, indent: usize) -> Result<String, StoreError> {
    let pad = vec![b' '; indent];
    let mut out = Vec::with_capacity(128);
    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(&pad));
    doc.serialize(&mut ser).map_err(StoreError::Serialize)?;
    // serde_json only emits UTF-8.
    String::from_utf8(out).map_err(|err| {
        StoreError::Serialize(serde::ser::Error::custom(err.to_string()))
    })
}

/// Parses document text.
pub fn parse_text(text: &str) -> Result<Value, StoreError> {
    serde_json::from_str(text).map_err(StoreError::Parse)
}
