//! Best-effort literal parsing for edited text.
//!
//! Text that reads as a JSON value (`42`, `true`, `null`, `"quoted"`,
//! `[1, 2]`, `{"a": 1}`) is stored as that value. Anything else is stored
//! verbatim as a string.

use serde_json::Value;

/// Outcome of [`parse_literal`].
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// The text was a JSON literal.
    Parsed(Value),
    /// The text was not a JSON literal and is kept as a plain string.
    Raw(String),
}

impl Literal {
    pub fn is_raw(&self) -> bool {
        matches!(self, Literal::Raw(_))
    }

    pub fn into_value(self) -> Value {
        match self {
            Literal::Parsed(val) => val,
            Literal::Raw(text) => Value::String(text),
        }
    }
}

/// Interprets `text` as a JSON literal, falling back to a raw string.
pub fn parse_literal(text: &str) -> Literal {
    match serde_json::from_str::<Value>(text) {
        Ok(val) => Literal::Parsed(val),
        Err(_) => Literal::Raw(text.to_string()),
    }
}

/// Renders a scalar the way an edit field shows it.
///
/// Strings appear without quotes; numbers, booleans and null appear in their
/// literal form. Containers are rendered as compact JSON.
pub fn display_text(val: &Value) -> String {
    match val {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
