//! Clipboard text value object

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::error::SerializationError;

/// Text ready to be placed on the clipboard.
///
/// Values that serialize to a JSON string are taken verbatim. Everything
/// else is encoded as JSON text, so `42` becomes `"42"` and a struct becomes
/// its JSON object form (field order preserved).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClipboardText(String);

impl ClipboardText {
    /// Normalize any serializable value to clipboard text
    pub fn from_value<T>(value: &T) -> Result<Self, SerializationError>
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(value)? {
            Value::String(text) => Ok(Self(text)),
            _ => Ok(Self(serde_json::to_string(value)?)),
        }
    }

    /// Wrap text that needs no normalization
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Get the text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the text
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ClipboardText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClipboardText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
