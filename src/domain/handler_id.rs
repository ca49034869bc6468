//! Handler identifier value object

use std::borrow::Borrow;
use std::fmt;

/// Marker placed in front of every generated id so that an id is never
/// empty and never parses as a number.
pub const HANDLER_ID_PREFIX: char = '$';

/// Identifier of a registered handler, e.g. `$1`.
///
/// Stored on elements as a data attribute and used as the registry key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandlerId(String);

impl HandlerId {
    /// Build the id for a registry sequence number
    pub fn from_sequence(sequence: u64) -> Self {
        Self(format!("{}{}", HANDLER_ID_PREFIX, sequence))
    }

    /// Get the string form
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Sequence number encoded in the id, if it was generated by a registry
    pub fn sequence(&self) -> Option<u64> {
        self.0
            .strip_prefix(HANDLER_ID_PREFIX)
            .and_then(|n| n.parse().ok())
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for HandlerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for HandlerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_prefixed() {
        let id = HandlerId::from_sequence(1);
        assert_eq!(id.as_str(), "$1");
        assert_eq!(id.to_string(), "$1");
    }

    #[test]
    fn sequence_round_trips() {
        assert_eq!(HandlerId::from_sequence(42).sequence(), Some(42));
    }
}
