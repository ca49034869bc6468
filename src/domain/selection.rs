//! Text selection strategy for the copy surface

use std::fmt;

/// How the copy surface's contents get selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionStrategy {
    /// The platform's own select-all on the text field
    #[default]
    Native,
    /// Explicit range selection for handheld browsers where select-all
    /// on a read-only field does nothing. `end` is the selection range end.
    Range { end: u32 },
}

impl SelectionStrategy {
    /// Pick a strategy from the user agent string.
    ///
    /// Matching is case-insensitive against each device family.
    pub fn detect<S: AsRef<str>>(
        user_agent: &str,
        handheld_families: &[S],
        range_end: u32,
    ) -> Self {
        let user_agent = user_agent.to_lowercase();
        let handheld = handheld_families.iter().any(|family| {
            let family = family.as_ref();
            !family.is_empty() && user_agent.contains(&family.to_lowercase())
        });

        if handheld {
            Self::Range { end: range_end }
        } else {
            Self::Native
        }
    }

    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Range { .. } => "range",
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
