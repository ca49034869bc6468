//! Permission query port interface

use std::fmt;

use async_trait::async_trait;

use crate::domain::error::PlatformError;

/// Answer to a permission query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PermissionState {
    Granted,
    Prompt,
    Denied,
}

impl PermissionState {
    /// Whether a clipboard write may be attempted.
    /// `Prompt` counts: the platform asks the user on write.
    pub const fn allows_write(&self) -> bool {
        matches!(self, Self::Granted | Self::Prompt)
    }

    /// Get the string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::Prompt => "prompt",
            Self::Denied => "denied",
        }
    }
}

impl fmt::Display for PermissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Port for querying platform permissions
#[async_trait(?Send)]
pub trait Permissions {
    /// Query the state of a named permission (e.g. `clipboard-write`)
    async fn query(&self, name: &str) -> Result<PermissionState, PlatformError>;
}
