//! Fixed-answer permission adapter
//!
//! Native platforms have no clipboard permission model, so the answer is
//! decided up front.

use async_trait::async_trait;

use crate::application::ports::{PermissionState, Permissions};
use crate::domain::error::PlatformError;

/// Answers every permission query with the same state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPermissions {
    state: PermissionState,
}

impl FixedPermissions {
    /// Answer with `state`
    pub fn new(state: PermissionState) -> Self {
        Self { state }
    }

    /// Grant everything
    pub fn granted() -> Self {
        Self::new(PermissionState::Granted)
    }

    /// Deny everything
    pub fn denied() -> Self {
        Self::new(PermissionState::Denied)
    }
}

impl Default for FixedPermissions {
    fn default() -> Self {
        Self::granted()
    }
}

#[async_trait(?Send)]
impl Permissions for FixedPermissions {
    async fn query(&self, _name: &str) -> Result<PermissionState, PlatformError> {
        Ok(self.state)
    }
}
