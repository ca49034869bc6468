//! Browser permission adapter

use async_trait::async_trait;
use js_sys::{Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::PermissionStatus;

use crate::application::ports::{PermissionState, Permissions};
use crate::domain::error::PlatformError;

use super::describe_js;

/// `navigator.permissions.query`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebPermissions;

impl WebPermissions {
    /// Create a new browser permission adapter
    pub fn new() -> Self {
        Self
    }
}

fn query_failed(value: JsValue) -> PlatformError {
    PlatformError::PermissionQueryFailed(describe_js(&value))
}

#[async_trait(?Send)]
impl Permissions for WebPermissions {
    async fn query(&self, name: &str) -> Result<PermissionState, PlatformError> {
        let window = web_sys::window()
            .ok_or_else(|| PlatformError::PermissionQueryFailed("no window".to_string()))?;
        let permissions = window.navigator().permissions().map_err(query_failed)?;

        let descriptor = Object::new();
        Reflect::set(&descriptor, &JsValue::from_str("name"), &JsValue::from_str(name))
            .map_err(query_failed)?;

        let promise = permissions.query(&descriptor).map_err(query_failed)?;
        let status: PermissionStatus = JsFuture::from(promise)
            .await
            .map_err(query_failed)?
            .dyn_into()
            .map_err(query_failed)?;

        Ok(match status.state() {
            web_sys::PermissionState::Granted => PermissionState::Granted,
            web_sys::PermissionState::Prompt => PermissionState::Prompt,
            _ => PermissionState::Denied,
        })
    }
}
