//! Browser asynchronous clipboard adapter

use async_trait::async_trait;
use wasm_bindgen_futures::JsFuture;

use crate::application::ports::{Clipboard, ClipboardError};

use super::describe_js;

/// `navigator.clipboard.writeText`
#[derive(Debug, Clone, Copy, Default)]
pub struct WebClipboard;

impl WebClipboard {
    /// Create a new browser clipboard adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait(?Send)]
impl Clipboard for WebClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let window = web_sys::window()
            .ok_or_else(|| ClipboardError::ClipboardUnavailable("no window".to_string()))?;
        let clipboard = window.navigator().clipboard();

        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|e| ClipboardError::CopyFailed(describe_js(&e)))
    }
}
