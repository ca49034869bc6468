//! Browser adapters (wasm32 only)
//!
//! Back the ports with the DOM through web-sys: a hidden textarea and
//! `document.execCommand("copy")` for the synchronous path,
//! `navigator.permissions` and `navigator.clipboard` for the fallback.

mod clipboard;
mod document;
mod element;
mod permissions;
mod spawner;

pub use clipboard::WebClipboard;
pub use document::{WebDocument, WebSurface};
pub use element::WebElement;
pub use permissions::WebPermissions;
pub use spawner::WebSpawner;

use wasm_bindgen::JsValue;

/// Render a thrown JS value for logs and error messages
pub(crate) fn describe_js(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
