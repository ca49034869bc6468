//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod document;
pub mod element;
pub mod host;
pub mod permissions;
pub mod spawner;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
pub use document::Document;
pub use element::{ClickListener, Element};
pub use host::{DirectiveHooks, GlobalClipboard, HostApp};
pub use permissions::{PermissionState, Permissions};
pub use spawner::{LocalTask, Spawner};
