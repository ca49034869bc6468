//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces: browser
//! adapters over web-sys on wasm32, and native or in-memory adapters
//! everywhere else.

pub mod clipboard;
pub mod document;
pub mod element;
pub mod permissions;
pub mod runtime;
#[cfg(target_arch = "wasm32")]
pub mod web;

// Re-export adapters
pub use clipboard::MemoryClipboard;
#[cfg(not(target_arch = "wasm32"))]
pub use clipboard::ArboardClipboard;
pub use document::MemoryDocument;
pub use element::MemoryElement;
pub use permissions::FixedPermissions;
pub use runtime::QueuedSpawner;
#[cfg(not(target_arch = "wasm32"))]
pub use runtime::TokioLocalSpawner;
