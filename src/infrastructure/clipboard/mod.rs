//! Asynchronous clipboard infrastructure module
//!
//! Provides the native clipboard through arboard plus an in-memory
//! clipboard. The browser clipboard lives in the `web` module.

#[cfg(not(target_arch = "wasm32"))]
mod arboard;
mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use arboard::ArboardClipboard;
pub use memory::MemoryClipboard;
