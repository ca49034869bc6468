//! Application layer - Use cases and port interfaces
//!
//! Contains the clipboard writer, the handler registry, the directive and
//! the plugin, plus the trait definitions for platform interactions.

pub mod directive;
pub mod plugin;
pub mod ports;
pub mod registry;
pub mod writer;

// Re-export use cases
pub use directive::{ClipboardDirective, DirectiveHandler, SharedRegistry};
pub use plugin::ClipboardPlugin;
pub use registry::HandlerRegistry;
pub use writer::{ClipboardWriter, CopyValue};
