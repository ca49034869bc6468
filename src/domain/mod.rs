//! Domain layer - Core value objects and errors
//!
//! Contains clipboard text normalization, handler ids, binding kinds,
//! selection strategy and configuration.
//! This layer has no dependencies on external systems.

pub mod binding;
pub mod config;
pub mod error;
pub mod handler_id;
pub mod selection;
pub mod value;

// Re-export common types
pub use binding::{Binding, BindingKind, CopyCallback, CopyPayload, ValueSource};
pub use config::DirectiveConfig;
pub use error::*;
pub use handler_id::HandlerId;
pub use selection::SelectionStrategy;
pub use value::ClipboardText;
