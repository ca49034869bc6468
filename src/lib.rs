//! copy-directive - copy-to-clipboard plugin for component-based UI hosts
//!
//! This crate provides a clipboard writer and a directive that binds
//! click-to-copy behaviour, plus success and error callbacks, to elements.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Clipboard text, handler ids, binding kinds, configuration and errors
//! - **Application**: Writer, handler registry, directive, plugin and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (web-sys DOM, arboard, tokio, in-memory)

pub mod application;
pub mod domain;
pub mod infrastructure;

#[cfg(not(target_arch = "wasm32"))]
use application::ClipboardWriter;
#[cfg(not(target_arch = "wasm32"))]
use infrastructure::{ArboardClipboard, FixedPermissions, MemoryDocument, TokioLocalSpawner};

/// Writer backed by the system clipboard.
///
/// Writes never block on the fallback. Its tasks wait on the writer's
/// [`TokioLocalSpawner`] until the host awaits
/// `writer.spawner().run_pending()` inside a tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
pub type NativeWriter =
    ClipboardWriter<MemoryDocument, FixedPermissions, ArboardClipboard, TokioLocalSpawner>;

/// Build a writer backed by the system clipboard
#[cfg(not(target_arch = "wasm32"))]
pub fn native_writer(config: &domain::DirectiveConfig) -> NativeWriter {
    ClipboardWriter::with_config(
        MemoryDocument::system(),
        FixedPermissions::granted(),
        ArboardClipboard::new(),
        TokioLocalSpawner::new(),
        config,
    )
}

/// Writer backed by the page's document and clipboard
#[cfg(target_arch = "wasm32")]
pub type WebWriter = application::ClipboardWriter<
    infrastructure::web::WebDocument,
    infrastructure::web::WebPermissions,
    infrastructure::web::WebClipboard,
    infrastructure::web::WebSpawner,
>;

/// Build a writer backed by the page's document and clipboard
#[cfg(target_arch = "wasm32")]
pub fn web_writer(
    config: &domain::DirectiveConfig,
) -> Result<WebWriter, domain::PlatformError> {
    use infrastructure::web::{WebClipboard, WebDocument, WebPermissions, WebSpawner};

    Ok(application::ClipboardWriter::with_config(
        WebDocument::new()?,
        WebPermissions::new(),
        WebClipboard::new(),
        WebSpawner::new(),
        config,
    ))
}
