//! Clipboard write use case

use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::config::DirectiveConfig;
use crate::domain::error::SerializationError;
use crate::domain::selection::SelectionStrategy;
use crate::domain::value::ClipboardText;

use super::ports::{Clipboard, Document, Permissions, Spawner};

/// Anything that can copy a binding value.
///
/// The directive depends on this rather than on a concrete writer.
pub trait CopyValue {
    /// Copy a value, returning whether the synchronous copy succeeded
    fn copy_value(&self, value: &Value) -> Result<bool, SerializationError>;
}

/// Writes values to the clipboard.
///
/// Tries a selection-based synchronous copy through an off-screen surface
/// first. When that fails, a detached task asks for the write permission
/// and retries through the asynchronous clipboard. The synchronous result
/// is what callers get back, even if the detached retry later succeeds.
pub struct ClipboardWriter<D, P, C, S>
where
    D: Document,
    P: Permissions + 'static,
    C: Clipboard + 'static,
    S: Spawner,
{
    document: D,
    permissions: Rc<P>,
    clipboard: Rc<C>,
    spawner: S,
    surface_style: String,
    permission_name: String,
    handheld_platforms: Vec<String>,
    selection_end: u32,
}

impl<D, P, C, S> ClipboardWriter<D, P, C, S>
where
    D: Document,
    P: Permissions + 'static,
    C: Clipboard + 'static,
    S: Spawner,
{
    /// Create a writer with default settings
    pub fn new(document: D, permissions: P, clipboard: C, spawner: S) -> Self {
        Self::with_config(
            document,
            permissions,
            clipboard,
            spawner,
            &DirectiveConfig::empty(),
        )
    }

    /// Create a writer using the surface, permission and platform settings of `config`
    pub fn with_config(
        document: D,
        permissions: P,
        clipboard: C,
        spawner: S,
        config: &DirectiveConfig,
    ) -> Self {
        Self {
            document,
            permissions: Rc::new(permissions),
            clipboard: Rc::new(clipboard),
            spawner,
            surface_style: config.surface_style_or_default().to_string(),
            permission_name: config.permission_name_or_default().to_string(),
            handheld_platforms: config.handheld_platforms_or_default(),
            selection_end: config.selection_end_or_default(),
        }
    }

    /// Get the document this writer mounts surfaces in
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Get the spawner fallback tasks run on
    pub fn spawner(&self) -> &S {
        &self.spawner
    }

    /// Copy any serializable value.
    ///
    /// Strings are copied verbatim, everything else as JSON. Fails only when
    /// the value cannot be encoded, in which case the document is untouched.
    pub fn write<T>(&self, value: &T) -> Result<bool, SerializationError>
    where
        T: Serialize + ?Sized,
    {
        let text = ClipboardText::from_value(value)?;
        Ok(self.copy_text(text))
    }

    /// Copy text that needs no normalization
    pub fn write_text(&self, text: &str) -> bool {
        self.copy_text(ClipboardText::from_text(text))
    }

    fn copy_text(&self, text: ClipboardText) -> bool {
        let Some(surface) = self.mount_surface(text.as_str()) else {
            self.spawn_fallback(text);
            return false;
        };

        let copied = self.select_and_copy(&surface);
        if !copied {
            self.spawn_fallback(text);
        }
        copied
    }

    fn mount_surface(&self, text: &str) -> Option<MountedSurface<'_, D>> {
        let surface = match self.document.create_surface(text, &self.surface_style) {
            Ok(surface) => surface,
            Err(e) => {
                warn!(error = %e, "Failed to create copy surface");
                return None;
            }
        };

        if let Err(e) = self.document.insert_surface(&surface) {
            warn!(error = %e, "Failed to insert copy surface");
            return None;
        }

        Some(MountedSurface {
            document: &self.document,
            surface,
        })
    }

    fn select_and_copy(&self, surface: &MountedSurface<'_, D>) -> bool {
        let strategy = SelectionStrategy::detect(
            &self.document.user_agent(),
            self.handheld_platforms.as_slice(),
            self.selection_end,
        );

        if let Err(e) = self.document.select_surface(&surface.surface, strategy) {
            warn!(error = %e, %strategy, "Failed to select copy surface");
            return false;
        }

        match self.document.exec_copy() {
            Ok(copied) => {
                debug!(copied, %strategy, "Synchronous copy finished");
                copied
            }
            Err(e) => {
                warn!(error = %e, "Synchronous copy command failed");
                false
            }
        }
    }

    fn spawn_fallback(&self, text: ClipboardText) {
        let permissions = Rc::clone(&self.permissions);
        let clipboard = Rc::clone(&self.clipboard);
        let permission_name = self.permission_name.clone();

        self.spawner.spawn_local(Box::pin(async move {
            write_with_permission(
                permissions.as_ref(),
                clipboard.as_ref(),
                &permission_name,
                text.as_str(),
            )
            .await;
        }));
    }
}

impl<D, P, C, S> CopyValue for ClipboardWriter<D, P, C, S>
where
    D: Document,
    P: Permissions + 'static,
    C: Clipboard + 'static,
    S: Spawner,
{
    fn copy_value(&self, value: &Value) -> Result<bool, SerializationError> {
        self.write(value)
    }
}

/// Asynchronous fallback. Every failure is logged and dropped.
async fn write_with_permission<P, C>(
    permissions: &P,
    clipboard: &C,
    permission_name: &str,
    text: &str,
) where
    P: Permissions + ?Sized,
    C: Clipboard + ?Sized,
{
    let state = match permissions.query(permission_name).await {
        Ok(state) => state,
        Err(e) => {
            warn!(error = %e, permission = permission_name, "Permission query failed");
            return;
        }
    };

    if !state.allows_write() {
        debug!(%state, permission = permission_name, "Asynchronous clipboard write not permitted");
        return;
    }

    match clipboard.copy(text).await {
        Ok(()) => debug!("Asynchronous clipboard write finished"),
        Err(e) => warn!(error = %e, "Asynchronous clipboard write failed"),
    }
}

/// Removes the surface from the document when dropped
struct MountedSurface<'a, D: Document> {
    document: &'a D,
    surface: D::Surface,
}

impl<D: Document> Drop for MountedSurface<'_, D> {
    fn drop(&mut self) {
        self.document.remove_surface(&self.surface);
    }
}
