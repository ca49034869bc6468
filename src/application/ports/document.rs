//! Document port interface

use crate::domain::error::PlatformError;
use crate::domain::selection::SelectionStrategy;

/// Port for the document the copy surface is mounted in.
///
/// The surface is a read-only, off-screen text field holding the text to
/// copy. It must swallow focus events so that mounting it does not disturb
/// focus handling in the host page.
pub trait Document {
    /// Handle to a created copy surface
    type Surface;

    /// Create a detached read-only surface holding `text`, styled with `style`
    fn create_surface(&self, text: &str, style: &str) -> Result<Self::Surface, PlatformError>;

    /// Attach the surface to the document
    fn insert_surface(&self, surface: &Self::Surface) -> Result<(), PlatformError>;

    /// Select the whole contents of the surface
    fn select_surface(
        &self,
        surface: &Self::Surface,
        strategy: SelectionStrategy,
    ) -> Result<(), PlatformError>;

    /// Run the synchronous copy command on the current selection.
    ///
    /// `Ok(false)` means the platform declined the command.
    fn exec_copy(&self) -> Result<bool, PlatformError>;

    /// Detach the surface. Must be safe to call once per inserted surface.
    fn remove_surface(&self, surface: &Self::Surface);

    /// Platform identification string
    fn user_agent(&self) -> String;
}
