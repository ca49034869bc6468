//! In-memory document adapter
//!
//! Models the copy surface without a browser. The synchronous copy command
//! hands the current selection to a pluggable command, which is the system
//! clipboard (via arboard) for [`MemoryDocument::system`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::application::ports::Document;
use crate::domain::error::PlatformError;
use crate::domain::selection::SelectionStrategy;

/// Synchronous copy command: receives the selected text, reports whether it copied
pub type CopyCommand = Rc<dyn Fn(&str) -> Result<bool, PlatformError>>;

/// Default user agent reported by the in-memory document
pub const MEMORY_USER_AGENT: &str = concat!("copy-directive/", env!("CARGO_PKG_VERSION"));

/// Handle to a surface created by [`MemoryDocument`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemorySurface(u64);

#[derive(Debug)]
struct SurfaceNode {
    text: String,
    style: String,
    mounted: bool,
}

#[derive(Debug, Default)]
struct DocumentState {
    next_surface: u64,
    surfaces: BTreeMap<u64, SurfaceNode>,
    selection: Option<(u64, String)>,
}

/// Document that lives in memory. Clones share the same state.
#[derive(Clone)]
pub struct MemoryDocument {
    state: Rc<RefCell<DocumentState>>,
    copy_command: CopyCommand,
    user_agent: String,
}

impl MemoryDocument {
    /// Create a document with a custom copy command
    pub fn new<F>(copy_command: F) -> Self
    where
        F: Fn(&str) -> Result<bool, PlatformError> + 'static,
    {
        Self {
            state: Rc::new(RefCell::new(DocumentState::default())),
            copy_command: Rc::new(copy_command),
            user_agent: MEMORY_USER_AGENT.to_string(),
        }
    }

    /// Create a document whose copy command writes to the system clipboard.
    ///
    /// The arboard handle is opened on first copy and kept for the lifetime
    /// of the document, since on X11 the clipboard owner must stay alive for
    /// the copied text to remain available. A missing clipboard reports
    /// `false`, like a browser that does not support the copy command.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn system() -> Self {
        let handle: RefCell<Option<arboard::Clipboard>> = RefCell::new(None);

        Self::new(move |text| {
            let mut handle = handle.borrow_mut();
            if handle.is_none() {
                match arboard::Clipboard::new() {
                    Ok(clipboard) => *handle = Some(clipboard),
                    Err(e) => {
                        tracing::debug!(error = %e, "System clipboard unavailable");
                        return Ok(false);
                    }
                }
            }

            let Some(clipboard) = handle.as_mut() else {
                return Ok(false);
            };
            clipboard
                .set_text(text)
                .map(|()| true)
                .map_err(|e| PlatformError::CopyCommandFailed(e.to_string()))
        })
    }

    /// Report a different user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Number of surfaces currently attached
    pub fn mounted_surfaces(&self) -> usize {
        self.state
            .borrow()
            .surfaces
            .values()
            .filter(|node| node.mounted)
            .count()
    }

    /// Number of surfaces created and not yet removed
    pub fn live_surfaces(&self) -> usize {
        self.state.borrow().surfaces.len()
    }

    /// Inline style a live surface was created with
    pub fn surface_style(&self, surface: &MemorySurface) -> Option<String> {
        self.state
            .borrow()
            .surfaces
            .get(&surface.0)
            .map(|node| node.style.clone())
    }

    /// Currently selected text
    pub fn selection(&self) -> Option<String> {
        self.state
            .borrow()
            .selection
            .as_ref()
            .map(|(_, text)| text.clone())
    }

    fn with_node<T>(
        &self,
        surface: &MemorySurface,
        f: impl FnOnce(&mut SurfaceNode) -> T,
    ) -> Result<T, PlatformError> {
        let mut state = self.state.borrow_mut();
        state
            .surfaces
            .get_mut(&surface.0)
            .map(f)
            .ok_or_else(|| {
                PlatformError::DocumentUnavailable(format!("unknown surface {}", surface.0))
            })
    }
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDocument")
            .field("state", &self.state.borrow())
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Document for MemoryDocument {
    type Surface = MemorySurface;

    fn create_surface(&self, text: &str, style: &str) -> Result<MemorySurface, PlatformError> {
        let mut state = self.state.borrow_mut();
        state.next_surface += 1;
        let id = state.next_surface;
        state.surfaces.insert(
            id,
            SurfaceNode {
                text: text.to_string(),
                style: style.to_string(),
                mounted: false,
            },
        );
        Ok(MemorySurface(id))
    }

    fn insert_surface(&self, surface: &MemorySurface) -> Result<(), PlatformError> {
        self.with_node(surface, |node| node.mounted = true)
    }

    fn select_surface(
        &self,
        surface: &MemorySurface,
        strategy: SelectionStrategy,
    ) -> Result<(), PlatformError> {
        let (text, mounted) = self.with_node(surface, |node| (node.text.clone(), node.mounted))?;

        if !mounted {
            return Err(PlatformError::SelectionFailed(
                "surface is not attached".to_string(),
            ));
        }

        let selected = match strategy {
            SelectionStrategy::Native => text,
            SelectionStrategy::Range { end } => text.chars().take(end as usize).collect(),
        };
        self.state.borrow_mut().selection = Some((surface.0, selected));
        Ok(())
    }

    fn exec_copy(&self) -> Result<bool, PlatformError> {
        let selection = self.selection();
        match selection {
            Some(text) => (self.copy_command)(&text),
            None => Ok(false),
        }
    }

    fn remove_surface(&self, surface: &MemorySurface) {
        let mut state = self.state.borrow_mut();
        state.surfaces.remove(&surface.0);
        if matches!(state.selection, Some((id, _)) if id == surface.0) {
            state.selection = None;
        }
    }

    fn user_agent(&self) -> String {
        self.user_agent.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recording_document() -> (MemoryDocument, Rc<RefCell<Vec<String>>>) {
        let copied = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&copied);
        let document = MemoryDocument::new(move |text| {
            sink.borrow_mut().push(text.to_string());
            Ok(true)
        });
        (document, copied)
    }

    #[test]
    fn copy_uses_current_selection() {
        let (document, copied) = recording_document();
        let surface = document.create_surface("hello", "opacity:0;").unwrap();
        document.insert_surface(&surface).unwrap();
        document
            .select_surface(&surface, SelectionStrategy::Native)
            .unwrap();

        assert!(document.exec_copy().unwrap());
        assert_eq!(*copied.borrow(), vec!["hello"]);
    }

    #[test]
    fn range_selection_stops_at_end() {
        let (document, _copied) = recording_document();
        let surface = document.create_surface("abcdef", "opacity:0;").unwrap();
        document.insert_surface(&surface).unwrap();
        document
            .select_surface(&surface, SelectionStrategy::Range { end: 3 })
            .unwrap();

        assert_eq!(document.selection(), Some("abc".to_string()));
    }

    #[test]
    fn detached_surface_cannot_be_selected() {
        let (document, _copied) = recording_document();
        let surface = document.create_surface("x", "opacity:0;").unwrap();

        assert!(document
            .select_surface(&surface, SelectionStrategy::Native)
            .is_err());
    }

    #[test]
    fn unstyled_surface_is_still_selectable() {
        let (document, copied) = recording_document();
        let surface = document.create_surface("plain", "").unwrap();
        document.insert_surface(&surface).unwrap();
        assert_eq!(document.surface_style(&surface), Some(String::new()));

        document
            .select_surface(&surface, SelectionStrategy::Native)
            .unwrap();

        assert!(document.exec_copy().unwrap());
        assert_eq!(*copied.borrow(), vec!["plain"]);
    }

    #[test]
    fn removing_surface_clears_selection() {
        let (document, copied) = recording_document();
        let surface = document.create_surface("gone", "opacity:0;").unwrap();
        document.insert_surface(&surface).unwrap();
        document
            .select_surface(&surface, SelectionStrategy::Native)
            .unwrap();
        assert_eq!(document.mounted_surfaces(), 1);

        document.remove_surface(&surface);

        assert_eq!(document.live_surfaces(), 0);
        assert!(!document.exec_copy().unwrap());
        assert!(copied.borrow().is_empty());
    }

    #[test]
    fn user_agent_can_be_overridden() {
        let (document, _copied) = recording_document();
        assert!(document.user_agent().starts_with("copy-directive/"));

        let document = document.with_user_agent("Mozilla/5.0 (iPad)");
        assert_eq!(document.user_agent(), "Mozilla/5.0 (iPad)");
    }
}
