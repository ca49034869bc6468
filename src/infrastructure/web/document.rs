//! Browser document adapter

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlDocument, HtmlTextAreaElement, Window};

use crate::application::ports::Document;
use crate::domain::error::PlatformError;
use crate::domain::selection::SelectionStrategy;

use super::describe_js;

/// Hidden textarea used as the copy surface
pub struct WebSurface {
    textarea: HtmlTextAreaElement,
    // Keeps the focusin handler alive while the textarea exists
    _focus_guard: Closure<dyn FnMut(Event)>,
}

/// The page's `document`
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
}

impl WebDocument {
    /// Bind to the current window's document
    pub fn new() -> Result<Self, PlatformError> {
        let window = web_sys::window()
            .ok_or_else(|| PlatformError::DocumentUnavailable("no window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| PlatformError::DocumentUnavailable("no document".to_string()))?;
        Ok(Self { window, document })
    }

    fn select_range(&self, textarea: &HtmlTextAreaElement, end: u32) -> Result<(), JsValue> {
        textarea.set_content_editable("true");
        textarea.set_read_only(true);

        let range = self.document.create_range()?;
        range.select_node_contents(textarea)?;

        if let Some(selection) = self.window.get_selection()? {
            selection.remove_all_ranges()?;
            selection.add_range(&range)?;
        }

        textarea.set_selection_range(0, end)
    }
}

impl Document for WebDocument {
    type Surface = WebSurface;

    fn create_surface(&self, text: &str, style: &str) -> Result<WebSurface, PlatformError> {
        let unavailable = |e: JsValue| PlatformError::DocumentUnavailable(describe_js(&e));

        let textarea: HtmlTextAreaElement = self
            .document
            .create_element("textarea")
            .map_err(unavailable)?
            .dyn_into()
            .map_err(|_| PlatformError::DocumentUnavailable("not a textarea".to_string()))?;

        let focus_guard = Closure::<dyn FnMut(Event)>::new(|event: Event| event.stop_propagation());
        textarea
            .add_event_listener_with_callback("focusin", focus_guard.as_ref().unchecked_ref())
            .map_err(unavailable)?;

        textarea.set_value(text);
        textarea.set_attribute("readonly", "").map_err(unavailable)?;
        textarea.set_attribute("style", style).map_err(unavailable)?;

        Ok(WebSurface {
            textarea,
            _focus_guard: focus_guard,
        })
    }

    fn insert_surface(&self, surface: &WebSurface) -> Result<(), PlatformError> {
        let body = self
            .document
            .body()
            .ok_or_else(|| PlatformError::DocumentUnavailable("no body".to_string()))?;
        body.append_child(&surface.textarea)
            .map(|_| ())
            .map_err(|e| PlatformError::DocumentUnavailable(describe_js(&e)))
    }

    fn select_surface(
        &self,
        surface: &WebSurface,
        strategy: SelectionStrategy,
    ) -> Result<(), PlatformError> {
        match strategy {
            SelectionStrategy::Native => {
                surface.textarea.select();
                Ok(())
            }
            SelectionStrategy::Range { end } => self
                .select_range(&surface.textarea, end)
                .map_err(|e| PlatformError::SelectionFailed(describe_js(&e))),
        }
    }

    fn exec_copy(&self) -> Result<bool, PlatformError> {
        let document = self
            .document
            .dyn_ref::<HtmlDocument>()
            .ok_or_else(|| PlatformError::CopyCommandFailed("not an HTML document".to_string()))?;
        document
            .exec_command("copy")
            .map_err(|e| PlatformError::CopyCommandFailed(describe_js(&e)))
    }

    fn remove_surface(&self, surface: &WebSurface) {
        surface.textarea.remove();
    }

    fn user_agent(&self) -> String {
        self.window.navigator().user_agent().unwrap_or_default()
    }
}
