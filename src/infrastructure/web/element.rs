//! Browser element adapter

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent};

use crate::application::ports::{ClickListener, Element};

use super::describe_js;

type AttachedListener = (ClickListener<MouseEvent>, Closure<dyn FnMut(MouseEvent)>);

/// Element handle over an `HtmlElement`.
///
/// Listener closures are tracked on the handle. Unbinding through a
/// different handle to the same node leaves the DOM listener attached; the
/// directive's listener then ignores clicks, but the closure is only freed
/// when the node is.
#[derive(Clone)]
pub struct WebElement {
    element: HtmlElement,
    listeners: Rc<RefCell<Vec<AttachedListener>>>,
}

impl WebElement {
    /// Wrap an element
    pub fn new(element: HtmlElement) -> Self {
        Self {
            element,
            listeners: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Get the wrapped element
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl Element for WebElement {
    type Event = MouseEvent;

    fn data(&self, key: &str) -> Option<String> {
        self.element.dataset().get(key)
    }

    fn set_data(&self, key: &str, value: &str) {
        if let Err(e) = self.element.dataset().set(key, value) {
            warn!(key, error = %describe_js(&e), "Failed to set data attribute");
        }
    }

    fn remove_data(&self, key: &str) {
        self.element.dataset().delete(key);
    }

    fn add_click_listener(&self, listener: ClickListener<MouseEvent>) {
        let callback = {
            let listener = Rc::clone(&listener);
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| listener(&event))
        };

        if let Err(e) = self
            .element
            .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            warn!(error = %describe_js(&e), "Failed to attach click listener");
            return;
        }

        self.listeners.borrow_mut().push((listener, callback));
    }

    fn remove_click_listener(&self, listener: &ClickListener<MouseEvent>) {
        let mut listeners = self.listeners.borrow_mut();
        let Some(index) = listeners
            .iter()
            .position(|(attached, _)| Rc::ptr_eq(attached, listener))
        else {
            return;
        };

        let (_, callback) = listeners.remove(index);
        if let Err(e) = self
            .element
            .remove_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            warn!(error = %describe_js(&e), "Failed to detach click listener");
        }

        // The closure may be the one currently running; drop it after the
        // current call stack unwinds.
        wasm_bindgen_futures::spawn_local(async move { drop(callback) });
    }
}
