//! Host framework port interface

use std::rc::Rc;

use serde_json::Value;

use crate::domain::binding::Binding;
use crate::domain::error::SerializationError;

use super::element::Element;

/// Globally callable clipboard function installed on the host
pub type GlobalClipboard = Rc<dyn Fn(&Value) -> Result<bool, SerializationError>>;

/// Element lifecycle hooks of a directive.
///
/// Hosts with the older hook names call `bind`/`unbind`, newer ones call
/// `before_mount`/`unmounted`. Both pairs behave the same.
pub trait DirectiveHooks<E: Element> {
    /// Element is about to enter the document
    fn before_mount(&self, element: &E, binding: Binding<E::Event>);

    /// Element has left the document
    fn unmounted(&self, element: &E);

    /// Alias of `before_mount`
    fn bind(&self, element: &E, binding: Binding<E::Event>) {
        self.before_mount(element, binding)
    }

    /// Alias of `unmounted`
    fn unbind(&self, element: &E) {
        self.unmounted(element)
    }
}

/// Port for the host application a plugin installs into
pub trait HostApp {
    /// Element type the host renders
    type Element: Element;

    /// Expose a function to every component under `name`
    fn provide_global(&mut self, name: &str, function: GlobalClipboard);

    /// Register a directive under `name`
    fn register_directive(
        &mut self,
        name: &str,
        directive: Rc<dyn DirectiveHooks<Self::Element>>,
    );
}
