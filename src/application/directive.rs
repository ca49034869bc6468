//! Clipboard directive (element binding adapter)

use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use crate::domain::binding::{Binding, BindingKind, CopyCallback, CopyPayload, ValueSource};
use crate::domain::handler_id::HandlerId;

use super::ports::{ClickListener, DirectiveHooks, Element};
use super::registry::HandlerRegistry;
use super::writer::CopyValue;

/// Entry stored in the directive's registry
pub enum DirectiveHandler<Ev> {
    /// Native click listener of a copy binding
    Listener(ClickListener<Ev>),
    /// Success or error callback
    Callback(CopyCallback<Ev>),
}

impl<Ev> Clone for DirectiveHandler<Ev> {
    fn clone(&self) -> Self {
        match self {
            Self::Listener(listener) => Self::Listener(Rc::clone(listener)),
            Self::Callback(callback) => Self::Callback(Rc::clone(callback)),
        }
    }
}

impl<Ev> fmt::Debug for DirectiveHandler<Ev> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Listener(_) => f.write_str("Listener(..)"),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Registry shared between a directive and its click listeners
pub type SharedRegistry<Ev> = Rc<RefCell<HandlerRegistry<DirectiveHandler<Ev>>>>;

/// Binds click-to-copy and result callbacks to elements.
///
/// Each element keeps up to three handler ids in its data attributes, one
/// per binding kind. The three bindings are independent: success and error
/// callbacks may be declared separately from the copy binding, and the copy
/// listener looks them up on the element when it fires.
pub struct ClipboardDirective<E: Element> {
    registry: SharedRegistry<E::Event>,
    writer: Rc<dyn CopyValue>,
}

impl<E: Element> ClipboardDirective<E> {
    /// Create a directive with its own registry
    pub fn new(writer: Rc<dyn CopyValue>) -> Self {
        Self::with_registry(writer, Rc::new(RefCell::new(HandlerRegistry::new())))
    }

    /// Create a directive over an existing registry
    pub fn with_registry(writer: Rc<dyn CopyValue>, registry: SharedRegistry<E::Event>) -> Self {
        Self { registry, writer }
    }

    /// Number of live handlers across all bound elements
    pub fn live_handlers(&self) -> usize {
        self.registry.borrow().len()
    }

    /// Check whether a handler id is live
    pub fn is_live(&self, id: &str) -> bool {
        self.registry.borrow().contains(id)
    }

    /// Register a handler for `kind` and record its id on the element.
    ///
    /// A handler already stored for the same kind is released first.
    fn store(
        &self,
        element: &E,
        kind: BindingKind,
        handler: DirectiveHandler<E::Event>,
    ) -> HandlerId {
        let mut registry = self.registry.borrow_mut();

        if let Some(stale) = element.data(kind.data_key()) {
            let released = registry.unregister(Some(stale.as_str()));
            if let Some(DirectiveHandler::Listener(listener)) = released {
                element.remove_click_listener(&listener);
            }
        }

        let id = registry.register(handler);
        element.set_data(kind.data_key(), id.as_str());
        debug!(handler_id = %id, %kind, "Bound clipboard directive");
        id
    }

    /// Build the copy listener. It stays inert until `own_id` is set, and
    /// goes inert again once that id leaves the registry, so a listener the
    /// element failed to detach never copies after unbind.
    fn click_listener(
        &self,
        element: &E,
        source: Option<ValueSource>,
        own_id: Rc<OnceCell<HandlerId>>,
    ) -> ClickListener<E::Event> {
        let registry = Rc::downgrade(&self.registry);
        let writer = Rc::clone(&self.writer);
        let element = element.clone();

        Rc::new(move |event: &E::Event| {
            // A copy binding declared without a value never copies
            let Some(source) = &source else {
                return;
            };

            let live = match (registry.upgrade(), own_id.get()) {
                (Some(registry), Some(id)) => registry.borrow().contains(id.as_str()),
                _ => false,
            };
            if !live {
                debug!("Ignoring click on released clipboard binding");
                return;
            }

            let payload = CopyPayload {
                value: source.resolve(),
                event: event.clone(),
            };

            let kind = match writer.copy_value(&payload.value) {
                Ok(true) => BindingKind::Success,
                Ok(false) => BindingKind::Error,
                Err(e) => {
                    warn!(error = %e, "Clipboard directive could not encode value");
                    BindingKind::Error
                }
            };

            if let Some(callback) = lookup_callback(&registry, &element, kind) {
                callback(&payload);
            }
        })
    }
}

/// Find the element's callback for `kind`. The registry borrow ends before
/// the callback runs, so callbacks may bind or unbind elements.
fn lookup_callback<E: Element>(
    registry: &Weak<RefCell<HandlerRegistry<DirectiveHandler<E::Event>>>>,
    element: &E,
    kind: BindingKind,
) -> Option<CopyCallback<E::Event>> {
    let registry = registry.upgrade()?;
    let id = element.data(kind.data_key())?;
    let registry = registry.borrow();
    match registry.lookup(&id) {
        Some(DirectiveHandler::Callback(callback)) => Some(Rc::clone(callback)),
        _ => None,
    }
}

impl<E: Element> DirectiveHooks<E> for ClipboardDirective<E> {
    fn before_mount(&self, element: &E, binding: Binding<E::Event>) {
        match binding {
            Binding::Success(callback) => {
                self.store(element, BindingKind::Success, DirectiveHandler::Callback(callback));
            }
            Binding::Error(callback) => {
                self.store(element, BindingKind::Error, DirectiveHandler::Callback(callback));
            }
            Binding::Copy(source) => {
                let own_id = Rc::new(OnceCell::new());
                let listener = self.click_listener(element, source, Rc::clone(&own_id));
                let id = self.store(
                    element,
                    BindingKind::Copy,
                    DirectiveHandler::Listener(Rc::clone(&listener)),
                );
                let _ = own_id.set(id);
                element.add_click_listener(listener);
            }
        }
    }

    fn unmounted(&self, element: &E) {
        let mut registry = self.registry.borrow_mut();

        for kind in [BindingKind::Success, BindingKind::Error] {
            registry.unregister(element.data(kind.data_key()).as_deref());
            element.remove_data(kind.data_key());
        }

        let copy_key = BindingKind::Copy.data_key();
        if let Some(id) = element.data(copy_key) {
            let released = registry.unregister(Some(id.as_str()));
            if let Some(DirectiveHandler::Listener(listener)) = released {
                element.remove_click_listener(&listener);
            }
            element.remove_data(copy_key);
        }

        debug!(live = registry.len(), "Unbound clipboard directive");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::SerializationError;
    use crate::infrastructure::element::MemoryElement;
    use serde_json::{json, Value};
    use std::cell::Cell;

    // Mock writer with a scripted result
    #[derive(Default)]
    struct ScriptedWriter {
        result: Cell<bool>,
        copied: RefCell<Vec<Value>>,
    }

    impl CopyValue for ScriptedWriter {
        fn copy_value(&self, value: &Value) -> Result<bool, SerializationError> {
            self.copied.borrow_mut().push(value.clone());
            Ok(self.result.get())
        }
    }

    fn directive(result: bool) -> (ClipboardDirective<MemoryElement<u32>>, Rc<ScriptedWriter>) {
        let writer = Rc::new(ScriptedWriter::default());
        writer.result.set(result);
        let directive = ClipboardDirective::new(Rc::clone(&writer) as Rc<dyn CopyValue>);
        (directive, writer)
    }

    fn recorder() -> (Rc<RefCell<Vec<Value>>>, Binding<u32>, Binding<u32>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let on_success = Rc::clone(&seen);
        let on_error = Rc::clone(&seen);
        (
            seen,
            Binding::on_success(move |p: &CopyPayload<u32>| {
                on_success.borrow_mut().push(json!({"ok": p.value, "event": p.event}))
            }),
            Binding::on_error(move |p: &CopyPayload<u32>| {
                on_error.borrow_mut().push(json!({"err": p.value, "event": p.event}))
            }),
        )
    }

    #[test]
    fn click_copies_and_routes_to_success() {
        let (directive, writer) = directive(true);
        let element = MemoryElement::new();
        let (seen, success, error) = recorder();

        directive.before_mount(&element, success);
        directive.before_mount(&element, error);
        directive.before_mount(&element, Binding::copy(ValueSource::literal("hello")));
        element.click(7);

        assert_eq!(*writer.copied.borrow(), vec![json!("hello")]);
        assert_eq!(*seen.borrow(), vec![json!({"ok": "hello", "event": 7})]);
    }

    #[test]
    fn failed_copy_routes_to_error() {
        let (directive, _writer) = directive(false);
        let element = MemoryElement::new();
        let (seen, _success, error) = recorder();

        directive.before_mount(&element, error);
        directive.before_mount(&element, Binding::copy(ValueSource::literal(42)));
        element.click(1);

        assert_eq!(*seen.borrow(), vec![json!({"err": 42, "event": 1})]);
    }

    #[test]
    fn falsy_value_still_copies() {
        let (directive, writer) = directive(true);
        let element = MemoryElement::new();

        directive.before_mount(&element, Binding::copy(ValueSource::literal(false)));
        element.click(0);

        assert_eq!(*writer.copied.borrow(), vec![json!(false)]);
    }

    #[test]
    fn missing_value_never_copies() {
        let (directive, writer) = directive(true);
        let element = MemoryElement::new();

        directive.before_mount(&element, Binding::copy_without_value());
        element.click(0);

        assert!(writer.copied.borrow().is_empty());
        assert_eq!(directive.live_handlers(), 1);
    }

    #[test]
    fn producer_is_resolved_per_click() {
        let (directive, writer) = directive(true);
        let element = MemoryElement::new();
        let counter = Rc::new(Cell::new(0));
        let source = {
            let counter = Rc::clone(&counter);
            ValueSource::producer(move || {
                counter.set(counter.get() + 1);
                json!(format!("copy #{}", counter.get()))
            })
        };

        directive.before_mount(&element, Binding::copy(source));
        element.click(0);
        element.click(0);

        assert_eq!(
            *writer.copied.borrow(),
            vec![json!("copy #1"), json!("copy #2")]
        );
    }

    #[test]
    fn unbind_releases_everything() {
        let (directive, writer) = directive(true);
        let element = MemoryElement::new();
        let (_seen, success, error) = recorder();

        directive.before_mount(&element, success);
        directive.before_mount(&element, error);
        directive.before_mount(&element, Binding::copy(ValueSource::literal("x")));
        let ids: Vec<String> = [BindingKind::Copy, BindingKind::Success, BindingKind::Error]
            .iter()
            .filter_map(|kind| element.data(kind.data_key()))
            .collect();
        assert_eq!(ids.len(), 3);

        directive.unmounted(&element);

        assert_eq!(directive.live_handlers(), 0);
        assert!(ids.iter().all(|id| !directive.is_live(id)));
        assert_eq!(element.listener_count(), 0);
        assert!(element.data(BindingKind::Copy.data_key()).is_none());

        element.click(0);
        assert!(writer.copied.borrow().is_empty());
    }

    #[test]
    fn unbind_tolerates_partial_bindings() {
        let (directive, _writer) = directive(true);
        let element = MemoryElement::new();
        let (_seen, success, _error) = recorder();

        directive.unmounted(&element);
        directive.before_mount(&element, success);
        directive.unmounted(&element);

        assert_eq!(directive.live_handlers(), 0);
    }

    #[test]
    fn rebinding_same_kind_does_not_grow_registry() {
        let (directive, writer) = directive(true);
        let element = MemoryElement::new();

        directive.before_mount(&element, Binding::copy(ValueSource::literal("a")));
        directive.before_mount(&element, Binding::copy(ValueSource::literal("b")));
        element.click(0);

        assert_eq!(directive.live_handlers(), 1);
        assert_eq!(element.listener_count(), 1);
        assert_eq!(*writer.copied.borrow(), vec![json!("b")]);
    }

    #[test]
    fn legacy_hook_names_behave_the_same() {
        let (directive, writer) = directive(true);
        let element = MemoryElement::new();

        directive.bind(&element, Binding::copy(ValueSource::literal("legacy")));
        element.click(0);
        directive.unbind(&element);
        element.click(0);

        assert_eq!(*writer.copied.borrow(), vec![json!("legacy")]);
        assert_eq!(directive.live_handlers(), 0);
    }

    #[test]
    fn callback_may_unbind_its_own_element() {
        let (directive, _writer) = directive(true);
        let directive = Rc::new(directive);
        let element = MemoryElement::new();

        let unbind = {
            let directive = Rc::downgrade(&directive);
            let element = element.clone();
            Binding::on_success(move |_: &CopyPayload<u32>| {
                if let Some(directive) = directive.upgrade() {
                    directive.unmounted(&element);
                }
            })
        };

        directive.before_mount(&element, unbind);
        directive.before_mount(&element, Binding::copy(ValueSource::literal("once")));
        element.click(0);

        assert_eq!(directive.live_handlers(), 0);
    }

    // Element handle that cannot detach listeners it did not attach itself
    #[derive(Clone)]
    struct UntrackedHandle(MemoryElement<u32>);

    impl Element for UntrackedHandle {
        type Event = u32;

        fn data(&self, key: &str) -> Option<String> {
            self.0.data(key)
        }

        fn set_data(&self, key: &str, value: &str) {
            self.0.set_data(key, value)
        }

        fn remove_data(&self, key: &str) {
            self.0.remove_data(key)
        }

        fn add_click_listener(&self, listener: ClickListener<u32>) {
            self.0.add_click_listener(listener)
        }

        fn remove_click_listener(&self, _listener: &ClickListener<u32>) {}
    }

    #[test]
    fn listener_left_attached_after_unbind_stays_inert() {
        let writer = Rc::new(ScriptedWriter::default());
        writer.result.set(true);
        let directive: ClipboardDirective<UntrackedHandle> =
            ClipboardDirective::new(Rc::clone(&writer) as Rc<dyn CopyValue>);
        let node = MemoryElement::new();

        directive.bind(&UntrackedHandle(node.clone()), Binding::copy(ValueSource::literal("x")));
        directive.unbind(&UntrackedHandle(node.clone()));
        node.click(0);

        assert_eq!(node.listener_count(), 1);
        assert_eq!(directive.live_handlers(), 0);
        assert!(writer.copied.borrow().is_empty());
    }

    #[test]
    fn stale_listener_ignores_clicks_after_rebind() {
        let writer = Rc::new(ScriptedWriter::default());
        writer.result.set(true);
        let directive: ClipboardDirective<UntrackedHandle> =
            ClipboardDirective::new(Rc::clone(&writer) as Rc<dyn CopyValue>);
        let node = MemoryElement::new();

        directive.bind(&UntrackedHandle(node.clone()), Binding::copy(ValueSource::literal("old")));
        directive.bind(&UntrackedHandle(node.clone()), Binding::copy(ValueSource::literal("new")));
        node.click(0);

        assert_eq!(node.listener_count(), 2);
        assert_eq!(*writer.copied.borrow(), vec![json!("new")]);
    }
}
