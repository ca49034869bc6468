//! In-memory element adapter
//!
//! Useful for hosts that render outside a browser, and for tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::application::ports::{ClickListener, Element};

struct Node<Ev> {
    data: RefCell<BTreeMap<String, String>>,
    listeners: RefCell<Vec<ClickListener<Ev>>>,
}

/// Element handle backed by plain memory. Clones share the same node.
pub struct MemoryElement<Ev> {
    node: Rc<Node<Ev>>,
}

impl<Ev> MemoryElement<Ev> {
    /// Create a new element with no data and no listeners
    pub fn new() -> Self {
        Self {
            node: Rc::new(Node {
                data: RefCell::new(BTreeMap::new()),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Deliver a click to every attached listener.
    ///
    /// Listeners may add or remove listeners while running; changes apply
    /// from the next click.
    pub fn click(&self, event: Ev) {
        let listeners: Vec<ClickListener<Ev>> = self.node.listeners.borrow().clone();
        for listener in listeners {
            listener(&event);
        }
    }

    /// Number of attached click listeners
    pub fn listener_count(&self) -> usize {
        self.node.listeners.borrow().len()
    }

    /// Snapshot of the data attributes
    pub fn dataset(&self) -> BTreeMap<String, String> {
        self.node.data.borrow().clone()
    }

    /// Whether two handles refer to the same node
    pub fn same_node(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }
}

impl<Ev> Default for MemoryElement<Ev> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ev> Clone for MemoryElement<Ev> {
    fn clone(&self) -> Self {
        Self {
            node: Rc::clone(&self.node),
        }
    }
}

impl<Ev> fmt::Debug for MemoryElement<Ev> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("data", &self.node.data.borrow())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl<Ev: Clone + 'static> Element for MemoryElement<Ev> {
    type Event = Ev;

    fn data(&self, key: &str) -> Option<String> {
        self.node.data.borrow().get(key).cloned()
    }

    fn set_data(&self, key: &str, value: &str) {
        self.node
            .data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove_data(&self, key: &str) {
        self.node.data.borrow_mut().remove(key);
    }

    fn add_click_listener(&self, listener: ClickListener<Ev>) {
        self.node.listeners.borrow_mut().push(listener);
    }

    fn remove_click_listener(&self, listener: &ClickListener<Ev>) {
        self.node
            .listeners
            .borrow_mut()
            .retain(|attached| !Rc::ptr_eq(attached, listener));
    }
}
