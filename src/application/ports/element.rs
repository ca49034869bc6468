//! UI element port interface

use std::rc::Rc;

/// Native click listener attached to an element
pub type ClickListener<Ev> = Rc<dyn Fn(&Ev)>;

/// Port for a UI element a directive is bound to.
///
/// Elements are handles: clones refer to the same underlying node, so
/// methods take `&self`.
pub trait Element: Clone + 'static {
    /// Event type delivered to click listeners
    type Event: Clone + 'static;

    /// Read a data attribute
    fn data(&self, key: &str) -> Option<String>;

    /// Write a data attribute
    fn set_data(&self, key: &str, value: &str);

    /// Delete a data attribute
    fn remove_data(&self, key: &str);

    /// Attach a click listener
    fn add_click_listener(&self, listener: ClickListener<Self::Event>);

    /// Detach a click listener previously passed to `add_click_listener`.
    /// Listeners are compared by identity.
    fn remove_click_listener(&self, listener: &ClickListener<Self::Event>);
}
