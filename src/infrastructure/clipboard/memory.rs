//! In-memory asynchronous clipboard adapter

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::application::ports::{Clipboard, ClipboardError};

/// Clipboard that keeps every write in memory. Clones share the history.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    history: Rc<RefCell<Vec<String>>>,
}

impl MemoryClipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Last written text
    pub fn contents(&self) -> Option<String> {
        self.history.borrow().last().cloned()
    }

    /// Every write, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Clipboard for MemoryClipboard {
    async fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        self.history.borrow_mut().push(text.to_string());
        Ok(())
    }
}
