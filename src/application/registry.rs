//! Handler registry

use std::collections::HashMap;

use tracing::debug;

use crate::domain::handler_id::HandlerId;

/// Maps generated ids to handlers.
///
/// Ids come from a counter that only moves forward, so an id is never
/// handed out twice for the lifetime of the registry.
#[derive(Debug)]
pub struct HandlerRegistry<H> {
    next_sequence: u64,
    handlers: HashMap<HandlerId, H>,
}

impl<H> HandlerRegistry<H> {
    /// Create an empty registry. The first id is `$1`.
    pub fn new() -> Self {
        Self {
            next_sequence: 1,
            handlers: HashMap::new(),
        }
    }

    /// Store a handler under a fresh id
    pub fn register(&mut self, handler: H) -> HandlerId {
        let id = HandlerId::from_sequence(self.next_sequence);
        self.next_sequence += 1;
        self.handlers.insert(id.clone(), handler);
        debug!(handler_id = %id, live = self.handlers.len(), "Registered handler");
        id
    }

    /// Drop the handler stored under `id`.
    ///
    /// `None`, empty and unknown ids are ignored.
    pub fn unregister(&mut self, id: Option<&str>) -> Option<H> {
        let id = id.filter(|id| !id.is_empty())?;
        let removed = self.handlers.remove(id);
        if removed.is_some() {
            debug!(handler_id = id, live = self.handlers.len(), "Unregistered handler");
        }
        removed
    }

    /// Look up a handler
    pub fn lookup(&self, id: &str) -> Option<&H> {
        self.handlers.get(id)
    }

    /// Check whether `id` is live
    pub fn contains(&self, id: &str) -> bool {
        self.handlers.contains_key(id)
    }

    /// Number of live handlers
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Check if no handler is live
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<H> Default for HandlerRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
