//! Browser task spawner

use crate::application::ports::{LocalTask, Spawner};

/// Runs detached tasks on the browser microtask queue
#[derive(Debug, Clone, Copy, Default)]
pub struct WebSpawner;

impl WebSpawner {
    /// Create a new spawner
    pub fn new() -> Self {
        Self
    }
}

impl Spawner for WebSpawner {
    fn spawn_local(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
