//! Queued spawner
//!
//! Holds detached tasks until the host drives them, for hosts that run
//! their own event loop.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::application::ports::{LocalTask, Spawner};

/// Spawner that queues tasks. Clones share the queue.
#[derive(Clone, Default)]
pub struct QueuedSpawner {
    queue: Rc<RefCell<Vec<LocalTask>>>,
}

impl QueuedSpawner {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting to run
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run every queued task to completion, including tasks queued while
    /// running. Returns how many tasks ran.
    pub async fn run_pending(&self) -> usize {
        let mut ran = 0;
        loop {
            let batch: Vec<LocalTask> = self.queue.borrow_mut().drain(..).collect();
            if batch.is_empty() {
                return ran;
            }
            for task in batch {
                task.await;
                ran += 1;
            }
        }
    }
}

impl fmt::Debug for QueuedSpawner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueuedSpawner")
            .field("pending", &self.pending())
            .finish()
    }
}

impl Spawner for QueuedSpawner {
    fn spawn_local(&self, task: LocalTask) {
        self.queue.borrow_mut().push(task);
    }
}
