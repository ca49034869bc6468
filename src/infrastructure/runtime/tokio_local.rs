//! Tokio local spawner

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use tokio::task::{self, LocalSet};
use tracing::debug;

use crate::application::ports::{LocalTask, Spawner};

/// Spawns detached tasks onto a `tokio::task::LocalSet` the spawner owns.
///
/// Spawning never needs a runtime, so writes are safe from any context.
/// The host drives the tasks with [`TokioLocalSpawner::run_pending`] from
/// inside a tokio runtime. Clones share the same set.
#[derive(Clone, Default)]
pub struct TokioLocalSpawner {
    local: Rc<LocalSet>,
    pending: Rc<Cell<usize>>,
    finished: Rc<Cell<usize>>,
}

impl TokioLocalSpawner {
    /// Create a spawner with an empty task set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of spawned tasks that have not finished
    pub fn pending(&self) -> usize {
        self.pending.get()
    }

    /// Drive the task set until every spawned task, including tasks spawned
    /// while driving, has finished. Returns how many tasks finished.
    ///
    /// Must be awaited inside a tokio runtime.
    pub async fn run_pending(&self) -> usize {
        let before = self.finished.get();
        let pending = Rc::clone(&self.pending);

        self.local
            .run_until(async move {
                while pending.get() > 0 {
                    task::yield_now().await;
                }
            })
            .await;

        let finished = self.finished.get() - before;
        debug!(finished, "Drained local tasks");
        finished
    }
}

impl fmt::Debug for TokioLocalSpawner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokioLocalSpawner")
            .field("pending", &self.pending())
            .finish()
    }
}

impl Spawner for TokioLocalSpawner {
    fn spawn_local(&self, task: LocalTask) {
        let pending = Rc::clone(&self.pending);
        let finished = Rc::clone(&self.finished);
        pending.set(pending.get() + 1);

        // Detached: the join handle is dropped on purpose
        let _ = self.local.spawn_local(async move {
            task.await;
            pending.set(pending.get() - 1);
            finished.set(finished.get() + 1);
        });
    }
}
