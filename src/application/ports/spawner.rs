//! Local task spawner port interface

use std::future::Future;
use std::pin::Pin;

/// A detached task bound to the UI thread
pub type LocalTask = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// Port for fire-and-forget work on the current thread.
///
/// The caller never observes the task's completion.
pub trait Spawner {
    /// Start the task without waiting for it
    fn spawn_local(&self, task: LocalTask);
}
