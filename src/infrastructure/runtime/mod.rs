//! Task spawner infrastructure module

mod queued;
#[cfg(not(target_arch = "wasm32"))]
mod tokio_local;

pub use queued::QueuedSpawner;
#[cfg(not(target_arch = "wasm32"))]
pub use tokio_local::TokioLocalSpawner;
