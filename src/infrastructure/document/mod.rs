//! Document infrastructure module

mod memory;

pub use memory::{CopyCommand, MemoryDocument, MemorySurface, MEMORY_USER_AGENT};
