//! Element infrastructure module

mod memory;

pub use memory::MemoryElement;
