//! Permission infrastructure module

mod fixed;

pub use fixed::FixedPermissions;
