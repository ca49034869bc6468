//! Configuration domain module

mod directive_config;

pub use directive_config::{
    DirectiveConfig, DEFAULT_DIRECTIVE_NAME, DEFAULT_GLOBAL_NAME, DEFAULT_HANDHELD_PLATFORMS,
    DEFAULT_PERMISSION_NAME, DEFAULT_SELECTION_END, DEFAULT_SURFACE_STYLE,
};
