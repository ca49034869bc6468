//! Clipboard plugin (host installation)

use std::rc::Rc;

use serde_json::Value;
use tracing::debug;

use crate::domain::config::DirectiveConfig;

use super::directive::ClipboardDirective;
use super::ports::{DirectiveHooks, GlobalClipboard, HostApp};
use super::writer::CopyValue;

/// Installs the global clipboard function and the clipboard directive.
///
/// Every installation gets a directive with its own handler registry, so
/// two applications on one page never share handler ids.
pub struct ClipboardPlugin {
    writer: Rc<dyn CopyValue>,
    config: DirectiveConfig,
}

impl ClipboardPlugin {
    /// Create a plugin with default names
    pub fn new<W>(writer: W) -> Self
    where
        W: CopyValue + 'static,
    {
        Self::with_config(writer, DirectiveConfig::empty())
    }

    /// Create a plugin using the names in `config`
    pub fn with_config<W>(writer: W, config: DirectiveConfig) -> Self
    where
        W: CopyValue + 'static,
    {
        Self {
            writer: Rc::new(writer),
            config,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &DirectiveConfig {
        &self.config
    }

    /// The function exposed to components as the global clipboard
    pub fn global_clipboard(&self) -> GlobalClipboard {
        let writer = Rc::clone(&self.writer);
        Rc::new(move |value: &Value| writer.copy_value(value))
    }

    /// Install into a host application.
    ///
    /// Returns the registered directive so the caller can inspect it.
    pub fn install<H: HostApp>(&self, app: &mut H) -> Rc<ClipboardDirective<H::Element>> {
        let global_name = self.config.global_name_or_default();
        let directive_name = self.config.directive_name_or_default();

        app.provide_global(global_name, self.global_clipboard());

        let directive = Rc::new(ClipboardDirective::new(Rc::clone(&self.writer)));
        app.register_directive(
            directive_name,
            Rc::clone(&directive) as Rc<dyn DirectiveHooks<H::Element>>,
        );

        debug!(global = global_name, directive = directive_name, "Installed clipboard plugin");
        directive
    }
}
