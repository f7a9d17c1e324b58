//! Plugins and the registry that resolves them by name.
//!
//! A [`Plugin`] knows how to register its own configuration block into a
//! Guardfile. The [`PluginRegistry`] maps names to plugins and lists every
//! installed plugin in registration order.

mod builtin;
mod registry;

pub use builtin::{TemplatePlugin, builtin_plugins};
pub use registry::PluginRegistry;

use crate::error::Result;
use crate::guardfile::{append_to_file, includes_plugin};
use crate::ui::Ui;
use std::path::Path;

/// An installed plugin able to add itself to a Guardfile.
pub trait Plugin {
    /// Name the plugin is declared under (`guard :<name>`).
    fn name(&self) -> &str;

    /// Configuration block appended to the Guardfile.
    fn template(&self) -> &str;

    /// Register this plugin into the Guardfile at `guardfile`.
    ///
    /// Skips the write when the Guardfile already declares the plugin;
    /// otherwise appends [`Plugin::template`] after a blank line.
    fn add_to_guardfile(&self, guardfile: &Path, ui: &dyn Ui) -> Result<()> {
        let content = crate::fs::read_bytes(guardfile)?;

        if includes_plugin(&String::from_utf8_lossy(&content), self.name()) {
            ui.info(&format!("Guardfile already includes {} guard", self.name()));
            return Ok(());
        }

        append_to_file(guardfile, self.template().as_bytes())?;
        ui.info(&format!(
            "{} guard added to Guardfile, feel free to edit it",
            self.name()
        ));
        Ok(())
    }
}

/// Lookup key for a plugin name: lowercased with dashes removed, the same way
/// the host tool maps `guard-foo-bar` style names onto a class.
pub(crate) fn lookup_key(name: &str) -> String {
    name.to_lowercase().chars().filter(|c| *c != '-').collect()
}
