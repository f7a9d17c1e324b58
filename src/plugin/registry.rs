//! Name-keyed plugin registry.

use super::{Plugin, builtin_plugins, lookup_key};

/// Installed plugins, kept in registration order.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in plugins.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for plugin in builtin_plugins() {
            registry.register(plugin);
        }
        registry
    }

    /// Register a plugin. A plugin with the same lookup name replaces the
    /// earlier one in place.
    pub fn register<P: Plugin + 'static>(&mut self, plugin: P) {
        let key = lookup_key(plugin.name());
        match self
            .plugins
            .iter()
            .position(|existing| lookup_key(existing.name()) == key)
        {
            Some(index) => self.plugins[index] = Box::new(plugin),
            None => self.plugins.push(Box::new(plugin)),
        }
    }

    /// Find the plugin registered under `name`, ignoring case and dashes.
    pub fn plugin_class(&self, name: &str) -> Option<&dyn Plugin> {
        let key = lookup_key(name);
        self.plugins
            .iter()
            .find(|plugin| lookup_key(plugin.name()) == key)
            .map(|plugin| &**plugin)
    }

    /// Names of all registered plugins, in registration order.
    pub fn plugin_names(&self) -> Vec<String> {
        self.plugins.iter().map(|p| p.name().to_string()).collect()
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("plugins", &self.plugin_names())
            .finish()
    }
}
