//! Plugins shipped with guardgen, each carrying an embedded template.

use super::Plugin;

/// A plugin whose registration is appending a fixed template.
#[derive(Debug, Clone)]
pub struct TemplatePlugin {
    name: String,
    template: String,
}

impl TemplatePlugin {
    pub fn new(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }
}

impl Plugin for TemplatePlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn template(&self) -> &str {
        &self.template
    }
}

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("shell", include_str!("../../templates/plugins/shell")),
    ("cargo", include_str!("../../templates/plugins/cargo")),
];

/// The plugins available out of the box, in listing order.
pub fn builtin_plugins() -> Vec<TemplatePlugin> {
    BUILTIN_TEMPLATES
        .iter()
        .map(|(name, template)| TemplatePlugin::new(*name, *template))
        .collect()
}
