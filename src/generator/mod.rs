//! The Guardfile generator.
//!
//! Creates a Guardfile from a template and appends plugin configuration to
//! it. Each operation is a single pass: there are no retries and no
//! intermediate states.
//!
//! # Resolution order for `initialize_template`
//!
//! 1. A plugin registered under the name registers itself.
//! 2. Otherwise a user template at `~/.guard/templates/<name>` is appended.
//! 3. Otherwise the failure is reported through the [`Ui`] and nothing is written.

use crate::config::GeneratorOptions;
use crate::context::GeneratorContext;
use crate::error::{GuardgenError, Result};
use crate::fs::{atomic_write, read_bytes};
use crate::guardfile::{DEFAULT_TEMPLATE, append_to_file};
use crate::plugin::PluginRegistry;
use crate::ui::Ui;


/// What `create_guardfile` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A new Guardfile was written from the template.
    Created,
    /// A Guardfile was already present and left untouched.
    AlreadyExists,
}

/// How `initialize_template` resolved a plugin name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateOutcome {
    /// A registered plugin registered itself.
    Plugin,
    /// A user template was appended to the Guardfile.
    UserTemplate,
    /// Nothing matched; an error was reported and no file was modified.
    NotFound,
}

/// Scaffolds a Guardfile and appends plugin templates to it.
pub struct Generator<'a> {
    ctx: GeneratorContext,
    options: GeneratorOptions,
    registry: &'a PluginRegistry,
    ui: &'a dyn Ui,
}

impl<'a> Generator<'a> {
    pub fn new(
        ctx: GeneratorContext,
        options: GeneratorOptions,
        registry: &'a PluginRegistry,
        ui: &'a dyn Ui,
    ) -> Self {
        Self {
            ctx,
            options,
            registry,
            ui,
        }
    }

    /// Write the Guardfile template to the Guardfile path unless one exists.
    ///
    /// With `abort_on_existence`, an existing Guardfile is an error
    /// ([`GuardgenError::GuardfileExists`]); the caller decides whether that
    /// ends the process.
    pub fn create_guardfile(&self) -> Result<CreateOutcome> {
        let path = &self.ctx.guardfile;

        if path.exists() {
            if self.options.abort_on_existence {
                return Err(GuardgenError::GuardfileExists(path.clone()));
            }
            tracing::debug!(path = %path.display(), "Guardfile exists, skipping creation");
            return Ok(CreateOutcome::AlreadyExists);
        }

        let template = match &self.ctx.guardfile_template {
            Some(template_path) => read_bytes(template_path)?,
            None => DEFAULT_TEMPLATE.as_bytes().to_vec(),
        };

        self.ui
            .info(&format!("Writing new Guardfile to {}", path.display()));
        atomic_write(path, &template)?;

        Ok(CreateOutcome::Created)
    }

    /// Add the configuration for plugin `name` to the Guardfile.
    ///
    /// An unresolvable name is reported and returns
    /// [`TemplateOutcome::NotFound`]; only I/O failures are errors.
    pub fn initialize_template(&self, name: &str) -> Result<TemplateOutcome> {
        if let Some(plugin) = self.registry.plugin_class(name) {
            tracing::debug!(plugin = name, "delegating to registered plugin");
            plugin.add_to_guardfile(&self.ctx.guardfile, self.ui)?;
            return Ok(TemplateOutcome::Plugin);
        }

        let template_path = self.ctx.user_template_path(name);
        if template_path.is_file() {
            tracing::debug!(
                plugin = name,
                template = %template_path.display(),
                "appending user template"
            );
            let template = read_bytes(&template_path)?;
            append_to_file(&self.ctx.guardfile, &template)?;
            self.ui.info(&format!(
                "{} template added to Guardfile, feel free to edit it",
                name
            ));
            return Ok(TemplateOutcome::UserTemplate);
        }

        let err = GuardgenError::PluginNotFound {
            name: name.to_string(),
        };
        self.ui.error(&err.to_string());
        Ok(TemplateOutcome::NotFound)
    }

    /// Initialize the template of every registered plugin, in registry order.
    ///
    /// A failing plugin is reported and the remaining plugins still run.
    pub fn initialize_all_templates(&self) {
        for name in self.registry.plugin_names() {
            if let Err(err) = self.initialize_template(&name) {
                tracing::warn!(plugin = %name, error = %err, "plugin initialization failed");
                self.ui.error(&err.to_string());
            }
        }
    }
}
