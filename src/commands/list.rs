//! Implementation of the `guardgen list` command.

use crate::cli::ListArgs;
use crate::config::Config;
use crate::context::GeneratorContext;
use crate::error::{GuardgenError, Result};
use crate::fs::read_bytes_if_exists;
use crate::guardfile::includes_plugin;
use crate::plugin::PluginRegistry;
use crate::ui::Ui;
use std::fs;

/// Where a listed entry comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Plugin,
    UserTemplate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    name: String,
    source: Source,
    in_guardfile: bool,
}

/// Execute the `guardgen list` command.
pub fn cmd_list(args: ListArgs, ui: &dyn Ui) -> Result<()> {
    let config = Config::discover()?;
    let mut ctx = GeneratorContext::resolve(&config)?;
    if let Some(path) = &args.guardfile {
        ctx = ctx.with_guardfile(path);
    }

    let registry = PluginRegistry::with_builtins();
    let entries = collect_entries(&ctx, &registry)?;

    if entries.is_empty() {
        ui.info("No plugins or templates available.");
        return Ok(());
    }

    for entry in &entries {
        let source = match entry.source {
            Source::Plugin => "plugin",
            Source::UserTemplate => "template",
        };
        let marker = if entry.in_guardfile { "*" } else { " " };
        ui.info(&format!("{} {:<20} ({})", marker, entry.name, source));
    }
    ui.info("");
    ui.info("* = already in Guardfile");

    Ok(())
}

/// Registered plugins in registry order, then user templates sorted by name.
/// A user template shadowed by a plugin of the same name is not listed.
fn collect_entries(ctx: &GeneratorContext, registry: &PluginRegistry) -> Result<Vec<Entry>> {
    // A missing Guardfile lists nothing as added; any other read failure is an error.
    let bytes = read_bytes_if_exists(&ctx.guardfile)?;
    let guardfile = String::from_utf8_lossy(&bytes);

    let mut entries: Vec<Entry> = registry
        .plugin_names()
        .into_iter()
        .map(|name| Entry {
            in_guardfile: includes_plugin(&guardfile, &name),
            name,
            source: Source::Plugin,
        })
        .collect();

    if ctx.home_templates_dir.is_dir() {
        let dir = fs::read_dir(&ctx.home_templates_dir).map_err(|e| {
            GuardgenError::Io(format!(
                "failed to read templates directory '{}': {}",
                ctx.home_templates_dir.display(),
                e
            ))
        })?;

        let mut templates: Vec<String> = dir
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .filter(|name| registry.plugin_class(name).is_none())
            .collect();
        templates.sort();

        entries.extend(templates.into_iter().map(|name| Entry {
            in_guardfile: includes_plugin(&guardfile, &name),
            name,
            source: Source::UserTemplate,
        }));
    }

    Ok(entries)
}
