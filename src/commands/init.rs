//! Implementation of the `guardgen init` command.
//!
//! 1. Creates the Guardfile from the template if it is missing (or fails with
//!    `--abort-on-existence` when it is present)
//! 2. Stops there with `--bare`
//! 3. Adds each named plugin, or every installed plugin when none are named

use crate::cli::InitArgs;
use crate::config::{Config, GeneratorOptions};
use crate::context::GeneratorContext;
use crate::error::Result;
use crate::generator::Generator;
use crate::plugin::PluginRegistry;
use crate::ui::Ui;

/// Execute the `guardgen init` command.
pub fn cmd_init(args: InitArgs, ui: &dyn Ui) -> Result<()> {
    let config = Config::discover()?;

    let mut options = config.generator_options();
    options.abort_on_existence |= args.abort_on_existence;

    let mut ctx = GeneratorContext::resolve(&config)?;
    if let Some(path) = &args.guardfile {
        ctx = ctx.with_guardfile(path);
    }

    let registry = PluginRegistry::with_builtins();
    run_init(ctx, options, &registry, ui, &args.plugins, args.bare)
}

fn run_init(
    ctx: GeneratorContext,
    options: GeneratorOptions,
    registry: &PluginRegistry,
    ui: &dyn Ui,
    plugins: &[String],
    bare: bool,
) -> Result<()> {
    let generator = Generator::new(ctx, options, registry, ui);

    generator.create_guardfile()?;
    if bare {
        return Ok(());
    }

    if plugins.is_empty() {
        generator.initialize_all_templates();
    } else {
        for name in plugins {
            generator.initialize_template(name)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GuardgenError;
    use crate::guardfile::{DEFAULT_TEMPLATE, includes_plugin};
    use crate::test_support::{DirGuard, EnvGuard, RecordingUi};
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    // Field order matters: the working directory is restored before the
    // temp dirs are removed.
    struct Env {
        _dir: DirGuard,
        _home: EnvGuard,
        _config: EnvGuard,
        work: TempDir,
        home: TempDir,
    }

    fn setup() -> Env {
        let work = TempDir::new().unwrap();
        let home = TempDir::new().unwrap();
        let dir = DirGuard::new(work.path());
        let home_guard = EnvGuard::set("HOME", home.path());
        let config_guard = EnvGuard::unset(crate::config::CONFIG_ENV_VAR);
        Env {
            work,
            home,
            _dir: dir,
            _home: home_guard,
            _config: config_guard,
        }
    }

    fn args(plugins: &[&str]) -> InitArgs {
        InitArgs {
            plugins: plugins.iter().map(|p| p.to_string()).collect(),
            bare: false,
            abort_on_existence: false,
            guardfile: None,
        }
    }

    #[test]
    #[serial]
    fn init_bare_only_writes_template() {
        let env = setup();
        let ui = RecordingUi::default();

        cmd_init(
            InitArgs {
                bare: true,
                ..args(&[])
            },
            &ui,
        )
        .unwrap();

        let content = fs::read_to_string(env.work.path().join("Guardfile")).unwrap();
        assert_eq!(content, DEFAULT_TEMPLATE);
        assert_eq!(ui.infos().len(), 1);
    }

    #[test]
    #[serial]
    fn init_without_names_adds_all_builtins() {
        let env = setup();
        let ui = RecordingUi::default();

        cmd_init(args(&[]), &ui).unwrap();

        let content = fs::read_to_string(env.work.path().join("Guardfile")).unwrap();
        assert!(includes_plugin(&content, "shell"));
        assert!(includes_plugin(&content, "cargo"));
    }

    #[test]
    #[serial]
    fn init_with_user_template() {
        let env = setup();
        let templates = env.home.path().join(".guard").join("templates");
        fs::create_dir_all(&templates).unwrap();
        fs::write(templates.join("bar"), "guard :bar").unwrap();
        let ui = RecordingUi::default();

        cmd_init(args(&["bar"]), &ui).unwrap();

        let content = fs::read_to_string(env.work.path().join("Guardfile")).unwrap();
        assert!(content.starts_with(DEFAULT_TEMPLATE));
        assert!(content.ends_with("\n\nguard :bar\n"));
        assert!(!includes_plugin(&content, "shell"));
    }

    #[test]
    #[serial]
    fn init_with_unknown_name_reports_and_succeeds() {
        let _env = setup();
        let ui = RecordingUi::default();

        cmd_init(args(&["foo"]), &ui).unwrap();

        assert_eq!(
            ui.errors(),
            vec![
                "Could not load 'guard/foo' or '~/.guard/templates/foo' or find class Guard::Foo"
                    .to_string()
            ]
        );
    }

    #[test]
    #[serial]
    fn init_abort_on_existence_leaves_guardfile() {
        let env = setup();
        let guardfile = env.work.path().join("Guardfile");
        fs::write(&guardfile, "existing").unwrap();
        let ui = RecordingUi::default();

        let err = cmd_init(
            InitArgs {
                abort_on_existence: true,
                ..args(&["shell"])
            },
            &ui,
        )
        .unwrap_err();

        assert!(matches!(err, GuardgenError::GuardfileExists(_)));
        assert!(err.to_string().starts_with("Guardfile already exists at "));
        assert!(err.to_string().ends_with("Guardfile"));
        assert_eq!(fs::read_to_string(&guardfile).unwrap(), "existing");
    }

    #[test]
    #[serial]
    fn init_existing_guardfile_still_adds_plugins() {
        let env = setup();
        let guardfile = env.work.path().join("Guardfile");
        fs::write(&guardfile, "# mine\n").unwrap();
        let ui = RecordingUi::default();

        cmd_init(args(&["shell"]), &ui).unwrap();

        let content = fs::read_to_string(&guardfile).unwrap();
        assert!(content.starts_with("# mine\n\n"));
        assert!(includes_plugin(&content, "shell"));
    }

    #[test]
    #[serial]
    fn init_honors_explicit_guardfile_path() {
        let env = setup();
        let ui = RecordingUi::default();

        cmd_init(
            InitArgs {
                bare: true,
                guardfile: Some("config/Guardfile".into()),
                ..args(&[])
            },
            &ui,
        )
        .unwrap();

        assert!(env.work.path().join("config").join("Guardfile").exists());
        assert!(!env.work.path().join("Guardfile").exists());
    }

    #[test]
    #[serial]
    fn init_abort_flag_from_config_file() {
        let env = setup();
        let config_path = env.home.path().join(".guard").join("guardgen.yaml");
        fs::create_dir_all(config_path.parent().unwrap()).unwrap();
        fs::write(&config_path, "abort_on_existence: true\n").unwrap();
        fs::write(env.work.path().join("Guardfile"), "existing").unwrap();
        let ui = RecordingUi::default();

        let err = cmd_init(args(&[]), &ui).unwrap_err();

        assert!(matches!(err, GuardgenError::GuardfileExists(_)));
    }
}
