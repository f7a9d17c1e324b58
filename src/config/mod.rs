//! Configuration for guardgen.
//!
//! [`Config`] represents the optional `~/.guard/guardgen.yaml` file. Parsing is
//! forward-compatible (unknown fields are ignored) and every field has a
//! default, so a missing or empty file yields [`Config::default`].
//! [`GeneratorOptions`] is the per-run option set handed to the generator.

mod model;
mod operations;


pub use model::{
    CONFIG_ENV_VAR, Config, DEFAULT_CONFIG_FILE, DEFAULT_GUARDFILE_NAME, GeneratorOptions,
};
