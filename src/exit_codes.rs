//! Exit code constants for the guardgen CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config)
//! - 2: Guardfile already exists and `--abort-on-existence` was given
//! - 3: Filesystem failure

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid configuration file.
pub const USER_ERROR: i32 = 1;

/// The Guardfile already exists and generation was asked to abort.
pub const GUARDFILE_EXISTS: i32 = 2;

/// Reading or writing the Guardfile or a template failed.
pub const IO_FAILURE: i32 = 3;
