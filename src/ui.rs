//! User-facing messages.
//!
//! The generator reports progress and non-fatal failures through the [`Ui`]
//! trait so callers (and tests) decide where the messages go.

/// Sink for informational and error messages shown to the user.
pub trait Ui {
    /// Report progress, e.g. a file was written.
    fn info(&self, message: &str);

    /// Report a failure the user should act on.
    fn error(&self, message: &str);
}

/// Prints info to stdout and errors to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleUi;

impl Ui for ConsoleUi {
    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn error(&self, message: &str) {
        eprintln!("{}", error_line(message));
    }
}

/// The line printed for an error. Command failures and reported resolution
/// failures share this prefix.
pub fn error_line(message: &str) -> String {
    format!("ERROR: {}", message)
}
