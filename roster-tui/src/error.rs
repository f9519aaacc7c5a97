//! Error types for the binary.

use roster_lib::FetchError;

/// Failures that end the program. Fetch failures during a run are not among
/// them; the grid just shows an empty roster.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Terminal setup, drawing, or log file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The row source could not be configured.
    #[error("Row source error: {0}")]
    Source(#[from] FetchError),

    /// A global logger was already installed.
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),

    /// No `--log-file` given and no home directory to put one in.
    #[error("Cannot determine a log directory; pass --log-file")]
    NoLogLocation,
}
