//! Error types for the simulation harness
//!
//! Harness-level errors are fatal to the whole invocation and carry a
//! distinct process exit code. A test that merely fails classification
//! is not an error; it is recorded in the run summary instead.

use std::io;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the simulation harness and encoder
#[derive(Error, Debug)]
pub enum Error {
    // === Encoder Errors ===
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to read input file '{path}': {error}")]
    InputNotFound { path: String, error: String },

    // === Discovery Errors ===
    #[error("No .hex files found under {0}")]
    NoTestsFound(String),

    #[error("No tests matched prefixes: {0}")]
    NoTestsMatched(String),

    // === Simulator Errors ===
    #[error("Executable {0} not found. Run 'make elab' first.")]
    ExecutableMissing(String),

    #[error("Failed to launch simulator '{path}': {error}")]
    ExecutableLaunchFailed { path: String, error: String },

    // === IO Errors ===
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Create an input-not-found error from a path and its read failure
    pub fn input_not_found(path: &std::path::Path, error: &io::Error) -> Self {
        Self::InputNotFound {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Create a launch-failed error from the executable path and spawn failure
    pub fn launch_failed(path: &std::path::Path, error: &io::Error) -> Self {
        Self::ExecutableLaunchFailed {
            path: path.display().to_string(),
            error: error.to_string(),
        }
    }

    /// Process exit code for this error.
    ///
    /// The exit contract is machine-checked by callers: 2 means the
    /// simulator was never elaborated, 127 means the OS could not spawn
    /// it, everything else is a general failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ExecutableMissing(_) => 2,
            Error::ExecutableLaunchFailed { .. } => 127,
            _ => 1,
        }
    }
}
