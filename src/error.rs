use std::io;
use std::time::Duration;
use thiserror::Error;

/// Custom error type for the XOLtab application
#[derive(Error, Debug)]
pub enum XolError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Baseline runtime/metrics facts could not be read at all.
    #[error("System metrics unavailable: {0}")]
    Metrics(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for the XOLtab application
pub type Result<T> = std::result::Result<T, XolError>;

impl XolError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        XolError::Config(msg.into())
    }

    /// Create a metrics error
    pub fn metrics<S: Into<String>>(msg: S) -> Self {
        XolError::Metrics(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        XolError::Other(msg.into())
    }
}

/// Why an external command produced no usable output.
///
/// Never surfaced to the presenter; probes collapse it into their sentinel.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("executable not found: {0}")]
    NotFound(String),

    #[error("permission denied running {0}")]
    PermissionDenied(String),

    #[error("{program} exited with status {code:?}")]
    NonZeroExit { program: String, code: Option<i32> },

    #[error("{program} timed out after {}ms", after.as_millis())]
    TimedOut { program: String, after: Duration },

    #[error("{0} produced non UTF-8 output")]
    InvalidUtf8(String),

    #[error("IO error running {program}: {source}")]
    Io {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl CommandError {
    /// Classify a spawn/wait failure by its `io::ErrorKind`
    pub fn from_io(program: &str, err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => CommandError::NotFound(program.to_string()),
            io::ErrorKind::PermissionDenied => CommandError::PermissionDenied(program.to_string()),
            _ => CommandError::Io {
                program: program.to_string(),
                source: err,
            },
        }
    }
}
