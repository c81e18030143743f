//! Error types for caur
//!
//! All modules use `CaurResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for caur operations
pub type CaurResult<T> = Result<T, CaurError>;

/// All errors that can occur in caur
#[derive(Error, Debug)]
pub enum CaurError {
    // Usage errors
    #[error("no operation specified (use -h for help)")]
    NoOperation,

    #[error("no targets specified (use -h for help)")]
    NoTargets,

    #[error("unrecognized option '{0}'")]
    UnrecognizedOption(String),

    #[error("invalid package name: '{0}'")]
    InvalidPackageName(String),

    #[error("{0} (use -h for help)")]
    Usage(String),

    // Target errors
    #[error("target not found: {0}")]
    TargetNotFound(String),

    #[error("Invalid input")]
    InvalidInput,

    // Process errors
    #[error("failed to run {command}: {source}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with status {code}")]
    CommandFailed { command: String, code: i32 },

    #[error("{command} terminated by signal")]
    ProcessSignaled { command: String },

    #[error("failed to clone {package} (git exited with status {code})")]
    CloneFailed { package: String, code: i32 },

    // Environment errors
    #[error("could not determine home directory")]
    HomeNotFound,

    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CaurError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command spawn error
    pub fn command_spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandSpawn {
            command: command.into(),
            source,
        }
    }

    /// Whether the error stems from how the program was invoked
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Self::NoOperation
                | Self::NoTargets
                | Self::UnrecognizedOption(_)
                | Self::InvalidPackageName(_)
                | Self::Usage(_)
        )
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CommandSpawn { .. } => Some("Make sure the program is installed and on PATH"),
            Self::CloneFailed { .. } => Some("Check the package name and your network connection"),
            Self::HomeNotFound => Some("Set the HOME environment variable"),
            Self::InvalidPackageName(_) => {
                Some("Package names may contain letters, digits and @ . _ + -")
            }
            _ => None,
        }
    }
}
