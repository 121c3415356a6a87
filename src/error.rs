//! Error types for the siso launcher

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for launcher operations
pub type Result<T> = std::result::Result<T, SisoError>;

/// Main error type for the launcher
#[derive(Error, Debug)]
pub enum SisoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while locating or running siso
    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),
}

/// Errors raised while reading a `.sisorc` file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file exists but could not be read. The underlying error is kept
    /// as-is so callers can inspect its kind.
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors raised while locating or running the siso binary
#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("siso binary not found (searched: {0})")]
    BinaryNotFound(String),

    #[error("Failed to run '{}': {source}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Specialized result type for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Specialized result type for execution operations
pub type ExecutionResult<T> = std::result::Result<T, ExecutionError>;
