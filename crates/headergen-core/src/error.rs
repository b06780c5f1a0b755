//! Error types for the core library.

use std::path::PathBuf;
use thiserror::Error;

/// Why a document has no header category.
///
/// The `Display` text is the status message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Filename does not exist")]
    NoFilename,
    #[error("Extension not found")]
    NoExtension,
    #[error("Extension not supported")]
    Unsupported(String),
}

/// Failure to load a settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("settings file {0} must contain a JSON object")]
    NotAnObject(PathBuf),
}
