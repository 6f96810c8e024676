//! Domain-specific error types for zsettings.
//!
//! Rendering errors signal programming mistakes in the host or the binding
//! code and are never retried. Configuration and process errors are
//! recoverable and usually end up as a log line.

use thiserror::Error;

use crate::adapter::ViewType;

/// Errors raised by the list renderer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The host asked for a view-type tag outside the known set.
    #[error("Unrecognized view type tag: {0}")]
    UnrecognizedViewType(u32),

    /// A slot created for one view type was bound to an entry of another.
    #[error("Cannot bind {found:?} entry into a {expected:?} slot")]
    SlotMismatch { expected: ViewType, found: ViewType },

    /// The host asked for a position past the end of the list.
    #[error("Index {index} out of range for {count} entries")]
    IndexOutOfRange { index: usize, count: usize },
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config directory could not be determined.
    #[error("Config directory not found")]
    NoDirFound,

    /// Failed to read a config or page file.
    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a config or page file.
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[source] toml::de::Error),

    /// Two pages share the same id.
    #[error("Duplicate page id '{0}'")]
    DuplicatePage(String),

    /// A page file without any page.
    #[error("Page file contains no pages")]
    NoPages,
}

/// Process execution errors.
#[derive(Error, Debug)]
pub enum ProcessError {
    /// The command string was empty.
    #[error("Empty command")]
    EmptyCommand,

    /// Failed to spawn the process.
    #[error("Failed to spawn process: {0}")]
    SpawnFailed(#[source] std::io::Error),
}
