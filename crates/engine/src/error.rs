use cloc_core::{ResolutionError, SyntaxError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("Failed to read file '{path}': {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read directory '{path}': {source}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("Invalid comment syntax: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid filter pattern: {0}")]
    Pattern(#[from] globset::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EngineError {
    /// Errors that only skip one file or subtree instead of ending the run.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Resolution(_) | Self::FileAccess { .. } | Self::DirectoryAccess { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
