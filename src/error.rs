//! Error handling for fabflow
//!
//! Only two conditions are hard failures: a layout path that does not
//! exist and a process type the recipe table does not know. Everything
//! else (unmatched layers, absent recipe metadata, degenerate layout
//! geometry) degrades to warnings or default substitutions inside the
//! produced value.

use thiserror::Error;

/// Result type alias for fabflow operations
pub type Result<T> = std::result::Result<T, FabError>;

/// Main error type for fabflow operations
#[derive(Error, Debug)]
pub enum FabError {
    #[error("File not found: {path}")]
    FileNotFound {
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Unknown process type: {process_type}")]
    UnknownProcessType { process_type: String },

    // I/O Errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FabError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            FabError::FileNotFound { .. } => "FILE_NOT_FOUND",
            FabError::UnknownProcessType { .. } => "UNKNOWN_PROCESS_TYPE",
            FabError::Io(_) => "IO_ERROR",
            FabError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Get a recovery suggestion for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            FabError::FileNotFound { .. } => "Check that the path exists and is readable",
            FabError::UnknownProcessType { .. } => {
                "Run 'fabflow-cli recipes' to list the known process types"
            }
            _ => "Check the error details and try again",
        }
    }
}
