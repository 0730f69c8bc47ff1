//! Error types and handling for cursor-rules
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for provisioning operations
#[derive(Error, Diagnostic, Debug)]
pub enum ProvisionError {
    #[error("Failed to scan template directory '{path}': {reason}")]
    #[diagnostic(
        code(cursor_rules::templates::scan_failed),
        help("Check that the templates directory exists and is readable")
    )]
    ScanFailed { path: String, reason: String },

    #[error("Failed to create directory '{path}': {reason}")]
    #[diagnostic(code(cursor_rules::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("Failed to copy template to '{path}': {reason}")]
    #[diagnostic(code(cursor_rules::fs::copy_failed))]
    CopyFailed { path: String, reason: String },

    #[error("Failed to remove '{path}': {reason}")]
    #[diagnostic(code(cursor_rules::fs::remove_failed))]
    RemoveFailed { path: String, reason: String },

    #[error("Failed to read directory '{path}': {reason}")]
    #[diagnostic(code(cursor_rules::fs::read_dir_failed))]
    ReadDirFailed { path: String, reason: String },

    #[error("I/O error: {message}")]
    #[diagnostic(code(cursor_rules::io::error))]
    IoError { message: String },
}

impl From<std::io::Error> for ProvisionError {
    fn from(err: std::io::Error) -> Self {
        ProvisionError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias for provisioning operations
pub type Result<T> = miette::Result<T, ProvisionError>;
