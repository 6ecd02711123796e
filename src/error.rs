//! Error types and handling for Agentkit
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! The taxonomy mirrors the install pipeline: locator validation fails before
//! any I/O, fetch failures are classified so the operator can tell a dead
//! connection from a missing repository, and filesystem failures during the
//! merge abort the traversal with the offending path attached.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Agentkit operations
#[derive(Error, Diagnostic, Debug)]
pub enum AgentkitError {
    // Locator errors
    #[error("Invalid kit locator: {locator}")]
    #[diagnostic(
        code(agentkit::locator::invalid),
        help(
            "Kit locators use the owner/name form with letters, digits, '_', '.' and '-' only, e.g. CloudAI-X/claude-workflow"
        )
    )]
    InvalidLocator { locator: String },

    // Fetch errors
    #[error("Network failure while fetching '{locator}': {reason}")]
    #[diagnostic(
        code(agentkit::fetch::network),
        help(
            "Check your internet connection, and that no firewall or proxy is blocking the kit host"
        )
    )]
    FetchNetwork { locator: String, reason: String },

    #[error("Kit '{locator}' not found")]
    #[diagnostic(
        code(agentkit::fetch::not_found),
        help("Verify the repository exists and is visible to you")
    )]
    KitNotFound { locator: String },

    #[error("Fetching '{locator}' timed out after {seconds}s")]
    #[diagnostic(
        code(agentkit::fetch::timeout),
        help("Re-run with a larger --timeout, or check for a stalled connection")
    )]
    FetchTimeout { locator: String, seconds: u64 },

    #[error("Failed to fetch '{locator}': {reason}")]
    #[diagnostic(code(agentkit::fetch::failed))]
    FetchFailed { locator: String, reason: String },

    // Staging errors
    #[error("Failed to prepare staging directory: {reason}")]
    #[diagnostic(code(agentkit::staging::failed))]
    StagingFailed { reason: String },

    // File system errors during merge
    #[error("Failed to create directory: {path}")]
    #[diagnostic(code(agentkit::fs::dir_create_failed))]
    DirCreateFailed { path: String, reason: String },

    #[error("Failed to copy file: {path}")]
    #[diagnostic(code(agentkit::fs::file_copy_failed))]
    FileCopyFailed { path: String, reason: String },

    #[error("Failed to create symlink: {path}")]
    #[diagnostic(code(agentkit::fs::link_create_failed))]
    LinkCreateFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(agentkit::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AgentkitError {
    fn from(err: std::io::Error) -> Self {
        AgentkitError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AgentkitError>;
