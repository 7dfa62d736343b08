//! Error types for the fpreport CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use crate::template::TemplateError;
use thiserror::Error;

/// Main error type for report generation.
///
/// Every variant is fatal: the pipeline aborts at the first failure and
/// the error is surfaced to the CLI unchanged.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Input data could not be read or is inconsistent.
    #[error("{0}")]
    Input(String),

    /// Configuration file could not be read or failed validation.
    #[error("{0}")]
    Config(String),

    /// The template violates the placeholder contract.
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    /// The external typesetter failed on one of its passes.
    #[error("Compile failed on pass {pass}: {message}")]
    Compile {
        /// Pass number (1 or 2).
        pass: u8,
        /// What went wrong, including captured compiler output where available.
        message: String,
    },

    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl ReportError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ReportError::Input(_) => exit_codes::USER_ERROR,
            ReportError::Config(_) => exit_codes::USER_ERROR,
            ReportError::Template(_) => exit_codes::TEMPLATE_FAILURE,
            ReportError::Compile { .. } => exit_codes::COMPILE_FAILURE,
            ReportError::Io(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for fpreport operations.
pub type Result<T> = std::result::Result<T, ReportError>;
