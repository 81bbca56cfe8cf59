// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::value_objects::TimestampKind;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum FileTimesError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<FileTimesError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, FileTimesError>;

/// Domain-layer specific errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("'{input}' is not a valid date (expected {expected}): {details}")]
    Parse { input: String, expected: &'static str, details: String },

    #[error("'{input}' does not exist in the local time zone")]
    NonexistentLocalTime { input: String },

    #[error("instant {seconds}s from the Unix epoch cannot be shown as {expected}")]
    OutOfRange { seconds: i64, expected: &'static str },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("No file selected")]
    NoFileSelected,

    #[error("{kind} time verification failed: expected '{expected}', found '{actual}'")]
    VerificationMismatch { kind: TimestampKind, expected: String, actual: String },
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read {kind} time of '{path}': {source}")]
    MetadataRead {
        kind: TimestampKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {kind} time of '{path}': {source}")]
    MetadataWrite {
        kind: TimestampKind,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Setting the {kind} time of '{path}' is not supported on this platform")]
    Unsupported { kind: TimestampKind, path: PathBuf },
}

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Unknown command: {command}")]
    UnknownCommand { command: String },

    #[error("Missing argument for '{command}': {argument}")]
    MissingArgument { command: String, argument: String },

    #[error("Current {kind} time of '{path}' is unavailable; pass it explicitly")]
    CurrentValueUnavailable { kind: TimestampKind, path: PathBuf },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<FileTimesError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| FileTimesError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| FileTimesError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
