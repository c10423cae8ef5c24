//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
///
/// The reconciliation engine itself is infallible over validated in-memory
/// data; these errors cover the surrounding concerns of loading snapshots
/// and configuration.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A snapshot file could not be read.
    #[error("Snapshot I/O error for {path}: {source}")]
    SnapshotIo {
        /// Path of the snapshot file.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A snapshot file could not be decoded.
    #[error("Snapshot decode error for {path}: {source}")]
    SnapshotDecode {
        /// Path of the snapshot file.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code for logs and tooling output.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::SnapshotIo { .. } => "SNAPSHOT_IO_ERROR",
            Self::SnapshotDecode { .. } => "SNAPSHOT_DECODE_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
