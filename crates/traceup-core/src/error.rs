//! Error types module
//!
//! Every way an upload can fail is a variant of [`UploadError`]. The numeric
//! codes carried by the XML error responses are part of the wire contract and
//! must stay stable; see [`UploadError::error_code`].

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Upload pipeline errors.
///
/// The `Display` output of each variant is the client-facing message rendered
/// into the XML error response.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Filesize of {size} bytes exceeds the maximum of {max} bytes")]
    FilesizeExceeded { size: u64, max: u64 },

    #[error("The file '{filename}' does not end with '{required}'")]
    BadFileEnding { filename: String, required: String },

    #[error("The declared content type '{content_type}' is not allowed")]
    FiletypeDisallowed { content_type: String },

    #[error("The file '{filename}' could not be stored")]
    StorageFailed { filename: String },

    #[error("Missing multipart field '{field}'")]
    MissingField { field: String },
}

impl UploadError {
    /// Numeric error code reported to clients.
    ///
    /// Codes 1-4 predate this implementation and are frozen; 0 is reserved
    /// for the success response. 5 covers requests without the upload field,
    /// which previously had no defined behavior.
    pub fn error_code(&self) -> u16 {
        match self {
            UploadError::FilesizeExceeded { .. } => 1,
            UploadError::BadFileEnding { .. } => 2,
            UploadError::FiletypeDisallowed { .. } => 3,
            UploadError::StorageFailed { .. } => 4,
            UploadError::MissingField { .. } => 5,
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            // Validation failures are expected, client-caused conditions
            UploadError::FilesizeExceeded { .. }
            | UploadError::BadFileEnding { .. }
            | UploadError::FiletypeDisallowed { .. }
            | UploadError::MissingField { .. } => LogLevel::Debug,
            // Storage failures point at the host environment
            UploadError::StorageFailed { .. } => LogLevel::Error,
        }
    }
}
