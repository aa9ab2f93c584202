//! Trace upload service
//!
//! Runs the fixed validation pipeline over an extracted upload and, when
//! every check passes, writes the file into storage. The checks are ordered
//! and short-circuiting: size, then filename ending, then declared content
//! type. A request that fails several checks reports only the first failure,
//! and nothing touches the filesystem unless all three pass.

use std::sync::Arc;

use axum::extract::Multipart;
use traceup_core::{Config, UploadError};

use crate::state::AppState;
use crate::utils::upload::{basename, extract_trace_file};

/// Validation rules for an uploaded trace file.
pub struct TraceValidator {
    max_filesize: u64,
    allowed_extension: String,
    disallowed_content_types: Vec<String>,
}

impl TraceValidator {
    pub fn from_config(config: &Config) -> Self {
        Self {
            max_filesize: config.max_filesize,
            allowed_extension: config.allowed_extension.clone(),
            disallowed_content_types: config.disallowed_content_types.clone(),
        }
    }

    /// Validate file size against the configured maximum.
    pub fn validate_size(&self, size: u64) -> Result<(), UploadError> {
        if size > self.max_filesize {
            return Err(UploadError::FilesizeExceeded {
                size,
                max: self.max_filesize,
            });
        }
        Ok(())
    }

    /// Validate that the basename carries the required suffix.
    ///
    /// The comparison is case-sensitive: `track.GPX` is rejected.
    pub fn validate_extension(&self, filename: &str) -> Result<(), UploadError> {
        if !filename.ends_with(&self.allowed_extension) {
            return Err(UploadError::BadFileEnding {
                filename: filename.to_string(),
                required: self.allowed_extension.clone(),
            });
        }
        Ok(())
    }

    /// Validate the declared content type against the denylist.
    ///
    /// This is a weak defense against executable uploads, not a statement
    /// about the file's actual content; the declared type is attacker
    /// controlled.
    pub fn validate_content_type(&self, content_type: &str) -> Result<(), UploadError> {
        if self
            .disallowed_content_types
            .iter()
            .any(|ct| ct == content_type)
        {
            return Err(UploadError::FiletypeDisallowed {
                content_type: content_type.to_string(),
            });
        }
        Ok(())
    }
}

/// Trace upload service
///
/// Orchestrates the complete upload workflow: extract, validate, store.
pub struct UploadService {
    state: Arc<AppState>,
}

impl UploadService {
    pub fn new(state: &Arc<AppState>) -> Self {
        Self {
            state: state.clone(),
        }
    }

    /// Run the upload pipeline and return the stored filename.
    pub async fn upload(&self, multipart: Multipart) -> Result<String, UploadError> {
        let file = extract_trace_file(multipart).await?;
        let filename = basename(&file.declared_filename);

        let validator = TraceValidator::from_config(&self.state.config);
        validator.validate_size(file.data.len() as u64)?;
        validator.validate_extension(&filename)?;
        validator.validate_content_type(&file.declared_content_type)?;

        self.state
            .storage
            .store(&filename, &file.data)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, filename = %filename, "Failed to store upload");
                UploadError::StorageFailed {
                    filename: filename.clone(),
                }
            })?;

        tracing::info!(
            filename = %filename,
            size_bytes = file.data.len(),
            content_type = %file.declared_content_type,
            "Upload stored"
        );

        Ok(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_validator() -> TraceValidator {
        TraceValidator {
            max_filesize: 500_000,
            allowed_extension: ".gpx".to_string(),
            disallowed_content_types: vec!["application/x-httpd-php".to_string()],
        }
    }

    #[test]
    fn size_at_limit_is_accepted() {
        let validator = test_validator();
        assert!(validator.validate_size(500_000).is_ok());
        assert!(validator.validate_size(0).is_ok());
    }

    #[test]
    fn size_over_limit_is_rejected() {
        let validator = test_validator();
        let err = validator.validate_size(500_001).unwrap_err();
        assert!(matches!(
            err,
            UploadError::FilesizeExceeded {
                size: 500_001,
                max: 500_000
            }
        ));
    }

    #[test]
    fn extension_check_is_case_sensitive() {
        let validator = test_validator();
        assert!(validator.validate_extension("track.gpx").is_ok());
        assert!(validator.validate_extension("track.GPX").is_err());
        assert!(validator.validate_extension("track.txt").is_err());
        assert!(validator.validate_extension("").is_err());
    }

    #[test]
    fn denylisted_content_type_is_rejected() {
        let validator = test_validator();
        assert!(validator.validate_content_type("application/gpx+xml").is_ok());
        assert!(validator.validate_content_type("").is_ok());
        assert!(validator
            .validate_content_type("application/x-httpd-php")
            .is_err());
    }
}
