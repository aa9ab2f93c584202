//! Common utilities for the upload handler

use axum::extract::Multipart;
use traceup_core::UploadError;

/// Name of the multipart form field carrying the trace file.
pub const UPLOAD_FIELD: &str = "gpxfile";

/// File data as extracted from the multipart form, before validation.
///
/// Both the filename and the content type are client-declared and untrusted;
/// the filename may carry directory components and the content type is no
/// statement about the actual bytes.
pub struct ExtractedFile {
    pub data: Vec<u8>,
    pub declared_filename: String,
    pub declared_content_type: String,
}

/// Extract the `gpxfile` field from a multipart form.
///
/// A request without that field, or with a body that cannot be parsed as
/// multipart at all, is reported as `MissingField` rather than crashing the
/// handler.
pub async fn extract_trace_file(mut multipart: Multipart) -> Result<ExtractedFile, UploadError> {
    let missing = || UploadError::MissingField {
        field: UPLOAD_FIELD.to_string(),
    };

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::debug!(error = %e, "Failed to read multipart body");
        missing()
    })? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let declared_filename = field.file_name().unwrap_or_default().to_string();
        let declared_content_type = field.content_type().unwrap_or_default().to_string();

        let data = field
            .bytes()
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "Failed to read upload field data");
                missing()
            })?
            .to_vec();

        return Ok(ExtractedFile {
            data,
            declared_filename,
            declared_content_type,
        });
    }

    Err(missing())
}

/// Reduce a client-declared filename to its basename.
///
/// Strips everything up to the last `/` or `\` so the name can never address
/// a path outside the storage directory. `.` and `..` reduce to the empty
/// string, which no allowed extension matches.
pub fn basename(declared: &str) -> String {
    let name = declared
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(declared)
        .trim();

    if name == "." || name == ".." {
        return String::new();
    }

    name.to_string()
}
