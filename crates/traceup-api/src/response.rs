//! XML response rendering
//!
//! The upload endpoint reports its outcome in-band through a one-element XML
//! body, always with HTTP 200: legacy clients parse the body only and treat
//! the `errorCode` attribute as the result status. Exactly two shapes exist,
//! a `<success/>` tag and an `<error/>` tag carrying a numeric code.

use axum::http::header;
use axum::response::{IntoResponse, Response};
use traceup_core::{LogLevel, UploadError};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";

/// Escape a string for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

fn success_body(filename: &str) -> String {
    format!(
        "{}\n<success message=\"The file '{}' has been uploaded\"/>",
        XML_DECLARATION,
        escape_attr(filename)
    )
}

fn error_body(err: &UploadError) -> String {
    format!(
        "{}\n<error errorCode=\"{}\" message=\"{}\"/>",
        XML_DECLARATION,
        err.error_code(),
        escape_attr(&err.to_string())
    )
}

fn xml_response(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/xml")], body).into_response()
}

/// Render the success response for an uploaded file.
pub fn success(filename: &str) -> Response {
    xml_response(success_body(filename))
}

/// Render the error response for a failed upload, logging it at the level
/// the error calls for.
pub fn error(err: &UploadError) -> Response {
    match err.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %err, error_code = err.error_code(), "Upload rejected");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %err, error_code = err.error_code(), "Upload rejected");
        }
        LogLevel::Error => {
            tracing::error!(error = %err, error_code = err.error_code(), "Upload failed");
        }
    }

    xml_response(error_body(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_attr_handles_markup_characters() {
        assert_eq!(
            escape_attr(r#"a&b<c>d"e"#),
            "a&amp;b&lt;c&gt;d&quot;e".to_string()
        );
        assert_eq!(escape_attr("track.gpx"), "track.gpx");
    }

    #[test]
    fn success_body_matches_wire_format() {
        assert_eq!(
            success_body("track.gpx"),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<success message=\"The file 'track.gpx' has been uploaded\"/>"
        );
    }

    #[test]
    fn error_body_matches_wire_format() {
        let err = UploadError::FilesizeExceeded {
            size: 600_000,
            max: 500_000,
        };
        assert_eq!(
            error_body(&err),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<error errorCode=\"1\" message=\"Filesize of 600000 bytes exceeds the maximum of 500000 bytes\"/>"
        );
    }

    #[test]
    fn hostile_filename_is_escaped() {
        let body = success_body(r#"a"<b>&c.gpx"#);
        assert!(body.contains("a&quot;&lt;b&gt;&amp;c.gpx"));
        assert!(!body.contains("<b>"));
    }
}
