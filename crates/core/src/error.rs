//! Error types for skill-gap analysis.
//!
//! This module defines the main error type [`SkillgapError`] which represents
//! everything that can go wrong while extracting a resume, fetching a job
//! description, validating a request, or loading the resource catalog.
//!
//! Each variant collapses into one of a handful of [`ErrorKind`]s. A request
//! boundary (CLI, HTTP) only needs the kind to decide which user-facing
//! message to show.
//!
//! # Example
//!
//! ```rust
//! use skillgap_core::{ErrorKind, SkillgapError};
//!
//! let err = SkillgapError::InputValidation("Provide JD text or JD URL.".to_string());
//! assert_eq!(err.kind(), ErrorKind::InputValidation);
//! assert_eq!(err.user_message(), "Provide JD text or JD URL.");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for analysis operations.
#[derive(Error, Debug)]
pub enum SkillgapError {
    /// A PDF or DOCX payload could not be parsed.
    ///
    /// The payload was declared as `format` but its bytes are corrupt or
    /// structured differently than expected.
    #[error("Failed to parse {format} document: {reason}")]
    DocumentParse { format: &'static str, reason: String },

    /// The document format is recognised but support was compiled out.
    #[error("Unsupported document: {0}")]
    UnsupportedDocument(String),

    /// HTTP request errors from reqwest.
    ///
    /// Wraps DNS failures, refused connections, TLS problems and body
    /// decoding errors.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP {status} while fetching {url}")]
    HttpStatus { status: u16, url: String },

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The request itself is malformed: no upload, no JD source, or an
    /// ambiguous JD source.
    #[error("Invalid input: {0}")]
    InputValidation(String),

    /// The skill resource file exists but could not be read or decoded.
    #[error("Resource file {path} is invalid: {reason}")]
    ResourceFile { path: PathBuf, reason: String },

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O errors from reading local files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A report could not be serialized.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification of a [`SkillgapError`].
///
/// The first three kinds are terminal for an analysis request and each one
/// carries its own user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The resume payload is malformed or unsupported.
    DocumentParse,
    /// The job description URL could not be fetched.
    Fetch,
    /// The request is missing or has ambiguous inputs.
    InputValidation,
    /// Local I/O or startup configuration problems.
    Internal,
}

impl SkillgapError {
    /// Classifies this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SkillgapError::DocumentParse { .. } | SkillgapError::UnsupportedDocument(_) => ErrorKind::DocumentParse,
            #[cfg(feature = "fetch")]
            SkillgapError::HttpError(_) => ErrorKind::Fetch,
            SkillgapError::HttpStatus { .. } | SkillgapError::Timeout { .. } | SkillgapError::InvalidUrl(_) => {
                ErrorKind::Fetch
            }
            SkillgapError::InputValidation(_) => ErrorKind::InputValidation,
            SkillgapError::ResourceFile { .. }
            | SkillgapError::FileNotFound(_)
            | SkillgapError::Io(_)
            | SkillgapError::Serialization(_) => ErrorKind::Internal,
        }
    }

    /// Returns the message that should be shown to the person who made the
    /// request.
    ///
    /// Parse and fetch failures get a fixed, actionable sentence; validation
    /// errors carry their own reason.
    pub fn user_message(&self) -> String {
        match self {
            SkillgapError::InputValidation(reason) => reason.clone(),
            _ => match self.kind() {
                ErrorKind::DocumentParse => "Could not parse resume. Use PDF/DOCX.".to_string(),
                ErrorKind::Fetch => "Unable to fetch JD URL.".to_string(),
                _ => self.to_string(),
            },
        }
    }
}

/// Result type alias for SkillgapError.
pub type Result<T> = std::result::Result<T, SkillgapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SkillgapError::InvalidUrl("not a url".to_string());
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_document_parse_kind() {
        let err = SkillgapError::DocumentParse { format: "pdf", reason: "missing header".to_string() };
        assert_eq!(err.kind(), ErrorKind::DocumentParse);
        assert!(err.to_string().contains("pdf"));
        assert_eq!(err.user_message(), "Could not parse resume. Use PDF/DOCX.");
    }

    #[test]
    fn test_fetch_kinds_share_message() {
        let timeout = SkillgapError::Timeout { timeout: 15 };
        let status = SkillgapError::HttpStatus { status: 404, url: "https://example.com".to_string() };

        assert!(timeout.to_string().contains("15"));
        assert_eq!(timeout.kind(), ErrorKind::Fetch);
        assert_eq!(status.kind(), ErrorKind::Fetch);
        assert_eq!(timeout.user_message(), status.user_message());
    }

    #[test]
    fn test_messages_are_distinct_per_kind() {
        let parse = SkillgapError::DocumentParse { format: "docx", reason: "bad zip".to_string() }.user_message();
        let fetch = SkillgapError::InvalidUrl("x".to_string()).user_message();
        let input = SkillgapError::InputValidation("Provide JD text or JD URL.".to_string()).user_message();

        assert_ne!(parse, fetch);
        assert_ne!(fetch, input);
        assert_ne!(parse, input);
    }

    #[test]
    fn test_io_is_internal() {
        let err = SkillgapError::from(std::io::Error::other("boom"));
        assert_eq!(err.kind(), ErrorKind::Internal);
    }
}
