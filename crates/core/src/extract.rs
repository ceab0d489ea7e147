//! Resume text extraction.
//!
//! The document kind is taken from the declared file name. PDF pages and
//! DOCX paragraphs are joined with newlines; everything else is decoded as
//! UTF-8 with invalid sequences dropped.
//!
//! # Example
//!
//! ```rust
//! use skillgap_core::{Document, DocumentKind, extract_text};
//!
//! let doc = Document::new("resume.txt", b"Python and SQL".to_vec());
//! assert_eq!(doc.kind(), DocumentKind::PlainText);
//! assert_eq!(extract_text(&doc).unwrap(), "Python and SQL");
//! ```

use std::path::Path;

use crate::{Result, SkillgapError};

/// Declared type of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    /// Anything else, including no extension at all.
    PlainText,
}

impl DocumentKind {
    /// Detects the kind from a file name's extension, case-insensitively.
    pub fn from_name(name: &str) -> Self {
        let ext = Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match ext.as_deref() {
            Some("pdf") => Self::Pdf,
            Some("docx") => Self::Docx,
            _ => Self::PlainText,
        }
    }
}

/// An uploaded document: declared name plus raw bytes.
#[derive(Debug, Clone)]
pub struct Document {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl Document {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(), bytes }
    }

    /// Reads a document from disk, keeping its file name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SkillgapError::FileNotFound(path.to_path_buf()));
        }

        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Ok(Self { name, bytes })
    }

    pub fn kind(&self) -> DocumentKind {
        DocumentKind::from_name(&self.name)
    }
}

/// Extracts plain text from a document.
///
/// # Errors
///
/// Returns [`SkillgapError::DocumentParse`] when a PDF or DOCX payload is
/// corrupt. No partial text is returned in that case.
pub fn extract_text(document: &Document) -> Result<String> {
    let kind = document.kind();
    tracing::debug!(name = %document.name, ?kind, bytes = document.bytes.len(), "extracting document text");

    match kind {
        DocumentKind::Pdf => extract_pdf(&document.bytes),
        DocumentKind::Docx => extract_docx(&document.bytes),
        DocumentKind::PlainText => Ok(decode_plain_text(&document.bytes)),
    }
}

/// Decodes UTF-8, silently dropping invalid byte sequences.
pub fn decode_plain_text(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

#[cfg(feature = "pdf")]
fn extract_pdf(bytes: &[u8]) -> Result<String> {
    Ok(crate::pdf::pdf_pages(bytes)?.join("\n"))
}

#[cfg(not(feature = "pdf"))]
fn extract_pdf(_bytes: &[u8]) -> Result<String> {
    Err(SkillgapError::UnsupportedDocument("PDF support is not enabled".to_string()))
}

#[cfg(feature = "docx")]
fn extract_docx(bytes: &[u8]) -> Result<String> {
    Ok(crate::docx::docx_paragraphs(bytes)?.join("\n"))
}

#[cfg(not(feature = "docx"))]
fn extract_docx(_bytes: &[u8]) -> Result<String> {
    Err(SkillgapError::UnsupportedDocument("DOCX support is not enabled".to_string()))
}
