//! PDF text extraction backed by `pdf-extract`.

use std::panic::{self, AssertUnwindSafe};

use crate::{Result, SkillgapError};

const PDF_MAGIC: &[u8] = b"%PDF-";

/// Extracts the text of each page.
///
/// Pages are returned in document order with surrounding whitespace
/// trimmed. `pdf-extract` panics on some malformed documents (an undefined
/// font, text shown before any font is selected); those panics are caught
/// and reported as parse errors like any other failure.
pub fn pdf_pages(bytes: &[u8]) -> Result<Vec<String>> {
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(parse_error("missing %PDF- header".to_string()));
    }

    let pages = panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem_by_pages(bytes)))
        .map_err(|payload| parse_error(format!("extractor panicked: {}", panic_message(payload.as_ref()))))?
        .map_err(|e| parse_error(e.to_string()))?;

    Ok(pages.iter().map(|page| page.trim().to_string()).collect())
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

fn parse_error(reason: String) -> SkillgapError {
    SkillgapError::DocumentParse { format: "pdf", reason }
}
