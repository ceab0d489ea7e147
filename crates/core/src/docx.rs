//! DOCX paragraph extraction.
//!
//! A DOCX file is a zip container; the body lives in `word/document.xml`.
//! Paragraphs are `w:p` elements and their visible text is the
//! concatenation of the `w:t` runs inside them.

use std::io::{Cursor, Read};

use sxd_document::parser;
use sxd_xpath::{Context, Factory, Value, XPath};

use crate::{Result, SkillgapError};

const DOCUMENT_PART: &str = "word/document.xml";
const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Extracts the text of every body paragraph in document order.
///
/// Paragraphs inside tables are included. Paragraphs inside text boxes are
/// not listed on their own because their runs already belong to the
/// anchoring paragraph. Empty paragraphs are kept as empty strings so that
/// joining with newlines preserves blank lines.
pub fn docx_paragraphs(bytes: &[u8]) -> Result<Vec<String>> {
    let xml = read_document_part(bytes)?;

    let package = parser::parse(&xml).map_err(|e| parse_error(format!("invalid document.xml: {}", e)))?;
    let document = package.as_document();

    let factory = Factory::new();
    let paragraphs = compile(&factory, "//w:body//w:p[not(ancestor::w:txbxContent)]")?;
    let runs = compile(&factory, ".//w:t")?;

    let mut context = Context::new();
    context.set_namespace("w", WORDPROCESSING_NS);

    let nodes = match paragraphs.evaluate(&context, document.root()).map_err(|e| parse_error(e.to_string()))? {
        Value::Nodeset(nodeset) => nodeset.document_order(),
        _ => Vec::new(),
    };

    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        let text = match runs.evaluate(&context, node).map_err(|e| parse_error(e.to_string()))? {
            Value::Nodeset(nodeset) => nodeset.document_order().iter().map(|t| t.string_value()).collect(),
            _ => String::new(),
        };
        out.push(text);
    }

    Ok(out)
}

fn read_document_part(bytes: &[u8]) -> Result<String> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| parse_error(format!("not a zip container: {}", e)))?;

    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| parse_error(format!("missing {}: {}", DOCUMENT_PART, e)))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| parse_error(format!("unreadable {}: {}", DOCUMENT_PART, e)))?;

    Ok(xml)
}

fn compile(factory: &Factory, xpath: &str) -> Result<XPath> {
    factory
        .build(xpath)
        .map_err(|e| parse_error(format!("invalid XPath '{}': {}", xpath, e)))?
        .ok_or_else(|| parse_error(format!("empty XPath '{}'", xpath)))
}

fn parse_error(reason: String) -> SkillgapError {
    SkillgapError::DocumentParse { format: "docx", reason }
}
