//! Rendering an [`AnalysisResult`](crate::AnalysisResult) for people and tools.

pub mod json;
pub mod markdown;
pub mod text;

use std::str::FromStr;

pub use json::{JsonConfig, convert_to_json};
pub use markdown::{MarkdownConfig, convert_to_markdown};
pub use text::{TextConfig, convert_to_text};

use crate::{AnalysisResult, Result};

/// Output format for an analysis report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Human readable plain text.
    Text,
    /// Markdown with a recommendation table.
    Markdown,
    /// The result as JSON, field for field.
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(Self::Text),
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: text, markdown, json", s)),
        }
    }
}

/// Default wrap width for rationale lines in text reports.
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Settings shared by every report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Show the raw skill sets when the result carries them
    pub include_debug: bool,
    /// Wrap width for text reports (0 = no wrapping)
    pub line_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { include_debug: false, line_width: DEFAULT_LINE_WIDTH }
    }
}

/// Renders `result` in the requested format.
pub fn render_report(result: &AnalysisResult, format: ReportFormat, options: &ReportOptions) -> Result<String> {
    let include_debug = options.include_debug;

    match format {
        ReportFormat::Text => Ok(convert_to_text(result, &TextConfig { include_debug, line_width: options.line_width })),
        ReportFormat::Markdown => Ok(convert_to_markdown(result, &MarkdownConfig { include_debug })),
        ReportFormat::Json => convert_to_json(result, &JsonConfig { include_debug, pretty: true }),
    }
}
