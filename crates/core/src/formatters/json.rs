use crate::{AnalysisResult, Result};

/// Configuration for JSON output
#[derive(Debug, Clone, Default)]
pub struct JsonConfig {
    /// Keep the `debug` field when present
    pub include_debug: bool,
    /// Pretty print JSON output
    pub pretty: bool,
}

/// Serializes an analysis result.
///
/// The shape is exactly that of [`AnalysisResult`]; `debug` is omitted
/// unless requested and present.
pub fn convert_to_json(result: &AnalysisResult, config: &JsonConfig) -> Result<String> {
    let stripped;
    let result = if !config.include_debug && result.debug.is_some() {
        stripped = AnalysisResult { debug: None, ..result.clone() };
        &stripped
    } else {
        result
    };

    if config.pretty { Ok(serde_json::to_string_pretty(result)?) } else { Ok(serde_json::to_string(result)?) }
}
