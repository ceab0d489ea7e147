use crate::AnalysisResult;
use crate::resources::Resource;

/// Configuration for plain text output
#[derive(Debug, Clone, Default)]
pub struct TextConfig {
    /// Show the raw per-document skill sets when present
    pub include_debug: bool,

    /// Wrap rationale lines at specified width (0 = no wrapping)
    pub line_width: usize,
}

/// Render an analysis result as a plain text report
pub fn convert_to_text(result: &AnalysisResult, config: &TextConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!("Overall match: {}%\n", result.overall_match));
    output.push_str(&format!(
        "Matched: {} | Missing: {} | Recommendations: {}\n\n",
        result.matched_skills.len(),
        result.missing_skills.len(),
        result.recommendations.len()
    ));

    output.push_str(&skill_line("Matched skills", &result.matched_skills));
    output.push_str(&skill_line("Missing skills", &result.missing_skills));

    if !result.recommendations.is_empty() {
        output.push_str("\nRecommendations\n");
        output.push_str(&"=".repeat("Recommendations".len()));
        output.push('\n');

        for (index, resource) in result.recommendations.iter().enumerate() {
            output.push_str(&recommendation_block(index + 1, resource, config.line_width));
        }
    }

    if config.include_debug
        && let Some(debug) = &result.debug
    {
        output.push('\n');
        output.push_str(&skill_line("Resume skills", &debug.resume_skills));
        output.push_str(&skill_line("JD skills", &debug.jd_skills));
    }

    output.trim_end().to_string()
}

fn skill_line(label: &str, skills: &[String]) -> String {
    if skills.is_empty() { format!("{}: (none)\n", label) } else { format!("{}: {}\n", label, skills.join(", ")) }
}

fn recommendation_block(index: usize, resource: &Resource, width: usize) -> String {
    let mut block = format!("{}. {} [{}]\n", index, resource.title, resource.kind);

    if let Some(link) = &resource.link {
        block.push_str(&format!("   {}\n", link));
    }

    if let Some(why) = &resource.why {
        for line in wrap_text(why, width.saturating_sub(3)).lines() {
            block.push_str(&format!("   {}\n", line));
        }
    }

    block
}

/// Greedy word wrap; `width == 0` disables wrapping
fn wrap_text(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_length = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current_length == 0 {
            current_line.push_str(word);
            current_length = word_len;
        } else if current_length + 1 + word_len <= width {
            current_line.push(' ');
            current_line.push_str(word);
            current_length += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line.push_str(word);
            current_length = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines.join("\n")
}
