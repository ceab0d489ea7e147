use crate::AnalysisResult;

/// Configuration for Markdown output
#[derive(Debug, Clone, Default)]
pub struct MarkdownConfig {
    /// Append the raw per-document skill sets when present
    pub include_debug: bool,
}

/// Render an analysis result as Markdown
pub fn convert_to_markdown(result: &AnalysisResult, config: &MarkdownConfig) -> String {
    let mut output = String::new();

    output.push_str("# Skill Gap Report\n\n");
    output.push_str(&format!("**Overall match:** {}%\n\n", result.overall_match));

    output.push_str("## Matched Skills\n\n");
    output.push_str(&skill_list(&result.matched_skills));

    output.push_str("## Missing Skills\n\n");
    output.push_str(&skill_list(&result.missing_skills));

    if !result.recommendations.is_empty() {
        output.push_str("## Recommendations\n\n");
        output.push_str("| # | Title | Type | Why |\n");
        output.push_str("|---|-------|------|-----|\n");

        for (index, resource) in result.recommendations.iter().enumerate() {
            let title = match &resource.link {
                Some(link) => format!("[{}]({})", escape_cell(&resource.title), link),
                None => escape_cell(&resource.title),
            };
            let why = resource.why.as_deref().map(escape_cell).unwrap_or_default();

            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                index + 1,
                title,
                escape_cell(&resource.kind),
                why
            ));
        }
        output.push('\n');
    }

    if config.include_debug
        && let Some(debug) = &result.debug
    {
        output.push_str("## Debug\n\n");
        output.push_str(&format!("- Resume skills: {}\n", debug.resume_skills.join(", ")));
        output.push_str(&format!("- JD skills: {}\n", debug.jd_skills.join(", ")));
    }

    output.trim_end().to_string() + "\n"
}

fn skill_list(skills: &[String]) -> String {
    if skills.is_empty() {
        return "_None_\n\n".to_string();
    }

    let mut list: String = skills.iter().map(|s| format!("- {}\n", s)).collect();
    list.push('\n');
    list
}

/// Escape characters that would break a table cell
fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}
