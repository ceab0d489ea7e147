use anyhow::Context;
use axum::{
    Json,
    extract::{Multipart, State},
};
use skillgap_core::{AnalysisResult, Document, JobSource, extract_text, require_upload};

use crate::errors::AppError;
use crate::state::AppState;

/// Form fields of an analysis request.
#[derive(Debug, Default)]
struct AnalyzeForm {
    resume: Option<Document>,
    jd_text: Option<String>,
    jd_url: Option<String>,
}

impl AnalyzeForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);

            match name.as_deref() {
                Some("resume") => {
                    let file_name = field.file_name().unwrap_or_default().to_string();
                    let bytes = field.bytes().await?;
                    form.resume = Some(Document::new(file_name, bytes.to_vec()));
                }
                Some("jd_text") => form.jd_text = Some(field.text().await?),
                Some("jd_url") => form.jd_url = Some(field.text().await?),
                _ => {}
            }
        }

        Ok(form)
    }
}

/// POST /analyze
/// Multipart form with a `resume` file and either `jd_text` or `jd_url`.
pub async fn analyze_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    let form = AnalyzeForm::read(multipart).await?;
    let document = require_upload(form.resume)?;

    tracing::info!(resume = %document.name, bytes = document.bytes.len(), "Analyzing resume");

    // The resume is parsed first so an unreadable upload is reported even
    // when the job description is also missing.
    let resume_text = tokio::task::spawn_blocking(move || extract_text(&document))
        .await
        .context("Resume extraction task failed")??;

    let source = JobSource::from_fields(form.jd_text.as_deref(), form.jd_url.as_deref())?;
    let jd_text = state.analyzer.job_text(&source).await?;
    let result = state.analyzer.compare_texts(&resume_text, &jd_text);

    tracing::info!(
        score = result.overall_match,
        matched = result.matched_skills.len(),
        missing = result.missing_skills.len(),
        "Analysis complete"
    );

    Ok(Json(result))
}
