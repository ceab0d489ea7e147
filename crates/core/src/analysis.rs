//! The analysis pipeline.
//!
//! ```text
//! Document ──extract──► resume text ──detect──┐
//!                                             ├─► compare ─► recommend ─► AnalysisResult
//! JobSource ─(fetch)──► JD text ─────detect──┘
//! ```
//!
//! [`Analyzer`] holds only read-only state, so one instance can serve any
//! number of concurrent requests.
//!
//! # Example
//!
//! ```rust
//! use skillgap_core::{Analyzer, SkillCatalog};
//!
//! let analyzer = Analyzer::new(SkillCatalog::baseline());
//! let result = analyzer.compare_texts("Python and SQL developer", "Python, AWS, SQL");
//!
//! assert_eq!(result.matched_skills, vec!["python", "sql"]);
//! assert_eq!(result.missing_skills, vec!["aws"]);
//! assert_eq!(result.overall_match, 67);
//! ```

use std::sync::Arc;

use serde::Serialize;

use crate::detect::{SkillDetector, SkillSet, SubstringDetector};
use crate::extract::{Document, extract_text};
use crate::recommend::build_recommendations;
use crate::resources::{Resource, SkillCatalog};
use crate::scoring::compare_skills;
use crate::{Result, SkillgapError};

#[cfg(feature = "fetch")]
use crate::fetch::{FetchConfig, fetch_job_description};
#[cfg(feature = "fetch")]
use crate::preprocess::PreprocessConfig;

pub const MISSING_JD_MESSAGE: &str = "Provide JD text or JD URL.";
pub const AMBIGUOUS_JD_MESSAGE: &str = "Provide either JD text or JD URL, not both.";
pub const MISSING_UPLOAD_MESSAGE: &str = "Upload a resume file.";

/// Where the job description comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobSource {
    /// Inline job description text.
    Text(String),
    /// URL of a page containing the job description.
    Url(String),
}

impl JobSource {
    /// Builds a source from the two optional request fields.
    ///
    /// Blank fields count as absent. Exactly one field must remain.
    pub fn from_fields(text: Option<&str>, url: Option<&str>) -> Result<Self> {
        let text = text.map(str::trim).filter(|t| !t.is_empty());
        let url = url.map(str::trim).filter(|u| !u.is_empty());

        match (text, url) {
            (Some(_), Some(_)) => Err(SkillgapError::InputValidation(AMBIGUOUS_JD_MESSAGE.to_string())),
            (Some(text), None) => Ok(Self::Text(text.to_string())),
            (None, Some(url)) => Ok(Self::Url(url.to_string())),
            (None, None) => Err(SkillgapError::InputValidation(MISSING_JD_MESSAGE.to_string())),
        }
    }
}

/// Checks that a resume was uploaded.
pub fn require_upload(document: Option<Document>) -> Result<Document> {
    match document {
        Some(doc) if !doc.name.trim().is_empty() || !doc.bytes.is_empty() => Ok(doc),
        _ => Err(SkillgapError::InputValidation(MISSING_UPLOAD_MESSAGE.to_string())),
    }
}

/// Raw per-document skill sets, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugInfo {
    pub resume_skills: Vec<String>,
    pub jd_skills: Vec<String>,
}

/// Outcome of one analysis.
///
/// `matched_skills` and `missing_skills` are disjoint, sorted, and together
/// make up the job description's skill set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Jaccard percentage, 0..=100.
    pub overall_match: u8,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// At most six, one per missing skill, in missing-skill order.
    pub recommendations: Vec<Resource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<DebugInfo>,
}

/// Runs the analysis pipeline against a fixed catalog.
#[derive(Clone)]
pub struct Analyzer {
    catalog: Arc<SkillCatalog>,
    detector: Arc<dyn SkillDetector>,
    #[cfg(feature = "fetch")]
    fetch: FetchConfig,
    #[cfg(feature = "fetch")]
    preprocess: PreprocessConfig,
    include_debug: bool,
}

impl Analyzer {
    /// An analyzer using substring detection and default settings.
    pub fn new(catalog: SkillCatalog) -> Self {
        Self::builder(catalog).build()
    }

    pub fn builder(catalog: SkillCatalog) -> AnalyzerBuilder {
        AnalyzerBuilder::new(catalog)
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// Detects catalog skills in `text`.
    pub fn detect(&self, text: &str) -> SkillSet {
        self.detector.detect(text, &self.catalog.vocabulary)
    }

    /// Compares two already-extracted texts.
    pub fn compare_texts(&self, resume_text: &str, jd_text: &str) -> AnalysisResult {
        let resume_skills = self.detect(resume_text);
        let jd_skills = self.detect(jd_text);

        let comparison = compare_skills(&resume_skills, &jd_skills);
        let recommendations = build_recommendations(&comparison.missing, &self.catalog.resources);

        tracing::debug!(
            score = comparison.score,
            matched = comparison.matched.len(),
            missing = comparison.missing.len(),
            "compared skill sets"
        );

        let debug = self.include_debug.then(|| DebugInfo {
            resume_skills: resume_skills.into_iter().collect(),
            jd_skills: jd_skills.into_iter().collect(),
        });

        AnalysisResult {
            overall_match: comparison.score,
            matched_skills: comparison.matched,
            missing_skills: comparison.missing,
            recommendations,
            debug,
        }
    }

    /// Resolves a job source to plain text.
    ///
    /// Inline text is used as given. URLs are fetched once with the
    /// configured timeout.
    pub async fn job_text(&self, source: &JobSource) -> Result<String> {
        match source {
            JobSource::Text(text) => Ok(text.clone()),
            #[cfg(feature = "fetch")]
            JobSource::Url(url) => fetch_job_description(url, &self.fetch, &self.preprocess).await,
            #[cfg(not(feature = "fetch"))]
            JobSource::Url(_) => Err(SkillgapError::InvalidUrl("URL fetching is not enabled".to_string())),
        }
    }

    /// Runs the whole pipeline for one request.
    ///
    /// The resume is parsed before the job description is fetched, so a bad
    /// upload never costs a network round trip.
    pub async fn analyze(&self, document: &Document, source: &JobSource) -> Result<AnalysisResult> {
        let resume_text = extract_text(document)?;
        let jd_text = self.job_text(source).await?;

        Ok(self.compare_texts(&resume_text, &jd_text))
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("vocabulary", &self.catalog.vocabulary.len())
            .field("resources", &self.catalog.resources.len())
            .field("include_debug", &self.include_debug)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Analyzer`].
pub struct AnalyzerBuilder {
    catalog: SkillCatalog,
    detector: Arc<dyn SkillDetector>,
    #[cfg(feature = "fetch")]
    fetch: FetchConfig,
    #[cfg(feature = "fetch")]
    preprocess: PreprocessConfig,
    include_debug: bool,
}

impl AnalyzerBuilder {
    pub fn new(catalog: SkillCatalog) -> Self {
        Self {
            catalog,
            detector: Arc::new(SubstringDetector),
            #[cfg(feature = "fetch")]
            fetch: FetchConfig::default(),
            #[cfg(feature = "fetch")]
            preprocess: PreprocessConfig::default(),
            include_debug: false,
        }
    }

    /// Swap the skill matcher.
    pub fn detector(mut self, detector: Arc<dyn SkillDetector>) -> Self {
        self.detector = detector;
        self
    }

    #[cfg(feature = "fetch")]
    pub fn fetch_config(mut self, config: FetchConfig) -> Self {
        self.fetch = config;
        self
    }

    #[cfg(feature = "fetch")]
    pub fn preprocess_config(mut self, config: PreprocessConfig) -> Self {
        self.preprocess = config;
        self
    }

    /// Attach the raw skill sets to every result.
    pub fn include_debug(mut self, include: bool) -> Self {
        self.include_debug = include;
        self
    }

    pub fn build(self) -> Analyzer {
        Analyzer {
            catalog: Arc::new(self.catalog),
            detector: self.detector,
            #[cfg(feature = "fetch")]
            fetch: self.fetch,
            #[cfg(feature = "fetch")]
            preprocess: self.preprocess,
            include_debug: self.include_debug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn test_job_source_text() {
        let source = JobSource::from_fields(Some("  Python role  "), None).unwrap();
        assert_eq!(source, JobSource::Text("Python role".to_string()));
    }

    #[test]
    fn test_job_source_url() {
        let source = JobSource::from_fields(Some("   "), Some(" https://example.com/job ")).unwrap();
        assert_eq!(source, JobSource::Url("https://example.com/job".to_string()));
    }

    #[test]
    fn test_job_source_neither() {
        let err = JobSource::from_fields(None, Some("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidation);
        assert_eq!(err.user_message(), MISSING_JD_MESSAGE);
    }

    #[test]
    fn test_job_source_both() {
        let err = JobSource::from_fields(Some("Python"), Some("https://example.com")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InputValidation);
        assert_eq!(err.user_message(), AMBIGUOUS_JD_MESSAGE);
    }

    #[test]
    fn test_require_upload() {
        assert!(require_upload(None).is_err());
        assert!(require_upload(Some(Document::new("", Vec::new()))).is_err());
        assert!(require_upload(Some(Document::new("cv.txt", Vec::new()))).is_ok());
    }

    #[test]
    fn test_debug_info_toggle() {
        let plain = Analyzer::new(SkillCatalog::baseline());
        assert!(plain.compare_texts("python", "python").debug.is_none());

        let verbose = Analyzer::builder(SkillCatalog::baseline()).include_debug(true).build();
        let debug = verbose.compare_texts("python docker", "python aws").debug.unwrap();
        assert_eq!(debug.resume_skills, vec!["docker", "python"]);
        assert_eq!(debug.jd_skills, vec!["aws", "python"]);
    }

    #[test]
    fn test_custom_detector() {
        struct Nothing;
        impl SkillDetector for Nothing {
            fn detect(&self, _text: &str, _vocabulary: &crate::SkillVocabulary) -> SkillSet {
                SkillSet::new()
            }
        }

        let analyzer = Analyzer::builder(SkillCatalog::baseline()).detector(Arc::new(Nothing)).build();
        let result = analyzer.compare_texts("python", "python");
        assert_eq!(result.overall_match, 0);
        assert!(result.matched_skills.is_empty());
    }

    #[test]
    fn test_result_json_shape() {
        let analyzer = Analyzer::new(SkillCatalog::baseline());
        let json = serde_json::to_value(analyzer.compare_texts("python", "python aws")).unwrap();

        assert_eq!(json["overall_match"], 50);
        assert_eq!(json["matched_skills"][0], "python");
        assert_eq!(json["missing_skills"][0], "aws");
        assert_eq!(json["recommendations"][0]["type"], "Course");
        assert!(json.get("debug").is_none());
    }
}
