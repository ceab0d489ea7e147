pub mod analysis;
pub mod detect;
#[cfg(feature = "docx")]
pub mod docx;
pub mod error;
pub mod extract;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod formatters;
#[cfg(feature = "pdf")]
pub mod pdf;
pub mod preprocess;
pub mod recommend;
pub mod resources;
pub mod scoring;
pub mod vocabulary;

pub use analysis::{AnalysisResult, Analyzer, AnalyzerBuilder, DebugInfo, JobSource, require_upload};
pub use detect::{SkillDetector, SkillSet, SubstringDetector, detect_skills};
pub use error::{ErrorKind, Result, SkillgapError};
pub use extract::{Document, DocumentKind, decode_plain_text, extract_text};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_file, fetch_job_description, fetch_url};
pub use formatters::{DEFAULT_LINE_WIDTH, JsonConfig, MarkdownConfig, ReportFormat, ReportOptions, TextConfig, render_report};
pub use formatters::{convert_to_json, convert_to_markdown, convert_to_text};
pub use preprocess::{PreprocessConfig, page_text, strip_markup};
pub use recommend::{MAX_RECOMMENDATIONS, build_recommendations, fallback_resource};
pub use resources::{CatalogLoader, CatalogLoaderBuilder, Resource, SkillCatalog, SkillResourceMap};
pub use scoring::{SkillComparison, compare_skills, jaccard, match_score};
pub use vocabulary::SkillVocabulary;
