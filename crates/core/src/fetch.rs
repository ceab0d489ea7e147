//! Content fetching from URLs and local files.
//!
//! Job descriptions can be given as a URL. The page is fetched once, with a
//! timeout and no retries, and reduced to plain text by
//! [`page_text`](crate::preprocess::page_text).

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::preprocess::{PreprocessConfig, page_text};
use crate::{Result, SkillgapError};

/// Default fetch timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// HTTP client configuration for fetching job description pages.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { timeout: DEFAULT_TIMEOUT_SECS, user_agent: "Mozilla/5.0 (compatible; Skillgap/0.1)".to_string() }
    }
}

/// Parses and checks a job description URL.
///
/// Only absolute http and https URLs are accepted.
pub fn parse_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url).map_err(|e| SkillgapError::InvalidUrl(e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(SkillgapError::InvalidUrl(format!(
            "unsupported scheme '{}', expected http:// or https://",
            other
        ))),
    }
}

/// Fetches the raw body of a URL.
///
/// Follows redirects, honours the configured timeout and fails on any
/// non-success status.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = parse_url(url)?;

    let client = Client::builder()
        .timeout(Duration::from_secs(config.timeout))
        .build()
        .map_err(SkillgapError::HttpError)?;

    let response = client
        .get(parsed_url)
        .header("User-Agent", &config.user_agent)
        .header(
            "Accept",
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .header("Accept-Language", "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| classify(e, config))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SkillgapError::HttpStatus { status: status.as_u16(), url: url.to_string() });
    }

    response.text().await.map_err(|e| classify(e, config))
}

/// Fetches a job description page and reduces it to plain text.
pub async fn fetch_job_description(url: &str, fetch: &FetchConfig, preprocess: &PreprocessConfig) -> Result<String> {
    let html = fetch_url(url, fetch).await?;
    let text = page_text(&html, preprocess);

    tracing::debug!(url, bytes = html.len(), chars = text.chars().count(), "fetched job description");
    Ok(text)
}

/// Reads a local file, lossily decoded as UTF-8.
pub fn fetch_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_buf = path.as_ref().to_path_buf();

    if !path_buf.exists() {
        Err(SkillgapError::FileNotFound(path_buf))
    } else {
        let bytes = fs::read(&path_buf)?;
        Ok(crate::extract::decode_plain_text(&bytes))
    }
}

fn classify(e: reqwest::Error, config: &FetchConfig) -> SkillgapError {
    if e.is_timeout() { SkillgapError::Timeout { timeout: config.timeout } } else { SkillgapError::HttpError(e) }
}
