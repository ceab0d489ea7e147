use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Skill resource file; the default location is used when unset
    pub resources_path: Option<PathBuf>,
    /// Seconds allowed for fetching a job description URL
    pub fetch_timeout: u64,
    /// Attach raw skill sets to every response
    pub include_debug: bool,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            resources_path: None,
            fetch_timeout: skillgap_core::fetch::DEFAULT_TIMEOUT_SECS,
            include_debug: true,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            resources_path: lookup("SKILLGAP_RESOURCES")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            fetch_timeout: parse_or(&lookup, "SKILLGAP_FETCH_TIMEOUT", defaults.fetch_timeout)?,
            include_debug: parse_or(&lookup, "SKILLGAP_INCLUDE_DEBUG", defaults.include_debug)?,
            max_upload_bytes: parse_or(&lookup, "SKILLGAP_MAX_UPLOAD_BYTES", defaults.max_upload_bytes)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value: {value}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.fetch_timeout, 15);
        assert!(config.include_debug);
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert!(config.resources_path.is_none());
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "9000"),
            ("SKILLGAP_RESOURCES", "/etc/skillgap/resources.json"),
            ("SKILLGAP_FETCH_TIMEOUT", "5"),
            ("SKILLGAP_INCLUDE_DEBUG", "false"),
        ]))
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.resources_path, Some(PathBuf::from("/etc/skillgap/resources.json")));
        assert_eq!(config.fetch_timeout, 5);
        assert!(!config.include_debug);
    }

    #[test]
    fn test_invalid_port() {
        let err = Config::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
