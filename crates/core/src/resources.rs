//! Learning resources per skill and the catalog loader.
//!
//! The resource file is a JSON object mapping a skill term to an ordered
//! list of resources:
//!
//! ```json
//! {
//!   "aws": [
//!     { "title": "AWS Cloud Practitioner", "type": "Certification",
//!       "link": "https://aws.amazon.com/certification/", "why": "Cloud basics" }
//!   ]
//! }
//! ```
//!
//! A missing file is not an error: the map is simply empty and every
//! recommendation falls back to a generic course. The skill vocabulary is
//! never read from disk.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::vocabulary::SkillVocabulary;
use crate::{Result, SkillgapError};

/// File name looked up in the default config directory.
pub const RESOURCE_FILE_NAME: &str = "skills_resources.json";

/// A single learning resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    /// Resource category, e.g. "Course" or "Certification".
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub link: Option<String>,
    /// Short rationale shown next to the resource.
    #[serde(default)]
    pub why: Option<String>,
}

/// Skill term to resources, read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillResourceMap {
    entries: HashMap<String, Vec<Resource>>,
}

impl SkillResourceMap {
    /// An empty map; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the JSON resource format. Keys are lowercased.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let raw: HashMap<String, Vec<Resource>> = serde_json::from_str(json)?;
        Ok(Self::from_entries(raw))
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Vec<Resource>)>,
    {
        let mut map: HashMap<String, Vec<Resource>> = HashMap::new();
        for (skill, resources) in entries {
            map.entry(skill.trim().to_lowercase()).or_default().extend(resources);
        }
        Self { entries: map }
    }

    /// Loads the map from `path`.
    ///
    /// Returns an empty map when the file does not exist. A file that exists
    /// but cannot be read or decoded is reported as
    /// [`SkillgapError::ResourceFile`].
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::warn!(path = %path.display(), "resource file not found, using fallback recommendations only");
            return Ok(Self::empty());
        }

        let json = fs::read_to_string(path)
            .map_err(|e| SkillgapError::ResourceFile { path: path.to_path_buf(), reason: e.to_string() })?;

        let map = Self::from_json(&json)
            .map_err(|e| SkillgapError::ResourceFile { path: path.to_path_buf(), reason: e.to_string() })?;

        tracing::debug!(path = %path.display(), skills = map.len(), "loaded skill resources");
        Ok(map)
    }

    /// Resources for `skill` in file order, or an empty slice.
    pub fn get(&self, skill: &str) -> &[Resource] {
        self.entries.get(skill).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything the pipeline reads but never writes: the vocabulary and the
/// resource map.
///
/// Build one at startup and share it by reference (or behind an `Arc`)
/// across requests.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    pub vocabulary: SkillVocabulary,
    pub resources: SkillResourceMap,
}

impl SkillCatalog {
    pub fn new(vocabulary: SkillVocabulary, resources: SkillResourceMap) -> Self {
        Self { vocabulary, resources }
    }

    /// Baseline vocabulary with no resources.
    pub fn baseline() -> Self {
        Self::default()
    }
}

/// Locates and loads the resource file for a [`SkillCatalog`].
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    /// Explicit resource file path
    resource_path: Option<PathBuf>,
    /// Directory searched for [`RESOURCE_FILE_NAME`] when no path is given
    standard_dir: Option<PathBuf>,
    /// Vocabulary override
    vocabulary: Option<SkillVocabulary>,
}

impl CatalogLoader {
    pub fn builder() -> CatalogLoaderBuilder {
        CatalogLoaderBuilder::new()
    }

    /// The resource file this loader will read, if any.
    pub fn resolve_path(&self) -> Option<PathBuf> {
        match (&self.resource_path, &self.standard_dir) {
            (Some(path), _) => Some(path.clone()),
            (None, Some(dir)) => Some(dir.join(RESOURCE_FILE_NAME)),
            (None, None) => None,
        }
    }

    /// Builds the catalog.
    pub fn load(&self) -> Result<SkillCatalog> {
        let resources = match self.resolve_path() {
            Some(path) => SkillResourceMap::load(&path)?,
            None => SkillResourceMap::empty(),
        };
        let vocabulary = self.vocabulary.clone().unwrap_or_default();

        Ok(SkillCatalog { vocabulary, resources })
    }

    /// Default directory (~/.config/skillgap)
    fn default_standard_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("skillgap"))
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        let mut builder = CatalogLoaderBuilder::new();

        if let Some(dir) = Self::default_standard_dir() {
            builder = builder.standard_dir(dir);
        }

        builder.build()
    }
}

/// Builder for CatalogLoader
#[derive(Debug, Default)]
pub struct CatalogLoaderBuilder {
    resource_path: Option<PathBuf>,
    standard_dir: Option<PathBuf>,
    vocabulary: Option<SkillVocabulary>,
}

impl CatalogLoaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read resources from exactly this file.
    pub fn resource_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.resource_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Look for [`RESOURCE_FILE_NAME`] in this directory.
    pub fn standard_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.standard_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replace the baseline vocabulary.
    pub fn vocabulary(mut self, vocabulary: SkillVocabulary) -> Self {
        self.vocabulary = Some(vocabulary);
        self
    }

    pub fn build(self) -> CatalogLoader {
        CatalogLoader {
            resource_path: self.resource_path,
            standard_dir: self.standard_dir,
            vocabulary: self.vocabulary,
        }
    }
}
