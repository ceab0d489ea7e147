//! Skill detection.
//!
//! Detection is plain substring containment over the lower-cased text. No
//! tokenization or word-boundary check is done, so short terms produce
//! false positives inside longer words ("sql" in "nosql", "rest" in
//! "interest"). Callers only depend on [`SkillDetector`], which leaves room
//! for a tokenizing matcher later.

use std::collections::BTreeSet;

use crate::vocabulary::SkillVocabulary;

/// Detected skill terms in lexicographic order, without duplicates.
pub type SkillSet = BTreeSet<String>;

/// Finds vocabulary terms in free text.
pub trait SkillDetector: Send + Sync {
    /// Returns every term of `vocabulary` found in `text`.
    ///
    /// The result must be a subset of `vocabulary`.
    fn detect(&self, text: &str, vocabulary: &SkillVocabulary) -> SkillSet;
}

/// Case-insensitive substring matcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringDetector;

impl SkillDetector for SubstringDetector {
    fn detect(&self, text: &str, vocabulary: &SkillVocabulary) -> SkillSet {
        let haystack = text.to_lowercase();
        vocabulary
            .iter()
            .filter(|term| haystack.contains(term))
            .map(str::to_string)
            .collect()
    }
}

/// Runs [`SubstringDetector`] over `text`.
pub fn detect_skills(text: &str, vocabulary: &SkillVocabulary) -> SkillSet {
    SubstringDetector.detect(text, vocabulary)
}
