//! The fixed set of skill terms the detector looks for.

/// Skill terms recognised out of the box.
///
/// Multi-word and punctuated terms are matched as plain substrings, so
/// "machine learning" and "c++" work without any tokenizer.
pub const BASELINE_SKILLS: [&str; 30] = [
    "python",
    "java",
    "c++",
    "sql",
    "azure",
    "aws",
    "gcp",
    "docker",
    "kubernetes",
    "fastapi",
    "flask",
    "pandas",
    "scikit-learn",
    "numpy",
    "tensorflow",
    "pytorch",
    "machine learning",
    "nlp",
    "llm",
    "streamlit",
    "git",
    "github",
    "linux",
    "rest",
    "microservices",
    "openai",
    "react",
    "javascript",
    "dsa",
    "oop",
];

/// An ordered, duplicate-free set of lowercase skill terms.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl SkillVocabulary {
    /// The vocabulary embedded in the crate.
    pub fn baseline() -> Self {
        Self::from_terms(BASELINE_SKILLS)
    }

    /// Builds a vocabulary from arbitrary terms.
    ///
    /// Terms are trimmed and lowercased. Blank terms are dropped and later
    /// duplicates are ignored, so the first occurrence fixes the order.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for term in terms {
            let term = term.as_ref().trim().to_lowercase();
            if !term.is_empty() && !out.contains(&term) {
                out.push(term);
            }
        }
        Self { terms: out }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(String::as_str)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.iter().any(|t| t == term)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::baseline()
    }
}
