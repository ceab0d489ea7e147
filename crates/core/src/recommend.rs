//! Learning recommendations for missing skills.
//!
//! One resource per missing skill, in the order of the missing list, capped
//! at [`MAX_RECOMMENDATIONS`]. Because missing skills are sorted, the first
//! six alphabetically always win.

use crate::resources::{Resource, SkillResourceMap};

/// Upper bound on recommendations per analysis.
pub const MAX_RECOMMENDATIONS: usize = 6;

pub const FALLBACK_KIND: &str = "Course";
pub const FALLBACK_LINK: &str = "https://www.coursera.org/";
pub const FALLBACK_WHY: &str = "Essential skill listed in the JD.";

/// Picks the first known resource for each missing skill.
///
/// Skills with no entry in `resources` get [`fallback_resource`].
pub fn build_recommendations(missing: &[String], resources: &SkillResourceMap) -> Vec<Resource> {
    missing
        .iter()
        .map(|skill| match resources.get(skill).first() {
            Some(resource) => resource.clone(),
            None => fallback_resource(skill),
        })
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

/// Generic course suggestion for a skill without curated resources.
pub fn fallback_resource(skill: &str) -> Resource {
    Resource {
        title: format!("Learn {}", title_case(skill)),
        kind: FALLBACK_KIND.to_string(),
        link: Some(FALLBACK_LINK.to_string()),
        why: Some(FALLBACK_WHY.to_string()),
    }
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
///
/// "machine learning" becomes "Machine Learning", "scikit-learn" becomes
/// "Scikit-Learn" and "c++" becomes "C++".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}
