//! Skill overlap scoring.
//!
//! The score is the Jaccard similarity of the resume and job-description
//! skill sets, scaled to 0..=100 and rounded half-to-even:
//!
//! | intersection | union | exact    | score |
//! |--------------|-------|----------|-------|
//! | 1            | 8     | 12.5     | 12    |
//! | 3            | 8     | 37.5     | 38    |
//! | 2            | 6     | 33.33..  | 33    |
//! | 0            | 0     | -        | 0     |

use serde::Serialize;

use crate::detect::SkillSet;

/// Result of comparing a resume skill set with a job-description skill set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillComparison {
    /// Skills present in both sets.
    pub matched: Vec<String>,
    /// Skills the job description asks for that the resume lacks.
    pub missing: Vec<String>,
    /// Rounded Jaccard percentage.
    pub score: u8,
}

/// |A ∩ B| / |A ∪ B|, or 0.0 when both sets are empty.
pub fn jaccard(a: &SkillSet, b: &SkillSet) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

/// Jaccard similarity as an integer percentage.
///
/// Computed as a single division of `100 * |A ∩ B|` by `|A ∪ B|` so that
/// exact halves stay exact before rounding half-to-even.
pub fn match_score(resume: &SkillSet, jd: &SkillSet) -> u8 {
    let union = resume.union(jd).count();
    if union == 0 {
        return 0;
    }
    let intersection = resume.intersection(jd).count();
    let percent = (100 * intersection) as f64 / union as f64;
    percent.round_ties_even() as u8
}

/// Matched, missing and score for a resume against a job description.
pub fn compare_skills(resume: &SkillSet, jd: &SkillSet) -> SkillComparison {
    let matched = resume.intersection(jd).cloned().collect();
    let missing = jd.difference(resume).cloned().collect();

    SkillComparison { matched, missing, score: match_score(resume, jd) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(terms: &[&str]) -> SkillSet {
        terms.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_jaccard_empty() {
        assert_eq!(jaccard(&SkillSet::new(), &SkillSet::new()), 0.0);
        assert_eq!(match_score(&SkillSet::new(), &SkillSet::new()), 0);
    }

    #[test]
    fn test_identical_sets() {
        let a = set(&["aws", "python"]);
        assert_eq!(jaccard(&a, &a), 1.0);
        assert_eq!(match_score(&a, &a), 100);
    }

    #[test]
    fn test_disjoint_sets() {
        assert_eq!(match_score(&set(&["java"]), &set(&["python"])), 0);
    }

    #[test]
    fn test_half_rounds_to_even() {
        let jd = set(&["a", "b", "c", "d", "e", "f", "g", "h"]);

        assert_eq!(match_score(&set(&["a"]), &jd), 12);
        assert_eq!(match_score(&set(&["a", "b", "c"]), &jd), 38);
        assert_eq!(match_score(&set(&["a", "b", "c", "d", "e"]), &jd), 62);
    }

    #[test]
    fn test_compare_skills() {
        let resume = set(&["docker", "fastapi", "python", "sql"]);
        let jd = set(&["aws", "kubernetes", "python", "sql"]);
        let cmp = compare_skills(&resume, &jd);

        assert_eq!(cmp.matched, vec!["python", "sql"]);
        assert_eq!(cmp.missing, vec!["aws", "kubernetes"]);
        assert_eq!(cmp.score, 33);
    }

    #[test]
    fn test_empty_resume() {
        let cmp = compare_skills(&SkillSet::new(), &set(&["aws"]));
        assert!(cmp.matched.is_empty());
        assert_eq!(cmp.missing, vec!["aws"]);
        assert_eq!(cmp.score, 0);
    }
}
