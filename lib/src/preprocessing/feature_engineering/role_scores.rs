//! Weighted role scores.

use super::keywords::RoleKeywords;
use ndarray::ArrayViewMut1;

/// Scores how strongly a profile's skills and certifications match each role.
///
/// For a role with weight `w`, `h` high-priority hits and `m` medium-priority
/// hits, the score is `(h + 0.5 m) w` divided by the largest achievable value,
/// capped at 1. A role with no keywords scores 0.
#[derive(Clone, Debug, PartialEq)]
pub struct RoleScorer {
    roles: Vec<RoleKeywords>,
}

fn hits(text: &str, keywords: &[String]) -> f64 {
    keywords.iter().filter(|k| text.contains(k.as_str())).count() as f64
}

impl RoleScorer {
    pub fn new(roles: Vec<RoleKeywords>) -> Self {
        Self { roles }
    }

    /// `{role}_score` for each role, in table order.
    pub fn feature_names(&self) -> Vec<String> {
        self.roles.iter().map(RoleKeywords::feature_name).collect()
    }

    pub fn n_features(&self) -> usize {
        self.roles.len()
    }

    /// Write the score of every role into `out`.
    pub fn score_into(&self, skills: &str, certification: &str, mut out: ArrayViewMut1<f64>) {
        let combined = format!("{} {}", skills, certification).to_lowercase();

        for (slot, role) in out.iter_mut().zip(&self.roles) {
            let raw = (hits(&combined, &role.high_priority)
                + 0.5 * hits(&combined, &role.medium_priority))
                * role.weight;
            let max = (role.high_priority.len() as f64 + 0.5 * role.medium_priority.len() as f64)
                * role.weight;
            *slot = if max > 0.0 { (raw / max).min(1.0) } else { 0.0 };
        }
    }

    /// Scores in role order.
    pub fn score(&self, skills: &str, certification: &str) -> Vec<f64> {
        let mut out = ndarray::Array1::zeros(self.roles.len());
        self.score_into(skills, certification, out.view_mut());
        out.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessing::feature_engineering::KeywordTables;

    fn scorer() -> RoleScorer {
        RoleScorer::new(KeywordTables::builtin().roles)
    }

    #[test]
    fn test_data_analyst_profile() {
        let scores = scorer().score("sql, tableau, excel", "none");

        // 3 high hits out of 10 high + 6 medium.
        assert!((scores[1] - 3.0 / 13.0).abs() < 1e-12);
        // Financial Analyst: "excel" is a medium keyword (6 high + 4 medium).
        assert!((scores[10] - 0.0625).abs() < 1e-12);

        let best = scores
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(idx, _)| idx);
        assert_eq!(best, Some(1));
        for (idx, &score) in scores.iter().enumerate() {
            if idx != 1 && idx != 10 {
                assert_eq!(score, 0.0, "role {}", idx);
            }
        }
    }

    #[test]
    fn test_scores_are_bounded() {
        let every_keyword: Vec<String> = KeywordTables::builtin()
            .roles
            .iter()
            .flat_map(|r| r.high_priority.iter().chain(&r.medium_priority).cloned())
            .collect();
        let text = every_keyword.join(" ");

        for score in scorer().score(&text, "") {
            assert!((0.0..=1.0).contains(&score));
            assert!((score - 1.0).abs() < 1e-12);
        }
        for score in scorer().score("", "") {
            assert_eq!(score, 0.0);
        }
    }

    #[test]
    fn test_certification_text_counts() {
        let scores = scorer().score("", "aws kubernetes");
        assert!(scores[0] > 0.0);
    }

    #[test]
    fn test_role_without_keywords_scores_zero() {
        let scorer = RoleScorer::new(vec![RoleKeywords {
            role: "Generalist".to_string(),
            high_priority: vec![],
            medium_priority: vec![],
            weight: 2.0,
        }]);
        assert_eq!(scorer.score("anything", ""), vec![0.0]);
        assert_eq!(scorer.feature_names(), vec!["generalist_score"]);
    }
}
