//! Skill-category counts.

use super::keywords::SkillCategory;
use ndarray::ArrayViewMut1;

/// Counts, for each category, how many of its keywords occur in a skills text.
///
/// Matching is plain substring search on the lowercased text, so `"r"` matches
/// inside `"docker"`. Each keyword counts at most once.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillCategorizer {
    categories: Vec<SkillCategory>,
}

impl SkillCategorizer {
    pub fn new(categories: Vec<SkillCategory>) -> Self {
        Self { categories }
    }

    /// One feature per category, named after it.
    pub fn feature_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn n_features(&self) -> usize {
        self.categories.len()
    }

    /// Write the category counts for `skills` into `out`.
    pub fn count_into(&self, skills: &str, mut out: ArrayViewMut1<f64>) {
        if skills.is_empty() {
            out.fill(0.0);
            return;
        }
        let lowered = skills.to_lowercase();
        for (slot, category) in out.iter_mut().zip(&self.categories) {
            *slot = category
                .keywords
                .iter()
                .filter(|keyword| lowered.contains(keyword.as_str()))
                .count() as f64;
        }
    }

    /// Category counts for `skills`, in category order.
    pub fn count(&self, skills: &str) -> Vec<f64> {
        let mut out = ndarray::Array1::zeros(self.categories.len());
        self.count_into(skills, out.view_mut());
        out.to_vec()
    }
}
