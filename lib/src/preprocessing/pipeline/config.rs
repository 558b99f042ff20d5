//! Pipeline configuration.

use crate::preprocessing::cgpa::DEFAULT_CGPA_FALLBACK;
use crate::preprocessing::encoding::UnseenCategoryPolicy;
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::feature_engineering::KeywordTables;
use crate::preprocessing::feature_extraction::TfidfConfig;
use crate::preprocessing::outliers::{IqrOutlierFilter, DEFAULT_IQR_MULTIPLIER};
use crate::preprocessing::text::TextNormalizer;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything that shapes a pipeline's behaviour apart from the data it is
/// fitted on.
///
/// The whole config is stored inside a fitted pipeline, so a loaded pipeline
/// reproduces the exact normalizer, keyword tables and vectorizer limits it
/// was fitted with.
///
/// Missing keys in JSON fall back to the defaults:
///
/// ```
/// use profile_features::preprocessing::PipelineConfig;
///
/// let config = PipelineConfig::from_json_str(r#"{ "cgpa_fallback": 7.0 }"#).unwrap();
/// assert_eq!(config.cgpa_fallback, 7.0);
/// assert_eq!(config.skills_tfidf.max_features, Some(100));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Vectorizer settings for the skills column.
    pub skills_tfidf: TfidfConfig,
    /// Vectorizer settings for the certification column.
    pub certification_tfidf: TfidfConfig,
    /// Grade used when a CGPA is missing, unparseable or out of range.
    pub cgpa_fallback: f64,
    /// `k` in `[Q1 - k * IQR, Q3 + k * IQR]`.
    pub outlier_iqr_multiplier: f64,
    /// Encoding of categorical values not seen at fit time.
    pub unseen_category: UnseenCategoryPolicy,
    /// Cleaning applied to skills and certification text.
    pub normalizer: TextNormalizer,
    /// Skill categories and role keywords.
    pub keyword_tables: KeywordTables,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            skills_tfidf: TfidfConfig::bigrams(100),
            certification_tfidf: TfidfConfig::bigrams(50),
            cgpa_fallback: DEFAULT_CGPA_FALLBACK,
            outlier_iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
            unseen_category: UnseenCategoryPolicy::default(),
            normalizer: TextNormalizer::default(),
            keyword_tables: KeywordTables::builtin(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skills_tfidf(mut self, config: TfidfConfig) -> Self {
        self.skills_tfidf = config;
        self
    }

    pub fn with_certification_tfidf(mut self, config: TfidfConfig) -> Self {
        self.certification_tfidf = config;
        self
    }

    pub fn with_cgpa_fallback(mut self, fallback: f64) -> Self {
        self.cgpa_fallback = fallback;
        self
    }

    pub fn with_outlier_iqr_multiplier(mut self, multiplier: f64) -> Self {
        self.outlier_iqr_multiplier = multiplier;
        self
    }

    pub fn with_unseen_category(mut self, policy: UnseenCategoryPolicy) -> Self {
        self.unseen_category = policy;
        self
    }

    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_keyword_tables(mut self, tables: KeywordTables) -> Self {
        self.keyword_tables = tables;
        self
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, PreprocessingError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PreprocessingError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, PreprocessingError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check every setting.
    ///
    /// # Errors
    /// [`PreprocessingError::InvalidParameter`] naming the first bad setting.
    pub fn validate(&self) -> Result<(), PreprocessingError> {
        if !self.cgpa_fallback.is_finite() {
            return Err(PreprocessingError::InvalidParameter(format!(
                "cgpa_fallback must be finite, got {}",
                self.cgpa_fallback
            )));
        }
        IqrOutlierFilter::new(self.outlier_iqr_multiplier)?;
        self.skills_tfidf.validate()?;
        self.certification_tfidf.validate()?;
        self.keyword_tables.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.skills_tfidf.max_features, Some(100));
        assert_eq!(config.certification_tfidf.max_features, Some(50));
        assert_eq!(config.skills_tfidf.min_df, 2);
        assert_eq!(config.skills_tfidf.ngram_range, (1, 2));
        assert_eq!(config.cgpa_fallback, 7.5);
        assert_eq!(config.outlier_iqr_multiplier, 1.5);
        assert_eq!(config.unseen_category, UnseenCategoryPolicy::FirstClass);
        config.validate().unwrap();
    }

    #[test]
    fn test_json_round_trip() {
        let config = PipelineConfig::default()
            .with_unseen_category(UnseenCategoryPolicy::Reserved)
            .with_skills_tfidf(TfidfConfig::bigrams(20).with_min_df(1));
        let json = config.to_json_string().unwrap();
        assert_eq!(PipelineConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PipelineConfig::from_json_str(
            r#"{ "unseen_category": "Reject", "outlier_iqr_multiplier": 3.0 }"#,
        )
        .unwrap();
        assert_eq!(config.unseen_category, UnseenCategoryPolicy::Reject);
        assert_eq!(config.outlier_iqr_multiplier, 3.0);
        assert_eq!(config.keyword_tables, KeywordTables::builtin());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(PipelineConfig::from_json_str(r#"{ "outlier_iqr_multiplier": -1.0 }"#).is_err());
        assert!(PipelineConfig::default()
            .with_skills_tfidf(TfidfConfig::bigrams(10).with_min_df(0))
            .validate()
            .is_err());
        assert!(matches!(
            PipelineConfig::from_json_str("not json"),
            Err(PreprocessingError::Config(_))
        ));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipeline.json");
        std::fs::write(&path, r#"{ "cgpa_fallback": 6.5 }"#).unwrap();
        assert_eq!(PipelineConfig::from_json_file(&path).unwrap().cgpa_fallback, 6.5);
    }
}
