//! Classifier collaborator and role ranking.
//!
//! The crate does not train classifiers. Any model that maps feature rows to
//! class probabilities, with columns aligned to the fitted job-role vocabulary,
//! can be plugged in through [`ProbabilisticClassifier`].

use crate::dataset::ProfileRecord;
use crate::preprocessing::encoding::FittedLabelEncoder;
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::pipeline::FittedProfilePipeline;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of roles returned by default.
pub const DEFAULT_TOP_K: usize = 5;

/// Roles at or below this confidence (percent) are dropped.
pub const DEFAULT_MIN_CONFIDENCE: f64 = 1.0;

/// A fitted model that outputs class probabilities.
pub trait ProbabilisticClassifier {
    /// One row of probabilities per feature row; column `j` is the class
    /// with label code `j`.
    fn predict_probabilities(
        &self,
        features: ArrayView2<f64>,
    ) -> Result<Array2<f64>, PreprocessingError>;
}

/// A job role with its confidence in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedRole {
    pub role: String,
    /// Probability × 100, rounded to one decimal.
    pub confidence: f64,
}

/// Rank the classes of one probability row.
///
/// Takes the `top_k` most probable classes, then keeps those whose percentage
/// is strictly above `min_confidence`. Equal probabilities keep label order.
///
/// # Errors
/// [`PreprocessingError::FeatureMismatch`] if the row length differs from the
/// number of classes.
pub fn rank_roles(
    probabilities: ArrayView1<f64>,
    labels: &FittedLabelEncoder,
    top_k: usize,
    min_confidence: f64,
) -> Result<Vec<RankedRole>, PreprocessingError> {
    if probabilities.len() != labels.n_classes() {
        return Err(PreprocessingError::FeatureMismatch {
            expected_features: labels.n_classes(),
            got_features: probabilities.len(),
        });
    }

    let mut order: Vec<usize> = (0..probabilities.len()).collect();
    order.sort_by(|&a, &b| probabilities[b].total_cmp(&probabilities[a]));

    let kept: Vec<usize> = order
        .into_iter()
        .take(top_k)
        .filter(|&i| probabilities[i] * 100.0 > min_confidence)
        .collect();
    let roles = labels.inverse_transform(&kept)?;

    Ok(roles
        .into_iter()
        .zip(kept)
        .map(|(role, i)| RankedRole {
            role,
            confidence: (probabilities[i] * 1000.0).round() / 10.0,
        })
        .collect())
}

impl FittedProfilePipeline {
    /// Transform one record, run the classifier on it and rank the roles.
    ///
    /// # Errors
    /// [`PreprocessingError::LabelsNotFitted`] if the pipeline was fitted
    /// without job roles, plus any transform or classifier error.
    pub fn predict_roles<C: ProbabilisticClassifier + ?Sized>(
        &self,
        classifier: &C,
        record: &ProfileRecord,
        top_k: usize,
    ) -> Result<Vec<RankedRole>, PreprocessingError> {
        let labels = self
            .label_encoder()
            .ok_or(PreprocessingError::LabelsNotFitted)?;

        let features = self.transform_one(record)?.insert_axis(Axis(0));
        let probabilities = classifier.predict_probabilities(features.view())?;
        if probabilities.nrows() != 1 {
            return Err(PreprocessingError::InvalidParameter(format!(
                "classifier returned {} rows for a single record",
                probabilities.nrows()
            )));
        }

        let ranked = rank_roles(
            probabilities.row(0),
            labels,
            top_k,
            DEFAULT_MIN_CONFIDENCE,
        )?;
        debug!(roles = ranked.len(), "Ranked roles");
        Ok(ranked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocessing::encoding::LabelEncoder;
    use crate::preprocessing::pipeline::PipelineConfig;
    use ndarray::array;

    fn labels() -> FittedLabelEncoder {
        LabelEncoder::new()
            .fit(["Data Analyst", "Data Scientist", "Software Engineer", "UI/UX Designer"])
            .unwrap()
    }

    #[test]
    fn test_rank_roles_orders_and_rounds() {
        let probs = array![0.6234, 0.005, 0.3516, 0.02];
        let ranked = rank_roles(probs.view(), &labels(), DEFAULT_TOP_K, DEFAULT_MIN_CONFIDENCE)
            .unwrap();

        let roles: Vec<&str> = ranked.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(roles, vec!["Data Analyst", "Software Engineer", "UI/UX Designer"]);
        assert!((ranked[0].confidence - 62.3).abs() < 1e-9);
        assert!((ranked[1].confidence - 35.2).abs() < 1e-9);
        assert!((ranked[2].confidence - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_rank_roles_top_k() {
        let probs = array![0.1, 0.4, 0.3, 0.2];
        let ranked = rank_roles(probs.view(), &labels(), 2, 0.0).unwrap();

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].role, "Data Scientist");
        assert_eq!(ranked[1].role, "Software Engineer");
    }

    #[test]
    fn test_rank_roles_threshold_is_strict() {
        let probs = array![0.01, 0.99, 0.0, 0.0];
        let ranked = rank_roles(probs.view(), &labels(), 4, 1.0).unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].role, "Data Scientist");
    }

    #[test]
    fn test_rank_roles_width_mismatch() {
        let probs = array![0.5, 0.5];
        let err = rank_roles(probs.view(), &labels(), 5, 1.0).unwrap_err();
        assert!(matches!(
            err,
            PreprocessingError::FeatureMismatch {
                expected_features: 4,
                got_features: 2
            }
        ));
    }

    /// Puts all mass on the class whose code equals the first feature.
    struct FirstFeatureClassifier {
        n_classes: usize,
    }

    impl ProbabilisticClassifier for FirstFeatureClassifier {
        fn predict_probabilities(
            &self,
            features: ArrayView2<f64>,
        ) -> Result<Array2<f64>, PreprocessingError> {
            let mut probs = Array2::zeros((features.nrows(), self.n_classes));
            for (i, row) in features.rows().into_iter().enumerate() {
                let class = (row[0] as usize).min(self.n_classes - 1);
                probs[[i, class]] = 1.0;
            }
            Ok(probs)
        }
    }

    fn record(degree: &str, role: &str) -> ProfileRecord {
        ProfileRecord::new()
            .with_degree(degree)
            .with_major("Computer Science")
            .with_cgpa(8.0)
            .with_skills("Python, SQL")
            .with_years_of_experience(2.0)
            .with_preferred_industry("Technology")
            .with_job_role(role)
    }

    #[test]
    fn test_predict_roles() {
        let records = vec![
            record("B.Sc", "Data Analyst"),
            record("B.Tech", "Software Engineer"),
            record("M.Tech", "Data Scientist"),
        ];
        let (pipeline, _) =
            FittedProfilePipeline::fit(PipelineConfig::default(), &records).unwrap();
        let classifier = FirstFeatureClassifier { n_classes: 3 };

        // "B.Tech" has code 1; class 1 is "Data Scientist".
        let ranked = pipeline
            .predict_roles(&classifier, &records[1], DEFAULT_TOP_K)
            .unwrap();
        assert_eq!(
            ranked,
            vec![RankedRole {
                role: "Data Scientist".to_string(),
                confidence: 100.0
            }]
        );
    }

    #[test]
    fn test_predict_roles_needs_labels() {
        let records = vec![
            record("B.Sc", "Data Analyst"),
            record("B.Tech", "Software Engineer"),
        ]
        .into_iter()
        .map(|mut r| {
            r.job_role = None;
            r
        })
        .collect::<Vec<_>>();
        let (pipeline, _) =
            FittedProfilePipeline::fit(PipelineConfig::default(), &records).unwrap();

        let err = pipeline
            .predict_roles(&FirstFeatureClassifier { n_classes: 2 }, &records[0], 5)
            .unwrap_err();
        assert!(matches!(err, PreprocessingError::LabelsNotFitted));
    }
}
