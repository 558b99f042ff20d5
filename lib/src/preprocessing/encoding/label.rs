//! Label encoding for the job-role target.
//!
//! Maps role names to integer indices (0, 1, 2, ...) in sorted order, and
//! back again when ranking classifier output.

use crate::preprocessing::error::PreprocessingError;
use ndarray::Array1;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Label encoder for the target column.
///
/// # Example
/// ```ignore
/// use profile_features::preprocessing::LabelEncoder;
///
/// let fitted = LabelEncoder::new().fit(["Data Analyst", "Cloud Engineer", "Data Analyst"])?;
/// assert_eq!(fitted.classes(), &["Cloud Engineer", "Data Analyst"]);
/// let encoded = fitted.transform(["Data Analyst"])?; // [1]
/// ```
#[derive(Clone, Debug, Default)]
pub struct LabelEncoder;

impl LabelEncoder {
    /// Create a new LabelEncoder.
    pub fn new() -> Self {
        Self
    }

    /// Fit the encoder to the labels and return the fitted encoder.
    pub fn fit<I, S>(&self, labels: I) -> Result<FittedLabelEncoder, PreprocessingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes: BTreeSet<String> = labels
            .into_iter()
            .map(|label| label.as_ref().to_string())
            .collect();

        if classes.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit LabelEncoder on empty data".to_string(),
            ));
        }

        FittedLabelEncoder::from_params(LabelEncoderParams {
            classes: classes.into_iter().collect(),
        })
    }
}

/// Serializable parameters for a fitted LabelEncoder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoderParams {
    /// Unique classes in sorted order.
    pub classes: Vec<String>,
}

/// Fitted LabelEncoder ready for inference.
#[derive(Clone, Debug)]
pub struct FittedLabelEncoder {
    classes: Vec<String>,
    class_to_idx: HashMap<String, usize>,
}

impl FittedLabelEncoder {
    /// Get the unique classes.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Get the number of classes.
    pub fn n_classes(&self) -> usize {
        self.classes.len()
    }

    /// Encode a single label.
    pub fn encode(&self, label: &str) -> Result<usize, PreprocessingError> {
        self.class_to_idx
            .get(label)
            .copied()
            .ok_or_else(|| PreprocessingError::UnknownLabel(label.to_string()))
    }

    /// Decode a single index.
    pub fn decode(&self, idx: usize) -> Result<&str, PreprocessingError> {
        self.classes.get(idx).map(String::as_str).ok_or_else(|| {
            PreprocessingError::InvalidParameter(format!(
                "Index {} out of bounds for {} classes",
                idx,
                self.classes.len()
            ))
        })
    }

    /// Transform labels to encoded indices.
    pub fn transform<I, S>(&self, labels: I) -> Result<Array1<usize>, PreprocessingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        labels
            .into_iter()
            .map(|label| self.encode(label.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(Array1::from)
    }

    /// Inverse transform encoded indices back to the original labels.
    pub fn inverse_transform(&self, indices: &[usize]) -> Result<Vec<String>, PreprocessingError> {
        indices
            .iter()
            .map(|&idx| self.decode(idx).map(str::to_string))
            .collect()
    }

    /// Extract parameters for serialization.
    pub fn extract_params(&self) -> LabelEncoderParams {
        LabelEncoderParams {
            classes: self.classes.clone(),
        }
    }

    /// Reconstruct from parameters.
    pub fn from_params(params: LabelEncoderParams) -> Result<Self, PreprocessingError> {
        let mut class_to_idx = HashMap::with_capacity(params.classes.len());
        for (idx, class) in params.classes.iter().enumerate() {
            if class_to_idx.insert(class.clone(), idx).is_some() {
                return Err(PreprocessingError::InvalidParameter(format!(
                    "Duplicate class '{}' in label vocabulary",
                    class
                )));
            }
        }

        Ok(FittedLabelEncoder {
            classes: params.classes,
            class_to_idx,
        })
    }
}
