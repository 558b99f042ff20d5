//! Ordinal encoding for string categorical columns.
//!
//! Each column gets its own vocabulary, sorted lexicographically; a value's
//! code is its position in that sorted vocabulary.

use crate::preprocessing::encoding::UnseenCategoryPolicy;
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use tracing::{debug, info};

/// Ordinal encoder for several string columns at once.
///
/// Input rows carry one value per column, in the order the columns were
/// named at construction.
///
/// # Example
/// ```ignore
/// use profile_features::preprocessing::{CategoricalEncoder, Transformer, FittedTransformer};
///
/// let encoder = CategoricalEncoder::new(["Degree"]);
/// let fitted = encoder.fit(&[vec!["MBA".into()], vec!["B.Tech".into()]])?;
///
/// // B.Tech -> 0, MBA -> 1
/// let codes = fitted.transform(&[vec!["MBA".into()]])?;
/// ```
#[derive(Clone, Debug)]
pub struct CategoricalEncoder {
    columns: Vec<String>,
    unseen: UnseenCategoryPolicy,
}

impl CategoricalEncoder {
    /// Create an encoder for the named columns.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            unseen: UnseenCategoryPolicy::default(),
        }
    }

    /// Set how values outside the fitted vocabulary are encoded.
    pub fn with_unseen_policy(mut self, policy: UnseenCategoryPolicy) -> Self {
        self.unseen = policy;
        self
    }
}

/// Serializable parameters for a fitted CategoricalEncoder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoricalEncoderParams {
    /// Column names, in input order.
    pub columns: Vec<String>,
    /// Sorted vocabulary of each column.
    pub categories: Vec<Vec<String>>,
    /// Unseen-value policy.
    pub unseen: UnseenCategoryPolicy,
}

/// Fitted CategoricalEncoder ready for inference.
#[derive(Clone, Debug)]
pub struct FittedCategoricalEncoder {
    columns: Vec<String>,
    categories: Vec<Vec<String>>,
    mappings: Vec<HashMap<String, usize>>,
    unseen: UnseenCategoryPolicy,
}

fn check_width(expected: usize, got: usize) -> Result<(), PreprocessingError> {
    if expected != got {
        return Err(PreprocessingError::FeatureMismatch {
            expected_features: expected,
            got_features: got,
        });
    }
    Ok(())
}

impl Transformer for CategoricalEncoder {
    type Input = [Vec<String>];
    type Output = Array2<f64>;
    type Params = CategoricalEncoderParams;
    type Fitted = FittedCategoricalEncoder;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError> {
        if data.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit CategoricalEncoder on empty data".to_string(),
            ));
        }

        let cols = self.columns.len();
        let mut vocabularies = vec![BTreeSet::new(); cols];
        for row in data {
            check_width(cols, row.len())?;
            for (vocab, value) in vocabularies.iter_mut().zip(row) {
                vocab.insert(value.clone());
            }
        }

        let fitted = FittedCategoricalEncoder::from_params(CategoricalEncoderParams {
            columns: self.columns.clone(),
            categories: vocabularies
                .into_iter()
                .map(|vocab| vocab.into_iter().collect())
                .collect(),
            unseen: self.unseen,
        })?;

        for (name, categories) in fitted.columns.iter().zip(&fitted.categories) {
            info!(column = %name, unique = categories.len(), "Fitted categorical vocabulary");
        }
        Ok(fitted)
    }
}

impl FittedCategoricalEncoder {
    /// Column names, in input order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The sorted vocabulary learned for each column.
    pub fn categories(&self) -> &[Vec<String>] {
        &self.categories
    }

    pub fn unseen_policy(&self) -> UnseenCategoryPolicy {
        self.unseen
    }

    /// Encode one value of column `col`.
    pub fn encode(&self, col: usize, value: &str) -> Result<usize, PreprocessingError> {
        let mapping = self.mappings.get(col).ok_or_else(|| {
            PreprocessingError::InvalidParameter(format!(
                "Column index {} out of range for {} columns",
                col,
                self.columns.len()
            ))
        })?;

        if let Some(&code) = mapping.get(value) {
            return Ok(code);
        }

        debug!(column = %self.columns[col], value, policy = ?self.unseen, "Unseen category");
        match self.unseen {
            UnseenCategoryPolicy::FirstClass => Ok(0),
            UnseenCategoryPolicy::Reserved => Ok(self.categories[col].len()),
            UnseenCategoryPolicy::Reject => Err(PreprocessingError::UnknownCategory {
                column: self.columns[col].clone(),
                value: value.to_string(),
            }),
        }
    }

    /// Encode one row of values, one per column.
    pub fn encode_row<S: AsRef<str>>(&self, row: &[S]) -> Result<Vec<f64>, PreprocessingError> {
        check_width(self.columns.len(), row.len())?;
        row.iter()
            .enumerate()
            .map(|(col, value)| self.encode(col, value.as_ref()).map(|code| code as f64))
            .collect()
    }
}

impl FittedTransformer for FittedCategoricalEncoder {
    type Input = [Vec<String>];
    type Output = Array2<f64>;
    type Params = CategoricalEncoderParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        let cols = self.columns.len();
        let mut result = Array2::zeros((data.len(), cols));

        for (mut out, row) in result.rows_mut().into_iter().zip(data) {
            let codes = self.encode_row(row)?;
            for (slot, code) in out.iter_mut().zip(codes) {
                *slot = code;
            }
        }
        Ok(result)
    }

    fn extract_params(&self) -> Self::Params {
        CategoricalEncoderParams {
            columns: self.columns.clone(),
            categories: self.categories.clone(),
            unseen: self.unseen,
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        check_width(params.columns.len(), params.categories.len())?;

        let mut mappings = Vec::with_capacity(params.categories.len());
        for (name, vocab) in params.columns.iter().zip(&params.categories) {
            if vocab.is_empty() {
                return Err(PreprocessingError::InvalidParameter(format!(
                    "Column '{}' has an empty vocabulary",
                    name
                )));
            }
            let mapping: HashMap<String, usize> = vocab
                .iter()
                .enumerate()
                .map(|(idx, value)| (value.clone(), idx))
                .collect();
            mappings.push(mapping);
        }

        Ok(FittedCategoricalEncoder {
            columns: params.columns,
            categories: params.categories,
            mappings,
            unseen: params.unseen,
        })
    }

    fn n_features_out(&self) -> usize {
        self.columns.len()
    }
}
