//! Core traits for preprocessing transformers.
//!
//! This module defines the two central traits:
//! - [`Transformer`]: Used during fitting; has hyperparameters and can learn from data.
//! - [`FittedTransformer`]: After fitting; ready for inference and serialization.
//!
//! Fitting never mutates the unfitted value. Each call to `fit` produces a new,
//! independent fitted value, so learned state is written exactly once.

use crate::preprocessing::error::PreprocessingError;
use crate::serialization::SerializableParams;

/// Trait for unfitted transformers with hyperparameters.
///
/// A transformer learns parameters from training data and can then transform
/// new data using those learned parameters. This trait represents the
/// configurable, unfitted state.
///
/// # Example
/// ```ignore
/// use profile_features::preprocessing::{StandardScaler, Transformer, FittedTransformer};
///
/// let scaler = StandardScaler::new();
/// let fitted = scaler.fit(&numeric)?;
/// let scaled = fitted.transform(&new_numeric)?;
/// ```
pub trait Transformer: Clone {
    /// Input data type for fitting and transformation.
    type Input: ?Sized;
    /// Output data type after transformation.
    type Output;
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;
    /// The fitted transformer type ready for inference.
    type Fitted: FittedTransformer<Params = Self::Params, Input = Self::Input, Output = Self::Output>;

    /// Fit the transformer to the training data.
    ///
    /// # Errors
    /// Returns [`PreprocessingError`] if the data is empty or has the wrong shape.
    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError>;

    /// Fit the transformer and transform the same data in one step.
    fn fit_transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        let fitted = self.fit(data)?;
        fitted.transform(data)
    }
}

/// Trait for fitted transformers ready for inference.
///
/// # Guarantees
/// - `transform` takes `&self` and never changes learned state.
/// - `extract_params()` + `from_params()` is a round-trip that preserves
///   `transform` output exactly.
pub trait FittedTransformer: Clone {
    /// Input data type for transformation.
    type Input: ?Sized;
    /// Output data type after transformation.
    type Output;
    /// Serializable representation of learned parameters.
    type Params: SerializableParams;

    /// Transform data using learned parameters.
    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError>;

    /// Extract learned parameters as a serializable representation.
    fn extract_params(&self) -> Self::Params;

    /// Reconstruct a fitted transformer from parameters.
    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError>
    where
        Self: Sized;

    /// Number of output columns this transformer produces per row.
    fn n_features_out(&self) -> usize;

    /// Save the fitted transformer to a file.
    fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), PreprocessingError> {
        let bytes = self
            .extract_params()
            .to_bytes()
            .map_err(|e| PreprocessingError::InvalidParameter(e.to_string()))?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Load a fitted transformer from a file.
    fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, PreprocessingError>
    where
        Self: Sized,
    {
        let bytes = std::fs::read(path)?;
        let params = Self::Params::from_bytes(&bytes)
            .map_err(|e| PreprocessingError::IncompatibleFormat(e.to_string()))?;
        Self::from_params(params)
    }
}
