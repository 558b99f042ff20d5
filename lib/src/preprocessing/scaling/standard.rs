//! Standard Scaler (Z-score normalization).
//!
//! Transforms features by removing the mean and scaling to unit variance.
//!
//! The standard score of a sample `x` is calculated as:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the mean of the training samples, and `s` is the population
//! standard deviation. A column with `s = 0` scales to `0` everywhere.
//!
//! # Example
//! ```ignore
//! use profile_features::preprocessing::{Transformer, FittedTransformer, StandardScaler};
//!
//! let fitted = StandardScaler::new().fit(&numeric)?;
//! let scaled = fitted.transform(&numeric)?;
//!
//! // Later, for inference:
//! fitted.save_to_file("scaler.bin")?;
//! let loaded = FittedStandardScaler::load_from_file("scaler.bin")?;
//! ```

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use ndarray::{Array1, Array2, ArrayViewMut1, Axis};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Serializable parameters for a fitted StandardScaler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardScalerParams {
    /// Mean of each feature.
    pub mean: Vec<f64>,
    /// Population standard deviation of each feature.
    pub std: Vec<f64>,
}

/// StandardScaler transformer (unfitted).
#[derive(Clone, Debug, Default)]
pub struct StandardScaler;

impl StandardScaler {
    /// Create a new StandardScaler.
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for StandardScaler {
    type Input = Array2<f64>;
    type Output = Array2<f64>;
    type Params = StandardScalerParams;
    type Fitted = FittedStandardScaler;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError> {
        let (rows, cols) = data.dim();

        if rows == 0 {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit StandardScaler on empty data".to_string(),
            ));
        }

        let mean = data
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(cols));
        let std = data.std_axis(Axis(0), 0.0); // population std (ddof=0)

        info!(mean = ?mean.to_vec(), std = ?std.to_vec(), "Fitted numeric scaler");
        Ok(FittedStandardScaler { mean, std })
    }
}

/// Fitted StandardScaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedStandardScaler {
    mean: Array1<f64>,
    std: Array1<f64>,
}

impl FittedStandardScaler {
    /// Get the mean values for each feature.
    pub fn mean(&self) -> &Array1<f64> {
        &self.mean
    }

    /// Get the standard deviation values for each feature.
    pub fn std(&self) -> &Array1<f64> {
        &self.std
    }

    /// Scale one row in place.
    pub fn scale_row(&self, mut row: ArrayViewMut1<f64>) -> Result<(), PreprocessingError> {
        if row.len() != self.mean.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.mean.len(),
                got_features: row.len(),
            });
        }

        for ((x, &mean), &std) in row.iter_mut().zip(&self.mean).zip(&self.std) {
            *x = if std == 0.0 { 0.0 } else { (*x - mean) / std };
        }
        Ok(())
    }
}

impl FittedTransformer for FittedStandardScaler {
    type Input = Array2<f64>;
    type Output = Array2<f64>;
    type Params = StandardScalerParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        if data.ncols() != self.mean.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: self.mean.len(),
                got_features: data.ncols(),
            });
        }

        let mut result = data.clone();
        for row in result.rows_mut() {
            self.scale_row(row)?;
        }
        Ok(result)
    }

    fn extract_params(&self) -> Self::Params {
        StandardScalerParams {
            mean: self.mean.to_vec(),
            std: self.std.to_vec(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        if params.mean.len() != params.std.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: params.mean.len(),
                got_features: params.std.len(),
            });
        }

        Ok(Self {
            mean: Array1::from(params.mean),
            std: Array1::from(params.std),
        })
    }

    fn n_features_out(&self) -> usize {
        self.mean.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn create_test_data() -> Array2<f64> {
        array![[0.0, 1.0], [0.0, 1.0], [1.0, 3.0]]
    }

    #[test]
    fn test_standard_scaler_fit() {
        let fitted = StandardScaler::new().fit(&create_test_data()).unwrap();

        // Mean: [1/3, 5/3]
        assert!((fitted.mean()[0] - 1.0 / 3.0).abs() < 1e-10);
        assert!((fitted.mean()[1] - 5.0 / 3.0).abs() < 1e-10);
        // Population std of [0, 0, 1] is sqrt(2)/3
        assert!((fitted.std()[0] - 2.0f64.sqrt() / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_standard_scaler_transform() {
        let data = create_test_data();
        let fitted = StandardScaler::new().fit(&data).unwrap();
        let transformed = fitted.transform(&data).unwrap();

        // After standardization, each column should have mean≈0 and std≈1
        for col in transformed.columns() {
            let mean = col.mean().unwrap();
            let std = col.std(0.0);
            assert!(mean.abs() < 1e-10);
            assert!((std - 1.0).abs() < 1e-10);
        }
    }

    #[test]
    fn test_constant_column_scales_to_zero() {
        let data = array![[8.0, 1.0], [8.0, 2.0], [8.0, 3.0]];
        let fitted = StandardScaler::new().fit(&data).unwrap();
        assert_eq!(fitted.std()[0], 0.0);

        let transformed = fitted.transform(&array![[8.0, 2.0], [9.5, 2.0]]).unwrap();
        assert_eq!(transformed[[0, 0]], 0.0);
        assert_eq!(transformed[[1, 0]], 0.0);
        assert_eq!(transformed[[1, 1]], 0.0);
    }

    #[test]
    fn test_feature_mismatch() {
        let fitted = StandardScaler::new().fit(&create_test_data()).unwrap();
        let result = fitted.transform(&array![[1.0, 2.0, 3.0]]);
        assert!(matches!(
            result,
            Err(PreprocessingError::FeatureMismatch {
                expected_features: 2,
                got_features: 3
            })
        ));
    }

    #[test]
    fn test_standard_scaler_serialization() {
        let data = create_test_data();
        let fitted = StandardScaler::new().fit(&data).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.bin");
        fitted.save_to_file(&path).unwrap();
        let loaded = FittedStandardScaler::load_from_file(&path).unwrap();

        assert_eq!(loaded.transform(&data).unwrap(), fitted.transform(&data).unwrap());
    }

    #[test]
    fn test_empty_data() {
        let result = StandardScaler::new().fit(&Array2::zeros((0, 2)));
        assert!(matches!(result, Err(PreprocessingError::EmptyData(_))));
    }
}
