//! Categorical feature and target encoding.
//!
//! ## CategoricalEncoder
//! Maps each categorical column's values to their position in a sorted
//! vocabulary (0, 1, 2, ...).
//!
//! ## LabelEncoder
//! Encodes the job-role target to integers and back.
//!
//! # Unseen values
//!
//! A categorical value never seen at fit time is handled according to
//! [`UnseenCategoryPolicy`]. The default, [`UnseenCategoryPolicy::FirstClass`],
//! silently reuses the first sorted class's code, so an unseen degree encodes
//! exactly like the alphabetically first known degree.

mod categorical;
mod label;

pub use categorical::{CategoricalEncoder, CategoricalEncoderParams, FittedCategoricalEncoder};
pub use label::{FittedLabelEncoder, LabelEncoder, LabelEncoderParams};

/// Strategy for categorical values outside the fitted vocabulary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum UnseenCategoryPolicy {
    /// Use the code of the first sorted class (0).
    #[default]
    FirstClass,
    /// Use a dedicated code one past the end of the vocabulary.
    Reserved,
    /// Fail with [`PreprocessingError::UnknownCategory`](crate::preprocessing::PreprocessingError::UnknownCategory).
    Reject,
}
