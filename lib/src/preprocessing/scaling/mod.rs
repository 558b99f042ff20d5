//! Scaling of numeric features.
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`StandardScaler`] | Z-score normalization (mean=0, std=1); constant columns scale to 0 |

pub mod standard;

pub use standard::{FittedStandardScaler, StandardScaler, StandardScalerParams};
