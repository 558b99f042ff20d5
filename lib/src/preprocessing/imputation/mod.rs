//! Imputation of missing profile fields.
//!
//! | Transformer | Description |
//! |-------------|-------------|
//! | [`ProfileImputer`] | Constant fills for certification/specialization, mode for other categoricals, median for numerics |

pub mod profile;

pub use profile::{
    FittedProfileImputer, ProfileImputer, ProfileImputerParams, GENERAL_SPECIALIZATION,
    NO_CERTIFICATION, UNKNOWN_CATEGORY,
};
