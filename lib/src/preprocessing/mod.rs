//! Profile preprocessing: from raw records to feature vectors.
//!
//! Every learned component follows the same type-state pattern:
//!
//! - [`Transformer`]: the unfitted, configurable value.
//! - [`FittedTransformer`]: the immutable result of `fit`, ready for
//!   inference and serialization.
//!
//! # Components
//!
//! ## Cleaning
//! - [`TextNormalizer`]: lowercase, strip punctuation, drop stop words, lemmatize
//! - [`CgpaNormalizer`]: map any CGPA scale onto 0-10
//! - [`ProfileImputer`]: fill missing fields (mode, median, fixed values)
//! - [`IqrOutlierFilter`]: drop rows with outlying numeric values
//!
//! ## Encoding
//! - [`CategoricalEncoder`]: sorted-vocabulary integer codes per column
//! - [`LabelEncoder`]: job-role vocabulary
//! - [`TfidfVectorizer`]: TF-IDF on cleaned text
//! - [`StandardScaler`]: Z-score normalization
//!
//! ## Keyword features
//! - [`SkillCategorizer`]: keyword hits per skill category
//! - [`RoleScorer`]: weighted keyword match score per job role
//!
//! ## Pipeline
//! - [`ProfilePipeline`]: all of the above, fitted together
//!
//! # Example
//!
//! ```ignore
//! use profile_features::preprocessing::{FittedTransformer, StandardScaler, Transformer};
//!
//! let fitted = StandardScaler::new().fit(&numeric)?;
//! let scaled = fitted.transform(&numeric)?;
//! fitted.save_to_file("scaler.bin")?;
//! ```

pub mod cgpa;
pub mod encoding;
pub mod error;
pub mod feature_engineering;
pub mod feature_extraction;
pub mod imputation;
pub mod outliers;
pub mod pipeline;
pub mod scaling;
pub mod text;
pub mod traits;

// Re-export main types
pub use cgpa::{CgpaNormalizer, DEFAULT_CGPA_FALLBACK};
pub use encoding::{
    CategoricalEncoder, CategoricalEncoderParams, FittedCategoricalEncoder, FittedLabelEncoder,
    LabelEncoder, LabelEncoderParams, UnseenCategoryPolicy,
};
pub use error::PreprocessingError;
pub use feature_engineering::{KeywordTables, RoleKeywords, RoleScorer, SkillCategorizer, SkillCategory};
pub use feature_extraction::{FittedTfidfVectorizer, TfidfConfig, TfidfParams, TfidfVectorizer};
pub use imputation::{FittedProfileImputer, ProfileImputer, ProfileImputerParams};
pub use outliers::{IqrOutlierFilter, OutlierReport, DEFAULT_IQR_MULTIPLIER};
pub use pipeline::{
    FitReport, FittedProfilePipeline, PipelineConfig, ProfilePipeline, ProfilePipelineParams,
    TransformOutput,
};
pub use scaling::{FittedStandardScaler, StandardScaler, StandardScalerParams};
pub use text::{Lemmatizer, RuleLemmatizer, StopWords, TextNormalizer};
pub use traits::{FittedTransformer, Transformer};
