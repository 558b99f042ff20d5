//! The end-to-end profile pipeline.
//!
//! [`ProfilePipeline`] owns a [`PipelineConfig`] and, once fitted, an
//! immutable [`FittedProfilePipeline`] that turns [`ProfileRecord`]s into
//! fixed-width feature vectors.
//!
//! # Example
//!
//! ```ignore
//! use profile_features::dataset::ProfileDataset;
//! use profile_features::preprocessing::{PipelineConfig, ProfilePipeline};
//!
//! let records = ProfileDataset::from_csv_path("JobRole.csv")?.into_records();
//!
//! let mut pipeline = ProfilePipeline::new(PipelineConfig::default());
//! let report = pipeline.fit(&records)?;
//! let (features, labels) = pipeline.transform_training(&records)?;
//!
//! pipeline.save_to_file("pipeline.bin")?;
//! let loaded = ProfilePipeline::load_from_file("pipeline.bin")?;
//! ```
//!
//! [`ProfileRecord`]: crate::dataset::ProfileRecord

mod config;
#[allow(clippy::module_inception)]
mod pipeline;

pub use config::PipelineConfig;
pub use pipeline::{
    FitReport, FittedProfilePipeline, ProfilePipeline, ProfilePipelineParams, TransformOutput,
};
