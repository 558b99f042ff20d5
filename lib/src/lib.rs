//! # profile-features
//!
//! A deterministic fit/transform feature pipeline that turns education and
//! career profiles into fixed-width numeric vectors for job-role
//! classification.
//!
//! ## Core Design Principles
//!
//! - **Fit once, transform many**: fitting produces an immutable
//!   [`FittedProfilePipeline`]; transforms take `&self` and never change it.
//! - **Fixed layout**: every vector has the same width and column order,
//!   whatever the input looks like.
//! - **Reproducible**: a saved pipeline reloads to bit-identical output. Stop
//!   words, lemmatizer rules and keyword tables are config, persisted with the
//!   learned state.
//!
//! ## Quick Start
//!
//! ```rust
//! use profile_features::dataset::ProfileRecord;
//! use profile_features::preprocessing::{PipelineConfig, ProfilePipeline};
//!
//! let records = vec![
//!     ProfileRecord::new()
//!         .with_degree("B.Sc")
//!         .with_major("Statistics")
//!         .with_cgpa(8.1)
//!         .with_skills("SQL, Tableau, Excel")
//!         .with_years_of_experience(2.0)
//!         .with_preferred_industry("Technology")
//!         .with_job_role("Data Analyst"),
//!     ProfileRecord::new()
//!         .with_degree("B.Tech")
//!         .with_major("Computer Science")
//!         .with_cgpa(8.4)
//!         .with_skills("Python, Machine Learning, SQL")
//!         .with_years_of_experience(2.0)
//!         .with_preferred_industry("Technology")
//!         .with_job_role("Data Scientist"),
//! ];
//!
//! let mut pipeline = ProfilePipeline::new(PipelineConfig::default());
//! pipeline.fit(&records).unwrap();
//!
//! let (features, labels) = pipeline.transform_training(&records).unwrap();
//! assert_eq!(features.nrows(), labels.len());
//! ```
//!
//! ## Module Structure
//!
//! - `dataset`: profile records and the CSV loader
//! - `preprocessing`: cleaning, encoding, vectorizing and the pipeline
//! - `serialization`: parameter serialization and the versioned blob format
//! - `classifier`: the classifier collaborator trait and role ranking

/// Profile records and CSV loading.
pub mod dataset;

/// Preprocessing components and the profile pipeline.
pub mod preprocessing;

/// Fitted-state persistence.
pub mod serialization;

/// Classifier collaborator and top-k role ranking.
pub mod classifier;

pub use classifier::{rank_roles, ProbabilisticClassifier, RankedRole};
pub use dataset::{ProfileDataset, ProfileRecord, RawNumber};
pub use preprocessing::{
    FitReport, FittedProfilePipeline, PipelineConfig, PreprocessingError, ProfilePipeline,
    TransformOutput,
};
