//! Profile records and the tabular sources they are read from.
//!
//! # Core Concepts
//!
//! - **ProfileRecord**: one raw profile. Every field is optional; the
//!   pipeline imputes what is missing.
//! - **RawNumber**: a numeric field kept exactly as received, so that an
//!   unparseable CGPA reaches the CGPA policy instead of failing at load.
//! - **ProfileDataset**: records read from CSV, with schema validation and
//!   per-row rejects.
//!
//! # Example
//!
//! ```no_run
//! use profile_features::dataset::ProfileDataset;
//!
//! let dataset = ProfileDataset::from_csv_path("JobRole.csv").unwrap();
//! for reject in dataset.rejected() {
//!     eprintln!("row {}: {}", reject.row, reject.message);
//! }
//! let records = dataset.into_records();
//! ```

mod loader;
mod record;

pub use loader::{DatasetOptions, ProfileDataset, RowError};
pub use record::{
    columns, ProfileRecord, RawNumber, CATEGORICAL_COLUMNS, FEATURE_COLUMNS, NUMERIC_COLUMNS,
};
