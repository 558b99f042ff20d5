//! Error types for preprocessing operations.

use thiserror::Error;

/// Error type for preprocessing operations.
///
/// Non-fatal conditions (an unparseable CGPA, an empty TF-IDF vocabulary) are
/// logged as warnings and never surface here.
#[derive(Debug, Error)]
pub enum PreprocessingError {
    /// The pipeline (or one of its components) was used before `fit`.
    #[error("Not fitted: {0}")]
    NotFitted(String),
    /// `fit` was called on a pipeline that already holds fitted state.
    #[error("Pipeline is already fitted; build a new pipeline to refit")]
    AlreadyFitted,
    /// Required columns are absent from the input schema.
    #[error("Missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    /// Empty data provided where non-empty was required.
    #[error("Empty data: {0}")]
    EmptyData(String),
    /// A categorical value outside the fitted vocabulary under the `Reject` policy.
    #[error("Unknown category '{value}' in column '{column}'")]
    UnknownCategory { column: String, value: String },
    /// A target label that was not seen at fit time.
    #[error("Unknown label: '{0}'")]
    UnknownLabel(String),
    /// Labels were supplied for a training transform but none were fitted.
    #[error("Labels present but no label vocabulary was fitted")]
    LabelsNotFitted,
    /// Feature dimension mismatch.
    #[error("Feature mismatch: expected {expected_features} features, got {got_features}")]
    FeatureMismatch {
        expected_features: usize,
        got_features: usize,
    },
    /// Invalid hyperparameter value.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// A persisted blob with the wrong magic header or format version.
    #[error("Incompatible format: {0}")]
    IncompatibleFormat(String),
    /// A failure attributed to a single row of a batch.
    #[error("Row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: Box<PreprocessingError>,
    },
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Binary (de)serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),
    /// Malformed CSV input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Malformed JSON configuration or payload.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl PreprocessingError {
    /// Attach a row index to this error.
    pub fn at_row(self, row: usize) -> Self {
        PreprocessingError::Row {
            row,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_not_fitted() {
        let err = PreprocessingError::NotFitted("transform".to_string());
        assert!(err.to_string().contains("Not fitted"));
    }

    #[test]
    fn test_error_display_missing_columns_lists_names() {
        let err = PreprocessingError::MissingColumns(vec!["CGPA".into(), "Skills".into()]);
        assert_eq!(err.to_string(), "Missing required columns: CGPA, Skills");
    }

    #[test]
    fn test_error_display_unknown_category() {
        let err = PreprocessingError::UnknownCategory {
            column: "Degree".to_string(),
            value: "PhD".to_string(),
        };
        assert!(err.to_string().contains("'PhD'"));
        assert!(err.to_string().contains("'Degree'"));
    }

    #[test]
    fn test_error_display_feature_mismatch() {
        let err = PreprocessingError::FeatureMismatch {
            expected_features: 5,
            got_features: 3,
        };
        assert!(err.to_string().contains("Feature mismatch"));
    }

    #[test]
    fn test_error_at_row_wraps_source() {
        let err = PreprocessingError::UnknownLabel("Astronaut".to_string()).at_row(7);
        assert!(err.to_string().starts_with("Row 7:"));
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(source.as_deref(), Some("Unknown label: 'Astronaut'"));
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let err: PreprocessingError = io_err.into();
        assert!(matches!(err, PreprocessingError::Io(_)));
    }

    #[test]
    fn test_error_from_bincode_error() {
        // Create a bincode error by trying to deserialize invalid data
        let bad_bytes: &[u8] = &[0xff, 0xff, 0xff, 0xff];
        let bincode_result: Result<String, bincode::Error> = bincode::deserialize(bad_bytes);
        if let Err(e) = bincode_result {
            let err: PreprocessingError = e.into();
            assert!(matches!(err, PreprocessingError::Serialization(_)));
        }
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PreprocessingError = json_err.into();
        assert!(matches!(err, PreprocessingError::Config(_)));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = PreprocessingError::InvalidParameter("test".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
