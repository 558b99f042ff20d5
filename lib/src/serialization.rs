//! Serialization of fitted parameters.
//!
//! Fitted components expose a plain-data `Params` struct (vocabularies,
//! statistics, config) that round-trips through bincode. Whole pipelines are
//! additionally wrapped in a small versioned envelope so that a blob written by
//! an incompatible build is rejected instead of being misread.

use crate::preprocessing::error::PreprocessingError;
use std::error::Error;

/// A trait for parameter representations that can be serialized to and from bytes.
///
/// Implementors should contain only plain data (e.g., `Vec<f64>`, `String`s),
/// never derived lookup structures that can be rebuilt on load.
pub trait SerializableParams: Sized {
    /// The error type returned during (de)serialization.
    type Error: Error + Send + Sync + 'static;

    /// Serialize the parameters into a byte buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error>;

    /// Deserialize the parameters from a byte buffer.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error>;
}

impl<T> SerializableParams for T
where
    T: serde::Serialize + for<'de> serde::Deserialize<'de>,
{
    type Error = bincode::Error;

    fn to_bytes(&self) -> Result<Vec<u8>, Self::Error> {
        bincode::serialize(self)
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, Self::Error> {
        bincode::deserialize(bytes)
    }
}

/// Magic header identifying a serialized profile pipeline.
pub const BLOB_MAGIC: [u8; 4] = *b"PFPL";

/// Version of the pipeline blob layout. Bump whenever the params change shape.
pub const BLOB_FORMAT_VERSION: u32 = 1;

/// Wrap serialized params in the versioned envelope.
pub fn seal<P: SerializableParams<Error = bincode::Error>>(
    params: &P,
) -> Result<Vec<u8>, PreprocessingError> {
    let body = params.to_bytes()?;
    let mut bytes = Vec::with_capacity(BLOB_MAGIC.len() + 4 + body.len());
    bytes.extend_from_slice(&BLOB_MAGIC);
    bytes.extend_from_slice(&BLOB_FORMAT_VERSION.to_le_bytes());
    bytes.extend_from_slice(&body);
    Ok(bytes)
}

/// Check the envelope and deserialize the params it carries.
pub fn open<P: SerializableParams<Error = bincode::Error>>(
    bytes: &[u8],
) -> Result<P, PreprocessingError> {
    let header_len = BLOB_MAGIC.len() + 4;
    if bytes.len() < header_len || bytes[..BLOB_MAGIC.len()] != BLOB_MAGIC {
        return Err(PreprocessingError::IncompatibleFormat(
            "missing pipeline header".to_string(),
        ));
    }

    let mut version = [0u8; 4];
    version.copy_from_slice(&bytes[BLOB_MAGIC.len()..header_len]);
    let version = u32::from_le_bytes(version);
    if version != BLOB_FORMAT_VERSION {
        return Err(PreprocessingError::IncompatibleFormat(format!(
            "blob format version {} is not supported (expected {})",
            version, BLOB_FORMAT_VERSION
        )));
    }

    Ok(P::from_bytes(&bytes[header_len..])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Sample {
        names: Vec<String>,
        weights: Vec<f64>,
    }

    fn sample() -> Sample {
        Sample {
            names: vec!["sql".to_string(), "tableau".to_string()],
            weights: vec![1.2876820724517808, 0.1],
        }
    }

    #[test]
    fn test_seal_open_preserves_bits() {
        let bytes = seal(&sample()).unwrap();
        assert_eq!(&bytes[..4], b"PFPL");

        let restored: Sample = open(&bytes).unwrap();
        assert_eq!(restored, sample());
        assert_eq!(restored.weights[0].to_bits(), sample().weights[0].to_bits());
    }

    #[test]
    fn test_open_rejects_missing_header() {
        let body = sample().to_bytes().unwrap();
        let result: Result<Sample, _> = open(&body);
        assert!(matches!(
            result,
            Err(PreprocessingError::IncompatibleFormat(_))
        ));
    }

    #[test]
    fn test_open_rejects_other_version() {
        let mut bytes = seal(&sample()).unwrap();
        bytes[4..8].copy_from_slice(&(BLOB_FORMAT_VERSION + 1).to_le_bytes());

        let result: Result<Sample, _> = open(&bytes);
        match result {
            Err(PreprocessingError::IncompatibleFormat(msg)) => assert!(msg.contains("version")),
            other => panic!("expected IncompatibleFormat, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_open_rejects_truncated_body() {
        let bytes = seal(&sample()).unwrap();
        let result: Result<Sample, _> = open(&bytes[..bytes.len() - 3]);
        assert!(matches!(result, Err(PreprocessingError::Serialization(_))));
    }
}
