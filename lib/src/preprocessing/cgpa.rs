//! CGPA normalization onto a 10-point scale.
//!
//! Grades arrive on three scales and are told apart by magnitude alone:
//!
//! | raw value        | treated as        | result                      |
//! |------------------|-------------------|-----------------------------|
//! | `0 < v <= 4.5`   | 4-point GPA       | `round(v / 4 * 10, 2)`      |
//! | `4.5 < v <= 10`  | 10-point CGPA     | `round(v, 2)`               |
//! | `v > 10`         | percentage        | `min(round(v / 10, 2), 10)` |
//! | anything else    | invalid           | fallback (7.5)              |
//!
//! The table is a fixed policy. Values that do not parse also get the fallback.

use crate::dataset::RawNumber;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default grade for unusable input.
pub const DEFAULT_CGPA_FALLBACK: f64 = 7.5;

/// Maps raw CGPA values onto the 10-point scale.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CgpaNormalizer {
    fallback: f64,
}

impl Default for CgpaNormalizer {
    fn default() -> Self {
        Self::new(DEFAULT_CGPA_FALLBACK)
    }
}

/// Round to two decimals. Exact binary ties go to the even neighbour, so
/// `8.625` becomes `8.62`.
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

impl CgpaNormalizer {
    pub fn new(fallback: f64) -> Self {
        Self { fallback }
    }

    pub fn fallback(&self) -> f64 {
        self.fallback
    }

    /// Normalize a numeric grade.
    pub fn normalize_value(&self, value: f64) -> f64 {
        if value > 0.0 && value <= 4.5 {
            round2(value / 4.0 * 10.0)
        } else if value > 4.5 && value <= 10.0 {
            round2(value)
        } else if value > 10.0 {
            round2(value / 10.0).min(10.0)
        } else {
            warn!(cgpa = value, fallback = self.fallback, "Invalid CGPA, using fallback");
            self.fallback
        }
    }

    /// Normalize a raw field. Absent or unparseable input yields the fallback.
    pub fn normalize(&self, raw: Option<&RawNumber>) -> f64 {
        match raw.and_then(RawNumber::as_f64) {
            Some(value) => self.normalize_value(value),
            None => {
                warn!(cgpa = ?raw, fallback = self.fallback, "Cannot parse CGPA, using fallback");
                self.fallback
            }
        }
    }
}
