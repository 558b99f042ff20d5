//! Missing-value imputation for profile records.
//!
//! Fill rules, per column:
//! - `Certification`: absent or blank becomes `"None"`.
//! - `Specialization`: absent or blank becomes `"General"`.
//! - `Degree`, `Major`, `Preferred Industry`: the fit-time mode (ties go to
//!   the lexicographically smallest value, `"Unknown"` for an empty column).
//! - `CGPA`, `Years of Experience`: the fit-time median of parseable values
//!   (`0.0` for a column with none).
//!
//! An unparseable `Years of Experience` is treated as missing. An unparseable
//! `CGPA` is kept so the CGPA policy can map it to its fallback.
//!
//! # Example
//! ```ignore
//! use profile_features::preprocessing::{ProfileImputer, Transformer, FittedTransformer};
//!
//! let fitted = ProfileImputer::new().fit(&records)?;
//! let filled = fitted.transform(&new_records)?;
//! ```

use crate::dataset::{columns, ProfileRecord, RawNumber, CATEGORICAL_COLUMNS, FEATURE_COLUMNS};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Fill value for a missing certification.
pub const NO_CERTIFICATION: &str = "None";
/// Fill value for a missing specialization.
pub const GENERAL_SPECIALIZATION: &str = "General";
/// Mode of a categorical column that had no values at all.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Median with the two middle values averaged. `0.0` when empty.
pub(crate) fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    if n % 2 == 0 {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    } else {
        sorted[n / 2]
    }
}

/// Most frequent value, ties broken by lexicographic order.
fn mode<'a>(values: impl Iterator<Item = &'a str>) -> Option<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for v in values {
        *counts.entry(v).or_insert(0) += 1;
    }
    // BTreeMap iterates in key order, so the first maximum wins ties.
    let mut best: Option<(&str, usize)> = None;
    for (value, count) in counts {
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((value, count));
        }
    }
    best.map(|(value, _)| value.to_string())
}

/// Serializable parameters for a fitted [`ProfileImputer`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileImputerParams {
    /// Fill values for the categorical columns, in `CATEGORICAL_COLUMNS` order.
    pub categorical_fills: Vec<String>,
    /// Medians for the numeric columns, in `NUMERIC_COLUMNS` order.
    pub numeric_medians: Vec<f64>,
}

/// Imputer for profile records (unfitted).
#[derive(Clone, Debug, Default)]
pub struct ProfileImputer;

impl ProfileImputer {
    pub fn new() -> Self {
        Self
    }
}

impl Transformer for ProfileImputer {
    type Input = [ProfileRecord];
    type Output = Vec<ProfileRecord>;
    type Params = ProfileImputerParams;
    type Fitted = FittedProfileImputer;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError> {
        if data.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit ProfileImputer on empty data".to_string(),
            ));
        }

        let categorical_fills = CATEGORICAL_COLUMNS
            .iter()
            .enumerate()
            .map(|(col, &name)| {
                if name == columns::SPECIALIZATION {
                    return GENERAL_SPECIALIZATION.to_string();
                }
                let present = data
                    .iter()
                    .filter_map(|r| r.categorical_values()[col])
                    .filter(|v| !v.trim().is_empty());
                mode(present).unwrap_or_else(|| UNKNOWN_CATEGORY.to_string())
            })
            .collect();

        let numeric_medians = (0..2)
            .map(|col| {
                let parsed: Vec<f64> = data
                    .iter()
                    .filter_map(|r| r.numeric_values()[col].and_then(RawNumber::as_f64))
                    .collect();
                median(&parsed)
            })
            .collect();

        let fitted = FittedProfileImputer {
            categorical_fills,
            numeric_medians,
        };
        info!(
            rows = data.len(),
            fills = ?fitted.categorical_fills,
            medians = ?fitted.numeric_medians,
            "Fitted missing-value imputer"
        );
        Ok(fitted)
    }
}

/// Fitted imputer holding the fill values learned at fit time.
#[derive(Clone, Debug, PartialEq)]
pub struct FittedProfileImputer {
    categorical_fills: Vec<String>,
    numeric_medians: Vec<f64>,
}

impl FittedProfileImputer {
    /// Fill values for the categorical columns.
    pub fn categorical_fills(&self) -> &[String] {
        &self.categorical_fills
    }

    /// Medians for CGPA and Years of Experience.
    pub fn numeric_medians(&self) -> &[f64] {
        &self.numeric_medians
    }

    /// Categorical values with blanks replaced by their fills, in
    /// `CATEGORICAL_COLUMNS` order.
    pub fn fill_categorical(&self, record: &ProfileRecord) -> Vec<String> {
        record
            .categorical_values()
            .iter()
            .zip(&self.categorical_fills)
            .map(|(value, fill)| match value {
                Some(v) if !v.trim().is_empty() => v.to_string(),
                _ => fill.clone(),
            })
            .collect()
    }

    /// Certification text, `"None"` when absent or blank.
    pub fn fill_certification(&self, record: &ProfileRecord) -> String {
        match &record.certification {
            Some(v) if !v.trim().is_empty() => v.clone(),
            _ => NO_CERTIFICATION.to_string(),
        }
    }

    /// Raw CGPA, the median when absent or blank. Unparseable text is kept.
    pub fn fill_cgpa(&self, record: &ProfileRecord) -> RawNumber {
        match &record.cgpa {
            Some(raw) if !raw.is_blank() => raw.clone(),
            _ => RawNumber::Number(self.numeric_medians[0]),
        }
    }

    /// Years of experience, the median when absent or unparseable.
    pub fn fill_years(&self, record: &ProfileRecord) -> f64 {
        let raw = record.years_of_experience.as_ref();
        if let Some(years) = raw.and_then(RawNumber::as_f64) {
            return years;
        }
        if let Some(raw) = raw.filter(|raw| !raw.is_blank()) {
            warn!(
                value = ?raw,
                median = self.numeric_medians[1],
                "Cannot parse years of experience, using median"
            );
        }
        self.numeric_medians[1]
    }

    /// Fill one record in place. Present values are left as they are.
    pub fn impute(&self, record: &mut ProfileRecord) {
        record.certification = Some(self.fill_certification(record));

        let categorical = self.fill_categorical(record);
        for (slot, value) in record.categorical_slots_mut().into_iter().zip(categorical) {
            *slot = Some(value);
        }

        let cgpa = self.fill_cgpa(record);
        record.cgpa = Some(cgpa);

        if record
            .years_of_experience
            .as_ref()
            .and_then(RawNumber::as_f64)
            .is_none()
        {
            let years = self.fill_years(record);
            record.years_of_experience = Some(RawNumber::Number(years));
        }
    }
}

impl FittedTransformer for FittedProfileImputer {
    type Input = [ProfileRecord];
    type Output = Vec<ProfileRecord>;
    type Params = ProfileImputerParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        Ok(data
            .iter()
            .map(|record| {
                let mut record = record.clone();
                self.impute(&mut record);
                record
            })
            .collect())
    }

    fn extract_params(&self) -> Self::Params {
        ProfileImputerParams {
            categorical_fills: self.categorical_fills.clone(),
            numeric_medians: self.numeric_medians.clone(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        if params.categorical_fills.len() != CATEGORICAL_COLUMNS.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: CATEGORICAL_COLUMNS.len(),
                got_features: params.categorical_fills.len(),
            });
        }
        if params.numeric_medians.len() != 2 {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: 2,
                got_features: params.numeric_medians.len(),
            });
        }
        Ok(Self {
            categorical_fills: params.categorical_fills,
            numeric_medians: params.numeric_medians,
        })
    }

    fn n_features_out(&self) -> usize {
        FEATURE_COLUMNS.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn training() -> Vec<ProfileRecord> {
        vec![
            ProfileRecord::new()
                .with_degree("B.Tech")
                .with_major("CS")
                .with_preferred_industry("Tech")
                .with_cgpa(8.0)
                .with_years_of_experience(1),
            ProfileRecord::new()
                .with_degree("MBA")
                .with_major("Finance")
                .with_specialization("Risk")
                .with_preferred_industry("Banking")
                .with_cgpa(6.0)
                .with_years_of_experience(5),
            ProfileRecord::new()
                .with_degree("MBA")
                .with_major("CS")
                .with_specialization("  ")
                .with_preferred_industry("Tech")
                .with_cgpa("bad")
                .with_years_of_experience(3),
            ProfileRecord::new()
                .with_degree("B.Tech")
                .with_major("Finance")
                .with_cgpa(9.0),
        ]
    }

    #[test]
    fn test_fit_learns_modes_and_medians() {
        let fitted = ProfileImputer::new().fit(&training()).unwrap();

        // Degree ties B.Tech/MBA 2-2, Major ties CS/Finance 2-2.
        assert_eq!(
            fitted.categorical_fills(),
            &["B.Tech", "CS", "General", "Tech"]
        );
        // CGPA median of [6, 8, 9]; "bad" is ignored.
        assert!((fitted.numeric_medians()[0] - 8.0).abs() < 1e-12);
        // Years median of [1, 3, 5].
        assert!((fitted.numeric_medians()[1] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_transform_fills_every_slot() {
        let fitted = ProfileImputer::new().fit(&training()).unwrap();
        let filled = fitted.transform(&[ProfileRecord::new()]).unwrap();
        let record = &filled[0];

        assert_eq!(record.degree.as_deref(), Some("B.Tech"));
        assert_eq!(record.specialization.as_deref(), Some("General"));
        assert_eq!(record.certification.as_deref(), Some("None"));
        assert_eq!(record.skills, None);
        assert_eq!(record.cgpa, Some(RawNumber::Number(8.0)));
        assert_eq!(record.years_of_experience, Some(RawNumber::Number(3.0)));
    }

    #[test]
    fn test_blank_strings_count_as_missing() {
        let fitted = ProfileImputer::new().fit(&training()).unwrap();
        let record = ProfileRecord::new()
            .with_certification(" ")
            .with_specialization("")
            .with_cgpa("");
        let filled = fitted.transform(&[record]).unwrap();

        assert_eq!(filled[0].certification.as_deref(), Some("None"));
        assert_eq!(filled[0].specialization.as_deref(), Some("General"));
        assert_eq!(filled[0].cgpa, Some(RawNumber::Number(8.0)));
    }

    #[test]
    fn test_unparseable_values() {
        let fitted = ProfileImputer::new().fit(&training()).unwrap();
        let record = ProfileRecord::new()
            .with_cgpa("bad")
            .with_years_of_experience("many");
        let filled = fitted.transform(&[record]).unwrap();

        assert_eq!(filled[0].cgpa, Some(RawNumber::Text("bad".to_string())));
        assert_eq!(filled[0].years_of_experience, Some(RawNumber::Number(3.0)));
    }

    #[test]
    fn test_fill_accessors_agree_with_impute() {
        let fitted = ProfileImputer::new().fit(&training()).unwrap();
        let mut records = training();
        records.push(ProfileRecord::new().with_years_of_experience("many"));
        records.push(ProfileRecord::new().with_degree(" ").with_certification("AWS"));

        for record in &records {
            let mut imputed = record.clone();
            fitted.impute(&mut imputed);

            let categorical: Vec<Option<&str>> = imputed.categorical_values().to_vec();
            let filled = fitted.fill_categorical(record);
            assert_eq!(
                categorical,
                filled.iter().map(|v| Some(v.as_str())).collect::<Vec<_>>()
            );
            assert_eq!(imputed.certification, Some(fitted.fill_certification(record)));
            assert_eq!(imputed.cgpa, Some(fitted.fill_cgpa(record)));
            assert_eq!(
                imputed.years_of_experience.as_ref().and_then(RawNumber::as_f64),
                Some(fitted.fill_years(record))
            );
        }
        assert_eq!(fitted.fill_categorical(&records[5])[0], "B.Tech");
        assert_eq!(fitted.fill_years(&records[4]), 3.0);
    }

    #[test]
    fn test_present_values_are_untouched() {
        let fitted = ProfileImputer::new().fit(&training()).unwrap();
        let filled = fitted.transform(&training()).unwrap();
        assert_eq!(filled[1].specialization.as_deref(), Some("Risk"));
        assert_eq!(filled[1].years_of_experience, Some(RawNumber::Number(5.0)));
        assert_eq!(filled[3].years_of_experience, Some(RawNumber::Number(3.0)));
    }

    #[test]
    fn test_empty_columns_use_unknown_and_zero() {
        let fitted = ProfileImputer::new().fit(&[ProfileRecord::new()]).unwrap();
        assert_eq!(fitted.categorical_fills()[0], UNKNOWN_CATEGORY);
        assert_eq!(fitted.numeric_medians(), &[0.0, 0.0]);
    }

    #[test]
    fn test_fit_empty_errors() {
        assert!(matches!(
            ProfileImputer::new().fit(&[]),
            Err(PreprocessingError::EmptyData(_))
        ));
    }

    #[test]
    fn test_params_round_trip() {
        let fitted = ProfileImputer::new().fit(&training()).unwrap();
        let restored = FittedProfileImputer::from_params(fitted.extract_params()).unwrap();
        assert_eq!(restored, fitted);

        let mut bad = fitted.extract_params();
        bad.numeric_medians.pop();
        assert!(FittedProfileImputer::from_params(bad).is_err());
    }

    #[test]
    fn test_median_even_and_odd() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(&[4.0, 1.0, 2.0, 3.0]), 2.5);
        assert_eq!(median(&[]), 0.0);
    }
}
