//! Raw profile records and the column schema they are read from.

use crate::preprocessing::error::PreprocessingError;
use serde::{Deserialize, Serialize};

/// Column names of the tabular training format, in file order.
pub mod columns {
    pub const DEGREE: &str = "Degree";
    pub const MAJOR: &str = "Major";
    pub const SPECIALIZATION: &str = "Specialization";
    pub const CGPA: &str = "CGPA";
    pub const SKILLS: &str = "Skills";
    pub const CERTIFICATION: &str = "Certification";
    pub const YEARS_OF_EXPERIENCE: &str = "Years of Experience";
    pub const PREFERRED_INDUSTRY: &str = "Preferred Industry";
    pub const JOB_ROLE: &str = "Job Role";
}

/// Feature columns every input must carry (the label is optional).
pub const FEATURE_COLUMNS: [&str; 8] = [
    columns::DEGREE,
    columns::MAJOR,
    columns::SPECIALIZATION,
    columns::CGPA,
    columns::SKILLS,
    columns::CERTIFICATION,
    columns::YEARS_OF_EXPERIENCE,
    columns::PREFERRED_INDUSTRY,
];

/// Categorical columns, in feature-vector order.
pub const CATEGORICAL_COLUMNS: [&str; 4] = [
    columns::DEGREE,
    columns::MAJOR,
    columns::SPECIALIZATION,
    columns::PREFERRED_INDUSTRY,
];

/// Numeric columns, in feature-vector order.
pub const NUMERIC_COLUMNS: [&str; 2] = [columns::CGPA, columns::YEARS_OF_EXPERIENCE];

/// A numeric field exactly as it arrived: a number, or text that may or may not parse.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl RawNumber {
    /// The finite numeric value, if there is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            RawNumber::Number(v) => Some(*v).filter(|v| v.is_finite()),
            RawNumber::Text(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        }
    }

    /// Whether this is empty text, which counts as a missing value.
    pub fn is_blank(&self) -> bool {
        matches!(self, RawNumber::Text(s) if s.trim().is_empty())
    }
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<i32> for RawNumber {
    fn from(value: i32) -> Self {
        RawNumber::Number(value as f64)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

impl From<String> for RawNumber {
    fn from(value: String) -> Self {
        RawNumber::Text(value)
    }
}

/// One education/career profile.
///
/// Every field is optional so that partially filled payloads can be imputed.
/// The serde names match the tabular column names, so a JSON object keyed by
/// `"Degree"`, `"Years of Experience"`, ... deserializes directly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    #[serde(rename = "Degree", default)]
    pub degree: Option<String>,
    #[serde(rename = "Major", default)]
    pub major: Option<String>,
    #[serde(rename = "Specialization", default)]
    pub specialization: Option<String>,
    #[serde(rename = "CGPA", default)]
    pub cgpa: Option<RawNumber>,
    #[serde(rename = "Skills", default)]
    pub skills: Option<String>,
    #[serde(rename = "Certification", default)]
    pub certification: Option<String>,
    #[serde(rename = "Years of Experience", default)]
    pub years_of_experience: Option<RawNumber>,
    #[serde(rename = "Preferred Industry", default)]
    pub preferred_industry: Option<String>,
    #[serde(rename = "Job Role", default)]
    pub job_role: Option<String>,
}

impl ProfileRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON object payload.
    ///
    /// Every feature column must be present as a key (its value may be `null`);
    /// absent keys are reported together in [`PreprocessingError::MissingColumns`].
    pub fn from_json(value: &serde_json::Value) -> Result<Self, PreprocessingError> {
        let object = value.as_object().ok_or_else(|| {
            PreprocessingError::InvalidParameter("profile payload must be a JSON object".into())
        })?;

        let missing: Vec<String> = FEATURE_COLUMNS
            .iter()
            .filter(|col| !object.contains_key(**col))
            .map(|col| col.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(PreprocessingError::MissingColumns(missing));
        }

        Ok(serde_json::from_value(value.clone())?)
    }

    pub fn with_degree(mut self, degree: impl Into<String>) -> Self {
        self.degree = Some(degree.into());
        self
    }

    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    pub fn with_specialization(mut self, specialization: impl Into<String>) -> Self {
        self.specialization = Some(specialization.into());
        self
    }

    pub fn with_cgpa(mut self, cgpa: impl Into<RawNumber>) -> Self {
        self.cgpa = Some(cgpa.into());
        self
    }

    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = Some(skills.into());
        self
    }

    pub fn with_certification(mut self, certification: impl Into<String>) -> Self {
        self.certification = Some(certification.into());
        self
    }

    pub fn with_years_of_experience(mut self, years: impl Into<RawNumber>) -> Self {
        self.years_of_experience = Some(years.into());
        self
    }

    pub fn with_preferred_industry(mut self, industry: impl Into<String>) -> Self {
        self.preferred_industry = Some(industry.into());
        self
    }

    pub fn with_job_role(mut self, role: impl Into<String>) -> Self {
        self.job_role = Some(role.into());
        self
    }

    /// Categorical values in [`CATEGORICAL_COLUMNS`] order.
    pub fn categorical_values(&self) -> [Option<&str>; 4] {
        [
            self.degree.as_deref(),
            self.major.as_deref(),
            self.specialization.as_deref(),
            self.preferred_industry.as_deref(),
        ]
    }

    /// Mutable categorical slots in [`CATEGORICAL_COLUMNS`] order.
    pub(crate) fn categorical_slots_mut(&mut self) -> [&mut Option<String>; 4] {
        [
            &mut self.degree,
            &mut self.major,
            &mut self.specialization,
            &mut self.preferred_industry,
        ]
    }

    /// Numeric values in [`NUMERIC_COLUMNS`] order.
    pub fn numeric_values(&self) -> [Option<&RawNumber>; 2] {
        [self.cgpa.as_ref(), self.years_of_experience.as_ref()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_number_parsing() {
        assert_eq!(RawNumber::from(8.5).as_f64(), Some(8.5));
        assert_eq!(RawNumber::from(" 92 ").as_f64(), Some(92.0));
        assert_eq!(RawNumber::from("bad").as_f64(), None);
        assert_eq!(RawNumber::from(f64::NAN).as_f64(), None);
        assert!(RawNumber::from("  ").is_blank());
        assert!(!RawNumber::from(0.0).is_blank());
    }

    #[test]
    fn test_from_json_accepts_full_payload() {
        let payload = json!({
            "Degree": "B.Tech",
            "Major": "Computer Science",
            "Specialization": null,
            "CGPA": "85",
            "Skills": "SQL, Tableau",
            "Certification": "",
            "Years of Experience": 3,
            "Preferred Industry": "Tech"
        });

        let record = ProfileRecord::from_json(&payload).unwrap();
        assert_eq!(record.degree.as_deref(), Some("B.Tech"));
        assert_eq!(record.specialization, None);
        assert_eq!(record.cgpa, Some(RawNumber::Text("85".to_string())));
        assert_eq!(record.years_of_experience, Some(RawNumber::Number(3.0)));
        assert_eq!(record.job_role, None);
    }

    #[test]
    fn test_from_json_reports_every_missing_column() {
        let payload = json!({
            "Degree": "B.Tech",
            "Major": "Computer Science",
            "Specialization": "AI",
            "Skills": "Python",
            "Certification": null,
            "Preferred Industry": "Tech"
        });

        match ProfileRecord::from_json(&payload) {
            Err(PreprocessingError::MissingColumns(cols)) => {
                assert_eq!(cols, vec!["CGPA", "Years of Experience"]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let result = ProfileRecord::from_json(&json!(["B.Tech"]));
        assert!(matches!(
            result,
            Err(PreprocessingError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_builder_fills_slots_in_column_order() {
        let record = ProfileRecord::new()
            .with_degree("MBA")
            .with_major("Finance")
            .with_specialization("Risk")
            .with_preferred_industry("Banking")
            .with_cgpa(3.6)
            .with_years_of_experience(4);

        assert_eq!(
            record.categorical_values(),
            [Some("MBA"), Some("Finance"), Some("Risk"), Some("Banking")]
        );
        assert_eq!(record.numeric_values()[1].and_then(RawNumber::as_f64), Some(4.0));
    }
}
