//! CSV loading for profile datasets.

use super::record::{columns, ProfileRecord, RawNumber, FEATURE_COLUMNS};
use crate::preprocessing::error::PreprocessingError;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{info, warn};

/// A data row that could not be read. `row` is the zero-based data row index
/// (the header line is not counted).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RowError {
    pub row: usize,
    pub message: String,
}

/// Sorted unique values observed in a dataset, for populating input forms.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetOptions {
    pub degrees: Vec<String>,
    pub majors: Vec<String>,
    pub specializations: Vec<String>,
    pub preferred_industries: Vec<String>,
    /// Individual skills, split on commas.
    pub skills: Vec<String>,
    /// Individual certifications, split on commas.
    pub certifications: Vec<String>,
}

/// Profiles read from a tabular source.
///
/// Malformed rows never abort a load; they are collected in [`rejected`](Self::rejected).
#[derive(Clone, Debug, Default)]
pub struct ProfileDataset {
    records: Vec<ProfileRecord>,
    rejected: Vec<RowError>,
    has_labels: bool,
}

/// Resolved header positions.
struct ColumnIndex {
    features: [usize; 8],
    label: Option<usize>,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, PreprocessingError> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let mut features = [0usize; 8];
        let mut missing = Vec::new();
        for (slot, name) in features.iter_mut().zip(FEATURE_COLUMNS) {
            match position(name) {
                Some(idx) => *slot = idx,
                None => missing.push(name.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(PreprocessingError::MissingColumns(missing));
        }

        Ok(Self {
            features,
            label: position(columns::JOB_ROLE),
        })
    }
}

fn text_cell(record: &StringRecord, idx: usize) -> Option<String> {
    record
        .get(idx)
        .filter(|cell| !cell.trim().is_empty())
        .map(str::to_string)
}

fn numeric_cell(record: &StringRecord, idx: usize) -> Option<RawNumber> {
    let cell = record.get(idx)?.trim();
    if cell.is_empty() {
        return None;
    }
    Some(match cell.parse::<f64>() {
        Ok(v) => RawNumber::Number(v),
        Err(_) => RawNumber::Text(cell.to_string()),
    })
}

impl ProfileDataset {
    /// Wrap records that were built in memory.
    pub fn from_records(records: Vec<ProfileRecord>) -> Self {
        let has_labels = !records.is_empty() && records.iter().all(|r| r.job_role.is_some());
        Self {
            records,
            rejected: Vec::new(),
            has_labels,
        }
    }

    /// Load a dataset from a CSV file with a header row.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, PreprocessingError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Load a dataset from any CSV source with a header row.
    ///
    /// # Errors
    /// [`PreprocessingError::MissingColumns`] if any feature column is absent
    /// from the header. Row-level problems are reported through
    /// [`rejected`](Self::rejected) instead.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, PreprocessingError> {
        let mut rdr = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);
        let index = ColumnIndex::resolve(rdr.headers()?)?;

        let mut records = Vec::new();
        let mut rejected = Vec::new();

        for (row, result) in rdr.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    warn!(row, error = %e, "Skipping unreadable row");
                    rejected.push(RowError {
                        row,
                        message: e.to_string(),
                    });
                    continue;
                }
            };

            let [degree, major, specialization, cgpa, skills, certification, years, industry] =
                index.features;
            records.push(ProfileRecord {
                degree: text_cell(&record, degree),
                major: text_cell(&record, major),
                specialization: text_cell(&record, specialization),
                cgpa: numeric_cell(&record, cgpa),
                skills: text_cell(&record, skills),
                certification: text_cell(&record, certification),
                years_of_experience: numeric_cell(&record, years),
                preferred_industry: text_cell(&record, industry),
                job_role: index.label.and_then(|idx| text_cell(&record, idx)),
            });
        }

        let has_labels = index.label.is_some();
        info!(
            rows = records.len(),
            rejected = rejected.len(),
            has_labels,
            "Loaded profile dataset"
        );

        Ok(Self {
            records,
            rejected,
            has_labels,
        })
    }

    /// The successfully read records.
    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }

    /// Consume the dataset, returning its records.
    pub fn into_records(self) -> Vec<ProfileRecord> {
        self.records
    }

    /// Rows that could not be read.
    pub fn rejected(&self) -> &[RowError] {
        &self.rejected
    }

    /// Whether the source carried a label column.
    pub fn has_labels(&self) -> bool {
        self.has_labels
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collect the distinct values of every categorical and list-valued column.
    pub fn options(&self) -> DatasetOptions {
        fn unique<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
            values
                .flatten()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect()
        }

        let split = |field: fn(&ProfileRecord) -> Option<&str>| {
            unique(
                self.records
                    .iter()
                    .filter_map(field)
                    .flat_map(|list| list.split(','))
                    .map(Some),
            )
        };

        DatasetOptions {
            degrees: unique(self.records.iter().map(|r| r.degree.as_deref())),
            majors: unique(self.records.iter().map(|r| r.major.as_deref())),
            specializations: unique(self.records.iter().map(|r| r.specialization.as_deref())),
            preferred_industries: unique(
                self.records.iter().map(|r| r.preferred_industry.as_deref()),
            ),
            skills: split(|r| r.skills.as_deref()),
            certifications: split(|r| r.certification.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
Degree,Major,Specialization,CGPA,Skills,Certification,Years of Experience,Preferred Industry,Job Role
B.Tech,Computer Science,Data Analytics,8.0,\"Python, SQL\",,2,Tech,Data Analyst
MBA,Finance,,3.4,\"Excel, Budgeting\",CFA,5,Banking,Financial Analyst
B.Sc,Design,UX,n/a,\"Figma, Sketch\",\"Google UX, Adobe\",,Media,UI/UX Designer
";

    #[test]
    fn test_load_reads_every_column() {
        let dataset = ProfileDataset::from_reader(CSV.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert!(dataset.has_labels());
        assert!(dataset.rejected().is_empty());

        let first = &dataset.records()[0];
        assert_eq!(first.skills.as_deref(), Some("Python, SQL"));
        assert_eq!(first.certification, None);
        assert_eq!(first.cgpa, Some(RawNumber::Number(8.0)));
        assert_eq!(first.job_role.as_deref(), Some("Data Analyst"));

        let second = &dataset.records()[1];
        assert_eq!(second.specialization, None);

        let third = &dataset.records()[2];
        assert_eq!(third.cgpa, Some(RawNumber::Text("n/a".to_string())));
        assert_eq!(third.years_of_experience, None);
    }

    #[test]
    fn test_load_without_label_column() {
        let csv = "Degree,Major,Specialization,CGPA,Skills,Certification,Years of Experience,Preferred Industry\n\
                   B.Tech,CS,AI,9.1,Python,,1,Tech\n";
        let dataset = ProfileDataset::from_reader(csv.as_bytes()).unwrap();
        assert!(!dataset.has_labels());
        assert_eq!(dataset.records()[0].job_role, None);
    }

    #[test]
    fn test_load_reports_missing_columns() {
        let csv = "Degree,Major,Skills,Certification,Preferred Industry\nB.Tech,CS,Python,,Tech\n";
        match ProfileDataset::from_reader(csv.as_bytes()) {
            Err(PreprocessingError::MissingColumns(cols)) => {
                assert_eq!(cols, vec!["Specialization", "CGPA", "Years of Experience"]);
            }
            other => panic!("expected MissingColumns, got {:?}", other.map(|d| d.len())),
        }
    }

    #[test]
    fn test_load_rejects_ragged_rows_individually() {
        let csv = "Degree,Major,Specialization,CGPA,Skills,Certification,Years of Experience,Preferred Industry\n\
                   B.Tech,CS,AI,9.1,Python,,1,Tech\n\
                   B.Tech,CS\n\
                   M.Tech,CS,ML,8.2,Rust,,3,Tech\n";
        let dataset = ProfileDataset::from_reader(csv.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.rejected().len(), 1);
        assert_eq!(dataset.rejected()[0].row, 1);
    }

    #[test]
    fn test_options_are_sorted_and_split() {
        let dataset = ProfileDataset::from_reader(CSV.as_bytes()).unwrap();
        let options = dataset.options();

        assert_eq!(options.degrees, vec!["B.Sc", "B.Tech", "MBA"]);
        assert_eq!(options.specializations, vec!["Data Analytics", "UX"]);
        assert_eq!(
            options.skills,
            vec!["Budgeting", "Excel", "Figma", "Python", "SQL", "Sketch"]
        );
        assert_eq!(options.certifications, vec!["Adobe", "CFA", "Google UX"]);
    }
}
