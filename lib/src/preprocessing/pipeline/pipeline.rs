//! The profile feature pipeline.

use super::config::PipelineConfig;
use crate::dataset::{columns, ProfileRecord, CATEGORICAL_COLUMNS, NUMERIC_COLUMNS};
use crate::preprocessing::cgpa::CgpaNormalizer;
use crate::preprocessing::encoding::{
    CategoricalEncoder, CategoricalEncoderParams, FittedCategoricalEncoder, FittedLabelEncoder,
    LabelEncoder, LabelEncoderParams,
};
use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::feature_engineering::{RoleScorer, SkillCategorizer};
use crate::preprocessing::feature_extraction::{FittedTfidfVectorizer, TfidfParams, TfidfVectorizer};
use crate::preprocessing::imputation::{FittedProfileImputer, ProfileImputer, ProfileImputerParams};
use crate::preprocessing::outliers::{IqrOutlierFilter, OutlierReport};
use crate::preprocessing::scaling::{FittedStandardScaler, StandardScaler, StandardScalerParams};
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use crate::serialization;
use ndarray::{s, Array1, Array2, ArrayViewMut1};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A record after imputation, CGPA normalization and text cleaning.
#[derive(Clone, Debug)]
struct PreparedProfile {
    categorical: Vec<String>,
    numeric: [f64; 2],
    skills: String,
    certification: String,
    label: Option<String>,
}

/// Summary of a `fit` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FitReport {
    /// Rows handed to `fit`.
    pub input_rows: usize,
    /// Outlier removal on the fit corpus.
    pub outliers: OutlierReport,
    /// Rows the components were fitted on.
    pub fitted_rows: usize,
    /// Width of the feature vector.
    pub n_features: usize,
    pub skills_vocabulary: usize,
    pub certification_vocabulary: usize,
    /// Number of job roles, when the corpus was labelled.
    pub n_classes: Option<usize>,
}

/// Output of [`FittedProfilePipeline::transform`].
#[derive(Clone, Debug, PartialEq)]
pub enum TransformOutput {
    /// Feature matrix only.
    Features(Array2<f64>),
    /// Feature matrix with encoded job-role labels, one per row.
    Training {
        features: Array2<f64>,
        labels: Array1<usize>,
    },
}

impl TransformOutput {
    pub fn features(&self) -> &Array2<f64> {
        match self {
            TransformOutput::Features(features) => features,
            TransformOutput::Training { features, .. } => features,
        }
    }

    pub fn labels(&self) -> Option<&Array1<usize>> {
        match self {
            TransformOutput::Features(_) => None,
            TransformOutput::Training { labels, .. } => Some(labels),
        }
    }
}

/// Serializable parameters for a fitted pipeline: the config plus every
/// component's learned state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfilePipelineParams {
    pub config: PipelineConfig,
    pub imputer: ProfileImputerParams,
    pub encoder: CategoricalEncoderParams,
    pub skills: TfidfParams,
    pub certification: TfidfParams,
    pub scaler: StandardScalerParams,
    pub labels: Option<LabelEncoderParams>,
}

/// A fitted pipeline.
///
/// Immutable once built: every method takes `&self`, so one instance can be
/// shared across threads behind an `Arc`.
///
/// Feature layout, in order:
/// 1. categorical codes (Degree, Major, Specialization, Preferred Industry)
/// 2. scaled numerics (CGPA, Years of Experience)
/// 3. skills TF-IDF (`skill_0..`)
/// 4. certification TF-IDF (`cert_0..`)
/// 5. skill-category counts
/// 6. role scores
#[derive(Clone, Debug)]
pub struct FittedProfilePipeline {
    config: PipelineConfig,
    cgpa: CgpaNormalizer,
    outliers: IqrOutlierFilter,
    imputer: FittedProfileImputer,
    encoder: FittedCategoricalEncoder,
    skills: FittedTfidfVectorizer,
    certification: FittedTfidfVectorizer,
    scaler: FittedStandardScaler,
    categorizer: SkillCategorizer,
    roles: RoleScorer,
    labels: Option<FittedLabelEncoder>,
}

fn numeric_matrix(rows: &[PreparedProfile]) -> Array2<f64> {
    let mut matrix = Array2::zeros((rows.len(), NUMERIC_COLUMNS.len()));
    for (mut out, row) in matrix.rows_mut().into_iter().zip(rows) {
        out[0] = row.numeric[0];
        out[1] = row.numeric[1];
    }
    matrix
}

/// Impute, normalize CGPA and clean text for one record.
fn prepare(
    record: &ProfileRecord,
    imputer: &FittedProfileImputer,
    cgpa: &CgpaNormalizer,
    config: &PipelineConfig,
) -> PreparedProfile {
    let raw_cgpa = imputer.fill_cgpa(record);
    let certification = imputer.fill_certification(record);

    PreparedProfile {
        categorical: imputer.fill_categorical(record),
        numeric: [cgpa.normalize(Some(&raw_cgpa)), imputer.fill_years(record)],
        skills: config.normalizer.clean(record.skills.as_deref()),
        certification: config.normalizer.clean(Some(&certification)),
        label: record.job_role.clone(),
    }
}

impl FittedProfilePipeline {
    /// Fit every component on `records`.
    ///
    /// Steps: impute, normalize CGPA, drop outliers, clean text, then fit
    /// the categorical encoder, both TF-IDF vectorizers and the scaler, and
    /// the label vocabulary when every remaining row is labelled.
    ///
    /// # Errors
    /// [`PreprocessingError::EmptyData`] for an empty corpus or when outlier
    /// removal leaves nothing; [`PreprocessingError::InvalidParameter`] for a
    /// bad config.
    pub fn fit(
        config: PipelineConfig,
        records: &[ProfileRecord],
    ) -> Result<(Self, FitReport), PreprocessingError> {
        config.validate()?;
        if records.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit pipeline on an empty dataset".to_string(),
            ));
        }
        info!(rows = records.len(), "Fitting profile pipeline");

        let cgpa = CgpaNormalizer::new(config.cgpa_fallback);
        let outliers = IqrOutlierFilter::new(config.outlier_iqr_multiplier)?;
        let imputer = ProfileImputer::new().fit(records)?;

        let prepared: Vec<PreparedProfile> = records
            .iter()
            .map(|r| prepare(r, &imputer, &cgpa, &config))
            .collect();
        let numeric = numeric_matrix(&prepared);
        let (prepared, outlier_report) = outliers.filter(prepared, numeric.view())?;
        if prepared.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "No rows left after outlier removal".to_string(),
            ));
        }

        let categorical: Vec<Vec<String>> =
            prepared.iter().map(|p| p.categorical.clone()).collect();
        let encoder = CategoricalEncoder::new(CATEGORICAL_COLUMNS)
            .with_unseen_policy(config.unseen_category)
            .fit(&categorical)?;

        let skills_docs: Vec<String> = prepared.iter().map(|p| p.skills.clone()).collect();
        let skills = TfidfVectorizer::new(config.skills_tfidf.clone()).fit(&skills_docs)?;
        let cert_docs: Vec<String> = prepared.iter().map(|p| p.certification.clone()).collect();
        let certification =
            TfidfVectorizer::new(config.certification_tfidf.clone()).fit(&cert_docs)?;

        let scaler = StandardScaler::new().fit(&numeric_matrix(&prepared))?;

        let labelled = prepared.iter().filter(|p| p.label.is_some()).count();
        let labels = if labelled == prepared.len() {
            Some(LabelEncoder::new().fit(prepared.iter().filter_map(|p| p.label.as_deref()))?)
        } else {
            if labelled > 0 {
                warn!(
                    labelled,
                    rows = prepared.len(),
                    "Some rows lack a job role; no label vocabulary fitted"
                );
            }
            None
        };

        let fitted = Self {
            categorizer: SkillCategorizer::new(config.keyword_tables.skill_categories.clone()),
            roles: RoleScorer::new(config.keyword_tables.roles.clone()),
            config,
            cgpa,
            outliers,
            imputer,
            encoder,
            skills,
            certification,
            scaler,
            labels,
        };

        let report = FitReport {
            input_rows: records.len(),
            fitted_rows: prepared.len(),
            outliers: outlier_report,
            n_features: fitted.n_features(),
            skills_vocabulary: fitted.skills.vocabulary().len(),
            certification_vocabulary: fitted.certification.vocabulary().len(),
            n_classes: fitted.labels.as_ref().map(FittedLabelEncoder::n_classes),
        };
        info!(
            fitted_rows = report.fitted_rows,
            features = report.n_features,
            classes = ?report.n_classes,
            "Profile pipeline fitted"
        );
        Ok((fitted, report))
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The job-role vocabulary, if the fit corpus was labelled.
    pub fn label_encoder(&self) -> Option<&FittedLabelEncoder> {
        self.labels.as_ref()
    }

    pub fn categorical_encoder(&self) -> &FittedCategoricalEncoder {
        &self.encoder
    }

    pub fn imputer(&self) -> &FittedProfileImputer {
        &self.imputer
    }

    pub fn skills_vectorizer(&self) -> &FittedTfidfVectorizer {
        &self.skills
    }

    pub fn certification_vectorizer(&self) -> &FittedTfidfVectorizer {
        &self.certification
    }

    pub fn scaler(&self) -> &FittedStandardScaler {
        &self.scaler
    }

    /// Width of every feature vector this pipeline produces.
    pub fn n_features(&self) -> usize {
        CATEGORICAL_COLUMNS.len()
            + NUMERIC_COLUMNS.len()
            + self.skills.n_features_out()
            + self.certification.n_features_out()
            + self.categorizer.n_features()
            + self.roles.n_features()
    }

    /// Feature names, in the same order as the feature vector.
    pub fn feature_names(&self) -> Vec<String> {
        let mut names: Vec<String> = CATEGORICAL_COLUMNS
            .iter()
            .chain(NUMERIC_COLUMNS.iter())
            .map(|c| c.to_string())
            .collect();
        names.extend((0..self.skills.n_features_out()).map(|i| format!("skill_{}", i)));
        names.extend((0..self.certification.n_features_out()).map(|i| format!("cert_{}", i)));
        names.extend(self.categorizer.feature_names());
        names.extend(self.roles.feature_names());
        names
    }

    fn prepare(&self, record: &ProfileRecord) -> PreparedProfile {
        prepare(record, &self.imputer, &self.cgpa, &self.config)
    }

    /// Assemble the feature vector of one prepared row into `out`.
    fn features_into(
        &self,
        row: &PreparedProfile,
        mut out: ArrayViewMut1<f64>,
    ) -> Result<(), PreprocessingError> {
        let n_cat = CATEGORICAL_COLUMNS.len();
        let n_num = NUMERIC_COLUMNS.len();
        let n_skills = self.skills.n_features_out();
        let n_cert = self.certification.n_features_out();
        let n_categories = self.categorizer.n_features();

        let codes = self.encoder.encode_row(&row.categorical)?;
        for (slot, code) in out.slice_mut(s![..n_cat]).iter_mut().zip(codes) {
            *slot = code;
        }

        let mut offset = n_cat;
        {
            let mut numeric = out.slice_mut(s![offset..offset + n_num]);
            numeric[0] = row.numeric[0];
            numeric[1] = row.numeric[1];
            self.scaler.scale_row(numeric)?;
        }
        offset += n_num;

        self.skills
            .vectorize_into(&row.skills, out.slice_mut(s![offset..offset + n_skills]));
        offset += n_skills;

        self.certification
            .vectorize_into(&row.certification, out.slice_mut(s![offset..offset + n_cert]));
        offset += n_cert;

        self.categorizer
            .count_into(&row.skills, out.slice_mut(s![offset..offset + n_categories]));
        offset += n_categories;

        self.roles
            .score_into(&row.skills, &row.certification, out.slice_mut(s![offset..]));
        Ok(())
    }

    /// Build the feature matrix; `index` maps each row back to its input position.
    fn assemble(
        &self,
        rows: &[PreparedProfile],
        index: &[usize],
    ) -> Result<Array2<f64>, PreprocessingError> {
        let mut features = Array2::zeros((rows.len(), self.n_features()));
        for ((out, row), &original) in features.rows_mut().into_iter().zip(rows).zip(index) {
            self.features_into(row, out)
                .map_err(|e| e.at_row(original))?;
        }
        Ok(features)
    }

    /// Transform a batch.
    ///
    /// With `is_training`, outliers are removed from the batch first (so the
    /// output can have fewer rows than the input) and, if any record carries
    /// a job role, labels are encoded and returned alongside the features.
    ///
    /// # Errors
    /// - [`PreprocessingError::UnknownCategory`] under the `Reject` policy.
    /// - [`PreprocessingError::LabelsNotFitted`] for labelled training input
    ///   when the fit corpus had no label vocabulary.
    /// - [`PreprocessingError::UnknownLabel`] for a role not seen at fit time.
    ///
    /// Row-specific failures are wrapped in [`PreprocessingError::Row`] with
    /// the input position.
    pub fn transform(
        &self,
        records: &[ProfileRecord],
        is_training: bool,
    ) -> Result<TransformOutput, PreprocessingError> {
        let prepared: Vec<PreparedProfile> = records.iter().map(|r| self.prepare(r)).collect();
        let numeric = numeric_matrix(&prepared);
        let indexed: Vec<(usize, PreparedProfile)> = prepared.into_iter().enumerate().collect();

        let indexed = if is_training {
            self.outliers.filter(indexed, numeric.view())?.0
        } else {
            indexed
        };
        let (index, rows): (Vec<usize>, Vec<PreparedProfile>) = indexed.into_iter().unzip();

        let features = self.assemble(&rows, &index)?;
        debug!(
            rows = features.nrows(),
            features = features.ncols(),
            is_training,
            "Transformed profiles"
        );

        if !is_training || rows.iter().all(|r| r.label.is_none()) {
            return Ok(TransformOutput::Features(features));
        }

        let encoder = self
            .labels
            .as_ref()
            .ok_or(PreprocessingError::LabelsNotFitted)?;
        let labels = rows
            .iter()
            .zip(&index)
            .map(|(row, &original)| match row.label.as_deref() {
                Some(label) => encoder.encode(label).map_err(|e| e.at_row(original)),
                None => Err(PreprocessingError::MissingColumns(vec![
                    columns::JOB_ROLE.to_string(),
                ])
                .at_row(original)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TransformOutput::Training {
            features,
            labels: Array1::from(labels),
        })
    }

    /// Features for inference. Every input row yields one output row.
    pub fn transform_inference(
        &self,
        records: &[ProfileRecord],
    ) -> Result<Array2<f64>, PreprocessingError> {
        match self.transform(records, false)? {
            TransformOutput::Features(features) => Ok(features),
            TransformOutput::Training { features, .. } => Ok(features),
        }
    }

    /// Features and encoded labels for training.
    ///
    /// Outliers are removed from the batch, so the result can be shorter than
    /// `records`. Every remaining record must carry a job role.
    pub fn transform_training(
        &self,
        records: &[ProfileRecord],
    ) -> Result<(Array2<f64>, Array1<usize>), PreprocessingError> {
        match self.transform(records, true)? {
            TransformOutput::Training { features, labels } => Ok((features, labels)),
            TransformOutput::Features(features) if features.nrows() == 0 => {
                Ok((features, Array1::from(Vec::new())))
            }
            TransformOutput::Features(_) => Err(PreprocessingError::MissingColumns(vec![
                columns::JOB_ROLE.to_string(),
            ])),
        }
    }

    /// Feature vector of a single record.
    pub fn transform_one(&self, record: &ProfileRecord) -> Result<Array1<f64>, PreprocessingError> {
        let mut out = Array1::zeros(self.n_features());
        self.features_into(&self.prepare(record), out.view_mut())?;
        Ok(out)
    }

    /// Transform each record independently; one failing row never affects
    /// another.
    pub fn transform_each(
        &self,
        records: &[ProfileRecord],
    ) -> Vec<Result<Array1<f64>, PreprocessingError>> {
        records
            .iter()
            .enumerate()
            .map(|(row, record)| self.transform_one(record).map_err(|e| e.at_row(row)))
            .collect()
    }

    /// Serialize into the versioned blob format.
    pub fn save_to_bytes(&self) -> Result<Vec<u8>, PreprocessingError> {
        serialization::seal(&self.extract_params())
    }

    /// Restore from bytes written by [`save_to_bytes`](Self::save_to_bytes).
    pub fn load_from_bytes(bytes: &[u8]) -> Result<Self, PreprocessingError> {
        Self::from_params(serialization::open(bytes)?)
    }
}

impl FittedTransformer for FittedProfilePipeline {
    type Input = [ProfileRecord];
    type Output = Array2<f64>;
    type Params = ProfilePipelineParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        self.transform_inference(data)
    }

    fn extract_params(&self) -> Self::Params {
        ProfilePipelineParams {
            config: self.config.clone(),
            imputer: self.imputer.extract_params(),
            encoder: self.encoder.extract_params(),
            skills: self.skills.extract_params(),
            certification: self.certification.extract_params(),
            scaler: self.scaler.extract_params(),
            labels: self.labels.as_ref().map(FittedLabelEncoder::extract_params),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        let config = params.config;
        config.validate()?;

        let scaler = FittedStandardScaler::from_params(params.scaler)?;
        if scaler.n_features_out() != NUMERIC_COLUMNS.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: NUMERIC_COLUMNS.len(),
                got_features: scaler.n_features_out(),
            });
        }
        let encoder = FittedCategoricalEncoder::from_params(params.encoder)?;
        if encoder.n_features_out() != CATEGORICAL_COLUMNS.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: CATEGORICAL_COLUMNS.len(),
                got_features: encoder.n_features_out(),
            });
        }

        Ok(Self {
            cgpa: CgpaNormalizer::new(config.cgpa_fallback),
            outliers: IqrOutlierFilter::new(config.outlier_iqr_multiplier)?,
            imputer: FittedProfileImputer::from_params(params.imputer)?,
            encoder,
            skills: FittedTfidfVectorizer::from_params(params.skills)?,
            certification: FittedTfidfVectorizer::from_params(params.certification)?,
            scaler,
            categorizer: SkillCategorizer::new(config.keyword_tables.skill_categories.clone()),
            roles: RoleScorer::new(config.keyword_tables.roles.clone()),
            labels: params
                .labels
                .map(FittedLabelEncoder::from_params)
                .transpose()?,
            config,
        })
    }

    fn n_features_out(&self) -> usize {
        self.n_features()
    }

    fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PreprocessingError> {
        write_atomic(path.as_ref(), &self.save_to_bytes()?)
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PreprocessingError> {
        let bytes = std::fs::read(path)?;
        Self::load_from_bytes(&bytes)
    }
}

/// Write through a temp file in the same directory, then rename over `path`.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), PreprocessingError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), bytes = bytes.len(), "Saved profile pipeline");
    Ok(())
}

fn not_fitted() -> PreprocessingError {
    PreprocessingError::NotFitted("call fit() before using the pipeline".to_string())
}

/// A profile pipeline that starts unfitted and becomes fitted exactly once.
///
/// # Example
/// ```ignore
/// use profile_features::preprocessing::{PipelineConfig, ProfilePipeline};
///
/// let mut pipeline = ProfilePipeline::new(PipelineConfig::default());
/// let report = pipeline.fit(&records)?;
/// let features = pipeline.transform_inference(&new_records)?;
/// pipeline.save_to_file("pipeline.bin")?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct ProfilePipeline {
    config: PipelineConfig,
    fitted: Option<Arc<FittedProfilePipeline>>,
}

impl ProfilePipeline {
    /// Create an unfitted pipeline.
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            fitted: None,
        }
    }

    /// Wrap an already fitted pipeline.
    pub fn from_fitted(fitted: FittedProfilePipeline) -> Self {
        Self {
            config: fitted.config.clone(),
            fitted: Some(Arc::new(fitted)),
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted.is_some()
    }

    /// The fitted state, or [`PreprocessingError::NotFitted`].
    pub fn fitted(&self) -> Result<&FittedProfilePipeline, PreprocessingError> {
        self.fitted.as_deref().ok_or_else(not_fitted)
    }

    /// A shareable handle to the fitted state.
    pub fn shared(&self) -> Result<Arc<FittedProfilePipeline>, PreprocessingError> {
        self.fitted.clone().ok_or_else(not_fitted)
    }

    /// Fit the pipeline.
    ///
    /// # Errors
    /// [`PreprocessingError::AlreadyFitted`] if called twice; build a new
    /// pipeline to refit.
    pub fn fit(&mut self, records: &[ProfileRecord]) -> Result<FitReport, PreprocessingError> {
        if self.fitted.is_some() {
            return Err(PreprocessingError::AlreadyFitted);
        }
        let (fitted, report) = FittedProfilePipeline::fit(self.config.clone(), records)?;
        self.fitted = Some(Arc::new(fitted));
        Ok(report)
    }

    /// Fit, then run a training transform on the same records.
    pub fn fit_transform(
        &mut self,
        records: &[ProfileRecord],
    ) -> Result<TransformOutput, PreprocessingError> {
        self.fit(records)?;
        self.transform(records, true)
    }

    /// See [`FittedProfilePipeline::transform`].
    pub fn transform(
        &self,
        records: &[ProfileRecord],
        is_training: bool,
    ) -> Result<TransformOutput, PreprocessingError> {
        self.fitted()?.transform(records, is_training)
    }

    pub fn transform_inference(
        &self,
        records: &[ProfileRecord],
    ) -> Result<Array2<f64>, PreprocessingError> {
        self.fitted()?.transform_inference(records)
    }

    pub fn transform_training(
        &self,
        records: &[ProfileRecord],
    ) -> Result<(Array2<f64>, Array1<usize>), PreprocessingError> {
        self.fitted()?.transform_training(records)
    }

    pub fn transform_one(&self, record: &ProfileRecord) -> Result<Array1<f64>, PreprocessingError> {
        self.fitted()?.transform_one(record)
    }

    pub fn transform_each(
        &self,
        records: &[ProfileRecord],
    ) -> Result<Vec<Result<Array1<f64>, PreprocessingError>>, PreprocessingError> {
        Ok(self.fitted()?.transform_each(records))
    }

    pub fn feature_names(&self) -> Result<Vec<String>, PreprocessingError> {
        Ok(self.fitted()?.feature_names())
    }

    pub fn save_to_bytes(&self) -> Result<Vec<u8>, PreprocessingError> {
        self.fitted()?.save_to_bytes()
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PreprocessingError> {
        self.fitted()?.save_to_file(path)
    }

    pub fn load_from_bytes(bytes: &[u8]) -> Result<Self, PreprocessingError> {
        FittedProfilePipeline::load_from_bytes(bytes).map(Self::from_fitted)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PreprocessingError> {
        let pipeline = FittedProfilePipeline::load_from_file(path.as_ref()).map(Self::from_fitted)?;
        info!(path = %path.as_ref().display(), "Loaded profile pipeline");
        Ok(pipeline)
    }
}
