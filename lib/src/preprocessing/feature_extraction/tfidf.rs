//! TF-IDF vectorization of free text.
//!
//! Documents are tokenized with a regex (by default runs of two or more word
//! characters), stop words are removed, and n-grams are built from the
//! remaining tokens. Fitting keeps terms that occur in at least `min_df`
//! documents, then, if more than `max_features` survive, the ones with the
//! highest total count across the corpus (ties broken alphabetically). The
//! vocabulary is indexed in alphabetical order.
//!
//! Weights are raw term counts times the smoothed inverse document frequency
//! `ln((1 + n) / (1 + df)) + 1`, with each row L2-normalized.

use crate::preprocessing::error::PreprocessingError;
use crate::preprocessing::text::StopWords;
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use ndarray::{Array1, Array2, ArrayViewMut1};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{info, warn};

/// Default token pattern: runs of two or more word characters.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Configuration for [`TfidfVectorizer`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TfidfConfig {
    /// Keep at most this many terms. `None` keeps every term that passes `min_df`.
    pub max_features: Option<usize>,
    /// Minimum number of documents a term must appear in.
    pub min_df: usize,
    /// Smallest and largest n-gram length, inclusive.
    pub ngram_range: (usize, usize),
    /// Words removed before n-grams are built.
    pub stop_words: StopWords,
    /// Regex whose matches are the tokens.
    pub token_pattern: String,
}

impl Default for TfidfConfig {
    fn default() -> Self {
        Self {
            max_features: None,
            min_df: 1,
            ngram_range: (1, 1),
            stop_words: StopWords::english_extended(),
            token_pattern: DEFAULT_TOKEN_PATTERN.to_string(),
        }
    }
}

impl TfidfConfig {
    /// Unigrams and bigrams, `min_df = 2`, capped at `max_features` terms.
    pub fn bigrams(max_features: usize) -> Self {
        Self {
            max_features: Some(max_features),
            min_df: 2,
            ngram_range: (1, 2),
            ..Self::default()
        }
    }

    pub fn with_max_features(mut self, max_features: Option<usize>) -> Self {
        self.max_features = max_features;
        self
    }

    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n, max_n);
        self
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_token_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.token_pattern = pattern.into();
        self
    }

    /// Check the settings and compile the token pattern.
    pub(crate) fn validate(&self) -> Result<Regex, PreprocessingError> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(PreprocessingError::InvalidParameter(format!(
                "ngram_range must satisfy 1 <= min <= max, got ({}, {})",
                min_n, max_n
            )));
        }
        if self.min_df == 0 {
            return Err(PreprocessingError::InvalidParameter(
                "min_df must be at least 1".to_string(),
            ));
        }
        if self.max_features == Some(0) {
            return Err(PreprocessingError::InvalidParameter(
                "max_features must be positive".to_string(),
            ));
        }
        Regex::new(&self.token_pattern).map_err(|e| {
            PreprocessingError::InvalidParameter(format!(
                "invalid token pattern '{}': {}",
                self.token_pattern, e
            ))
        })
    }
}

/// Split a document into stop-word-free n-grams.
fn analyze(doc: &str, pattern: &Regex, config: &TfidfConfig) -> Vec<String> {
    let lowered = doc.to_lowercase();
    let tokens: Vec<&str> = pattern
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| !config.stop_words.contains(token))
        .collect();

    let (min_n, max_n) = config.ngram_range;
    let mut terms = Vec::new();
    for n in min_n..=max_n.min(tokens.len()) {
        for window in tokens.windows(n) {
            terms.push(window.join(" "));
        }
    }
    terms
}

fn term_counts(terms: Vec<String>) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in terms {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}

/// TF-IDF vectorizer (unfitted).
///
/// # Example
/// ```ignore
/// use profile_features::preprocessing::{TfidfConfig, TfidfVectorizer, Transformer, FittedTransformer};
///
/// let vectorizer = TfidfVectorizer::new(TfidfConfig::bigrams(100));
/// let fitted = vectorizer.fit(&docs)?;
/// let weights = fitted.transform(&docs)?; // docs.len() x fitted.vocabulary().len()
/// ```
#[derive(Clone, Debug, Default)]
pub struct TfidfVectorizer {
    config: TfidfConfig,
}

impl TfidfVectorizer {
    pub fn new(config: TfidfConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TfidfConfig {
        &self.config
    }
}

/// Serializable parameters for a fitted TfidfVectorizer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TfidfParams {
    pub config: TfidfConfig,
    /// Terms in column order (alphabetical).
    pub vocabulary: Vec<String>,
    /// IDF weight of each term.
    pub idf: Vec<f64>,
}

impl Transformer for TfidfVectorizer {
    type Input = [String];
    type Output = Array2<f64>;
    type Params = TfidfParams;
    type Fitted = FittedTfidfVectorizer;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted, PreprocessingError> {
        let pattern = self.config.validate()?;
        if data.is_empty() {
            return Err(PreprocessingError::EmptyData(
                "Cannot fit TfidfVectorizer on empty data".to_string(),
            ));
        }

        // term -> (document frequency, corpus count)
        let mut stats: BTreeMap<String, (usize, usize)> = BTreeMap::new();
        for doc in data {
            for (term, count) in term_counts(analyze(doc, &pattern, &self.config)) {
                let entry = stats.entry(term).or_insert((0, 0));
                entry.0 += 1;
                entry.1 += count;
            }
        }
        let seen = stats.len();

        let mut kept: Vec<(String, usize, usize)> = stats
            .into_iter()
            .filter(|(_, (df, _))| *df >= self.config.min_df)
            .map(|(term, (df, count))| (term, df, count))
            .collect();

        if let Some(limit) = self.config.max_features {
            if kept.len() > limit {
                // Stable sort over alphabetical input keeps ties alphabetical.
                kept.sort_by(|a, b| b.2.cmp(&a.2));
                kept.truncate(limit);
                kept.sort_by(|a, b| a.0.cmp(&b.0));
            }
        }

        let n_docs = data.len() as f64;
        let (vocabulary, idf): (Vec<String>, Vec<f64>) = kept
            .into_iter()
            .map(|(term, df, _)| (term, ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0))
            .unzip();

        if vocabulary.is_empty() {
            warn!(
                documents = data.len(),
                terms_seen = seen,
                min_df = self.config.min_df,
                "No terms survived pruning; TF-IDF block will be empty"
            );
        } else {
            info!(
                documents = data.len(),
                terms_seen = seen,
                features = vocabulary.len(),
                "Fitted TF-IDF vocabulary"
            );
        }

        FittedTfidfVectorizer::build(
            TfidfParams {
                config: self.config.clone(),
                vocabulary,
                idf,
            },
            pattern,
        )
    }
}

/// Fitted TfidfVectorizer ready for inference.
#[derive(Clone, Debug)]
pub struct FittedTfidfVectorizer {
    config: TfidfConfig,
    pattern: Regex,
    vocabulary: Vec<String>,
    index: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl FittedTfidfVectorizer {
    fn build(params: TfidfParams, pattern: Regex) -> Result<Self, PreprocessingError> {
        if params.vocabulary.len() != params.idf.len() {
            return Err(PreprocessingError::FeatureMismatch {
                expected_features: params.vocabulary.len(),
                got_features: params.idf.len(),
            });
        }
        let index = params
            .vocabulary
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        Ok(Self {
            config: params.config,
            pattern,
            vocabulary: params.vocabulary,
            index,
            idf: params.idf,
        })
    }

    /// Terms in column order.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn config(&self) -> &TfidfConfig {
        &self.config
    }

    /// Write the weights of one document into `out`, which must be zeroed
    /// and as long as the vocabulary.
    pub fn vectorize_into(&self, doc: &str, mut out: ArrayViewMut1<f64>) {
        for term in analyze(doc, &self.pattern, &self.config) {
            if let Some(&idx) = self.index.get(&term) {
                out[idx] += 1.0;
            }
        }
        for (value, idf) in out.iter_mut().zip(&self.idf) {
            *value *= idf;
        }
        let norm = out.dot(&out).sqrt();
        if norm > 0.0 {
            out.mapv_inplace(|v| v / norm);
        }
    }

    /// Weights of a single document.
    pub fn vectorize(&self, doc: &str) -> Array1<f64> {
        let mut out = Array1::zeros(self.vocabulary.len());
        self.vectorize_into(doc, out.view_mut());
        out
    }
}

impl FittedTransformer for FittedTfidfVectorizer {
    type Input = [String];
    type Output = Array2<f64>;
    type Params = TfidfParams;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output, PreprocessingError> {
        let mut result = Array2::zeros((data.len(), self.vocabulary.len()));
        for (row, doc) in result.rows_mut().into_iter().zip(data) {
            self.vectorize_into(doc, row);
        }
        Ok(result)
    }

    fn extract_params(&self) -> Self::Params {
        TfidfParams {
            config: self.config.clone(),
            vocabulary: self.vocabulary.clone(),
            idf: self.idf.clone(),
        }
    }

    fn from_params(params: Self::Params) -> Result<Self, PreprocessingError> {
        let pattern = params.config.validate()?;
        Self::build(params, pattern)
    }

    fn n_features_out(&self) -> usize {
        self.vocabulary.len()
    }
}
