//! Noun lemmatization.
//!
//! [`Lemmatizer::Rules`] reduces plural nouns to their singular form with a
//! small suffix table, an exception map for irregular forms, and a protected
//! list for domain terms that only look plural (`kubernetes`, `devops`).
//! [`Lemmatizer::Identity`] passes tokens through unchanged and is the
//! fallback when no lemmatization is wanted.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

const IRREGULAR: &[(&str, &str)] = &[
    ("analyses", "analysis"),
    ("caches", "cache"),
    ("children", "child"),
    ("criteria", "criterion"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("men", "man"),
    ("niches", "niche"),
    ("phenomena", "phenomenon"),
    ("theses", "thesis"),
    ("vertices", "vertex"),
    ("women", "woman"),
];

const PROTECTED: &[&str] = &[
    "data", "devops", "ios", "jenkins", "kubernetes", "mlops", "news", "pandas", "postgres",
    "redis", "series", "species", "sas",
];

/// Endings that mark a singular word even though they end in `s`.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is", "ics"];

/// Plural endings whose `es` is dropped as a whole.
const ES_ENDINGS: &[&str] = &["sses", "ches", "shes", "xes", "zes"];

/// Rule-based noun lemmatizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleLemmatizer {
    exceptions: BTreeMap<String, String>,
    protected: BTreeSet<String>,
    min_len: usize,
}

impl Default for RuleLemmatizer {
    fn default() -> Self {
        Self {
            exceptions: IRREGULAR
                .iter()
                .map(|&(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            protected: PROTECTED.iter().map(|w| w.to_string()).collect(),
            min_len: 4,
        }
    }
}

impl RuleLemmatizer {
    /// Add an irregular form.
    pub fn with_exception(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.exceptions.insert(from.into(), to.into());
        self
    }

    /// Mark words that must never be changed.
    pub fn with_protected<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protected.extend(words.into_iter().map(Into::into));
        self
    }

    /// Tokens shorter than this are left alone.
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    fn lemmatize<'a>(&self, token: &'a str) -> Cow<'a, str> {
        if let Some(lemma) = self.exceptions.get(token) {
            return Cow::Owned(lemma.clone());
        }

        // Tokens with digits or punctuation ("sql," "c++") are not dictionary words.
        if token.len() < self.min_len
            || !token.bytes().all(|b| b.is_ascii_lowercase())
            || self.protected.contains(token)
            || SINGULAR_ENDINGS.iter().any(|end| token.ends_with(end))
        {
            return Cow::Borrowed(token);
        }

        if token.len() > 4 {
            if let Some(stem) = token.strip_suffix("ies") {
                return Cow::Owned(format!("{}y", stem));
            }
        }

        if ES_ENDINGS.iter().any(|end| token.ends_with(end)) {
            return Cow::Borrowed(&token[..token.len() - 2]);
        }

        match token.strip_suffix('s') {
            Some(stem) => Cow::Borrowed(stem),
            None => Cow::Borrowed(token),
        }
    }
}

/// Lemmatization strategy used by the text normalizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lemmatizer {
    /// Pass tokens through unchanged.
    Identity,
    /// Suffix rules with exceptions.
    Rules(RuleLemmatizer),
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Lemmatizer::Rules(RuleLemmatizer::default())
    }
}

impl Lemmatizer {
    /// Reduce a lowercase token to its lemma.
    pub fn lemmatize<'a>(&self, token: &'a str) -> Cow<'a, str> {
        match self {
            Lemmatizer::Identity => Cow::Borrowed(token),
            Lemmatizer::Rules(rules) => rules.lemmatize(token),
        }
    }
}
