//! Text normalization: stop words, lemmatization and cleaning.
//!
//! All resources are plain serializable values passed in at construction,
//! so a fitted pipeline carries the exact normalizer it was fitted with.

mod lemmatizer;
mod normalizer;
mod stop_words;

pub use lemmatizer::{Lemmatizer, RuleLemmatizer};
pub use normalizer::TextNormalizer;
pub use stop_words::StopWords;
