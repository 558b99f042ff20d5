//! Feature extraction from free text.

mod tfidf;

pub use tfidf::{
    FittedTfidfVectorizer, TfidfConfig, TfidfParams, TfidfVectorizer, DEFAULT_TOKEN_PATTERN,
};
