//! Free-text cleaning applied to skills and certification fields.

use super::lemmatizer::Lemmatizer;
use super::stop_words::StopWords;
use serde::{Deserialize, Serialize};

/// Lowercases, strips punctuation, drops stop words and short tokens, and
/// lemmatizes what is left.
///
/// Commas and periods survive cleaning, so `"SQL, Tableau"` becomes
/// `"sql, tableau"`. Keyword matching downstream relies on this.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextNormalizer {
    stop_words: StopWords,
    lemmatizer: Lemmatizer,
    min_token_len: usize,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self {
            stop_words: StopWords::english(),
            lemmatizer: Lemmatizer::default(),
            min_token_len: 3,
        }
    }
}

impl TextNormalizer {
    pub fn new(stop_words: StopWords, lemmatizer: Lemmatizer) -> Self {
        Self {
            stop_words,
            lemmatizer,
            ..Self::default()
        }
    }

    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words = stop_words;
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Lemmatizer) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    /// Tokens shorter than this many bytes are dropped.
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Clean one text value. Absent text cleans to the empty string.
    pub fn clean(&self, text: Option<&str>) -> String {
        let Some(text) = text else {
            return String::new();
        };

        let filtered: String = text
            .to_lowercase()
            .chars()
            .map(|c| match c {
                'a'..='z' | '0'..='9' | ',' | '.' => c,
                c if c.is_whitespace() => c,
                _ => ' ',
            })
            .collect();

        let mut out = String::with_capacity(filtered.len());
        for token in filtered.split_whitespace() {
            if token.len() < self.min_token_len || self.stop_words.contains(token) {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&self.lemmatizer.lemmatize(token));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_text_is_empty() {
        assert_eq!(TextNormalizer::default().clean(None), "");
        assert_eq!(TextNormalizer::default().clean(Some("   ")), "");
    }

    #[test]
    fn test_clean_keeps_commas_and_lowercases() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            normalizer.clean(Some("SQL, Tableau, Excel")),
            "sql, tableau, excel"
        );
    }

    #[test]
    fn test_clean_drops_stop_words_and_short_tokens() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            normalizer.clean(Some("Experience with the AWS and R on ML tools")),
            "experience aws tool"
        );
    }

    #[test]
    fn test_special_characters_become_separators() {
        let normalizer = TextNormalizer::default();
        assert_eq!(normalizer.clean(Some("C++/Rust\tdevelopment!!")), "rust development");
        assert_eq!(normalizer.clean(Some("node.js")), "node.js");
    }

    #[test]
    fn test_lemmatizes_plurals() {
        let normalizer = TextNormalizer::default();
        assert_eq!(
            normalizer.clean(Some("Dashboards Databases Kubernetes")),
            "dashboard database kubernetes"
        );
    }

    #[test]
    fn test_identity_lemmatizer_and_custom_stop_words() {
        let normalizer = TextNormalizer::new(
            StopWords::none().with_words(["python"]),
            Lemmatizer::Identity,
        );
        assert_eq!(normalizer.clean(Some("Python the Dashboards")), "the dashboards");
    }

    #[test]
    fn test_clean_is_stable_on_cleaned_text() {
        let normalizer = TextNormalizer::default();
        let once = normalizer.clean(Some("Power BI, Data Visualization, Reports"));
        assert_eq!(normalizer.clean(Some(&once)), once);
    }
}
