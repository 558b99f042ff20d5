//! Stop-word sets.
//!
//! The default English list is NLTK's, taken from the `stop-words` crate. The
//! list the vectorizer applies is embedded here since that crate does not ship
//! it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use stop_words::{get, LANGUAGE};

/// The larger English list applied when vectorizing text. Unlike
/// NLTK's list it also drops words such as `none`, `full` and `system`.
const ENGLISH_EXTENDED: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his", "how", "however",
    "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is", "it", "its",
    "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd", "made", "many", "may",
    "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly", "move",
    "much", "must", "my", "myself", "name", "namely", "neither", "never", "nevertheless", "next",
    "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing", "now", "nowhere", "of",
    "off", "often", "on", "once", "one", "only", "onto", "or", "other", "others", "otherwise",
    "our", "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps", "please", "put",
    "rather", "re", "same", "see", "seem", "seemed", "seeming", "seems", "serious", "several",
    "she", "should", "show", "side", "since", "sincere", "six", "sixty", "so", "some", "somehow",
    "someone", "something", "sometime", "sometimes", "somewhere", "still", "such", "system",
    "take", "ten", "than", "that", "the", "their", "them", "themselves", "then", "thence",
    "there", "thereafter", "thereby", "therefore", "therein", "thereupon", "these", "they",
    "thick", "thin", "third", "this", "those", "though", "three", "through", "throughout",
    "thru", "thus", "to", "together", "too", "top", "toward", "towards", "twelve", "twenty",
    "two", "un", "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whence", "whenever", "where", "whereafter", "whereas",
    "whereby", "wherein", "whereupon", "wherever", "whether", "which", "while", "whither", "who",
    "whoever", "whole", "whom", "whose", "why", "will", "with", "within", "without", "would",
    "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// A set of words dropped during text normalization and vectorization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// NLTK's English list.
    pub fn english() -> Self {
        Self::from_words(get(LANGUAGE::English))
    }

    /// The extended English list used by the TF-IDF vectorizer.
    pub fn english_extended() -> Self {
        Self::from_words(ENGLISH_EXTENDED.iter().copied())
    }

    /// An empty set (nothing is dropped).
    pub fn none() -> Self {
        Self {
            words: BTreeSet::new(),
        }
    }

    /// Build a set from arbitrary words. Words are lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Add more words to the set.
    pub fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words.extend(Self::from_words(words).words);
        self
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_contains_common_words() {
        let stop = StopWords::english();
        for word in ["the", "and", "with", "don", "against"] {
            assert!(stop.contains(word), "{} should be a stop word", word);
        }
        assert!(!stop.contains("python"));
        assert!(!stop.contains("none"));
    }

    #[test]
    fn test_extended_list_drops_none() {
        let stop = StopWords::english_extended();
        assert!(stop.contains("none"));
        assert!(stop.contains("full"));
        assert!(!stop.contains("sql"));
        assert!(stop.len() > StopWords::english().len());
    }

    #[test]
    fn test_custom_words_are_lowercased() {
        let stop = StopWords::none().with_words(["Experience", " Skills "]);
        assert!(stop.contains("experience"));
        assert!(stop.contains("skills"));
        assert_eq!(stop.len(), 2);
    }
}
