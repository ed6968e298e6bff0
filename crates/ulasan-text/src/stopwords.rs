use std::collections::HashSet;

use crate::stemmer::parse_word_list;

const BUILTIN_STOPWORDS: &str = include_str!("../data/stopwords.txt");

/// Removes Indonesian function words from whitespace-separated text.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: HashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl StopwordFilter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: parse_word_list(BUILTIN_STOPWORDS).collect(),
        }
    }

    /// Drop `words` from the stopword set so they always reach the stemmer.
    #[must_use]
    pub fn with_kept_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(word.as_ref());
        }
        self
    }

    #[must_use]
    pub fn is_stopword(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Drop stopwords, keeping the remaining words in order.
    #[must_use]
    pub fn remove(&self, text: &str) -> String {
        text.split_whitespace()
            .filter(|word| !self.is_stopword(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
