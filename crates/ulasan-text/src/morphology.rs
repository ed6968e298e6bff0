//! The stemming/stopword capability the normalizer delegates to.

use crate::error::TextError;
use crate::stemmer::IndonesianStemmer;
use crate::stopwords::StopwordFilter;

/// Language-specific reduction of whitespace-joined text.
///
/// Implementations must preserve word order, be deterministic, and have no
/// side effects. Errors abort only the operation that triggered them.
pub trait Morphology: Send + Sync {
    /// Remove stopwords from space-separated `text`.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Stopwords`] if the capability fails.
    fn remove_stopwords(&self, text: &str) -> Result<String, TextError>;

    /// Stem every word of space-separated `text`.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Stemming`] if the capability fails.
    fn stem(&self, text: &str) -> Result<String, TextError>;
}

/// Built-in Indonesian stopword list plus dictionary stemmer.
#[derive(Debug, Clone, Default)]
pub struct IndonesianMorphology {
    stopwords: StopwordFilter,
    stemmer: IndonesianStemmer,
}

impl IndonesianMorphology {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Protect extra words from stemming by registering them as roots.
    #[must_use]
    pub fn with_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stemmer = self.stemmer.with_roots(roots);
        self
    }

    /// Register `words` as roots and exempt them from stopword removal.
    #[must_use]
    pub fn with_protected_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = words.into_iter().map(|w| w.as_ref().to_owned()).collect();
        self.stopwords = self.stopwords.with_kept_words(&words);
        self.with_roots(words)
    }
}

impl Morphology for IndonesianMorphology {
    fn remove_stopwords(&self, text: &str) -> Result<String, TextError> {
        Ok(self.stopwords.remove(text))
    }

    fn stem(&self, text: &str) -> Result<String, TextError> {
        Ok(self.stemmer.stem_text(text))
    }
}
