//! Normalize, score and classify in one call.

use std::sync::Arc;

use serde::Serialize;
use ulasan_text::{IndonesianMorphology, Morphology, Normalizer};

use crate::classifier::classify;
use crate::error::SentimentError;
use crate::lexicon::Lexicons;
use crate::scorer::Scorer;
use crate::types::{Category, ScoreVector};

/// Everything derived from one comment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub tokens: Vec<String>,
    pub scores: ScoreVector,
    pub category: Category,
}

#[derive(Debug, Clone)]
pub struct Analyzer {
    normalizer: Normalizer,
    scorer: Scorer,
}

impl Analyzer {
    #[must_use]
    pub fn new(morphology: Arc<dyn Morphology>, lexicons: Arc<Lexicons>) -> Self {
        Self {
            normalizer: Normalizer::new(morphology),
            scorer: Scorer::new(lexicons),
        }
    }

    /// Analyzer backed by the Indonesian stopword list and stemmer.
    ///
    /// Every lexicon word is registered as a stemmer root and exempted from
    /// stopword removal, so marker terms such as `ramah`, `tolong` or `lagi`
    /// reach the scorer unchanged.
    #[must_use]
    pub fn indonesian(lexicons: Arc<Lexicons>) -> Self {
        let morphology =
            IndonesianMorphology::new().with_protected_words(lexicons.vocabulary());
        Self::new(Arc::new(morphology), lexicons)
    }

    #[must_use]
    pub fn lexicons(&self) -> &Lexicons {
        self.scorer.lexicons()
    }

    /// # Errors
    ///
    /// Returns [`SentimentError::Normalization`] if the morphology capability fails.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>, SentimentError> {
        Ok(self.normalizer.normalize(text)?)
    }

    #[must_use]
    pub fn score(&self, tokens: &[String]) -> ScoreVector {
        self.scorer.score(tokens)
    }

    /// # Errors
    ///
    /// Returns [`SentimentError::Normalization`] if the morphology capability fails.
    pub fn analyze(&self, text: &str) -> Result<Analysis, SentimentError> {
        let tokens = self.normalize(text)?;
        let scores = self.score(&tokens);
        let category = classify(&scores);
        Ok(Analysis {
            tokens,
            scores,
            category,
        })
    }
}
