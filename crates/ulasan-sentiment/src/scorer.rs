//! Lexicon term-frequency scorer.

use std::sync::Arc;

use crate::lexicon::Lexicons;
use crate::types::ScoreVector;

/// Scores token sequences against a fixed set of lexicons.
///
/// Each lexicon's term frequency is `hits / token count`. The three
/// frequencies are then rescaled to shares of their sum, so only the balance
/// between categories survives, not how dense the hits were.
#[derive(Debug, Clone)]
pub struct Scorer {
    lexicons: Arc<Lexicons>,
}

impl Scorer {
    #[must_use]
    pub fn new(lexicons: Arc<Lexicons>) -> Self {
        Self { lexicons }
    }

    #[must_use]
    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// Score a normalized token sequence. An empty sequence scores zero.
    #[must_use]
    pub fn score(&self, tokens: &[String]) -> ScoreVector {
        if tokens.is_empty() {
            return ScoreVector::ZERO;
        }

        let counts = self.lexicons.count_hits(tokens);

        #[allow(clippy::cast_precision_loss)]
        let total = tokens.len() as f64;
        #[allow(clippy::cast_precision_loss)]
        let tf = |hits: usize| hits as f64 / total;

        ScoreVector::from_term_frequencies(
            tf(counts.positive),
            tf(counts.negative),
            tf(counts.suggestion),
        )
    }
}
