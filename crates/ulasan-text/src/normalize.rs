//! Raw comment text to canonical token sequence.
//!
//! The stages run in a fixed order: case folding, stripping non-letters and
//! splitting, stopword removal, stemming. Each morphology stage round-trips
//! through a space-joined string because that is the capability's contract.

use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::error::TextError;
use crate::morphology::Morphology;

static NON_LETTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z\s]").expect("valid non-letter regex"));

#[derive(Clone)]
pub struct Normalizer {
    morphology: Arc<dyn Morphology>,
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer").finish_non_exhaustive()
    }
}

impl Normalizer {
    #[must_use]
    pub fn new(morphology: Arc<dyn Morphology>) -> Self {
        Self { morphology }
    }

    /// Normalize `text` into lowercase, letters-only, stopword-free stems.
    ///
    /// Empty or all-symbol input yields an empty sequence.
    ///
    /// # Errors
    ///
    /// Returns [`TextError`] if the morphology capability fails.
    pub fn normalize(&self, text: &str) -> Result<Vec<String>, TextError> {
        let folded = case_fold(text);
        let tokens = tokenize(&folded);
        let kept = reduce(&tokens, |joined| self.morphology.remove_stopwords(joined))?;
        let stems = reduce(&kept, |joined| self.morphology.stem(joined))?;
        tracing::trace!(raw = tokens.len(), kept = kept.len(), "normalized text");
        Ok(stems)
    }
}

#[must_use]
pub fn case_fold(text: &str) -> String {
    text.to_lowercase()
}

/// Delete every character that is not `a-z` or whitespace, then split on whitespace.
///
/// Deleted characters are not replaced by a separator: `"ok!!bagus"` is one token.
#[must_use]
pub fn tokenize(folded: &str) -> Vec<String> {
    NON_LETTER
        .replace_all(folded, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn reduce<F>(tokens: &[String], stage: F) -> Result<Vec<String>, TextError>
where
    F: FnOnce(&str) -> Result<String, TextError>,
{
    if tokens.is_empty() {
        return Ok(Vec::new());
    }
    let reduced = stage(&tokens.join(" "))?;
    Ok(reduced.split_whitespace().map(str::to_string).collect())
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
