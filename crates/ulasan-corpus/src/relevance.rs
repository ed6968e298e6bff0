//! Hybrid query-to-document similarity.
//!
//! Relevance blends token-set overlap (Jaccard) with the alignment of the two
//! sentiment score vectors (cosine). The weights are fixed constants, not
//! configuration.

use std::collections::HashSet;

use ulasan_sentiment::ScoreVector;

/// Weight of the Jaccard token overlap in [`relevance`].
pub const TOKEN_OVERLAP_WEIGHT: f64 = 0.7;

/// Weight of the cosine score alignment in [`relevance`].
pub const SENTIMENT_ALIGNMENT_WEIGHT: f64 = 0.3;

/// `|A ∩ B| / |A ∪ B|` over the distinct tokens of each side; 0 when both are empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn jaccard(a: &[String], b: &[String]) -> f64 {
    let a: HashSet<&str> = a.iter().map(String::as_str).collect();
    let b: HashSet<&str> = b.iter().map(String::as_str).collect();

    let union = a.union(&b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(&b).count();
    intersection as f64 / union as f64
}

/// Cosine similarity of two score vectors; 0 when either has zero magnitude.
#[must_use]
pub fn cosine(a: &ScoreVector, b: &ScoreVector) -> f64 {
    let denom = a.magnitude() * b.magnitude();
    if denom <= 0.0 {
        return 0.0;
    }
    a.dot(b) / denom
}

/// `0.7 * jaccard + 0.3 * cosine` of a query against one document.
#[must_use]
pub fn relevance(
    query_tokens: &[String],
    query_scores: &ScoreVector,
    doc_tokens: &[String],
    doc_scores: &ScoreVector,
) -> f64 {
    TOKEN_OVERLAP_WEIGHT * jaccard(query_tokens, doc_tokens)
        + SENTIMENT_ALIGNMENT_WEIGHT * cosine(query_scores, doc_scores)
}
