//! Dominant-category selection.

use crate::types::{Category, ScoreVector};

/// Pick the dominant category of a score vector.
///
/// All-zero scores are [`Category::Unclassified`]. Otherwise the highest
/// component wins; on an exact tie the earliest of positive, negative,
/// suggestion (see [`Category::SCORED`]) is chosen.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn classify(scores: &ScoreVector) -> Category {
    if scores.is_zero() {
        return Category::Unclassified;
    }

    let max = Category::SCORED
        .iter()
        .map(|c| scores.get(*c))
        .fold(f64::NEG_INFINITY, f64::max);

    // Exact comparison: ties are defined on identical values.
    Category::SCORED
        .into_iter()
        .find(|c| scores.get(*c) == max)
        .unwrap_or(Category::Unclassified)
}
