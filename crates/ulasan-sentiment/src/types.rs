use serde::Serialize;

use crate::error::SentimentError;

/// Classification label of a comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Positive,
    Negative,
    Suggestion,
    Unclassified,
}

impl Category {
    /// Scored categories in tie-breaking order.
    pub const SCORED: [Category; 3] = [
        Category::Positive,
        Category::Negative,
        Category::Suggestion,
    ];

    /// Every label, in the order summaries list them.
    pub const ALL: [Category; 4] = [
        Category::Positive,
        Category::Negative,
        Category::Suggestion,
        Category::Unclassified,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Positive => "POSITIVE",
            Category::Negative => "NEGATIVE",
            Category::Suggestion => "SUGGESTION",
            Category::Unclassified => "UNCLASSIFIED",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = SentimentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Category::Positive),
            "negative" => Ok(Category::Negative),
            "suggestion" => Ok(Category::Suggestion),
            "unclassified" => Ok(Category::Unclassified),
            _ => Err(SentimentError::UnknownCategory(s.to_string())),
        }
    }
}

/// Relative share of lexicon hits per scored category.
///
/// Components are in `[0, 1]` and sum to `1.0` whenever any lexicon matched,
/// otherwise all three are zero. The only constructor enforces this.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ScoreVector {
    positive: f64,
    negative: f64,
    suggestion: f64,
}

impl ScoreVector {
    pub const ZERO: ScoreVector = ScoreVector {
        positive: 0.0,
        negative: 0.0,
        suggestion: 0.0,
    };

    /// Normalize three per-lexicon term frequencies into shares of their sum.
    ///
    /// Negative or non-finite inputs count as zero. A zero sum gives [`ScoreVector::ZERO`].
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn from_term_frequencies(positive: f64, negative: f64, suggestion: f64) -> Self {
        let clean = |tf: f64| if tf.is_finite() && tf > 0.0 { tf } else { 0.0 };
        let (positive, negative, suggestion) =
            (clean(positive), clean(negative), clean(suggestion));

        let total = positive + negative + suggestion;
        if total == 0.0 {
            return Self::ZERO;
        }

        Self {
            positive: positive / total,
            negative: negative / total,
            suggestion: suggestion / total,
        }
    }

    #[must_use]
    pub fn positive(&self) -> f64 {
        self.positive
    }

    #[must_use]
    pub fn negative(&self) -> f64 {
        self.negative
    }

    #[must_use]
    pub fn suggestion(&self) -> f64 {
        self.suggestion
    }

    /// Component for `category`; `Unclassified` has no component and reads as zero.
    #[must_use]
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Positive => self.positive,
            Category::Negative => self.negative,
            Category::Suggestion => self.suggestion,
            Category::Unclassified => 0.0,
        }
    }

    #[must_use]
    pub fn sum(&self) -> f64 {
        self.positive + self.negative + self.suggestion
    }

    /// True when no lexicon matched at all.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_zero(&self) -> bool {
        self.positive == 0.0 && self.negative == 0.0 && self.suggestion == 0.0
    }

    #[must_use]
    pub fn dot(&self, other: &ScoreVector) -> f64 {
        self.positive * other.positive
            + self.negative * other.negative
            + self.suggestion * other.suggestion
    }

    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }
}
