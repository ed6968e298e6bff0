//! Lexicon-based classification of comments.
//!
//! Text is normalized by `ulasan-text`, scored against the positive, negative
//! and suggestion lexicons as relative term frequencies, and labelled with the
//! dominant category. [`Analyzer`] wires the three stages together.

pub mod analyzer;
pub mod classifier;
pub mod error;
pub mod lexicon;
pub mod scorer;
pub mod types;

pub use analyzer::{Analysis, Analyzer};
pub use classifier::classify;
pub use error::SentimentError;
pub use lexicon::{Lexicon, Lexicons, TermCounts};
pub use scorer::Scorer;
pub use types::{Category, ScoreVector};
