//! Text normalization for comment classification.
//!
//! [`Normalizer`] turns raw comment text into a canonical token sequence. The
//! language-specific stopword and stemming work sits behind the [`Morphology`]
//! trait; [`IndonesianMorphology`] is the built-in implementation.

pub mod error;
pub mod morphology;
pub mod normalize;
pub mod stemmer;
pub mod stopwords;

pub use error::TextError;
pub use morphology::{IndonesianMorphology, Morphology};
pub use normalize::{case_fold, tokenize, Normalizer};
pub use stemmer::IndonesianStemmer;
pub use stopwords::StopwordFilter;
