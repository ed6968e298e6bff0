use thiserror::Error;

/// Failure raised by a [`crate::Morphology`] implementation.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("stopword removal failed: {0}")]
    Stopwords(String),

    #[error("stemming failed: {0}")]
    Stemming(String),
}
