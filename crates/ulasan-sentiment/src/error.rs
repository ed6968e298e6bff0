use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("normalization error: {0}")]
    Normalization(#[from] ulasan_text::TextError),

    #[error("lexicon configuration error: {0}")]
    Lexicon(#[from] ulasan_core::ConfigError),

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}
