use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("data directory not found: {}", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("no comments to load from {}", path.display())]
    NoData { path: PathBuf },

    #[error("no documents to classify")]
    EmptyCorpus,

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("analysis failed for {name}: {source}")]
    Analysis {
        name: String,
        #[source]
        source: ulasan_sentiment::SentimentError,
    },

    #[error("query analysis failed: {0}")]
    Query(#[source] ulasan_sentiment::SentimentError),
}
