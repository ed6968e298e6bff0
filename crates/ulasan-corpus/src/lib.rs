//! In-memory comment corpus: ingestion, classification and relevance search.

pub mod corpus;
pub mod error;
pub mod ingest;
pub mod relevance;

pub use corpus::{CategorySummary, Corpus, DocumentRecord, SearchResult};
pub use error::CorpusError;
pub use ingest::{load_documents, IngestReport, SkipReason, SkippedFile, SourceDocument};
pub use relevance::{
    cosine, jaccard, relevance, SENTIMENT_ALIGNMENT_WEIGHT, TOKEN_OVERLAP_WEIGHT,
};
