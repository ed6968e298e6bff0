//! Classified, queryable comment collection.

use std::path::Path;

use serde::Serialize;
use ulasan_sentiment::{Analyzer, Category, ScoreVector};

use crate::error::CorpusError;
use crate::ingest::{load_documents, SourceDocument};
use crate::relevance::relevance;

/// One classified comment. Never mutated after the corpus is built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRecord {
    pub id: usize,
    pub file_name: String,
    pub text: String,
    pub tokens: Vec<String>,
    pub scores: ScoreVector,
    pub category: Category,
}

/// A document matched by a query, borrowed from the corpus for one response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchResult<'a> {
    #[serde(flatten)]
    pub document: &'a DocumentRecord,
    pub relevance_score: f64,
}

/// Count per label across the whole corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub suggestion: usize,
    pub unclassified: usize,
}

impl CategorySummary {
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Positive => self.positive,
            Category::Negative => self.negative,
            Category::Suggestion => self.suggestion,
            Category::Unclassified => self.unclassified,
        }
    }

    /// Share of the corpus in `category`, in percent; 0 for an empty corpus.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percentage(&self, category: Category) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(category) as f64 * 100.0 / self.total as f64
    }

    fn add(&mut self, category: Category) {
        self.total += 1;
        match category {
            Category::Positive => self.positive += 1,
            Category::Negative => self.negative += 1,
            Category::Suggestion => self.suggestion += 1,
            Category::Unclassified => self.unclassified += 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Corpus {
    documents: Vec<DocumentRecord>,
}

impl Corpus {
    /// Classify `documents` in order, assigning ids from 1.
    ///
    /// # Errors
    ///
    /// - [`CorpusError::EmptyCorpus`] if `documents` is empty.
    /// - [`CorpusError::Analysis`] if any document fails to normalize.
    pub fn build(analyzer: &Analyzer, documents: Vec<SourceDocument>) -> Result<Self, CorpusError> {
        if documents.is_empty() {
            return Err(CorpusError::EmptyCorpus);
        }

        let mut records = Vec::with_capacity(documents.len());
        for (index, doc) in documents.into_iter().enumerate() {
            let analysis = analyzer
                .analyze(&doc.text)
                .map_err(|source| CorpusError::Analysis {
                    name: doc.name.clone(),
                    source,
                })?;
            tracing::debug!(
                file = %doc.name,
                category = %analysis.category,
                tokens = analysis.tokens.len(),
                "classified comment"
            );
            records.push(DocumentRecord {
                id: index + 1,
                file_name: doc.name,
                text: doc.text,
                tokens: analysis.tokens,
                scores: analysis.scores,
                category: analysis.category,
            });
        }

        let corpus = Self { documents: records };
        let summary = corpus.summary();
        tracing::info!(
            total = summary.total,
            positive = summary.positive,
            negative = summary.negative,
            suggestion = summary.suggestion,
            unclassified = summary.unclassified,
            "corpus built"
        );
        Ok(corpus)
    }

    /// Read `dir` with [`load_documents`] and classify the result.
    ///
    /// # Errors
    ///
    /// Any ingestion or analysis error; skipped files are only logged.
    pub fn load(analyzer: &Analyzer, dir: &Path) -> Result<Self, CorpusError> {
        let report = load_documents(dir)?;
        if !report.skipped.is_empty() {
            tracing::warn!(skipped = report.skipped.len(), "some comment files were skipped");
        }
        Self::build(analyzer, report.documents)
    }

    #[must_use]
    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: usize) -> Option<&DocumentRecord> {
        id.checked_sub(1).and_then(|index| self.documents.get(index))
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &DocumentRecord> {
        self.documents.iter().filter(move |d| d.category == category)
    }

    #[must_use]
    pub fn summary(&self) -> CategorySummary {
        let mut summary = CategorySummary::default();
        for doc in &self.documents {
            summary.add(doc.category);
        }
        summary
    }

    /// Rank every document against `query`, most relevant first.
    ///
    /// Only documents with relevance strictly above zero are returned. Equal
    /// scores keep corpus order. A query that normalizes to nothing returns
    /// no results without scoring.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Query`] if the query fails to normalize.
    pub fn search_with<'a>(
        &'a self,
        analyzer: &Analyzer,
        query: &str,
    ) -> Result<Vec<SearchResult<'a>>, CorpusError> {
        let query_tokens = analyzer.normalize(query).map_err(CorpusError::Query)?;
        if query_tokens.is_empty() {
            tracing::debug!(query, "query normalized to nothing");
            return Ok(Vec::new());
        }
        let query_scores = analyzer.score(&query_tokens);

        let mut results: Vec<SearchResult<'a>> = self
            .documents
            .iter()
            .filter_map(|document| {
                let relevance_score =
                    relevance(&query_tokens, &query_scores, &document.tokens, &document.scores);
                (relevance_score > 0.0).then_some(SearchResult {
                    document,
                    relevance_score,
                })
            })
            .collect();

        // `sort_by` is stable, so ties stay in corpus order.
        results.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));

        tracing::debug!(query, matches = results.len(), "search complete");
        Ok(results)
    }
}

#[cfg(test)]
#[path = "corpus_test.rs"]
mod tests;
