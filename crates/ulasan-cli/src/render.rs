//! Plain-text rendering of corpus data.
//!
//! Every writer takes a generic `Write` so output can be captured in tests.

use std::io::{self, Write};

use ulasan_corpus::{CategorySummary, DocumentRecord, SearchResult};
use ulasan_sentiment::{Analysis, Category, ScoreVector};

const RULE_WIDTH: usize = 70;

pub(crate) fn write_rule(out: &mut impl Write, ch: char) -> io::Result<()> {
    writeln!(out, "{}", ch.to_string().repeat(RULE_WIDTH))
}

fn write_title(out: &mut impl Write, title: &str) -> io::Result<()> {
    write_rule(out, '=')?;
    writeln!(out, "{title}")?;
    write_rule(out, '=')
}

fn format_scores(scores: &ScoreVector) -> String {
    format!(
        "P={:.3}, N={:.3}, S={:.3}",
        scores.positive(),
        scores.negative(),
        scores.suggestion()
    )
}

pub(crate) fn write_summary(out: &mut impl Write, summary: &CategorySummary) -> io::Result<()> {
    write_title(out, "CORPUS SUMMARY")?;
    writeln!(out, "Total comments: {}", summary.total)?;
    writeln!(out)?;
    writeln!(out, "Dominant category distribution:")?;
    for category in Category::ALL {
        writeln!(
            out,
            "  {:<20}: {:>3} ({:>5.1}%)",
            category.label(),
            summary.count(category),
            summary.percentage(category)
        )?;
    }
    write_rule(out, '=')
}

pub(crate) fn write_search_results(
    out: &mut impl Write,
    query: &str,
    results: &[SearchResult<'_>],
    limit: usize,
) -> io::Result<()> {
    write_title(out, &format!("SEARCH RESULTS: '{query}'"))?;

    if results.is_empty() {
        writeln!(out, "No comments relevant to '{query}'.")?;
        return write_rule(out, '=');
    }

    writeln!(out, "Found {} relevant comments:", results.len())?;
    writeln!(out)?;

    for (rank, result) in results.iter().take(limit).enumerate() {
        let doc = result.document;
        writeln!(
            out,
            "[{}] Relevance: {:.3} | {}",
            rank + 1,
            result.relevance_score,
            doc.file_name
        )?;
        writeln!(out, "    Comment: {}", doc.text)?;
        writeln!(out, "    Category: {}", doc.category)?;
        writeln!(out, "    Scores: {}", format_scores(&doc.scores))?;
        writeln!(out)?;
    }

    if results.len() > limit {
        writeln!(out, "... and {} more", results.len() - limit)?;
    }
    write_rule(out, '=')
}

pub(crate) fn write_analysis(
    out: &mut impl Write,
    text: &str,
    analysis: &Analysis,
) -> io::Result<()> {
    writeln!(out, "Text:     {text}")?;
    writeln!(out, "Tokens:   {}", analysis.tokens.join(" "))?;
    writeln!(out, "Scores:   {}", format_scores(&analysis.scores))?;
    writeln!(out, "Category: {}", analysis.category)
}

pub(crate) fn write_documents<'a>(
    out: &mut impl Write,
    documents: impl IntoIterator<Item = &'a DocumentRecord>,
) -> io::Result<()> {
    writeln!(out, "{:<6}{:<14}{:<24}COMMENT", "ID", "CATEGORY", "FILE")?;
    let mut shown = 0usize;
    for doc in documents {
        writeln!(
            out,
            "{:<6}{:<14}{:<24}{}",
            doc.id,
            doc.category.label(),
            doc.file_name,
            doc.text
        )?;
        shown += 1;
    }
    if shown == 0 {
        writeln!(out, "no comments to show")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ulasan_corpus::{Corpus, SourceDocument};
    use ulasan_sentiment::{Analyzer, Lexicons};

    use super::*;

    fn analyzer() -> Analyzer {
        Analyzer::indonesian(Arc::new(Lexicons::builtin().unwrap()))
    }

    fn corpus(analyzer: &Analyzer) -> Corpus {
        Corpus::build(
            analyzer,
            vec![
                SourceDocument::new("1.txt", "Harganya mahal"),
                SourceDocument::new("2.txt", "Terlalu mahal untuk porsi kecil"),
                SourceDocument::new("3.txt", "Bebeknya enak"),
            ],
        )
        .unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn summary_lists_every_label_with_percentages() {
        let summary = corpus(&analyzer()).summary();
        let text = render(|out| write_summary(out, &summary));
        assert!(text.contains("Total comments: 3"));
        assert!(text.contains("NEGATIVE"));
        assert!(text.contains("UNCLASSIFIED"));
        assert!(text.contains(" 66.7%"));
    }

    #[test]
    fn search_results_are_truncated_with_remainder_notice() {
        let analyzer = analyzer();
        let corpus = corpus(&analyzer);
        let results = corpus.search_with(&analyzer, "mahal").unwrap();
        assert_eq!(results.len(), 2);

        let text = render(|out| write_search_results(out, "mahal", &results, 1));
        assert!(text.contains("Found 2 relevant comments"));
        assert!(text.contains("[1] Relevance: "));
        assert!(!text.contains("[2]"));
        assert!(text.contains("... and 1 more"));
        assert!(text.contains("P=0.000, N=1.000, S=0.000"));
    }

    #[test]
    fn empty_search_prints_notice() {
        let text = render(|out| write_search_results(out, "parkir", &[], 10));
        assert!(text.contains("No comments relevant to 'parkir'."));
    }

    #[test]
    fn analysis_shows_tokens_and_category() {
        let analysis = analyzer().analyze("Makanannya enak").unwrap();
        let text = render(|out| write_analysis(out, "Makanannya enak", &analysis));
        assert!(text.contains("Tokens:   makan enak"));
        assert!(text.contains("Category: POSITIVE"));
    }

    #[test]
    fn document_list_handles_empty_selection() {
        let corpus = corpus(&analyzer());
        let text = render(|out| write_documents(out, corpus.by_category(Category::Suggestion)));
        assert!(text.contains("no comments to show"));
    }
}
