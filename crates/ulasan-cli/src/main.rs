mod interactive;
mod render;

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ulasan_corpus::Corpus;
use ulasan_sentiment::{Analyzer, Category, Lexicons};

#[derive(Debug, Parser)]
#[command(name = "ulasan")]
#[command(about = "Classify customer comments and search them by relevance")]
struct Cli {
    /// Directory of `*.txt` comment files (overrides ULASAN_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Lexicon YAML file (overrides ULASAN_LEXICONS_PATH)
    #[arg(long, global = true)]
    lexicons: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the category distribution of the corpus
    Summary,
    /// Rank comments by relevance to a query
    Search {
        query: String,

        /// Maximum number of results to print
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Normalize, score and classify a single text
    Analyze { text: String },
    /// List classified comments
    List {
        /// Only show one category (positive, negative, suggestion, unclassified)
        #[arg(long, value_parser = parse_category)]
        category: Option<Category>,
    },
    /// Interactive search menu (the default)
    Interactive,
}

fn parse_category(raw: &str) -> Result<Category, String> {
    raw.parse().map_err(|e: ulasan_sentiment::SentimentError| e.to_string())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ulasan_core::load_app_config()?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(path) = cli.lexicons {
        config.lexicons_path = Some(path);
    }

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let lexicons = Lexicons::load(config.lexicons_path.as_deref())
        .context("failed to load lexicons")?;
    let analyzer = Analyzer::indonesian(Arc::new(lexicons));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Commands::Analyze { text }) => {
            let analysis = analyzer.analyze(&text)?;
            render::write_analysis(&mut out, &text, &analysis)?;
        }
        Some(Commands::Summary) => {
            let corpus = load_corpus(&analyzer, &config.data_dir)?;
            render::write_summary(&mut out, &corpus.summary())?;
        }
        Some(Commands::Search { query, limit }) => {
            let corpus = load_corpus(&analyzer, &config.data_dir)?;
            let results = corpus.search_with(&analyzer, &query)?;
            let limit = limit.unwrap_or(config.display_limit).max(1);
            render::write_search_results(&mut out, &query, &results, limit)?;
        }
        Some(Commands::List { category }) => {
            let corpus = load_corpus(&analyzer, &config.data_dir)?;
            match category {
                Some(category) => render::write_documents(&mut out, corpus.by_category(category))?,
                None => render::write_documents(&mut out, corpus.documents().iter())?,
            }
        }
        Some(Commands::Interactive) | None => {
            let corpus = load_corpus(&analyzer, &config.data_dir)?;
            let session = interactive::Session {
                corpus: &corpus,
                analyzer: &analyzer,
                display_limit: config.display_limit,
            };
            let stdin = io::stdin();
            session.run(stdin.lock(), &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn load_corpus(analyzer: &Analyzer, data_dir: &Path) -> anyhow::Result<Corpus> {
    tracing::info!(dir = %data_dir.display(), "loading comments");
    Corpus::load(analyzer, data_dir)
        .with_context(|| format!("failed to build corpus from {}", data_dir.display()))
}
