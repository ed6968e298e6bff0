mod api;
mod middleware;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use ulasan_corpus::Corpus;
use ulasan_sentiment::{Analyzer, Lexicons};

use crate::api::{build_app, AppState, SharedCorpus};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ulasan_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let lexicons = Lexicons::load(config.lexicons_path.as_deref())
        .context("failed to load lexicons")?;
    let analyzer = Arc::new(Analyzer::indonesian(Arc::new(lexicons)));

    // The API answers `no_data` until a reload succeeds.
    let corpus = match Corpus::load(&analyzer, &config.data_dir) {
        Ok(corpus) => Some(corpus),
        Err(e) => {
            tracing::warn!(
                error = %e,
                dir = %config.data_dir.display(),
                "starting without a corpus"
            );
            None
        }
    };

    let state = AppState {
        corpus: SharedCorpus::new(corpus),
        analyzer,
        data_dir: Arc::new(config.data_dir.clone()),
        display_limit: config.display_limit,
    };
    let app = build_app(state);

    tracing::info!(addr = %config.bind_addr, env = %config.env, "listening");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
