use std::sync::Arc;

use axum::{extract::State, Extension, Json};
use serde::Serialize;
use ulasan_corpus::{CategorySummary, Corpus};

use crate::middleware::RequestId;

use super::{map_corpus_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct ReloadData {
    documents: usize,
    summary: CategorySummary,
}

/// Rebuild the corpus from the data directory and swap it in.
///
/// The rebuild runs on the blocking pool. On failure the previous corpus
/// stays live. Concurrent reloads run one at a time.
pub(super) async fn reload_corpus(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<ReloadData>>, ApiError> {
    let _reloading = state.corpus.begin_reload().await;
    let analyzer = Arc::clone(&state.analyzer);
    let data_dir = Arc::clone(&state.data_dir);

    let corpus = tokio::task::spawn_blocking(move || Corpus::load(&analyzer, &data_dir))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "reload task failed");
            ApiError::new(req_id.0.clone(), "internal_error", "reload task failed")
        })?
        .map_err(|e| map_corpus_error(req_id.0.clone(), &e))?;

    let data = ReloadData {
        documents: corpus.len(),
        summary: corpus.summary(),
    };
    state.corpus.replace(corpus);
    tracing::info!(documents = data.documents, "corpus reloaded");

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}
