mod documents;
mod reload;
mod search;
mod summary;

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use ulasan_corpus::{Corpus, CorpusError};
use ulasan_sentiment::Analyzer;

use crate::middleware::{request_id, RequestId};

/// The live corpus, replaced wholesale on reload.
///
/// Readers clone the inner `Arc` and release the lock immediately, so a
/// request that started before a reload finishes against the old corpus.
/// Reloads hold `reload` across load and replace, so they install in the
/// order they started.
#[derive(Clone, Default)]
pub struct SharedCorpus {
    current: Arc<RwLock<Option<Arc<Corpus>>>>,
    reload: Arc<tokio::sync::Mutex<()>>,
}

impl SharedCorpus {
    pub fn new(corpus: Option<Corpus>) -> Self {
        Self {
            current: Arc::new(RwLock::new(corpus.map(Arc::new))),
            reload: Arc::default(),
        }
    }

    pub fn current(&self) -> Option<Arc<Corpus>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn replace(&self, corpus: Corpus) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(corpus));
    }

    /// Wait for any in-flight reload, then block others until the guard drops.
    pub async fn begin_reload(&self) -> tokio::sync::MutexGuard<'_, ()> {
        self.reload.lock().await
    }
}

#[derive(Clone)]
pub struct AppState {
    pub corpus: SharedCorpus,
    pub analyzer: Arc<Analyzer>,
    pub data_dir: Arc<PathBuf>,
    pub display_limit: usize,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    corpus: &'static str,
    documents: usize,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            "no_data" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn normalize_limit(limit: Option<usize>, default: usize) -> usize {
    limit.unwrap_or(default).clamp(1, 200)
}

pub(super) fn map_corpus_error(request_id: String, error: &CorpusError) -> ApiError {
    match error {
        CorpusError::MissingDirectory { .. }
        | CorpusError::NoData { .. }
        | CorpusError::EmptyCorpus => {
            tracing::warn!(error = %error, "no comments available");
            ApiError::new(request_id, "no_data", error.to_string())
        }
        _ => {
            tracing::error!(error = %error, "corpus operation failed");
            ApiError::new(request_id, "internal_error", "corpus operation failed")
        }
    }
}

/// The loaded corpus, or a `no_data` error when none is loaded.
pub(super) fn require_corpus(
    state: &AppState,
    request_id: &str,
) -> Result<Arc<Corpus>, ApiError> {
    state.corpus.current().ok_or_else(|| {
        ApiError::new(
            request_id,
            "no_data",
            "no corpus loaded; add comment files and POST /api/v1/reload",
        )
    })
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/summary", get(summary::get_summary))
        .route("/api/v1/documents", get(documents::list_documents))
        .route("/api/v1/documents/{id}", get(documents::get_document))
        .route("/api/v1/search", get(search::search))
        .route("/api/v1/reload", post(reload::reload_corpus))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);

    match state.corpus.current() {
        Some(corpus) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: HealthData {
                    status: "ok",
                    corpus: "loaded",
                    documents: corpus.len(),
                },
                meta,
            }),
        ),
        None => {
            tracing::warn!("health check: no corpus loaded");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    data: HealthData {
                        status: "degraded",
                        corpus: "empty",
                        documents: 0,
                    },
                    meta,
                }),
            )
        }
    }
}

#[cfg(test)]
mod tests;
