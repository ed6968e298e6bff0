use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use ulasan_corpus::DocumentRecord;

use crate::middleware::RequestId;

use super::{
    map_corpus_error, normalize_limit, require_corpus, ApiError, ApiResponse, AppState,
    ResponseMeta,
};

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    pub q: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchHit {
    #[serde(flatten)]
    document: DocumentRecord,
    relevance_score: f64,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchData {
    query: String,
    /// Matches before the limit was applied.
    total: usize,
    results: Vec<SearchHit>,
}

pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchData>>, ApiError> {
    let Some(text) = query.q.as_deref().map(str::trim) else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "query parameter `q` is required",
        ));
    };

    let corpus = require_corpus(&state, &req_id.0)?;
    let limit = normalize_limit(query.limit, state.display_limit);

    let matches = corpus
        .search_with(&state.analyzer, text)
        .map_err(|e| map_corpus_error(req_id.0.clone(), &e))?;
    let total = matches.len();
    let results = matches
        .into_iter()
        .take(limit)
        .map(|hit| SearchHit {
            document: hit.document.clone(),
            relevance_score: hit.relevance_score,
        })
        .collect();

    Ok(Json(ApiResponse {
        data: SearchData {
            query: text.to_string(),
            total,
            results,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
