use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use ulasan_corpus::DocumentRecord;
use ulasan_sentiment::Category;

use crate::middleware::RequestId;

use super::{normalize_limit, require_corpus, ApiError, ApiResponse, AppState, ResponseMeta};

const DEFAULT_PAGE: usize = 50;

#[derive(Debug, Deserialize)]
pub(super) struct DocumentsQuery {
    pub category: Option<String>,
    pub limit: Option<usize>,
}

pub(super) async fn list_documents(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<DocumentsQuery>,
) -> Result<Json<ApiResponse<Vec<DocumentRecord>>>, ApiError> {
    let category = query
        .category
        .as_deref()
        .map(str::parse::<Category>)
        .transpose()
        .map_err(|e| ApiError::new(req_id.0.clone(), "bad_request", e.to_string()))?;
    let corpus = require_corpus(&state, &req_id.0)?;
    let limit = normalize_limit(query.limit, DEFAULT_PAGE);

    let data = corpus
        .documents()
        .iter()
        .filter(|doc| category.is_none_or(|c| doc.category == c))
        .take(limit)
        .cloned()
        .collect();

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_document(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<usize>,
) -> Result<Json<ApiResponse<DocumentRecord>>, ApiError> {
    let corpus = require_corpus(&state, &req_id.0)?;
    let Some(document) = corpus.get(id).cloned() else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("document {id} not found"),
        ));
    };

    Ok(Json(ApiResponse {
        data: document,
        meta: ResponseMeta::new(req_id.0),
    }))
}
