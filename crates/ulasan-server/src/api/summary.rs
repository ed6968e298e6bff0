use axum::{extract::State, Extension, Json};
use serde::Serialize;
use ulasan_sentiment::Category;

use crate::middleware::RequestId;

use super::{require_corpus, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct CategoryShare {
    category: Category,
    count: usize,
    percentage: f64,
}

#[derive(Debug, Serialize)]
pub(super) struct SummaryData {
    total: usize,
    categories: Vec<CategoryShare>,
}

pub(super) async fn get_summary(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<SummaryData>>, ApiError> {
    let corpus = require_corpus(&state, &req_id.0)?;
    let summary = corpus.summary();

    let categories = Category::ALL
        .into_iter()
        .map(|category| CategoryShare {
            category,
            count: summary.count(category),
            percentage: summary.percentage(category),
        })
        .collect();

    Ok(Json(ApiResponse {
        data: SummaryData {
            total: summary.total,
            categories,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
