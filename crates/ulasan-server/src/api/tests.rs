use std::path::Path;

use axum::body::{to_bytes, Body};
use axum::http::Request;
use tower::ServiceExt;
use ulasan_corpus::SourceDocument;
use ulasan_sentiment::Lexicons;

use super::*;

fn analyzer() -> Arc<Analyzer> {
    Arc::new(Analyzer::indonesian(Arc::new(
        Lexicons::builtin().expect("builtin lexicons"),
    )))
}

fn sample_corpus(analyzer: &Analyzer) -> Corpus {
    Corpus::build(
        analyzer,
        vec![
            SourceDocument::new("001.txt", "Harganya mahal sekali"),
            SourceDocument::new("002.txt", "Makanannya enak dan pelayanannya ramah"),
            SourceDocument::new("003.txt", "Tolong parkirnya diperluas"),
            SourceDocument::new("004.txt", "Terlalu mahal, porsinya kecil"),
        ],
    )
    .expect("corpus")
}

fn state_with(corpus: Option<Corpus>, data_dir: &Path) -> AppState {
    AppState {
        corpus: SharedCorpus::new(corpus),
        analyzer: analyzer(),
        data_dir: Arc::new(data_dir.to_path_buf()),
        display_limit: 10,
    }
}

fn loaded_state() -> AppState {
    let analyzer = analyzer();
    let corpus = sample_corpus(&analyzer);
    AppState {
        corpus: SharedCorpus::new(Some(corpus)),
        analyzer,
        data_dir: Arc::new(PathBuf::from("/nonexistent/ulasan-data")),
        display_limit: 10,
    }
}

async fn send(app: Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&body).expect("json parse");
    (status, json)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    send(app, Method::GET, uri).await
}

#[test]
fn normalize_limit_applies_defaults_and_bounds() {
    assert_eq!(normalize_limit(None, 50), 50);
    assert_eq!(normalize_limit(Some(0), 50), 1);
    assert_eq!(normalize_limit(Some(1_000), 50), 200);
    assert_eq!(normalize_limit(Some(25), 50), 25);
}

#[test]
fn api_error_codes_map_to_statuses() {
    let cases = [
        ("bad_request", StatusCode::BAD_REQUEST),
        ("not_found", StatusCode::NOT_FOUND),
        ("no_data", StatusCode::SERVICE_UNAVAILABLE),
        ("internal_error", StatusCode::INTERNAL_SERVER_ERROR),
    ];
    for (code, status) in cases {
        let response = ApiError::new("req-1", code, "message").into_response();
        assert_eq!(response.status(), status, "code {code}");
    }
}

#[test]
fn corpus_errors_map_to_codes() {
    let missing = CorpusError::MissingDirectory {
        path: PathBuf::from("/missing"),
    };
    assert_eq!(map_corpus_error("r".into(), &missing).error.code, "no_data");

    let io = CorpusError::Io {
        path: PathBuf::from("/data"),
        source: std::io::Error::other("disk"),
    };
    assert_eq!(map_corpus_error("r".into(), &io).error.code, "internal_error");
}

#[test]
fn shared_corpus_swaps_without_touching_held_snapshots() {
    let analyzer = analyzer();
    let shared = SharedCorpus::new(Some(sample_corpus(&analyzer)));
    let before = shared.current().expect("loaded");

    let replacement = Corpus::build(
        &analyzer,
        vec![SourceDocument::new("new.txt", "enak")],
    )
    .expect("corpus");
    shared.replace(replacement);

    assert_eq!(before.len(), 4);
    assert_eq!(shared.current().expect("loaded").len(), 1);
}

#[tokio::test]
async fn health_reports_loaded_corpus() {
    let (status, json) = get_json(build_app(loaded_state()), "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["documents"], 4);
    assert!(json["meta"]["request_id"].is_string());
}

#[tokio::test]
async fn health_is_degraded_without_corpus() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let app = build_app(state_with(None, tmp.path()));
    let (status, json) = get_json(app, "/api/v1/health").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["data"]["status"], "degraded");
}

#[tokio::test]
async fn request_id_header_is_echoed() {
    let response = build_app(loaded_state())
        .oneshot(
            Request::builder()
                .uri("/api/v1/health")
                .header("x-request-id", "trace-42")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");
    assert_eq!(
        response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok()),
        Some("trace-42")
    );
}

#[tokio::test]
async fn summary_counts_categories() {
    let (status, json) = get_json(build_app(loaded_state()), "/api/v1/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 4);

    let categories = json["data"]["categories"].as_array().expect("categories");
    assert_eq!(categories.len(), 4);
    let negative = categories
        .iter()
        .find(|c| c["category"] == "NEGATIVE")
        .expect("negative row");
    assert_eq!(negative["count"], 2);
    assert!((negative["percentage"].as_f64().expect("pct") - 50.0).abs() < 1e-9);
}

#[tokio::test]
async fn summary_without_corpus_is_no_data() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let app = build_app(state_with(None, tmp.path()));
    let (status, json) = get_json(app, "/api/v1/summary").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "no_data");
}

#[tokio::test]
async fn documents_filter_by_category_and_limit() {
    let app = build_app(loaded_state());
    let (status, json) = get_json(app.clone(), "/api/v1/documents?category=negative").await;
    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = json["data"]
        .as_array()
        .expect("data array")
        .iter()
        .filter_map(|d| d["id"].as_i64())
        .collect();
    assert_eq!(ids, vec![1, 4]);

    let (_, json) = get_json(app, "/api/v1/documents?limit=1").await;
    assert_eq!(json["data"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn documents_reject_unknown_category() {
    let (status, json) =
        get_json(build_app(loaded_state()), "/api/v1/documents?category=neutral").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");
}

#[tokio::test]
async fn document_by_id() {
    let app = build_app(loaded_state());
    let (status, json) = get_json(app.clone(), "/api/v1/documents/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["file_name"], "002.txt");
    assert_eq!(json["data"]["category"], "POSITIVE");
    assert_eq!(json["data"]["scores"]["positive"], 1.0);

    let (status, json) = get_json(app, "/api/v1/documents/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "not_found");
}

#[tokio::test]
async fn search_ranks_matches() {
    let (status, json) = get_json(build_app(loaded_state()), "/api/v1/search?q=mahal").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["query"], "mahal");
    assert_eq!(json["data"]["total"], 2);

    let results = json["data"]["results"].as_array().expect("results");
    assert_eq!(results[0]["file_name"], "001.txt");
    let scores: Vec<f64> = results
        .iter()
        .filter_map(|r| r["relevance_score"].as_f64())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    assert!(scores.iter().all(|s| *s > 0.0));
}

#[tokio::test]
async fn search_limit_truncates_but_reports_total() {
    let (_, json) = get_json(build_app(loaded_state()), "/api/v1/search?q=mahal&limit=1").await;
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(json["data"]["results"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn search_requires_query() {
    let app = build_app(loaded_state());
    let (status, json) = get_json(app.clone(), "/api/v1/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "bad_request");

}

#[tokio::test]
async fn blank_query_returns_empty_list() {
    let (status, json) = get_json(build_app(loaded_state()), "/api/v1/search?q=%20%20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["query"], "");
    assert_eq!(json["data"]["total"], 0);
    assert_eq!(json["data"]["results"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn stopword_query_returns_empty_list() {
    let (status, json) = get_json(build_app(loaded_state()), "/api/v1/search?q=yang").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 0);
    assert_eq!(json["data"]["results"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn reload_swaps_in_directory_contents() {
    let tmp = tempfile::tempdir().expect("tempdir");
    std::fs::write(tmp.path().join("a.txt"), "Sambalnya enak").expect("write");
    std::fs::write(tmp.path().join("b.txt"), "Mohon tambah menu").expect("write");

    let app = build_app(state_with(None, tmp.path()));
    let (status, json) = send(app.clone(), Method::POST, "/api/v1/reload").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["documents"], 2);
    assert_eq!(json["data"]["summary"]["suggestion"], 1);

    let (status, json) = get_json(app, "/api/v1/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["documents"], 2);
}

#[tokio::test]
async fn reload_waits_for_in_flight_reload() {
    let tmp = tempfile::tempdir().expect("tempdir");
    std::fs::write(tmp.path().join("a.txt"), "Sambalnya enak").expect("write");
    let state = state_with(None, tmp.path());
    let app = build_app(state.clone());

    let guard = state.corpus.begin_reload().await;
    let pending = tokio::spawn(send(app, Method::POST, "/api/v1/reload"));
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(!pending.is_finished());
    assert!(state.corpus.current().is_none());

    drop(guard);
    let (status, json) = pending.await.expect("reload task");
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["documents"], 1);
    assert_eq!(state.corpus.current().expect("loaded").len(), 1);
}

#[tokio::test]
async fn failed_reload_keeps_previous_corpus() {
    let app = build_app(loaded_state());
    let (status, json) = send(app.clone(), Method::POST, "/api/v1/reload").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "no_data");

    let (status, json) = get_json(app, "/api/v1/summary").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["total"], 4);
}
