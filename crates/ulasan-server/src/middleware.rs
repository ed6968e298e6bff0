use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LEN: usize = 128;

/// Newtype wrapping a request ID string, stored as a request extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Axum middleware that extracts or generates a request ID.
///
/// A caller-supplied `x-request-id` is reused when it is short printable ASCII;
/// otherwise a new `UUIDv4` is generated. The ID is:
/// - Inserted into request extensions as [`RequestId`]
/// - Set on the response as the `x-request-id` header
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = resolve_request_id(req.headers().get(REQUEST_ID_HEADER));

    req.extensions_mut().insert(RequestId(id.clone()));

    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }

    res
}

fn resolve_request_id(header: Option<&HeaderValue>) -> String {
    header
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|id| {
            !id.is_empty()
                && id.len() <= MAX_REQUEST_ID_LEN
                && id.bytes().all(|b| b.is_ascii_graphic())
        })
        .map_or_else(|| Uuid::new_v4().to_string(), String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reuses_valid_caller_id() {
        let header = HeaderValue::from_static("req-123");
        assert_eq!(resolve_request_id(Some(&header)), "req-123");
    }

    #[test]
    fn generates_id_when_missing() {
        let id = resolve_request_id(None);
        assert!(Uuid::parse_str(&id).is_ok());
    }

    #[test]
    fn replaces_oversized_or_blank_ids() {
        let long = HeaderValue::from_str(&"a".repeat(MAX_REQUEST_ID_LEN + 1)).unwrap();
        assert!(Uuid::parse_str(&resolve_request_id(Some(&long))).is_ok());

        let blank = HeaderValue::from_static("   ");
        assert!(Uuid::parse_str(&resolve_request_id(Some(&blank))).is_ok());

        let spaced = HeaderValue::from_static("two words");
        assert!(Uuid::parse_str(&resolve_request_id(Some(&spaced))).is_ok());
    }
}
