//! JSON body extractor for Axum
//!
//! `ApiJson<T>` works like `axum::Json<T>`, but a body that cannot be
//! parsed is answered with the standard envelope and status 400 instead of
//! axum's plain text rejection. A request without a JSON content type is
//! read as an empty object. Field rules are not checked here; handlers pass
//! the parsed body to the domain, which validates in its own order.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use super::ApiError;

/// An extractor that deserializes a JSON request body.
///
/// ```ignore
/// async fn handler(ApiJson(body): ApiJson<CreateUserRequest>) {
///     // `body` parsed; the domain decides whether it is valid
/// }
/// ```
pub struct ApiJson<T>(pub T);

/// `ApiJson` extraction failure, always answered with 400.
pub struct ApiJsonRejection {
    detail: String,
}

impl From<JsonRejection> for ApiJsonRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            detail: rejection.body_text(),
        }
    }
}

impl From<serde_json::Error> for ApiJsonRejection {
    fn from(err: serde_json::Error) -> Self {
        Self {
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiJsonRejection {
    fn into_response(self) -> Response {
        debug!("Rejected request body: {}", self.detail);

        ApiError {
            status: StatusCode::BAD_REQUEST,
            message: "invalid request body".to_string(),
            detail: Some(self.detail),
        }
        .into_response()
    }
}

/// `application/json`, with or without parameters such as `charset`.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiJsonRejection;

    async fn from_request(
        req: axum::extract::Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            debug!("Request body without JSON content type, reading it as an empty object");
            let value = serde_json::from_value(Value::Object(Map::new()))?;
            return Ok(ApiJson(value));
        }

        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Debug, Deserialize)]
    struct TestBody {
        #[allow(dead_code)]
        name: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    struct StrictBody {
        #[allow(dead_code)]
        name: String,
    }

    async fn handler(ApiJson(_body): ApiJson<TestBody>) -> &'static str {
        "ok"
    }

    async fn strict_handler(ApiJson(_body): ApiJson<StrictBody>) -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    async fn send(req: Request<Body>) -> axum::http::Response<Body> {
        app().oneshot(req).await.unwrap()
    }

    async fn json_body(resp: axum::http::Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn valid_body_returns_ok() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name": "Alice"}"#))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_json_returns_envelope() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from("not json"))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = json_body(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "invalid request body");
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn wrong_field_type_returns_400() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name": 5}"#))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = json_body(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "invalid request body");
    }

    #[tokio::test]
    async fn missing_content_type_reads_empty_object() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .body(Body::from(r#"{"name": "Alice"}"#))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn non_json_content_type_reads_empty_object() {
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "text/plain")
            .body(Body::from("not json"))
            .unwrap();

        let resp = send(req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn empty_object_that_does_not_fit_returns_400() {
        let app = Router::new().route("/strict", post(strict_handler));
        let req = Request::builder()
            .method("POST")
            .uri("/strict")
            .body(Body::empty())
            .unwrap();

        let resp = app.oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(resp).await["success"], false);
    }

    #[test]
    fn json_content_type_allows_parameters() {
        let mut headers = HeaderMap::new();
        assert!(!has_json_content_type(&headers));

        headers.insert(CONTENT_TYPE, "application/json; charset=utf-8".parse().unwrap());
        assert!(has_json_content_type(&headers));

        headers.insert(CONTENT_TYPE, "text/html".parse().unwrap());
        assert!(!has_json_content_type(&headers));
    }
}
