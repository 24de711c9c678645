use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::errors::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(trading_data).fallback(method_not_allowed))
}

/// POST /api/trading-data response. `result` is the model's raw text and is
/// passed through without parsing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TradingDataResponse {
    pub result: String,
}

/// POST /api/trading-data
/// Forwards the body (contents + generationConfig) to the model provider.
#[axum::debug_handler]
pub async fn trading_data(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TradingDataResponse>, AppError> {
    info!("POST /api/trading-data - Requesting model analysis ({} bytes)", body.len());

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejecting trading-data request with malformed body: {}", e);
        AppError::from(e)
    })?;
    debug!(payload = %payload, "trading-data request body");

    let result = state
        .model_provider
        .generate_content(payload)
        .await
        .map_err(|e| {
            error!("Error while getting trading data: {}", e);
            AppError::Upstream(e)
        })?;

    info!("Model analysis returned ({} chars)", result.len());
    Ok(Json(TradingDataResponse { result }))
}

async fn method_not_allowed() -> AppError {
    warn!("Rejected non-POST request to /api/trading-data");
    AppError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::create_app;
    use crate::errors::ModelError;
    use crate::external::model_provider::ModelProvider;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use axum::response::Response;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FixedModel {
        text: String,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ModelProvider for FixedModel {
        async fn generate_content(&self, _payload: Value) -> Result<String, ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.clone())
        }
    }

    struct FailingModel;

    #[async_trait]
    impl ModelProvider for FailingModel {
        async fn generate_content(&self, _payload: Value) -> Result<String, ModelError> {
            Err(ModelError::Api {
                status: 403,
                body: "API key not valid".to_string(),
            })
        }
    }

    /// Returns the prompt text it received so forwarding can be observed.
    struct EchoModel;

    #[async_trait]
    impl ModelProvider for EchoModel {
        async fn generate_content(&self, payload: Value) -> Result<String, ModelError> {
            Ok(payload["contents"][0]["parts"][0]["text"]
                .as_str()
                .unwrap_or_default()
                .to_string())
        }
    }

    fn app_with(provider: Arc<dyn ModelProvider>) -> Router {
        create_app(AppState {
            model_provider: provider,
        })
    }

    async fn send(app: Router, method: Method, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri("/api/trading-data")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        let response: Response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    const SAMPLE: &str = r#"[{"pair":"EURUSD","sentiment":"Bullish","description":"d","details":"dd","fundamentalDrivers":["a"],"sentimentIndicators":["b"]}]"#;

    #[tokio::test]
    async fn test_post_wraps_model_text() {
        let app = app_with(Arc::new(FixedModel {
            text: SAMPLE.to_string(),
            calls: AtomicUsize::new(0),
        }));

        let (status, body) = send(app, Method::POST, r#"{"contents":[]}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "result": SAMPLE }));
    }

    #[tokio::test]
    async fn test_body_is_forwarded_verbatim() {
        let app = app_with(Arc::new(EchoModel));
        let payload = json!({
            "contents": [{ "role": "user", "parts": [{ "text": "analyse EURUSD" }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        });

        let (status, body) = send(app, Method::POST, &payload.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"], "analyse EURUSD");
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() {
        let app = app_with(Arc::new(EchoModel));

        let (status, body) = send(app, Method::GET, "").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "message": "Method not allowed" }));
    }

    #[tokio::test]
    async fn test_other_methods_are_rejected() {
        for method in [Method::PUT, Method::DELETE, Method::PATCH] {
            let (status, body) = send(app_with(Arc::new(EchoModel)), method, "{}").await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body["message"], "Method not allowed");
        }
    }

    #[tokio::test]
    async fn test_malformed_body_returns_400_envelope() {
        for raw in ["not json", "{\"contents\": [", ""] {
            let (status, body) = send(app_with(Arc::new(EchoModel)), Method::POST, raw).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            let message = body["message"].as_str().unwrap();
            assert!(message.starts_with("Invalid JSON body"), "got {message}");
        }
    }

    #[tokio::test]
    async fn test_model_failure_returns_400_with_message() {
        let app = app_with(Arc::new(FailingModel));

        let (status, body) = send(app, Method::POST, "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["message"],
            "Model API error (HTTP 403): API key not valid"
        );
    }

    #[tokio::test]
    async fn test_repeated_posts_yield_same_envelope() {
        let model = Arc::new(FixedModel {
            text: SAMPLE.to_string(),
            calls: AtomicUsize::new(0),
        });
        let app = app_with(model.clone());

        let first = send(app.clone(), Method::POST, r#"{"contents":[]}"#).await;
        let second = send(app.clone(), Method::POST, r#"{"contents":[]}"#).await;
        let third = send(app, Method::POST, r#"{"contents":[]}"#).await;

        assert_eq!(first, second);
        assert_eq!(second, third);
        assert_eq!(model.calls.load(Ordering::SeqCst), 3);
    }
}
