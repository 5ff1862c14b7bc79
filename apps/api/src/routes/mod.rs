pub mod health;

use axum::{routing::get, Router};

use crate::enhancement::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/enhance", get(handlers::handle_enhance))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::llm_client::{LlmError, TextGenerator};

    /// Canned generator that counts how often it is called.
    struct StubGenerator {
        reply: Result<&'static str, u16>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.reply {
                Ok(text) => Ok(text.to_string()),
                Err(status) => Err(LlmError::Api {
                    status,
                    message: "quota exceeded for project secret-project-42".to_string(),
                }),
            }
        }
    }

    fn app_with(reply: Result<&'static str, u16>) -> (Router, Arc<StubGenerator>) {
        let generator = Arc::new(StubGenerator {
            reply,
            calls: AtomicUsize::new(0),
        });
        let state = AppState {
            generator: generator.clone(),
        };
        (build_router(state), generator)
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app_with(Ok("unused"));
        let response = send_get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_enhance_blog_end_to_end() {
        let (app, generator) = app_with(Ok(
            "Prompt: Build a **responsive** blog with markdown posts, tags, and an RSS feed.",
        ));
        let response = send_get(
            app,
            "/enhance?prompt=Build%20me%20a%20blog%20with%20markdown%20support",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/plain"));

        let body = body_text(response).await;
        assert!(!body.starts_with("Prompt:"));
        assert!(!body.contains("**"));
        assert_eq!(
            body,
            "Build a responsive blog with markdown posts, tags, and an RSS feed."
        );
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_enhance_short_prompt_is_400_json() {
        let (app, generator) = app_with(Ok("unused"));
        let response = send_get(app, "/enhance?prompt=hi").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(body["error"].is_string());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_enhance_missing_prompt_is_400() {
        let (app, generator) = app_with(Ok("unused"));
        let response = send_get(app, "/enhance").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(body["error"].is_string());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_enhance_repeated_prompt_param_is_400_json() {
        let (app, generator) = app_with(Ok("unused"));
        let response = send_get(
            app,
            "/enhance?prompt=Build%20a%20blog%20engine&prompt=Build%20a%20shop",
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["error"], "Please provide a valid prompt");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_enhance_task_prompt_with_question_words_reaches_generator() {
        let (app, generator) = app_with(Ok("Outline the sections a README should contain."));
        let response = send_get(
            app,
            "/enhance?prompt=Explain%20what%20are%20you%20supposed%20to%20put%20in%20a%20README",
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_enhance_whitespace_prompt_is_400() {
        let (app, generator) = app_with(Ok("unused"));
        let response = send_get(app, "/enhance?prompt=%20%20%20%20%20%20%20").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_enhance_off_topic_is_400() {
        let (app, generator) = app_with(Ok("unused"));
        let response = send_get(app, "/enhance?prompt=who%20are%20you").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("off-topic"));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_enhance_upstream_failure_is_generic_500() {
        let (app, generator) = app_with(Err(429));
        let response = send_get(app, "/enhance?prompt=Design%20a%20logo%20for%20a%20bakery").await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let text = body_text(response).await;
        let body: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(body["error"], "Failed to process prompt");
        assert!(!text.contains("secret-project-42"));
        assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
    }
}
