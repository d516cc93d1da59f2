//! HTTP API: video catalog, quizzes and word translation

pub mod handlers;

use axum::{
    Json, Router,
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{error, info, warn};

use crate::catalog::CatalogStore;
use crate::config::ServerConfig;
use crate::error::{LearnFlowError, Result};
use crate::llm::LlmClient;
use crate::quiz::QuizService;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub quiz: Arc<QuizService>,
    pub llm: Arc<LlmClient>,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogStore>, llm: Arc<LlmClient>) -> Self {
        let quiz = Arc::new(QuizService::new(catalog.clone(), llm.clone()));
        Self { catalog, quiz, llm }
    }
}

/// Error body returned to clients: `{"detail": "..."}`
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl ApiError {
    /// Map a domain error, prefixing unexpected failures with `context`
    pub fn from_domain(err: LearnFlowError, context: &str) -> Self {
        match err {
            LearnFlowError::NotFound(message) => Self::NotFound(message),
            other => {
                error!("{}: {}", context, other);
                Self::Internal(format!("{}: {}", context, other))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            ApiError::Internal(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail),
        };
        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Videos
        .route("/api/videos", get(handlers::list_videos))
        .route("/api/videos/{id}", get(handlers::get_video))
        .route("/api/videos/{id}/quiz", get(handlers::get_video_quiz))
        // Quiz & translation
        .route("/api/quiz/generate", post(handlers::generate_quiz))
        .route("/api/translate", post(handlers::translate))
        .with_state(state)
}

/// CORS policy for the web frontend. Credentials are allowed, so methods and
/// headers are mirrored rather than wildcarded.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub async fn serve(config: &ServerConfig, state: AppState) -> Result<()> {
    let app = router(state).layer(cors_layer(&config.cors_origins));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| LearnFlowError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
