use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::info;

use crate::models::{Quiz, Video};
use crate::quiz::VIDEO_NOT_FOUND;
use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub struct QuizGenerateRequest {
    pub video_id: String,
    #[serde(default)]
    pub transcript: String,
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub from_lang: String,
    pub to_lang: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translation: String,
    pub pronunciation: String,
}

pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Welcome to LearnFlow API" }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

/// GET /api/videos
pub async fn list_videos(State(state): State<AppState>) -> Json<Vec<Video>> {
    Json(state.catalog.list_videos().await)
}

/// GET /api/videos/{id}
pub async fn get_video(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Json<Video>, ApiError> {
    state
        .catalog
        .get_video(&video_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(VIDEO_NOT_FOUND.to_string()))
}

/// GET /api/videos/{id}/quiz - stored quiz, generated on first request
pub async fn get_video_quiz(
    State(state): State<AppState>,
    Path(video_id): Path<String>,
) -> Result<Json<Quiz>, ApiError> {
    state
        .quiz
        .get_or_create_quiz(&video_id)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_domain(e, "Error generating quiz"))
}

/// POST /api/quiz/generate
pub async fn generate_quiz(
    State(state): State<AppState>,
    Json(req): Json<QuizGenerateRequest>,
) -> Result<Json<Quiz>, ApiError> {
    info!("Quiz generation requested for video {}", req.video_id);

    state
        .quiz
        .generate_for_transcript(&req.video_id, &req.transcript, &req.language)
        .await
        .map(Json)
        .map_err(|e| ApiError::from_domain(e, "Error generating quiz"))
}

/// POST /api/translate - definition and example are computed but not returned here
pub async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Json<TranslateResponse> {
    let result = state.llm.translate(&req.text, &req.from_lang, &req.to_lang).await;

    Json(TranslateResponse {
        translation: result.translation,
        pronunciation: result.pronunciation,
    })
}
