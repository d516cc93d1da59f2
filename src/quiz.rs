use std::sync::Arc;
use tracing::{info, warn};

use crate::catalog::CatalogStore;
use crate::error::{LearnFlowError, Result};
use crate::llm::LlmClient;
use crate::models::Quiz;

pub const VIDEO_NOT_FOUND: &str = "Video not found";
pub const TRANSCRIPT_NOT_FOUND: &str = "Video transcript not found";

/// Fetch-or-generate-then-persist coordination of a video's quiz
pub struct QuizService {
    catalog: Arc<CatalogStore>,
    llm: Arc<LlmClient>,
    question_count: usize,
}

impl QuizService {
    pub fn new(catalog: Arc<CatalogStore>, llm: Arc<LlmClient>) -> Self {
        let question_count = llm.config().question_count;
        Self {
            catalog,
            llm,
            question_count,
        }
    }

    /// Return the stored quiz for `video_id`, generating and saving one if there is none
    pub async fn get_or_create_quiz(&self, video_id: &str) -> Result<Quiz> {
        if let Some(quiz) = self.catalog.get_quiz(video_id).await {
            info!("Using stored quiz for video {}", video_id);
            return Ok(quiz);
        }

        self.create_quiz(video_id).await
    }

    /// Generate a fresh quiz from the catalog transcript, replacing any stored one
    pub async fn create_quiz(&self, video_id: &str) -> Result<Quiz> {
        let video = self
            .catalog
            .get_video(video_id)
            .await
            .ok_or_else(|| LearnFlowError::NotFound(VIDEO_NOT_FOUND.to_string()))?;

        let transcript = video.transcript();
        if transcript.is_empty() {
            return Err(LearnFlowError::NotFound(TRANSCRIPT_NOT_FOUND.to_string()));
        }

        Ok(self.generate_and_save(video_id, &transcript, &video.language).await)
    }

    /// Generate a quiz from an explicit transcript, falling back to the
    /// catalog transcript when `transcript` is empty
    pub async fn generate_for_transcript(&self, video_id: &str, transcript: &str, language: &str) -> Result<Quiz> {
        let transcript = if transcript.is_empty() {
            self.catalog.get_transcript(video_id).await
        } else {
            transcript.to_string()
        };

        if transcript.is_empty() {
            return Err(LearnFlowError::NotFound(TRANSCRIPT_NOT_FOUND.to_string()));
        }

        Ok(self.generate_and_save(video_id, &transcript, language).await)
    }

    async fn generate_and_save(&self, video_id: &str, transcript: &str, language: &str) -> Quiz {
        info!("Generating quiz for video {} ({})", video_id, language);

        let questions = self.llm.generate_quiz(transcript, language, self.question_count).await;
        let quiz = Quiz::new(video_id, questions);

        if !self.catalog.save_quiz(video_id, quiz.clone()).await {
            warn!("Quiz for video {} was not persisted; it will be regenerated next time", video_id);
        }

        quiz
    }
}
