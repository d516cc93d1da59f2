// Text-generation client
//
// The remote model is an untrusted text source: output format is requested,
// never guaranteed. `LlmClient` turns every failure mode (network, service
// error, unparsable output) into a fixed fallback value, so callers always
// get usable data.
//
// - openai: chat completions backend over HTTP
// - parse: fence stripping and strict decoding of model output
// - prompts: instruction builders

pub mod openai;
pub mod parse;
pub mod prompts;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub use openai::OpenAiBackend;
pub use parse::{parse_questions, parse_translation, strip_code_fences, ParseError};
use crate::config::LlmConfig;
use crate::error::Result;
use crate::models::{QuizQuestion, Translation};

/// A single chat completion request: one system message, one user message
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: String,
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Remote text-generation service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send the request and return the raw text of the model's reply
    async fn complete(&self, request: ChatRequest) -> Result<String>;
}

/// Question returned whenever quiz generation fails
pub fn fallback_questions() -> Vec<QuizQuestion> {
    vec![QuizQuestion {
        question: "What is the main topic of this video?".to_string(),
        options: vec![
            "Food and markets".to_string(),
            "Sports".to_string(),
            "Technology".to_string(),
            "Travel".to_string(),
        ],
        correct_answer: 0,
        explanation: "The video discusses food and markets.".to_string(),
    }]
}

pub struct LlmClient {
    backend: Arc<dyn ChatBackend>,
    config: LlmConfig,
}

impl LlmClient {
    pub fn new(backend: Arc<dyn ChatBackend>, config: LlmConfig) -> Self {
        Self { backend, config }
    }

    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Generate `count` multiple choice questions about `transcript`.
    ///
    /// Never fails and never returns an empty list.
    pub async fn generate_quiz(&self, transcript: &str, language: &str, count: usize) -> Vec<QuizQuestion> {
        let request = ChatRequest {
            model: self.config.quiz_model.clone(),
            system: prompts::QUIZ_SYSTEM_PROMPT.to_string(),
            prompt: prompts::build_quiz_prompt(transcript, language, count),
            temperature: self.config.quiz_temperature,
            max_tokens: self.config.quiz_max_tokens,
        };

        let raw = match self.backend.complete(request).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Error generating quiz: {}", e);
                return fallback_questions();
            }
        };

        match parse_questions(&raw) {
            Ok(questions) => {
                info!("Generated {} quiz questions ({})", questions.len(), language);
                questions
            }
            Err(e) => {
                warn!("Error generating quiz: {}", e);
                fallback_questions()
            }
        }
    }

    /// Translate a word or phrase. On any failure the input text is echoed back.
    pub async fn translate(&self, text: &str, from_lang: &str, to_lang: &str) -> Translation {
        let request = ChatRequest {
            model: self.config.translate_model.clone(),
            system: prompts::TRANSLATE_SYSTEM_PROMPT.to_string(),
            prompt: prompts::build_translate_prompt(text, from_lang, to_lang),
            temperature: self.config.translate_temperature,
            max_tokens: self.config.translate_max_tokens,
        };

        let raw = match self.backend.complete(request).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Error translating '{}': {}", text, e);
                return Translation::untranslated(text);
            }
        };

        parse_translation(&raw).unwrap_or_else(|e| {
            warn!("Error translating '{}': {}", text, e);
            Translation::untranslated(text)
        })
    }
}
