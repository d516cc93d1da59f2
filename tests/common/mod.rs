#![allow(dead_code)]

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use learnflow::catalog::CatalogStore;
use learnflow::config::LlmConfig;
use learnflow::error::{LearnFlowError, Result};
use learnflow::llm::{ChatBackend, ChatRequest, LlmClient};
use learnflow::server::AppState;

pub const QUESTIONS_JSON: &str = r#"```json
[
  {"question": "What does 'mercado' mean?", "options": ["Market", "Street", "House", "Car"], "correct_answer": 0, "explanation": "'Mercado' means 'market'."},
  {"question": "Which word means 'fruit'?", "options": ["Pan", "Fruta", "Leche", "Queso"], "correct_answer": 1, "explanation": "'Fruta' means 'fruit'."}
]
```"#;

pub const TRANSLATION_JSON: &str = r#"{"translation": "market", "pronunciation": "meɾˈkaðo", "definition": "a place to buy food", "example": "Voy al mercado."}"#;

/// In-process backend returning a fixed reply and counting calls
pub struct ScriptedBackend {
    reply: Option<String>,
    calls: AtomicUsize,
}

impl ScriptedBackend {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Some(reply.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    async fn complete(&self, _request: ChatRequest) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.reply
            .clone()
            .ok_or_else(|| LearnFlowError::Generation("service unavailable".to_string()))
    }
}

pub fn sample_catalog() -> &'static str {
    r#"{
  "videos": [
    {
      "id": "market-tour",
      "title": "A Tour of the Market",
      "url": "/videos/market-tour.mp4",
      "thumbnail": "/videos/market-tour.jpg",
      "language": "es",
      "difficulty": "beginner",
      "duration": 95,
      "description": "Shopping for fruit at a local market",
      "subtitles": [
        {
          "start": 0.0,
          "end": 2.5,
          "text_target": "Hola",
          "text_native": "Hello",
          "words": [
            {"word": "Hola", "translation": "Hello", "pronunciation": "ˈola"}
          ]
        },
        {
          "start": 2.5,
          "end": 4.0,
          "text_target": "mundo",
          "text_native": "world",
          "words": [
            {"word": "mundo", "translation": "world", "pronunciation": "ˈmundo", "definition": "the earth", "example": "El mundo es grande."}
          ]
        }
      ]
    },
    {
      "id": "cafe-order",
      "title": "Ordering Coffee",
      "url": "/videos/cafe-order.mp4",
      "language": "fr",
      "difficulty": "intermediate",
      "duration": 60,
      "subtitles": [
        {"start": 0.0, "end": 3.0, "text_target": "Un café, s'il vous plaît.", "text_native": "A coffee, please.", "words": []}
      ]
    },
    {
      "id": "no-subtitles",
      "title": "Silent Film",
      "url": "/videos/silent.mp4",
      "language": "es",
      "difficulty": "advanced",
      "duration": 30,
      "subtitles": []
    }
  ]
}"#
}

/// Write the sample catalog into `dir` and return its path
pub fn write_sample_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("videos.json");
    std::fs::write(&path, sample_catalog()).expect("failed to write sample catalog");
    path
}

pub fn app_state(catalog_path: &Path, backend: Arc<ScriptedBackend>) -> AppState {
    let catalog = Arc::new(CatalogStore::new(catalog_path));
    let llm = Arc::new(LlmClient::new(backend, LlmConfig::default()));
    AppState::new(catalog, llm)
}
