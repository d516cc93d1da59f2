use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::error::{LearnFlowError, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the HTTP API to
    pub host: String,
    /// Port to bind the HTTP API to
    pub port: u16,
    /// Origins allowed by the CORS layer (the web frontend)
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Path to the JSON catalog holding every video record
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// OpenAI-compatible chat completions endpoint
    pub endpoint: String,
    /// Model used for quiz generation
    pub quiz_model: String,
    /// Model used for word translation
    pub translate_model: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    /// Request timeout for a single completion call
    pub timeout_secs: u64,
    /// Sampling temperature for quiz generation
    pub quiz_temperature: f32,
    /// Output token cap for quiz generation
    pub quiz_max_tokens: u32,
    /// Sampling temperature for translation
    pub translate_temperature: f32,
    /// Output token cap for translation
    pub translate_max_tokens: u32,
    /// Number of questions requested per quiz
    pub question_count: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/videos.json"),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com/v1/chat/completions".to_string(),
            quiz_model: "gpt-4".to_string(),
            translate_model: "gpt-3.5-turbo".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            timeout_secs: 60,
            quiz_temperature: 0.7,
            quiz_max_tokens: 1500,
            translate_temperature: 0.3,
            translate_max_tokens: 300,
            question_count: 5,
        }
    }
}

impl LlmConfig {
    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LearnFlowError::Config(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| LearnFlowError::Config(format!("Failed to parse config file: {}", e)))
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LearnFlowError::Config(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)
            .map_err(|e| LearnFlowError::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }
}
