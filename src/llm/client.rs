use crate::error::{LedgerError, Result};
use crate::llm::types::*;
use log::debug;
use reqwest::Client;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variables checked for an API key, in order.
pub const API_KEY_VARS: [&str; 3] = ["GEMINI_API_KEY", "GOOGLE_API_KEY", "API_KEY"];

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: GEMINI_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn from_env() -> Result<Self> {
        API_KEY_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|key| !key.trim().is_empty())
            .map(Self::new)
            .ok_or(LedgerError::MissingApiKey)
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a single-turn text request and returns the model's reply.
    pub async fn generate_text(&self, system_prompt: Option<&str>, user_text: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let payload = GenerateContentRequest {
            contents: vec![Content::user(user_text)],
            system_instruction: system_prompt.map(Content::user),
            generation_config: GenerationConfig {
                response_mime_type: "text/plain".to_string(),
                temperature: None,
            },
        };

        debug!("Sending generateContent request to model {}", self.model);

        let res = self.client.post(&url).json(&payload).send().await?;
        let status = res.status();

        if !status.is_success() {
            let err_text = res.text().await?;
            return Err(LedgerError::AiService(format!(
                "Gemini API Error (status {}): {}",
                status, err_text
            )));
        }

        let body: GenerateContentResponse = res.json().await?;
        body.first_text()
            .ok_or_else(|| LedgerError::AiService("No text candidates returned".to_string()))
    }
}
