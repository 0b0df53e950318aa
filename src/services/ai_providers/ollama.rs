use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::{DEFAULT_MAX_TOKENS, OLLAMA_DEFAULT_ENDPOINT};
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::chat_message::ChatMessage;
use crate::structs::ai::ollama::ollama_request::{OllamaOptions, OllamaRequest};
use crate::structs::ai::ollama::ollama_response::OllamaResponse;
use crate::traits::chat_client::ChatClient;

/// Local model server speaking Ollama's native `/api/chat`. No API key.
#[derive(Clone)]
pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: Option<f32>,
}

impl OllamaProvider {
    pub fn new(client: Client, endpoint: Option<&str>, model: String) -> Self {
        Self {
            client,
            base_url: endpoint.unwrap_or(OLLAMA_DEFAULT_ENDPOINT).trim_end_matches('/').to_string(),
            model,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_request(&self, messages: &[ChatMessage]) -> OllamaRequest {
        OllamaRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            stream: false,
            format: Some("json".to_string()),
            options: OllamaOptions {
                num_predict: self.max_tokens,
                temperature: self.temperature,
            },
        }
    }
}

#[async_trait]
impl ChatClient for OllamaProvider {
    fn provider_name(&self) -> String {
        "Ollama".to_string()
    }

    fn model(&self) -> String {
        self.model.clone()
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, AiProviderError> {
        log::info!("📦 Request model: {}", self.model);

        let url = format!("{}/api/chat", self.base_url);
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&self.get_request(messages))
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Ollama request failed with HTTP {}: {}", status, error_text);
            return Err(AiProviderError::from_status(status.as_u16(), error_text));
        }

        let body: OllamaResponse = response
            .json()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))?;

        Ok(body.message.content)
    }
}
