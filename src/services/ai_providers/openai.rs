use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::OPENAI_BASE_URL;
use crate::enums::ai_provider_error::AiProviderError;
use crate::services::ai_providers::chat_completions::{ApiKeyHeader, ChatCompletionsTransport};
use crate::structs::ai::chat_message::ChatMessage;
use crate::traits::chat_client::ChatClient;

#[derive(Clone)]
pub struct OpenAIProvider {
    transport: ChatCompletionsTransport,
    model: String,
}

impl OpenAIProvider {
    pub fn new(client: Client, api_key: String, model: String) -> Self {
        Self::with_base_url(client, api_key, model, OPENAI_BASE_URL)
    }

    pub fn with_base_url(client: Client, api_key: String, model: String, base_url: &str) -> Self {
        let url = format!("{}/chat/completions", base_url.trim_end_matches('/'));
        Self {
            transport: ChatCompletionsTransport::new(client, url, ApiKeyHeader::Bearer(api_key), Some(model.clone())),
            model,
        }
    }

    pub fn configure(mut self, configure: impl FnOnce(ChatCompletionsTransport) -> ChatCompletionsTransport) -> Self {
        self.transport = configure(self.transport);
        self
    }

    pub fn url(&self) -> &str {
        self.transport.url()
    }
}

#[async_trait]
impl ChatClient for OpenAIProvider {
    fn provider_name(&self) -> String {
        "OpenAI".to_string()
    }

    fn model(&self) -> String {
        self.model.clone()
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, AiProviderError> {
        log::info!("📦 Request model: {}", self.model);
        self.transport.complete(messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_and_custom_base_urls() {
        let provider = OpenAIProvider::new(Client::new(), "sk".to_string(), "gpt-4o-mini".to_string());
        assert_eq!(provider.url(), "https://api.openai.com/v1/chat/completions");

        let provider = OpenAIProvider::with_base_url(Client::new(), "sk".to_string(), "m".to_string(), "http://proxy.local/v1/");
        assert_eq!(provider.url(), "http://proxy.local/v1/chat/completions");
        assert_eq!(provider.provider_name(), "OpenAI");
    }
}
