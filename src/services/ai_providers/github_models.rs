use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::GITHUB_MODELS_BASE_URL;
use crate::enums::ai_provider_error::AiProviderError;
use crate::services::ai_providers::chat_completions::{ApiKeyHeader, ChatCompletionsTransport};
use crate::structs::ai::chat_message::ChatMessage;
use crate::traits::chat_client::ChatClient;

/// GitHub Models catalog: OpenAI wire format behind a GitHub token.
#[derive(Clone)]
pub struct GitHubModelsProvider {
    transport: ChatCompletionsTransport,
    model: String,
}

impl GitHubModelsProvider {
    pub fn new(client: Client, api_key: String, model: String, endpoint: Option<&str>) -> Self {
        let base_url = endpoint.unwrap_or(GITHUB_MODELS_BASE_URL);
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
impl ChatClient for GitHubModelsProvider {
    fn provider_name(&self) -> String {
        "GitHubModels".to_string()
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
    fn defaults_to_models_catalog() {
        let provider = GitHubModelsProvider::new(Client::new(), "ghp".to_string(), "gpt-4o".to_string(), None);
        assert_eq!(provider.url(), "https://models.inference.ai.azure.com/chat/completions");
    }
}
