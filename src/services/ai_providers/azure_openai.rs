use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::AZURE_OPENAI_API_VERSION;
use crate::enums::ai_provider_error::AiProviderError;
use crate::services::ai_providers::chat_completions::{ApiKeyHeader, ChatCompletionsTransport};
use crate::structs::ai::chat_message::ChatMessage;
use crate::traits::chat_client::ChatClient;

/// Azure OpenAI routes by deployment name, not model.
#[derive(Clone)]
pub struct AzureOpenAIProvider {
    transport: ChatCompletionsTransport,
    deployment: String,
}

impl AzureOpenAIProvider {
    pub fn new(client: Client, endpoint: &str, api_key: String, deployment: String) -> Self {
        let url = format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            endpoint.trim_end_matches('/'),
            deployment,
            AZURE_OPENAI_API_VERSION
        );
        Self {
            transport: ChatCompletionsTransport::new(client, url, ApiKeyHeader::AzureApiKey(api_key), None),
            deployment,
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
impl ChatClient for AzureOpenAIProvider {
    fn provider_name(&self) -> String {
        "AzureOpenAI".to_string()
    }

    fn model(&self) -> String {
        self.deployment.clone()
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, AiProviderError> {
        log::info!("📦 Request deployment: {}", self.deployment);
        self.transport.complete(messages).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_routes_through_deployment() {
        let provider = AzureOpenAIProvider::new(
            Client::new(),
            "https://contoso.openai.azure.com/",
            "key".to_string(),
            "gpt4o".to_string(),
        );
        assert_eq!(
            provider.url(),
            "https://contoso.openai.azure.com/openai/deployments/gpt4o/chat/completions?api-version=2024-10-21"
        );
        assert_eq!(provider.model(), "gpt4o");
    }
}
