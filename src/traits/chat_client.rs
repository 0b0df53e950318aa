use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::chat_message::ChatMessage;

/// One chat-completion backend. Implementations send the messages in order
/// and return the assistant's reply text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatClient: Send + Sync {

    fn provider_name(&self) -> String;

    fn model(&self) -> String;

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, AiProviderError>;
}
