use std::time::Duration;
use reqwest::Client;
use crate::config::constants::MAX_TOOL_ROUNDS;
use crate::enums::ai_provider_error::AiProviderError;
use crate::services::pipeline_analyzer_tools::PipelineAnalyzerTools;
use crate::structs::ai::chat_message::ChatMessage;
use crate::structs::ai::openai::openai_message::OpenAIMessage;
use crate::structs::ai::openai::openai_request::OpenAIRequest;
use crate::structs::ai::openai::openai_response::OpenAIResponse;

const EMPTY_REPLY: &str = "{}";

/// How the API key travels: OpenAI and GitHub Models use a bearer token,
/// Azure OpenAI an `api-key` header.
#[derive(Clone)]
pub enum ApiKeyHeader {
    Bearer(String),
    AzureApiKey(String),
}

/// The `/chat/completions` wire protocol shared by OpenAI, Azure OpenAI and
/// GitHub Models.
#[derive(Clone)]
pub struct ChatCompletionsTransport {
    client: Client,
    url: String,
    api_key: ApiKeyHeader,
    model: Option<String>,
    max_tokens: u32,
    temperature: Option<f32>,
    enable_tools: bool,
}

pub fn build_http_client(timeout_secs: Option<u64>) -> Result<Client, AiProviderError> {
    let mut builder = Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build().map_err(|e| AiProviderError::NetworkError(format!("Failed to build HTTP client: {e}")))
}

impl ChatCompletionsTransport {
    pub fn new(client: Client, url: String, api_key: ApiKeyHeader, model: Option<String>) -> Self {
        Self {
            client,
            url,
            api_key,
            model,
            max_tokens: crate::config::constants::DEFAULT_MAX_TOKENS,
            temperature: None,
            enable_tools: false,
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

    pub fn with_tools(mut self, enable_tools: bool) -> Self {
        self.enable_tools = enable_tools;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    fn get_request(&self, messages: Vec<OpenAIMessage>, offer_tools: bool) -> OpenAIRequest {
        OpenAIRequest {
            model: self.model.clone(),
            messages,
            max_tokens: Some(self.max_tokens),
            temperature: self.temperature,
            tools: offer_tools.then(|| PipelineAnalyzerTools::tool_definitions().clone()),
            stream: false,
        }
    }

    async fn make_request(&self, request_body: &OpenAIRequest) -> Result<OpenAIResponse, AiProviderError> {
        let request = self
            .client
            .post(&self.url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");

        let request = match &self.api_key {
            ApiKeyHeader::Bearer(key) => request.header("Authorization", format!("Bearer {key}")),
            ApiKeyHeader::AzureApiKey(key) => request.header("api-key", key),
        };

        let response = request
            .json(request_body)
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Chat completion failed with HTTP {}: {}", status, error_text);
            return Err(AiProviderError::from_status(status.as_u16(), error_text));
        }

        response
            .json::<OpenAIResponse>()
            .await
            .map_err(|e| AiProviderError::SerializationError(e.to_string()))
    }

    /// Sends the conversation and returns the reply text. With tools enabled
    /// the model may request tool calls, which run locally and are fed back,
    /// for at most `MAX_TOOL_ROUNDS` rounds; the last round offers no tools.
    /// A reply without text (no choices, null content) comes back as `{}` so
    /// the response parser decides what it means.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AiProviderError> {
        let mut conversation: Vec<OpenAIMessage> = messages.iter().map(OpenAIMessage::from).collect();
        let mut round = 0;

        loop {
            let offer_tools = self.enable_tools && round < MAX_TOOL_ROUNDS;
            let request_body = self.get_request(conversation.clone(), offer_tools);

            log::debug!("📦 Chat completion round {} ({} messages)", round + 1, request_body.messages.len());

            let response = self.make_request(&request_body).await?;
            let Some(message) = response.choices.into_iter().next().map(|choice| choice.message) else {
                log::warn!("Chat completion returned no choices");
                return Ok(EMPTY_REPLY.to_string());
            };

            let tool_calls = message.tool_calls.clone().unwrap_or_default();
            if offer_tools && !tool_calls.is_empty() {
                conversation.push(message);
                for call in tool_calls {
                    let output = PipelineAnalyzerTools::invoke_tool(&call.function.name, &call.function.arguments);
                    conversation.push(OpenAIMessage::tool_result(call.id, output));
                }
                round += 1;
                continue;
            }

            if !tool_calls.is_empty() {
                log::warn!("Ignoring {} tool calls after {} rounds", tool_calls.len(), round);
            }

            return Ok(message.content.unwrap_or_else(|| {
                log::warn!("Chat completion returned no content");
                EMPTY_REPLY.to_string()
            }));
        }
    }
}
