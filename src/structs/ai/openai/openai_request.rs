use serde::{Deserialize, Serialize};
use serde_json::Value;
use crate::structs::ai::openai::openai_message::OpenAIMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIRequest {
    /// Azure routes by deployment and ignores this field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    pub messages: Vec<OpenAIMessage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Value>,

    pub stream: bool,
}
