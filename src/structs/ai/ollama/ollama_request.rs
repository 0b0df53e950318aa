use serde::{Deserialize, Serialize};
use crate::structs::ai::chat_message::ChatMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub stream: bool,
    /// "json" constrains the model to emit a JSON document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub options: OllamaOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaOptions {
    pub num_predict: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}
