use serde::{Deserialize, Serialize};
use crate::structs::ai::chat_message::ChatMessage;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OllamaResponse {
    #[serde(default)]
    pub model: Option<String>,
    pub message: ChatMessage,
    #[serde(default)]
    pub done: bool,
}
