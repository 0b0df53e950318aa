pub mod agent_response;
pub mod chat_message;
pub mod ollama;
pub mod openai;
