pub mod ollama_request;
pub mod ollama_response;
