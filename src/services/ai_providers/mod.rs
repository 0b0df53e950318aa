pub mod chat_completions;
pub mod openai;
pub mod azure_openai;
pub mod ollama;
pub mod github_models;
