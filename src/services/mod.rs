pub mod ai_providers;
pub mod client_factory;
pub mod devops_assistant;
pub mod pipeline_analyzer_tools;
pub mod response_parser;
