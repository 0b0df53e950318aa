pub mod ai_provider_error;
pub mod commands;
pub mod issue_severity;
pub mod output_format;
pub mod pipeline_platform;
pub mod provider_kind;
