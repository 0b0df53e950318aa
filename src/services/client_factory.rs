use crate::enums::provider_kind::ProviderKind;
use crate::errors::{DevOpsAiError, DevOpsAiResult};
use crate::services::ai_providers::azure_openai::AzureOpenAIProvider;
use crate::services::ai_providers::chat_completions::build_http_client;
use crate::services::ai_providers::github_models::GitHubModelsProvider;
use crate::services::ai_providers::ollama::OllamaProvider;
use crate::services::ai_providers::openai::OpenAIProvider;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::chat_client::ChatClient;

/// Builds the chat client named by the configuration. Construction never
/// touches the network; a missing key or endpoint fails here, before any
/// request is made.
pub struct ChatClientFactory;

impl ChatClientFactory {

    pub fn create(config: &AiConfig) -> DevOpsAiResult<Box<dyn ChatClient>> {
        Self::create_with_env(config, |name| std::env::var(name).ok())
    }

    /// `lookup` resolves environment variables (tests pass a map).
    pub fn create_with_env<F>(config: &AiConfig, lookup: F) -> DevOpsAiResult<Box<dyn ChatClient>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kind = config.provider_kind();
        log::info!("🤖 Using provider {} (configured as '{}')", kind, config.provider);

        match kind {
            ProviderKind::OpenAI => Self::create_openai_client(config, &lookup),
            ProviderKind::AzureOpenAI => Self::create_azure_openai_client(config, &lookup),
            ProviderKind::Ollama => Self::create_ollama_client(config),
            ProviderKind::GitHubModels => Self::create_github_models_client(config, &lookup),
            ProviderKind::Unknown => {
                log::warn!("Unknown provider '{}', defaulting to OpenAI", config.provider);
                Self::create_openai_client(config, &lookup)
            }
        }
    }

    fn create_openai_client<F>(config: &AiConfig, lookup: &F) -> DevOpsAiResult<Box<dyn ChatClient>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = Self::get_required_api_key(config, lookup)?;
        let client = build_http_client(config.timeout_secs)?;

        let provider = match config.endpoint.as_deref() {
            Some(endpoint) => {
                Self::validate_endpoint(endpoint)?;
                OpenAIProvider::with_base_url(client, api_key, config.model.clone(), endpoint)
            }
            None => OpenAIProvider::new(client, api_key, config.model.clone()),
        };

        Ok(Box::new(provider.configure(|t| {
            t.with_max_tokens(config.max_tokens)
                .with_temperature(config.temperature)
                .with_tools(config.enable_tools)
        })))
    }

    fn create_azure_openai_client<F>(config: &AiConfig, lookup: &F) -> DevOpsAiResult<Box<dyn ChatClient>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = config.endpoint.as_deref().filter(|e| !e.trim().is_empty()).ok_or_else(|| {
            DevOpsAiError::config_error(
                "Azure OpenAI endpoint is required",
                Some("ai.endpoint"),
                Some("Set 'endpoint' in the [ai] section or the DEVOPS_AI_ENDPOINT environment variable"),
            )
        })?;
        Self::validate_endpoint(endpoint)?;

        let api_key = Self::get_required_api_key(config, lookup)?;
        let deployment = config.deployment_name.clone().unwrap_or_else(|| config.model.clone());
        let client = build_http_client(config.timeout_secs)?;

        let provider = AzureOpenAIProvider::new(client, endpoint, api_key, deployment);
        Ok(Box::new(provider.configure(|t| {
            t.with_max_tokens(config.max_tokens)
                .with_temperature(config.temperature)
                .with_tools(config.enable_tools)
        })))
    }

    fn create_ollama_client(config: &AiConfig) -> DevOpsAiResult<Box<dyn ChatClient>> {
        if let Some(endpoint) = config.endpoint.as_deref() {
            Self::validate_endpoint(endpoint)?;
        }
        if config.enable_tools {
            log::warn!("Tool calling is not supported for Ollama; continuing without tools");
        }

        let client = build_http_client(config.timeout_secs)?;
        let provider = OllamaProvider::new(client, config.endpoint.as_deref(), config.model.clone())
            .with_max_tokens(config.max_tokens)
            .with_temperature(config.temperature);

        Ok(Box::new(provider))
    }

    fn create_github_models_client<F>(config: &AiConfig, lookup: &F) -> DevOpsAiResult<Box<dyn ChatClient>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = Self::get_required_api_key(config, lookup)?;
        if let Some(endpoint) = config.endpoint.as_deref() {
            Self::validate_endpoint(endpoint)?;
        }

        let client = build_http_client(config.timeout_secs)?;
        let provider = GitHubModelsProvider::new(client, api_key, config.model.clone(), config.endpoint.as_deref());

        Ok(Box::new(provider.configure(|t| {
            t.with_max_tokens(config.max_tokens)
                .with_temperature(config.temperature)
                .with_tools(config.enable_tools)
        })))
    }

    fn get_required_api_key<F>(config: &AiConfig, lookup: &F) -> DevOpsAiResult<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(&config.api_key_env)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                DevOpsAiError::config_error(
                    &format!("API key not found. Set the '{}' environment variable.", config.api_key_env),
                    Some("ai.api_key_env"),
                    None,
                )
            })
    }

    fn validate_endpoint(endpoint: &str) -> DevOpsAiResult<()> {
        reqwest::Url::parse(endpoint).map(|_| ()).map_err(|e| {
            DevOpsAiError::config_error(&format!("Invalid endpoint URL '{endpoint}': {e}"), Some("ai.endpoint"), None)
        })
    }
}
