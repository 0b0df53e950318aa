use serde::{Deserialize, Serialize};
use crate::enums::provider_kind::ProviderKind;
use crate::helpers::config_helper::ConfigHelper;

/// Chat provider settings. Loaded once at startup and passed by reference.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AiConfig {
    /// OpenAI, AzureOpenAI, Ollama or GitHubModels (case-insensitive)
    #[serde(default = "ConfigHelper::default_provider")]
    pub provider: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default)]
    pub endpoint: Option<String>,

    /// Azure OpenAI deployment; falls back to `model`
    #[serde(default)]
    pub deployment_name: Option<String>,

    /// Name of the environment variable holding the API key
    #[serde(default = "ConfigHelper::default_api_key_env", alias = "api_key_environment_variable")]
    pub api_key_env: String,

    #[serde(default = "ConfigHelper::default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default)]
    pub temperature: Option<f32>,

    /// Request timeout handed to the HTTP client; unset keeps the transport default
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Advertise the pipeline analyzer tools to OpenAI-compatible models
    #[serde(default)]
    pub enable_tools: bool,
}

impl AiConfig {
    pub fn provider_kind(&self) -> ProviderKind {
        ProviderKind::from_tag(&self.provider)
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: ConfigHelper::default_provider(),
            model: ConfigHelper::default_model(),
            endpoint: None,
            deployment_name: None,
            api_key_env: ConfigHelper::default_api_key_env(),
            max_tokens: ConfigHelper::default_max_tokens(),
            temperature: None,
            timeout_secs: None,
            enable_tools: false,
        }
    }
}
