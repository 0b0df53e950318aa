use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{
    ENV_API_KEY_ENV, ENV_DEPLOYMENT, ENV_ENDPOINT, ENV_MODEL, ENV_PROVIDER, LOCAL_CONFIG_FILE, USER_CONFIG_DIR,
    USER_CONFIG_FILE,
};
use crate::enums::provider_kind::ProviderKind;
use crate::errors::{DevOpsAiError, DevOpsAiResult};
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# devops-ai configuration

[ai]
# OpenAI, AzureOpenAI, Ollama or GitHubModels
provider = "OpenAI"
model = "gpt-4o-mini"

# Required for AzureOpenAI; optional for Ollama (http://localhost:11434)
# and GitHubModels (https://models.inference.ai.azure.com)
# endpoint = "https://my-resource.openai.azure.com"

# Azure OpenAI deployment name (defaults to model)
# deployment_name = "gpt-4o-mini"

# Environment variable that holds the API key (not needed for Ollama)
api_key_env = "OPENAI_API_KEY"

max_tokens = 4096
# temperature = 0.2
# timeout_secs = 120

# Let the model call the local pipeline analyzer tools
enable_tools = false
"#;

pub struct ConfigManager;

impl ConfigManager {

    /// Loads the configuration from `explicit_path`, `./devops-ai.toml` or the
    /// user config dir (first one found), then applies environment overrides.
    pub fn load(explicit_path: Option<&Path>) -> DevOpsAiResult<Config> {
        let mut config = match Self::resolve_path(explicit_path)? {
            Some(path) => Self::load_from_path(&path)?,
            None => {
                log::debug!("No configuration file found, using defaults");
                Config::default()
            }
        };

        Self::apply_env_overrides(&mut config, |name| std::env::var(name).ok());
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> DevOpsAiResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());

        let content = fs::read_to_string(path).map_err(|e| DevOpsAiError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| DevOpsAiError::ConfigurationFileError {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })
    }

    fn resolve_path(explicit_path: Option<&Path>) -> DevOpsAiResult<Option<PathBuf>> {
        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(DevOpsAiError::ConfigurationFileError {
                    path: path.display().to_string(),
                    reason: "file does not exist".to_string(),
                });
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Ok(Some(local));
        }

        Ok(Self::user_config_path().filter(|p| p.exists()))
    }

    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
    }

    /// Environment variables win over file values. Blank values are ignored.
    pub fn apply_env_overrides<F>(config: &mut Config, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(provider) = read(ENV_PROVIDER) {
            config.ai.provider = provider;
        }
        if let Some(model) = read(ENV_MODEL) {
            config.ai.model = model;
        }
        if let Some(endpoint) = read(ENV_ENDPOINT) {
            config.ai.endpoint = Some(endpoint);
        }
        if let Some(deployment) = read(ENV_DEPLOYMENT) {
            config.ai.deployment_name = Some(deployment);
        }
        if let Some(api_key_env) = read(ENV_API_KEY_ENV) {
            config.ai.api_key_env = api_key_env;
        }
    }

    pub fn create_sample_config() -> DevOpsAiResult<PathBuf> {
        let path = Self::user_config_path()
            .ok_or_else(|| DevOpsAiError::system_error("init", "could not determine the user config directory"))?;
        Self::write_sample_config(&path)?;
        Ok(path)
    }

    pub fn write_sample_config(path: &Path) -> DevOpsAiResult<()> {
        if path.exists() {
            return Err(DevOpsAiError::file_error(
                &path.display().to_string(),
                "create",
                "a configuration file already exists",
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, SAMPLE_CONFIG)?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    /// Checks that need no environment access. Missing API keys and Azure
    /// endpoints are reported by the client factory instead.
    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        let ai = &config.ai;

        if ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }

        if ai.max_tokens == 0 {
            errors.push("ai.max_tokens must be greater than zero".to_string());
        }

        if let Some(endpoint) = &ai.endpoint {
            if let Err(e) = reqwest::Url::parse(endpoint) {
                errors.push(format!("ai.endpoint is not a valid URL ({endpoint}): {e}"));
            }
        }

        if ai.provider_kind().requires_api_key() && ai.api_key_env.trim().is_empty() {
            errors.push(format!("ai.api_key_env must name an environment variable for provider '{}'", ai.provider));
        }

        if ai.provider_kind() == ProviderKind::Unknown {
            log::warn!("Unknown provider '{}', falling back to OpenAI", ai.provider);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
