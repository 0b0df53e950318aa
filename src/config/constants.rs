pub const APP_NAME: &str = "devops-ai";

pub const DEFAULT_PROVIDER: &str = "OpenAI";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const GITHUB_MODELS_BASE_URL: &str = "https://models.inference.ai.azure.com";
pub const OLLAMA_DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const AZURE_OPENAI_API_VERSION: &str = "2024-10-21";

/// Upper bound on tool-call round trips when `enable_tools` is on.
pub const MAX_TOOL_ROUNDS: usize = 4;

pub const DEFAULT_FILE_NAME: &str = "pipeline.yml";
pub const DEMO_FILE_NAME: &str = "demo-pipeline.yml";

pub const LOCAL_CONFIG_FILE: &str = "devops-ai.toml";
pub const USER_CONFIG_DIR: &str = "devops-ai";
pub const USER_CONFIG_FILE: &str = "config.toml";

pub const ENV_PROVIDER: &str = "DEVOPS_AI_PROVIDER";
pub const ENV_MODEL: &str = "DEVOPS_AI_MODEL";
pub const ENV_ENDPOINT: &str = "DEVOPS_AI_ENDPOINT";
pub const ENV_DEPLOYMENT: &str = "DEVOPS_AI_DEPLOYMENT";
pub const ENV_API_KEY_ENV: &str = "DEVOPS_AI_API_KEY_ENV";

pub const DEFAULT_TERMINAL_WIDTH: usize = 120;
pub const SPINNER_INTERVAL_MS: u64 = 80;
