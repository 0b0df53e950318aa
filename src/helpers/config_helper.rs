use crate::config::constants::{DEFAULT_API_KEY_ENV, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_PROVIDER};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_provider() -> String {
        DEFAULT_PROVIDER.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_MODEL.to_string()
    }

    pub fn default_api_key_env() -> String {
        DEFAULT_API_KEY_ENV.to_string()
    }

    pub fn default_max_tokens() -> u32 {
        DEFAULT_MAX_TOKENS
    }
}
