use serde::{Deserialize, Serialize};
use crate::structs::config::ai_config::AiConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
}
