pub mod ai_config;
#[allow(clippy::module_inception)]
pub mod config;
