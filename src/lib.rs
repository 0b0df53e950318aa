//! Sends CI/CD pipeline YAML to a chat-completion model and renders the
//! returned critique as a terminal report or JSON.

pub mod config;
pub mod constants;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
