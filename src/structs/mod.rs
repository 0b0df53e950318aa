pub mod ai;
pub mod analysis_request;
pub mod analysis_result;
pub mod best_practice;
pub mod cli;
pub mod config;
pub mod pipeline_issue;
pub mod pipeline_metadata;
