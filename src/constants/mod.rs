pub mod demo_pipelines;
pub mod prompts;
