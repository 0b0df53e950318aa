use std::path::PathBuf;
use clap::Subcommand;
use crate::enums::output_format::OutputFormat;
use crate::enums::pipeline_platform::PipelinePlatform;

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a sample configuration file
    Init,
    /// Analyze a CI/CD pipeline YAML file
    #[clap(after_help = "Examples:\n  devops-ai analyze --file azure-pipelines.yml\n  devops-ai analyze --file azure-pipelines.yml --show-yaml\n  devops-ai analyze --demo --platform GitHubActions")]
    Analyze {
        /// Path to the pipeline YAML file
        #[clap(short, long, conflicts_with = "demo")]
        file: Option<PathBuf>,
        /// Pipeline platform
        #[clap(short, long, value_enum, ignore_case = true, default_value_t = PipelinePlatform::AzureDevOps)]
        platform: PipelinePlatform,
        /// Output format
        #[clap(long, value_enum, ignore_case = true, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
        /// Display the suggested improved YAML
        #[clap(long)]
        show_yaml: bool,
        /// Save suggested YAML to a file
        #[clap(long)]
        output: Option<PathBuf>,
        /// Run with a built-in sample pipeline
        #[clap(long)]
        demo: bool,
    },
    /// Extract pipeline metadata locally, without calling a model
    Metadata {
        #[clap(short, long, conflicts_with = "demo")]
        file: Option<PathBuf>,
        #[clap(short, long, value_enum, ignore_case = true, default_value_t = PipelinePlatform::AzureDevOps)]
        platform: PipelinePlatform,
        #[clap(long)]
        demo: bool,
    },
    /// List best practices for a pipeline platform
    BestPractices {
        #[clap(short, long, value_enum, ignore_case = true, default_value_t = PipelinePlatform::AzureDevOps)]
        platform: PipelinePlatform,
    },
}
