use std::path::PathBuf;
use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser, Debug)]
#[clap(name = "devops-ai", version)]
#[clap(about = "AI-powered CI/CD pipeline analysis tool", long_about = None)]
pub struct Cli {
    /// Path to a config.toml (defaults to ./devops-ai.toml, then the user config dir)
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable info-level logging
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::output_format::OutputFormat;
    use crate::enums::pipeline_platform::PipelinePlatform;

    #[test]
    fn analyze_defaults() {
        let cli = Cli::parse_from(["devops-ai", "analyze", "--file", "azure-pipelines.yml"]);
        match cli.command {
            Commands::Analyze { file, platform, format, show_yaml, output, demo } => {
                assert_eq!(file, Some(PathBuf::from("azure-pipelines.yml")));
                assert_eq!(platform, PipelinePlatform::AzureDevOps);
                assert_eq!(format, OutputFormat::Table);
                assert!(!show_yaml);
                assert!(output.is_none());
                assert!(!demo);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn platform_accepts_either_spelling() {
        let cli = Cli::parse_from(["devops-ai", "analyze", "--demo", "--platform", "GitHubActions", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Commands::Analyze { platform: PipelinePlatform::GitHubActions, format: OutputFormat::Json, demo: true, .. }
        ));

        let cli = Cli::parse_from(["devops-ai", "analyze", "--demo", "-p", "github-actions"]);
        assert!(matches!(cli.command, Commands::Analyze { platform: PipelinePlatform::GitHubActions, .. }));
    }

    #[test]
    fn file_and_demo_are_mutually_exclusive() {
        let result = Cli::try_parse_from(["devops-ai", "analyze", "--file", "a.yml", "--demo"]);
        assert!(result.is_err());
    }
}
