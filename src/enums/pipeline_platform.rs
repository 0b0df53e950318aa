use std::fmt;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq, ValueEnum)]
pub enum PipelinePlatform {
    #[default]
    #[value(name = "AzureDevOps", alias = "azure-devops")]
    AzureDevOps,
    #[value(name = "GitHubActions", alias = "github-actions")]
    GitHubActions,
}

impl PipelinePlatform {
    pub fn as_str(self) -> &'static str {
        match self {
            PipelinePlatform::AzureDevOps => "AzureDevOps",
            PipelinePlatform::GitHubActions => "GitHubActions",
        }
    }
}

impl fmt::Display for PipelinePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
