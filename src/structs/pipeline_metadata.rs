use serde::{Deserialize, Serialize};

/// Heuristic facts about a pipeline definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineMetadata {
    pub job_count: i64,
    pub step_count: i64,
    pub has_tests: bool,
    pub has_caching: bool,
    pub has_security_scanning: bool,
    pub has_artifact_publishing: bool,
    /// First-match order, no duplicates.
    #[serde(default)]
    pub detected_tools: Vec<String>,
}
