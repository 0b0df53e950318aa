use serde::{Deserialize, Serialize};
use crate::enums::issue_severity::IssueSeverity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineIssue {
    pub severity: IssueSeverity,
    pub category: String,
    pub message: String,
    pub suggestion: Option<String>,
    pub line_reference: Option<String>,
}
