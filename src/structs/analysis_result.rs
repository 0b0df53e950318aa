use serde::{Deserialize, Serialize};
use crate::enums::issue_severity::IssueSeverity;
use crate::structs::pipeline_issue::PipelineIssue;
use crate::structs::pipeline_metadata::PipelineMetadata;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub summary: String,
    pub issues: Vec<PipelineIssue>,
    pub suggested_yaml: Option<String>,
    pub metadata: Option<PipelineMetadata>,
}

impl AnalysisResult {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == IssueSeverity::Error)
    }

    /// Issues ordered Error, Warning, Info. Ties keep the model's order.
    pub fn issues_by_severity(&self) -> Vec<&PipelineIssue> {
        let mut issues: Vec<&PipelineIssue> = self.issues.iter().collect();
        issues.sort_by(|a, b| b.severity.cmp(&a.severity));
        issues
    }

    pub fn suggested_yaml(&self) -> Option<&str> {
        self.suggested_yaml.as_deref().filter(|y| !y.trim().is_empty())
    }

    pub fn exit_code(&self) -> i32 {
        i32::from(self.has_errors())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: IssueSeverity, message: &str) -> PipelineIssue {
        PipelineIssue {
            severity,
            category: "General".to_string(),
            message: message.to_string(),
            suggestion: None,
            line_reference: None,
        }
    }

    fn result_with(issues: Vec<PipelineIssue>) -> AnalysisResult {
        AnalysisResult {
            summary: "Analysis complete".to_string(),
            issues,
            suggested_yaml: None,
            metadata: None,
        }
    }

    #[test]
    fn issues_sorted_by_descending_severity() {
        let result = result_with(vec![
            issue(IssueSeverity::Info, "info"),
            issue(IssueSeverity::Error, "error"),
            issue(IssueSeverity::Warning, "warning"),
        ]);

        let ordered: Vec<IssueSeverity> = result.issues_by_severity().iter().map(|i| i.severity).collect();
        assert_eq!(ordered, vec![IssueSeverity::Error, IssueSeverity::Warning, IssueSeverity::Info]);
    }

    #[test]
    fn exit_code_reflects_error_issues() {
        assert_eq!(result_with(vec![issue(IssueSeverity::Warning, "w")]).exit_code(), 0);
        assert_eq!(result_with(vec![issue(IssueSeverity::Error, "e")]).exit_code(), 1);
        assert_eq!(result_with(vec![]).exit_code(), 0);
    }

    #[test]
    fn blank_suggested_yaml_is_ignored() {
        let mut result = result_with(vec![]);
        result.suggested_yaml = Some("   \n".to_string());
        assert!(result.suggested_yaml().is_none());
    }

    #[test]
    fn serializes_with_camel_case_names() {
        let mut result = result_with(vec![issue(IssueSeverity::Error, "e")]);
        result.suggested_yaml = Some("trigger: none".to_string());
        result.metadata = Some(PipelineMetadata { job_count: 2, ..Default::default() });

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["suggestedYaml"], "trigger: none");
        assert_eq!(json["metadata"]["jobCount"], 2);
        assert_eq!(json["metadata"]["detectedTools"], serde_json::json!([]));
        assert_eq!(json["issues"][0]["severity"], "Error");
        assert!(json["issues"][0]["lineReference"].is_null());
    }
}
