use serde_json::Value;
use crate::enums::issue_severity::IssueSeverity;
use crate::structs::ai::agent_response::{lowercase_keys, AgentResponse, IssueDto, MetadataDto};
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::pipeline_issue::PipelineIssue;
use crate::structs::pipeline_metadata::PipelineMetadata;

const JSON_FENCE: &str = "```json";
const FENCE: &str = "```";

pub const DEFAULT_SUMMARY: &str = "Analysis complete";
pub const DEFAULT_CATEGORY: &str = "General";
pub const SYSTEM_CATEGORY: &str = "System";
pub const EMPTY_RESPONSE_MESSAGE: &str = "Failed to parse AI response";
pub const RETRY_SUGGESTION: &str = "Please try again or check the pipeline YAML syntax";

/// Turns the model's reply into an `AnalysisResult`. The reply is untrusted:
/// anything unusable becomes a result with a single System error issue.
pub struct ResponseParser;

impl ResponseParser {

    pub fn parse(raw: &str) -> AnalysisResult {
        let json = Self::strip_fences(raw);

        let value: Value = match serde_json::from_str(&json) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Model reply is not valid JSON: {}", e);
                return Self::error_result(&format!("JSON parsing error: {e}"));
            }
        };

        match value {
            Value::Object(_) => {}
            Value::Null => return Self::error_result(EMPTY_RESPONSE_MESSAGE),
            other => {
                return Self::error_result(&format!(
                    "JSON parsing error: expected an object, found {}",
                    json_type_name(&other)
                ))
            }
        }

        match serde_json::from_value::<AgentResponse>(lowercase_keys(value)) {
            Ok(response) => Self::map_response(response),
            Err(e) => Self::error_result(&format!("JSON parsing error: {e}")),
        }
    }

    /// Removes every ```json and ``` marker, then trims.
    pub fn strip_fences(raw: &str) -> String {
        raw.replace(JSON_FENCE, "").replace(FENCE, "").trim().to_string()
    }

    pub fn error_result(message: &str) -> AnalysisResult {
        AnalysisResult {
            summary: message.to_string(),
            issues: vec![PipelineIssue {
                severity: IssueSeverity::Error,
                category: SYSTEM_CATEGORY.to_string(),
                message: message.to_string(),
                suggestion: Some(RETRY_SUGGESTION.to_string()),
                line_reference: None,
            }],
            suggested_yaml: None,
            metadata: None,
        }
    }

    fn map_response(response: AgentResponse) -> AnalysisResult {
        AnalysisResult {
            summary: response
                .summary
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
            issues: response.issues.unwrap_or_default().into_iter().map(Self::map_issue).collect(),
            suggested_yaml: response.suggested_yaml,
            metadata: response.metadata.map(Self::map_metadata),
        }
    }

    fn map_issue(issue: IssueDto) -> PipelineIssue {
        PipelineIssue {
            severity: IssueSeverity::parse_lenient(issue.severity.as_deref()),
            category: issue.category.unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            message: issue.message.unwrap_or_default(),
            suggestion: issue.suggestion,
            line_reference: issue.line_reference,
        }
    }

    fn map_metadata(metadata: MetadataDto) -> PipelineMetadata {
        PipelineMetadata {
            job_count: metadata.job_count.unwrap_or_default(),
            step_count: metadata.step_count.unwrap_or_default(),
            has_tests: metadata.has_tests.unwrap_or_default(),
            has_caching: metadata.has_caching.unwrap_or_default(),
            has_security_scanning: metadata.has_security_scanning.unwrap_or_default(),
            has_artifact_publishing: metadata.has_artifact_publishing.unwrap_or_default(),
            detected_tools: metadata.detected_tools.unwrap_or_default(),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const FULL_REPLY: &str = r#"{
        "summary": "Pipeline builds but never runs tests.",
        "issues": [
            { "severity": "Warning", "category": "Quality", "message": "No tests", "suggestion": "Add dotnet test" },
            { "severity": "error", "category": "Security", "message": "Unpinned action", "lineReference": "line 12" }
        ],
        "suggestedYaml": "trigger:\n  - main\n",
        "metadata": {
            "jobCount": 1,
            "stepCount": 3,
            "hasTests": false,
            "hasCaching": true,
            "hasSecurityScanning": false,
            "hasArtifactPublishing": true,
            "detectedTools": [".NET SDK", "NuGet"]
        }
    }"#;

    fn assert_single_system_error(result: &AnalysisResult) {
        assert_eq!(result.issues.len(), 1);
        let issue = &result.issues[0];
        assert_eq!(issue.severity, IssueSeverity::Error);
        assert_eq!(issue.category, SYSTEM_CATEGORY);
        assert_eq!(issue.suggestion.as_deref(), Some(RETRY_SUGGESTION));
        assert!(!result.summary.is_empty());
        assert_eq!(result.summary, issue.message);
    }

    #[test]
    fn parses_complete_reply() {
        let result = ResponseParser::parse(FULL_REPLY);

        assert_eq!(result.summary, "Pipeline builds but never runs tests.");
        assert_eq!(result.issues.len(), 2);
        assert_eq!(result.issues[0].severity, IssueSeverity::Warning);
        assert_eq!(result.issues[0].suggestion.as_deref(), Some("Add dotnet test"));
        assert_eq!(result.issues[1].severity, IssueSeverity::Error);
        assert_eq!(result.issues[1].line_reference.as_deref(), Some("line 12"));
        assert_eq!(result.suggested_yaml.as_deref(), Some("trigger:\n  - main\n"));

        let metadata = result.metadata.unwrap();
        assert_eq!(metadata.step_count, 3);
        assert!(metadata.has_caching);
        assert!(metadata.has_artifact_publishing);
        assert_eq!(metadata.detected_tools, vec![".NET SDK", "NuGet"]);
    }

    #[test]
    fn strips_markdown_fences() {
        let fenced = format!("```json\n{FULL_REPLY}\n```");
        assert_eq!(ResponseParser::parse(&fenced), ResponseParser::parse(FULL_REPLY));

        let bare_fence = format!("  ```\n{FULL_REPLY}\n```  ");
        assert_eq!(ResponseParser::parse(&bare_fence), ResponseParser::parse(FULL_REPLY));
    }

    #[test]
    fn field_names_match_case_insensitively() {
        let reply = r#"{ "Summary": "Looks fine", "ISSUES": [ { "Severity": "WARNING", "Message": "m", "LineReference": "l3" } ],
                          "SuggestedYAML": "x: 1", "Metadata": { "JobCount": 2, "DetectedTools": ["Docker"] } }"#;
        let result = ResponseParser::parse(reply);

        assert_eq!(result.summary, "Looks fine");
        assert_eq!(result.issues[0].severity, IssueSeverity::Warning);
        assert_eq!(result.issues[0].line_reference.as_deref(), Some("l3"));
        assert_eq!(result.suggested_yaml.as_deref(), Some("x: 1"));
        let metadata = result.metadata.unwrap();
        assert_eq!(metadata.job_count, 2);
        assert_eq!(metadata.detected_tools, vec!["Docker"]);
    }

    #[test]
    fn missing_fields_get_documented_defaults() {
        let result = ResponseParser::parse(r#"{ "issues": [ { "severity": "catastrophic" } ], "metadata": {} }"#);

        assert_eq!(result.summary, DEFAULT_SUMMARY);
        assert_eq!(result.issues.len(), 1);
        let issue = &result.issues[0];
        assert_eq!(issue.severity, IssueSeverity::Info);
        assert_eq!(issue.category, DEFAULT_CATEGORY);
        assert_eq!(issue.message, "");
        assert!(issue.suggestion.is_none());
        assert!(result.suggested_yaml.is_none());
        assert_eq!(result.metadata, Some(PipelineMetadata::default()));
    }

    #[test]
    fn empty_object_is_a_clean_result() {
        let result = ResponseParser::parse("{}");
        assert_eq!(result.summary, DEFAULT_SUMMARY);
        assert!(result.issues.is_empty());
        assert!(result.metadata.is_none());
    }

    #[test]
    fn blank_summary_falls_back_to_default() {
        let result = ResponseParser::parse(r#"{ "summary": "   " }"#);
        assert_eq!(result.summary, DEFAULT_SUMMARY);
    }

    #[test]
    fn wrongly_typed_fields_are_treated_as_missing() {
        let reply = r#"{ "summary": 42, "issues": [ "not an issue", { "message": 7, "category": "Perf" } ],
                          "metadata": { "jobCount": "three", "hasTests": "yes", "detectedTools": ["Docker", 5] } }"#;
        let result = ResponseParser::parse(reply);

        assert_eq!(result.summary, DEFAULT_SUMMARY);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].category, "Perf");
        assert_eq!(result.issues[0].message, "");
        let metadata = result.metadata.unwrap();
        assert_eq!(metadata.job_count, 0);
        assert!(!metadata.has_tests);
        assert_eq!(metadata.detected_tools, vec!["Docker"]);
    }

    #[test]
    fn null_metadata_is_absent() {
        let result = ResponseParser::parse(r#"{ "summary": "ok", "metadata": null, "suggestedYaml": null }"#);
        assert!(result.metadata.is_none());
        assert!(result.suggested_yaml.is_none());
    }

    #[test]
    fn malformed_reply_yields_system_error() {
        let result = ResponseParser::parse("I could not analyze this pipeline, sorry.");
        assert_single_system_error(&result);
        assert!(result.summary.starts_with("JSON parsing error"));
    }

    #[test]
    fn null_reply_yields_system_error() {
        let result = ResponseParser::parse("null");
        assert_single_system_error(&result);
        assert_eq!(result.summary, EMPTY_RESPONSE_MESSAGE);
    }

    #[test]
    fn non_object_reply_yields_system_error() {
        assert_single_system_error(&ResponseParser::parse("[1, 2, 3]"));
        assert_single_system_error(&ResponseParser::parse("\"just text\""));
        assert_single_system_error(&ResponseParser::parse(""));
    }

    proptest! {
        #[test]
        fn fence_stripping_is_transparent(summary in "[A-Za-z0-9 .,]{0,40}", severity in "(Error|Warning|Info|bogus)") {
            let body = serde_json::json!({
                "summary": summary,
                "issues": [ { "severity": severity, "message": "m" } ]
            })
            .to_string();
            let fenced = format!("```json\n{body}\n```");
            prop_assert_eq!(ResponseParser::parse(&fenced), ResponseParser::parse(&body));
        }

        #[test]
        fn arbitrary_text_never_panics(raw in ".{0,200}") {
            let result = ResponseParser::parse(&raw);
            prop_assert!(!result.summary.is_empty());
        }
    }
}
