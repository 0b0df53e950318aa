use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};
use serde_yaml::Value as YamlValue;
use crate::errors::{DevOpsAiError, DevOpsAiResult};
use crate::structs::best_practice::BestPractice;
use crate::structs::pipeline_metadata::PipelineMetadata;

pub const ANALYZE_PIPELINE_STRUCTURE_TOOL: &str = "analyze_pipeline_structure";
pub const GET_BEST_PRACTICES_TOOL: &str = "get_best_practices";

const STEP_MARKERS: &[&str] = &["- task:", "- script:", "- uses:", "- run:"];

const TEST_KEYWORDS: &[&str] = &["dotnet test", "vstest", "pytest", "npm test"];
const CACHING_KEYWORDS: &[&str] = &["cache@", "actions/cache"];
const SECURITY_SCANNING_KEYWORDS: &[&str] = &["sonar", "owasp", "snyk", "codeql"];
const ARTIFACT_PUBLISHING_KEYWORDS: &[&str] = &["publishbuildartifacts", "upload-artifact"];

/// Keywords → display name. Order is the order tools are reported in.
const TOOL_KEYWORDS: &[(&[&str], &str)] = &[
    (&["dotnet"], ".NET SDK"),
    (&["node", "npm"], "Node.js"),
    (&["docker"], "Docker"),
    (&["azure"], "Azure CLI"),
    (&["terraform"], "Terraform"),
    (&["kubectl", "kubernetes"], "Kubernetes"),
    (&["nuget"], "NuGet"),
    (&["sonar"], "SonarQube/SonarCloud"),
];

const AZURE_DEVOPS_BEST_PRACTICES: &[BestPractice] = &[
    BestPractice::new("Caching", "Use Cache@2 task to cache NuGet packages and node_modules", "Performance"),
    BestPractice::new("Test Results", "Publish test results using PublishTestResults@2 for visibility", "Quality"),
    BestPractice::new("Code Coverage", "Enable code coverage and publish with PublishCodeCoverageResults@1", "Quality"),
    BestPractice::new("Artifacts", "Use PublishBuildArtifacts@1 to preserve build outputs", "Reliability"),
    BestPractice::new("Variables", "Use variable groups for secrets, never hardcode sensitive values", "Security"),
    BestPractice::new("Templates", "Extract reusable steps into templates for consistency", "Maintainability"),
    BestPractice::new("Triggers", "Configure appropriate branch triggers and PR validation", "Process"),
    BestPractice::new("Pool Selection", "Consider self-hosted agents for sensitive builds or specific requirements", "Security"),
];

const GITHUB_ACTIONS_BEST_PRACTICES: &[BestPractice] = &[
    BestPractice::new("Caching", "Use actions/cache to cache dependencies", "Performance"),
    BestPractice::new("Pinned Versions", "Pin action versions to specific SHA or tag, not @main", "Security"),
    BestPractice::new("Secrets", "Use repository or organization secrets, never hardcode", "Security"),
    BestPractice::new("Concurrency", "Use concurrency groups to prevent duplicate runs", "Efficiency"),
    BestPractice::new("Permissions", "Set minimum required permissions using 'permissions' key", "Security"),
    BestPractice::new("Reusable Workflows", "Extract common workflows for reuse across repos", "Maintainability"),
    BestPractice::new("Matrix Builds", "Use matrix strategy for multi-platform/version testing", "Coverage"),
    BestPractice::new("Artifacts", "Use actions/upload-artifact to preserve outputs", "Reliability"),
];

const GENERAL_BEST_PRACTICES: &[BestPractice] = &[
    BestPractice::new("Testing", "Include automated tests in every pipeline", "Quality"),
    BestPractice::new("Security Scanning", "Add SAST/DAST scanning to catch vulnerabilities", "Security"),
    BestPractice::new("Dependency Scanning", "Scan dependencies for known vulnerabilities", "Security"),
    BestPractice::new("Build Caching", "Cache dependencies to speed up builds", "Performance"),
    BestPractice::new("Artifact Management", "Publish and version build artifacts", "Reliability"),
];

static TOOL_DEFINITIONS: Lazy<JsonValue> = Lazy::new(|| {
    json!([
        {
            "type": "function",
            "function": {
                "name": ANALYZE_PIPELINE_STRUCTURE_TOOL,
                "description": "Analyzes the structure of a CI/CD pipeline YAML and returns metadata about jobs, steps, and detected patterns.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "yamlContent": { "type": "string", "description": "The raw YAML content of the pipeline" },
                        "platform": { "type": "string", "description": "The platform: AzureDevOps or GitHubActions" }
                    },
                    "required": ["yamlContent", "platform"]
                }
            }
        },
        {
            "type": "function",
            "function": {
                "name": GET_BEST_PRACTICES_TOOL,
                "description": "Returns a list of best practices and common issues to check for the given pipeline platform.",
                "parameters": {
                    "type": "object",
                    "properties": {
                        "platform": { "type": "string", "description": "The platform: AzureDevOps or GitHubActions" }
                    },
                    "required": ["platform"]
                }
            }
        }
    ])
});

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeStructureArgs {
    yaml_content: String,
    #[serde(default)]
    platform: String,
}

#[derive(Deserialize)]
struct BestPracticesArgs {
    #[serde(default)]
    platform: String,
}

/// Static, network-free pipeline inspection. These functions are also what
/// the model gets to call when tools are enabled.
pub struct PipelineAnalyzerTools;

impl PipelineAnalyzerTools {

    /// Tool entry point: metadata as pretty JSON, or `{"error": ...}`.
    pub fn analyze_pipeline_structure(yaml_content: &str, platform: &str) -> String {
        match Self::extract_metadata(yaml_content, platform) {
            Ok(metadata) => to_pretty_json(&metadata),
            Err(e) => {
                log::debug!("Pipeline structure analysis failed: {}", e);
                error_json(&e.user_message())
            }
        }
    }

    /// `platform` is accepted for parity with the tool signature; the
    /// heuristics are the same for every platform.
    pub fn extract_metadata(yaml_content: &str, _platform: &str) -> DevOpsAiResult<PipelineMetadata> {
        // Only the first document of a multi-document stream is inspected.
        let document = match serde_yaml::Deserializer::from_str(yaml_content).next() {
            Some(first) => YamlValue::deserialize(first)?,
            None => YamlValue::Null,
        };
        let root = document.as_mapping().ok_or_else(|| DevOpsAiError::ParseError {
            content_type: "YAML".to_string(),
            line_number: None,
            reason: "pipeline root must be a mapping".to_string(),
        })?;

        let content = yaml_content.to_lowercase();

        Ok(PipelineMetadata {
            job_count: Self::count_jobs(root),
            step_count: Self::count_steps(yaml_content),
            has_tests: contains_any(&content, TEST_KEYWORDS),
            has_caching: contains_any(&content, CACHING_KEYWORDS),
            has_security_scanning: contains_any(&content, SECURITY_SCANNING_KEYWORDS),
            has_artifact_publishing: contains_any(&content, ARTIFACT_PUBLISHING_KEYWORDS),
            detected_tools: Self::detect_tools(&content),
        })
    }

    fn count_jobs(root: &serde_yaml::Mapping) -> i64 {
        if let Some(jobs) = root.get("jobs").and_then(YamlValue::as_mapping) {
            return len_as_i64(jobs.len());
        }

        // Azure DevOps stages/jobs structure
        if let Some(stages) = root.get("stages").and_then(YamlValue::as_sequence) {
            return len_as_i64(stages.len());
        }

        1
    }

    /// Counts on raw text, not the parsed tree. Floor of one.
    pub fn count_steps(yaml_content: &str) -> i64 {
        let count: usize = STEP_MARKERS.iter().map(|marker| yaml_content.matches(marker).count()).sum();
        len_as_i64(count).max(1)
    }

    /// Expects lowercased content.
    pub fn detect_tools(content: &str) -> Vec<String> {
        TOOL_KEYWORDS
            .iter()
            .filter(|(keywords, _)| contains_any(content, keywords))
            .map(|(_, name)| (*name).to_string())
            .collect()
    }

    pub fn get_best_practices(platform: &str) -> &'static [BestPractice] {
        match platform.to_lowercase().as_str() {
            "azuredevops" => AZURE_DEVOPS_BEST_PRACTICES,
            "githubactions" => GITHUB_ACTIONS_BEST_PRACTICES,
            _ => GENERAL_BEST_PRACTICES,
        }
    }

    pub fn best_practices_json(platform: &str) -> String {
        to_pretty_json(&Self::get_best_practices(platform))
    }

    /// OpenAI-style function tool descriptions for both entry points.
    pub fn tool_definitions() -> &'static JsonValue {
        &TOOL_DEFINITIONS
    }

    /// Runs a model-requested tool call. Never fails: problems come back as
    /// `{"error": ...}` for the model to read.
    pub fn invoke_tool(name: &str, arguments: &str) -> String {
        log::info!("🔧 Model called tool: {}", name);

        match name {
            ANALYZE_PIPELINE_STRUCTURE_TOOL => match serde_json::from_str::<AnalyzeStructureArgs>(arguments) {
                Ok(args) => Self::analyze_pipeline_structure(&args.yaml_content, &args.platform),
                Err(e) => error_json(&format!("invalid arguments for {name}: {e}")),
            },
            GET_BEST_PRACTICES_TOOL => match serde_json::from_str::<BestPracticesArgs>(arguments) {
                Ok(args) => Self::best_practices_json(&args.platform),
                Err(e) => error_json(&format!("invalid arguments for {name}: {e}")),
            },
            _ => error_json(&format!("unknown tool: {name}")),
        }
    }
}

fn contains_any(content: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| content.contains(k))
}

fn len_as_i64(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}

fn to_pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| error_json(&e.to_string()))
}

fn error_json(message: &str) -> String {
    json!({ "error": message }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const THREE_JOBS: &str = r"
name: CI
on: push
jobs:
  build:
    runs-on: ubuntu-latest
    steps:
      - uses: actions/checkout@v4
      - run: dotnet build
  test:
    runs-on: ubuntu-latest
    steps:
      - run: dotnet test
  lint:
    runs-on: ubuntu-latest
    steps:
      - run: npm run lint
";

    const TWO_STAGES: &str = r"
trigger:
  - main
stages:
  - stage: Build
    jobs:
      - job: Build
        steps:
          - script: echo build
  - stage: Deploy
    jobs:
      - job: Deploy
        steps:
          - script: echo deploy
";

    #[test]
    fn counts_jobs_from_jobs_mapping() {
        let metadata = PipelineAnalyzerTools::extract_metadata(THREE_JOBS, "GitHubActions").unwrap();
        assert_eq!(metadata.job_count, 3);
    }

    #[test]
    fn counts_jobs_from_stages_sequence() {
        let metadata = PipelineAnalyzerTools::extract_metadata(TWO_STAGES, "AzureDevOps").unwrap();
        assert_eq!(metadata.job_count, 2);
    }

    #[test]
    fn single_job_when_neither_jobs_nor_stages() {
        let yaml = "trigger:\n  - main\nsteps:\n  - script: echo hi\n";
        let metadata = PipelineAnalyzerTools::extract_metadata(yaml, "AzureDevOps").unwrap();
        assert_eq!(metadata.job_count, 1);
    }

    #[test]
    fn only_first_document_is_inspected() {
        let yaml = "jobs:\n  a: {}\n  b: {}\n---\nfoo: 1\n";
        let metadata = PipelineAnalyzerTools::extract_metadata(yaml, "GitHubActions").unwrap();
        assert_eq!(metadata.job_count, 2);

        let output = PipelineAnalyzerTools::analyze_pipeline_structure(yaml, "GitHubActions");
        let json: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(json["jobCount"], 2);
    }

    #[test]
    fn empty_stream_is_not_a_mapping() {
        let err = PipelineAnalyzerTools::extract_metadata("# only a comment\n", "AzureDevOps").unwrap_err();
        assert!(matches!(err, DevOpsAiError::ParseError { .. }));
    }

    #[test]
    fn jobs_as_sequence_falls_through_to_default() {
        let yaml = "jobs:\n  - job: A\n  - job: B\n";
        let metadata = PipelineAnalyzerTools::extract_metadata(yaml, "AzureDevOps").unwrap();
        assert_eq!(metadata.job_count, 1);
    }

    #[test]
    fn counts_step_markers_in_raw_text() {
        let yaml = "steps:\n  - task: DotNetCoreCLI@2\n  - task: DotNetCoreCLI@2\n  - run: echo done\n";
        assert_eq!(PipelineAnalyzerTools::count_steps(yaml), 3);
    }

    #[test]
    fn step_count_has_floor_of_one() {
        assert_eq!(PipelineAnalyzerTools::count_steps("trigger: none\n"), 1);
    }

    #[test]
    fn detects_tools_in_fixed_order() {
        let content = "run: terraform apply && DOCKER build .".to_lowercase();
        assert_eq!(PipelineAnalyzerTools::detect_tools(&content), vec!["Docker", "Terraform"]);
    }

    #[test]
    fn detects_all_tools_once() {
        let content = "dotnet npm node docker azure terraform kubectl kubernetes nuget sonar";
        let tools = PipelineAnalyzerTools::detect_tools(content);
        assert_eq!(
            tools,
            vec![".NET SDK", "Node.js", "Docker", "Azure CLI", "Terraform", "Kubernetes", "NuGet", "SonarQube/SonarCloud"]
        );
    }

    #[test]
    fn keyword_flags_are_case_insensitive() {
        let yaml = r"
steps:
  - task: Cache@2
  - script: DOTNET TEST
  - task: SonarCloudPrepare@1
  - task: PublishBuildArtifacts@1
";
        let metadata = PipelineAnalyzerTools::extract_metadata(yaml, "AzureDevOps").unwrap();
        assert!(metadata.has_tests);
        assert!(metadata.has_caching);
        assert!(metadata.has_security_scanning);
        assert!(metadata.has_artifact_publishing);
        assert_eq!(metadata.step_count, 4);
        assert_eq!(metadata.detected_tools, vec![".NET SDK", "SonarQube/SonarCloud"]);
    }

    #[test]
    fn plain_pipeline_has_no_flags() {
        let yaml = "steps:\n  - script: echo hello\n";
        let metadata = PipelineAnalyzerTools::extract_metadata(yaml, "AzureDevOps").unwrap();
        assert!(!metadata.has_tests);
        assert!(!metadata.has_caching);
        assert!(!metadata.has_security_scanning);
        assert!(!metadata.has_artifact_publishing);
        assert!(metadata.detected_tools.is_empty());
    }

    #[test]
    fn invalid_yaml_is_reported_as_error_json() {
        let output = PipelineAnalyzerTools::analyze_pipeline_structure("jobs: [unclosed", "GitHubActions");
        let json: JsonValue = serde_json::from_str(&output).unwrap();
        assert!(json["error"].as_str().is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn scalar_root_is_reported_as_error_json() {
        let output = PipelineAnalyzerTools::analyze_pipeline_structure("just a string", "AzureDevOps");
        let json: JsonValue = serde_json::from_str(&output).unwrap();
        assert!(json.get("error").is_some());
    }

    #[test]
    fn structure_output_uses_camel_case() {
        let output = PipelineAnalyzerTools::analyze_pipeline_structure(THREE_JOBS, "GitHubActions");
        let json: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(json["jobCount"], 3);
        assert_eq!(json["hasTests"], true);
        assert_eq!(json["detectedTools"], json!([".NET SDK", "Node.js"]));
    }

    #[test]
    fn best_practices_by_platform() {
        assert_eq!(PipelineAnalyzerTools::get_best_practices("AzureDevOps").len(), 8);
        assert_eq!(PipelineAnalyzerTools::get_best_practices("githubactions")[1].name, "Pinned Versions");
        assert_eq!(PipelineAnalyzerTools::get_best_practices("GitLab").len(), 5);
        assert_eq!(PipelineAnalyzerTools::get_best_practices("GitLab")[0].name, "Testing");
    }

    #[test]
    fn invoke_tool_dispatches_by_name() {
        let args = json!({ "yamlContent": TWO_STAGES, "platform": "AzureDevOps" }).to_string();
        let output = PipelineAnalyzerTools::invoke_tool(ANALYZE_PIPELINE_STRUCTURE_TOOL, &args);
        let json: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(json["jobCount"], 2);

        let output = PipelineAnalyzerTools::invoke_tool(GET_BEST_PRACTICES_TOOL, r#"{"platform":"GitHubActions"}"#);
        let json: JsonValue = serde_json::from_str(&output).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(8));
        assert_eq!(json[0]["category"], "Performance");
    }

    #[test]
    fn invoke_tool_reports_unknown_tools_and_bad_arguments() {
        let output = PipelineAnalyzerTools::invoke_tool("delete_repo", "{}");
        assert!(output.contains("unknown tool"));

        let output = PipelineAnalyzerTools::invoke_tool(ANALYZE_PIPELINE_STRUCTURE_TOOL, "not json");
        assert!(output.contains("invalid arguments"));
    }

    #[test]
    fn tool_definitions_name_both_functions() {
        let names: Vec<&str> = PipelineAnalyzerTools::tool_definitions()
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|t| t["function"]["name"].as_str())
            .collect();
        assert_eq!(names, vec![ANALYZE_PIPELINE_STRUCTURE_TOOL, GET_BEST_PRACTICES_TOOL]);
    }
}
