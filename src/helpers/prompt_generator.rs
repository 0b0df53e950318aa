use crate::config::constants::DEFAULT_FILE_NAME;
use crate::constants::prompts::{RESPONSE_SCHEMA, SYSTEM_PROMPT};
use crate::structs::ai::chat_message::ChatMessage;
use crate::structs::analysis_request::AnalysisRequest;

/// System and user messages for one analysis request, in send order.
pub fn build_messages(request: &AnalysisRequest) -> (ChatMessage, ChatMessage) {
    (ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(generate_user_prompt(request)))
}

/// The YAML goes in verbatim. A ``` sequence inside it is not escaped.
pub fn generate_user_prompt(request: &AnalysisRequest) -> String {
    let file_name = request.file_name.as_deref().unwrap_or(DEFAULT_FILE_NAME);

    format!(
        "Please analyze this {platform} pipeline:\n\nFilename: {file_name}\n\n```yaml\n{yaml}\n```\n\nProvide your analysis as JSON with this structure:\n{RESPONSE_SCHEMA}\n",
        platform = request.platform,
        yaml = request.yaml_content,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::pipeline_platform::PipelinePlatform;
    use crate::structs::ai::chat_message::{ROLE_SYSTEM, ROLE_USER};

    #[test]
    fn builds_system_then_user_message() {
        let request = AnalysisRequest::new("trigger:\n  - main\n".to_string(), PipelinePlatform::AzureDevOps, None);
        let (system, user) = build_messages(&request);

        assert_eq!(system.role, ROLE_SYSTEM);
        assert_eq!(system.content, SYSTEM_PROMPT);
        assert!(system.content.contains("valid JSON object"));
        assert_eq!(user.role, ROLE_USER);
    }

    #[test]
    fn user_prompt_embeds_platform_file_and_yaml() {
        let yaml = "name: CI\non: push\n".to_string();
        let request = AnalysisRequest::new(yaml.clone(), PipelinePlatform::GitHubActions, Some("ci.yml".to_string()));
        let prompt = generate_user_prompt(&request);

        assert!(prompt.starts_with("Please analyze this GitHubActions pipeline:"));
        assert!(prompt.contains("Filename: ci.yml"));
        assert!(prompt.contains(&format!("```yaml\n{yaml}\n```")));
        assert!(prompt.contains("\"suggestedYaml\": \"Improved YAML or null\""));
        assert!(prompt.contains("\"detectedTools\": []"));
    }

    #[test]
    fn file_name_defaults_to_pipeline_yml() {
        let request = AnalysisRequest::new("steps: []".to_string(), PipelinePlatform::AzureDevOps, None);
        assert!(generate_user_prompt(&request).contains("Filename: pipeline.yml"));
    }

    #[test]
    fn backticks_in_yaml_are_kept_verbatim() {
        let yaml = "script: echo '```'".to_string();
        let request = AnalysisRequest::new(yaml.clone(), PipelinePlatform::AzureDevOps, None);
        assert!(generate_user_prompt(&request).contains(&yaml));
    }
}
