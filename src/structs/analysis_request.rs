use crate::enums::pipeline_platform::PipelinePlatform;

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub yaml_content: String,
    pub platform: PipelinePlatform,
    pub file_name: Option<String>,
}

impl AnalysisRequest {
    pub fn new(yaml_content: String, platform: PipelinePlatform, file_name: Option<String>) -> Self {
        Self {
            yaml_content,
            platform,
            file_name,
        }
    }
}
