use tokio_util::sync::CancellationToken;
use crate::errors::{DevOpsAiError, DevOpsAiResult};
use crate::helpers::prompt_generator;
use crate::services::response_parser::ResponseParser;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::traits::chat_client::ChatClient;

pub struct DevOpsAssistant {
    client: Box<dyn ChatClient>,
}

impl DevOpsAssistant {
    pub fn new(client: Box<dyn ChatClient>) -> Self {
        Self { client }
    }

    pub fn provider_name(&self) -> String {
        self.client.provider_name()
    }

    /// One remote call. A reply that cannot be parsed still yields a result;
    /// only transport failures and cancellation are errors.
    pub async fn analyze_pipeline(&self, request: &AnalysisRequest, cancel: &CancellationToken) -> DevOpsAiResult<AnalysisResult> {
        log::info!("🔍 Analyzing pipeline for platform {}", request.platform);
        log::debug!("Sending request to {} (model {})", self.client.provider_name(), self.client.model());

        let (system, user) = prompt_generator::build_messages(request);
        let messages = [system, user];

        let reply = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                log::warn!("Pipeline analysis cancelled");
                return Err(DevOpsAiError::cancelled("pipeline analysis"));
            }
            reply = self.client.chat(&messages) => reply,
        };

        let raw = reply.map_err(|e| {
            log::error!("❌ Error analyzing pipeline: {}", e);
            DevOpsAiError::from(e)
        })?;

        log::debug!("Received {} characters from the model", raw.len());

        let result = ResponseParser::parse(&raw);
        log::info!("✅ Analysis complete. Found {} issues", result.issues.len());

        Ok(result)
    }
}
