use std::path::Path;
use std::time::Instant;
use colored::Colorize;
use tokio_util::sync::CancellationToken;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::DEMO_FILE_NAME;
use crate::constants::demo_pipelines::demo_yaml;
use crate::enums::commands::Commands;
use crate::enums::output_format::OutputFormat;
use crate::enums::pipeline_platform::PipelinePlatform;
use crate::errors::{DevOpsAiError, DevOpsAiResult, ErrorHandler};
use crate::logger::analysis_report_logger::AnalysisReportLogger;
use crate::logger::animated_logger::AnimatedLogger;
use crate::services::client_factory::ChatClientFactory;
use crate::services::devops_assistant::DevOpsAssistant;
use crate::services::pipeline_analyzer_tools::PipelineAnalyzerTools;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    config: Config,
    cancel: CancellationToken,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            cancel: CancellationToken::new(),
            start_time: None,
        }
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Runs one command and returns the process exit code. Errors are
    /// reported here and become exit code 1.
    pub async fn run_command(&mut self, command: Commands) -> i32 {
        self.start_time = Some(Instant::now());

        let cancel = self.cancel.clone();
        let ctrl_c = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::warn!("Interrupt received, cancelling");
                cancel.cancel();
            }
        });

        let result = match command {
            Commands::Init => Self::init_command(),
            Commands::Analyze { file, platform, format, show_yaml, output, demo } => {
                self.analyze_command(file.as_deref(), platform, format, show_yaml, output.as_deref(), demo).await
            }
            Commands::Metadata { file, platform, demo } => self.metadata_command(file.as_deref(), platform, demo).await,
            Commands::BestPractices { platform } => Ok(Self::best_practices_command(platform)),
        };

        ctrl_c.abort();

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        match result {
            Ok(code) => code,
            Err(e) => {
                ErrorHandler::handle_error(&e);
                1
            }
        }
    }

    fn init_command() -> DevOpsAiResult<i32> {
        let path = ConfigManager::create_sample_config()?;
        println!("{} Configuration file created: {}", "✓".green(), path.display().to_string().blue());
        println!("Edit the [ai] section to choose a provider, then run 'devops-ai analyze --demo'.");
        Ok(0)
    }

    async fn analyze_command(
        &self,
        file: Option<&Path>,
        platform: PipelinePlatform,
        format: OutputFormat,
        show_yaml: bool,
        output: Option<&Path>,
        demo: bool,
    ) -> DevOpsAiResult<i32> {
        let (yaml_content, file_name) = self.load_pipeline(file, platform, demo).await?;

        ConfigManager::validate_config(&self.config).map_err(|errors| {
            DevOpsAiError::config_error(&errors.join("; "), None, Some("Run 'devops-ai init' for a sample configuration"))
        })?;

        let assistant = DevOpsAssistant::new(ChatClientFactory::create(&self.config.ai)?);
        let request = AnalysisRequest::new(yaml_content, platform, Some(file_name.clone()));

        let result = if format == OutputFormat::Table {
            let mut spinner = AnimatedLogger::new(format!("Analyzing pipeline with {}...", assistant.provider_name()));
            spinner.start();
            let result = assistant.analyze_pipeline(&request, &self.cancel).await;
            match &result {
                Ok(_) => spinner.stop("Analysis complete").await,
                Err(_) => spinner.error("Analysis failed").await,
            }
            result?
        } else {
            assistant.analyze_pipeline(&request, &self.cancel).await?
        };

        match format {
            OutputFormat::Table => AnalysisReportLogger::print_table(&result, &file_name, platform, show_yaml),
            OutputFormat::Json => AnalysisReportLogger::print_json(&result)?,
        }

        if let Some(path) = output {
            match result.suggested_yaml() {
                Some(yaml) => {
                    self.write_output(path, yaml).await?;
                    AnalysisReportLogger::print_saved_yaml(&path.display().to_string());
                }
                None => log::warn!("No suggested YAML to save to {}", path.display()),
            }
        }

        Ok(result.exit_code())
    }

    async fn metadata_command(&self, file: Option<&Path>, platform: PipelinePlatform, demo: bool) -> DevOpsAiResult<i32> {
        let (yaml_content, _) = self.load_pipeline(file, platform, demo).await?;
        let metadata = PipelineAnalyzerTools::extract_metadata(&yaml_content, platform.as_str())?;
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        Ok(0)
    }

    fn best_practices_command(platform: PipelinePlatform) -> i32 {
        println!("{}", PipelineAnalyzerTools::best_practices_json(platform.as_str()));
        0
    }

    /// Returns the YAML and the file name shown in the report.
    async fn load_pipeline(&self, file: Option<&Path>, platform: PipelinePlatform, demo: bool) -> DevOpsAiResult<(String, String)> {
        if demo {
            log::info!("Using the built-in {} demo pipeline", platform);
            return Ok((demo_yaml(platform).to_string(), DEMO_FILE_NAME.to_string()));
        }

        let path = file.ok_or_else(|| {
            DevOpsAiError::input_error("--file", "No file specified", Some("Use --file <path> or --demo"))
        })?;

        if !path.is_file() {
            return Err(DevOpsAiError::input_error(&path.display().to_string(), "File not found", None));
        }

        let content = tokio::select! {
            biased;
            () = self.cancel.cancelled() => return Err(DevOpsAiError::cancelled("reading pipeline file")),
            content = tokio::fs::read_to_string(path) => content.map_err(|e| {
                DevOpsAiError::file_error(&path.display().to_string(), "read", &e.to_string())
            })?,
        };

        let file_name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

        if content.trim().is_empty() {
            return Err(DevOpsAiError::input_error(&file_name, "No pipeline content to analyze", None));
        }

        Ok((content, file_name))
    }

    async fn write_output(&self, path: &Path, yaml: &str) -> DevOpsAiResult<()> {
        tokio::select! {
            biased;
            () = self.cancel.cancelled() => Err(DevOpsAiError::cancelled("writing suggested YAML")),
            written = tokio::fs::write(path, yaml) => written.map_err(|e| {
                DevOpsAiError::file_error(&path.display().to_string(), "write", &e.to_string())
            }),
        }
    }
}
