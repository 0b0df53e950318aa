use std::error::Error as StdError;
use std::fmt;

use crate::enums::ai_provider_error::AiProviderError;

#[derive(Debug, Clone)]
pub enum DevOpsAiError {
    // Configuration errors
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },
    ConfigurationFileError {
        path: String,
        reason: String,
    },

    // User input errors (missing file, empty content)
    InputError {
        input: String,
        reason: String,
        suggestion: Option<String>,
    },

    // File operation errors
    FileOperationError {
        file_path: String,
        operation: String,
        reason: String,
    },

    // Parser errors
    ParseError {
        content_type: String,
        line_number: Option<usize>,
        reason: String,
    },

    // Network/API errors
    NetworkError {
        operation: String,
        url: Option<String>,
        status_code: Option<u16>,
        reason: String,
    },

    // Cooperative cancellation (Ctrl-C)
    Cancelled {
        operation: String,
    },

    // System errors
    SystemError {
        operation: String,
        reason: String,
    },
}

impl DevOpsAiError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(ToString::to_string),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn input_error(input: &str, reason: &str, suggestion: Option<&str>) -> Self {
        Self::InputError {
            input: input.to_string(),
            reason: reason.to_string(),
            suggestion: suggestion.map(ToString::to_string),
        }
    }

    pub fn file_error(file_path: &str, operation: &str, reason: &str) -> Self {
        Self::FileOperationError {
            file_path: file_path.to_string(),
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn cancelled(operation: &str) -> Self {
        Self::Cancelled {
            operation: operation.to_string(),
        }
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::ConfigurationError { .. } | Self::ConfigurationFileError { .. })
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SystemError { .. } => ErrorSeverity::Critical,
            Self::ConfigurationError { .. } | Self::ConfigurationFileError { .. } => ErrorSeverity::High,
            Self::FileOperationError { .. } => ErrorSeverity::High,
            Self::NetworkError { .. } | Self::ParseError { .. } => ErrorSeverity::Medium,
            Self::InputError { .. } | Self::Cancelled { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ConfigurationError { message, field, suggestion } => {
                let mut msg = format!("Configuration Error: {message}");
                if let Some(field) = field {
                    msg.push_str(&format!(" (field: {field})"));
                }
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 Suggestion: {suggestion}"));
                }
                msg
            }
            Self::ConfigurationFileError { path, reason } => {
                format!("Configuration file error at '{path}': {reason}\n💡 Check file permissions and TOML syntax")
            }
            Self::InputError { input, reason, suggestion } => {
                let mut msg = format!("{reason}: {input}");
                if let Some(suggestion) = suggestion {
                    msg.push_str(&format!("\n💡 {suggestion}"));
                }
                msg
            }
            Self::FileOperationError { file_path, operation, reason } => {
                format!("File operation '{operation}' failed for '{file_path}': {reason}\n💡 Check file permissions and path")
            }
            Self::ParseError { content_type, line_number, reason } => {
                let mut msg = format!("Parse error in {content_type}: {reason}");
                if let Some(line) = line_number {
                    msg.push_str(&format!(" (line {line})"));
                }
                msg
            }
            Self::NetworkError { operation, url, status_code, reason } => {
                let mut msg = format!("Network error during {operation}: {reason}");
                if let Some(url) = url {
                    msg.push_str(&format!(" (URL: {url})"));
                }
                if let Some(code) = status_code {
                    msg.push_str(&format!(" (Status: {code})"));
                }
                msg.push_str("\n💡 Check your connection, endpoint and API key, then try again");
                msg
            }
            Self::Cancelled { operation } => format!("Operation cancelled: {operation}"),
            Self::SystemError { operation, reason } => {
                format!("System error during {operation}: {reason}")
            }
        }
    }

    pub fn technical_details(&self) -> String {
        format!("{self:?}")
    }
}

impl fmt::Display for DevOpsAiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.user_message())
    }
}

impl StdError for DevOpsAiError {}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Low => "🟢",
            Self::Medium => "🟡",
            Self::High => "🟠",
            Self::Critical => "🔴",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// Result type alias for devops-ai operations
pub type DevOpsAiResult<T> = Result<T, DevOpsAiError>;

/// Error handler for consistent error processing at the command boundary
pub struct ErrorHandler;

impl ErrorHandler {
    /// Log technical details and print the user-facing message to stderr.
    pub fn handle_error(error: &DevOpsAiError) {
        let severity = error.severity();

        log::error!("[{}] {}", severity.name(), error.technical_details());

        eprintln!("{} {} {}", severity.emoji(), colored::Colorize::bold(colored::Colorize::red("Error:")), error.user_message());
    }
}

impl From<std::io::Error> for DevOpsAiError {
    fn from(error: std::io::Error) -> Self {
        DevOpsAiError::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for DevOpsAiError {
    fn from(error: serde_json::Error) -> Self {
        DevOpsAiError::ParseError {
            content_type: "JSON".to_string(),
            line_number: Some(error.line()),
            reason: error.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for DevOpsAiError {
    fn from(error: serde_yaml::Error) -> Self {
        DevOpsAiError::ParseError {
            content_type: "YAML".to_string(),
            line_number: error.location().map(|l| l.line()),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for DevOpsAiError {
    fn from(error: toml::de::Error) -> Self {
        DevOpsAiError::ParseError {
            content_type: "TOML".to_string(),
            line_number: None,
            reason: error.message().to_string(),
        }
    }
}

impl From<reqwest::Error> for DevOpsAiError {
    fn from(error: reqwest::Error) -> Self {
        DevOpsAiError::NetworkError {
            operation: "HTTP request".to_string(),
            url: error.url().map(ToString::to_string),
            status_code: error.status().map(|s| s.as_u16()),
            reason: error.to_string(),
        }
    }
}

impl From<AiProviderError> for DevOpsAiError {
    fn from(error: AiProviderError) -> Self {
        match error {
            AiProviderError::NetworkError(reason) => DevOpsAiError::NetworkError {
                operation: "chat completion".to_string(),
                url: None,
                status_code: None,
                reason,
            },
            AiProviderError::HttpStatus { status, body } => DevOpsAiError::NetworkError {
                operation: "chat completion".to_string(),
                url: None,
                status_code: Some(status),
                reason: body,
            },
            AiProviderError::AuthenticationError(reason) => DevOpsAiError::NetworkError {
                operation: "chat completion".to_string(),
                url: None,
                status_code: Some(401),
                reason: format!("authentication failed: {reason}"),
            },
            AiProviderError::SerializationError(reason) | AiProviderError::ApiError(reason) => {
                DevOpsAiError::NetworkError {
                    operation: "chat completion".to_string(),
                    url: None,
                    status_code: None,
                    reason,
                }
            }
        }
    }
}
