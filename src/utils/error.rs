use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Connection to {endpoint} failed: {message}")]
    Connection { endpoint: String, message: String },

    #[error("Remote call {method} failed: {message}")]
    RemoteCall { method: String, message: String },

    #[error("Edit score error: {message}")]
    Metric { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfig { field: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Computation,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ClientError {
    pub fn connection(endpoint: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Connection {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    pub fn remote(method: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::RemoteCall {
            method: method.into(),
            message: message.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Connection { .. } => ErrorCategory::Network,
            ClientError::RemoteCall { .. } => ErrorCategory::Remote,
            ClientError::Metric { .. } => ErrorCategory::Computation,
            ClientError::Config { .. }
            | ClientError::InvalidConfigValue { .. }
            | ClientError::MissingConfig { .. } => ErrorCategory::Configuration,
            ClientError::Serialization(_) => ErrorCategory::Data,
            ClientError::Io(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClientError::Connection { .. } | ClientError::RemoteCall { .. } => ErrorSeverity::Medium,
            ClientError::Metric { .. } | ClientError::Serialization(_) => ErrorSeverity::High,
            ClientError::Config { .. }
            | ClientError::InvalidConfigValue { .. }
            | ClientError::MissingConfig { .. } => ErrorSeverity::High,
            ClientError::Io(_) => ErrorSeverity::Critical,
        }
    }

    /// 連線與遠端錯誤可由呼叫端自行決定是否重試
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ClientError::Connection { .. } | ClientError::RemoteCall { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ClientError::Connection { endpoint, .. } => {
                format!("Could not reach the NLP service at {}", endpoint)
            }
            ClientError::RemoteCall { method, message } => {
                format!("The NLP service rejected {}: {}", method, message)
            }
            ClientError::Metric { message } => format!("Could not score normalization: {}", message),
            ClientError::Config { message } => format!("Configuration problem: {}", message),
            ClientError::InvalidConfigValue { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            ClientError::MissingConfig { field } => format!("Setting '{}' is required", field),
            ClientError::Serialization(e) => format!("Malformed data: {}", e),
            ClientError::Io(e) => format!("I/O failure: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => "Check that the NLP service is running and the endpoint is correct",
            ErrorCategory::Remote => "Inspect the service logs or retry the call",
            ErrorCategory::Computation => "Provide non-empty input text",
            ErrorCategory::Configuration => "Fix the configuration file or command-line flags",
            ErrorCategory::Data => "Verify the service and client protocol versions match",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_and_remote_are_retryable() {
        assert!(ClientError::connection("localhost:6789", "refused").is_retryable());
        assert!(ClientError::remote("Normalize", "boom").is_retryable());
        assert!(!ClientError::Metric {
            message: "empty".to_string()
        }
        .is_retryable());
    }

    #[test]
    fn test_category_and_severity() {
        let err = ClientError::connection("localhost:6789", "refused");
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.severity(), ErrorSeverity::Medium);

        let err = ClientError::MissingConfig {
            field: "client.endpoint".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert!(err.user_friendly_message().contains("client.endpoint"));
    }
}
