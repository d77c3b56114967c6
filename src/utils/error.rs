use thiserror::Error;

#[derive(Error, Debug)]
pub enum KataError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid input for {kata}: {message}")]
    InvalidInput { kata: String, message: String },

    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Upstream {url} responded with status {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Malformed HTTP request: {message}")]
    BadRequest { message: String },

    #[error("Request body exceeds limit of {limit} bytes")]
    PayloadTooLarge { limit: usize },

    #[error("Timed out after {seconds}s while {operation}")]
    Timeout { operation: String, seconds: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl KataError {
    pub fn invalid_input(kata: &str, message: impl Into<String>) -> Self {
        KataError::InvalidInput {
            kata: kata.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            KataError::InvalidInput { .. }
            | KataError::InvalidUrl { .. }
            | KataError::BadRequest { .. }
            | KataError::PayloadTooLarge { .. }
            | KataError::SerializationError(_) => ErrorCategory::Input,
            KataError::HttpError(_) | KataError::HttpStatus { .. } | KataError::Timeout { .. } => {
                ErrorCategory::Network
            }
            KataError::ConfigError { .. }
            | KataError::ConfigValidationError { .. }
            | KataError::InvalidConfigValueError { .. }
            | KataError::MissingConfigError { .. } => ErrorCategory::Configuration,
            KataError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            // 網路錯誤通常可以重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            KataError::IoError(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
                "Pick another --bind address or stop the process holding the port".to_string()
            }
            KataError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound => {
                "Check that the file or directory path exists".to_string()
            }
            KataError::IoError(_) => "Check file permissions and available disk space".to_string(),
            KataError::HttpError(_) | KataError::Timeout { .. } => {
                "Check network connectivity and retry".to_string()
            }
            KataError::HttpStatus { status, .. } if *status >= 500 => {
                "The upstream server failed; retry later".to_string()
            }
            KataError::HttpStatus { .. } => "Check the requested URL".to_string(),
            KataError::SerializationError(_) => "Check that the input is valid JSON".to_string(),
            KataError::ConfigError { .. }
            | KataError::ConfigValidationError { .. }
            | KataError::InvalidConfigValueError { .. }
            | KataError::MissingConfigError { .. } => {
                "Review the configuration file and command-line flags".to_string()
            }
            KataError::InvalidInput { kata, .. } => {
                format!("Run `kata-archive {} --help` for the expected input", kata)
            }
            KataError::InvalidUrl { .. } => {
                "Pass an absolute http:// or https:// URL".to_string()
            }
            KataError::BadRequest { .. } => "Send a well-formed HTTP/1.1 request".to_string(),
            KataError::PayloadTooLarge { .. } => {
                "Send a smaller body or raise server.max_body_bytes".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Input rejected: {}", self),
            ErrorCategory::Network => format!("Network problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    /// 對應 CLI 退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, KataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_high_severity() {
        let err = KataError::invalid_input("pig-latin", "empty word");
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("pig-latin"));
    }

    #[test]
    fn test_bad_url_is_an_input_error() {
        let err = KataError::InvalidUrl {
            url: "ftp://example.com".to_string(),
            reason: "unsupported scheme".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.exit_code(), 1);
        assert!(!err.recovery_suggestion().contains("configuration"));
    }

    #[test]
    fn test_network_errors_are_retryable() {
        let err = KataError::HttpStatus {
            url: "http://localhost/".to_string(),
            status: 503,
        };
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(err.exit_code(), 2);
        assert!(err.user_friendly_message().starts_with("Network problem"));
    }

    #[test]
    fn test_io_error_is_critical() {
        let err = KataError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.recovery_suggestion().contains("path"));
    }
}
