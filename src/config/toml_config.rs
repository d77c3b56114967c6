use crate::core::server::{ServerSettings, DEFAULT_MAX_BODY_BYTES, DEFAULT_REQUEST_TIMEOUT};
use crate::utils::error::{KataError, Result};
use crate::utils::logger::DEFAULT_LOG_LEVEL;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_CLIENT_TIMEOUT_SECS: u64 = 30;
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// 課程伺服器與用戶端的 TOML 設定；所有區段皆為選填
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LessonConfig {
    pub server: Option<ServerSection>,
    pub file_server: Option<FileServerSection>,
    pub client: Option<ClientSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
    pub max_body_bytes: Option<usize>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileServerSection {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientSection {
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl LessonConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(KataError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| KataError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LESSON_FILE})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| KataError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(server) = &self.server {
            if let Some(bind) = &server.bind {
                validation::validate_socket_addr("server.bind", bind)?;
            }
            if let Some(max_body) = server.max_body_bytes {
                validation::validate_range("server.max_body_bytes", max_body, 1, 64 * 1024 * 1024)?;
            }
            if let Some(timeout) = server.request_timeout_secs {
                validation::validate_range("server.request_timeout_secs", timeout, 1, 3600)?;
            }
        }

        if let Some(path) = self.file_server.as_ref().and_then(|f| f.path.as_deref()) {
            validation::validate_path("file_server.path", path)?;
        }

        if let Some(timeout) = self.client.as_ref().and_then(|c| c.timeout_secs) {
            validation::validate_range("client.timeout_secs", timeout, 1, 3600)?;
        }

        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
            }
            if let Some(format) = &logging.format {
                validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
            }
        }

        Ok(())
    }

    /// `override_bind` 優先於設定檔
    pub fn bind_addr(&self, override_bind: Option<&str>) -> Result<SocketAddr> {
        let bind = override_bind
            .or_else(|| self.server.as_ref().and_then(|s| s.bind.as_deref()))
            .unwrap_or(DEFAULT_BIND);
        validation::validate_socket_addr("server.bind", bind)
    }

    pub fn server_settings(&self) -> ServerSettings {
        let server = self.server.clone().unwrap_or_default();
        ServerSettings {
            max_body_bytes: server.max_body_bytes.unwrap_or(DEFAULT_MAX_BODY_BYTES),
            request_timeout: server
                .request_timeout_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT),
        }
    }

    pub fn file_path(&self) -> Option<&str> {
        self.file_server.as_ref().and_then(|f| f.path.as_deref())
    }

    pub fn client_timeout(&self) -> Duration {
        Duration::from_secs(
            self.client
                .as_ref()
                .and_then(|c| c.timeout_secs)
                .unwrap_or(DEFAULT_CLIENT_TIMEOUT_SECS),
        )
    }

    pub fn log_format(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .unwrap_or("compact")
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

impl Validate for LessonConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
