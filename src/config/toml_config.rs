use crate::config::{
    DEFAULT_API_ENDPOINT, DEFAULT_DASHBOARD_SIZE, DEFAULT_TIMEOUT_SECONDS, DEFAULT_TITLE,
};
use crate::core::{ConfigProvider, SourceKind};
use crate::utils::error::{ChefError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub source: SourceConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub title: Option<String>,
    pub dashboard_size: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub r#type: SourceKind,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ChefError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${RECIPES_API})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ChefError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if self.source.r#type == SourceKind::Http {
            let endpoint = self.source.endpoint.as_deref().ok_or_else(|| {
                ChefError::MissingConfigError {
                    field: "source.endpoint".to_string(),
                }
            })?;
            crate::utils::validation::validate_url("source.endpoint", endpoint)?;
        }

        if let Some(title) = &self.app.title {
            crate::utils::validation::validate_non_empty_string("app.title", title)?;
        }

        crate::utils::validation::validate_positive_number(
            "app.dashboard_size",
            self.dashboard_size(),
            1,
        )?;

        if let Some(timeout) = self.source.timeout_seconds {
            crate::utils::validation::validate_range("source.timeout_seconds", timeout, 1, 300)?;
        }

        Ok(())
    }

    pub fn verbose_logging(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.level.as_deref())
            .is_some_and(|level| matches!(level, "debug" | "trace"))
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn source_kind(&self) -> SourceKind {
        self.source.r#type
    }

    fn api_endpoint(&self) -> &str {
        self.source.endpoint.as_deref().unwrap_or(DEFAULT_API_ENDPOINT)
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn app_title(&self) -> &str {
        self.app.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }

    fn dashboard_size(&self) -> usize {
        self.app.dashboard_size.unwrap_or(DEFAULT_DASHBOARD_SIZE)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
