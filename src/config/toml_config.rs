use crate::core::render::OutputFormat;
use crate::domain::ports::{ConfigProvider, DEFAULT_API_ENDPOINT, DEFAULT_MODEL};
use crate::utils::error::{IdeaError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern"));

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

fn default_endpoint() -> String {
    DEFAULT_API_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| IdeaError::ConfigError {
            message: format!("Cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| IdeaError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${API_KEY})，找不到的保留原字串
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.output.format
    }
}

impl ConfigProvider for TomlConfig {
    fn api_key(&self) -> Option<&str> {
        // 未被替換的 ${VAR} 視同沒有設定
        self.service
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty() && !ENV_VAR.is_match(key))
    }

    fn api_endpoint(&self) -> &str {
        &self.service.endpoint
    }

    fn model(&self) -> &str {
        &self.service.model
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("service.endpoint", &self.service.endpoint)?;
        validate_non_empty_string("service.model", &self.service.model)
    }
}
