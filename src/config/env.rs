use crate::domain::ports::{ConfigProvider, DEFAULT_API_ENDPOINT, DEFAULT_MODEL};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};

pub const API_KEY_VAR: &str = "API_KEY";
pub const ENDPOINT_VAR: &str = "IDEA_FETCHER_ENDPOINT";
pub const MODEL_VAR: &str = "IDEA_FETCHER_MODEL";

/// 從行程環境變數讀取的設定
#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub api_key: Option<String>,
    pub api_endpoint: String,
    pub model: String,
}

impl EnvConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 以任意查詢函式建立，測試時不必修改真正的環境變數
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            api_key: lookup(API_KEY_VAR).filter(|k| !k.trim().is_empty()),
            api_endpoint: lookup(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            model: lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}

impl ConfigProvider for EnvConfig {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn api_endpoint(&self) -> &str {
        &self.api_endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }
}

impl Validate for EnvConfig {
    fn validate(&self) -> Result<()> {
        validate_url(ENDPOINT_VAR, &self.api_endpoint)?;
        validate_non_empty_string(MODEL_VAR, &self.model)
    }
}
