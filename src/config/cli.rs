use crate::core::render::OutputFormat;
use crate::domain::ports::{ConfigProvider, DEFAULT_API_ENDPOINT, DEFAULT_MODEL};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "idea-fetcher")]
#[command(about = "Ask a generative model for high-priced Shopify app ideas")]
pub struct CliConfig {
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_API_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[arg(long, help = "Load service settings from a TOML file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn api_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        validate_non_empty_string("model", &self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from([
            "idea-fetcher",
            "--api-key",
            "abc",
            "--endpoint",
            "http://localhost:8080",
            "--format",
            "csv",
            "--verbose",
        ]);

        assert_eq!(config.api_key(), Some("abc"));
        assert_eq!(config.api_endpoint(), "http://localhost:8080");
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.format, OutputFormat::Csv);
        assert!(config.verbose);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = CliConfig::parse_from(["idea-fetcher", "--endpoint", "ftp://example.com"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(CliConfig::try_parse_from(["idea-fetcher", "--format", "xml"]).is_err());
    }
}
