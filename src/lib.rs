pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{EnvConfig, TomlConfig};

pub use adapters::gemini::GeminiClient;
pub use crate::core::{fetcher::IdeaFetcher, render::OutputFormat};
pub use domain::fallback::fallback_ideas;
pub use domain::model::{AppIdea, FetchOutcome, IdeaSource};
pub use domain::ports::ConfigProvider;
pub use utils::error::{IdeaError, Result};

/// 以環境變數 (`API_KEY`) 設定的 Gemini 客戶端抓取點子，失敗時回傳備援清單
pub async fn fetch_ideas() -> Vec<AppIdea> {
    let config = EnvConfig::from_env();
    let generator = GeminiClient::new(config.api_endpoint());
    IdeaFetcher::new(generator, config).fetch().await
}
