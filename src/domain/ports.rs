use crate::domain::model::GenerationRequest;
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_API_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

pub trait ConfigProvider: Send + Sync {
    /// 憑證不存在時回傳 `None`，由抓取流程決定如何處理
    fn api_key(&self) -> Option<&str>;
    fn api_endpoint(&self) -> &str;
    fn model(&self) -> &str;
}

/// 生成式內容服務，回傳模型的原始文字輸出
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String>;
}
