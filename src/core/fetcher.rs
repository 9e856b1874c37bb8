use crate::core::extract::{extract_with_stage, parse_ideas};
use crate::domain::fallback::fallback_ideas;
use crate::domain::model::{AppIdea, FetchOutcome, GenerationRequest, IdeaSource};
use crate::domain::ports::{ConfigProvider, ContentGenerator};
use crate::utils::error::{IdeaError, Result};
use crate::utils::validation::validate_required_field;

pub const IDEA_PROMPT: &str = r#"
I need a list of 6 popular, expensive Shopify apps (apps that charge significant monthly subscriptions, ideally $50+/month) that have over 1000 reviews or are widely recognized as market leaders.

Use Google Search to find current real-world examples.

Return the result STRICTLY as a JSON array inside a markdown code block (```json ... ```).
Do not include any other text outside the code block.

The JSON object for each app must have these keys:
- "name": string (Name of the app)
- "estimatedPrice": string (e.g., "$99/mo" or "From $299/mo")
- "description": string (Short description of what it does)
- "category": string (e.g., Marketing, ERP, Returns, etc.)
- "reasonForSuccess": string (Why is it worth the high price?)
"#;

/// 向生成式 API 取得 app 點子；任何失敗都改用備援清單
pub struct IdeaFetcher<G: ContentGenerator, C: ConfigProvider> {
    generator: G,
    config: C,
}

impl<G: ContentGenerator, C: ConfigProvider> IdeaFetcher<G, C> {
    pub fn new(generator: G, config: C) -> Self {
        Self { generator, config }
    }

    /// 永遠回傳一份完整清單，不會把錯誤往上拋
    pub async fn fetch(&self) -> Vec<AppIdea> {
        self.fetch_with_source().await.ideas
    }

    pub async fn fetch_with_source(&self) -> FetchOutcome {
        match self.try_fetch().await {
            Ok(ideas) => {
                tracing::info!("Fetched {} app ideas from {}", ideas.len(), self.config.model());
                FetchOutcome {
                    ideas,
                    source: IdeaSource::Live,
                }
            }
            Err(e) => {
                tracing::warn!(
                    kind = ?e.kind(),
                    "Error fetching app ideas, serving fallback list: {}",
                    e
                );
                FetchOutcome {
                    ideas: fallback_ideas(),
                    source: IdeaSource::Fallback,
                }
            }
        }
    }

    /// 不含備援的完整流程：憑證檢查、請求、抽取、解析
    pub async fn try_fetch(&self) -> Result<Vec<AppIdea>> {
        let api_key = validate_required_field("API_KEY", self.config.api_key())?;

        let request = GenerationRequest {
            api_key,
            model: self.config.model(),
            prompt: IDEA_PROMPT,
            web_search: true,
        };

        tracing::debug!("Requesting app ideas from model {}", request.model);
        let text = self.generator.generate(&request).await?;
        if text.trim().is_empty() {
            return Err(IdeaError::EmptyResponseError);
        }

        let (stage, payload) = extract_with_stage(&text)?;
        tracing::debug!("Extracted JSON payload ({} bytes) via {:?}", payload.len(), stage);

        parse_ideas(payload)
    }
}
