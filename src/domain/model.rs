use serde::{Deserialize, Deserializer, Serialize};

/// 一個 Shopify App Store 應用的描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppIdea {
    #[serde(deserialize_with = "non_empty_string")]
    pub name: String,
    pub estimated_price: String,
    pub description: String,
    pub category: String,
    pub reason_for_success: String,
}

impl AppIdea {
    pub fn new(
        name: &str,
        estimated_price: &str,
        description: &str,
        category: &str,
        reason_for_success: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            estimated_price: estimated_price.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            reason_for_success: reason_for_success.to_string(),
        }
    }
}

fn non_empty_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.trim().is_empty() {
        return Err(serde::de::Error::invalid_value(
            serde::de::Unexpected::Str(&value),
            &"a non-empty app name",
        ));
    }
    Ok(value)
}

/// 結果來源：模型即時回應或內建備援清單
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdeaSource {
    Live,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchOutcome {
    pub ideas: Vec<AppIdea>,
    pub source: IdeaSource,
}

/// 發送給生成式 API 的單次請求
#[derive(Debug, Clone)]
pub struct GenerationRequest<'a> {
    pub api_key: &'a str,
    pub model: &'a str,
    pub prompt: &'a str,
    pub web_search: bool,
}
