use crate::domain::model::AppIdea;
use crate::utils::error::{IdeaError, Result};
use regex::Regex;
use std::sync::LazyLock;

static JSON_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```json\s*(.*?)```").expect("json fence pattern"));

// 兩個 fence 之間的全部內容，包含可能的語言標籤
static ANY_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").expect("fence pattern"));

/// 找到 payload 的階段，依序嘗試
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadStage {
    JsonFence,
    AnyFence,
    Brackets,
}

const STAGES: [(PayloadStage, fn(&str) -> Option<&str>); 3] = [
    (PayloadStage::JsonFence, json_fence),
    (PayloadStage::AnyFence, any_fence),
    (PayloadStage::Brackets, brackets),
];

fn first_capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|payload| !payload.is_empty())
}

fn json_fence(text: &str) -> Option<&str> {
    first_capture(&JSON_FENCE, text)
}

fn any_fence(text: &str) -> Option<&str> {
    first_capture(&ANY_FENCE, text)
}

fn brackets(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end <= start {
        return None;
    }
    Some(&text[start..=end])
}

/// 從模型回應中取出 JSON payload，並回報是哪個階段命中
pub fn extract_with_stage(text: &str) -> Result<(PayloadStage, &str)> {
    STAGES
        .iter()
        .find_map(|(stage, attempt)| attempt(text).map(|payload| (*stage, payload)))
        .ok_or(IdeaError::NoPayloadError)
}

pub fn extract_json_payload(text: &str) -> Result<&str> {
    extract_with_stage(text).map(|(_, payload)| payload)
}

/// 將 payload 反序列化為 `AppIdea` 陣列。先確認是合法 JSON，再檢查欄位，兩種錯誤分開回報。
pub fn parse_ideas(payload: &str) -> Result<Vec<AppIdea>> {
    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(IdeaError::PayloadSyntaxError)?;
    serde_json::from_value::<Vec<AppIdea>>(value).map_err(IdeaError::ShapeError)
}
