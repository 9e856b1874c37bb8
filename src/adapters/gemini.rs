use crate::domain::model::GenerationRequest;
use crate::domain::ports::ContentGenerator;
use crate::utils::error::{IdeaError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GenerateContentResponse {
    /// 第一個候選回應中所有文字片段的串接
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Gemini `generateContent` REST 客戶端
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    fn generate_url(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    async fn generate(&self, request: &GenerationRequest<'_>) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![RequestPart {
                    text: request.prompt,
                }],
            }],
            tools: if request.web_search {
                vec![Tool {
                    google_search: GoogleSearch {},
                }]
            } else {
                Vec::new()
            },
        };

        let url = self.generate_url(request.model);
        tracing::debug!("Making generateContent request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", request.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Generative API response status: {}", status);

        if !status.is_success() {
            let raw = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorBody>(&raw)
                .map(|b| b.error.message)
                .unwrap_or(raw);
            return Err(IdeaError::ServiceError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        parsed.text().ok_or(IdeaError::EmptyResponseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn request(web_search: bool) -> GenerationRequest<'static> {
        GenerationRequest {
            api_key: "secret",
            model: "gemini-2.5-flash",
            prompt: "list apps",
            web_search,
        }
    }

    #[tokio::test]
    async fn test_generate_concatenates_text_parts() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-2.5-flash:generateContent")
                .header("x-goog-api-key", "secret")
                .json_body(serde_json::json!({
                    "contents": [{"role": "user", "parts": [{"text": "list apps"}]}],
                    "tools": [{"google_search": {}}]
                }));
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "candidates": [{
                        "content": {"role": "model", "parts": [{"text": "```json\n[]"}, {"text": "\n```"}]}
                    }]
                }));
        });

        let client = GeminiClient::new(server.base_url());
        let text = client.generate(&request(true)).await.unwrap();

        api_mock.assert();
        assert_eq!(text, "```json\n[]\n```");
    }

    #[tokio::test]
    async fn test_generate_without_web_search_omits_tools() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1beta/models/gemini-2.5-flash:generateContent")
                .json_body(serde_json::json!({
                    "contents": [{"role": "user", "parts": [{"text": "list apps"}]}]
                }));
            then.status(200).json_body(serde_json::json!({
                "candidates": [{"content": {"parts": [{"text": "[]"}]}}]
            }));
        });

        let client = GeminiClient::new(format!("{}/", server.base_url()));
        let text = client.generate(&request(false)).await.unwrap();

        api_mock.assert();
        assert_eq!(text, "[]");
    }

    #[tokio::test]
    async fn test_service_error_uses_api_message() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST);
            then.status(400).json_body(serde_json::json!({
                "error": {"code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT"}
            }));
        });

        let client = GeminiClient::new(server.base_url());
        let err = client.generate(&request(true)).await.unwrap_err();

        api_mock.assert();
        match err {
            IdeaError::ServiceError { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_service_error_with_plain_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(500).body("upstream exploded");
        });

        let client = GeminiClient::new(server.base_url());
        let err = client.generate(&request(true)).await.unwrap_err();

        assert!(matches!(
            err,
            IdeaError::ServiceError { status: 500, ref message } if message == "upstream exploded"
        ));
    }

    #[tokio::test]
    async fn test_no_candidates_is_empty_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST);
            then.status(200).json_body(serde_json::json!({
                "candidates": [],
                "promptFeedback": {"blockReason": "SAFETY"}
            }));
        });

        let client = GeminiClient::new(server.base_url());
        let err = client.generate(&request(true)).await.unwrap_err();

        assert!(matches!(err, IdeaError::EmptyResponseError));
    }
}
