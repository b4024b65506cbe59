use super::prompt::{AnalysisPrompt, SYSTEM_PROMPT};
use super::response_parser::ResponseParser;
use crate::config::{ModelConfig, ProviderKind};
use crate::impact_analysis::domain::{AnalysisRequest, AnalysisResult};
use crate::ports::outbound::AnalysisProvider;
use crate::shared::error::AnalysisError;
use crate::shared::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const PROVIDER_NAME: &str = "OpenAI";

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

/// OpenAiProvider adapter for the OpenAI chat completions API
///
/// The configured model id is sent as the remote model name. The request
/// timeout comes from the model's `timeout_ms`; the orchestrator races the
/// whole call against its own analysis timeout on top of that.
pub struct OpenAiProvider {
    client: reqwest::Client,
}

impl OpenAiProvider {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: super::http_client()?,
        })
    }

    fn endpoint(model: &ModelConfig) -> String {
        let base = model.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        format!("{}/chat/completions", base.trim_end_matches('/'))
    }

    fn build_body<'a>(model: &'a ModelConfig, prompt: &'a str) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &model.id,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            max_tokens: model.max_tokens,
            temperature: model.temperature,
        }
    }

    /// Pulls the assistant text out of a raw response body
    fn reply_text(body: &str) -> Option<String> {
        serde_json::from_str::<ChatCompletionResponse>(body)
            .ok()?
            .choices
            .into_iter()
            .next()?
            .message
            .content
    }
}

#[async_trait]
impl AnalysisProvider for OpenAiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::OpenAi
    }

    async fn analyze(
        &self,
        request: &AnalysisRequest,
        model: &ModelConfig,
    ) -> std::result::Result<AnalysisResult, AnalysisError> {
        let api_key = model.credential().ok_or_else(|| {
            AnalysisError::configuration(format!(
                "OpenAI API key is not configured for model '{}' (set api_key or api_key_env)",
                model.id
            ))
        })?;

        let prompt = AnalysisPrompt::build(request);
        let body = Self::build_body(model, &prompt);
        let url = Self::endpoint(model);

        tracing::debug!(model = %model.id, url = %url, "Sending OpenAI chat completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .timeout(Duration::from_millis(model.timeout_ms))
            .json(&body)
            .send()
            .await
            .map_err(|e| AnalysisError::transport(PROVIDER_NAME, e.to_string()))?;

        let status = response.status();
        let raw = response
            .text()
            .await
            .map_err(|e| AnalysisError::transport(PROVIDER_NAME, e.to_string()))?;

        if !status.is_success() {
            return Err(AnalysisError::transport(
                PROVIDER_NAME,
                format!("API returned status code {}: {}", status, raw),
            ));
        }

        let reply = Self::reply_text(&raw).unwrap_or_default();
        Ok(ResponseParser::report_or_fallback(&reply, &model.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact_analysis::domain::{ArchitectureType, ChangeRequestRef};

    fn model() -> ModelConfig {
        ModelConfig {
            id: "gpt-4o".to_string(),
            provider: ProviderKind::OpenAi,
            api_key: None,
            api_key_env: None,
            base_url: Some("http://127.0.0.1:9/v1/".to_string()),
            ..ModelConfig::local()
        }
    }

    #[test]
    fn test_request_envelope() {
        let model = model();
        let body = serde_json::to_value(OpenAiProvider::build_body(&model, "prompt")).unwrap();
        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "prompt");
        assert_eq!(body["max_tokens"], 4000);
    }

    #[test]
    fn test_endpoint_honours_base_url() {
        assert_eq!(
            OpenAiProvider::endpoint(&model()),
            "http://127.0.0.1:9/v1/chat/completions"
        );
        let default = ModelConfig {
            base_url: None,
            ..model()
        };
        assert_eq!(
            OpenAiProvider::endpoint(&default),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_reply_text_extraction() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "{}"}}]}"#;
        assert_eq!(OpenAiProvider::reply_text(body), Some("{}".to_string()));
        assert_eq!(OpenAiProvider::reply_text(r#"{"choices": []}"#), None);
        assert_eq!(OpenAiProvider::reply_text("not json"), None);
    }

    #[tokio::test]
    async fn test_missing_credential_is_configuration_error() {
        let provider = OpenAiProvider::new().unwrap();
        let request = AnalysisRequest::builder(ArchitectureType::Monolithic)
            .change_request(ChangeRequestRef::text("Add caching layer"))
            .build()
            .unwrap();

        let err = provider.analyze(&request, &model()).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Configuration { .. }));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let provider = OpenAiProvider::new().unwrap();
        let request = AnalysisRequest::builder(ArchitectureType::Monolithic)
            .change_request(ChangeRequestRef::text("Add caching layer"))
            .build()
            .unwrap();
        let model = ModelConfig {
            api_key: Some("sk-test".to_string()),
            ..model()
        };

        let err = provider.analyze(&request, &model).await.unwrap_err();
        assert!(matches!(err, AnalysisError::Transport { .. }));
        assert!(err.is_retryable());
    }
}
