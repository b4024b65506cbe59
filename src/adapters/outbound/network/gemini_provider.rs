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

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const PROVIDER_NAME: &str = "Gemini";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'static str>,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

/// GeminiProvider adapter for the Gemini `generateContent` API
pub struct GeminiProvider {
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: super::http_client()?,
        })
    }

    fn endpoint(model: &ModelConfig) -> String {
        let base = model.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        format!(
            "{}/models/{}:generateContent",
            base.trim_end_matches('/'),
            urlencoding::encode(&model.id)
        )
    }

    fn build_body<'a>(model: &ModelConfig, prompt: &'a str) -> GenerateContentRequest<'a> {
        GenerateContentRequest {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_PROMPT,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: model.temperature,
                max_output_tokens: model.max_tokens,
            },
        }
    }

    /// Joins the text parts of the first candidate
    fn reply_text(body: &str) -> Option<String> {
        let candidate = serde_json::from_str::<GenerateContentResponse>(body)
            .ok()?
            .candidates
            .into_iter()
            .next()?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();

        Some(text)
    }
}

#[async_trait]
impl AnalysisProvider for GeminiProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    async fn analyze(
        &self,
        request: &AnalysisRequest,
        model: &ModelConfig,
    ) -> std::result::Result<AnalysisResult, AnalysisError> {
        let api_key = model.credential().ok_or_else(|| {
            AnalysisError::configuration(format!(
                "Gemini API key is not configured for model '{}' (set api_key or api_key_env)",
                model.id
            ))
        })?;

        let prompt = AnalysisPrompt::build(request);
        let body = Self::build_body(model, &prompt);
        let url = Self::endpoint(model);

        tracing::debug!(model = %model.id, url = %url, "Sending Gemini generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
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
