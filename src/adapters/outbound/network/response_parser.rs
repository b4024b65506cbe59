use crate::impact_analysis::domain::{AnalysisResult, ImpactedComponent, Recommendation, Severity};
use crate::impact_analysis::services::ReportSynthesizer;
use serde::Deserialize;
use thiserror::Error;

/// Why a model reply could not be turned into a report
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("reply is empty")]
    EmptyReply,

    #[error("reply does not contain a JSON object")]
    NoJsonObject,

    #[error("reply JSON is not a valid impact report: {0}")]
    InvalidReport(String),
}

/// Report shape models are asked to reply with
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportPayload {
    summary: String,
    risk_level: Severity,
    impacted_components: Vec<ImpactedComponent>,
    recommendations: Vec<Recommendation>,
    estimated_effort: String,
    timeline: String,
    dependencies: Vec<String>,
}

/// Extracts impact reports from free-form model replies
pub struct ResponseParser;

impl ResponseParser {
    /// Parses a model reply into a report
    ///
    /// Candidates are tried in order: the whole trimmed reply, the body of a
    /// ```json fence, then the first balanced top-level `{...}` span.
    pub fn parse_report(reply: &str, model_used: &str) -> Result<AnalysisResult, ParseError> {
        let trimmed = reply.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyReply);
        }

        let candidates = [
            Some(trimmed),
            Self::extract_fenced_json(trimmed),
            Self::extract_first_object(trimmed),
        ];

        let mut last_error = None;
        for candidate in candidates.into_iter().flatten() {
            match serde_json::from_str::<ReportPayload>(candidate) {
                Ok(payload) => return Ok(Self::into_result(payload, model_used)),
                Err(e) => last_error = Some(e),
            }
        }

        if Self::extract_first_object(trimmed).is_none() {
            return Err(ParseError::NoJsonObject);
        }

        Err(ParseError::InvalidReport(
            last_error.map(|e| e.to_string()).unwrap_or_default(),
        ))
    }

    /// Parses a reply, substituting the baseline report when it is unusable
    pub fn report_or_fallback(reply: &str, model_used: &str) -> AnalysisResult {
        match Self::parse_report(reply, model_used) {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(
                    model = model_used,
                    error = %e,
                    "Model reply could not be parsed, using fallback report"
                );
                ReportSynthesizer::fallback(model_used)
            }
        }
    }

    fn into_result(payload: ReportPayload, model_used: &str) -> AnalysisResult {
        let result = AnalysisResult::new(
            payload.summary,
            payload.impacted_components,
            payload.recommendations,
            payload.estimated_effort,
            payload.timeline,
            payload.dependencies,
            model_used.to_string(),
        );

        if result.risk_level() != payload.risk_level {
            tracing::debug!(
                reported = %payload.risk_level,
                derived = %result.risk_level(),
                "Replacing model-reported risk level with derived level"
            );
        }

        result
    }

    fn extract_fenced_json(text: &str) -> Option<&str> {
        let start = text.find("```json")? + "```json".len();
        let rest = &text[start..];
        let end = rest.find("```")?;
        Some(rest[..end].trim())
    }

    /// Returns the first `{...}` span whose braces balance, ignoring braces in strings
    fn extract_first_object(text: &str) -> Option<&str> {
        let start = text.find('{')?;
        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;

        for (offset, ch) in text[start..].char_indices() {
            if in_string {
                match ch {
                    _ if escaped => escaped = false,
                    '\\' => escaped = true,
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }

            match ch {
                '"' => in_string = true,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&text[start..=start + offset]);
                    }
                }
                _ => {}
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact_analysis::domain::ComponentCategory;

    const REPORT: &str = r#"{
        "summary": "Adds a Redis cache in front of the API",
        "riskLevel": "LOW",
        "impactedComponents": [
            {
                "name": "API",
                "type": "service",
                "impactLevel": "HIGH",
                "description": "Cache {invalidation} logic",
                "mitigationSteps": ["Add TTLs"]
            }
        ],
        "recommendations": [
            {
                "priority": "MEDIUM",
                "category": "performance",
                "title": "Size the cache",
                "description": "Estimate the working set",
                "implementationSteps": []
            }
        ],
        "estimatedEffort": "2-4 weeks",
        "timeline": "2-4 weeks (Standard timeline)",
        "dependencies": ["Redis"]
    }"#;

    #[test]
    fn test_parse_bare_json() {
        let result = ResponseParser::parse_report(REPORT, "gpt-4o").unwrap();
        assert_eq!(result.summary(), "Adds a Redis cache in front of the API");
        assert_eq!(result.impacted_components().len(), 1);
        assert_eq!(
            result.impacted_components()[0].category,
            ComponentCategory::Service
        );
        assert_eq!(result.dependencies(), &["Redis"]);
        assert_eq!(result.model_used(), "gpt-4o");
    }

    #[test]
    fn test_reported_risk_level_is_rederived() {
        let result = ResponseParser::parse_report(REPORT, "gpt-4o").unwrap();
        assert_eq!(result.risk_level(), Severity::Medium);
    }

    #[test]
    fn test_parse_fenced_json() {
        let reply = format!("Here is the analysis:\n```json\n{}\n```\nLet me know.", REPORT);
        let result = ResponseParser::parse_report(&reply, "gemini-pro").unwrap();
        assert_eq!(result.estimated_effort(), "2-4 weeks");
    }

    #[test]
    fn test_parse_embedded_object() {
        let reply = format!("Sure! {} Hope this helps {{not json}}", REPORT);
        let result = ResponseParser::parse_report(&reply, "gpt-4o").unwrap();
        assert_eq!(result.recommendations().len(), 1);
    }

    #[test]
    fn test_empty_reply() {
        assert_eq!(
            ResponseParser::parse_report("   \n", "gpt-4o").unwrap_err(),
            ParseError::EmptyReply
        );
    }

    #[test]
    fn test_reply_without_json() {
        assert_eq!(
            ResponseParser::parse_report("I cannot help with that.", "gpt-4o").unwrap_err(),
            ParseError::NoJsonObject
        );
    }

    #[test]
    fn test_missing_required_field() {
        let reply = r#"{"summary": "x", "riskLevel": "LOW"}"#;
        assert!(matches!(
            ResponseParser::parse_report(reply, "gpt-4o").unwrap_err(),
            ParseError::InvalidReport(_)
        ));
    }

    #[test]
    fn test_unknown_severity_is_rejected() {
        let reply = REPORT.replace("\"impactLevel\": \"HIGH\"", "\"impactLevel\": \"SEVERE\"");
        assert!(ResponseParser::parse_report(&reply, "gpt-4o").is_err());
    }

    #[test]
    fn test_fallback_on_unusable_reply() {
        let result = ResponseParser::report_or_fallback("no report today", "gpt-4o");
        assert!(result.impacted_components().is_empty());
        assert!(result.summary().contains("manual review"));
        assert_eq!(result.model_used(), "gpt-4o");
    }

    #[test]
    fn test_extract_first_object_skips_braces_in_strings() {
        let text = r#"prefix {"a": "}{", "b": {"c": 1}} suffix"#;
        assert_eq!(
            ResponseParser::extract_first_object(text),
            Some(r#"{"a": "}{", "b": {"c": 1}}"#)
        );
        assert_eq!(ResponseParser::extract_first_object("{ unbalanced"), None);
    }
}
