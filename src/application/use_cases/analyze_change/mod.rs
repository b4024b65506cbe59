mod cache;


pub use cache::ResultCache;

use crate::application::factories::ProviderRegistry;
use crate::config::{AppConfig, ModelConfig};
use crate::impact_analysis::domain::{AnalysisRequest, AnalysisResult};
use crate::ports::inbound::ImpactAnalysisPort;
use crate::ports::outbound::{AnalysisProvider, Clock, ProgressReporter};
use crate::shared::error::AnalysisError;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// AnalysisOrchestrator - core use case for change impact analysis
///
/// Resolves the model, serves repeated requests from the cache, and drives
/// the selected provider under a per-attempt timeout with linear backoff
/// between attempts.
///
/// # Type Parameters
/// * `C` - Clock implementation used for cache ages and report timestamps
/// * `PR` - ProgressReporter implementation
pub struct AnalysisOrchestrator<C, PR> {
    config: AppConfig,
    registry: ProviderRegistry,
    clock: C,
    progress_reporter: PR,
    cache: ResultCache,
}

impl<C, PR> AnalysisOrchestrator<C, PR>
where
    C: Clock,
    PR: ProgressReporter,
{
    /// Creates a new orchestrator with injected dependencies
    pub fn new(
        config: AppConfig,
        registry: ProviderRegistry,
        clock: C,
        progress_reporter: PR,
    ) -> Self {
        Self {
            config,
            registry,
            clock,
            progress_reporter,
            cache: ResultCache::new(),
        }
    }

    /// Analyzes a request with the configured default model
    pub async fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> Result<AnalysisResult, AnalysisError> {
        let model_id = self.config.default_model.clone();
        self.analyze_with_model(request, &model_id).await
    }

    /// Analyzes a request with an explicitly selected model
    ///
    /// # Errors
    /// - `Configuration` when the model is unknown or disabled
    /// - `ProviderNotFound` when no adapter serves the model's provider
    /// - the last `Timeout` or `Transport` error once all attempts are spent
    pub async fn analyze_with_model(
        &self,
        request: &AnalysisRequest,
        model_id: &str,
    ) -> Result<AnalysisResult, AnalysisError> {
        let model = self.resolve_model(model_id)?;
        let settings = &self.config.analysis;

        let cache_key = ResultCache::key(&model.id, request);
        if let Some(cached) = self
            .cache
            .get(&cache_key, self.clock.now(), settings.cache_expiry_minutes)
        {
            tracing::debug!(model = %model.id, "Serving analysis from cache");
            self.progress_reporter
                .report(&format!("♻️  Using cached analysis for model '{}'", model.id));
            return Ok(cached);
        }

        let provider = self
            .registry
            .get(model.provider)
            .ok_or_else(|| AnalysisError::ProviderNotFound {
                provider: model.provider.to_string(),
            })?;

        self.progress_reporter.report(&format!(
            "🔍 Analyzing change impact with model '{}' ({})...",
            model.id, model.provider
        ));

        let result = self
            .run_with_retry(provider, request, model)
            .await?
            .at(self.clock.now());

        if settings.cache_results {
            self.cache.insert(cache_key, result.clone(), self.clock.now());
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Analysis complete: overall risk {}",
            result.risk_level()
        ));

        Ok(result)
    }

    /// Drops every cached result
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    /// Number of cached results, including expired ones not yet superseded
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    fn resolve_model(&self, model_id: &str) -> Result<&ModelConfig, AnalysisError> {
        let model = self.config.find_model(model_id).ok_or_else(|| {
            AnalysisError::configuration(format!("Model '{}' is not configured", model_id))
        })?;

        if !model.enabled {
            return Err(AnalysisError::configuration(format!(
                "Model '{}' is disabled",
                model_id
            )));
        }

        Ok(model)
    }

    async fn run_with_retry(
        &self,
        provider: Arc<dyn AnalysisProvider>,
        request: &AnalysisRequest,
        model: &ModelConfig,
    ) -> Result<AnalysisResult, AnalysisError> {
        let settings = &self.config.analysis;
        let max_attempts = settings.max_retries.max(1);
        let timeout = Duration::from_millis(settings.analysis_timeout_ms);
        let mut attempt = 1;

        loop {
            self.progress_reporter
                .report_attempt(attempt, max_attempts, Some(&model.id));

            // Dropping the provider future on timeout cancels the in-flight call
            let attempt_call = tokio::time::timeout(timeout, provider.analyze(request, model));
            let outcome = match attempt_call.await {
                Ok(outcome) => outcome,
                Err(_) => Err(AnalysisError::Timeout {
                    timeout_ms: settings.analysis_timeout_ms,
                }),
            };

            match outcome {
                Ok(result) => return Ok(result),
                Err(e) if !e.is_retryable() || attempt >= max_attempts => {
                    tracing::warn!(
                        model = %model.id,
                        attempt,
                        error = %e,
                        "Analysis failed"
                    );
                    self.progress_reporter.report_error(&format!(
                        "⚠️  Model '{}' gave no result after {} attempt(s)",
                        model.id, attempt
                    ));
                    return Err(e);
                }
                Err(e) => {
                    let backoff = Duration::from_millis(
                        settings.retry_backoff_ms.saturating_mul(u64::from(attempt)),
                    );
                    tracing::warn!(
                        model = %model.id,
                        attempt,
                        max_attempts,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %e,
                        "Analysis attempt failed, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
            }
        }
    }
}

#[async_trait(?Send)]
impl<C, PR> ImpactAnalysisPort for AnalysisOrchestrator<C, PR>
where
    C: Clock,
    PR: ProgressReporter,
{
    async fn run_analysis(
        &self,
        request: &AnalysisRequest,
        model_id: Option<&str>,
    ) -> Result<AnalysisResult, AnalysisError> {
        match model_id {
            Some(id) => self.analyze_with_model(request, id).await,
            None => self.analyze(request).await,
        }
    }
}
