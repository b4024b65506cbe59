use crate::config::{ModelConfig, ProviderKind};
use crate::impact_analysis::domain::{AnalysisRequest, AnalysisResult};
use crate::impact_analysis::services::{ReportSynthesizer, RiskHeuristicEngine};
use crate::ports::outbound::AnalysisProvider;
use crate::shared::error::AnalysisError;
use async_trait::async_trait;
use std::time::Duration;

/// Fraction of the model timeout spent simulating backend latency
const LATENCY_DIVISOR: u64 = 20;

/// LocalHeuristicProvider adapter backed by the rule-based engine
///
/// Needs no credentials or network. Output depends only on the request,
/// apart from the analysis id and timestamp.
pub struct LocalHeuristicProvider;

impl LocalHeuristicProvider {
    pub fn new() -> Self {
        Self
    }

    fn simulated_latency(model: &ModelConfig) -> Duration {
        Duration::from_millis(model.timeout_ms / LATENCY_DIVISOR)
    }
}

impl Default for LocalHeuristicProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnalysisProvider for LocalHeuristicProvider {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Local
    }

    async fn analyze(
        &self,
        request: &AnalysisRequest,
        model: &ModelConfig,
    ) -> Result<AnalysisResult, AnalysisError> {
        tokio::time::sleep(Self::simulated_latency(model)).await;

        let components = RiskHeuristicEngine::analyze(request);
        tracing::debug!(
            model = %model.id,
            components = components.len(),
            "Heuristic analysis finished"
        );

        Ok(ReportSynthesizer::synthesize(request, components, &model.id))
    }
}
