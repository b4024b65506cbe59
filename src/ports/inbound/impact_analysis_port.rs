use crate::impact_analysis::domain::{AnalysisRequest, AnalysisResult};
use crate::shared::error::AnalysisError;
use async_trait::async_trait;

/// ImpactAnalysisPort - Inbound port for the change impact analysis use case
///
/// This is the interface driving adapters (the CLI, tests) use to run an
/// analysis. Implementations need not be `Send`: the console reporter keeps
/// interior state that lives on the calling task.
#[async_trait(?Send)]
pub trait ImpactAnalysisPort {
    /// Analyzes a request
    ///
    /// # Arguments
    /// * `request` - The architecture description and change request
    /// * `model_id` - Model to use; `None` selects the configured default
    ///
    /// # Errors
    /// Returns an error if:
    /// - The model is unknown or disabled
    /// - No provider is registered for the model's backend
    /// - Every attempt timed out or failed in transport
    async fn run_analysis(
        &self,
        request: &AnalysisRequest,
        model_id: Option<&str>,
    ) -> Result<AnalysisResult, AnalysisError>;
}
