use crate::config::{ModelConfig, ProviderKind};
use crate::impact_analysis::domain::{AnalysisRequest, AnalysisResult};
use crate::shared::error::AnalysisError;
use async_trait::async_trait;

/// AnalysisProvider port for turning a request into an impact report
///
/// One implementation exists per analysis backend. Implementations differ
/// only in how they serialize the request, call out, and read the reply.
///
/// # Async Support
/// Implementations must be `Send + Sync` so the registry can share them
/// behind `Arc`.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    /// The backend this provider serves; used as the registry key
    fn kind(&self) -> ProviderKind;

    /// Analyzes a request with the given model settings
    ///
    /// # Arguments
    /// * `request` - The architecture description and change request
    /// * `model` - Model settings (credentials, token budget, temperature, timeout)
    ///
    /// # Errors
    /// Returns an error if:
    /// - The backend needs credentials and none are configured (`Configuration`)
    /// - The remote call fails or returns a non-success status (`Transport`)
    ///
    /// A reply that cannot be interpreted is not an error: implementations
    /// substitute a baseline report instead.
    async fn analyze(
        &self,
        request: &AnalysisRequest,
        model: &ModelConfig,
    ) -> Result<AnalysisResult, AnalysisError>;
}
