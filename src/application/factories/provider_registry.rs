use crate::adapters::outbound::local::LocalHeuristicProvider;
use crate::adapters::outbound::network::{GeminiProvider, OpenAiProvider};
use crate::config::ProviderKind;
use crate::ports::outbound::AnalysisProvider;
use crate::shared::Result;
use std::collections::HashMap;
use std::sync::Arc;

/// Provider adapters keyed by backend
///
/// Built once at startup and shared read-only by the orchestrator.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<ProviderKind, Arc<dyn AnalysisProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every backend this build ships
    ///
    /// # Errors
    /// Returns an error if the HTTP client for the remote backends cannot be built
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new()
            .register(Arc::new(LocalHeuristicProvider::new()))
            .register(Arc::new(OpenAiProvider::new()?))
            .register(Arc::new(GeminiProvider::new()?)))
    }

    /// Adds a provider under its own kind, replacing any previous one
    pub fn register(mut self, provider: Arc<dyn AnalysisProvider>) -> Self {
        self.providers.insert(provider.kind(), provider);
        self
    }

    pub fn get(&self, kind: ProviderKind) -> Option<Arc<dyn AnalysisProvider>> {
        self.providers.get(&kind).cloned()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_cover_every_kind() {
        let registry = ProviderRegistry::with_defaults().unwrap();
        assert_eq!(registry.len(), 3);
        for kind in [ProviderKind::Local, ProviderKind::OpenAi, ProviderKind::Gemini] {
            assert_eq!(registry.get(kind).unwrap().kind(), kind);
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ProviderRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get(ProviderKind::Local).is_none());
    }

    #[test]
    fn test_register_replaces_same_kind() {
        let registry = ProviderRegistry::new()
            .register(Arc::new(LocalHeuristicProvider::new()))
            .register(Arc::new(LocalHeuristicProvider::new()));
        assert_eq!(registry.len(), 1);
    }
}
