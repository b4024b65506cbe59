use arch_impact::adapters::outbound::network::ResponseParser;
use arch_impact::prelude::*;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Mock AnalysisProvider that replays a scripted sequence of outcomes
///
/// Once the script is exhausted the last outcome repeats.
pub struct MockAnalysisProvider {
    kind: ProviderKind,
    script: Mutex<VecDeque<std::result::Result<(), AnalysisError>>>,
    calls: Arc<AtomicUsize>,
}

impl MockAnalysisProvider {
    pub fn new(kind: ProviderKind) -> Self {
        Self {
            kind,
            script: Mutex::new(VecDeque::new()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn then_fail(self, error: AnalysisError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn then_succeed(self) -> Self {
        self.script.lock().unwrap().push_back(Ok(()));
        self
    }

    /// Shared call counter, readable after the provider moves into a registry
    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    fn next_outcome(&self) -> std::result::Result<(), AnalysisError> {
        let mut script = self.script.lock().unwrap();
        if script.len() > 1 {
            script.pop_front().unwrap_or(Ok(()))
        } else {
            script.front().cloned().unwrap_or(Ok(()))
        }
    }
}

#[async_trait]
impl AnalysisProvider for MockAnalysisProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn analyze(
        &self,
        request: &AnalysisRequest,
        model: &ModelConfig,
    ) -> std::result::Result<AnalysisResult, AnalysisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.next_outcome()?;
        let components = RiskHeuristicEngine::analyze(request);
        Ok(ReportSynthesizer::synthesize(request, components, &model.id))
    }
}

/// Provider that answers with a fixed model reply, run through the real parser
pub struct ScriptedReplyProvider {
    kind: ProviderKind,
    reply: String,
}

impl ScriptedReplyProvider {
    pub fn new(kind: ProviderKind, reply: impl Into<String>) -> Self {
        Self {
            kind,
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl AnalysisProvider for ScriptedReplyProvider {
    fn kind(&self) -> ProviderKind {
        self.kind
    }

    async fn analyze(
        &self,
        _request: &AnalysisRequest,
        model: &ModelConfig,
    ) -> std::result::Result<AnalysisResult, AnalysisError> {
        Ok(ResponseParser::report_or_fallback(&self.reply, &model.id))
    }
}
