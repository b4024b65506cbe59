use crate::impact_analysis::domain::{AnalysisResult, Severity};

/// Optional CI gate on the overall risk level
///
/// With no threshold the gate never trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RiskGate {
    threshold: Option<Severity>,
}

impl RiskGate {
    pub fn new(threshold: Option<Severity>) -> Self {
        Self { threshold }
    }

    /// True when the result's risk is at or above the threshold
    pub fn trips(&self, result: &AnalysisResult) -> bool {
        self.threshold
            .is_some_and(|threshold| result.risk_level() >= threshold)
    }

    pub fn threshold(&self) -> Option<Severity> {
        self.threshold
    }
}
