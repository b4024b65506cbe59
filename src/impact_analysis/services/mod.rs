mod report_synthesizer;
mod risk_heuristics;

pub use report_synthesizer::ReportSynthesizer;
pub use risk_heuristics::RiskHeuristicEngine;
