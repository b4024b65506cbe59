/// Use cases module containing application business logic orchestration
mod analyze_change;

pub use analyze_change::{AnalysisOrchestrator, ResultCache};
