/// Mock implementations for testing
mod mock_analysis_provider;
mod mock_clock;
mod mock_progress_reporter;

pub use mock_analysis_provider::{MockAnalysisProvider, ScriptedReplyProvider};
pub use mock_clock::MockClock;
pub use mock_progress_reporter::MockProgressReporter;
