use crate::impact_analysis::domain::AnalysisResult;
use crate::shared::Result;

/// ReportFormatter port for rendering impact reports
///
/// This port abstracts the output formats (JSON, Markdown, etc.).
pub trait ReportFormatter {
    /// Formats a finished impact report
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, result: &AnalysisResult) -> Result<String>;
}
