use crate::impact_analysis::domain::AnalysisRequest;
use crate::shared::Result;
use std::path::Path;

/// RequestReader port for loading analysis requests
///
/// This port abstracts where requests come from (request files on disk,
/// or fixtures in tests).
pub trait RequestReader {
    /// Reads and parses an analysis request
    ///
    /// # Arguments
    /// * `path` - Location of the request document
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or fails the security checks
    /// - The content is not a valid request (e.g. the change request is missing)
    fn read_request(&self, path: &Path) -> Result<AnalysisRequest>;
}
