use crate::impact_analysis::domain::AnalysisRequest;
use crate::ports::outbound::RequestReader;
use crate::shared::error::AppError;
use crate::shared::security::validate_input_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for loading analysis requests from disk
///
/// Request files are JSON unless the extension is `.toml`. Every file passes
/// the symlink, regular-file and size checks before it is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn is_toml(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
    }

    fn parse(path: &Path, content: &str) -> Result<AnalysisRequest> {
        let parsed = if Self::is_toml(path) {
            toml::from_str::<AnalysisRequest>(content).map_err(|e| e.to_string())
        } else {
            serde_json::from_str::<AnalysisRequest>(content).map_err(|e| e.to_string())
        };

        parsed.map_err(|details| {
            AppError::RequestParseError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestReader for FileSystemReader {
    fn read_request(&self, path: &Path) -> Result<AnalysisRequest> {
        if !path.exists() {
            return Err(AppError::RequestNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the path passed with --request".to_string(),
            }
            .into());
        }

        validate_input_file(path, "request file")?;

        let content = fs::read_to_string(path).map_err(|e| AppError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        Self::parse(path, &content)
    }
}
