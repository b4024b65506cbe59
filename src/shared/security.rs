use crate::shared::error::AppError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for request and configuration files (10 MB).
///
/// Requests carry inline diagram sources, which are small; anything larger
/// than this is rejected before it is read into memory.
pub const MAX_INPUT_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the symlink itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "request file") for error messages
///
/// # Errors
/// Returns an error if:
/// - The path metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file is larger than [`MAX_INPUT_FILE_SIZE`]
pub fn validate_input_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| AppError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(AppError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("The {} is a symbolic link", file_description),
            hint: "Pass the path of the regular file the link points to".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_INPUT_FILE_SIZE)
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(AppError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Reference large diagrams as files instead of inlining them".to_string(),
        }
        .into());
    }
    Ok(())
}
