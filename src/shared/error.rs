use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - analysis completed, risk below any configured threshold
    Success = 0,
    /// Overall risk reached the `--fail-on` threshold
    RiskAboveThreshold = 1,
    /// Invalid command-line arguments or an unusable request file
    InvalidArguments = 2,
    /// Application error (provider error, configuration error, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::RiskAboveThreshold => write!(f, "Risk Above Threshold (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-edge errors (files, requests, validation).
///
/// These carry user-facing hints and are converted into `anyhow::Error`
/// at the CLI boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Request file not found: {path}\n\n💡 Hint: {suggestion}")]
    RequestNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse request file: {path}\nDetails: {details}\n\n💡 Hint: Requests must be JSON, or TOML when the file ends in .toml")]
    RequestParseError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for builder patterns
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

/// Errors surfaced by providers and the analysis orchestrator.
///
/// Configuration and routing failures are fatal; timeouts and transport
/// failures are retried by the orchestrator.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("No analysis provider registered for '{provider}'")]
    ProviderNotFound { provider: String },

    #[error("Analysis timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("{provider} request failed: {details}")]
    Transport { provider: String, details: String },
}

impl AnalysisError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn transport(provider: impl Into<String>, details: impl Into<String>) -> Self {
        Self::Transport {
            provider: provider.into(),
            details: details.into(),
        }
    }

    /// Whether another attempt may succeed where this one failed
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Transport { .. })
    }
}
