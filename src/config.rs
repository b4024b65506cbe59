//! Configuration file support for arch-impact.
//!
//! Provides YAML-based configuration through `arch-impact.config.yml` files,
//! including data structures, file loading, and validation. The loaded value
//! is passed explicitly to the orchestrator; there is no global config.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use crate::shared::security::validate_input_file;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "arch-impact.config.yml";

/// Identifier of the built-in heuristic model
pub const LOCAL_MODEL_ID: &str = "local-heuristic";

/// Analysis backends this build knows how to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProviderKind {
    #[serde(rename = "openai")]
    OpenAi,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "local")]
    Local,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
            ProviderKind::Local => "local",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable analysis model
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ModelConfig {
    pub id: String,
    pub provider: ProviderKind,
    /// Inline credential. Prefer `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Name of the environment variable holding the credential
    #[serde(default)]
    pub api_key_env: Option<String>,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_model_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Overrides the provider's public endpoint (gateways, proxies)
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ModelConfig {
    /// The built-in model backed by the heuristic engine
    pub fn local() -> Self {
        Self {
            id: LOCAL_MODEL_ID.to_string(),
            provider: ProviderKind::Local,
            api_key: None,
            api_key_env: None,
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_ms: 2_000,
            enabled: true,
            base_url: None,
        }
    }

    /// Resolves the credential: inline key first, then the named environment variable
    pub fn credential(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| {
                self.api_key_env
                    .as_deref()
                    .and_then(|var| std::env::var(var).ok())
                    .filter(|k| !k.trim().is_empty())
            })
    }
}

/// Cache, retry and timeout policy for the orchestrator
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub cache_results: bool,
    pub cache_expiry_minutes: u64,
    /// Total attempts per analysis, including the first
    pub max_retries: u32,
    pub analysis_timeout_ms: u64,
    /// Base of the linear backoff: attempt N waits N x this before retrying
    pub retry_backoff_ms: u64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            cache_results: true,
            cache_expiry_minutes: 60,
            max_retries: 3,
            analysis_timeout_ms: 30_000,
            retry_backoff_ms: 1_000,
        }
    }
}

/// Top-level configuration file schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_model: String,
    pub models: Vec<ModelConfig>,
    pub analysis: AnalysisSettings,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_model: LOCAL_MODEL_ID.to_string(),
            models: vec![ModelConfig::local()],
            analysis: AnalysisSettings::default(),
            unknown_fields: HashMap::new(),
        }
    }
}

impl AppConfig {
    pub fn find_model(&self, id: &str) -> Option<&ModelConfig> {
        self.models.iter().find(|m| m.id == id)
    }
}

fn default_max_tokens() -> u32 {
    4_000
}

fn default_temperature() -> f32 {
    0.3
}

fn default_model_timeout_ms() -> u64 {
    30_000
}

fn default_true() -> bool {
    true
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<AppConfig> {
    validate_input_file(path, "config file").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: AppConfig = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<AppConfig>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
pub fn validate_config(config: &AppConfig) -> Result<()> {
    if config.analysis.max_retries == 0 {
        bail!(
            "Invalid config: analysis.max_retries must be at least 1.\n\n\
             💡 Hint: max_retries counts every attempt, including the first."
        );
    }

    if config.analysis.analysis_timeout_ms == 0 {
        bail!("Invalid config: analysis.analysis_timeout_ms must be greater than 0.");
    }

    let mut seen = HashSet::new();
    for (i, model) in config.models.iter().enumerate() {
        if model.id.trim().is_empty() {
            bail!(
                "Invalid config: models[{}].id must not be empty.\n\n\
                 💡 Hint: Each model needs an id such as \"gpt-4o\" or \"gemini-1.5-pro\".",
                i
            );
        }
        if !seen.insert(model.id.as_str()) {
            bail!("Invalid config: model id '{}' is defined more than once.", model.id);
        }
        if !(0.0..=2.0).contains(&model.temperature) {
            bail!(
                "Invalid config: models[{}].temperature must be between 0.0 and 2.0 (got {}).",
                i,
                model.temperature
            );
        }
    }

    if config.find_model(&config.default_model).is_none() {
        bail!(
            "Invalid config: default_model '{}' is not one of the configured models.\n\n\
             💡 Hint: Add it under 'models' or pick one of: {}",
            config.default_model,
            config
                .models
                .iter()
                .map(|m| m.id.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &AppConfig) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
