use clap::ValueEnum;
use std::fmt;

/// Report output formats understood by the formatter factory and the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON in the report's camelCase wire shape
    #[default]
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl OutputFormat {
    /// Conventional file extension for reports in this format
    pub fn file_extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}
