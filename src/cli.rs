use clap::Parser;
use std::path::PathBuf;

use arch_impact::application::dto::OutputFormat;
use arch_impact::impact_analysis::domain::Severity;

/// Assess how a proposed change affects an existing system architecture
#[derive(Parser, Debug)]
#[command(name = "arch-impact")]
#[command(version)]
#[command(about = "Assess how a proposed change affects an existing system architecture", long_about = None)]
pub struct Args {
    /// Request file describing the architecture and the change (JSON, or TOML for .toml)
    #[arg(short, long, value_name = "FILE")]
    pub request: PathBuf,

    /// Configuration file (defaults to ./arch-impact.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Model id to analyze with (defaults to the configured default_model)
    #[arg(short, long, value_name = "ID")]
    pub model: Option<String>,

    /// Output format: json or markdown
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Do not store results in the in-process cache
    #[arg(long)]
    pub no_cache: bool,

    /// Exit with code 1 when the overall risk is at or above this level
    #[arg(long, value_name = "SEVERITY", value_parser = parse_severity)]
    pub fail_on: Option<Severity>,

    /// Print diagnostic logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn parse_severity(value: &str) -> Result<Severity, String> {
    value.parse()
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_arguments() {
        let args = Args::try_parse_from(["arch-impact", "-r", "request.json"]).unwrap();
        assert_eq!(args.request, PathBuf::from("request.json"));
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.model.is_none());
        assert!(args.fail_on.is_none());
        assert!(!args.no_cache);
        assert!(!args.verbose);
    }

    #[test]
    fn test_full_arguments() {
        let args = Args::try_parse_from([
            "arch-impact",
            "--request",
            "request.toml",
            "-c",
            "custom.yml",
            "-m",
            "gpt-4o",
            "-f",
            "md",
            "-o",
            "report.md",
            "--no-cache",
            "--fail-on",
            "high",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.config, Some(PathBuf::from("custom.yml")));
        assert_eq!(args.model.as_deref(), Some("gpt-4o"));
        assert_eq!(args.format, OutputFormat::Markdown);
        assert_eq!(args.output, Some(PathBuf::from("report.md")));
        assert!(args.no_cache);
        assert_eq!(args.fail_on, Some(Severity::High));
        assert!(args.verbose);
    }

    #[test]
    fn test_request_is_required() {
        assert!(Args::try_parse_from(["arch-impact"]).is_err());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(Args::try_parse_from(["arch-impact", "-r", "r.json", "-f", "xml"]).is_err());
        assert!(
            Args::try_parse_from(["arch-impact", "-r", "r.json", "--fail-on", "severe"]).is_err()
        );
    }
}
