mod cli;

use arch_impact::adapters::outbound::console::StderrProgressReporter;
use arch_impact::adapters::outbound::filesystem::FileSystemReader;
use arch_impact::adapters::outbound::system::SystemClock;
use arch_impact::application::dto::RiskGate;
use arch_impact::application::factories::{
    FormatterFactory, PresenterFactory, PresenterType, ProviderRegistry,
};
use arch_impact::application::use_cases::AnalysisOrchestrator;
use arch_impact::config::{discover_config, load_config_from_path, AppConfig};
use arch_impact::impact_analysis::domain::Severity;
use arch_impact::ports::inbound::ImpactAnalysisPort;
use arch_impact::ports::outbound::RequestReader;
use arch_impact::shared::error::{AppError, ExitCode};
use arch_impact::shared::Result;
use cli::Args;
use owo_colors::OwoColorize;
use std::process;

#[tokio::main]
async fn main() {
    let args = Args::parse_args();
    init_tracing(args.verbose);

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            exit_code_for(&e)
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    let mut config = load_config(&args)?;
    if args.no_cache {
        config.analysis.cache_results = false;
    }

    let request_reader = FileSystemReader::new();
    eprintln!("📖 Loading request from: {}", args.request.display());
    let request = request_reader.read_request(&args.request)?;

    let registry = ProviderRegistry::with_defaults()?;
    let orchestrator =
        AnalysisOrchestrator::new(config, registry, SystemClock, StderrProgressReporter::new());

    let result = orchestrator
        .run_analysis(&request, args.model.as_deref())
        .await?;

    eprintln!("{}", risk_line(result.risk_level()));

    eprintln!("{}", FormatterFactory::progress_message(args.format));
    let formatter = FormatterFactory::create(args.format);
    let formatted_output = formatter.format(&result)?;

    let presenter = PresenterFactory::create(PresenterType::from_output(args.output));
    presenter.present(&formatted_output)?;

    let gate = RiskGate::new(args.fail_on);
    if gate.trips(&result) {
        if let Some(threshold) = gate.threshold() {
            eprintln!(
                "⚠️  Overall risk {} is at or above the --fail-on threshold {}",
                result.risk_level(),
                threshold
            );
        }
        return Ok(ExitCode::RiskAboveThreshold);
    }

    Ok(ExitCode::Success)
}

fn load_config(args: &Args) -> Result<AppConfig> {
    if let Some(path) = &args.config {
        return load_config_from_path(path);
    }

    let cwd = std::env::current_dir()?;
    Ok(discover_config(&cwd)?.unwrap_or_default())
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn risk_line(risk: Severity) -> String {
    let label = match risk {
        Severity::Low => risk.green().to_string(),
        Severity::Medium => risk.yellow().to_string(),
        Severity::High => risk.red().to_string(),
        Severity::Critical => risk.bright_red().bold().to_string(),
    };
    format!("📊 Overall risk: {}", label)
}

/// Problems with the request file are argument errors; everything else is an application error
fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<AppError>() {
        Some(AppError::RequestNotFound { .. })
        | Some(AppError::RequestParseError { .. })
        | Some(AppError::Validation { .. }) => ExitCode::InvalidArguments,
        _ => ExitCode::ApplicationError,
    }
}
