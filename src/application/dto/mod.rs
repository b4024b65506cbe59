/// Data Transfer Objects for application layer
///
/// DTOs carry caller choices (output format, risk gate) between the CLI
/// and the application services.
mod output_format;
mod risk_gate;

pub use output_format::OutputFormat;
pub use risk_gate::RiskGate;
