/// Port traits for the impact analyzer
///
/// `inbound` is what drives the analysis (the CLI calls it); `outbound` is
/// what the analysis drives: providers, request files, formatters, console
/// and the clock.
pub mod inbound;
pub mod outbound;
