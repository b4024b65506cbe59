/// Inbound ports - entry points into the analysis core
///
/// The CLI drives the application only through these traits.
pub mod impact_analysis_port;

pub use impact_analysis_port::ImpactAnalysisPort;
